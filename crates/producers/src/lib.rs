//! Producers domain module (rural producers identified by CPF/CNPJ).
//!
//! This crate holds the producer aggregate, the document validator, the
//! repository port and the use cases that orchestrate them. Storage and HTTP
//! live elsewhere (`agrireg-infra`, `agrireg-api`).

pub mod document;
pub mod producer;
pub mod profile;
pub mod repository;
pub mod use_cases;

pub use document::{CpfCnpjValidator, DocumentValidator, InvalidDocument};
pub use producer::{Farm, NewProducer, Producer, ProducerUpdate};
pub use profile::{ProfileError, validate_profile};
pub use repository::{ProducerRepository, StoreError, StoreResult};
pub use use_cases::{
    CreateProducerRequest, ProfileUpdateError, RegisterProducer, RegistrationError,
    UpdateProducerProfile, UpdateProfileRequest,
};
