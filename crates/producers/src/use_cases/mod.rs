//! Use cases: orchestration of validator + repository per operation.

pub mod register;
pub mod update_profile;

pub use register::{CreateProducerRequest, RegisterProducer, RegistrationError};
pub use update_profile::{ProfileUpdateError, UpdateProducerProfile, UpdateProfileRequest};
