//! Register a new producer.

use thiserror::Error;

use agrireg_core::Entity;

use crate::document::DocumentValidator;
use crate::producer::{NewProducer, Producer};
use crate::repository::{ProducerRepository, StoreError};

/// Input of the registration use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProducerRequest {
    pub document: String,
    pub name: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("invalid name for producer")]
    InvalidName,

    #[error("invalid document")]
    InvalidDocument,

    #[error("producer with this document already exists")]
    AlreadyExists,

    /// Any other store failure, passed through untouched.
    #[error(transparent)]
    Unexpected(StoreError),
}

/// Validates the request, then asks the repository to create the producer.
///
/// Document uniqueness is the repository's job; this use case only
/// translates its `AlreadyExists` into [`RegistrationError::AlreadyExists`].
#[derive(Debug, Clone)]
pub struct RegisterProducer<R, V> {
    repository: R,
    validator: V,
}

impl<R, V> RegisterProducer<R, V>
where
    R: ProducerRepository,
    V: DocumentValidator,
{
    pub fn new(repository: R, validator: V) -> Self {
        Self { repository, validator }
    }

    pub fn execute(&self, request: CreateProducerRequest) -> Result<Producer, RegistrationError> {
        if request.name.is_empty() {
            tracing::debug!("registration rejected: empty name");
            return Err(RegistrationError::InvalidName);
        }
        if request.document.is_empty() {
            tracing::debug!("registration rejected: empty document");
            return Err(RegistrationError::InvalidDocument);
        }
        if let Err(reason) = self.validator.validate(&request.document) {
            tracing::debug!(%reason, "registration rejected: document failed validation");
            return Err(RegistrationError::InvalidDocument);
        }

        let document = self.validator.normalize(&request.document);
        let draft = NewProducer::new(document, request.name);
        match self.repository.create(draft) {
            Ok(producer) => {
                tracing::info!(producer_id = %producer.id(), "producer registered");
                Ok(producer)
            }
            Err(StoreError::AlreadyExists) => Err(RegistrationError::AlreadyExists),
            Err(e) => {
                tracing::error!(error = %e, "producer store failed during registration");
                Err(RegistrationError::Unexpected(e))
            }
        }
    }
}
