//! Edit a producer's profile (name, country and optionally document).

use thiserror::Error;

use agrireg_core::{Entity, ProducerId};

use crate::document::DocumentValidator;
use crate::producer::{Producer, ProducerUpdate};
use crate::profile::{ProfileError, validate_profile};
use crate::repository::{ProducerRepository, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    pub id: ProducerId,
    pub name: String,
    pub country: String,
    /// `None` keeps the current document.
    pub document: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileUpdateError {
    #[error("producer not found")]
    NotFound,

    #[error("invalid producer name")]
    InvalidName,

    #[error("invalid producer country")]
    InvalidCountry,

    #[error("invalid document")]
    InvalidDocument,

    #[error("producer with this document already exists")]
    AlreadyExists,

    #[error(transparent)]
    Unexpected(StoreError),
}

impl From<ProfileError> for ProfileUpdateError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::InvalidName => Self::InvalidName,
            ProfileError::InvalidCountry => Self::InvalidCountry,
        }
    }
}

impl From<StoreError> for ProfileUpdateError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            StoreError::AlreadyExists => Self::AlreadyExists,
            other => Self::Unexpected(other),
        }
    }
}

/// Applies a new profile to a stored producer.
///
/// Farms are carried over untouched, including any added while the update
/// is in flight.
#[derive(Debug, Clone)]
pub struct UpdateProducerProfile<R, V> {
    repository: R,
    validator: V,
}

impl<R, V> UpdateProducerProfile<R, V>
where
    R: ProducerRepository,
    V: DocumentValidator,
{
    pub fn new(repository: R, validator: V) -> Self {
        Self { repository, validator }
    }

    pub fn execute(&self, request: UpdateProfileRequest) -> Result<Producer, ProfileUpdateError> {
        validate_profile(&request.name, &request.country)?;
        let document = match request.document.as_deref() {
            Some(document) if document.is_empty() || self.validator.validate(document).is_err() => {
                return Err(ProfileUpdateError::InvalidDocument);
            }
            Some(document) => Some(self.validator.normalize(document)),
            None => None,
        };

        // One store call: farms (and the document when `None`) are read
        // from the stored record under the store's own lock.
        let mut changes = ProducerUpdate::profile(request.id, request.name, request.country);
        changes.document = document;
        let updated = self.repository.update(changes)?;
        tracing::info!(producer_id = %updated.id(), "producer profile updated");
        Ok(updated)
    }
}
