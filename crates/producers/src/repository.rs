//! Producer repository port.
//!
//! Stores report precise, typed failures; use cases match on [`StoreError`]
//! variants directly.

use std::sync::Arc;

use thiserror::Error;

use agrireg_core::ProducerId;

use crate::producer::{Farm, NewProducer, Producer, ProducerUpdate};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("producer not found")]
    NotFound,

    #[error("producer with this document already exists")]
    AlreadyExists,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The id map and document index disagree. Never expected in correct operation.
    #[error("internal inconsistency: {0}")]
    Inconsistent(String),
}

impl StoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::Inconsistent(msg.into())
    }
}

/// Producer storage with two access paths: by id and by document.
///
/// Implementations must make every operation atomic with respect to the
/// others (document uniqueness is checked and enforced in one step).
pub trait ProducerRepository: Send + Sync {
    /// Insert a new producer, assigning its id and timestamps.
    ///
    /// Fails with `AlreadyExists` when another producer holds the same
    /// non-empty document.
    fn create(&self, draft: NewProducer) -> StoreResult<Producer>;

    /// Fails with `InvalidArgument` on an empty document.
    fn find_by_document(&self, document: &str) -> StoreResult<Producer>;

    /// All producers, in no particular order.
    fn find_all(&self) -> StoreResult<Vec<Producer>>;

    fn get_by_id(&self, id: ProducerId) -> StoreResult<Producer>;

    /// Replace name/country/document/farms of an existing producer.
    ///
    /// A `None` document or farm list keeps the stored value, read under
    /// the same exclusive access as the write.
    fn update(&self, changes: ProducerUpdate) -> StoreResult<Producer>;

    fn delete(&self, id: ProducerId) -> StoreResult<()>;

    /// Append a farm to an existing producer.
    fn add_farm(&self, id: ProducerId, farm: Farm) -> StoreResult<Producer>;
}

impl<R> ProducerRepository for Arc<R>
where
    R: ProducerRepository + ?Sized,
{
    fn create(&self, draft: NewProducer) -> StoreResult<Producer> {
        (**self).create(draft)
    }

    fn find_by_document(&self, document: &str) -> StoreResult<Producer> {
        (**self).find_by_document(document)
    }

    fn find_all(&self) -> StoreResult<Vec<Producer>> {
        (**self).find_all()
    }

    fn get_by_id(&self, id: ProducerId) -> StoreResult<Producer> {
        (**self).get_by_id(id)
    }

    fn update(&self, changes: ProducerUpdate) -> StoreResult<Producer> {
        (**self).update(changes)
    }

    fn delete(&self, id: ProducerId) -> StoreResult<()> {
        (**self).delete(id)
    }

    fn add_farm(&self, id: ProducerId, farm: Farm) -> StoreResult<Producer> {
        (**self).add_farm(id, farm)
    }
}
