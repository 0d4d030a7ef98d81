use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use agrireg_core::{Entity, ProducerId};
use agrireg_producers::{
    Farm, NewProducer, Producer, ProducerRepository, ProducerUpdate, StoreError, StoreResult,
};

/// Both access paths, guarded together by one lock.
#[derive(Debug, Default)]
struct Indexes {
    producers: HashMap<ProducerId, Producer>,
    /// Non-empty documents only.
    by_document: HashMap<String, ProducerId>,
}

/// In-memory producer store for tests/dev.
///
/// Mutations hold the write lock for their whole duration, so the
/// uniqueness check and the insert are a single atomic step.
#[derive(Debug, Default)]
pub struct InMemoryProducerRepository {
    inner: RwLock<Indexes>,
}

impl InMemoryProducerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Indexes>> {
        self.inner
            .read()
            .map_err(|_| StoreError::inconsistent("producer store lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Indexes>> {
        self.inner
            .write()
            .map_err(|_| StoreError::inconsistent("producer store lock poisoned"))
    }
}

impl ProducerRepository for InMemoryProducerRepository {
    fn create(&self, draft: NewProducer) -> StoreResult<Producer> {
        let mut idx = self.write()?;

        if !draft.document.is_empty()
            && idx.producers.values().any(|p| p.document() == draft.document)
        {
            return Err(StoreError::AlreadyExists);
        }

        let producer = Producer::register(ProducerId::new(), draft, Utc::now());
        let id = *producer.id();
        if !producer.document().is_empty() {
            idx.by_document.insert(producer.document().to_string(), id);
        }
        idx.producers.insert(id, producer.clone());

        tracing::debug!(producer_id = %id, "producer created");
        Ok(producer)
    }

    fn find_by_document(&self, document: &str) -> StoreResult<Producer> {
        if document.is_empty() {
            return Err(StoreError::invalid_argument("document cannot be empty"));
        }

        let idx = self.read()?;
        let id = idx.by_document.get(document).ok_or(StoreError::NotFound)?;
        match idx.producers.get(id) {
            Some(p) if p.document() == document => Ok(p.clone()),
            Some(_) => {
                tracing::error!(producer_id = %id, "document index points at a producer with another document");
                Err(StoreError::inconsistent(
                    "document index points at a producer with another document",
                ))
            }
            None => {
                tracing::error!(producer_id = %id, "document index points at a missing producer");
                Err(StoreError::inconsistent(
                    "producer ID found in document index but not in main store",
                ))
            }
        }
    }

    fn find_all(&self) -> StoreResult<Vec<Producer>> {
        let idx = self.read()?;
        Ok(idx.producers.values().cloned().collect())
    }

    fn get_by_id(&self, id: ProducerId) -> StoreResult<Producer> {
        let idx = self.read()?;
        idx.producers.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn update(&self, changes: ProducerUpdate) -> StoreResult<Producer> {
        if changes.id.is_nil() {
            return Err(StoreError::invalid_argument(
                "producer ID cannot be empty for update",
            ));
        }

        let mut idx = self.write()?;
        let current = idx.producers.get(&changes.id).ok_or(StoreError::NotFound)?;
        let previous_doc = current.document().to_string();

        if let Some(document) = changes.document.as_deref() {
            if document != previous_doc && !document.is_empty() {
                let held_by_other = matches!(
                    idx.by_document.get(document),
                    Some(owner) if *owner != changes.id
                );
                if held_by_other {
                    return Err(StoreError::AlreadyExists);
                }
            }
        }

        let updated = current.revised(changes, Utc::now());
        let id = *updated.id();

        if updated.document() != previous_doc {
            if !previous_doc.is_empty() {
                idx.by_document.remove(&previous_doc);
            }
            if !updated.document().is_empty() {
                idx.by_document.insert(updated.document().to_string(), id);
            }
        }
        idx.producers.insert(id, updated.clone());

        tracing::debug!(producer_id = %id, "producer updated");
        Ok(updated)
    }

    fn delete(&self, id: ProducerId) -> StoreResult<()> {
        let mut idx = self.write()?;
        let removed = idx.producers.remove(&id).ok_or(StoreError::NotFound)?;
        if !removed.document().is_empty() {
            idx.by_document.remove(removed.document());
        }

        tracing::debug!(producer_id = %id, "producer deleted");
        Ok(())
    }

    fn add_farm(&self, id: ProducerId, farm: Farm) -> StoreResult<Producer> {
        let mut idx = self.write()?;
        let producer = idx.producers.get_mut(&id).ok_or(StoreError::NotFound)?;
        producer.add_farm(farm, Utc::now());

        tracing::debug!(producer_id = %id, farms = producer.farms().len(), "farm added");
        Ok(producer.clone())
    }
}
