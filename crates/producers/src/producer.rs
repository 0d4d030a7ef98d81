use chrono::{DateTime, Utc};
use serde::Serialize;

use agrireg_core::{Entity, FarmId, ProducerId};

/// Farm owned by a producer.
///
/// Placeholder sub-resource: carried along with the producer but never
/// validated on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Farm {
    pub id: FarmId,
    pub name: String,
}

impl Farm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FarmId::new(),
            name: name.into(),
        }
    }
}

/// Producer data before the store has assigned identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProducer {
    pub document: String,
    pub name: String,
    pub country: String,
    pub farms: Vec<Farm>,
}

impl NewProducer {
    /// Draft with a document and name only (no country, no farms).
    pub fn new(document: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Aggregate root: Producer.
///
/// `id` and `created_at` never change once stamped; everything else is
/// replaced through [`ProducerUpdate`] or [`Producer::add_farm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Producer {
    id: ProducerId,
    document: String,
    name: String,
    country: String,
    farms: Vec<Farm>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Producer {
    /// Materialize a stored record from a draft (`created_at == updated_at`).
    pub fn register(id: ProducerId, draft: NewProducer, now: DateTime<Utc>) -> Self {
        Self {
            id,
            document: draft.document,
            name: draft.name,
            country: draft.country,
            farms: draft.farms,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Editable copy of the mutable fields, keyed by this producer's id.
    ///
    /// Every field is set, so applying it unchanged is a full-record replace.
    pub fn edit(&self) -> ProducerUpdate {
        ProducerUpdate {
            id: self.id,
            document: Some(self.document.clone()),
            name: self.name.clone(),
            country: self.country.clone(),
            farms: Some(self.farms.clone()),
        }
    }

    /// New version of this record carrying the fields of `changes`.
    ///
    /// `id` and `created_at` are taken from `self`, never from `changes`.
    /// A `None` document or farm list keeps the current value.
    pub fn revised(&self, changes: ProducerUpdate, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            document: changes.document.unwrap_or_else(|| self.document.clone()),
            name: changes.name,
            country: changes.country,
            farms: changes.farms.unwrap_or_else(|| self.farms.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Append a farm; counts as a mutation of the producer.
    pub fn add_farm(&mut self, farm: Farm, now: DateTime<Utc>) {
        self.farms.push(farm);
        self.updated_at = now;
    }
}

impl Entity for Producer {
    type Id = ProducerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Replacement for a stored producer's mutable fields.
///
/// `None` for `document` or `farms` keeps whatever the store holds at the
/// moment the update is applied. A nil `id` is the "unassigned" id and is
/// rejected by stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerUpdate {
    pub id: ProducerId,
    pub document: Option<String>,
    pub name: String,
    pub country: String,
    pub farms: Option<Vec<Farm>>,
}

impl ProducerUpdate {
    /// Name/country change that leaves document and farms as stored.
    pub fn profile(id: ProducerId, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            document: None,
            name: name.into(),
            country: country.into(),
            farms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stored(document: &str, name: &str) -> Producer {
        Producer::register(ProducerId::new(), NewProducer::new(document, name), Utc::now())
    }

    #[test]
    fn new_producer_starts_without_country_or_farms() {
        let draft = NewProducer::new("12345678909", "Valid Name");
        assert_eq!(draft.document, "12345678909");
        assert_eq!(draft.name, "Valid Name");
        assert!(draft.country.is_empty());
        assert!(draft.farms.is_empty());
    }

    #[test]
    fn register_stamps_identical_timestamps() {
        let p = stored("12345678909", "Test Producer");
        assert!(!p.id().is_nil());
        assert_eq!(p.created_at(), p.updated_at());
    }

    #[test]
    fn add_farm_appends_in_order_and_touches_updated_at() {
        let mut p = stored("12345678909", "Test Producer");
        let created = p.created_at();
        let later = created + Duration::milliseconds(5);

        p.add_farm(Farm::new("Green Acres"), later);
        p.add_farm(Farm::new("Blue Valley"), later + Duration::milliseconds(1));

        assert_eq!(p.farms().len(), 2);
        assert_eq!(p.farms()[0].name, "Green Acres");
        assert_eq!(p.farms()[1].name, "Blue Valley");
        assert_eq!(p.created_at(), created);
        assert!(p.updated_at() > created);
    }

    #[test]
    fn revised_keeps_identity_and_creation_time() {
        let p = stored("12345678909", "Old Name");
        let mut changes = p.edit();
        changes.id = ProducerId::new();
        changes.name = "New Name".to_string();
        changes.country = "Brazil".to_string();

        let later = p.created_at() + Duration::seconds(1);
        let next = p.revised(changes, later);

        assert_eq!(next.id(), p.id());
        assert_eq!(next.created_at(), p.created_at());
        assert_eq!(next.updated_at(), later);
        assert_eq!(next.name(), "New Name");
        assert_eq!(next.country(), "Brazil");
    }

    #[test]
    fn profile_update_keeps_document_and_current_farms() {
        let mut p = stored("12345678909", "Old Name");
        let changes = ProducerUpdate::profile(*p.id(), "New Name", "Brazil");
        // Farm lands after the update was prepared.
        p.add_farm(Farm::new("Late Farm"), Utc::now());

        let next = p.revised(changes, Utc::now());

        assert_eq!(next.document(), "12345678909");
        assert_eq!(next.farms().len(), 1);
        assert_eq!(next.farms()[0].name, "Late Farm");
        assert_eq!(next.name(), "New Name");
    }

    #[test]
    fn serializes_with_snake_case_timestamps() {
        let p = stored("12345678909", "Json Producer");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["id"], p.id().to_string());
        assert_eq!(v["document"], "12345678909");
        assert!(v["created_at"].is_string());
        assert!(v["updated_at"].is_string());
        assert!(v["farms"].as_array().unwrap().is_empty());
    }
}
