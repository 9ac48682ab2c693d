//! Record store.
//!
//! Writes are validated against the owning collection's field list as it is
//! stored at the time of the write. Nothing is written when validation fails.

use super::{find_entities, find_entity, timestamp};
use crate::error::{CoreError, CoreResult};
use crate::model::{Collection, CollectionId, Record, RecordData, RecordId, RecordVersion, to_document};
use crate::schema::SchemaValidator;
use crate::storage::{DocumentKind, DocumentStore, Filter};
use chrono::Utc;
use log::{debug, info, trace, warn};
use serde_json::{Map, Value};

/// Records stored in a document store.
#[derive(Debug, Clone)]
pub struct RecordStore<S: DocumentStore> {
    storage: S,
}

impl<S: DocumentStore> RecordStore<S> {
    /// Create a record store over the given store.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn find_collection(&self, id: CollectionId) -> CoreResult<Option<Collection>> {
        find_entity(
            &self.storage,
            DocumentKind::Collections,
            Filter::by_id(id.to_string()),
        )
        .await
    }

    fn validate(collection: &Collection, data: &RecordData) -> CoreResult<()> {
        trace!("Validating record data: {}", Value::Object(data.clone()));
        SchemaValidator::validate(&collection.fields, data).map_err(|e| {
            warn!(
                "Rejected record for collection '{}': {}",
                collection.id, e
            );
            CoreError::from(e)
        })
    }

    /// Create a record in `collection_id`.
    ///
    /// `data` is stored verbatim, including keys the schema does not declare.
    /// Fails `NotFound` if the collection does not exist.
    pub async fn create(&self, collection_id: &str, data: RecordData) -> CoreResult<Record> {
        let collection_id = CollectionId::parse(collection_id)?;
        let collection = self
            .find_collection(collection_id)
            .await?
            .ok_or_else(|| CoreError::not_found(CollectionId::KIND, collection_id.to_string()))?;

        Self::validate(&collection, &data)?;

        let now = Utc::now();
        let record = Record {
            id: RecordId::generate(),
            collection_id,
            data,
            created_at: now,
            updated_at: now,
        };

        info!(
            "Creating record '{}' in collection '{}'",
            record.id, collection_id
        );
        self.storage
            .insert(DocumentKind::Records, to_document(&record)?)
            .await
            .map_err(CoreError::store)?;
        Ok(record)
    }

    /// All records of `collection_id`, in store order.
    pub async fn list_by_collection(&self, collection_id: &str) -> CoreResult<Vec<Record>> {
        let collection_id = CollectionId::parse(collection_id)?;
        debug!("Listing records for collection '{}'", collection_id);

        find_entities(
            &self.storage,
            DocumentKind::Records,
            Filter::new().and("collectionId", collection_id),
        )
        .await
    }

    /// Look up a record.
    pub async fn get_by_id(&self, record_id: &str) -> CoreResult<Record> {
        let id = RecordId::parse(record_id)?;
        debug!("Getting record '{}'", id);

        find_entity(&self.storage, DocumentKind::Records, Filter::by_id(id.to_string()))
            .await?
            .ok_or_else(|| CoreError::not_found(RecordId::KIND, record_id))
    }

    /// Replace a record's data.
    ///
    /// The new data is validated against the collection's current field list
    /// and replaces the old data entirely; no keys are merged. Fails
    /// `InvalidReference` if the owning collection no longer exists.
    pub async fn update(&self, record_id: &str, data: RecordData) -> CoreResult<Record> {
        let existing = self.get_by_id(record_id).await?;
        self.replace(existing, data, None).await
    }

    /// Replace a record's data only if it still has version `expected`.
    ///
    /// Fails `VersionMismatch` when the stored data has changed, including
    /// when it changes between the check and the write.
    pub async fn update_if_match(
        &self,
        record_id: &str,
        data: RecordData,
        expected: &RecordVersion,
    ) -> CoreResult<Record> {
        let existing = self.get_by_id(record_id).await?;
        let current = existing.version();
        if &current != expected {
            warn!(
                "Version mismatch on record '{}': expected {}, current {}",
                existing.id, expected, current
            );
            return Err(CoreError::VersionMismatch {
                expected: expected.to_string(),
                current: current.to_string(),
            });
        }
        self.replace(existing, data, Some(expected)).await
    }

    async fn replace(
        &self,
        existing: Record,
        data: RecordData,
        expected: Option<&RecordVersion>,
    ) -> CoreResult<Record> {
        let collection = self
            .find_collection(existing.collection_id)
            .await?
            .ok_or_else(|| {
                CoreError::invalid_reference(CollectionId::KIND, existing.collection_id.to_string())
            })?;

        Self::validate(&collection, &data)?;

        info!("Updating record '{}'", existing.id);
        let now = Utc::now();
        let mut fields = Map::new();
        fields.insert("data".to_string(), Value::Object(data.clone()));
        fields.insert("updatedAt".to_string(), timestamp(now)?);

        let mut filter = Filter::by_id(existing.id.to_string());
        if expected.is_some() {
            // Only write over the data the version was computed from
            filter = filter.and("data", Value::Object(existing.data.clone()));
        }

        let matched = self
            .storage
            .update_one(DocumentKind::Records, filter, fields)
            .await
            .map_err(CoreError::store)?;

        if matched == 0 {
            return match expected {
                Some(expected) => {
                    let current = self.get_by_id(&existing.id.to_string()).await?.version();
                    Err(CoreError::VersionMismatch {
                        expected: expected.to_string(),
                        current: current.to_string(),
                    })
                }
                None => Err(CoreError::not_found(RecordId::KIND, existing.id.to_string())),
            };
        }

        Ok(Record {
            data,
            updated_at: now,
            ..existing
        })
    }

    /// Delete a record.
    pub async fn delete(&self, record_id: &str) -> CoreResult<()> {
        let id = RecordId::parse(record_id)?;
        info!("Deleting record '{}'", id);

        let deleted = self
            .storage
            .delete_one(DocumentKind::Records, Filter::by_id(id.to_string()))
            .await
            .map_err(CoreError::store)?;
        if deleted == 0 {
            return Err(CoreError::not_found(RecordId::KIND, record_id));
        }
        Ok(())
    }
}
