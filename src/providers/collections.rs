//! Collection registry.
//!
//! A collection is a named, ordered field list scoped to one project. The
//! field list is stored verbatim: empty lists and repeated field names are
//! accepted.

use super::{find_entities, find_entity};
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::model::{Collection, CollectionId, Project, ProjectId, User, UserId, to_document};
use crate::quota::QuotaPolicy;
use crate::schema::FieldSchema;
use crate::storage::{DocumentKind, DocumentStore, Filter};
use chrono::Utc;
use log::{debug, info, trace, warn};

/// Collections stored in a document store.
#[derive(Debug, Clone)]
pub struct CollectionRegistry<S: DocumentStore> {
    storage: S,
    quota: QuotaPolicy,
}

impl<S: DocumentStore> CollectionRegistry<S> {
    /// Create a registry over the given store.
    pub fn new(storage: S, config: CoreConfig) -> Self {
        Self {
            storage,
            quota: config.collection_policy(),
        }
    }

    /// Create a collection in `project_id`.
    ///
    /// Fails `InvalidReference` if the project or its owner does not exist,
    /// and `QuotaExceeded` if a non-upgraded owner's project is at the
    /// collection cap.
    pub async fn create(
        &self,
        project_id: &str,
        name: impl Into<String>,
        fields: Vec<FieldSchema>,
    ) -> CoreResult<Collection> {
        let project_id = ProjectId::parse(project_id)?;
        let project: Project = find_entity(
            &self.storage,
            DocumentKind::Projects,
            Filter::by_id(project_id.to_string()),
        )
        .await?
        .ok_or_else(|| CoreError::invalid_reference(ProjectId::KIND, project_id.to_string()))?;

        let owner: User = find_entity(
            &self.storage,
            DocumentKind::Users,
            Filter::by_id(project.user_id.to_string()),
        )
        .await?
        .ok_or_else(|| CoreError::invalid_reference(UserId::KIND, project.user_id.to_string()))?;

        let current = self
            .storage
            .count(
                DocumentKind::Collections,
                Filter::new().and("projectId", project_id),
            )
            .await
            .map_err(CoreError::store)?;
        if let Err(e) = self.quota.check(owner.is_upgraded, current) {
            warn!(
                "Rejected collection creation in project '{}': {}",
                project_id, e
            );
            return Err(e);
        }

        let now = Utc::now();
        let collection = Collection {
            id: CollectionId::generate(),
            project_id,
            name: name.into(),
            fields,
            created_at: now,
            updated_at: now,
        };

        info!(
            "Creating collection '{}' ({}) with {} fields in project '{}'",
            collection.name,
            collection.id,
            collection.fields.len(),
            project_id
        );
        let document = to_document(&collection)?;
        trace!("Collection document: {}", document);

        self.storage
            .insert(DocumentKind::Collections, document)
            .await
            .map_err(CoreError::store)?;
        Ok(collection)
    }

    /// All collections of `project_id`, in store order.
    pub async fn list_by_project(&self, project_id: &str) -> CoreResult<Vec<Collection>> {
        let project_id = ProjectId::parse(project_id)?;
        debug!("Listing collections for project '{}'", project_id);

        find_entities(
            &self.storage,
            DocumentKind::Collections,
            Filter::new().and("projectId", project_id),
        )
        .await
    }

    /// Look up a collection.
    pub async fn get_by_id(&self, collection_id: &str) -> CoreResult<Collection> {
        let id = CollectionId::parse(collection_id)?;
        debug!("Getting collection '{}'", id);

        find_entity(
            &self.storage,
            DocumentKind::Collections,
            Filter::by_id(id.to_string()),
        )
        .await?
        .ok_or_else(|| CoreError::not_found(CollectionId::KIND, collection_id))
    }

    /// Delete a collection. Its records are left in place.
    pub async fn delete(&self, collection_id: &str) -> CoreResult<()> {
        let id = CollectionId::parse(collection_id)?;
        info!("Deleting collection '{}'", id);

        let deleted = self
            .storage
            .delete_one(DocumentKind::Collections, Filter::by_id(id.to_string()))
            .await
            .map_err(CoreError::store)?;
        if deleted == 0 {
            return Err(CoreError::not_found(CollectionId::KIND, collection_id));
        }
        Ok(())
    }
}
