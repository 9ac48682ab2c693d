//! Project registry.
//!
//! Every read and write is scoped to the calling owner: a project that exists
//! but belongs to someone else is reported as not found.

use super::{find_entities, find_entity, timestamp};
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::model::{Project, ProjectId, User, UserId, to_document};
use crate::quota::QuotaPolicy;
use crate::storage::{DocumentKind, DocumentStore, Filter};
use chrono::Utc;
use log::{debug, info, trace, warn};
use serde_json::{Map, Value};

/// Projects stored in a document store.
#[derive(Debug, Clone)]
pub struct ProjectRegistry<S: DocumentStore> {
    storage: S,
    quota: QuotaPolicy,
}

impl<S: DocumentStore> ProjectRegistry<S> {
    /// Create a registry over the given store.
    pub fn new(storage: S, config: CoreConfig) -> Self {
        Self {
            storage,
            quota: config.project_policy(),
        }
    }

    fn owned(project: ProjectId, owner: UserId) -> Filter {
        Filter::by_id(project.to_string()).and("userId", owner)
    }

    /// Create a project for `owner_id`.
    ///
    /// Fails `InvalidReference` if the owner does not exist and
    /// `QuotaExceeded` if a non-upgraded owner is at the project cap.
    pub async fn create(
        &self,
        owner_id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CoreResult<Project> {
        let owner_id = UserId::parse(owner_id)?;
        let owner: User = find_entity(
            &self.storage,
            DocumentKind::Users,
            Filter::by_id(owner_id.to_string()),
        )
        .await?
        .ok_or_else(|| CoreError::invalid_reference(UserId::KIND, owner_id.to_string()))?;

        let current = self
            .storage
            .count(DocumentKind::Projects, Filter::new().and("userId", owner_id))
            .await
            .map_err(CoreError::store)?;
        if let Err(e) = self.quota.check(owner.is_upgraded, current) {
            warn!("Rejected project creation for user '{}': {}", owner_id, e);
            return Err(e);
        }

        let now = Utc::now();
        let project = Project {
            id: ProjectId::generate(),
            user_id: owner_id,
            name: name.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
        };

        info!("Creating project '{}' for user '{}'", project.id, owner_id);
        let document = to_document(&project)?;
        trace!("Project document: {}", document);

        self.storage
            .insert(DocumentKind::Projects, document)
            .await
            .map_err(CoreError::store)?;
        Ok(project)
    }

    /// Look up a project owned by `owner_id`.
    pub async fn get_by_id(&self, project_id: &str, owner_id: &str) -> CoreResult<Project> {
        let id = ProjectId::parse(project_id)?;
        let owner = UserId::parse(owner_id)?;
        debug!("Getting project '{}' for user '{}'", id, owner);

        find_entity(&self.storage, DocumentKind::Projects, Self::owned(id, owner))
            .await?
            .ok_or_else(|| CoreError::not_found(ProjectId::KIND, project_id))
    }

    /// All projects owned by `owner_id`.
    pub async fn list_by_owner(&self, owner_id: &str) -> CoreResult<Vec<Project>> {
        let owner = UserId::parse(owner_id)?;
        debug!("Listing projects for user '{}'", owner);

        find_entities(
            &self.storage,
            DocumentKind::Projects,
            Filter::new().and("userId", owner),
        )
        .await
    }

    /// Rename or re-describe a project owned by `owner_id`.
    pub async fn update(
        &self,
        project_id: &str,
        owner_id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CoreResult<Project> {
        let id = ProjectId::parse(project_id)?;
        let owner = UserId::parse(owner_id)?;
        info!("Updating project '{}' for user '{}'", id, owner);

        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.into()));
        fields.insert("description".to_string(), Value::String(description.into()));
        fields.insert("updatedAt".to_string(), timestamp(Utc::now())?);

        let matched = self
            .storage
            .update_one(DocumentKind::Projects, Self::owned(id, owner), fields)
            .await
            .map_err(CoreError::store)?;
        if matched == 0 {
            return Err(CoreError::not_found(ProjectId::KIND, project_id));
        }

        self.get_by_id(project_id, owner_id).await
    }

    /// Delete a project owned by `owner_id`.
    ///
    /// Collections of the project are left in place.
    pub async fn delete(&self, project_id: &str, owner_id: &str) -> CoreResult<()> {
        let id = ProjectId::parse(project_id)?;
        let owner = UserId::parse(owner_id)?;
        info!("Deleting project '{}' for user '{}'", id, owner);

        let deleted = self
            .storage
            .delete_one(DocumentKind::Projects, Self::owned(id, owner))
            .await
            .map_err(CoreError::store)?;
        if deleted == 0 {
            return Err(CoreError::not_found(ProjectId::KIND, project_id));
        }
        Ok(())
    }
}
