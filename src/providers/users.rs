//! User directory.
//!
//! Identity, credentials and sessions belong to the host. The directory only
//! keeps what the quota rules need to know about an owner.

use super::{find_entity, timestamp};
use crate::error::{CoreError, CoreResult};
use crate::model::{User, UserId, to_document};
use crate::storage::{DocumentKind, DocumentStore, Filter};
use chrono::Utc;
use log::{debug, info, trace};
use serde_json::{Map, Value};

/// Users stored in a document store.
#[derive(Debug, Clone)]
pub struct UserDirectory<S: DocumentStore> {
    storage: S,
}

impl<S: DocumentStore> UserDirectory<S> {
    /// Create a directory over the given store.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Register a new, non-upgraded user.
    pub async fn create(
        &self,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> CoreResult<User> {
        let now = Utc::now();
        let user = User {
            id: UserId::generate(),
            full_name: full_name.into(),
            email: email.into(),
            is_upgraded: false,
            created_at: now,
            updated_at: now,
        };

        info!("Creating user '{}'", user.id);
        let document = to_document(&user)?;
        trace!("User document: {}", document);

        self.storage
            .insert(DocumentKind::Users, document)
            .await
            .map_err(CoreError::store)?;
        Ok(user)
    }

    /// Look up a user.
    ///
    /// Fails `InvalidId` for a malformed id and `NotFound` when absent.
    pub async fn get_by_id(&self, user_id: &str) -> CoreResult<User> {
        let id = UserId::parse(user_id)?;
        debug!("Getting user '{}'", id);

        find_entity(&self.storage, DocumentKind::Users, Filter::by_id(id.to_string()))
            .await?
            .ok_or_else(|| CoreError::not_found(UserId::KIND, user_id))
    }

    /// Set or clear a user's upgrade flag.
    pub async fn set_upgraded(&self, user_id: &str, upgraded: bool) -> CoreResult<User> {
        let id = UserId::parse(user_id)?;
        info!("Setting upgraded={} for user '{}'", upgraded, id);

        let mut fields = Map::new();
        fields.insert("isUpgraded".to_string(), Value::Bool(upgraded));
        fields.insert("updatedAt".to_string(), timestamp(Utc::now())?);

        let matched = self
            .storage
            .update_one(DocumentKind::Users, Filter::by_id(id.to_string()), fields)
            .await
            .map_err(CoreError::store)?;
        if matched == 0 {
            return Err(CoreError::not_found(UserId::KIND, user_id));
        }

        self.get_by_id(user_id).await
    }
}
