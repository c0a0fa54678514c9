//! Identity directory sync.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use pawmart_core::error::AppError;
use pawmart_core::types::Fields;
use pawmart_database::repositories::DirectoryRepository;
use pawmart_entity::directory::DirectoryEntry;

use crate::context::RequestContext;

/// Payload keys naming the identity to sync, in order of preference.
const IDENTITY_KEYS: &[&str] = &["email", "identity"];

/// Keeps one directory record per identity.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// Directory repository.
    directory_repo: Arc<DirectoryRepository>,
    /// Whether syncing requires the caller to be the synced identity.
    require_authentication: bool,
}

/// Result of a directory sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncOutcome {
    /// Directory record id.
    pub id: Uuid,
    /// `true` when this sync created the record.
    pub inserted: bool,
    /// The record as stored after the sync.
    pub entry: DirectoryEntry,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(directory_repo: Arc<DirectoryRepository>, require_authentication: bool) -> Self {
        Self {
            directory_repo,
            require_authentication,
        }
    }

    /// Whether `sync` needs an authenticated caller.
    pub fn requires_authentication(&self) -> bool {
        self.require_authentication
    }

    /// Creates or fully replaces the directory record for the payload's identity.
    ///
    /// Repeating the same payload converges on a single record.
    pub async fn sync(
        &self,
        ctx: Option<&RequestContext>,
        mut payload: Fields,
    ) -> Result<SyncOutcome, AppError> {
        let identity = IDENTITY_KEYS
            .iter()
            .filter_map(|key| payload.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("email is required"))?;

        if self.require_authentication {
            let ctx = ctx.ok_or_else(|| AppError::unauthenticated("Missing bearer token"))?;
            if !ctx.is(&identity) {
                warn!(identity = %ctx.identity, target = %identity, "Directory sync for another identity");
                return Err(AppError::forbidden(
                    "Only the authenticated identity may be synced",
                ));
            }
        }

        payload.remove("identity");
        let attributes = DirectoryEntry::sanitize_attributes(payload);
        let now = ctx.map_or_else(chrono::Utc::now, |c| c.request_time);

        let (entry, outcome) = self.directory_repo.upsert(&identity, attributes, now).await?;

        info!(
            identity = %identity,
            inserted = outcome.was_inserted(),
            "Directory entry synced"
        );

        Ok(SyncOutcome {
            id: outcome.id(),
            inserted: outcome.was_inserted(),
            entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ctx;
    use pawmart_core::error::ErrorKind;
    use pawmart_database::store::MemoryDocumentStore;
    use serde_json::json;

    fn service(require_authentication: bool) -> DirectoryService {
        let store = Arc::new(MemoryDocumentStore::new());
        DirectoryService::new(
            Arc::new(DirectoryRepository::new(store)),
            require_authentication,
        )
    }

    fn payload(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_repeated_sync_converges_on_one_record() {
        let svc = service(false);
        let body = json!({"email": "a@x.com", "name": "Ana"});

        let first = svc.sync(None, payload(body.clone())).await.unwrap();
        let second = svc.sync(None, payload(body)).await.unwrap();

        assert!(first.inserted);
        assert!(!second.inserted);
        assert_eq!(first.id, second.id);
        assert_eq!(second.entry.created_at, first.entry.created_at);
    }

    #[tokio::test]
    async fn test_identity_alias_is_accepted() {
        let svc = service(false);
        let outcome = svc
            .sync(None, payload(json!({"identity": "b@x.com", "name": "Bo"})))
            .await
            .unwrap();

        assert_eq!(outcome.entry.email, "b@x.com");
        assert!(outcome.entry.attributes.get("identity").is_none());
    }

    #[tokio::test]
    async fn test_missing_identity_is_rejected() {
        let err = service(false)
            .sync(None, payload(json!({"name": "Nobody"})))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_required_authentication() {
        let svc = service(true);
        let body = json!({"email": "a@x.com", "name": "Ana"});

        let err = svc.sync(None, payload(body.clone())).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);

        let err = svc
            .sync(Some(&ctx("b@x.com")), payload(body.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        assert!(svc.sync(Some(&ctx("a@x.com")), payload(body)).await.is_ok());
    }
}
