//! Narrow interfaces over the external declarative store.
//!
//! The store client itself lives outside this crate; operations here are
//! injected as trait objects so tests can run against in-memory mocks.

use async_trait::async_trait;
use thiserror::Error;

use pkg_types::project::{Project, ProjectPatch};
use pkg_types::serviceaccount::{Secret, ServiceAccount};

/// Failures reported by the external declarative store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named object does not exist.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// The named object existed but has been removed (HTTP 410 semantics).
    #[error("{kind} '{name}' is gone")]
    Gone { kind: &'static str, name: String },

    /// Any other collaborator failure (network, permission, malformed
    /// data). Propagated unchanged, never retried.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl StoreError {
    /// True when the store reports the object as absent (404 or 410).
    pub fn is_absent(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::Gone { .. })
    }
}

/// Read/patch access to project resources.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Resolve the name of the project owning `namespace`.
    async fn project_name_for_namespace(&self, namespace: &str) -> Result<String, StoreError>;

    async fn get(&self, name: &str) -> Result<Project, StoreError>;

    /// Submit a merge-patch against the project, returning the patched
    /// resource as the store sees it afterwards. One attempt, no
    /// conflict retry.
    async fn merge_patch(&self, name: &str, patch: ProjectPatch) -> Result<Project, StoreError>;
}

/// Access to the service accounts of a namespace.
#[async_trait]
pub trait ServiceAccountStore: Send + Sync {
    async fn list(&self, namespace: &str) -> Result<Vec<ServiceAccount>, StoreError>;

    async fn get(&self, namespace: &str, name: &str) -> Result<ServiceAccount, StoreError>;

    async fn create(
        &self,
        namespace: &str,
        body: ServiceAccount,
    ) -> Result<ServiceAccount, StoreError>;

    async fn delete(&self, namespace: &str, name: &str) -> Result<(), StoreError>;
}

/// Read access to the secrets of a namespace.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, StoreError>;
}
