use thiserror::Error;

use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, MemberError>;

/// Errors surfaced by membership operations.
#[derive(Debug, Error)]
pub enum MemberError {
    /// No project maps to the requested namespace.
    #[error("no project found for namespace '{namespace}'")]
    ProjectNotFound { namespace: String },

    #[error("user '{name}' is not a member of project '{project}'")]
    MemberNotFound { name: String, project: String },

    #[error("user '{name}' is already member of this project")]
    AlreadyMember { name: String },

    /// The service account has no bound token secret to derive
    /// credentials from.
    #[error("service account '{namespace}/{name}' has no bound secret")]
    NoBoundSecret { namespace: String, name: String },

    #[error("secret '{secret}' is missing data key '{key}'")]
    CredentialMissing { secret: String, key: &'static str },

    #[error("failed to decode token from secret '{secret}': {reason}")]
    InvalidCredential { secret: String, reason: String },

    #[error("failed to render kubeconfig: {0}")]
    Render(#[from] serde_yaml::Error),

    /// Collaborator failure, propagated unchanged and never retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}
