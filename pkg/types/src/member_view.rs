use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::project::MemberKind;

/// A project member as exposed to callers: the roster entry joined with
/// the metadata of the backing service account (if any) and the role
/// fields flattened into a single ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub username: String,
    pub kind: MemberKind,
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    /// Bootstrap kubeconfig, populated only on single-member reads of a
    /// project-managed service account. Never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<String>,
}
