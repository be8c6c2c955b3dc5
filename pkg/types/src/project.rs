use serde::{Deserialize, Serialize};

use crate::meta::ObjectMeta;

/// Kind of a project member entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    User,
    ServiceAccount,
}

/// A single entry in a project's member roster.
///
/// `name` is unique within a project's member list (case-sensitive).
/// Service accounts appear with kind `User` and their canonical
/// `system:serviceaccount:<namespace>:<name>` username.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    pub api_group: String,
    /// Legacy primary role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Additional role identifiers.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A tenant-scoping project resource. Owned by the external store; this
/// core only reads it and submits partial patches against `spec.members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ProjectSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSpec {
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Merge-patch body replacing the full member list:
/// `{"spec":{"members":[...]}}`. Every mutation resubmits the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub spec: ProjectSpecPatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSpecPatch {
    pub members: Vec<Member>,
}

impl ProjectPatch {
    pub fn members(members: Vec<Member>) -> Self {
        Self {
            spec: ProjectSpecPatch { members },
        }
    }
}
