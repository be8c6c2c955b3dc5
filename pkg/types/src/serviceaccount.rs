use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::meta::{ObjectMeta, ObjectRef};

/// A namespaced service-account object from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccount {
    pub metadata: ObjectMeta,
    /// Bound token secrets, in binding order.
    #[serde(default)]
    pub secrets: Vec<ObjectRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    pub metadata: ObjectMeta,
    /// Secret data stored as base64-encoded values.
    #[serde(default)]
    pub data: HashMap<String, String>,
}
