//! RBAC / membership constants.

/// API group stamped on every project member entry.
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// Prefix of the canonical service-account username
/// `system:serviceaccount:<namespace>:<name>`.
pub const SERVICE_ACCOUNT_PREFIX: &str = "system:serviceaccount";

/// Annotation recording which user created a project-managed service account.
pub const CREATED_BY_ANNOTATION: &str = "garden.sapcloud.io/createdBy";
