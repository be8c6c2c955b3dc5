//! Generated-kubeconfig constants.

/// Cluster name used in every generated bootstrap kubeconfig.
pub const GARDEN_CLUSTER_NAME: &str = "garden";

/// Secret data key holding the service-account bearer token (base64).
pub const SECRET_TOKEN_KEY: &str = "token";

/// Secret data key holding the cluster CA certificate bundle (base64).
pub const SECRET_CA_KEY: &str = "ca.crt";
