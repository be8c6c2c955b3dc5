//! Bootstrap kubeconfig assembly for project-managed service accounts.
//!
//! Pure transformation: the document is built from values the caller has
//! already fetched and is rendered fresh on every read, never persisted.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use pkg_constants::kubeconfig::{GARDEN_CLUSTER_NAME, SECRET_CA_KEY, SECRET_TOKEN_KEY};
use pkg_types::identity::service_account_username;
use pkg_types::serviceaccount::{Secret, ServiceAccount};

use crate::error::MemberError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub clusters: Vec<NamedCluster>,
    pub contexts: Vec<NamedContext>,
    #[serde(rename = "current-context")]
    pub current_context: String,
    pub users: Vec<NamedUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedCluster {
    pub name: String,
    pub cluster: Cluster,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub server: String,
    /// Base64-encoded CA bundle, carried verbatim from the token secret.
    #[serde(
        rename = "certificate-authority-data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_authority_data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedContext {
    pub name: String,
    pub context: Context,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    pub cluster: String,
    pub user: String,
    pub namespace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedUser {
    pub name: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub token: String,
}

impl Kubeconfig {
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Assemble a bootstrap kubeconfig for a project-managed service account.
///
/// The cluster is always named `garden`; the context is
/// `garden-<project>-<full identity>`.
pub fn build_kubeconfig(
    short_name: &str,
    namespace: &str,
    project_name: &str,
    token: &str,
    server: &str,
    ca_data: Option<&str>,
) -> Kubeconfig {
    let username = service_account_username(namespace, short_name);
    let context_name = format!("{}-{}-{}", GARDEN_CLUSTER_NAME, project_name, username);
    Kubeconfig {
        api_version: "v1".to_string(),
        kind: "Config".to_string(),
        clusters: vec![NamedCluster {
            name: GARDEN_CLUSTER_NAME.to_string(),
            cluster: Cluster {
                server: server.to_string(),
                certificate_authority_data: ca_data.map(str::to_string),
            },
        }],
        contexts: vec![NamedContext {
            name: context_name.clone(),
            context: Context {
                cluster: GARDEN_CLUSTER_NAME.to_string(),
                user: short_name.to_string(),
                namespace: namespace.to_string(),
            },
        }],
        current_context: context_name,
        users: vec![NamedUser {
            name: short_name.to_string(),
            user: User {
                token: token.to_string(),
            },
        }],
    }
}

/// Name of the first bound token secret of a service account.
pub fn bound_secret_name(account: &ServiceAccount) -> Result<&str, MemberError> {
    account
        .secrets
        .first()
        .map(|s| s.name.as_str())
        .ok_or_else(|| MemberError::NoBoundSecret {
            namespace: account.metadata.namespace.clone(),
            name: account.metadata.name.clone(),
        })
}

/// Extract the bearer token and CA bundle from a bound token secret.
///
/// The token is stored base64-encoded and is decoded to UTF-8; the CA
/// bundle stays base64 because the kubeconfig carries it verbatim.
pub fn bootstrap_credentials(secret: &Secret) -> Result<(String, Option<String>), MemberError> {
    let encoded =
        secret
            .data
            .get(SECRET_TOKEN_KEY)
            .ok_or_else(|| MemberError::CredentialMissing {
                secret: secret.metadata.name.clone(),
                key: SECRET_TOKEN_KEY,
            })?;
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| MemberError::InvalidCredential {
            secret: secret.metadata.name.clone(),
            reason: e.to_string(),
        })?;
    let token = String::from_utf8(bytes).map_err(|e| MemberError::InvalidCredential {
        secret: secret.metadata.name.clone(),
        reason: e.to_string(),
    })?;
    let ca_data = secret.data.get(SECRET_CA_KEY).cloned();
    Ok((token, ca_data))
}
