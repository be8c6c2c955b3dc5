//! Lifecycle of project-managed service-account objects.

use tracing::{debug, info};

use pkg_constants::rbac::CREATED_BY_ANNOTATION;
use pkg_types::meta::ObjectMeta;
use pkg_types::serviceaccount::ServiceAccount;

use crate::error::Result;
use crate::store::ServiceAccountStore;

/// Create the backing service-account object for a project-managed
/// member, annotated with the acting user.
///
/// No uniqueness pre-check: the store enforces it, and a creation
/// conflict surfaces as an upstream error.
pub async fn create_service_account(
    store: &dyn ServiceAccountStore,
    namespace: &str,
    name: &str,
    created_by: &str,
) -> Result<ServiceAccount> {
    let body = ServiceAccount {
        metadata: ObjectMeta {
            name: name.to_string(),
            namespace: namespace.to_string(),
            annotations: [(CREATED_BY_ANNOTATION.to_string(), created_by.to_string())]
                .into_iter()
                .collect(),
            creation_timestamp: None,
        },
        secrets: vec![],
    };
    let account = store.create(namespace, body).await?;
    info!("Created service account {}/{}", namespace, name);
    Ok(account)
}

/// Delete the backing service-account object. A store report of 404/410
/// is treated as success and a synthetic `{name, namespace}` reference is
/// returned: deletion is idempotent.
pub async fn delete_service_account(
    store: &dyn ServiceAccountStore,
    namespace: &str,
    name: &str,
) -> Result<ObjectMeta> {
    match store.delete(namespace, name).await {
        Ok(()) => info!("Deleted service account {}/{}", namespace, name),
        Err(e) if e.is_absent() => {
            debug!("Service account {}/{} already absent", namespace, name);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(ObjectMeta {
        name: name.to_string(),
        namespace: namespace.to_string(),
        ..Default::default()
    })
}
