//! Exposed membership operations, consumed by request handlers.

use std::sync::Arc;

use pkg_constants::rbac::CREATED_BY_ANNOTATION;
use pkg_types::identity::parse_service_account_username;
use pkg_types::member_view::MemberView;
use pkg_types::project::{MemberKind, Project};

use crate::error::{MemberError, Result};
use crate::kubeconfig::{self, build_kubeconfig};
use crate::lifecycle;
use crate::mutator;
use crate::resolver::member_views;
use crate::roles::merge_roles;
use crate::store::{ProjectStore, SecretStore, ServiceAccountStore};

/// Membership operations over a project's roster.
///
/// Stateless between calls: every operation reads fresh from the injected
/// stores and suspends only at their I/O boundaries. Correctness under
/// concurrent mutation of the same project is delegated to the store's
/// merge-patch semantics (the full member list is resubmitted on every
/// change, one attempt, no conflict retry).
pub struct MemberService {
    projects: Arc<dyn ProjectStore>,
    service_accounts: Arc<dyn ServiceAccountStore>,
    secrets: Arc<dyn SecretStore>,
    api_server_url: String,
}

impl MemberService {
    pub fn new(
        projects: Arc<dyn ProjectStore>,
        service_accounts: Arc<dyn ServiceAccountStore>,
        secrets: Arc<dyn SecretStore>,
        api_server_url: impl Into<String>,
    ) -> Self {
        Self {
            projects,
            service_accounts,
            secrets,
            api_server_url: api_server_url.into(),
        }
    }

    /// List all members of the project owning `namespace`, joined with
    /// the live service-account metadata of that namespace.
    pub async fn list(&self, namespace: &str) -> Result<Vec<MemberView>> {
        let project = mutator::read_project(self.projects.as_ref(), namespace).await?;
        self.merged_views(&project, namespace).await
    }

    /// Fetch a single member by exact name.
    ///
    /// When the name denotes a service account in this project's own
    /// namespace, the view carries kind `ServiceAccount`, the account's
    /// metadata, and a freshly assembled bootstrap kubeconfig.
    pub async fn get(&self, namespace: &str, name: &str) -> Result<MemberView> {
        let project = mutator::read_project(self.projects.as_ref(), namespace).await?;
        let project_name = project.metadata.name.clone();
        let member = project
            .spec
            .members
            .iter()
            .find(|m| m.kind == MemberKind::User && m.name == name)
            .ok_or_else(|| MemberError::MemberNotFound {
                name: name.to_string(),
                project: project_name.clone(),
            })?;

        let mut view = MemberView {
            username: member.name.clone(),
            kind: MemberKind::User,
            roles: merge_roles(member.role.as_deref(), &member.roles),
            created_by: None,
            creation_timestamp: None,
            kubeconfig: None,
        };

        if let Some((account_namespace, short_name)) = parse_service_account_username(name) {
            if account_namespace == namespace {
                let account = self.service_accounts.get(namespace, short_name).await?;
                let secret_name = kubeconfig::bound_secret_name(&account)?.to_string();
                let secret = self.secrets.get(namespace, &secret_name).await?;
                let (token, ca_data) = kubeconfig::bootstrap_credentials(&secret)?;
                let config = build_kubeconfig(
                    short_name,
                    namespace,
                    &project_name,
                    &token,
                    &self.api_server_url,
                    ca_data.as_deref(),
                );
                view.kind = MemberKind::ServiceAccount;
                view.created_by = account
                    .metadata
                    .annotations
                    .get(CREATED_BY_ANNOTATION)
                    .cloned();
                view.creation_timestamp = account.metadata.creation_timestamp;
                view.kubeconfig = Some(config.to_yaml()?);
            }
        }
        Ok(view)
    }

    /// Add a member to the project owning `namespace`.
    ///
    /// If the name denotes a service account in this project's own
    /// namespace, the backing object is created first, annotated with the
    /// acting user. Returns the refreshed member list.
    pub async fn create(
        &self,
        namespace: &str,
        name: &str,
        roles: &[String],
        created_by: &str,
    ) -> Result<Vec<MemberView>> {
        if let Some((account_namespace, short_name)) = parse_service_account_username(name) {
            if account_namespace == namespace {
                lifecycle::create_service_account(
                    self.service_accounts.as_ref(),
                    namespace,
                    short_name,
                    created_by,
                )
                .await?;
            }
        }
        let project = mutator::add_member(self.projects.as_ref(), namespace, name, roles).await?;
        self.merged_views(&project, namespace).await
    }

    /// Replace a member's roles. Returns the refreshed member list.
    pub async fn update(
        &self,
        namespace: &str,
        name: &str,
        roles: &[String],
    ) -> Result<Vec<MemberView>> {
        let project =
            mutator::update_member_roles(self.projects.as_ref(), namespace, name, roles).await?;
        self.merged_views(&project, namespace).await
    }

    /// Remove a member. Removing an unknown name is a no-op; the backing
    /// service-account object of a project-managed member is deleted
    /// (idempotently). Returns the refreshed member list.
    pub async fn remove(&self, namespace: &str, name: &str) -> Result<Vec<MemberView>> {
        let project = mutator::remove_member(self.projects.as_ref(), namespace, name).await?;
        if let Some((account_namespace, short_name)) = parse_service_account_username(name) {
            if account_namespace == namespace {
                lifecycle::delete_service_account(
                    self.service_accounts.as_ref(),
                    namespace,
                    short_name,
                )
                .await?;
            }
        }
        self.merged_views(&project, namespace).await
    }

    async fn merged_views(&self, project: &Project, namespace: &str) -> Result<Vec<MemberView>> {
        let accounts = self.service_accounts.list(namespace).await?;
        Ok(member_views(project, &accounts))
    }
}
