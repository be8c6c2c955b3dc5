//! Joins a project's member roster with the live service accounts of its
//! namespace.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use pkg_constants::rbac::CREATED_BY_ANNOTATION;
use pkg_types::identity::service_account_username;
use pkg_types::member_view::MemberView;
use pkg_types::project::{MemberKind, Project};
use pkg_types::serviceaccount::ServiceAccount;

use crate::roles::merge_roles;

/// Join the roster against the service accounts by canonical username.
///
/// Pure function of the two sequences; all store reads happen before the
/// call. Members of kind `User` whose name matches a service account are
/// enriched with its creator annotation and creation timestamp; humans
/// (the common case) carry neither.
pub fn member_views(project: &Project, service_accounts: &[ServiceAccount]) -> Vec<MemberView> {
    type AccountMeta = (Option<String>, Option<DateTime<Utc>>);
    let account_meta: HashMap<String, AccountMeta> = service_accounts
        .iter()
        .map(|account| {
            (
                service_account_username(&account.metadata.namespace, &account.metadata.name),
                (
                    account
                        .metadata
                        .annotations
                        .get(CREATED_BY_ANNOTATION)
                        .cloned(),
                    account.metadata.creation_timestamp,
                ),
            )
        })
        .collect();

    project
        .spec
        .members
        .iter()
        .filter(|member| member.kind == MemberKind::User)
        .map(|member| {
            let (created_by, creation_timestamp) =
                account_meta.get(&member.name).cloned().unwrap_or_default();
            MemberView {
                username: member.name.clone(),
                kind: MemberKind::User,
                roles: merge_roles(member.role.as_deref(), &member.roles),
                created_by,
                creation_timestamp,
                kubeconfig: None,
            }
        })
        .collect()
}
