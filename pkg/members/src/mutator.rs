//! Roster mutations via read-modify-merge-patch.
//!
//! Every mutation reads the project fresh, edits a copy of the member
//! list, and resubmits the whole list as `{"spec":{"members":[...]}}`.
//! There is exactly one patch attempt; a conflicting concurrent write is
//! an accepted race and surfaces unchanged to the caller.

use tracing::info;

use pkg_constants::rbac::RBAC_API_GROUP;
use pkg_types::project::{Member, MemberKind, Project, ProjectPatch};

use crate::error::{MemberError, Result};
use crate::roles::split_roles;
use crate::store::ProjectStore;

/// Read the project owning `namespace` from the store.
pub async fn read_project(store: &dyn ProjectStore, namespace: &str) -> Result<Project> {
    let name = match store.project_name_for_namespace(namespace).await {
        Ok(name) => name,
        Err(e) if e.is_absent() => {
            return Err(MemberError::ProjectNotFound {
                namespace: namespace.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    Ok(store.get(&name).await?)
}

/// Append a new member entry. Fails if `name` is already on the roster.
pub async fn add_member(
    store: &dyn ProjectStore,
    namespace: &str,
    name: &str,
    roles: &[String],
) -> Result<Project> {
    let project = read_project(store, namespace).await?;
    let mut members = project.spec.members.clone();
    if members.iter().any(|m| m.name == name) {
        return Err(MemberError::AlreadyMember {
            name: name.to_string(),
        });
    }
    let (role, roles) = split_roles(roles);
    members.push(Member {
        kind: MemberKind::User,
        name: name.to_string(),
        api_group: RBAC_API_GROUP.to_string(),
        role,
        roles,
    });

    let patched = store
        .merge_patch(&project.metadata.name, ProjectPatch::members(members))
        .await?;
    info!("Added member '{}' to project {}", name, patched.metadata.name);
    Ok(patched)
}

/// Replace a member's role fields in place. Identity, kind and apiGroup
/// stay untouched. Fails if `name` is not on the roster.
pub async fn update_member_roles(
    store: &dyn ProjectStore,
    namespace: &str,
    name: &str,
    roles: &[String],
) -> Result<Project> {
    let project = read_project(store, namespace).await?;
    let mut members = project.spec.members.clone();
    let member = members
        .iter_mut()
        .find(|m| m.name == name)
        .ok_or_else(|| MemberError::MemberNotFound {
            name: name.to_string(),
            project: project.metadata.name.clone(),
        })?;
    let (role, rest) = split_roles(roles);
    member.role = role;
    member.roles = rest;

    let patched = store
        .merge_patch(&project.metadata.name, ProjectPatch::members(members))
        .await?;
    info!(
        "Updated roles of member '{}' in project {}",
        name, patched.metadata.name
    );
    Ok(patched)
}

/// Remove a member entry. Removing an absent name is an idempotent no-op
/// returning the project unchanged; no patch is submitted.
pub async fn remove_member(
    store: &dyn ProjectStore,
    namespace: &str,
    name: &str,
) -> Result<Project> {
    let project = read_project(store, namespace).await?;
    if !project.spec.members.iter().any(|m| m.name == name) {
        return Ok(project);
    }
    let members: Vec<Member> = project
        .spec
        .members
        .iter()
        .filter(|m| m.name != name)
        .cloned()
        .collect();

    let patched = store
        .merge_patch(&project.metadata.name, ProjectPatch::members(members))
        .await?;
    info!(
        "Removed member '{}' from project {}",
        name, patched.metadata.name
    );
    Ok(patched)
}
