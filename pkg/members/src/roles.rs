//! Conversion between the wire role fields (`role` + `roles`) and the
//! unified ordered role list exposed to callers.

/// Flatten the legacy `role` field and the `roles` list into a single
/// ordered list without duplicates, legacy role first.
pub fn merge_roles(role: Option<&str>, roles: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(roles.len() + 1);
    if let Some(role) = role {
        if !role.is_empty() {
            merged.push(role.to_string());
        }
    }
    for r in roles {
        if !merged.iter().any(|m| m == r) {
            merged.push(r.clone());
        }
    }
    merged
}

/// Split a unified role list back into the wire fields: the first element
/// becomes the legacy `role`, the remainder becomes `roles`.
///
/// Left-inverse of [`merge_roles`] whenever the legacy role is not
/// duplicated in the list.
pub fn split_roles(roles: &[String]) -> (Option<String>, Vec<String>) {
    match roles.split_first() {
        Some((role, rest)) => (Some(role.clone()), rest.to_vec()),
        None => (None, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(roles: &[&str]) -> Vec<String> {
        roles.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn merge_prepends_legacy_role() {
        assert_eq!(
            merge_roles(Some("admin"), &owned(&["viewer", "uam"])),
            owned(&["admin", "viewer", "uam"])
        );
    }

    #[test]
    fn merge_skips_duplicate_legacy_role() {
        assert_eq!(
            merge_roles(Some("admin"), &owned(&["viewer", "admin"])),
            owned(&["admin", "viewer"])
        );
    }

    #[test]
    fn merge_without_legacy_role() {
        assert_eq!(merge_roles(None, &owned(&["viewer"])), owned(&["viewer"]));
        assert_eq!(merge_roles(Some(""), &owned(&["viewer"])), owned(&["viewer"]));
    }

    #[test]
    fn merge_deduplicates() {
        assert_eq!(
            merge_roles(None, &owned(&["viewer", "viewer", "uam"])),
            owned(&["viewer", "uam"])
        );
    }

    #[test]
    fn split_head_and_tail() {
        assert_eq!(
            split_roles(&owned(&["admin", "viewer"])),
            (Some("admin".to_string()), owned(&["viewer"]))
        );
        assert_eq!(split_roles(&[]), (None, vec![]));
    }

    #[test]
    fn split_is_left_inverse_of_merge() {
        for (role, roles) in [
            (Some("admin"), owned(&[])),
            (Some("admin"), owned(&["viewer"])),
            (Some("uam"), owned(&["viewer", "admin"])),
        ] {
            let merged = merge_roles(role, &roles);
            assert_eq!(
                split_roles(&merged),
                (role.map(str::to_string), roles.clone())
            );
        }
    }
}
