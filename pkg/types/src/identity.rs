use pkg_constants::rbac::SERVICE_ACCOUNT_PREFIX;

/// Parse a canonical `system:serviceaccount:<namespace>:<name>` username
/// into `(namespace, name)`.
///
/// Both parts must be non-empty and contain no colon; any other string is
/// not a service-account identity and yields `None`.
pub fn parse_service_account_username(username: &str) -> Option<(&str, &str)> {
    let rest = username.strip_prefix(SERVICE_ACCOUNT_PREFIX)?;
    let rest = rest.strip_prefix(':')?;
    let (namespace, name) = rest.split_once(':')?;
    if namespace.is_empty() || name.is_empty() || name.contains(':') {
        return None;
    }
    Some((namespace, name))
}

/// Build the canonical username for a namespaced service account.
pub fn service_account_username(namespace: &str, name: &str) -> String {
    format!("{}:{}:{}", SERVICE_ACCOUNT_PREFIX, namespace, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_username() {
        assert_eq!(
            parse_service_account_username("system:serviceaccount:garden-dev:robot"),
            Some(("garden-dev", "robot"))
        );
    }

    #[test]
    fn rejects_non_service_accounts() {
        assert!(parse_service_account_username("alice").is_none());
        assert!(parse_service_account_username("alice@example.org").is_none());
        assert!(parse_service_account_username("system:serviceaccount").is_none());
        assert!(parse_service_account_username("system:serviceaccount:ns").is_none());
        assert!(parse_service_account_username("system:serviceaccount::robot").is_none());
        assert!(parse_service_account_username("system:serviceaccount:ns:").is_none());
        assert!(parse_service_account_username("system:serviceaccount:ns:a:b").is_none());
    }

    #[test]
    fn roundtrip() {
        let username = service_account_username("garden-dev", "robot");
        assert_eq!(username, "system:serviceaccount:garden-dev:robot");
        assert_eq!(
            parse_service_account_username(&username),
            Some(("garden-dev", "robot"))
        );
    }
}
