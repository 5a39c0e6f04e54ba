//! Deployment base path for the router.

/// Base path for the router (e.g., `/spotlight` when hosted under a subdirectory).
///
/// Taken from `PUBLIC_URL` at compile time. Returns `None` when no base path is
/// configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            router_base_with_base(" /spotlight/ "),
            Some(String::from("/spotlight"))
        );
        assert_eq!(router_base_with_base("/"), None);
    }
}
