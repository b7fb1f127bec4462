//! Snapshot values and name validation.

/// A stashed controller/model pair.
///
/// Pure data: the history records whatever names it is given. Validation
/// happens at the session boundary, not here, so snapshots read back from
/// the backing file round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub controller_name: String,
    pub model_name: String,
}

impl Snapshot {
    pub fn new(controller_name: &str, model_name: &str) -> Self {
        Self {
            controller_name: controller_name.to_string(),
            model_name: model_name.to_string(),
        }
    }
}

/// Check if a controller name is valid: non-empty, ASCII alphanumerics
/// plus dashes and underscores.
pub fn is_valid_controller_name(name: &str) -> bool {
    is_valid_name(name)
}

/// Check if a model name is valid, in either bare (`name`) or qualified
/// (`user/name`) form.
pub fn is_valid_model_name(name: &str) -> bool {
    match name.split_once('/') {
        Some((user, model)) => is_valid_name(user) && is_valid_name(model),
        None => is_valid_name(name),
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_equality() {
        let a = Snapshot::new("ctrl", "user/model");
        let b = Snapshot::new("ctrl", "user/model");
        let c = Snapshot::new("ctrl", "user/other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_valid_controller_names() {
        assert!(is_valid_controller_name("prod-east"));
        assert!(is_valid_controller_name("ctrl_2"));
        assert!(is_valid_controller_name("a"));
    }

    #[test]
    fn test_invalid_controller_names() {
        assert!(!is_valid_controller_name(""));
        assert!(!is_valid_controller_name("has space"));
        assert!(!is_valid_controller_name("slash/y"));
    }

    #[test]
    fn test_valid_model_names() {
        assert!(is_valid_model_name("billing"));
        assert!(is_valid_model_name("admin/billing"));
        assert!(is_valid_model_name("a_b-c"));
    }

    #[test]
    fn test_invalid_model_names() {
        assert!(!is_valid_model_name(""));
        assert!(!is_valid_model_name("/billing"));
        assert!(!is_valid_model_name("admin/"));
        assert!(!is_valid_model_name("a/b/c"));
        assert!(!is_valid_model_name("has space"));
    }
}
