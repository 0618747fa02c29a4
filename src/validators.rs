
pub fn is_str_valid_length(value: &str, min: usize, max: usize) -> bool {
    if !(value.len() >= min) {
        return false;
    }
    if !(value.len() <= max) {
        return false;
    }
    true
}

// GitHub handles: 1-39 ASCII alphanumerics or hyphens, no leading/trailing hyphen.
// Older accounts may contain consecutive hyphens.
pub fn is_github_handle(value: &str) -> bool {
    if !is_str_valid_length(value, 1, 39) {
        return false;
    }
    if value.starts_with('-') || value.ends_with('-') {
        return false;
    }
    value.chars().all(|char| char.is_ascii_alphanumeric() || char == '-')
}

// Project ids arrive as raw path segments.
pub fn is_project_id(value: &str) -> bool {
    is_str_valid_length(value, 1, 4) && value.chars().all(|char| char.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_handles() {
        assert!(is_github_handle("octocat"));
        assert!(is_github_handle("Saym-Islam297"));
        assert!(is_github_handle("a"));
        assert!(is_github_handle("oc--to"));
    }

    #[test]
    fn rejects_malformed_handles() {
        assert!(!is_github_handle(""));
        assert!(!is_github_handle("-octo"));
        assert!(!is_github_handle("octo-"));
        assert!(!is_github_handle("octo/cat"));
        assert!(!is_github_handle("octo cat"));
        assert!(!is_github_handle(&"a".repeat(40)));
    }

    #[test]
    fn project_ids_are_short_digit_strings() {
        assert!(is_project_id("3"));
        assert!(is_project_id("42"));
        assert!(!is_project_id("-1"));
        assert!(!is_project_id("abc"));
        assert!(!is_project_id("12345"));
    }
}
