use std::collections::HashMap;

pub const FALLBACK_COLOR: &str = "#8b5cf6";

pub struct LanguageColorMapper {
    hash_map: HashMap<&'static str, &'static str>,
}

impl LanguageColorMapper {
    pub fn new() -> Self {
        let pairs: Vec<(&'static str, &'static str)> = vec![
            ("JavaScript", "#f1e05a"),
            ("TypeScript", "#2b7489"),
            ("Python", "#3572A5"),
            ("Java", "#b07219"),
            ("C++", "#f34b7d"),
            ("HTML", "#e34c26"),
            ("CSS", "#1572B6"),
            ("React", "#61dafb"),
            ("Vue", "#4FC08D"),
            ("Go", "#00ADD8"),
            ("Rust", "#dea584"),
            ("PHP", "#4F5D95"),
        ];

        LanguageColorMapper {
            hash_map: pairs.into_iter().collect(),
        }
    }

    // Exact, case-sensitive match on the language tag GitHub reports.
    pub fn to_color(&self, language: &str) -> &'static str {
        self.hash_map.get(language).copied().unwrap_or(FALLBACK_COLOR)
    }
}

impl Default for LanguageColorMapper {
    fn default() -> Self {
        Self::new()
    }
}
