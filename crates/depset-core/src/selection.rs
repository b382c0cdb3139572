//! User-declared dependency selection.

use serde::Serialize;

pub const DEFAULT_MAIN: &str = "Application";
pub const DEFAULT_CODE_VERSION: &str = "11";
pub const DEFAULT_LANGUAGE: &str = "java";
pub const DEFAULT_SERVER: &str = "undertow";

/// Resolver input with every default already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Entry point class; carried through, never read by the resolver.
    pub main: String,
    pub code_version: String,
    /// Target languages, in declaration order without duplicates.
    #[serde(rename = "lang")]
    pub languages: Vec<String>,
    pub server: String,
    pub implementation_items: Vec<String>,
    pub test_implementation_items: Vec<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            main: DEFAULT_MAIN.to_string(),
            code_version: DEFAULT_CODE_VERSION.to_string(),
            languages: vec![DEFAULT_LANGUAGE.to_string()],
            server: DEFAULT_SERVER.to_string(),
            implementation_items: Vec::new(),
            test_implementation_items: Vec::new(),
        }
    }
}

impl Selection {
    /// Replaces the language list, dropping repeated entries.
    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = dedup_ordered(languages.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    #[must_use]
    pub fn with_implementation_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implementation_items = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_test_implementation_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_implementation_items = items.into_iter().map(Into::into).collect();
        self
    }
}

/// Keeps the first occurrence of each value, preserving order.
fn dedup_ordered(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Selection::default();
        assert_eq!(s.main, "Application");
        assert_eq!(s.code_version, "11");
        assert_eq!(s.languages, vec!["java"]);
        assert_eq!(s.server, "undertow");
        assert!(s.implementation_items.is_empty());
        assert!(s.test_implementation_items.is_empty());
    }

    #[test]
    fn test_languages_are_an_ordered_set() {
        let s = Selection::default().with_languages(["kotlin", "java", "kotlin"]);
        assert_eq!(s.languages, vec!["kotlin", "java"]);
    }

    #[test]
    fn test_explicit_empty_languages_stay_empty() {
        let s = Selection::default().with_languages(Vec::<String>::new());
        assert!(s.languages.is_empty());
    }

    #[test]
    fn test_dedup_ordered_keeps_first_occurrence() {
        let values = ["b", "a", "b", "c", "a"].map(String::from);
        assert_eq!(dedup_ordered(values), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_items_keep_duplicates() {
        let s = Selection::default().with_implementation_items(["jackson", "jackson"]);
        assert_eq!(s.implementation_items.len(), 2);
    }

    #[test]
    fn test_serialize_uses_extension_keys() {
        let s = Selection::default()
            .with_server("jetty")
            .with_test_implementation_items(["junit"]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["codeVersion"], "11");
        assert_eq!(json["lang"][0], "java");
        assert_eq!(json["server"], "jetty");
        assert_eq!(json["testImplementationItems"][0], "junit");
    }
}
