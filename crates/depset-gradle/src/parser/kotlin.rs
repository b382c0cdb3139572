//! Parser for the `appConfig { }` block of a Kotlin DSL build script.
//!
//! Regex-based extraction of `prop.set(...)` / `prop.value(...)` statements.
//! Comments are removed first; string and char literals are skipped when
//! matching braces. Other statements inside the block are ignored.

use crate::error::Result;
use crate::extension::{AppConfig, EXTENSION_NAME, PropertyValue};
use crate::parser::ParsedConfig;
use regex::Regex;
use std::sync::OnceLock;

/// Extension type accepted in `configure<AppConfigExtension> { }`
const EXTENSION_TYPE: &str = "AppConfigExtension";

/// Matches: appConfig {  or  configure<AppConfigExtension> {
static RE_BLOCK_START: OnceLock<Regex> = OnceLock::new();
/// Matches any reference to the extension name
static RE_EXTENSION_REF: OnceLock<Regex> = OnceLock::new();
/// Matches: lang.value(listOf("java", "kotlin"))
static RE_LIST: OnceLock<Regex> = OnceLock::new();
/// Matches: server.set("jetty")
static RE_SCALAR: OnceLock<Regex> = OnceLock::new();
/// Matches one string literal
static RE_STRING: OnceLock<Regex> = OnceLock::new();

fn re_block_start() -> &'static Regex {
    RE_BLOCK_START.get_or_init(|| {
        Regex::new(&format!(
            r"\b(?:{EXTENSION_NAME}|configure\s*<\s*{EXTENSION_TYPE}\s*>)\s*\{{"
        ))
        .unwrap()
    })
}

fn re_extension_ref() -> &'static Regex {
    RE_EXTENSION_REF.get_or_init(|| Regex::new(&format!(r"\b{EXTENSION_NAME}\b")).unwrap())
}

fn re_list() -> &'static Regex {
    RE_LIST.get_or_init(|| {
        Regex::new(
            r#"(\w+)\s*\.\s*(?:set|value)\(\s*(?:listOf|mutableListOf)(?:<String>)?\(((?:"[^"]*"|[^)"])*)\)\s*\)"#,
        )
        .unwrap()
    })
}

fn re_scalar() -> &'static Regex {
    RE_SCALAR.get_or_init(|| Regex::new(r#"(\w+)\s*\.\s*(?:set|value)\(\s*"([^"]*)"\s*\)"#).unwrap())
}

fn re_string() -> &'static Regex {
    RE_STRING.get_or_init(|| Regex::new(r#""([^"]*)""#).unwrap())
}

pub fn parse_app_config(content: &str) -> Result<ParsedConfig> {
    let code = strip_comments(content);
    let bytes = code.as_bytes();
    let mut app = AppConfig::default();

    // End of the last parsed block; matches before it are nested or already consumed
    let mut consumed = 0;
    let mut blocks = 0;
    for m in re_block_start().find_iter(&code) {
        if m.start() < consumed || in_literal(bytes, m.start()) {
            continue;
        }
        let end = block_end(bytes, m.end());
        parse_block(&code[m.end()..end], &mut app)?;
        consumed = end;
        blocks += 1;
    }

    if blocks == 0
        && let Some(m) = re_extension_ref()
            .find_iter(&code)
            .find(|m| !in_literal(bytes, m.start()))
    {
        tracing::debug!(
            "Found '{}' at byte {} but no {} {{ }} block; nothing parsed",
            EXTENSION_NAME,
            m.start(),
            EXTENSION_NAME
        );
    }

    Ok(ParsedConfig {
        app,
        catalog: Vec::new(),
    })
}

/// Applies every assignment in a block body, in source order.
fn parse_block(body: &str, app: &mut AppConfig) -> Result<()> {
    let mut assignments = Vec::new();

    for caps in re_list().captures_iter(body) {
        let (Some(name), Some(items)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let values = re_string()
            .captures_iter(items.as_str())
            .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .collect();
        assignments.push((name.start(), name.as_str(), PropertyValue::List(values)));
    }

    for caps in re_scalar().captures_iter(body) {
        let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        assignments.push((
            name.start(),
            name.as_str(),
            PropertyValue::Scalar(value.as_str().to_string()),
        ));
    }

    assignments.sort_by_key(|(pos, _, _)| *pos);
    tracing::debug!("{} assignments in {} block", assignments.len(), EXTENSION_NAME);

    for (_, name, value) in assignments {
        app.set_property(name, value)?;
    }
    Ok(())
}

/// Returns `content` with `//` and (nested) `/* */` comments removed.
fn strip_comments(content: &str) -> String {
    let bytes = content.as_bytes();
    let mut out = String::with_capacity(content.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(end) = literal_end(bytes, i) {
            i = end;
        } else if bytes[i..].starts_with(b"//") {
            out.push_str(&content[copied..i]);
            i = bytes[i..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(bytes.len(), |p| i + p);
            copied = i;
        } else if bytes[i..].starts_with(b"/*") {
            out.push_str(&content[copied..i]);
            out.push(' ');
            i = block_comment_end(bytes, i);
            copied = i;
        } else {
            i += 1;
        }
    }

    out.push_str(&content[copied..]);
    out
}

fn block_comment_end(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0;
    let mut i = start;
    while i < bytes.len() {
        if bytes[i..].starts_with(b"/*") {
            depth += 1;
            i += 2;
        } else if bytes[i..].starts_with(b"*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return i;
            }
        } else {
            i += 1;
        }
    }
    bytes.len()
}

/// End (exclusive) of the string or char literal starting at `start`, if one does.
fn literal_end(bytes: &[u8], start: usize) -> Option<usize> {
    match bytes[start] {
        b'"' if bytes[start..].starts_with(b"\"\"\"") => {
            let body = start + 3;
            Some(
                bytes[body..]
                    .windows(3)
                    .position(|w| w == b"\"\"\"")
                    .map_or(bytes.len(), |p| body + p + 3),
            )
        }
        quote @ (b'"' | b'\'') => {
            let mut i = start + 1;
            while i < bytes.len() {
                match bytes[i] {
                    b'\\' => i += 2,
                    // unterminated literals stop at the line end
                    b'\n' => return Some(i),
                    b if b == quote => return Some(i + 1),
                    _ => i += 1,
                }
            }
            Some(bytes.len())
        }
        _ => None,
    }
}

fn in_literal(bytes: &[u8], pos: usize) -> bool {
    let mut i = 0;
    while i < pos {
        match literal_end(bytes, i) {
            Some(end) if end > pos => return true,
            Some(end) => i = end,
            None => i += 1,
        }
    }
    false
}

/// Index of the `}` closing a block whose body starts at `start`, or the end
/// of input when the block is never closed.
fn block_end(bytes: &[u8], start: usize) -> usize {
    let mut depth = 1;
    let mut i = start;
    while i < bytes.len() {
        if let Some(end) = literal_end(bytes, i) {
            i = end;
            continue;
        }
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
        i += 1;
    }
    tracing::debug!("Unclosed {} block", EXTENSION_NAME);
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradleError;

    #[test]
    fn test_parse_sample_block() {
        let content = r#"plugins {
  id("com.github.skhatri.dependencyset") version "0.1.0"
}

appConfig {
  main.set("com.plugins.Application")
  lang.value(listOf("java", "kotlin"))
  implementationItems.value(listOf("spring-boot", "jackson", "coroutines", "kotlin"))
  testImplementationItems.value(listOf("junit"))
}
"#;
        let parsed = parse_app_config(content).unwrap();
        let app = parsed.app;
        assert_eq!(app.main.as_deref(), Some("com.plugins.Application"));
        assert_eq!(app.lang, Some(vec!["java".to_string(), "kotlin".to_string()]));
        assert_eq!(
            app.implementation_items.unwrap(),
            vec!["spring-boot", "jackson", "coroutines", "kotlin"]
        );
        assert_eq!(app.test_implementation_items.unwrap(), vec!["junit"]);
        assert!(app.server.is_none());
        assert!(parsed.catalog.is_empty());
    }

    #[test]
    fn test_no_block() {
        let content = "plugins {\n    id(\"java\")\n}\n";
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(parsed.app, AppConfig::default());
    }

    #[test]
    fn test_statements_outside_block_ignored() {
        let content = r#"val server = project.objects.property<String>()
server.set("tomcat")
appConfig {
    server.set("jetty")
}
other {
    server.set("netty")
}
"#;
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(parsed.app.server.as_deref(), Some("jetty"));
    }

    #[test]
    fn test_single_line_block() {
        let content = "appConfig { codeVersion.set(\"17\") }\n";
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(parsed.app.code_version.as_deref(), Some("17"));
    }

    #[test]
    fn test_nested_braces_stay_in_block() {
        let content = r#"appConfig {
    if (true) {
        server.set("jetty")
    }
    codeVersion.set("17")
}
codeVersion.set("21")
"#;
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(parsed.app.server.as_deref(), Some("jetty"));
        assert_eq!(parsed.app.code_version.as_deref(), Some("17"));
    }

    #[test]
    fn test_set_with_typed_list() {
        let content = "appConfig {\n    lang.set(listOf<String>(\"kotlin\"))\n    implementationItems.set(listOf())\n}\n";
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(parsed.app.lang, Some(vec!["kotlin".to_string()]));
        assert_eq!(parsed.app.implementation_items, Some(vec![]));
    }

    #[test]
    fn test_multiline_list() {
        let content = "appConfig {\n    implementationItems.value(listOf(\n        \"kafka\",\n        \"rx\",\n    ))\n}\n";
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(
            parsed.app.implementation_items,
            Some(vec!["kafka".to_string(), "rx".to_string()])
        );
    }

    #[test]
    fn test_several_statements_on_one_line() {
        let content = "appConfig {\n    lang.value(listOf(\"kotlin\")); server.set(\"jetty\")\n}\n";
        let app = parse_app_config(content).unwrap().app;
        assert_eq!(app.lang, Some(vec!["kotlin".to_string()]));
        assert_eq!(app.server.as_deref(), Some("jetty"));
    }

    #[test]
    fn test_later_assignment_wins() {
        let content = "appConfig { server.set(\"tomcat\"); server.set(\"jetty\") }\n";
        let app = parse_app_config(content).unwrap().app;
        assert_eq!(app.server.as_deref(), Some("jetty"));
    }

    #[test]
    fn test_braces_in_strings_do_not_close_block() {
        let content = "appConfig {\n    main.set(\"}\")\n    server.set(\"jetty\")\n}\n";
        let app = parse_app_config(content).unwrap().app;
        assert_eq!(app.main.as_deref(), Some("}"));
        assert_eq!(app.server.as_deref(), Some("jetty"));
    }

    #[test]
    fn test_commented_statement_skipped() {
        let content = "appConfig {\n    // server.set(\"jetty\")\n}\n";
        let parsed = parse_app_config(content).unwrap();
        assert!(parsed.app.server.is_none());
    }

    #[test]
    fn test_block_comments_skipped() {
        let content = r#"appConfig {
    /* server.set("jetty") */
    codeVersion.set("17") // codeVersion.set("21")
    /*
     * lang.value(listOf("kotlin")) /* nested } */
     */
}
"#;
        let app = parse_app_config(content).unwrap().app;
        assert!(app.server.is_none());
        assert!(app.lang.is_none());
        assert_eq!(app.code_version.as_deref(), Some("17"));
    }

    #[test]
    fn test_comment_markers_inside_strings_kept() {
        let content = "appConfig {\n    main.set(\"http://example.com/*\")\n    server.set(\"jetty\")\n}\n";
        let app = parse_app_config(content).unwrap().app;
        assert_eq!(app.main.as_deref(), Some("http://example.com/*"));
        assert_eq!(app.server.as_deref(), Some("jetty"));
    }

    #[test]
    fn test_block_opened_on_next_line() {
        let content = "appConfig\n{\n    server.set(\"jetty\")\n}\n";
        let app = parse_app_config(content).unwrap().app;
        assert_eq!(app.server.as_deref(), Some("jetty"));
    }

    #[test]
    fn test_configure_extension_type() {
        let content = "configure<AppConfigExtension> {\n    server.set(\"netty\")\n}\n";
        let app = parse_app_config(content).unwrap().app;
        assert_eq!(app.server.as_deref(), Some("netty"));
    }

    #[test]
    fn test_block_name_in_string_ignored() {
        let content = "println(\"appConfig { server.set(\\\"jetty\\\") }\")\n";
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(parsed.app, AppConfig::default());
    }

    #[test]
    fn test_extension_reference_without_block() {
        let content = "appConfig.server.set(\"jetty\")\n";
        let parsed = parse_app_config(content).unwrap();
        assert_eq!(parsed.app, AppConfig::default());
    }

    #[test]
    fn test_unknown_property_fails() {
        let content = "appConfig {\n    servers.set(\"jetty\")\n}\n";
        let err = parse_app_config(content).unwrap_err();
        assert!(matches!(err, GradleError::InvalidExtension { .. }));
    }

    #[test]
    fn test_scalar_for_list_property_fails() {
        let content = "appConfig {\n    lang.set(\"kotlin\")\n}\n";
        assert!(parse_app_config(content).is_err());
    }
}
