//! Parser for `depset.toml`.
//!
//! Handles the `[appConfig]` and `[catalog]` tables via toml_edit.

use crate::error::{GradleError, Result};
use crate::extension::{AppConfig, EXTENSION_NAME, PropertyValue};
use crate::parser::ParsedConfig;
use depset_core::CatalogGroup;
use toml_edit::{DocumentMut, Item};

const CATALOG_TABLE: &str = "catalog";

pub fn parse_depset_toml(content: &str) -> Result<ParsedConfig> {
    let doc: DocumentMut = content.parse()?;

    let mut app = AppConfig::default();
    if let Some(item) = doc.get(EXTENSION_NAME) {
        let table = item.as_table_like().ok_or_else(|| GradleError::ParseError {
            message: format!("[{EXTENSION_NAME}] must be a table"),
        })?;
        for (key, value) in table.iter() {
            app.set_property(key, property_value(key, value)?)?;
        }
    }

    let mut catalog = Vec::new();
    if let Some(item) = doc.get(CATALOG_TABLE) {
        let table = item.as_table_like().ok_or_else(|| GradleError::ParseError {
            message: format!("[{CATALOG_TABLE}] must be a table"),
        })?;
        for (name, value) in table.iter() {
            let coordinates = string_array(value).ok_or_else(|| GradleError::ParseError {
                message: format!("catalog group '{name}' must be an array of strings"),
            })?;
            catalog.push(CatalogGroup {
                name: name.to_string(),
                coordinates,
            });
        }
    }

    for (key, _) in doc.iter() {
        if key != EXTENSION_NAME && key != CATALOG_TABLE {
            tracing::warn!("Ignoring unknown table '{}' in depset.toml", key);
        }
    }

    Ok(ParsedConfig { app, catalog })
}

fn property_value(key: &str, item: &Item) -> Result<PropertyValue> {
    if let Some(s) = item.as_str() {
        return Ok(PropertyValue::Scalar(s.to_string()));
    }
    string_array(item)
        .map(PropertyValue::List)
        .ok_or_else(|| GradleError::ParseError {
            message: format!("{EXTENSION_NAME}.{key} must be a string or an array of strings"),
        })
}

fn string_array(item: &Item) -> Option<Vec<String>> {
    item.as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
