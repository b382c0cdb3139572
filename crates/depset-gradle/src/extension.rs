//! The `appConfig` extension block.
//!
//! Every property is optional; unset values fall back to the defaults in
//! [`depset_core::Selection`] when converted.

use crate::error::{GradleError, Result};
use depset_core::Selection;

pub const EXTENSION_NAME: &str = "appConfig";

const MAIN: &str = "main";
const CODE_VERSION: &str = "codeVersion";
const LANG: &str = "lang";
const SERVER: &str = "server";
const IMPLEMENTATION_ITEMS: &str = "implementationItems";
const TEST_IMPLEMENTATION_ITEMS: &str = "testImplementationItems";

/// A value assigned to an extension property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Scalar(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub main: Option<String>,
    pub code_version: Option<String>,
    pub lang: Option<Vec<String>>,
    pub server: Option<String>,
    pub implementation_items: Option<Vec<String>>,
    pub test_implementation_items: Option<Vec<String>>,
}

impl AppConfig {
    /// Assigns a property by its build-script name.
    ///
    /// # Errors
    ///
    /// `InvalidExtension` for an unknown property or a value of the wrong shape.
    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        match name {
            MAIN => self.main = Some(expect_scalar(name, value)?),
            CODE_VERSION => self.code_version = Some(expect_scalar(name, value)?),
            SERVER => self.server = Some(expect_scalar(name, value)?),
            LANG => self.lang = Some(expect_list(name, value)?),
            IMPLEMENTATION_ITEMS => self.implementation_items = Some(expect_list(name, value)?),
            TEST_IMPLEMENTATION_ITEMS => {
                self.test_implementation_items = Some(expect_list(name, value)?);
            }
            other => {
                return Err(GradleError::InvalidExtension {
                    message: format!("unknown property '{other}' on {EXTENSION_NAME}"),
                });
            }
        }
        Ok(())
    }

    /// Layers `other` on top of `self`: every property set in `other` wins.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            main: other.main.or(self.main),
            code_version: other.code_version.or(self.code_version),
            lang: other.lang.or(self.lang),
            server: other.server.or(self.server),
            implementation_items: other.implementation_items.or(self.implementation_items),
            test_implementation_items: other
                .test_implementation_items
                .or(self.test_implementation_items),
        }
    }

    pub fn into_selection(self) -> Selection {
        let mut selection = Selection::default();
        if let Some(main) = self.main {
            selection.main = main;
        }
        if let Some(code_version) = self.code_version {
            selection.code_version = code_version;
        }
        if let Some(server) = self.server {
            selection.server = server;
        }
        if let Some(lang) = self.lang {
            selection = selection.with_languages(lang);
        }
        if let Some(items) = self.implementation_items {
            selection = selection.with_implementation_items(items);
        }
        if let Some(items) = self.test_implementation_items {
            selection = selection.with_test_implementation_items(items);
        }
        selection
    }
}

fn expect_scalar(name: &str, value: PropertyValue) -> Result<String> {
    match value {
        PropertyValue::Scalar(s) => Ok(s),
        PropertyValue::List(_) => Err(GradleError::InvalidExtension {
            message: format!("property '{name}' expects a string, got a list"),
        }),
    }
}

fn expect_list(name: &str, value: PropertyValue) -> Result<Vec<String>> {
    match value {
        PropertyValue::List(items) => Ok(items),
        PropertyValue::Scalar(_) => Err(GradleError::InvalidExtension {
            message: format!("property '{name}' expects a list, got a string"),
        }),
    }
}
