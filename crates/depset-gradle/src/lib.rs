//! Gradle host support for depset.
//!
//! Provides the in-memory project the resolved dependency sets are applied to,
//! the plugin's task wiring, and the configuration sources for the
//! `appConfig` extension:
//! - `build.gradle.kts` (`appConfig { }` block)
//! - `depset.toml`

pub mod error;
pub mod extension;
pub mod formatter;
pub mod java_version;
pub mod parser;
pub mod plugin;
pub mod project;
pub mod types;

pub use error::{GradleError, Result};
pub use extension::{AppConfig, PropertyValue};
pub use formatter::render_kotlin_dsl;
pub use java_version::JavaVersion;
pub use parser::{ParsedConfig, load_config, parse_config};
pub use plugin::{ConfigureOutcome, DependencySetPlugin};
pub use project::{GradleProject, JavaCompatibility, TaskGraph, TestFramework};
pub use types::GradleDependency;
