//! Core abstractions for depset.
//!
//! Maps logical dependency-group names ("jackson", "spring-boot", ...) onto
//! package coordinates and declares them against named configurations of a
//! build host:
//! - [`Catalog`]: immutable group name -> coordinate list lookup
//! - [`SelectorResolver`]: expands a [`Selection`] into configuration assignments
//! - [`ConfigurationApplier`]: parses coordinates and registers them with a [`ProjectHost`]

pub mod applier;
pub mod catalog;
pub mod coordinate;
pub mod error;
pub mod resolver;
pub mod selection;

pub use applier::{ApplyReport, ConfigurationApplier, JAVA_PLUGIN, ProjectHost};
pub use catalog::{Catalog, CatalogGroup};
pub use coordinate::Coordinate;
pub use error::{DepsetError, Result};
pub use resolver::{
    GroupRequest, IMPLEMENTATION, PostResolutionHook, Resolution, ResolvedAssignment, SelectorResolver,
    TEST_IMPLEMENTATION,
};
pub use selection::{
    DEFAULT_CODE_VERSION, DEFAULT_LANGUAGE, DEFAULT_MAIN, DEFAULT_SERVER, Selection,
};
