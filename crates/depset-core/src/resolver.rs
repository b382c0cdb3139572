//! Selector Resolver: expands requested groups into configuration assignments.
//!
//! For every implementation item the resolver requests, in order:
//! 1. the item itself into `implementation`
//! 2. `<item>-test` into `testImplementation`
//! 3. for each language `l`: the pure language group `l` into `implementation`
//! 4. for each language `l`: the variant `<item>-<l>` into `implementation`
//!
//! Test implementation items map straight into `testImplementation`. Groups
//! missing from the catalog contribute nothing. Duplicates are kept; the host
//! is expected to ignore repeated additions.

use crate::catalog::Catalog;
use crate::selection::Selection;
use serde::Serialize;

pub const IMPLEMENTATION: &str = "implementation";
pub const TEST_IMPLEMENTATION: &str = "testImplementation";

const TEST_COMPANION_SUFFIX: &str = "-test";

/// Host-side behavior switched on by the presence of a test group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PostResolutionHook {
    /// Run tests on the JUnit Platform instead of the JUnit 4 runner.
    UseJUnitPlatform,
}

/// Test group name -> hook it triggers.
const TEST_GROUP_HOOKS: &[(&str, PostResolutionHook)] =
    &[("junit", PostResolutionHook::UseJUnitPlatform)];

/// A logical group requested for a configuration, before catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRequest {
    pub group: String,
    pub configuration: &'static str,
}

impl GroupRequest {
    fn new(group: impl Into<String>, configuration: &'static str) -> Self {
        Self {
            group: group.into(),
            configuration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAssignment {
    /// Raw `group:artifact[:version]` string from the catalog.
    pub coordinate: String,
    pub configuration: String,
    /// Logical group the coordinate came from.
    #[serde(rename = "from")]
    pub group: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub assignments: Vec<ResolvedAssignment>,
    pub hooks: Vec<PostResolutionHook>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() && self.hooks.is_empty()
    }

    /// Coordinates assigned to `configuration`, in resolution order.
    pub fn coordinates_for<'a>(&'a self, configuration: &'a str) -> impl Iterator<Item = &'a str> {
        self.assignments
            .iter()
            .filter(move |a| a.configuration == configuration)
            .map(|a| a.coordinate.as_str())
    }

    pub fn has_hook(&self, hook: PostResolutionHook) -> bool {
        self.hooks.contains(&hook)
    }
}

pub struct SelectorResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectorResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Expands a selection into group requests without consulting the catalog.
    pub fn requests(&self, selection: &Selection) -> Vec<GroupRequest> {
        let mut requests = Vec::new();

        for item in &selection.implementation_items {
            requests.push(GroupRequest::new(item.as_str(), IMPLEMENTATION));
            requests.push(GroupRequest::new(
                format!("{item}{TEST_COMPANION_SUFFIX}"),
                TEST_IMPLEMENTATION,
            ));
            for lang in &selection.languages {
                requests.push(GroupRequest::new(lang.as_str(), IMPLEMENTATION));
                requests.push(GroupRequest::new(format!("{item}-{lang}"), IMPLEMENTATION));
            }
        }

        for item in &selection.test_implementation_items {
            requests.push(GroupRequest::new(item.as_str(), TEST_IMPLEMENTATION));
        }

        requests
    }

    pub fn resolve(&self, selection: &Selection) -> Resolution {
        let mut assignments = Vec::new();

        for request in self.requests(selection) {
            if !self.catalog.contains(&request.group) {
                tracing::trace!("No catalog group '{}'", request.group);
                continue;
            }
            let coordinates = self.catalog.by_name(&request.group);
            tracing::debug!(
                "Group '{}' -> {} ({} coordinates)",
                request.group,
                request.configuration,
                coordinates.len()
            );
            assignments.extend(coordinates.iter().map(|coordinate| ResolvedAssignment {
                coordinate: coordinate.clone(),
                configuration: request.configuration.to_string(),
                group: request.group.clone(),
            }));
        }

        let mut hooks = Vec::new();
        for (group, hook) in TEST_GROUP_HOOKS {
            if selection.test_implementation_items.iter().any(|i| i == group) && !hooks.contains(hook)
            {
                hooks.push(*hook);
            }
        }

        Resolution { assignments, hooks }
    }
}
