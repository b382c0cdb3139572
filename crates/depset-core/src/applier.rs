//! Configuration Applier: declares resolved coordinates against a build host.

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::resolver::{PostResolutionHook, Resolution};
use crate::selection::Selection;
use serde::Serialize;

/// Plugin id whose presence enables source/target compatibility settings.
pub const JAVA_PLUGIN: &str = "java";

/// The build host's project model, as seen by the applier.
///
/// Implementors own dependency storage and resolution. Adding the same
/// coordinate to the same configuration twice must be harmless.
pub trait ProjectHost {
    /// Whether a plugin with the given id is applied to the project.
    fn has_plugin(&self, id: &str) -> bool;

    /// Sets source and target compatibility to `code_version`.
    ///
    /// Validation belongs to the host; its error is returned unmodified.
    fn set_code_version(&mut self, code_version: &str) -> Result<()>;

    /// Declares `coordinate` in the named configuration.
    fn add_dependency(&mut self, configuration: &str, coordinate: Coordinate);

    fn apply_hook(&mut self, hook: PostResolutionHook);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    /// Compatibility version set on the host, if the java plugin was present.
    pub code_version: Option<String>,
    pub added: usize,
    pub hooks: Vec<PostResolutionHook>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationApplier;

impl ConfigurationApplier {
    pub const fn new() -> Self {
        Self
    }

    /// Applies a resolution to the host.
    ///
    /// Every coordinate is parsed before the host is touched, so a malformed
    /// entry aborts with nothing declared.
    ///
    /// # Errors
    ///
    /// - `DepsetError::InvalidCoordinate` for an entry with fewer than two segments
    /// - any error the host raises while setting the code version
    pub fn apply<H>(
        &self,
        selection: &Selection,
        resolution: &Resolution,
        host: &mut H,
    ) -> Result<ApplyReport>
    where
        H: ProjectHost + ?Sized,
    {
        let parsed = resolution
            .assignments
            .iter()
            .map(|a| Coordinate::parse(&a.coordinate).map(|c| (a.configuration.as_str(), c)))
            .collect::<Result<Vec<_>>>()?;

        let mut report = ApplyReport::default();

        if host.has_plugin(JAVA_PLUGIN) {
            host.set_code_version(&selection.code_version)?;
            report.code_version = Some(selection.code_version.clone());
        } else {
            tracing::debug!("No '{}' plugin, leaving compatibility untouched", JAVA_PLUGIN);
        }

        for (configuration, coordinate) in parsed {
            tracing::info!(
                "resolving configuration {}, dependency: {}:{}:{}",
                configuration,
                coordinate.group,
                coordinate.artifact,
                coordinate.version.as_deref().unwrap_or("none")
            );
            host.add_dependency(configuration, coordinate);
            report.added += 1;
        }

        for hook in &resolution.hooks {
            tracing::debug!("Applying hook {:?}", hook);
            host.apply_hook(*hook);
            report.hooks.push(*hook);
        }

        Ok(report)
    }
}
