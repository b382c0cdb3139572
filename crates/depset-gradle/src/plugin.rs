//! The dependency-set plugin: task wiring plus the actions behind
//! `configureDependency` and `displaySet`.

use crate::error::Result;
use crate::project::GradleProject;
use depset_core::{
    ApplyReport, Catalog, CatalogGroup, ConfigurationApplier, Resolution, Selection,
    SelectorResolver,
};
use serde::Serialize;
use std::fmt::Write;

pub const PLUGIN_ID: &str = "com.github.skhatri.dependencyset";
pub const CONFIGURE_TASK: &str = "configureDependency";
pub const DISPLAY_TASK: &str = "displaySet";

/// Languages whose `compile<Lang>` task must run after dependency configuration.
const COMPILE_LANGUAGES: &[&str] = &["java", "kotlin"];
const INSIGHT_TASK: &str = "dependencyInsight";

const USAGE_EXAMPLE: &str = r#"Configure current build like so:
    appConfig {
        main.set("com.plugins.Application")
        lang.value(listOf("java", "kotlin"))
        implementationItems.value(listOf("spring-boot", "jackson", "coroutines", "kotlin"))
        testImplementationItems.value(listOf("junit"))
    }
"#;

/// Everything one `configureDependency` run decided and did.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigureOutcome {
    pub selection: Selection,
    pub resolution: Resolution,
    pub report: ApplyReport,
}

pub struct DependencySetPlugin;

impl DependencySetPlugin {
    /// Registers the plugin tasks and hooks them in front of compilation.
    pub fn apply(project: &mut GradleProject) -> Result<()> {
        let tasks = project.tasks_mut();
        tasks.register(CONFIGURE_TASK, Some("configure dependency set"))?;
        tasks.register(DISPLAY_TASK, Some("display available dependency set"))?;

        for lang in COMPILE_LANGUAGES {
            let compile = format!("compile{}", title_case(lang));
            if tasks.depends_on(&compile, CONFIGURE_TASK) {
                tracing::debug!("{} now depends on {}", compile, CONFIGURE_TASK);
            }
        }
        tasks.depends_on(INSIGHT_TASK, CONFIGURE_TASK);

        project.apply_plugin(PLUGIN_ID);
        Ok(())
    }

    /// Builds the catalog for a selection, layering extra groups over the built-in table.
    pub fn catalog(selection: &Selection, extra: &[CatalogGroup]) -> Catalog {
        extra.iter().fold(
            Catalog::new(&selection.languages, &selection.server),
            |catalog, group| catalog.with_group(group.name.clone(), group.coordinates.clone()),
        )
    }

    /// The `configureDependency` action: resolve the selection and apply it to the project.
    pub fn configure_dependency(
        project: &mut GradleProject,
        selection: Selection,
        extra: &[CatalogGroup],
    ) -> Result<ConfigureOutcome> {
        let catalog = Self::catalog(&selection, extra);
        let resolution = SelectorResolver::new(&catalog).resolve(&selection);
        tracing::debug!(
            "Resolved {} assignments for project '{}'",
            resolution.assignments.len(),
            project.name()
        );

        let report = ConfigurationApplier::new().apply(&selection, &resolution, project)?;

        Ok(ConfigureOutcome {
            selection,
            resolution,
            report,
        })
    }

    /// The `displaySet` action output: known group names and a usage example.
    pub fn display_set(catalog: &Catalog) -> String {
        let mut out = String::new();
        out.push_str("Available DependencySet values\n");
        out.push_str("------------------------------\n");
        for name in catalog.names() {
            let _ = writeln!(out, "{name}");
        }
        out.push('\n');
        out.push_str(USAGE_EXAMPLE);
        out
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
