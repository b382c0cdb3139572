//! Subcommand implementations. Each returns the text to print on stdout.

use crate::cli::{ConfigureArgs, OutputFormat};
use crate::error::Result;
use depset_core::Selection;
use depset_gradle::{
    AppConfig, DependencySetPlugin, GradleProject, ParsedConfig, load_config, render_kotlin_dsl,
};
use std::path::Path;

/// Loads configuration sources, lowest precedence first.
fn load_sources(config: Option<&Path>, build_file: Option<&Path>) -> Result<ParsedConfig> {
    let mut parsed = ParsedConfig::default();
    for path in [config, build_file].into_iter().flatten() {
        parsed = parsed.merge(load_config(path)?);
    }
    Ok(parsed)
}

fn command_line_overrides(args: &ConfigureArgs) -> AppConfig {
    AppConfig {
        server: args.server.clone(),
        code_version: args.code_version.clone(),
        lang: (!args.lang.is_empty()).then(|| args.lang.clone()),
        ..AppConfig::default()
    }
}

pub fn configure(args: &ConfigureArgs) -> Result<String> {
    let parsed = load_sources(args.config.as_deref(), args.build_file.as_deref())?;
    let selection: Selection = parsed
        .app
        .merge(command_line_overrides(args))
        .into_selection();

    let mut project = GradleProject::new(args.project_name.as_str());
    for plugin in &args.plugins {
        project.apply_plugin(plugin);
    }
    DependencySetPlugin::apply(&mut project)?;

    let outcome =
        DependencySetPlugin::configure_dependency(&mut project, selection, &parsed.catalog)?;
    tracing::info!(
        "Declared {} dependencies in project '{}'",
        outcome.report.added,
        project.name()
    );

    match args.format {
        OutputFormat::Kotlin => Ok(render_kotlin_dsl(&project)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&outcome)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn display_set(config: Option<&Path>) -> Result<String> {
    let parsed = load_sources(config, None)?;
    // server flavor is irrelevant for listing names
    let selection = Selection::default().with_server("any");
    let catalog = DependencySetPlugin::catalog(&selection, &parsed.catalog);
    Ok(DependencySetPlugin::display_set(&catalog))
}
