//! Rendering of an applied project as a Kotlin DSL fragment.

use crate::project::{GradleProject, TestFramework};
use std::fmt::Write;

const INDENT: &str = "    ";

/// Renders compatibility, dependencies and test framework blocks.
///
/// Blocks with nothing to say are omitted, except `dependencies { }` which
/// is always present.
pub fn render_kotlin_dsl(project: &GradleProject) -> String {
    let mut blocks = Vec::new();

    if let Some(compat) = project.java_compatibility() {
        blocks.push(format!(
            "java {{\n{INDENT}sourceCompatibility = JavaVersion.{}\n{INDENT}targetCompatibility = JavaVersion.{}\n}}\n",
            compat.source.constant_name(),
            compat.target.constant_name()
        ));
    }

    let mut deps = String::from("dependencies {\n");
    for (configuration, dependencies) in project.configurations() {
        for dep in dependencies {
            let _ = writeln!(deps, "{INDENT}{configuration}(\"{}\")", dep.notation());
        }
    }
    deps.push_str("}\n");
    blocks.push(deps);

    if project.test_framework() == TestFramework::JUnitPlatform {
        blocks.push(format!(
            "tasks.withType<Test>().configureEach {{\n{INDENT}useJUnitPlatform()\n}}\n"
        ));
    }

    blocks.join("\n")
}
