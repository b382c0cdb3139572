//! In-memory Gradle project: the host that resolved dependency sets are applied to.

use crate::error::{GradleError, Result};
use crate::java_version::JavaVersion;
use crate::types::GradleDependency;
use depset_core::{Coordinate, PostResolutionHook, ProjectHost};

pub const JAVA_PLUGIN_ID: &str = "java";
pub const KOTLIN_JVM_PLUGIN_ID: &str = "org.jetbrains.kotlin.jvm";

/// Core plugins that apply `java` themselves.
const JAVA_BASED_PLUGINS: &[&str] = &["java-library", "application"];

/// Tasks every project has, regardless of applied plugins.
const BUILTIN_TASKS: &[&str] = &["help", "dependencies", "dependencyInsight"];
const JAVA_PLUGIN_TASKS: &[&str] = &["compileJava", "compileTestJava", "test", "build"];
const KOTLIN_PLUGIN_TASKS: &[&str] = &["compileKotlin", "compileTestKotlin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestFramework {
    #[default]
    JUnit4,
    JUnitPlatform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaCompatibility {
    pub source: JavaVersion,
    pub target: JavaVersion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub description: Option<String>,
    pub depends_on: Vec<String>,
}

/// Registered tasks in registration order.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<Task>,
}

impl TaskGraph {
    pub fn register(&mut self, name: &str, description: Option<&str>) -> Result<()> {
        if self.contains(name) {
            return Err(GradleError::DuplicateTask {
                name: name.to_string(),
            });
        }
        self.tasks.push(Task {
            name: name.to_string(),
            description: description.map(str::to_string),
            depends_on: Vec::new(),
        });
        Ok(())
    }

    fn register_if_absent(&mut self, name: &str) {
        if !self.contains(name) {
            self.tasks.push(Task {
                name: name.to_string(),
                description: None,
                depends_on: Vec::new(),
            });
        }
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Makes `task` depend on `on`. Returns `false` when `task` is not registered.
    pub fn depends_on(&mut self, task: &str, on: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.name == task) else {
            return false;
        };
        if !task.depends_on.iter().any(|d| d == on) {
            task.depends_on.push(on.to_string());
        }
        true
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct GradleProject {
    name: String,
    plugins: Vec<String>,
    /// Configurations in first-use order.
    configurations: Vec<(String, Vec<GradleDependency>)>,
    java: Option<JavaCompatibility>,
    test_framework: TestFramework,
    tasks: TaskGraph,
}

impl GradleProject {
    pub fn new(name: impl Into<String>) -> Self {
        let mut tasks = TaskGraph::default();
        for task in BUILTIN_TASKS {
            tasks.register_if_absent(task);
        }
        Self {
            name: name.into(),
            plugins: Vec::new(),
            configurations: Vec::new(),
            java: None,
            test_framework: TestFramework::default(),
            tasks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies a plugin by id. `kotlin` is accepted as shorthand for the
    /// Kotlin JVM plugin. The Kotlin JVM, `java-library` and `application`
    /// plugins also apply `java`.
    pub fn apply_plugin(&mut self, id: &str) {
        let id = match id {
            "kotlin" | "kotlin-jvm" => KOTLIN_JVM_PLUGIN_ID,
            other => other,
        };
        if self.plugins.iter().any(|p| p == id) {
            return;
        }
        tracing::debug!("Applying plugin '{}' to project '{}'", id, self.name);

        match id {
            JAVA_PLUGIN_ID => {
                for task in JAVA_PLUGIN_TASKS {
                    self.tasks.register_if_absent(task);
                }
            }
            KOTLIN_JVM_PLUGIN_ID => {
                self.apply_plugin(JAVA_PLUGIN_ID);
                for task in KOTLIN_PLUGIN_TASKS {
                    self.tasks.register_if_absent(task);
                }
            }
            other if JAVA_BASED_PLUGINS.contains(&other) => self.apply_plugin(JAVA_PLUGIN_ID),
            _ => {}
        }
        self.plugins.push(id.to_string());
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Dependencies declared in `configuration`, in declaration order.
    pub fn dependencies(&self, configuration: &str) -> &[GradleDependency] {
        self.configurations
            .iter()
            .find(|(name, _)| name == configuration)
            .map(|(_, deps)| deps.as_slice())
            .unwrap_or_default()
    }

    pub fn configurations(&self) -> impl Iterator<Item = (&str, &[GradleDependency])> {
        self.configurations
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    pub fn java_compatibility(&self) -> Option<JavaCompatibility> {
        self.java
    }

    pub fn test_framework(&self) -> TestFramework {
        self.test_framework
    }

    pub fn tasks(&self) -> &TaskGraph {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskGraph {
        &mut self.tasks
    }
}

impl ProjectHost for GradleProject {
    fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| p == id)
    }

    fn set_code_version(&mut self, code_version: &str) -> depset_core::Result<()> {
        let version = JavaVersion::from_code_version(code_version)?;
        self.java = Some(JavaCompatibility {
            source: version,
            target: version,
        });
        Ok(())
    }

    fn add_dependency(&mut self, configuration: &str, coordinate: Coordinate) {
        let dep = GradleDependency::from_coordinate(configuration, coordinate);
        let index = match self
            .configurations
            .iter()
            .position(|(name, _)| name == configuration)
        {
            Some(index) => index,
            None => {
                self.configurations
                    .push((configuration.to_string(), Vec::new()));
                self.configurations.len() - 1
            }
        };

        let deps = &mut self.configurations[index].1;
        if deps.contains(&dep) {
            tracing::trace!("{} already declared in {}", dep.notation(), configuration);
            return;
        }
        deps.push(dep);
    }

    fn apply_hook(&mut self, hook: PostResolutionHook) {
        match hook {
            PostResolutionHook::UseJUnitPlatform => {
                self.test_framework = TestFramework::JUnitPlatform;
            }
        }
    }
}
