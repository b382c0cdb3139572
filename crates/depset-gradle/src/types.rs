//! Domain types for declared Gradle dependencies.

use depset_core::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleDependency {
    pub group_id: String,
    pub artifact_id: String,
    /// Canonical identifier: "{groupId}:{artifactId}"
    pub name: String,
    pub version_req: Option<String>,
    /// Gradle configuration (e.g. "implementation", "testImplementation")
    pub configuration: String,
}

impl GradleDependency {
    pub fn from_coordinate(configuration: &str, coordinate: Coordinate) -> Self {
        let name = coordinate.module();
        Self {
            group_id: coordinate.group,
            artifact_id: coordinate.artifact,
            name,
            version_req: coordinate.version,
            configuration: configuration.to_string(),
        }
    }

    /// Dependency notation as written in a build script: `group:artifact[:version]`.
    pub fn notation(&self) -> String {
        match &self.version_req {
            Some(version) => format!("{}:{version}", self.name),
            None => self.name.clone(),
        }
    }
}
