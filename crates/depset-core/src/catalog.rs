//! Coordinate Catalog: logical group name -> ordered coordinate list.
//!
//! The built-in table is a static template. A [`Catalog`] instance is built
//! from it once per resolution, substituting the server flavor into
//! server-dependent entries, and never changes afterwards.

/// Placeholder replaced by the server flavor token.
const SERVER_PLACEHOLDER: &str = "{server}";

/// Built-in groups, in display order.
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    (
        "jackson",
        &[
            "com.fasterxml.jackson.core:jackson-core:2.12.4",
            "com.fasterxml.jackson.core:jackson-databind:2.12.4",
            "com.fasterxml.jackson.datatype:jackson-datatype-jsr310:2.12.4",
            "com.fasterxml.jackson.dataformat:jackson-dataformat-yaml:2.12.4",
        ],
    ),
    (
        "jackson-kotlin",
        &["com.fasterxml.jackson.module:jackson-module-kotlin:2.12.4"],
    ),
    (
        "junit",
        &[
            "org.junit.jupiter:junit-jupiter-api:5.7.1",
            "org.junit.jupiter:junit-jupiter-engine:5.7.1",
            "org.junit.jupiter:junit-jupiter-params:5.7.1",
            "org.junit.vintage:junit-vintage-engine:5.7.1",
            "org.junit.platform:junit-platform-commons:1.7.1",
            "org.junit.platform:junit-platform-runner:1.7.1",
            "org.junit.platform:junit-platform-launcher:1.7.1",
            "org.junit.platform:junit-platform-engine:1.7.1",
            "org.mockito:mockito-core:3.3.3",
        ],
    ),
    (
        "testcontainers",
        &[
            "org.testcontainers:testcontainers:1.16.0",
            "org.testcontainers:junit-jupiter:1.16.0",
        ],
    ),
    ("rx", &["io.projectreactor.addons:reactor-adapter:3.4.4"]),
    ("rx-test", &["io.projectreactor:reactor-test:3.4.9"]),
    (
        "kotlin",
        &[
            "org.jetbrains.kotlin:kotlin-reflect:1.5.21",
            "org.jetbrains.kotlin:kotlin-stdlib-jdk8:1.5.21",
            "org.jetbrains.kotlinx:kotlinx-coroutines-core:1.5.1",
            "org.jetbrains.kotlinx:kotlinx-coroutines-reactive:1.5.1",
        ],
    ),
    (
        "grpc",
        &[
            "com.google.protobuf:protobuf-java:3.12.2",
            "com.google.protobuf:protobuf-java-util:3.12.2",
            "io.grpc:grpc-protobuf:1.31.0",
            "io.grpc:grpc-stub:1.31.0",
            "io.grpc:grpc-services:1.31.0",
            "io.grpc:grpc-netty-shaded:1.31.0",
            "org.apache.tomcat:annotations-api:6.0.53",
        ],
    ),
    (
        "spring-boot",
        &[
            "org.springframework.boot:spring-boot-starter-webflux:2.5.4",
            "org.springframework.boot:spring-boot-starter-{server}:2.5.4",
            "org.springframework.boot:spring-boot-starter:2.5.4",
        ],
    ),
    (
        "spring-boot-test",
        &["org.springframework.boot:spring-boot-starter-test"],
    ),
    (
        "kafka",
        &[
            "org.apache.kafka:kafka-clients:2.8.0",
            "org.apache.kafka:kafka-streams:2.8.0",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroup {
    pub name: String,
    pub coordinates: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    languages: Vec<String>,
    server: String,
    groups: Vec<CatalogGroup>,
}

impl Catalog {
    /// Builds the built-in catalog for the given languages and server flavor.
    ///
    /// `languages` does not change catalog content; it is kept so callers can
    /// inspect what the catalog was built for.
    pub fn new(languages: &[String], server: &str) -> Self {
        let groups = BUILTIN_GROUPS
            .iter()
            .map(|(name, entries)| CatalogGroup {
                name: (*name).to_string(),
                coordinates: entries
                    .iter()
                    .map(|entry| entry.replace(SERVER_PLACEHOLDER, server))
                    .collect(),
            })
            .collect();

        Self {
            languages: languages.to_vec(),
            server: server.to_string(),
            groups,
        }
    }

    /// Adds a group, replacing any existing group with the same name in place.
    ///
    /// Entries go through the same `{server}` substitution as built-in ones.
    #[must_use]
    pub fn with_group(mut self, name: impl Into<String>, coordinates: Vec<String>) -> Self {
        let name = name.into();
        let coordinates = coordinates
            .iter()
            .map(|entry| entry.replace(SERVER_PLACEHOLDER, &self.server))
            .collect();

        if let Some(existing) = self.groups.iter_mut().find(|g| g.name == name) {
            tracing::debug!("Replacing catalog group '{}'", name);
            existing.coordinates = coordinates;
        } else {
            tracing::debug!("Adding catalog group '{}'", name);
            self.groups.push(CatalogGroup { name, coordinates });
        }
        self
    }

    /// Returns the coordinates of a group, or an empty slice for unknown names.
    pub fn by_name(&self, name: &str) -> &[String] {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.coordinates.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    /// Group names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn server(&self) -> &str {
        &self.server
    }
}
