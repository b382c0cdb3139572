//! Package coordinates in `group:artifact[:version]` notation.

use crate::error::{DepsetError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    /// `None` leaves the version to the host's own version management (e.g. a BOM).
    pub version: Option<String>,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<impl Into<String>>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.map(Into::into),
        }
    }

    /// Parses a colon-delimited coordinate.
    ///
    /// The first two segments are required and must be non-empty. The third
    /// segment, when present and non-empty, is the version; anything after it
    /// (classifier, extension) is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use depset_core::Coordinate;
    ///
    /// let c = Coordinate::parse("org.junit.jupiter:junit-jupiter-api:5.7.1").unwrap();
    /// assert_eq!(c.group, "org.junit.jupiter");
    /// assert_eq!(c.artifact, "junit-jupiter-api");
    /// assert_eq!(c.version.as_deref(), Some("5.7.1"));
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.trim().split(':');
        let group = parts.next().unwrap_or_default();
        let artifact = parts.next().unwrap_or_default();
        if group.is_empty() || artifact.is_empty() {
            return Err(DepsetError::InvalidCoordinate {
                coordinate: line.to_string(),
            });
        }
        let version = parts.next().filter(|v| !v.is_empty());

        Ok(Self::new(group, artifact, version))
    }

    /// Canonical module identifier: `"{group}:{artifact}"`.
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl FromStr for Coordinate {
    type Err = DepsetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.artifact, version),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}
