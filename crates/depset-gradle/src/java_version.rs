//! Java language levels, mirroring the constants of Gradle's `JavaVersion`.
//!
//! A code version token `t` is valid when `VERSION_<t>` names a constant:
//! `1_1` .. `1_10`, `11` .. `25`, or `HIGHER`.

use depset_core::DepsetError;
use std::fmt;

const LAST_LEGACY_MINOR: u8 = 10;
const FIRST_MODERN_RELEASE: u8 = 11;
const LAST_KNOWN_RELEASE: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JavaVersion {
    /// `VERSION_1_<minor>`
    Legacy(u8),
    /// `VERSION_<release>`
    Release(u8),
    Higher,
}

impl JavaVersion {
    /// Looks up the constant `VERSION_<code_version>`.
    pub fn from_code_version(code_version: &str) -> Result<Self, DepsetError> {
        let invalid = || DepsetError::InvalidCodeVersion {
            version: code_version.to_string(),
        };

        if code_version == "HIGHER" {
            return Ok(Self::Higher);
        }

        if let Some(minor) = code_version.strip_prefix("1_") {
            return parse_number(minor)
                .filter(|m| (1..=LAST_LEGACY_MINOR).contains(m))
                .map(Self::Legacy)
                .ok_or_else(invalid);
        }

        parse_number(code_version)
            .filter(|r| (FIRST_MODERN_RELEASE..=LAST_KNOWN_RELEASE).contains(r))
            .map(Self::Release)
            .ok_or_else(invalid)
    }

    /// Constant name as written in a build script, e.g. `VERSION_11`.
    pub fn constant_name(&self) -> String {
        match self {
            Self::Legacy(minor) => format!("VERSION_1_{minor}"),
            Self::Release(release) => format!("VERSION_{release}"),
            Self::Higher => "VERSION_HIGHER".to_string(),
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(minor) => write!(f, "1.{minor}"),
            Self::Release(release) => write!(f, "{release}"),
            Self::Higher => f.write_str("higher"),
        }
    }
}

/// Plain decimal without sign or leading zeros.
fn parse_number(s: &str) -> Option<u8> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
