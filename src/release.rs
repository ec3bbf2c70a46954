use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\d+$").unwrap());

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid release number `{0}`")]
    Invalid(String),
}

/// A `MAJOR.MINOR` release line, e.g. `2.10`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Accepts `1.2`, `1.2.x`, `release/1.2` and `release/1.2.x`
    pub fn normalize(raw: &str) -> Result<ReleaseVersion, Error> {
        let version = raw.strip_suffix(".x").unwrap_or(raw);
        let version = version.strip_prefix("release/").unwrap_or(version);

        if VERSION_REGEX.is_match(version) {
            Ok(ReleaseVersion(version.to_owned()))
        } else {
            Err(Error::Invalid(raw.to_owned()))
        }
    }

    /// `2.10.x`
    pub fn line(&self) -> String {
        format!("{}.x", self.0)
    }

    /// `release/2.10.x`
    pub fn branch(&self) -> String {
        format!("release/{}", self.line())
    }
}

impl Display for ReleaseVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
