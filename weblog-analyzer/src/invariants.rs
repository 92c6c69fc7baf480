use std::{convert::Infallible, str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Debug, Display};
use regex::Regex;

static IMAGE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|bmp|svg)$").expect("valid image suffix pattern")
});

/// Requested resource path, whitespace trimmed.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath(String);

impl RequestPath {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Matches on the literal trailing characters; query strings are not stripped.
    pub fn is_image(&self) -> bool {
        IMAGE_SUFFIX.is_match(&self.0)
    }
}

impl FromStr for RequestPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().into()))
    }
}

#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct UserAgent(String);

impl UserAgent {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().into()))
    }
}
