//! Formatter configuration.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// How the SELECT projection list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ProjectionLayout {
    /// All projections on the SELECT line, separated by `, `.
    #[default]
    Inline,
    /// One projection per line, aligned under the first.
    Wrap,
}

impl ProjectionLayout {
    /// Returns the configuration name of the layout.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Wrap => "wrap",
        }
    }
}

impl fmt::Display for ProjectionLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized layout name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown projection layout: {0:?} (expected \"inline\" or \"wrap\")")]
pub struct UnknownLayout(pub String);

impl FromStr for ProjectionLayout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("inline") {
            Ok(Self::Inline)
        } else if s.eq_ignore_ascii_case("wrap") {
            Ok(Self::Wrap)
        } else {
            Err(UnknownLayout(s.to_string()))
        }
    }
}

/// Options controlling the formatter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FormatOptions {
    /// Projection list layout.
    pub projections: ProjectionLayout,
}

impl FormatOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            projections: ProjectionLayout::Inline,
        }
    }

    /// Sets the projection layout.
    #[must_use]
    pub const fn with_projections(mut self, layout: ProjectionLayout) -> Self {
        self.projections = layout;
        self
    }
}
