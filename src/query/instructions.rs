//! Parsed representation of a query string.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::color::CanvasColor;
use crate::fit::FitMode;
use crate::frame::DimensionKind;

/// Parsed query instructions.
///
/// Produced by [`crate::query::parse()`], consumed by
/// [`to_policy()`](Self::to_policy).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Frame width (`w`, `width`, or the first half of `ratio`).
    pub w: Option<u32>,
    /// Frame height (`h`, `height`, or the second half of `ratio`).
    pub h: Option<u32>,
    /// Whether `w`/`h` are pixels or a ratio (`kind`, implied by `ratio`).
    pub kind: Option<DimensionKind>,
    /// Fit mode (`mode`).
    pub mode: Option<FitMode>,
    /// Scale factor (`scale`, `factor`).
    pub factor: Option<f64>,
    /// Background color for padding (`bg`, `bgcolor`).
    pub bgcolor: Option<CanvasColor>,
    /// Non-layout parameters preserved for downstream consumers.
    pub extras: BTreeMap<String, String>,
}

impl Default for Instructions {
    fn default() -> Self {
        Self::new()
    }
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self {
            w: None,
            h: None,
            kind: None,
            mode: None,
            factor: None,
            bgcolor: None,
            extras: BTreeMap::new(),
        }
    }

    /// Access non-layout parameters preserved during parsing.
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    /// Requested output format (`format=png`), if any.
    pub fn format(&self) -> Option<&str> {
        self.extras.get("format").map(String::as_str)
    }
}
