//! Query string instructions and policy construction.
//!
//! Parses strings like `?w=500&h=600&mode=pad&bg=gray` into [`Instructions`]
//! and turns them into a concrete [`Policy`](crate::Policy) once the source
//! size is known.
//!
//! # Example
//!
//! ```
//! use framefit::{CanvasColor, Policy, Size, query};
//!
//! let result = query::parse("ratio=2:1&mode=pad&bg=gray");
//! assert!(result.warnings.is_empty());
//!
//! let policy = result.instructions.to_policy(800, 600).expect("valid policy");
//! assert_eq!(
//!     policy,
//!     Policy::ScaleDownWithBackground(Size::new(800, 400), CanvasColor::GRAY)
//! );
//! ```
//!
//! # Non-layout parameters
//!
//! `format` and `quality` are preserved in [`Instructions::extras()`] without
//! warnings. Anything else unrecognized produces [`ParseWarning::KeyNotRecognized`].

mod convert;
pub mod instructions;
mod parse;

pub use instructions::Instructions;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed instructions.
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
