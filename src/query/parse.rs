//! Query string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::instructions::Instructions;
use crate::color::CanvasColor;
use crate::fit::FitMode;
use crate::frame::DimensionKind;

/// Known non-layout keys that should be preserved in `extras` without warnings.
/// Sorted for binary search.
const KNOWN_EXTRAS: &[&str] = &["format", "quality"];

/// Parse a query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(&key, &value, &mut inst, &mut warnings);
    }

    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "w" | "width" => match parse_dimension(value) {
            Some(w) => set_or_warn(&mut inst.w, w, key, value, warnings),
            None => invalid(warnings, "w", value, "expected a positive integer"),
        },
        "h" | "height" => match parse_dimension(value) {
            Some(h) => set_or_warn(&mut inst.h, h, key, value, warnings),
            None => invalid(warnings, "h", value, "expected a positive integer"),
        },
        "ratio" | "aspect" => match parse_ratio(value) {
            Some((w, h)) => {
                set_or_warn(&mut inst.w, w, key, value, warnings);
                inst.h = Some(h);
                inst.kind = Some(DimensionKind::Ratio);
            }
            None => invalid(warnings, "ratio", value, "expected W:H with positive integers"),
        },
        "kind" => match parse_kind(value) {
            Some(k) => set_or_warn(&mut inst.kind, k, key, value, warnings),
            None => invalid(warnings, "kind", value, "expected pixel|ratio"),
        },
        "mode" => match parse_fit_mode(value) {
            Some(m) => set_or_warn(&mut inst.mode, m, key, value, warnings),
            None => invalid(
                warnings,
                "mode",
                value,
                "expected resize|width|height|down|pad|up|crop",
            ),
        },
        "scale" | "factor" => match parse_factor(value) {
            Some(f) => set_or_warn(&mut inst.factor, f, key, value, warnings),
            None => invalid(warnings, "scale", value, "expected a positive number"),
        },
        "bg" | "bgcolor" => match CanvasColor::parse(value) {
            Some(c) => set_or_warn(&mut inst.bgcolor, c, key, value, warnings),
            None => invalid(warnings, "bgcolor", value, "expected hex color or color name"),
        },
        _ => {
            if KNOWN_EXTRAS.binary_search(&key).is_ok() {
                if inst.extras.contains_key(key) {
                    warnings.push(ParseWarning::DuplicateKey {
                        key: String::from(key),
                        value: String::from(value),
                    });
                }
                inst.extras.insert(String::from(key), String::from(value));
            } else {
                warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        }
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: T,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

fn invalid(
    warnings: &mut Vec<ParseWarning>,
    key: &'static str,
    value: &str,
    reason: &'static str,
) {
    warnings.push(ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

// ---- Value parsers ----

fn parse_dimension(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&v| v > 0)
}

fn parse_ratio(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once(':').or_else(|| s.split_once('x'))?;
    Some((parse_dimension(w)?, parse_dimension(h)?))
}

fn parse_kind(s: &str) -> Option<DimensionKind> {
    match s.trim().to_ascii_lowercase().as_str() {
        "pixel" | "px" => Some(DimensionKind::Pixel),
        "ratio" => Some(DimensionKind::Ratio),
        _ => None,
    }
}

fn parse_fit_mode(s: &str) -> Option<FitMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "resize" | "exact" | "stretch" => Some(FitMode::Resize),
        "width" => Some(FitMode::ScaleByWidth),
        "height" => Some(FitMode::ScaleByHeight),
        "down" | "max" | "within" => Some(FitMode::ScaleDown),
        "pad" | "letterbox" => Some(FitMode::ScaleDownWithBackground),
        "up" | "cover" => Some(FitMode::ScaleUp),
        "crop" | "fill" => Some(FitMode::ScaleUpAndCrop),
        _ => None,
    }
}

fn parse_factor(s: &str) -> Option<f64> {
    let s = s.trim().trim_end_matches(['x', 'X']);
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

// ---- Tokenizer ----

fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
