//! SQL literal encoding for runtime values.
//!
//! Text is single-quoted with embedded quotes doubled, nulls of any type render
//! as `NULL`, booleans as `TRUE`/`FALSE`, and numbers use Rust's
//! locale-independent `Display` form. Values with no literal rule are rejected
//! rather than guessed at.

use std::fmt::Display;

use sea_query::Value;

use crate::error::{Error, Result};

pub(crate) const NULL: &str = "NULL";

/// Converts a single value into SQL literal text.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLiteralType`] for value kinds without a literal
/// rule, including non-finite floats.
pub fn to_literal(value: &Value) -> Result<String> {
    let literal = match value {
        Value::Bool(v) => v.map_or_else(null, |b| (if b { "TRUE" } else { "FALSE" }).to_string()),
        Value::TinyInt(v) => numeric(*v),
        Value::SmallInt(v) => numeric(*v),
        Value::Int(v) => numeric(*v),
        Value::BigInt(v) => numeric(*v),
        Value::TinyUnsigned(v) => numeric(*v),
        Value::SmallUnsigned(v) => numeric(*v),
        Value::Unsigned(v) => numeric(*v),
        Value::BigUnsigned(v) => numeric(*v),
        Value::Float(v) => float(*v, f32::is_finite, "f32")?,
        Value::Double(v) => float(*v, f64::is_finite, "f64")?,
        Value::String(v) => v.as_deref().map_or_else(null, |s| quote(s)),
        Value::Char(v) => v.map_or_else(null, |ch| quote(ch.encode_utf8(&mut [0; 4]))),
        Value::Bytes(v) => v.as_deref().map_or_else(null, |bytes| hex(bytes)),
        Value::ChronoDate(v) => v.as_deref().map_or_else(null, |date| quote(&date.to_string())),
        Value::ChronoTime(v) => v.as_deref().map_or_else(null, |time| quote(&time.to_string())),
        Value::ChronoDateTime(v) => v.as_deref().map_or_else(null, |dt| quote(&dt.to_string())),
        Value::ChronoDateTimeUtc(v) => {
            v.as_deref().map_or_else(null, |dt| quote(&dt.to_rfc3339()))
        }
        Value::ChronoDateTimeWithTimeZone(v) => {
            v.as_deref().map_or_else(null, |dt| quote(&dt.to_rfc3339()))
        }
        Value::Json(v) => v.as_deref().map_or_else(null, |json| quote(&json.to_string())),
        // local timestamps depend on the process time zone
        other => {
            return Err(Error::UnsupportedLiteralType {
                type_name: kind(other),
                field: None,
            });
        }
    };
    Ok(literal)
}

/// Wraps text in single quotes, doubling any embedded single quote.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            quoted.push('\'');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

fn null() -> String {
    NULL.to_string()
}

fn numeric<T: Display>(value: Option<T>) -> String {
    value.map_or_else(null, |n| n.to_string())
}

fn float<F>(value: Option<F>, is_finite: fn(F) -> bool, type_name: &str) -> Result<String>
where
    F: Copy + Display,
{
    match value {
        None => Ok(null()),
        Some(v) if is_finite(v) => Ok(v.to_string()),
        Some(v) => Err(Error::UnsupportedLiteralType {
            type_name: format!("{type_name} ({v})"),
            field: None,
        }),
    }
}

fn hex(bytes: &[u8]) -> String {
    let digits: String = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
    format!("X'{digits}'")
}

// Variant name from the derived `Debug` output, e.g. `ChronoDateTimeLocal`.
fn kind(value: &Value) -> String {
    let debug = format!("{value:?}");
    debug.split('(').next().unwrap_or(&debug).to_string()
}
