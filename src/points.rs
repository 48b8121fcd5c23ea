//! Extraction of the interpolation points from a JSON record.
//!
//! A record looks like
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every key other than `keys` is the x coordinate of a point; its `value`,
//! read in `base`, is the y coordinate.

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use serde_json::{Number, Value};
use tracing::{debug, warn};

use crate::base::parse_base;
use crate::error::{Result, SecretError};

/// A sample point of the polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point { x: x.into(), y: y.into() }
    }
}

/// Parse raw record text.
pub fn parse_record(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Select the `keys.k` points with the smallest x coordinates.
///
/// Fails if the record is malformed, holds fewer than k points, or if two of
/// the selected points share an x coordinate.
pub fn select_points(record: &Value) -> Result<Vec<Point>> {
    let obj = record
        .as_object()
        .ok_or_else(|| SecretError::InvalidRecord(json_kind(record).to_string()))?;
    let keys = obj.get("keys").ok_or(SecretError::MissingK)?;
    let k = read_k(keys)?;

    let mut entries = Vec::with_capacity(obj.len().saturating_sub(1));
    for (key, val) in obj.iter() {
        if key == "keys" {
            continue;
        }
        entries.push(read_point(key, val)?);
    }
    check_declared_count(keys, entries.len());

    if entries.len() < k {
        return Err(SecretError::InsufficientPoints {
            needed: k,
            available: entries.len(),
        });
    }

    entries.sort_by(|a, b| a.x.cmp(&b.x));
    entries.truncate(k);
    if let Some(pair) = entries.windows(2).find(|pair| pair[0].x == pair[1].x) {
        return Err(SecretError::DuplicateX(pair[0].x.clone()));
    }

    let selected: Vec<String> = entries.iter().map(|p| p.x.to_string()).collect();
    debug!(k, ?selected, "selected points");
    Ok(entries)
}

fn read_k(keys: &Value) -> Result<usize> {
    let k = keys.get("k").ok_or(SecretError::MissingK)?;
    positive_integer(k).ok_or_else(|| SecretError::InvalidK(k.to_string()))
}

/// Positive integers, also written as integral floats such as `3.0`.
fn positive_integer(value: &Value) -> Option<usize> {
    let n = match value.as_u64() {
        Some(n) => n,
        None => {
            let f = value.as_f64()?;
            if f.fract() != 0.0 || f < 1.0 || f > u64::MAX as f64 {
                return None;
            }
            f as u64
        }
    };
    usize::try_from(n).ok().filter(|&n| n > 0)
}

/// `keys.n` is informational; a mismatch is logged and otherwise ignored.
fn check_declared_count(keys: &Value, found: usize) {
    let Some(n) = keys.get("n") else {
        return;
    };
    match n.as_u64() {
        Some(declared) if usize::try_from(declared).ok() == Some(found) => {}
        Some(declared) => warn!(declared, found, "keys.n does not match the number of points"),
        None => warn!(n = %n, "ignoring non-integer keys.n"),
    }
}

fn is_decimal_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn read_point(key: &str, val: &Value) -> Result<Point> {
    if !is_decimal_integer(key) {
        return Err(SecretError::InvalidPointKey(key.to_string()));
    }
    let x = parse_base(key, 10)?;

    let entry = val.as_object().ok_or_else(|| SecretError::InvalidPointEntry {
        key: key.to_string(),
        reason: "expected an object",
    })?;
    let base = entry.get("base").ok_or_else(|| SecretError::InvalidPointEntry {
        key: key.to_string(),
        reason: "missing base",
    })?;
    let value = entry.get("value").ok_or_else(|| SecretError::InvalidPointEntry {
        key: key.to_string(),
        reason: "missing value",
    })?;

    let base = read_base(base)?;
    let text = value_text(key, value)?;
    let y = parse_base(&text, base)?;
    Ok(Point { x, y })
}

/// Bases are truncated to integers. The usual input files write them as
/// strings, so numeric strings are read the same way as numbers.
fn read_base(base: &Value) -> Result<u32> {
    let invalid = || SecretError::InvalidBase(base.to_string());
    let number = match base {
        Value::Number(n) => n.as_i64().map(|i| i as f64).or_else(|| n.as_f64()),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
    .ok_or_else(invalid)?;

    let truncated = number.trunc();
    if !(2.0..=36.0).contains(&truncated) {
        return Err(invalid());
    }
    Ok(truncated as u32)
}

fn value_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => number_text(key, n),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(SecretError::InvalidValueType {
            key: key.to_string(),
            found: json_kind(other).to_string(),
        }),
    }
}

/// Decimal digits of an integral number. Integer literals keep their digits
/// however large they are; floats such as `12.0` or `1e20` must be integral.
fn number_text(key: &str, n: &Number) -> Result<String> {
    let text = n.to_string();
    if is_decimal_integer(&text) {
        return Ok(text);
    }
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .and_then(BigInt::from_f64)
        .map(|i| i.to_string())
        .ok_or_else(|| SecretError::InvalidValueType {
            key: key.to_string(),
            found: format!("non-integral number {text}"),
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
