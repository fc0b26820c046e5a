//! Content fingerprints for aligning records across runs.
//!
//! A fingerprint covers only the fields that define a test case
//! (`messages`, `tools`, `tool_choice`). Model name, endpoint and
//! credentials are ignored so that two runs of the same suite against
//! different backends line up.
//!
//! # Canonical form
//!
//! The key object is rendered with keys sorted at every level, `", "`
//! between items, `": "` after keys and non-ASCII left unescaped. Integer
//! literals keep their exact digits, whatever their size. Floats
//! use the shortest round-trip digits, fixed-point for exponents in
//! `[-4, 16)` and `1e+16` style otherwise. This matches the usual
//! sorted-keys JSON text produced by other eval tooling, so digests are
//! comparable across implementations.

use std::fmt;

use md5::{Digest, Md5};
use serde::Serialize;
use serde_json::{Number, Value};

use crate::domain::Record;

/// Lowercase hex MD5 of a record's canonical key object
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint a record by its test-defining request fields
    pub fn of(record: &Record) -> Self {
        let request = &record.request;
        let key = serde_json::json!({
            "messages": request.messages,
            "tools": request.tools,
            "tool_choice": request.tool_choice,
        });
        Self::of_canonical(&canonical_json(&key))
    }

    /// Digest an already-canonical string
    pub fn of_canonical(canonical: &str) -> Self {
        let mut hasher = Md5::new();
        hasher.update(canonical.as_bytes());
        Fingerprint(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a JSON value in canonical form
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(out, key);
                out.push_str(": ");
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Integer literals are emitted as written (any size, `-0` as `0`); anything
/// with a fraction or exponent goes through `format_float`
fn write_number(out: &mut String, n: &Number) {
    let raw = n.to_string();
    if raw.contains(|c| matches!(c, '.' | 'e' | 'E')) {
        match n.as_f64() {
            Some(f) => out.push_str(&format_float(f)),
            None => out.push_str(&raw),
        }
    } else if raw.trim_start_matches('-').bytes().all(|b| b == b'0') {
        out.push('0');
    } else {
        out.push_str(&raw);
    }
}

/// Shortest round-trip float text, fixed or scientific by decimal exponent
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.25e-7"
    let sci = format!("{:e}", f);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if (-4..16).contains(&exp) {
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        let body = if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
            } else {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            }
        } else {
            format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
        };
        format!("{}{}", sign, body)
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exp.abs())
    }
}
