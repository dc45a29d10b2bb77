//! Literal formatting shared by every emitted statement.

use crate::{RapidError, EXT_AXIS_UNUSED};

/// Plain decimal rendering; integral values lose their fractional part
/// (`1.0` -> `1`).
pub(crate) fn num(value: f64) -> String {
    value.to_string()
}

pub(crate) fn num_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|&v| num(v)).collect();
    format!("[{}]", items.join(","))
}

pub(crate) fn int_list(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(","))
}

/// External axes, with `+inf` written as the unused-axis sentinel.
pub(crate) fn ext_axis_list(values: &[f64]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|&v| {
            if v == f64::INFINITY {
                EXT_AXIS_UNUSED.to_string()
            } else {
                num(v)
            }
        })
        .collect();
    format!("[{}]", items.join(","))
}

pub(crate) fn rapid_bool(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Double-quoted RAPID string. Embedded quotes and backslashes are doubled.
pub(crate) fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\"\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Copies a slice into a fixed-size array, failing on any length mismatch.
pub(crate) fn fixed<T: Copy, const N: usize>(what: &str, values: &[T]) -> Result<[T; N], RapidError> {
    <[T; N]>::try_from(values).map_err(|_| RapidError::length_mismatch(what, N, values.len()))
}
