//! Cell values and their text rendering.

use crate::column::NumberFormat;

/// A typed cell value, rendered to display text when appended.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Rendered as-is.
    Text(String),
    /// Decimal text, no separators.
    Int(i64),
    /// Decimal text for grid/segment indices.
    Index(usize),
    /// Rendered per the target column's [`NumberFormat`].
    Float(f64),
}

impl CellValue {
    /// Render to display text under the given float policy.
    pub fn render(&self, format: NumberFormat) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Index(value) => value.to_string(),
            CellValue::Float(value) => format_float(*value, format),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Index(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

/// Render a float under `format`.
///
/// The decimal point is always `.`, independent of locale.
pub fn format_float(value: f64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Fixed(decimals) => format!("{value:.decimals$}"),
        NumberFormat::Scientific => scientific(value),
        NumberFormat::Concise(significant) => concise(value, significant),
    }
}

/// `1.234560E+02`: six-decimal mantissa, signed two-digit exponent.
fn scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{value:.6E}");
    let Some((mantissa, exponent)) = text.split_once('E') else {
        return text;
    };
    match exponent.strip_prefix('-') {
        Some(digits) => format!("{mantissa}E-{digits:0>2}"),
        None => format!("{mantissa}E+{exponent:0>2}"),
    }
}

/// General formatting: fixed point trimmed of trailing zeros, switching to
/// scientific when the exponent drops below -4 or reaches `significant`.
fn concise(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let significant = significant.max(1);
    let probe = format!("{:.*E}", significant - 1, value);
    let Some((mantissa, exponent)) = probe.split_once('E') else {
        return probe;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return probe;
    };
    if exponent < -4 || exponent >= significant as i32 {
        let mantissa = trim_fraction_zeros(mantissa);
        if exponent < 0 {
            format!("{mantissa}E-{:0>2}", (-exponent).to_string())
        } else {
            format!("{mantissa}E+{:0>2}", exponent.to_string())
        }
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{value:.decimals$}");
        trim_fraction_zeros(&fixed).to_string()
    }
}

fn trim_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
