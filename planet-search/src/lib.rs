use regex::Regex;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    GreaterThan,
    LessThan,
    EqualTo,
}

impl FromStr for CompareOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gt" | ">" | "greater-than" => Ok(CompareOp::GreaterThan),
            "lt" | "<" | "less-than" => Ok(CompareOp::LessThan),
            "eq" | "=" | "==" | "equal-to" => Ok(CompareOp::EqualTo),
            _ => anyhow::bail!("Invalid comparison operator: {}", s),
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::GreaterThan => write!(f, ">"),
            CompareOp::LessThan => write!(f, "<"),
            CompareOp::EqualTo => write!(f, "=="),
        }
    }
}

/// Parse a decimal-numeral string. Collection fields hold numbers as strings
/// ("12742", "10.5") and also carry non-numeric markers such as "unknown",
/// which yield `None` rather than an error.
pub fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Evaluate one `(value, operator, threshold)` triple.
///
/// Fail-open: an incomplete filter excludes nothing, so an empty value,
/// empty/unrecognized operator, or empty threshold all return `true`.
/// A value or threshold that does not parse as a decimal number makes every
/// comparison `false` instead of erroring.
pub fn compare(field_value: &str, operator: &str, threshold: &str) -> bool {
    if field_value.is_empty() || operator.is_empty() || threshold.is_empty() {
        return true;
    }
    let op = match CompareOp::from_str(operator) {
        Ok(op) => op,
        Err(_) => return true,
    };
    compare_with(field_value, op, threshold)
}

/// Like [`compare`], for callers that already hold a parsed operator.
/// Empty value or threshold stays fail-open.
pub fn compare_with(field_value: &str, op: CompareOp, threshold: &str) -> bool {
    if field_value.is_empty() || threshold.is_empty() {
        return true;
    }
    compare_parsed(field_value, op, threshold)
}

fn compare_parsed(field_value: &str, op: CompareOp, threshold: &str) -> bool {
    let (value, limit) = match (parse_decimal(field_value), parse_decimal(threshold)) {
        (Some(value), Some(limit)) => (value, limit),
        // NaN semantics: a malformed side silently fails the comparison
        _ => return false,
    };
    match op {
        CompareOp::GreaterThan => value > limit,
        CompareOp::LessThan => value < limit,
        CompareOp::EqualTo => value == limit,
    }
}

/// Case-insensitive substring containment of `query` within `name`.
/// The empty query matches everything.
pub fn matches_text(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// One committed numeric constraint: `key op threshold`, where `key` names a
/// column of the record collection. Keys are plain strings here; the caller
/// validates them against its column set when the filter is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: String,
    pub op: CompareOp,
    pub threshold: String,
}

impl FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(
            r"^\s*([\w\-]+)\s*(>=|<=|==|!=|>|<|=|greater-than|less-than|equal-to|gt|lt|eq)\s*(.*)$",
        )
        .unwrap();
        if let Some(captures) = re.captures(s) {
            let key = captures[1].trim().to_string();
            let op = CompareOp::from_str(captures[2].trim())?;
            let threshold = captures[3]
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string();
            Ok(Filter { key, op, threshold })
        } else {
            anyhow::bail!(
                "Expected format: `column op threshold` (with optional spaces around the op), found {}",
                s
            );
        }
    }
}

impl Filter {
    /// Apply this filter to one field value, with the same fail-open and
    /// malformed-number rules as [`compare`].
    pub fn matches(&self, field_value: &str) -> bool {
        compare_with(field_value, self.op, &self.threshold)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.key, self.op, self.threshold)
    }
}
