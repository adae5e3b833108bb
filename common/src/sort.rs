use crate::planet::{Planet, PlanetColumn, UNKNOWN_VALUE};
use planet_search::parse_decimal;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => anyhow::bail!("Invalid sort direction: {}", s),
        }
    }
}

/// The single active ordering. Replaced in whole by user selection, never
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: PlanetColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: PlanetColumn, direction: SortDirection) -> Self {
        SortSpec { column, direction }
    }
}

/// Numeric sort key for one field value. The `"unknown"` sentinel pins the
/// record to the end of either ordering: positive infinity when ascending,
/// negative infinity when descending. Malformed input yields NaN, which the
/// comparator below resolves as a tie.
pub fn sort_value(field_value: &str, direction: SortDirection) -> f64 {
    if field_value == UNKNOWN_VALUE {
        return match direction {
            SortDirection::Asc => f64::INFINITY,
            SortDirection::Desc => f64::NEG_INFINITY,
        };
    }
    parse_decimal(field_value).unwrap_or(f64::NAN)
}

/// Stable sort over a copy of the input. The source slice is shared with the
/// upstream record cache and must never be reordered in place.
pub fn sort_planets(planets: &[Planet], spec: &SortSpec) -> Vec<Planet> {
    let mut sorted = planets.to_vec();
    sorted.sort_by(|a, b| {
        let first = sort_value(a.field(spec.column), spec.direction);
        let second = sort_value(b.field(spec.column), spec.direction);
        let ordering = match spec.direction {
            SortDirection::Asc => first.partial_cmp(&second),
            SortDirection::Desc => second.partial_cmp(&first),
        };
        // NaN keys compare as ties, so malformed records hold position
        ordering.unwrap_or(Ordering::Equal)
    });
    sorted
}
