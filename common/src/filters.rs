use crate::errors::FilterError;
use crate::planet::{Planet, PlanetColumn};
use planet_search::{compare_with, CompareOp, Filter};
use std::collections::HashSet;
use std::str::FromStr;

/// One active numeric constraint against a known column. Immutable once
/// created; destroyed by removal from the [`FilterSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: PlanetColumn,
    pub op: CompareOp,
    pub threshold: String,
}

impl ColumnFilter {
    pub fn new(column: PlanetColumn, op: CompareOp, threshold: impl Into<String>) -> Self {
        ColumnFilter {
            column,
            op,
            threshold: threshold.into(),
        }
    }

    pub fn matches(&self, planet: &Planet) -> bool {
        compare_with(planet.field(self.column), self.op, &self.threshold)
    }
}

impl TryFrom<Filter> for ColumnFilter {
    type Error = FilterError;

    fn try_from(filter: Filter) -> Result<Self, Self::Error> {
        let column = PlanetColumn::from_str(&filter.key)
            .map_err(|_| FilterError::UnknownColumn(filter.key.clone()))?;
        Ok(ColumnFilter {
            column,
            op: filter.op,
            threshold: filter.threshold,
        })
    }
}

impl std::fmt::Display for ColumnFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.threshold)
    }
}

/// The ordered collection of active numeric filters, at most one per column.
///
/// The used-column set is maintained at every mutation, never reconciled
/// after the fact: it always equals the exact set of columns in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<ColumnFilter>,
    used_columns: HashSet<PlanetColumn>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter. Rejected without any state change when the column is
    /// already in use or when every filterable column already has a filter.
    pub fn add(&mut self, filter: ColumnFilter) -> Result<(), FilterError> {
        if self.used_columns.contains(&filter.column) {
            return Err(FilterError::ColumnInUse(filter.column));
        }
        if self.filters.len() >= PlanetColumn::ALL.len() {
            return Err(FilterError::CapacityReached(PlanetColumn::ALL.len()));
        }
        self.used_columns.insert(filter.column);
        self.filters.push(filter);
        Ok(())
    }

    /// Remove the filter at `index`, freeing its column for reuse. Later
    /// filters shift down by one position.
    pub fn remove(&mut self, index: usize) -> Result<ColumnFilter, FilterError> {
        if index >= self.filters.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                len: self.filters.len(),
            });
        }
        let removed = self.filters.remove(index);
        self.used_columns.remove(&removed.column);
        Ok(removed)
    }

    /// Drop every active filter unconditionally.
    pub fn clear(&mut self) {
        self.filters.clear();
        self.used_columns.clear();
    }

    pub fn filters(&self) -> &[ColumnFilter] {
        &self.filters
    }

    pub fn is_column_used(&self, column: PlanetColumn) -> bool {
        self.used_columns.contains(&column)
    }

    pub fn used_columns(&self) -> &HashSet<PlanetColumn> {
        &self.used_columns
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// True when the planet satisfies every active filter. An empty set
    /// excludes nothing.
    pub fn matches(&self, planet: &Planet) -> bool {
        self.filters.iter().all(|filter| filter.matches(planet))
    }
}
