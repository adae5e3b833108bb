use crate::planet::PlanetColumn;

/// Rejections of filter-set mutations. A rejected operation leaves the set
/// untouched; callers can inspect the unchanged state after an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    ColumnInUse(PlanetColumn),
    CapacityReached(usize),
    IndexOutOfRange { index: usize, len: usize },
    UnknownColumn(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::ColumnInUse(column) => {
                write!(f, "Column already has an active filter: {}", column)
            }
            FilterError::CapacityReached(cap) => {
                write!(f, "All {} filterable columns are already in use", cap)
            }
            FilterError::IndexOutOfRange { index, len } => {
                write!(f, "No filter at index {}: {} filters active", index, len)
            }
            FilterError::UnknownColumn(name) => {
                write!(f, "Not a filterable column: {}", name)
            }
        }
    }
}

impl std::error::Error for FilterError {}
