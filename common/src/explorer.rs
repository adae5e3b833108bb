use crate::errors::FilterError;
use crate::filters::{ColumnFilter, FilterSet};
use crate::pipeline::build_view;
use crate::planet::{Planet, PlanetColumn};
use crate::sort::SortSpec;
use log::debug;
use planet_search::CompareOp;

/// The triple supplied by the retrieval collaborator. The explorer never
/// fetches anything itself; when `error_message` is set the view is not
/// meaningful and presentation should short-circuit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub records: Option<Vec<Planet>>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl FetchState {
    pub fn loading() -> Self {
        FetchState {
            records: None,
            is_loading: true,
            error_message: None,
        }
    }

    pub fn from_result(result: Result<Vec<Planet>, anyhow::Error>) -> Self {
        match result {
            Ok(records) => FetchState {
                records: Some(records),
                is_loading: false,
                error_message: None,
            },
            Err(err) => FetchState {
                records: None,
                is_loading: false,
                error_message: Some(err.to_string()),
            },
        }
    }
}

/// The selection being edited before it is committed as a filter. After every
/// successful commit it returns to the default: population, greater-than, "0".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFilter {
    pub column: PlanetColumn,
    pub op: CompareOp,
    pub threshold: String,
}

impl Default for StagedFilter {
    fn default() -> Self {
        StagedFilter {
            column: PlanetColumn::Population,
            op: CompareOp::GreaterThan,
            threshold: "0".to_string(),
        }
    }
}

/// One explorer session: fetched records plus the user's current constraints.
/// The displayed view is a pure function of those inputs and is recomputed in
/// full by [`Explorer::view`] after any mutation; there is no incremental
/// bookkeeping to drift out of sync.
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    fetch: FetchState,
    text_query: String,
    filters: FilterSet,
    staged: StagedFilter,
    sort: Option<SortSpec>,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record set, e.g. after a retrieval completes. The previous
    /// records are discarded; filters and sort carry over unchanged.
    pub fn set_fetch_state(&mut self, fetch: FetchState) {
        self.fetch = fetch;
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn set_text_query(&mut self, query: impl Into<String>) {
        self.text_query = query.into();
    }

    pub fn text_query(&self) -> &str {
        &self.text_query
    }

    pub fn stage_filter(&mut self, column: PlanetColumn, op: CompareOp, threshold: impl Into<String>) {
        self.staged = StagedFilter {
            column,
            op,
            threshold: threshold.into(),
        };
    }

    pub fn staged_filter(&self) -> &StagedFilter {
        &self.staged
    }

    /// Commit the staged selection as an active filter. On success the staged
    /// selection resets to its default; on rejection both the filter set and
    /// the staged selection are left untouched.
    pub fn commit_staged_filter(&mut self) -> Result<(), FilterError> {
        let filter = ColumnFilter::new(
            self.staged.column,
            self.staged.op,
            self.staged.threshold.clone(),
        );
        let description = filter.to_string();
        self.filters.add(filter)?;
        debug!("filter added: {}", description);
        self.staged = StagedFilter::default();
        Ok(())
    }

    pub fn add_filter(&mut self, filter: ColumnFilter) -> Result<(), FilterError> {
        self.filters.add(filter)
    }

    pub fn remove_filter(&mut self, index: usize) -> Result<ColumnFilter, FilterError> {
        self.filters.remove(index)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn set_sort(&mut self, spec: SortSpec) {
        self.sort = Some(spec);
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Recompute the displayed records from the full input set.
    pub fn view(&self) -> Vec<Planet> {
        build_view(
            self.fetch.records.as_deref(),
            &self.text_query,
            &self.filters,
            self.sort.as_ref(),
        )
    }
}
