use crate::filters::FilterSet;
use crate::planet::Planet;
use crate::sort::{sort_planets, SortSpec};
use planet_search::matches_text;

/// One deterministic transformation from raw records to displayed records:
/// numeric filters (AND-combined), then the text filter, then the sort.
/// Recomputed in full from its four inputs on every call; absent records
/// produce an empty view regardless of filter or sort state.
pub fn build_view(
    records: Option<&[Planet]>,
    text_query: &str,
    filters: &FilterSet,
    sort: Option<&SortSpec>,
) -> Vec<Planet> {
    let records = match records {
        Some(records) => records,
        None => return Vec::new(),
    };

    let narrowed: Vec<Planet> = records
        .iter()
        .filter(|planet| filters.matches(planet))
        .filter(|planet| matches_text(&planet.name, text_query))
        .cloned()
        .collect();

    match sort {
        Some(spec) => sort_planets(&narrowed, spec),
        None => narrowed,
    }
}
