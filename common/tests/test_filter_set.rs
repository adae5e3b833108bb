mod common;

use planet_search::CompareOp;
use starchart_common::{ColumnFilter, FilterError, FilterSet, PlanetColumn};

fn filter(column: PlanetColumn, threshold: &str) -> ColumnFilter {
    ColumnFilter::new(column, CompareOp::GreaterThan, threshold)
}

#[test]
fn test_add_and_bookkeeping() {
    let mut set = FilterSet::new();
    set.add(filter(PlanetColumn::Population, "1000000")).unwrap();
    set.add(filter(PlanetColumn::Diameter, "10000")).unwrap();

    assert_eq!(set.len(), 2);
    assert!(set.is_column_used(PlanetColumn::Population));
    assert!(set.is_column_used(PlanetColumn::Diameter));
    assert!(!set.is_column_used(PlanetColumn::SurfaceWater));
}

#[test]
fn test_duplicate_column_rejected() {
    let mut set = FilterSet::new();
    set.add(filter(PlanetColumn::Population, "1000000")).unwrap();

    let rejection = set.add(ColumnFilter::new(
        PlanetColumn::Population,
        CompareOp::LessThan,
        "5000000",
    ));
    assert_eq!(
        rejection,
        Err(FilterError::ColumnInUse(PlanetColumn::Population))
    );
    // rejected operation left the set untouched
    assert_eq!(set.len(), 1);
    assert_eq!(set.filters()[0].op, CompareOp::GreaterThan);
}

#[test]
fn test_capacity_cap_is_column_count() {
    let mut set = FilterSet::new();
    for column in PlanetColumn::ALL {
        set.add(filter(column, "0")).unwrap();
    }
    assert_eq!(set.len(), 5);

    // every column is used, so any further add reports the column collision
    let rejection = set.add(filter(PlanetColumn::Diameter, "1"));
    assert_eq!(
        rejection,
        Err(FilterError::ColumnInUse(PlanetColumn::Diameter))
    );
    assert_eq!(set.len(), 5);
}

#[test]
fn test_remove_frees_column_for_reuse() {
    let mut set = FilterSet::new();
    set.add(filter(PlanetColumn::Population, "1000000")).unwrap();
    set.add(filter(PlanetColumn::Diameter, "10000")).unwrap();
    set.add(filter(PlanetColumn::SurfaceWater, "20")).unwrap();

    let removed = set.remove(1).unwrap();
    assert_eq!(removed.column, PlanetColumn::Diameter);
    assert_eq!(set.len(), 2);
    assert!(!set.is_column_used(PlanetColumn::Diameter));

    // later entries shifted down by one
    assert_eq!(set.filters()[1].column, PlanetColumn::SurfaceWater);

    set.add(filter(PlanetColumn::Diameter, "12000")).unwrap();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_remove_out_of_range() {
    let mut set = FilterSet::new();
    set.add(filter(PlanetColumn::Population, "1000000")).unwrap();

    let rejection = set.remove(1);
    assert_eq!(rejection, Err(FilterError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_clear_empties_everything() {
    let mut set = FilterSet::new();
    set.add(filter(PlanetColumn::Population, "1000000")).unwrap();
    set.add(filter(PlanetColumn::Diameter, "10000")).unwrap();

    set.clear();
    assert!(set.is_empty());
    assert!(set.used_columns().is_empty());

    // clearing an already-empty set is fine
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_used_columns_match_filter_list() {
    let mut set = FilterSet::new();
    set.add(filter(PlanetColumn::RotationPeriod, "20")).unwrap();
    set.add(filter(PlanetColumn::OrbitalPeriod, "300")).unwrap();
    set.remove(0).unwrap();

    let listed: std::collections::HashSet<_> =
        set.filters().iter().map(|f| f.column).collect();
    assert_eq!(&listed, set.used_columns());
}

#[test]
fn test_matches_is_logical_and() {
    let planets = common::sample_planets();
    let mut set = FilterSet::new();
    set.add(filter(PlanetColumn::Population, "100000")).unwrap();
    set.add(filter(PlanetColumn::Diameter, "12000")).unwrap();

    let matching: Vec<_> = planets.iter().filter(|p| set.matches(p)).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].name, "Alderaan");
}

#[test]
fn test_typed_filter_from_expression() {
    use std::str::FromStr;

    let parsed = planet_search::Filter::from_str("population > 1000000").unwrap();
    let typed = ColumnFilter::try_from(parsed).unwrap();
    assert_eq!(typed.column, PlanetColumn::Population);
    assert_eq!(typed.threshold, "1000000");

    let parsed = planet_search::Filter::from_str("mass > 10").unwrap();
    let rejection = ColumnFilter::try_from(parsed);
    assert_eq!(rejection, Err(FilterError::UnknownColumn("mass".to_string())));
}
