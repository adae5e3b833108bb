//! Shared sample records for the starchart-common test suite.

#![allow(dead_code)]

use starchart_common::Planet;

/// Three planets straight from the remote collection's payload shape.
pub const SAMPLE_PLANETS_JSON: &str = r#"[
    {
        "name": "Tatooine",
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": "200000",
        "films": ["https://swapi.dev/api/films/1/"],
        "created": "2014-12-09T13:50:49.641000Z",
        "edited": "2014-12-20T20:58:18.411000Z",
        "url": "https://swapi.dev/api/planets/1/"
    },
    {
        "name": "Alderaan",
        "rotation_period": "24",
        "orbital_period": "364",
        "diameter": "12500",
        "climate": "temperate",
        "gravity": "1 standard",
        "terrain": "grasslands, mountains",
        "surface_water": "40",
        "population": "2000000000",
        "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/6/"],
        "created": "2014-12-10T11:35:48.479000Z",
        "edited": "2014-12-20T20:58:18.420000Z",
        "url": "https://swapi.dev/api/planets/2/"
    },
    {
        "name": "Yavin IV",
        "rotation_period": "24",
        "orbital_period": "4818",
        "diameter": "10200",
        "climate": "temperate, tropical",
        "gravity": "1 standard",
        "terrain": "jungle, rainforests",
        "surface_water": "8",
        "population": "1000",
        "films": ["https://swapi.dev/api/films/1/"],
        "created": "2014-12-10T11:37:19.144000Z",
        "edited": "2014-12-20T20:58:18.421000Z",
        "url": "https://swapi.dev/api/planets/3/"
    }
]"#;

pub fn sample_planets() -> Vec<Planet> {
    serde_json::from_str(SAMPLE_PLANETS_JSON).unwrap()
}

/// Minimal record builder for tests that only care about one or two fields.
pub fn planet(name: &str, diameter: &str, population: &str) -> Planet {
    Planet {
        name: name.to_string(),
        rotation_period: "24".to_string(),
        orbital_period: "365".to_string(),
        diameter: diameter.to_string(),
        climate: "temperate".to_string(),
        gravity: "1 standard".to_string(),
        terrain: "plains".to_string(),
        surface_water: "50".to_string(),
        population: population.to_string(),
        films: vec![],
        created: String::new(),
        edited: String::new(),
        url: format!("https://swapi.dev/api/planets/{}/", name),
    }
}
