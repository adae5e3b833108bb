use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One record of the remote planet collection. Numeric fields arrive as
/// decimal-numeral strings, with the literal `"unknown"` marking a value the
/// collection does not know. Records are never mutated after retrieval; the
/// `url` field is the record identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
    pub url: String,
}

/// Marker the collection uses for a field whose true value is not known.
pub const UNKNOWN_VALUE: &str = "unknown";

/// The columns a numeric filter or sort may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetColumn {
    Population,
    OrbitalPeriod,
    Diameter,
    RotationPeriod,
    SurfaceWater,
}

impl PlanetColumn {
    pub const ALL: [PlanetColumn; 5] = [
        PlanetColumn::Population,
        PlanetColumn::OrbitalPeriod,
        PlanetColumn::Diameter,
        PlanetColumn::RotationPeriod,
        PlanetColumn::SurfaceWater,
    ];
}

impl std::fmt::Display for PlanetColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanetColumn::Population => write!(f, "population"),
            PlanetColumn::OrbitalPeriod => write!(f, "orbital_period"),
            PlanetColumn::Diameter => write!(f, "diameter"),
            PlanetColumn::RotationPeriod => write!(f, "rotation_period"),
            PlanetColumn::SurfaceWater => write!(f, "surface_water"),
        }
    }
}

impl FromStr for PlanetColumn {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "population" => Ok(PlanetColumn::Population),
            "orbital_period" => Ok(PlanetColumn::OrbitalPeriod),
            "diameter" => Ok(PlanetColumn::Diameter),
            "rotation_period" => Ok(PlanetColumn::RotationPeriod),
            "surface_water" => Ok(PlanetColumn::SurfaceWater),
            _ => anyhow::bail!("Invalid column name: {}", s),
        }
    }
}

impl Planet {
    /// Borrow the raw string value of one filterable column.
    pub fn field(&self, column: PlanetColumn) -> &str {
        match column {
            PlanetColumn::Population => &self.population,
            PlanetColumn::OrbitalPeriod => &self.orbital_period,
            PlanetColumn::Diameter => &self.diameter,
            PlanetColumn::RotationPeriod => &self.rotation_period,
            PlanetColumn::SurfaceWater => &self.surface_water,
        }
    }
}
