//! Standards Table
//!
//! Fixed regulatory limits for the four monitored pollutants, in mg/m3.
//! The table is a compile-time constant and also defines the canonical
//! order in which pollutants are evaluated and displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownPollutant;

/// Unit shared by every standard and reading
pub const UNIT: &str = "mg/m3";

/// A monitored pollutant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "CO2")]
    Co2,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "Dust")]
    Dust,
}

impl Pollutant {
    /// Declared order of the Standards Table
    pub const ALL: [Pollutant; 4] = [Pollutant::Co2, Pollutant::No2, Pollutant::So2, Pollutant::Dust];

    /// Canonical identifier ("CO2", "NO2", "SO2", "Dust")
    pub fn id(&self) -> &'static str {
        match self {
            Pollutant::Co2 => "CO2",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Dust => "Dust",
        }
    }

    /// Regulatory standard for this pollutant
    pub fn standard(&self) -> f64 {
        standard_for(*self)
    }

    /// Input label, e.g. "CO2 (mg/m3)"
    pub fn field_label(&self) -> String {
        format!("{} ({})", self.id(), UNIT)
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Pollutant {
    type Err = UnknownPollutant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| UnknownPollutant(s.to_string()))
    }
}

/// One row of the Standards Table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantStandard {
    pub pollutant: Pollutant,
    /// Limit in mg/m3
    pub value: f64,
}

/// The Standards Table, in declared order
pub static STANDARDS: [PollutantStandard; 4] = [
    PollutantStandard { pollutant: Pollutant::Co2, value: 50.0 },
    PollutantStandard { pollutant: Pollutant::No2, value: 40.0 },
    PollutantStandard { pollutant: Pollutant::So2, value: 20.0 },
    PollutantStandard { pollutant: Pollutant::Dust, value: 30.0 },
];

/// Look up the standard value for a pollutant.
///
/// Total over the closed pollutant set, so there is no error path.
pub fn standard_for(pollutant: Pollutant) -> f64 {
    match pollutant {
        Pollutant::Co2 => STANDARDS[0].value,
        Pollutant::No2 => STANDARDS[1].value,
        Pollutant::So2 => STANDARDS[2].value,
        Pollutant::Dust => STANDARDS[3].value,
    }
}
