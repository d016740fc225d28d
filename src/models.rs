use serde::{Deserialize, Serialize};

/// Observation years of the three life-expectancy columns, in column order.
pub const OBSERVATION_YEARS: [i32; 3] = [2010, 2015, 2020];

/// One country row (one row = one country observation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub name: String,
    pub region: String,
    pub population: u64,
    /// Free-form categorical label (e.g. "High income").
    pub income_group: String,
    /// Life expectancy at [`OBSERVATION_YEARS`], in that order.
    pub life_expectancy: [f64; 3],
}

impl Country {
    /// Arithmetic mean of the three stored life-expectancy values.
    pub fn average_life_expectancy(&self) -> f64 {
        self.life_expectancy.iter().sum::<f64>() / self.life_expectancy.len() as f64
    }

    /// Change from the first to the last observation (signed; positive =
    /// improvement, negative = decline).
    pub fn change_first_to_last(&self) -> f64 {
        self.life_expectancy[2] - self.life_expectancy[0]
    }
}
