use crate::models::Country;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for one region. The min/max/mean/median fields
/// describe the per-country average life expectancy within the region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub count: usize,
    pub population: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Compute per-region statistics, in deterministic region order.
pub fn regional_summary(countries: &[Country]) -> Vec<RegionSummary> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut populations: BTreeMap<&str, u64> = BTreeMap::new();
    for c in countries {
        groups
            .entry(&c.region)
            .or_default()
            .push(c.average_life_expectancy());
        *populations.entry(&c.region).or_default() += c.population;
    }

    let mut out = Vec::new();
    for (region, mut vals) in groups {
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let count = vals.len();
        let min = vals[0];
        let max = vals[count - 1];
        let mean = vals.iter().copied().sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            vals[count / 2]
        } else {
            (vals[count / 2 - 1] + vals[count / 2]) / 2.0
        };
        out.push(RegionSummary {
            region: region.to_string(),
            count,
            population: populations[region],
            min,
            max,
            mean,
            median,
        });
    }
    out
}
