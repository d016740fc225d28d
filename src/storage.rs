use crate::models::Country;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save countries as CSV with header, in the input column order (an exported
/// file is itself loadable).
pub fn save_csv<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "country",
        "region",
        "population",
        "income_group",
        "life_expectancy_2010",
        "life_expectancy_2015",
        "life_expectancy_2020",
    ))?;
    for c in countries {
        wtr.serialize((
            &c.name,
            &c.region,
            c.population,
            &c.income_group,
            c.life_expectancy[0],
            c.life_expectancy[1],
            c.life_expectancy[2],
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save countries as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(countries)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
