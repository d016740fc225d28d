/// In-memory collection of country rows and the analytical queries over it.
///
/// The [`Analyzer`] owns its rows in file order and never mutates them after
/// a load; every query is a single linear scan. Errors are returned, never
/// logged or retried, so the caller decides what to report.
use crate::models::Country;
use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by [`Analyzer`] loads and queries.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input file is absent or cannot be opened.
    #[error("cannot open {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A data line has the wrong shape or a numeric field does not parse.
    /// `line` is the 1-based line number in the source file (the header is
    /// line 1).
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    /// A query that needs at least one record ran against an empty collection.
    #[error("no records loaded")]
    EmptyCollection,
}

/// Fixed positional layout of a data line:
/// `name,region,population,income_group,le_2010,le_2015,le_2020`.
const FIELDS_PER_LINE: usize = 7;

/// Owns an ordered collection of [`Country`] rows and answers queries over it.
#[derive(Debug, Default)]
pub struct Analyzer {
    countries: Vec<Country>,
}

impl Analyzer {
    /// Create an empty analyzer. Populate it with [`Analyzer::load_from_path`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Load country rows from a comma-delimited text file.
    ///
    /// The first line is discarded as a header without validation. Every
    /// other line must split into exactly seven fields in the fixed
    /// positional order above; `population` must parse as a base-10
    /// integer and the three life-expectancy fields as decimal numbers.
    /// Quoting is not supported: a comma always separates fields.
    ///
    /// Repeated calls append to the collection; callers that want a fresh
    /// dataset should start from a new `Analyzer`.
    ///
    /// ### Returns
    /// The number of rows loaded by this call.
    ///
    /// ### Errors
    /// - [`DatasetError::NotFound`] if the file cannot be opened
    /// - [`DatasetError::Parse`] on the first malformed line, carrying its
    ///   line number; the collection is left unchanged from before the call
    ///
    /// ### Example
    /// ```no_run
    /// # use lifex_rs::Analyzer;
    /// let mut analyzer = Analyzer::new();
    /// let n = analyzer.load_from_path("life_expectancy.csv")?;
    /// assert_eq!(n, analyzer.len());
    /// # Ok::<(), lifex_rs::DatasetError>(())
    /// ```
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        // Quoting off: a comma always splits, matching the file format.
        // Flexible so rows with the wrong width reach our own field-count
        // check instead of erroring inside the reader.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .from_reader(file);

        // Stage rows so a parse failure leaves `self.countries` untouched.
        let mut staged = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let line = idx + 2; // header occupies line 1
            let record = record.map_err(|e| DatasetError::Parse {
                line,
                reason: e.to_string(),
            })?;
            staged.push(parse_row(&record, line)?);
        }

        let loaded = staged.len();
        self.countries.append(&mut staged);
        Ok(loaded)
    }

    /// All loaded rows, in file order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Names of all loaded countries, in file order.
    pub fn list_all(&self) -> Vec<&str> {
        self.countries.iter().map(|c| c.name.as_str()).collect()
    }

    /// Rows whose region equals `region` exactly (case-sensitive), in file
    /// order. Empty if nothing matches.
    pub fn by_region(&self, region: &str) -> Vec<&Country> {
        self.countries.iter().filter(|c| c.region == region).collect()
    }

    /// Row with the highest average life expectancy; ties go to the first
    /// occurrence in file order.
    pub fn highest_life_expectancy(&self) -> Result<&Country, DatasetError> {
        self.countries
            .iter()
            .reduce(|best, c| {
                if c.average_life_expectancy() > best.average_life_expectancy() {
                    c
                } else {
                    best
                }
            })
            .ok_or(DatasetError::EmptyCollection)
    }

    /// Row with the lowest average life expectancy; ties go to the first
    /// occurrence in file order.
    pub fn lowest_life_expectancy(&self) -> Result<&Country, DatasetError> {
        self.countries
            .iter()
            .reduce(|best, c| {
                if c.average_life_expectancy() < best.average_life_expectancy() {
                    c
                } else {
                    best
                }
            })
            .ok_or(DatasetError::EmptyCollection)
    }

    /// Mean of the per-country average life expectancies.
    pub fn average_life_expectancy(&self) -> Result<f64, DatasetError> {
        if self.countries.is_empty() {
            return Err(DatasetError::EmptyCollection);
        }
        let total: f64 = self
            .countries
            .iter()
            .map(Country::average_life_expectancy)
            .sum();
        Ok(total / self.countries.len() as f64)
    }

    /// Number of rows whose income group equals `group` exactly.
    pub fn count_by_income_group(&self, group: &str) -> usize {
        self.countries
            .iter()
            .filter(|c| c.income_group == group)
            .count()
    }

    /// Row with the largest life-expectancy change from the first to the
    /// last observation; ties go to the first occurrence in file order.
    pub fn most_improved(&self) -> Result<&Country, DatasetError> {
        self.countries
            .iter()
            .reduce(|best, c| {
                if c.change_first_to_last() > best.change_first_to_last() {
                    c
                } else {
                    best
                }
            })
            .ok_or(DatasetError::EmptyCollection)
    }
}

fn parse_row(record: &csv::StringRecord, line: usize) -> Result<Country, DatasetError> {
    if record.len() != FIELDS_PER_LINE {
        return Err(DatasetError::Parse {
            line,
            reason: format!(
                "expected {FIELDS_PER_LINE} fields, found {}",
                record.len()
            ),
        });
    }

    let population = record[2].parse::<u64>().map_err(|_| DatasetError::Parse {
        line,
        reason: format!("population {:?} is not a non-negative integer", &record[2]),
    })?;

    let mut life_expectancy = [0.0f64; 3];
    for (slot, idx) in life_expectancy.iter_mut().zip(4..FIELDS_PER_LINE) {
        *slot = record[idx].parse::<f64>().map_err(|_| DatasetError::Parse {
            line,
            reason: format!("life expectancy {:?} is not a number", &record[idx]),
        })?;
    }

    Ok(Country {
        name: record[0].to_string(),
        region: record[1].to_string(),
        population,
        income_group: record[3].to_string(),
        life_expectancy,
    })
}
