//! lifex_rs
//!
//! A lightweight Rust library for loading, querying, and summarizing country
//! life-expectancy data from delimited text files. Pairs with the `lifex` CLI.
//!
//! ### Features
//! - Load a countries dataset (region, population, income group, life
//!   expectancy at three time points) from a CSV file
//! - Query it: list, filter by region, extremes, collection-wide average,
//!   counts per income group, largest improvement
//! - Quick per-region summary statistics (min, max, mean, median)
//! - Export the loaded records as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use lifex_rs::Analyzer;
//!
//! let mut analyzer = Analyzer::new();
//! analyzer.load_from_path("life_expectancy.csv")?;
//! let best = analyzer.highest_life_expectancy()?;
//! println!("{}: {:.1} years", best.name, best.average_life_expectancy());
//! let stats = lifex_rs::stats::regional_summary(analyzer.countries());
//! println!("{:#?}", stats);
//! # Ok::<(), lifex_rs::DatasetError>(())
//! ```

pub mod dataset;
pub mod models;
pub mod stats;
pub mod storage;

pub use dataset::{Analyzer, DatasetError};
pub use models::Country;
