//! Air Quality Checker
//!
//! Compares measured concentrations of CO2, NO2, SO2 and Dust against fixed
//! regulatory standards, classifies each reading, and derives an overall
//! verdict with a recommendation.
//!
//! - `standards`: the fixed Standards Table and pollutant identifiers
//! - `reading`: raw user input and the lenient parsing rule
//! - `evaluator`: classification and report assembly
//! - `assessment`: report types
//! - `formatters`: Markdown / JSON / HTML rendering
//! - `api_server`, `web` (feature `api`): HTTP form and JSON API
//!
//! ```
//! use air_quality_checker::{evaluate, RawReading, Summary};
//!
//! let raw = RawReading::from_pairs([("CO2", "40"), ("NO2", "30"), ("SO2", "10"), ("Dust", "20")]);
//! let report = evaluate(&raw);
//! assert_eq!(report.summary, Summary::Good);
//! ```

pub mod standards;
pub mod reading;
pub mod assessment;
pub mod evaluator;
pub mod formatters;
pub mod config;
pub mod error;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use standards::{standard_for, Pollutant, PollutantStandard, STANDARDS};
pub use reading::{parse_reading, RawReading};
pub use assessment::{AnalysisReport, Level, PollutantResult, Summary};
pub use evaluator::{classify, evaluate, HIGH_EXCEEDANCE_FACTOR};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
pub use error::{ConfigError, UnknownPollutant};

#[cfg(feature = "api")]
pub use api_server::create_router;
