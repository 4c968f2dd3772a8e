#![forbid(unsafe_code)]

pub mod countries;
pub mod error;
pub mod quiz;

pub use quiz_core::RngSource;
pub use reqwest::StatusCode;

pub use countries::{CountriesApiConfig, CountrySource, RestCountriesSource};
pub use error::{LoadError, SourceError};
pub use quiz::{AdvanceTicket, Feedback, LoadStatus, QuizLoopService, QuizSession};
