mod rest;
mod source;

pub use rest::{CountriesApiConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, RestCountriesSource, parse_countries};
pub use source::CountrySource;
