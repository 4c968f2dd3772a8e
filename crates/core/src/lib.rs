#![forbid(unsafe_code)]

pub mod model;
pub mod options;
pub mod random;
pub mod timing;

pub use random::RngSource;
