mod country;
mod dataset;
mod round;
mod totals;

pub use country::{Country, CountryDraft, CountryError};
pub use dataset::Dataset;
pub use round::{OptionState, RoundState};
pub use totals::SessionTotals;
