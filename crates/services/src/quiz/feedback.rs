use std::fmt;

/// Message shown after the player picks an option.
///
/// Both variants name the correct country so a wrong pick still teaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct { country: String },
    Incorrect { country: String },
}

impl Feedback {
    #[must_use]
    pub fn new(country: impl Into<String>, correct: bool) -> Self {
        let country = country.into();
        if correct {
            Self::Correct { country }
        } else {
            Self::Incorrect { country }
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    #[must_use]
    pub fn country(&self) -> &str {
        match self {
            Self::Correct { country } | Self::Incorrect { country } => country,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct { country } => write!(f, "Correct! It is {country}."),
            Self::Incorrect { country } => write!(f, "Not quite. It is {country}."),
        }
    }
}
