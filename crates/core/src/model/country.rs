use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountryError {
    #[error("country is missing a common name")]
    MissingName,

    #[error("country {name} has no flag image")]
    MissingFlag { name: String },
}

//
// ─── COUNTRY ───────────────────────────────────────────────────────────────────
//

/// A playable country: a display name plus the flag image shown to the player.
///
/// `alt_names` keeps every known spelling (common, official, native forms) for
/// later use; gameplay only ever compares against `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    name: String,
    alt_names: Vec<String>,
    flag_url: String,
}

impl Country {
    /// Build a country directly from its parts.
    ///
    /// # Errors
    ///
    /// Returns `CountryError::MissingName` or `CountryError::MissingFlag` when
    /// the name or flag URL is blank.
    pub fn new(
        name: impl Into<String>,
        alt_names: Vec<String>,
        flag_url: impl Into<String>,
    ) -> Result<Self, CountryError> {
        let name = name.into();
        let flag_url = flag_url.into();
        if name.trim().is_empty() {
            return Err(CountryError::MissingName);
        }
        if flag_url.trim().is_empty() {
            return Err(CountryError::MissingFlag { name });
        }
        Ok(Self {
            name,
            alt_names,
            flag_url,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn alt_names(&self) -> &[String] {
        &self.alt_names
    }

    #[must_use]
    pub fn flag_url(&self) -> &str {
        &self.flag_url
    }

    /// Accessible description of the flag image.
    #[must_use]
    pub fn flag_alt_text(&self) -> String {
        format!("Flag of {}", self.name)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated country as it arrives from a data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryDraft {
    pub common_name: Option<String>,
    pub official_name: Option<String>,
    /// Common names in native languages, in source document order.
    pub native_names: Vec<String>,
    pub flag_svg: Option<String>,
    pub flag_png: Option<String>,
}

impl CountryDraft {
    pub fn new(common_name: impl Into<String>) -> Self {
        Self {
            common_name: Some(common_name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_official(mut self, official: impl Into<String>) -> Self {
        self.official_name = Some(official.into());
        self
    }

    #[must_use]
    pub fn with_native(mut self, native: impl Into<String>) -> Self {
        self.native_names.push(native.into());
        self
    }

    #[must_use]
    pub fn with_svg(mut self, url: impl Into<String>) -> Self {
        self.flag_svg = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_png(mut self, url: impl Into<String>) -> Self {
        self.flag_png = Some(url.into());
        self
    }

    /// Validate the draft into a `Country`.
    ///
    /// The SVG flag wins over the PNG one. Alternate names keep the order
    /// common, official, natives with blank (or whitespace-only) entries
    /// dropped; duplicates stay.
    ///
    /// # Errors
    ///
    /// Returns `CountryError` when the common name or both flag URLs are blank.
    pub fn validate(self) -> Result<Country, CountryError> {
        let name = non_blank(self.common_name).ok_or(CountryError::MissingName)?;
        let flag_url = non_blank(self.flag_svg)
            .or_else(|| non_blank(self.flag_png))
            .ok_or_else(|| CountryError::MissingFlag { name: name.clone() })?;

        let alt_names = std::iter::once(Some(name.clone()))
            .chain(std::iter::once(self.official_name))
            .chain(self.native_names.into_iter().map(Some))
            .filter_map(non_blank)
            .collect();

        Country::new(name, alt_names, flag_url)
    }
}

// Matches the blank check in `Country::new`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
