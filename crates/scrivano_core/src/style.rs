//! Writing styles supported by the generation endpoint.

use serde::{Deserialize, Serialize};

/// Writing styles the generation endpoint recognizes.
///
/// The request itself carries a free string (the controller forwards the
/// form value unvalidated); this enum exists for configuration defaults
/// and CLI parsing, where only known styles make sense.
///
/// # Examples
///
/// ```
/// use scrivano_core::Style;
/// use std::str::FromStr;
///
/// assert_eq!(Style::Technical.to_string(), "technical");
/// assert_eq!(Style::from_str("marketing").unwrap(), Style::Marketing);
/// assert!(Style::from_str("baroque").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    /// Precise, terminology-heavy prose.
    #[default]
    Technical,
    /// Conversational tone.
    Casual,
    /// Formal register.
    Formal,
    /// Promotional copy.
    Marketing,
    /// Citation-oriented academic prose.
    Academic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantNames;

    #[test]
    fn lowercase_round_trip() {
        for name in Style::VARIANTS {
            let style: Style = name.parse().expect("Known style");
            assert_eq!(style.to_string(), *name);
        }
    }

    #[test]
    fn default_is_technical() {
        assert_eq!(Style::default(), Style::Technical);
    }
}
