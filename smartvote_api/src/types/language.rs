//! Response languages known to the API.

use std::str::FromStr;

/// Language the API renders names and texts in.
///
/// The client accepts any language code as a string; this enum covers the
/// five languages smartvote publishes Swiss elections in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    German,
    French,
    Italian,
    Romansh,
    #[default]
    English,
}

impl Language {
    /// Every known language, in the order the API lists them.
    pub const ALL: [Language; 5] = [
        Language::German,
        Language::French,
        Language::Italian,
        Language::Romansh,
        Language::English,
    ];

    /// The code sent as the `lang` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Romansh => "rm",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "de" => Ok(Language::German),
            "fr" => Ok(Language::French),
            "it" => Ok(Language::Italian),
            "rm" => Ok(Language::Romansh),
            "en" => Ok(Language::English),
            _ => Err(()),
        }
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.as_str().to_string()
    }
}
