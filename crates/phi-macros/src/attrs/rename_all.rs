use convert_case::{Case, Casing as _};
use darling::FromMeta;

/// Case conventions accepted by `rename_all`, spelled the way serde spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameAll {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameAll {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "lowercase" => RenameAll::Lower,
            "UPPERCASE" => RenameAll::Upper,
            "PascalCase" => RenameAll::Pascal,
            "camelCase" => RenameAll::Camel,
            "snake_case" => RenameAll::Snake,
            "SCREAMING_SNAKE_CASE" => RenameAll::ScreamingSnake,
            "kebab-case" => RenameAll::Kebab,
            "SCREAMING-KEBAB-CASE" => RenameAll::ScreamingKebab,
            _ => return None,
        })
    }

    /// Rename a Rust identifier (already stripped of any `r#` prefix).
    pub fn apply(self, name: &str) -> String {
        // serde treats lowercase/UPPERCASE as plain case folding, not word splitting.
        match self {
            RenameAll::Lower => name.to_ascii_lowercase(),
            RenameAll::Upper => name.to_ascii_uppercase(),
            RenameAll::Pascal => name.to_case(Case::Pascal),
            RenameAll::Camel => name.to_case(Case::Camel),
            RenameAll::Snake => name.to_case(Case::Snake),
            RenameAll::ScreamingSnake => name.to_case(Case::UpperSnake),
            RenameAll::Kebab => name.to_case(Case::Kebab),
            RenameAll::ScreamingKebab => name.to_case(Case::Cobol),
        }
    }
}

impl FromMeta for RenameAll {
    fn from_string(value: &str) -> darling::Result<Self> {
        RenameAll::parse(value).ok_or_else(|| darling::Error::unknown_value(value))
    }
}
