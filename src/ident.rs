//! Identifier case-variant derivation.
//! An identifier arrives in arbitrary casing and is rendered into the four
//! variants used for renaming: snake_case, kebab-case, Title Case and
//! PascalCase. All four are derived from one canonical word list so that
//! re-deriving from any rendered variant reproduces the identical set.

use cruet::Inflector;

use crate::error::{Error, Result};

/// The case styles a template identifier is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// snake_case (e.g. my_project)
    Snake,
    /// kebab-case (e.g. my-project)
    Kebab,
    /// Title Case (e.g. My Project)
    Title,
    /// PascalCase (e.g. MyProject)
    Pascal,
}

impl CaseStyle {
    /// All styles, in the order variants are reported.
    pub const ALL: [CaseStyle; 4] =
        [CaseStyle::Snake, CaseStyle::Kebab, CaseStyle::Title, CaseStyle::Pascal];
}

/// The four case-variant renderings of one identifier.
///
/// Words are canonicalized through snake_case before rendering, so two
/// spellings of the same identifier ("MyApp", "my_app", "my-app") always
/// produce equal sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    snake: String,
    kebab: String,
    title: String,
    pascal: String,
}

impl VariantSet {
    /// Derives the variant set from a raw identifier.
    ///
    /// # Errors
    /// * `Error::InvalidIdentifier` if the input contains no alphanumeric
    ///   word to split
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidIdentifier(raw.to_string()));
        }

        let snake = trimmed.to_snake_case();
        Ok(Self {
            kebab: snake.to_kebab_case(),
            title: snake.to_title_case(),
            pascal: snake.to_pascal_case(),
            snake,
        })
    }

    /// Returns the rendering for one case style.
    pub fn get(&self, style: CaseStyle) -> &str {
        match style {
            CaseStyle::Snake => &self.snake,
            CaseStyle::Kebab => &self.kebab,
            CaseStyle::Title => &self.title,
            CaseStyle::Pascal => &self.pascal,
        }
    }

    /// Canonical snake_case rendering.
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// All `(style, rendering)` pairs in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (CaseStyle, &str)> {
        CaseStyle::ALL.into_iter().map(|style| (style, self.get(style)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_of_multi_word_identifier() {
        let set = VariantSet::new("template_name").unwrap();
        assert_eq!(set.get(CaseStyle::Snake), "template_name");
        assert_eq!(set.get(CaseStyle::Kebab), "template-name");
        assert_eq!(set.get(CaseStyle::Title), "Template Name");
        assert_eq!(set.get(CaseStyle::Pascal), "TemplateName");
    }

    #[test]
    fn test_degenerate_single_word() {
        // snake and kebab coincide for one lowercase word; expected
        let set = VariantSet::new("demo").unwrap();
        assert_eq!(set.get(CaseStyle::Snake), "demo");
        assert_eq!(set.get(CaseStyle::Kebab), "demo");
        assert_eq!(set.get(CaseStyle::Pascal), "Demo");
    }

    #[test]
    fn test_rejects_non_alphanumeric_input() {
        assert!(matches!(VariantSet::new(""), Err(Error::InvalidIdentifier(_))));
        assert!(matches!(VariantSet::new("   "), Err(Error::InvalidIdentifier(_))));
        assert!(matches!(VariantSet::new("_-_"), Err(Error::InvalidIdentifier(_))));
    }
}
