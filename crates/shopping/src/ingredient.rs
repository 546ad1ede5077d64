use std::{collections::HashMap, sync::LazyLock};

use platewise_shared::Language;

static EMBEDDED: LazyLock<IngredientDictionary> = LazyLock::new(|| {
    IngredientDictionary::from_json(include_str!("../data/ingredients.json")).unwrap_or_else(
        |err| {
            tracing::error!(%err, "embedded ingredient dictionary is invalid");
            IngredientDictionary::default()
        },
    )
});

/// Localized names for canonical ingredient names.
pub trait IngredientTranslator: Send + Sync {
    /// Translation of `canonical_name`, `None` when the vocabulary has none.
    fn lookup(&self, canonical_name: &str, language: Language) -> Option<String>;
}

/// Translated name, or the canonical name when no translation exists.
pub fn translate_ingredient(
    translator: &dyn IngredientTranslator,
    canonical_name: &str,
    language: Language,
) -> String {
    translator
        .lookup(canonical_name, language)
        .unwrap_or_else(|| canonical_name.to_owned())
}

/// Vocabulary keyed by lowercase canonical name, then language.
#[derive(Clone, Debug, Default)]
pub struct IngredientDictionary {
    entries: HashMap<String, HashMap<Language, String>>,
}

impl IngredientDictionary {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, HashMap<Language, String>> = serde_json::from_str(json)?;

        let entries = raw
            .into_iter()
            .map(|(name, translations)| (normalize(&name), translations))
            .collect();

        Ok(Self { entries })
    }

    /// The vocabulary bundled with the crate.
    pub fn embedded() -> Self {
        EMBEDDED.clone()
    }

    pub fn insert(
        &mut self,
        canonical_name: &str,
        language: Language,
        translation: impl Into<String>,
    ) {
        self.entries
            .entry(normalize(canonical_name))
            .or_default()
            .insert(language, translation.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IngredientTranslator for IngredientDictionary {
    fn lookup(&self, canonical_name: &str, language: Language) -> Option<String> {
        self.entries
            .get(&normalize(canonical_name))?
            .get(&language)
            .cloned()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
