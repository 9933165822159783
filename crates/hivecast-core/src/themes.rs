use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One marketing angle driving content generation. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary_keyword: String,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    pub hook: String,
    pub text_overlay: String,
}

#[derive(Debug, Deserialize)]
struct ThemesFile {
    themes: Vec<Theme>,
}

/// Fixed, ordered catalog of marketing themes, validated at startup.
///
/// The catalog is guaranteed non-empty once constructed, so selection
/// never fails at run time.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Load and validate the theme catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails
    /// validation (empty catalog, blank fields, duplicate names).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ThemesFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

        let themes_file: ThemesFile =
            serde_yaml::from_str(&content).map_err(ConfigError::ThemesFileParse)?;

        Self::from_themes(themes_file.themes)
    }

    /// Build a catalog from an in-memory theme list, applying the same
    /// validation as [`ThemeCatalog::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the list is empty, a theme has a
    /// blank field, or two themes share a name.
    pub fn from_themes(themes: Vec<Theme>) -> Result<Self, ConfigError> {
        validate_themes(&themes)?;
        Ok(Self { themes })
    }

    /// All themes in their declared order.
    #[must_use]
    pub fn all(&self) -> &[Theme] {
        &self.themes
    }

    /// Pick a theme uniformly at random, re-seeded per call.
    #[must_use]
    pub fn pick_random(&self) -> &Theme {
        self.pick_with(&mut rand::rng())
    }

    /// Pick a theme uniformly at random using the supplied source, so tests
    /// can drive selection deterministically.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Theme {
        let index = rng.random_range(0..self.themes.len());
        &self.themes[index]
    }
}

fn validate_themes(themes: &[Theme]) -> Result<(), ConfigError> {
    if themes.is_empty() {
        return Err(ConfigError::Validation(
            "themes file must define at least one theme".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();

    for theme in themes {
        for (field, value) in [
            ("name", &theme.name),
            ("primary_keyword", &theme.primary_keyword),
            ("hook", &theme.hook),
            ("text_overlay", &theme.text_overlay),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "theme '{}' has an empty {field}",
                    theme.name
                )));
            }
        }

        let lower_name = theme.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate theme name: '{}'",
                theme.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn theme(name: &str) -> Theme {
        Theme {
            name: name.to_string(),
            primary_keyword: "honey gut health remedies".to_string(),
            secondary_keywords: vec!["how to fix gut health".to_string()],
            hook: "The 3-Day Honey Protocol That Fixed My Gut".to_string(),
            text_overlay: "FIX YOUR GUT IN 3 DAYS".to_string(),
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = ThemeCatalog::from_themes(vec![]).expect_err("should reject empty catalog");
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn blank_field_is_rejected() {
        let mut bad = theme("Gut Health Solution");
        bad.text_overlay = "  ".to_string();
        let err = ThemeCatalog::from_themes(vec![bad]).expect_err("should reject blank overlay");
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err =
            ThemeCatalog::from_themes(vec![theme("Energy Boost"), theme("energy boost")])
                .expect_err("should reject duplicates case-insensitively");
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn all_preserves_declared_order() {
        let catalog =
            ThemeCatalog::from_themes(vec![theme("First"), theme("Second"), theme("Third")])
                .expect("catalog should validate");
        let names: Vec<&str> = catalog.all().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn pick_with_is_deterministic_for_a_seeded_rng() {
        let catalog =
            ThemeCatalog::from_themes(vec![theme("First"), theme("Second"), theme("Third")])
                .expect("catalog should validate");

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            catalog.pick_with(&mut a).name,
            catalog.pick_with(&mut b).name
        );
    }

    #[test]
    fn pick_random_stays_within_catalog() {
        let catalog = ThemeCatalog::from_themes(vec![theme("Only")]).expect("should validate");
        for _ in 0..10 {
            assert_eq!(catalog.pick_random().name, "Only");
        }
    }

    #[test]
    fn yaml_without_secondary_keywords_parses() {
        let yaml = r"
themes:
  - name: Gut Health Solution
    primary_keyword: honey gut health remedies
    hook: The 3-Day Honey Protocol That Fixed My Gut
    text_overlay: FIX YOUR GUT IN 3 DAYS
";
        let file: ThemesFile = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(file.themes.len(), 1);
        assert!(file.themes[0].secondary_keywords.is_empty());
    }
}
