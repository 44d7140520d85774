use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Flat `key -> message` tables, one per locale, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    locales: HashMap<String, HashMap<String, String>>,
    default_lang: String,
}

impl Translations {
    /// Loads every `<locale>.json` in `dir`. Files that cannot be read or
    /// parsed are skipped; a missing directory gives an empty bundle.
    pub fn load(dir: impl AsRef<Path>, default_lang: &str) -> Self {
        let dir = dir.as_ref();
        let mut locales = HashMap::new();

        match fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if !path.is_file() || path.extension().map_or(true, |ext| ext != "json") {
                        continue;
                    }
                    let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                        continue;
                    };

                    match load_locale(&path) {
                        Ok(messages) => {
                            tracing::info!("Loaded locale: {}", locale);
                            locales.insert(locale.to_string(), messages);
                        }
                        Err(e) => tracing::warn!("Error loading locale {}: {}", locale, e),
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Could not read locales directory {:?}: {}", dir, e);
            }
        }

        if !locales.contains_key(default_lang) {
            tracing::warn!("Default language '{}' not found", default_lang);
        }

        Self {
            locales,
            default_lang: default_lang.to_string(),
        }
    }

    pub fn from_locales(
        locales: HashMap<String, HashMap<String, String>>,
        default_lang: &str,
    ) -> Self {
        Self {
            locales,
            default_lang: default_lang.to_string(),
        }
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// Message for `key` in `lang`, else in the default language, else `key`.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.locales
            .get(lang)
            .or_else(|| self.locales.get(&self.default_lang))
            .and_then(|messages| messages.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.keys().cloned().collect();
        locales.sort();
        locales
    }
}

fn load_locale(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
