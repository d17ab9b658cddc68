//! Language configuration loader
//!
//! Manages the embedded language resources with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{EngineError, Result};
use crate::language::resources::LanguageResources;

/// Code of the language-independent fallback
pub const DEFAULT_LANGUAGE: &str = "default";

/// Embedded language configurations
static EMBEDDED: OnceLock<HashMap<String, Arc<LanguageResources>>> = OnceLock::new();

const EMBEDDED_CONFIGS: &[(&str, &str)] = &[
    (
        "default",
        include_str!("../../configs/languages/default.toml"),
    ),
    ("en", include_str!("../../configs/languages/english.toml")),
    ("de", include_str!("../../configs/languages/german.toml")),
    ("fr", include_str!("../../configs/languages/french.toml")),
];

fn embedded() -> &'static HashMap<String, Arc<LanguageResources>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, toml_str) in EMBEDDED_CONFIGS {
            match LanguageResources::from_toml_str(toml_str) {
                Ok(resources) => {
                    let resources = Arc::new(resources);
                    map.insert(resources.name().to_lowercase(), Arc::clone(&resources));
                    map.insert((*code).to_string(), resources);
                }
                Err(e) => {
                    tracing::warn!(language = code, "failed to load embedded config: {e}");
                }
            }
        }

        map
    })
}

/// Look up resources by language code or name
///
/// Lookup is case-insensitive. Unknown and empty codes resolve to the
/// language-independent defaults.
pub fn get_resources(code: &str) -> Result<Arc<LanguageResources>> {
    let embedded = embedded();
    let key = code.trim().to_lowercase();

    if let Some(resources) = embedded.get(&key) {
        return Ok(Arc::clone(resources));
    }

    tracing::debug!(language = code, "no language specific resources, using defaults");

    embedded
        .get(DEFAULT_LANGUAGE)
        .cloned()
        .ok_or_else(|| EngineError::Configuration("default language config missing".to_string()))
}

/// Codes of the embedded languages, sorted
pub fn available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED_CONFIGS
        .iter()
        .map(|(code, _)| *code)
        .filter(|code| *code != DEFAULT_LANGUAGE)
        .collect();
    codes.sort_unstable();
    codes
}
