//! Language-specific gapping resources
//!
//! Each language contributes a set of exclusion rules, which veto tokens as
//! gap candidates, and a set of gap index finders, which keep parts of a word
//! visible. Both are described by embedded TOML configurations:
//!
//! - `default`: language independent, used for unsupported codes
//! - `en`, `de`, `fr`
//!
//! # Usage
//!
//! ```rust
//! use ctest_engine::language::{get_resources, LanguageResources};
//!
//! let english = get_resources("en").unwrap();
//! assert!(english.rule_names().contains(&"simple_named_entity"));
//!
//! // unsupported languages degrade to the language-independent rules
//! assert_eq!(get_resources("tlh").unwrap().code(), "default");
//!
//! let custom = LanguageResources::from_toml_str(
//!     r#"
//!     [metadata]
//!     code = "nl"
//!     name = "Dutch"
//!
//!     [exclusion]
//!     words = ["de", "het"]
//!     "#,
//! )
//! .unwrap();
//! assert!(custom.rule_names().contains(&"word_list"));
//! ```

pub mod config;
pub mod finders;
mod loader;
mod resources;
pub mod rules;

pub use config::LanguageConfig;
pub use finders::{GapIndexFinder, HyphenatedCompound, PrefixFinder};
pub use loader::{available_languages, get_resources, DEFAULT_LANGUAGE};
pub use resources::{EmbeddedResources, FixedResources, LanguageResources, ResourceProvider};
pub use rules::{ExclusionRule, NonAlphabetic, ProperNounTag, SimpleNamedEntity, TooShort, WordList};
