//! Gap selection engine for C-Tests
//!
//! This crate decides which words of a text become gaps, where inside each
//! word the gap starts, and how an existing document is regapped towards a
//! new number of gaps.
//!
//! # Architecture
//!
//! - **annotation**: turns raw text into sentences and tokens
//! - **language**: per-language exclusion rules and gap index finders
//! - **config**: gap limit, gap interval and sentence enforcement
//! - **generator**: full and partial generation, warnings and regapping
//!
//! # Example
//!
//! ```rust
//! use ctest_engine::{CTestGenerator, GeneratorConfig, Warning};
//!
//! let config = GeneratorConfig::builder().gap_limit(3).build().unwrap();
//! let generator = CTestGenerator::with_config(config).unwrap();
//!
//! let generation = generator
//!     .generate_ctest("The Quick fox jumps over the lazy dog. It ran far. The sun set.", "en")
//!     .unwrap();
//!
//! let gaps: Vec<_> = generation.ctest().gaps().map(|t| t.text()).collect();
//! assert_eq!(gaps, vec!["ran"]);
//! assert!(generation
//!     .warnings()
//!     .contains(&Warning::InsufficientGaps { gap_limit: 3 }));
//! ```

pub mod annotation;
pub mod config;
pub mod error;
pub mod generator;
pub mod language;

// Re-export key types
pub use annotation::{
    AnnotatedSentence, AnnotatedText, AnnotatedToken, Annotator, SimpleAnnotator, TokenContext,
};
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{EngineError, Result};
pub use generator::{estimate_gap_index, CTestGenerator, Generation, Warning};
pub use language::{
    available_languages, EmbeddedResources, ExclusionRule, GapIndexFinder, LanguageResources,
    ResourceProvider,
};

// Re-export from core for convenience
pub use ctest_core::{CTestObject, CTestToken, ModelError};
