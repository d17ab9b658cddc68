//! Gap model for C-Test documents
//!
//! A C-Test is a text in which a rule-governed subset of words is turned into
//! partial gaps: the beginning of each gapped word stays visible and the rest
//! has to be restored by the test-taker. This crate holds the in-memory
//! representation of such a document. Deciding *which* words are gapped is the
//! job of `ctest-engine`.
//!
//! # Example
//!
//! ```rust
//! use ctest_core::{CTestObject, CTestToken};
//!
//! let mut ctest = CTestObject::new("en");
//! let mut token = CTestToken::new("playground");
//! token.set_gap_index(5);
//! token.set_gap(true);
//! ctest.add_token(token);
//!
//! assert_eq!(ctest.gap_count(), 1);
//! assert_eq!(ctest.tokens()[0].hidden_suffix(), "round");
//! ```

pub mod error;
pub mod object;
pub mod token;

pub use error::{ModelError, Result};
pub use object::CTestObject;
pub use token::CTestToken;
