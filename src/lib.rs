#![deny(missing_docs)]

//! Chinese word segmentation for full-text search analysis chains.
//!
//! This crate sits between a generic Unicode tokenizer and an index writer.
//! The upstream tokenizer emits one token per Han character; [`JiebaFilter`]
//! merges adjacent ideographic tokens back into runs, re-segments each run
//! with the jieba engine, drops stop words, and leaves every other token
//! untouched. The segmentation algorithm itself lives in the `jieba-rs`
//! crate; this crate only adapts token streams and dictionary lifecycles.
//!
//! ## Quick Start
//! ```
//! use jieba_filter::{JiebaFilter, TokenFilter, UnicodeTokenizer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokenizer = UnicodeTokenizer::new();
//!     let filter = JiebaFilter::new(None, false, true)?;
//!     let tokens = filter.filter(tokenizer.tokenize("hello  世界"));
//!     let terms: Vec<&str> = tokens.iter().map(|t| t.term.as_str()).collect();
//!     assert_eq!(terms, ["hello", "世界"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Dictionary Directories
//! A filter or [`JiebaInstance`] can be pointed at a directory holding the
//! five jieba dictionary files (`jieba.dict.utf8`, `hmm_model.utf8`,
//! `user.dict.utf8`, `idf.utf8`, `stop_words.utf8`). Without a directory the
//! engine's built-in dictionary and a bundled stop-word list are used.
//!
//! ## Registry Integration
//! Hosts that wire filters from configuration create a
//! [`TokenFilterRegistry`], register [`JiebaFilter::from_config`] under
//! [`FILTER_NAME`], and build filters from loosely-typed option maps:
//!
//! ```
//! use jieba_filter::{ConfigMap, JiebaFilter, TokenFilterRegistry, FILTER_NAME};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = TokenFilterRegistry::new();
//!     registry.register(FILTER_NAME, JiebaFilter::from_config)?;
//!
//!     let mut config = ConfigMap::new();
//!     config.insert("jieba_search_mode".to_string(), false.into());
//!     let _filter = registry.build(FILTER_NAME, &config)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//! - `JIEBA_DICT_DIR`: dictionary directory consulted by [`JiebaFilter::new`]
//!   when no directory is configured explicitly.

mod dict;
mod engine;
mod error;
mod filter;
mod instance;
mod registry;
mod token;
mod tokenizer;

pub use dict::{DictPaths, DICT_DIR_ENV};
pub use engine::{JiebaEngine, SegmentMode, SegmentedWord};
pub use error::{Error, Result};
pub use filter::{
    JiebaFilter, TokenFilter, CONFIG_DICT_DIR, CONFIG_SEARCH_MODE, CONFIG_USE_HMM, FILTER_NAME,
};
pub use instance::JiebaInstance;
pub use registry::{ConfigMap, FilterConstructor, TokenFilterRegistry};
pub use token::{Token, TokenStream, TokenType};
pub use tokenizer::UnicodeTokenizer;

#[cfg(test)]
mod test_support;
