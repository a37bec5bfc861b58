use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::trace;
use serde_json::Value;

use crate::dict;
use crate::engine::{JiebaEngine, SegmentMode};
use crate::error::{Error, Result};
use crate::registry::ConfigMap;
use crate::token::{Token, TokenStream, TokenType};

/// Registry name of the jieba token filter.
pub const FILTER_NAME: &str = "filter_jieba";

/// Option key for the dictionary directory (string; empty means unset).
pub const CONFIG_DICT_DIR: &str = "jieba_dict_dir";
/// Option key selecting search-mode tokenization (bool, default `true`).
pub const CONFIG_SEARCH_MODE: &str = "jieba_search_mode";
/// Option key enabling the HMM fallback (bool, default `true`).
pub const CONFIG_USE_HMM: &str = "jieba_use_hmm";

/// Transformation applied to a token stream between tokenizer and index.
pub trait TokenFilter: Send + Sync {
    /// Consumes `input` and returns the transformed stream.
    fn filter(&self, input: TokenStream) -> TokenStream;

    /// Name of this filter, for registries and debugging.
    fn name(&self) -> &'static str;
}

/// Token filter that re-segments runs of ideographic tokens with jieba.
///
/// A generic Unicode tokenizer upstream emits one token per Han character.
/// This filter joins maximal runs of strictly adjacent ideographic tokens
/// back into their original text, hands each run to the engine, drops stop
/// words from the result, and re-bases the engine's offsets onto the
/// original input. Every other token passes through untouched, and output
/// positions are reassigned contiguously from 1.
pub struct JiebaFilter {
    engine: Arc<JiebaEngine>,
    mode: SegmentMode,
    hmm: bool,
}

impl JiebaFilter {
    /// Creates a filter, loading an engine for `dict_dir`.
    ///
    /// When `dict_dir` is `None` the `JIEBA_DICT_DIR` environment variable
    /// is consulted; if that is also unset, built-in defaults are used.
    /// `search_mode` selects [`SegmentMode::Search`], and `use_hmm` enables
    /// the engine's unknown-word fallback.
    pub fn new(dict_dir: Option<&Path>, search_mode: bool, use_hmm: bool) -> Result<Self> {
        let dict_dir: Option<PathBuf> = dict_dir
            .map(Path::to_path_buf)
            .or_else(dict::dict_dir_from_env);
        let engine = JiebaEngine::new(dict_dir.as_deref())?;
        let mode = if search_mode {
            SegmentMode::Search
        } else {
            SegmentMode::Default
        };
        Ok(Self::with_engine(Arc::new(engine), mode, use_hmm))
    }

    /// Creates a filter over an engine the caller already loaded.
    pub fn with_engine(engine: Arc<JiebaEngine>, mode: SegmentMode, hmm: bool) -> Self {
        Self { engine, mode, hmm }
    }

    /// Builds a boxed filter from loosely-typed registry options.
    ///
    /// Recognized keys are [`CONFIG_DICT_DIR`], [`CONFIG_SEARCH_MODE`], and
    /// [`CONFIG_USE_HMM`]; a present option of the wrong type is a
    /// configuration error, an absent one takes its default.
    pub fn from_config(config: &ConfigMap) -> Result<Box<dyn TokenFilter>> {
        let dict_dir = match config.get(CONFIG_DICT_DIR) {
            None => None,
            Some(Value::String(dir)) if dir.is_empty() => None,
            Some(Value::String(dir)) => Some(PathBuf::from(dir)),
            Some(_) => {
                return Err(Error::Config(format!(
                    "'{CONFIG_DICT_DIR}' must be a string"
                )))
            }
        };
        let search_mode = bool_option(config, CONFIG_SEARCH_MODE, true)?;
        let use_hmm = bool_option(config, CONFIG_USE_HMM, true)?;

        Ok(Box::new(Self::new(
            dict_dir.as_deref(),
            search_mode,
            use_hmm,
        )?))
    }

    fn flush_run(&self, input: &[Token], run: Option<(usize, usize)>, output: &mut TokenStream) {
        let Some((first, last)) = run else { return };

        // The run's text is the concatenation of its members; the engine's
        // offsets are relative to it and re-based onto the input by adding
        // the run's start offset.
        let run_start = input[first].start;
        let text: String = input[first..=last]
            .iter()
            .map(|token| token.term.as_str())
            .collect();
        trace!("re-segmenting {text:?} at offset {run_start}");

        for word in self.engine.segment(&text, self.mode, self.hmm) {
            if self.engine.is_stop_word(&word.word) {
                continue;
            }
            push(
                output,
                Token::new(
                    word.word,
                    run_start + word.start,
                    run_start + word.end,
                    0,
                    TokenType::Ideographic,
                ),
            );
        }
    }
}

fn bool_option(config: &ConfigMap, key: &str, default: bool) -> Result<bool> {
    match config.get(key) {
        None => Ok(default),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(Error::Config(format!("'{key}' must be a bool"))),
    }
}

fn push(output: &mut TokenStream, mut token: Token) {
    token.position = output.len() + 1;
    output.push(token);
}

impl TokenFilter for JiebaFilter {
    fn filter(&self, input: TokenStream) -> TokenStream {
        let mut output = Vec::with_capacity(input.len());
        // Open run of adjacent ideographic tokens, as (first, last) input
        // indices. A gap of even one byte closes the run.
        let mut run: Option<(usize, usize)> = None;

        for i in 0..input.len() {
            let token = &input[i];

            if token.token_type == TokenType::Ideographic {
                if let Some((first, last)) = run {
                    if token.start == input[last].end {
                        run = Some((first, i));
                        continue;
                    }
                }
            }

            self.flush_run(&input, run.take(), &mut output);

            if token.token_type == TokenType::Ideographic {
                run = Some((i, i));
            } else {
                push(&mut output, token.clone());
            }
        }

        self.flush_run(&input, run.take(), &mut output);
        output
    }

    fn name(&self) -> &'static str {
        FILTER_NAME
    }
}
