use std::collections::HashSet;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use jieba_rs::{Jieba, TokenizeMode};
use log::debug;

use crate::dict::DictPaths;
use crate::error::{Error, Result};

static DEFAULT_STOP_WORDS: &str = include_str!("data/stop_words.txt");

/// Tokenization granularity offered by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// Most probable segmentation of the text.
    #[default]
    Default,
    /// Default segmentation plus sub-words of longer words, suited for
    /// query-time recall.
    Search,
}

/// A word produced by re-segmenting a piece of ideographic text.
///
/// Offsets are byte offsets into the text handed to [`JiebaEngine::segment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedWord {
    /// The word text.
    pub word: String,
    /// Byte offset of the word's first byte.
    pub start: usize,
    /// Byte offset one past the word's last byte.
    pub end: usize,
}

/// Loaded segmentation engine: dictionaries plus a stop-word list.
///
/// The segmentation algorithm itself lives in `jieba-rs`; this type only
/// loads dictionary data and adapts the engine's output to byte offsets.
pub struct JiebaEngine {
    jieba: Jieba,
    stop_words: HashSet<String>,
}

impl JiebaEngine {
    /// Creates an engine from `dict_dir`, or from built-in defaults if none
    /// is given.
    ///
    /// With a directory, the five fixed dictionary filenames (see
    /// [`DictPaths`]) must all exist under it: the main dictionary replaces
    /// the built-in one, user dictionary entries are added on top, and the
    /// stop-word list replaces the bundled default.
    pub fn new(dict_dir: Option<&Path>) -> Result<Self> {
        match dict_dir {
            None => {
                debug!("loading built-in jieba dictionaries");
                Ok(Self {
                    jieba: Jieba::new(),
                    stop_words: parse_stop_words(DEFAULT_STOP_WORDS),
                })
            }
            Some(dir) => Self::from_dict_dir(dir),
        }
    }

    fn from_dict_dir(dir: &Path) -> Result<Self> {
        let paths = DictPaths::resolve(dir);
        for path in paths.all() {
            if !path.is_file() {
                return Err(Error::dictionary(path, "file not found"));
            }
        }

        debug!("loading jieba dictionaries from {}", dir.display());
        let file = File::open(&paths.main_dict)
            .map_err(|e| Error::dictionary(&paths.main_dict, e.to_string()))?;
        let mut reader = BufReader::new(file);
        let mut jieba = Jieba::with_dict(&mut reader)
            .map_err(|e| Error::dictionary(&paths.main_dict, e.to_string()))?;

        load_user_dict(&mut jieba, &paths.user_dict)?;

        let stop_words = fs::read_to_string(&paths.stop_words)
            .map_err(|e| Error::dictionary(&paths.stop_words, e.to_string()))?;

        Ok(Self {
            jieba,
            stop_words: parse_stop_words(&stop_words),
        })
    }

    /// Re-segments `text` and reports each word with byte offsets.
    ///
    /// `hmm` enables the engine's HMM fallback for words absent from the
    /// dictionary.
    pub fn segment(&self, text: &str, mode: SegmentMode, hmm: bool) -> Vec<SegmentedWord> {
        let tokenize_mode = match mode {
            SegmentMode::Default => TokenizeMode::Default,
            SegmentMode::Search => TokenizeMode::Search,
        };

        // jieba-rs reports char offsets; translate them to byte offsets.
        let char_to_byte: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();

        self.jieba
            .tokenize(text, tokenize_mode, hmm)
            .into_iter()
            .map(|token| SegmentedWord {
                word: token.word.to_string(),
                start: char_to_byte[token.start],
                end: char_to_byte.get(token.end).copied().unwrap_or(text.len()),
            })
            .collect()
    }

    /// Whether `word` is on the loaded stop-word list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl fmt::Debug for JiebaEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiebaEngine")
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

fn parse_stop_words(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// User dictionary lines are "word [freq] [tag]"; freq and tag are optional.
fn load_user_dict(jieba: &mut Jieba, path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).map_err(|e| Error::dictionary(path, e.to_string()))?;

    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else { continue };
        let (freq, tag) = match (parts.next(), parts.next()) {
            (None, _) => (None, None),
            (Some(second), None) => match second.parse::<usize>() {
                Ok(freq) => (Some(freq), None),
                Err(_) => (None, Some(second)),
            },
            (Some(second), Some(third)) => (second.parse::<usize>().ok(), Some(third)),
        };
        jieba.add_word(word, freq, tag);
    }
    Ok(())
}

#[cfg(test)]
mod engine_tests {
    use super::{JiebaEngine, SegmentMode};
    use crate::dict::STOP_WORDS_FILE;
    use crate::error::Error;
    use crate::test_support::write_dict_dir;
    use std::fs;

    #[test]
    fn default_engine_segments_dictionary_words() {
        let engine = JiebaEngine::new(None).expect("default engine");
        let words = engine.segment("南京市长江大桥", SegmentMode::Default, false);

        let terms: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(terms, ["南京市", "长江大桥"]);
        // Offsets are byte offsets, three bytes per character here.
        assert_eq!((words[0].start, words[0].end), (0, 9));
        assert_eq!((words[1].start, words[1].end), (9, 21));
    }

    #[test]
    fn search_mode_adds_subwords() {
        let engine = JiebaEngine::new(None).expect("default engine");
        let text = "中华人民共和国";

        let default = engine.segment(text, SegmentMode::Default, false);
        assert_eq!(default.len(), 1);
        assert_eq!((default[0].start, default[0].end), (0, text.len()));

        let search = engine.segment(text, SegmentMode::Search, false);
        assert!(search.len() > default.len());
        for word in &search {
            assert!(word.start < word.end);
            assert!(word.end <= text.len());
            assert_eq!(&text[word.start..word.end], word.word);
        }
    }

    #[test]
    fn default_stop_word_list_is_bundled() {
        let engine = JiebaEngine::new(None).expect("default engine");
        assert!(engine.is_stop_word("我"));
        assert!(engine.is_stop_word("的"));
        assert!(engine.is_stop_word("等等"));
        assert!(!engine.is_stop_word("水果"));
        assert!(!engine.is_stop_word("世界"));
    }

    #[test]
    fn empty_text_yields_no_words() {
        let engine = JiebaEngine::new(None).expect("default engine");
        assert!(engine.segment("", SegmentMode::Default, true).is_empty());
    }

    #[test]
    fn dictionary_directory_replaces_builtin_data() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_dict_dir(
            dir.path(),
            "测试 1000 n\n词典 1000 n\n",
            "自定义词 10000 n\n",
            "测试\n",
        );

        let engine = JiebaEngine::new(Some(dir.path())).expect("engine from dir");

        let words = engine.segment("测试词典", SegmentMode::Default, false);
        let terms: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(terms, ["测试", "词典"]);

        let words = engine.segment("自定义词", SegmentMode::Default, false);
        let terms: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(terms, ["自定义词"]);

        // The directory's stop-word list replaces the bundled default.
        assert!(engine.is_stop_word("测试"));
        assert!(!engine.is_stop_word("的"));
    }

    #[test]
    fn missing_dictionary_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_dict_dir(dir.path(), "测试 1000 n\n", "", "");
        fs::remove_file(dir.path().join(STOP_WORDS_FILE)).expect("remove stop words");

        let error = JiebaEngine::new(Some(dir.path())).expect_err("missing file");
        match error {
            Error::Dictionary { path, .. } => {
                assert!(path.ends_with(STOP_WORDS_FILE));
            }
            other => panic!("expected dictionary error, got {other}"),
        }
    }
}
