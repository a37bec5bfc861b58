use std::env;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no dictionary directory is configured.
pub const DICT_DIR_ENV: &str = "JIEBA_DICT_DIR";

pub(crate) const MAIN_DICT_FILE: &str = "jieba.dict.utf8";
pub(crate) const HMM_MODEL_FILE: &str = "hmm_model.utf8";
pub(crate) const USER_DICT_FILE: &str = "user.dict.utf8";
pub(crate) const IDF_FILE: &str = "idf.utf8";
pub(crate) const STOP_WORDS_FILE: &str = "stop_words.utf8";

/// Resolved locations of the five dictionary files under one directory.
///
/// The filenames are fixed; only the directory varies. Resolution is pure
/// path joining; existence is checked when the engine loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictPaths {
    /// Main dictionary (`jieba.dict.utf8`).
    pub main_dict: PathBuf,
    /// HMM model for unknown-word recognition (`hmm_model.utf8`).
    pub hmm_model: PathBuf,
    /// User-supplied additions (`user.dict.utf8`).
    pub user_dict: PathBuf,
    /// Inverse-document-frequency weights (`idf.utf8`).
    pub idf: PathBuf,
    /// Stop-word list (`stop_words.utf8`).
    pub stop_words: PathBuf,
}

impl DictPaths {
    /// Resolves the fixed dictionary filenames under `dir`.
    pub fn resolve(dir: &Path) -> Self {
        Self {
            main_dict: dir.join(MAIN_DICT_FILE),
            hmm_model: dir.join(HMM_MODEL_FILE),
            user_dict: dir.join(USER_DICT_FILE),
            idf: dir.join(IDF_FILE),
            stop_words: dir.join(STOP_WORDS_FILE),
        }
    }

    pub(crate) fn all(&self) -> [&Path; 5] {
        [
            &self.main_dict,
            &self.hmm_model,
            &self.user_dict,
            &self.idf,
            &self.stop_words,
        ]
    }
}

/// Returns the directory named by `JIEBA_DICT_DIR`, if set and non-empty.
pub(crate) fn dict_dir_from_env() -> Option<PathBuf> {
    match env::var_os(DICT_DIR_ENV) {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}
