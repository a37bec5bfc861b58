use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::dict::{HMM_MODEL_FILE, IDF_FILE, MAIN_DICT_FILE, STOP_WORDS_FILE, USER_DICT_FILE};

/// Writes the five fixed dictionary files under `dir`.
pub(crate) fn write_dict_dir(dir: &Path, main: &str, user: &str, stop: &str) {
    fs::write(dir.join(MAIN_DICT_FILE), main).expect("write main dict");
    fs::write(dir.join(HMM_MODEL_FILE), "").expect("write hmm model");
    fs::write(dir.join(USER_DICT_FILE), user).expect("write user dict");
    fs::write(dir.join(IDF_FILE), "").expect("write idf");
    fs::write(dir.join(STOP_WORDS_FILE), stop).expect("write stop words");
}

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn set_env_var(key: &str, value: &str) {
    #[allow(unused_unsafe)]
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env_var(key: &str) {
    #[allow(unused_unsafe)]
    unsafe {
        env::remove_var(key);
    }
}

/// Runs a closure while holding a global environment lock and applying overrides.
pub(crate) fn with_env_vars<T>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _guard = env_lock()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let backups: Vec<(&str, Option<OsString>)> = overrides
        .iter()
        .map(|(key, _)| (*key, env::var_os(key)))
        .collect();

    for (key, value) in overrides {
        match value {
            Some(value) => set_env_var(key, value),
            None => remove_env_var(key),
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, value) in backups.into_iter().rev() {
        match value {
            Some(value) => {
                #[allow(unused_unsafe)]
                unsafe {
                    env::set_var(key, value);
                }
            }
            None => remove_env_var(key),
        }
    }

    match result {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
