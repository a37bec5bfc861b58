use std::mem;
use std::path::{Path, PathBuf};

use log::debug;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::engine::JiebaEngine;
use crate::error::Result;

/// Thread-safe holder of one [`JiebaEngine`] for a fixed dictionary
/// directory.
///
/// Any number of threads can segment concurrently through [`get`]; a
/// [`reload`] builds a fresh engine from the same directory and swaps it in
/// atomically. Callers that need hot-reloadable dictionaries share one
/// instance instead of owning an engine directly.
///
/// [`get`]: JiebaInstance::get
/// [`reload`]: JiebaInstance::reload
#[derive(Debug)]
pub struct JiebaInstance {
    dict_dir: Option<PathBuf>,
    engine: RwLock<JiebaEngine>,
}

impl JiebaInstance {
    /// Loads the engine for `dict_dir` (built-in defaults when `None`).
    pub fn new(dict_dir: Option<&Path>) -> Result<Self> {
        let engine = JiebaEngine::new(dict_dir)?;
        Ok(Self {
            dict_dir: dict_dir.map(Path::to_path_buf),
            engine: RwLock::new(engine),
        })
    }

    /// The configured dictionary directory.
    pub fn dict_dir(&self) -> Option<&Path> {
        self.dict_dir.as_deref()
    }

    /// Borrows the current engine for reading.
    ///
    /// The returned guard holds a shared lock: dropping it releases the
    /// engine, and a caller that is still holding it keeps the engine it
    /// started with even if a reload swaps in a new one meanwhile.
    pub fn get(&self) -> RwLockReadGuard<'_, JiebaEngine> {
        self.engine.read()
    }

    /// Rebuilds the engine from the dictionary directory and swaps it in.
    ///
    /// The new engine is constructed before any lock is taken, so readers
    /// keep segmenting on the old engine during the slow dictionary load;
    /// only the pointer swap itself excludes them. On failure the previous
    /// engine stays in place.
    pub fn reload(&self) -> Result<()> {
        let fresh = JiebaEngine::new(self.dict_dir.as_deref())?;

        debug!("swapping in reloaded jieba engine");
        let stale = {
            let mut guard = self.engine.write();
            mem::replace(&mut *guard, fresh)
        };
        // The old engine is freed only after the write lock is released, by
        // which point no reader can still be referencing it.
        drop(stale);
        Ok(())
    }
}
