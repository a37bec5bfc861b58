use std::env;
use std::path::PathBuf;

use jieba_filter::{JiebaInstance, SegmentMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pass a dictionary directory to see reload() pick up on-disk edits;
    // without one the built-in dictionaries are used.
    let dict_dir = env::args().nth(1).map(PathBuf::from);
    let instance = JiebaInstance::new(dict_dir.as_deref())?;

    {
        let engine = instance.get();
        for word in engine.segment("南京市长江大桥", SegmentMode::Default, true) {
            println!("{} [{}..{}]", word.word, word.start, word.end);
        }
    }

    instance.reload()?;
    println!("reloaded, dict dir: {:?}", instance.dict_dir());

    Ok(())
}
