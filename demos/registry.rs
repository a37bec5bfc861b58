use jieba_filter::{ConfigMap, JiebaFilter, TokenFilterRegistry, UnicodeTokenizer, FILTER_NAME};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = TokenFilterRegistry::new();
    registry.register(FILTER_NAME, JiebaFilter::from_config)?;

    // Options arrive loosely typed, the way an index host hands them over.
    let mut config = ConfigMap::new();
    config.insert("jieba_search_mode".to_string(), true.into());
    config.insert("jieba_use_hmm".to_string(), true.into());
    let filter = registry.build(FILTER_NAME, &config)?;

    let tokenizer = UnicodeTokenizer::new();
    let tokens = filter.filter(tokenizer.tokenize("中华人民共和国今天成立了"));

    for token in &tokens {
        println!("{} [{}..{}]", token.term, token.start, token.end);
    }

    Ok(())
}
