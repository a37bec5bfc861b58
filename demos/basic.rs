use jieba_filter::{JiebaFilter, TokenFilter, UnicodeTokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = UnicodeTokenizer::new();
    let filter = JiebaFilter::new(None, false, true)?;

    let text = "我爱吃的水果包括西瓜, 橙子等等";
    let tokens = filter.filter(tokenizer.tokenize(text));

    for token in &tokens {
        println!(
            "#{} {} [{}..{}] {:?}",
            token.position, token.term, token.start, token.end, token.token_type
        );
    }

    Ok(())
}
