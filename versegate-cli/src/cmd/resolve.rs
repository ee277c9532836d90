use versegate_core::{BookMatcher, Resolver};

pub fn resolve(text: &str, caret: Option<usize>, json: bool) -> anyhow::Result<()> {
    let found = Resolver::new(BookMatcher).resolve(text, caret);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "text": text,
                "caret": caret,
                "reference": found,
            }))?
        );
    } else {
        match found {
            Some(r) => println!("{}", r),
            None => println!("no match"),
        }
    }
    Ok(())
}
