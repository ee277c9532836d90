use versegate_core::{BookMatcher, CanonicalReference, Resolver};

use super::envelope;
use crate::session::Session;

const INVALID_SCRIPTURE: &str = "The scripture reference is not a valid Bible verse";
const NO_RESULT: &str = "Could not find a matching scripture";

pub fn lookup(session: &mut Session, query: &str, exact: bool, json: bool) -> anyhow::Result<()> {
    let reference = if exact {
        Some(CanonicalReference::new(query.trim())).filter(|r| !r.as_str().is_empty())
    } else {
        Resolver::new(BookMatcher).resolve(query, None)
    };
    let Some(reference) = reference else {
        if json {
            let meta = serde_json::json!({"query": query, "count": 0});
            println!("{}", serde_json::to_string_pretty(&envelope(INVALID_SCRIPTURE, meta))?);
        } else {
            println!("{}", INVALID_SCRIPTURE);
        }
        return Ok(());
    };

    let cached = session.lookup.history().contains(&reference);
    let url = session.lookup.source().verse_url(&reference);
    let Some(result) = session.lookup.lookup(&reference) else {
        if json {
            let meta = serde_json::json!({
                "reference": reference,
                "sourceUrl": url,
                "count": 0,
            });
            println!("{}", serde_json::to_string_pretty(&envelope(NO_RESULT, meta))?);
        } else {
            println!("{}", NO_RESULT);
        }
        return Ok(());
    };
    if !cached {
        session.save()?;
    }

    let text = result.to_string();
    if json {
        let meta = serde_json::json!({
            "reference": result.reference,
            "sourceUrl": url,
            "cached": cached,
            "count": result.len(),
            "translations": result.translations,
        });
        println!("{}", serde_json::to_string_pretty(&envelope(&text, meta))?);
    } else {
        print!("{}", text);
        eprintln!("[meta] url={} cached={} count={}", url, cached, result.len());
    }
    Ok(())
}
