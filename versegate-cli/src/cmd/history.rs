use super::envelope;
use crate::session::Session;

pub fn list(session: &Session, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let history = session.lookup.history();
    let shown = limit.unwrap_or(history.len());
    if json {
        let entries: Vec<_> = history
            .entries()
            .take(shown)
            .map(|e| {
                serde_json::json!({
                    "reference": e.reference,
                    "translations": e.result.len(),
                })
            })
            .collect();
        let summary = format!("{} of {} entries", entries.len(), history.capacity());
        let meta = serde_json::json!({
            "count": history.len(),
            "capacity": history.capacity(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&envelope(&summary, meta))?);
    } else if history.is_empty() {
        println!("no history");
    } else {
        for (i, e) in history.entries().take(shown).enumerate() {
            println!("{}. {}  ({} translations)", i + 1, e.reference, e.result.len());
        }
    }
    Ok(())
}

pub fn clear(session: &mut Session) -> anyhow::Result<()> {
    let n = session.lookup.history().len();
    session.lookup.clear_history();
    session.save()?;
    println!("cleared {} entries", n);
    Ok(())
}
