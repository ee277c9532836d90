pub mod history;
pub mod lookup;
pub mod resolve;
pub mod versions;

/// The JSON-RPC style envelope every `--json` command prints.
pub(crate) fn envelope(text: &str, meta: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": serde_json::Value::Null,
        "result": { "content": [{"type": "text", "text": text}], "_meta": meta }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_text_and_meta() {
        let v = envelope("hello", serde_json::json!({"count": 1}));
        assert_eq!(v["result"]["content"][0]["text"], "hello");
        assert_eq!(v["result"]["_meta"]["count"], 1);
        assert!(v["id"].is_null());
    }
}
