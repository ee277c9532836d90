use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::{debug, warn};
use versegate_core::history;
use versegate_core::{
    BookMatcher, CanonicalReference, Resolver, VerseLookup, VerseSource,
};

#[derive(Deserialize, Debug)]
pub struct Request {
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// Tool dispatch over one lookup session. When `history_path` is set the
/// history is written back after every fetch that changed it.
pub struct Server<S> {
    resolver: Resolver<BookMatcher>,
    lookup: VerseLookup<S>,
    history_path: Option<PathBuf>,
}

impl<S: VerseSource> Server<S> {
    pub fn new(lookup: VerseLookup<S>, history_path: Option<PathBuf>) -> Self {
        Self {
            resolver: Resolver::new(BookMatcher),
            lookup,
            history_path,
        }
    }

    pub fn handle(&mut self, req: Request) -> Value {
        debug!(method = %req.method, id = %req.id, "request");
        match req.method.as_str() {
            "initialize" => initialize(req.id),
            "ping" => json!({"jsonrpc": "2.0", "id": req.id, "result": {}}),
            "tools/list" => json!({"jsonrpc": "2.0", "id": req.id, "result": {"tools": tools_list()}}),
            "tools/call" => self.call(req.id, &req.params),
            _ => json!({"jsonrpc": "2.0", "id": req.id, "error": {"code": -32601, "message": "Method not found"}}),
        }
    }

    fn call(&mut self, id: Value, params: &Value) -> Value {
        let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
        let args = params.get("arguments").cloned().unwrap_or(json!({}));
        let (text, meta) = match name {
            "verse_resolve" => {
                let text = args.get("text").and_then(|v| v.as_str()).unwrap_or("");
                let caret = args.get("caret").and_then(|v| v.as_u64()).map(|c| c as usize);
                let found = self.resolver.resolve(text, caret);
                let shown = found
                    .as_ref()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "no match".to_string());
                (shown, json!({"reference": found, "caret": caret}))
            }
            "verse_lookup" => self.verse_lookup(&args),
            "history_list" => {
                let limit = args.get("limit").and_then(|v| v.as_u64()).map(|n| n as usize);
                let h = self.lookup.history();
                let entries: Vec<&str> = h
                    .entries()
                    .take(limit.unwrap_or(h.len()))
                    .map(|e| e.reference.as_str())
                    .collect();
                let text = if entries.is_empty() {
                    "no history".to_string()
                } else {
                    entries.join("\n")
                };
                (text, json!({"count": h.len(), "capacity": h.capacity(), "entries": entries}))
            }
            "history_clear" => {
                let n = self.lookup.history().len();
                self.lookup.clear_history();
                self.persist();
                (format!("cleared {} entries", n), json!({"cleared": n}))
            }
            _ => (format!("unknown tool: {}", name), json!({})),
        };
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": { "content": [{"type": "text", "text": text}], "_meta": meta }
        })
    }

    fn verse_lookup(&mut self, args: &Value) -> (String, Value) {
        let query = args.get("query").and_then(|v| v.as_str()).unwrap_or("");
        let exact = args.get("exact").and_then(|v| v.as_bool()).unwrap_or(false);
        let reference = if exact {
            Some(CanonicalReference::new(query.trim())).filter(|r| !r.as_str().is_empty())
        } else {
            self.resolver.resolve(query, None)
        };
        let Some(reference) = reference else {
            return (
                "The scripture reference is not a valid Bible verse".to_string(),
                json!({"query": query, "count": 0}),
            );
        };
        let cached = self.lookup.history().contains(&reference);
        match self.lookup.lookup(&reference) {
            Some(result) => {
                if !cached {
                    self.persist();
                }
                (
                    result.to_string(),
                    json!({
                        "reference": result.reference,
                        "cached": cached,
                        "count": result.len(),
                        "translations": result.translations,
                    }),
                )
            }
            None => (
                "Could not find a matching scripture".to_string(),
                json!({"reference": reference, "count": 0}),
            ),
        }
    }

    fn persist(&self) {
        let Some(path) = &self.history_path else { return };
        if let Err(e) = history::save(path, self.lookup.history()) {
            warn!(path = %path.display(), error = %e, "could not save history");
        }
    }

    pub fn lookup(&self) -> &VerseLookup<S> {
        &self.lookup
    }
}

fn initialize(id: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": {
            "protocolVersion": "2024-11-05",
            "capabilities": { "tools": {}, "logging": {} },
            "serverInfo": { "name": "versegate-mcp", "version": env!("CARGO_PKG_VERSION") }
        }
    })
}

fn tool(name: &str, description: &str, input_schema: Value) -> Value {
    json!({"name": name, "description": description, "inputSchema": input_schema})
}

fn tools_list() -> Vec<Value> {
    vec![
        tool(
            "verse_resolve",
            "Find the scripture reference in text (at a caret offset when given)",
            json!({"type":"object","properties":{"text":{"type":"string"},"caret":{"type":"number"}},"required":["text"]}),
        ),
        tool(
            "verse_lookup",
            "Parallel translations of one verse from BibleGateway (cached in history)",
            json!({"type":"object","properties":{"query":{"type":"string"},"exact":{"type":"boolean"}},"required":["query"]}),
        ),
        tool(
            "history_list",
            "Previously looked-up references, most recent first",
            json!({"type":"object","properties":{"limit":{"type":"number"}}}),
        ),
        tool(
            "history_clear",
            "Forget all previously looked-up references",
            json!({"type":"object","properties":{}}),
        ),
    ]
}
