use reqwest::blocking::Client;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::OnceLock;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::model::{CanonicalReference, LookupResult, TranslationRecord};

pub const DEFAULT_BASE_URL: &str = "https://www.biblegateway.com/verse/en/";

/// Anything that can turn a reference into its parallel translations.
pub trait VerseSource {
    fn fetch(&self, reference: &CanonicalReference) -> Result<LookupResult, FetchError>;
}

impl<S: VerseSource + ?Sized> VerseSource for &S {
    fn fetch(&self, reference: &CanonicalReference) -> Result<LookupResult, FetchError> {
        (**self).fetch(reference)
    }
}

/// BibleGateway's single-verse page, which lists every English translation of
/// one verse as a `.singleverse-row`.
pub struct BibleGateway {
    client: Client,
    base_url: String,
}

impl BibleGateway {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    pub fn verse_url(&self, reference: &CanonicalReference) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(reference.as_str()))
    }
}

impl VerseSource for BibleGateway {
    fn fetch(&self, reference: &CanonicalReference) -> Result<LookupResult, FetchError> {
        let url = self.verse_url(reference);
        debug!(%url, "fetching verse");
        let resp = self.client.get(&url).send().map_err(FetchError::Transport)?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }
        let html = resp.text().map_err(FetchError::Body)?;
        let translations = parse_verse_rows(&html);
        if translations.is_empty() {
            return Err(FetchError::NoVerses);
        }
        debug!(%reference, rows = translations.len(), "parsed verse page");
        Ok(LookupResult::new(reference.clone(), translations))
    }
}

fn row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse(".singleverse-row").expect("static selector"))
}

/// Extracts one record per `.singleverse-row`, in document order.
///
/// A row holds the translation code followed by the verse text. Blank text
/// nodes between them are skipped. A row missing its text still yields a
/// record with empty text; a row with no code is dropped.
pub fn parse_verse_rows(html: &str) -> Vec<TranslationRecord> {
    let dom = Html::parse_document(html);
    let mut out = Vec::new();
    for row in dom.select(row_selector()) {
        let mut parts = row
            .children()
            .filter_map(|child| match child.value() {
                Node::Text(t) => Some(String::from(&**t)),
                Node::Element(_) => ElementRef::wrap(child).map(|e| e.text().collect::<String>()),
                _ => None,
            })
            .filter(|s| !s.trim().is_empty());
        let code = parts.next().map(|s| collapse_ws(&s)).unwrap_or_default();
        if code.is_empty() {
            debug!("verse row without a translation code; skipped");
            continue;
        }
        let text = match parts.next() {
            Some(s) => clean_verse_text(&s),
            None => {
                debug!(%code, "verse row without text");
                String::new()
            }
        };
        out.push(TranslationRecord::new(code, text));
    }
    out
}

/// Drops pilcrows and squashes whitespace runs to single spaces.
pub fn clean_verse_text(s: &str) -> String {
    collapse_ws(&s.replace('¶', ""))
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
