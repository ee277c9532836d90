//! Parallel Bible translations for a scripture reference.
//!
//! The pieces compose in one direction: a [`Resolver`] turns free text into a
//! [`CanonicalReference`], and a [`VerseLookup`] answers it from its
//! [`HistoryCache`] or from a [`VerseSource`] such as [`BibleGateway`].

pub mod books;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod lookup;
pub mod model;
pub mod resolver;
pub mod versions;

pub use books::BookMatcher;
pub use config::Config;
pub use error::{FetchError, HistoryError};
pub use gateway::{parse_verse_rows, BibleGateway, VerseSource};
pub use history::{HistoryCache, HistoryEntry, HistorySnapshot};
pub use lookup::VerseLookup;
pub use model::{CanonicalReference, LookupResult, TranslationRecord};
pub use resolver::{Candidate, DisplayMode, ReferenceMatcher, Resolver};
