//! Bundled [`ReferenceMatcher`] for English book names and `C:V` references.
//!
//! Recognizes the 66 books of the Protestant canon by full name or common
//! abbreviation and checks chapters against each book's length.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

use crate::resolver::{Candidate, DisplayMode, ReferenceMatcher};

/// Longest chapter in the canon (Psalm 119).
const MAX_VERSE: u32 = 176;

pub struct Book {
    pub name: &'static str,
    pub chapters: u32,
    pub aliases: &'static [&'static str],
}

macro_rules! book {
    ($name:expr, $chapters:expr, [$($alias:expr),* $(,)?]) => {
        Book { name: $name, chapters: $chapters, aliases: &[$($alias),*] }
    };
}

pub static BOOKS: &[Book] = &[
    book!("Genesis", 50, ["Gen", "Ge", "Gn"]),
    book!("Exodus", 40, ["Exod", "Exo", "Ex"]),
    book!("Leviticus", 27, ["Lev", "Lv"]),
    book!("Numbers", 36, ["Num", "Nm"]),
    book!("Deuteronomy", 34, ["Deut", "Dt"]),
    book!("Joshua", 24, ["Josh", "Jos"]),
    book!("Judges", 21, ["Judg", "Jdg"]),
    book!("Ruth", 4, ["Rth"]),
    book!("1 Samuel", 31, ["1 Sam", "1 Sa", "1 Sm"]),
    book!("2 Samuel", 24, ["2 Sam", "2 Sa", "2 Sm"]),
    book!("1 Kings", 22, ["1 Kgs", "1 Ki"]),
    book!("2 Kings", 25, ["2 Kgs", "2 Ki"]),
    book!("1 Chronicles", 29, ["1 Chron", "1 Chr", "1 Ch"]),
    book!("2 Chronicles", 36, ["2 Chron", "2 Chr", "2 Ch"]),
    book!("Ezra", 10, ["Ezr"]),
    book!("Nehemiah", 13, ["Neh"]),
    book!("Esther", 10, ["Esth", "Est"]),
    book!("Job", 42, ["Jb"]),
    book!("Psalm", 150, ["Psalms", "Ps", "Psa", "Pss"]),
    book!("Proverbs", 31, ["Prov", "Pro", "Prv"]),
    book!("Ecclesiastes", 12, ["Eccl", "Ecc", "Qoh"]),
    book!("Song of Solomon", 8, ["Song of Songs", "Song"]),
    book!("Isaiah", 66, ["Isa"]),
    book!("Jeremiah", 52, ["Jer"]),
    book!("Lamentations", 5, ["Lam"]),
    book!("Ezekiel", 48, ["Ezek", "Eze"]),
    book!("Daniel", 12, ["Dan", "Dn"]),
    book!("Hosea", 14, ["Hos"]),
    book!("Joel", 3, ["Jl"]),
    book!("Amos", 9, []),
    book!("Obadiah", 1, ["Obad", "Ob"]),
    book!("Jonah", 4, ["Jon", "Jnh"]),
    book!("Micah", 7, ["Mic"]),
    book!("Nahum", 3, ["Nah"]),
    book!("Habakkuk", 3, ["Hab"]),
    book!("Zephaniah", 3, ["Zeph", "Zep"]),
    book!("Haggai", 2, ["Hag"]),
    book!("Zechariah", 14, ["Zech", "Zec"]),
    book!("Malachi", 4, ["Mal"]),
    book!("Matthew", 28, ["Matt", "Mat", "Mt"]),
    book!("Mark", 16, ["Mrk", "Mk"]),
    book!("Luke", 24, ["Luk", "Lk"]),
    book!("John", 21, ["Jhn", "Jn"]),
    book!("Acts", 28, ["Act"]),
    book!("Romans", 16, ["Rom", "Rm"]),
    book!("1 Corinthians", 16, ["1 Cor", "1 Co"]),
    book!("2 Corinthians", 13, ["2 Cor", "2 Co"]),
    book!("Galatians", 6, ["Gal"]),
    book!("Ephesians", 6, ["Eph"]),
    book!("Philippians", 4, ["Phil", "Php"]),
    book!("Colossians", 4, ["Col"]),
    book!("1 Thessalonians", 5, ["1 Thess", "1 Th"]),
    book!("2 Thessalonians", 3, ["2 Thess", "2 Th"]),
    book!("1 Timothy", 6, ["1 Tim", "1 Ti"]),
    book!("2 Timothy", 4, ["2 Tim", "2 Ti"]),
    book!("Titus", 3, ["Tit"]),
    book!("Philemon", 1, ["Philem", "Phm"]),
    book!("Hebrews", 13, ["Heb"]),
    book!("James", 5, ["Jas", "Jm"]),
    book!("1 Peter", 5, ["1 Pet", "1 Pe", "1 Pt"]),
    book!("2 Peter", 3, ["2 Pet", "2 Pe", "2 Pt"]),
    book!("1 John", 5, ["1 Jn", "1 Jhn"]),
    book!("2 John", 1, ["2 Jn", "2 Jhn"]),
    book!("3 John", 1, ["3 Jn", "3 Jhn"]),
    book!("Jude", 1, ["Jud"]),
    book!("Revelation", 22, ["Rev", "Rv"]),
];

/// Lowercase, NFKD-folded, alphanumerics only: `1 Jn.` and `1jn` share a key.
fn book_key(s: &str) -> String {
    s.nfkd()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

fn alias_index() -> &'static HashMap<String, &'static Book> {
    static IDX: OnceLock<HashMap<String, &'static Book>> = OnceLock::new();
    IDX.get_or_init(|| {
        let mut m = HashMap::new();
        for b in BOOKS {
            m.insert(book_key(b.name), b);
            for a in b.aliases {
                m.insert(book_key(a), b);
            }
        }
        m
    })
}

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let mut names: Vec<&str> = BOOKS
            .iter()
            .flat_map(|b| std::iter::once(b.name).chain(b.aliases.iter().copied()))
            .collect();
        // Longest first so `1 John` wins over `John` and `Philemon` over `Phil`.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alts = names
            .iter()
            .map(|n| regex::escape(n).replace(' ', r"\s*"))
            .collect::<Vec<_>>()
            .join("|");
        let pat = format!(
            r"(?i)\b(?P<book>{alts})\.?\s*(?P<chapter>\d{{1,3}})\s*:\s*(?P<verse>\d{{1,3}})(?:\s*[-–]\s*(?P<end>\d{{1,3}}))?"
        );
        Regex::new(&pat).expect("book reference pattern")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseSpan {
    pub book: &'static str,
    pub chapter: u32,
    pub verse: u32,
    pub end_verse: Option<u32>,
}

impl VerseSpan {
    pub fn display(&self, mode: DisplayMode) -> String {
        match (mode, self.end_verse) {
            (DisplayMode::Full, Some(end)) if end > self.verse => {
                format!("{} {}:{}-{}", self.book, self.chapter, self.verse, end)
            }
            _ => format!("{} {}:{}", self.book, self.chapter, self.verse),
        }
    }
}

/// Parses and validates one reference such as `1 Jn 4:8` or `Ps. 23:1-3`.
pub fn parse_reference(raw: &str) -> Option<VerseSpan> {
    let caps = reference_regex().captures(raw.trim())?;
    let book = *alias_index().get(&book_key(&caps["book"]))?;
    let chapter: u32 = caps["chapter"].parse().ok()?;
    let verse: u32 = caps["verse"].parse().ok()?;
    let end_verse = match caps.name("end") {
        Some(m) => Some(m.as_str().parse::<u32>().ok()?),
        None => None,
    };
    if chapter == 0 || chapter > book.chapters || verse == 0 || verse > MAX_VERSE {
        return None;
    }
    if end_verse.is_some_and(|e| e < verse || e > MAX_VERSE) {
        return None;
    }
    Some(VerseSpan {
        book: book.name,
        chapter,
        verse,
        end_verse,
    })
}

/// Regex-driven matcher over [`BOOKS`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BookMatcher;

impl ReferenceMatcher for BookMatcher {
    fn find_candidates(&self, text: &str) -> Vec<Candidate> {
        reference_regex()
            .find_iter(text)
            .map(|m| Candidate {
                begin: text[..m.start()].chars().count(),
                end: text[..m.end()].chars().count(),
                raw: m.as_str().to_string(),
            })
            .collect()
    }

    fn canonicalize(&self, candidate: &Candidate, mode: DisplayMode) -> Option<String> {
        parse_reference(&candidate.raw).map(|s| s.display(mode))
    }
}
