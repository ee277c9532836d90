use tracing::debug;

use crate::model::CanonicalReference;

/// Characters kept on each side of the caret before matching.
pub const CARET_WINDOW: usize = 25;

/// A span of text that might be a scripture reference. `begin` and `end` are
/// char offsets into the text the matcher was given; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub begin: usize,
    pub end: usize,
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Only the first verse of a range: `John 3:16`.
    #[default]
    First,
    /// The whole range as written: `John 3:16-18`.
    Full,
}

/// The reference engine: finds candidate references and validates them.
pub trait ReferenceMatcher {
    fn find_candidates(&self, text: &str) -> Vec<Candidate>;

    /// Canonical display string, or `None` when the candidate is not a real
    /// verse.
    fn canonicalize(&self, candidate: &Candidate, mode: DisplayMode) -> Option<String>;
}

impl<M: ReferenceMatcher + ?Sized> ReferenceMatcher for &M {
    fn find_candidates(&self, text: &str) -> Vec<Candidate> {
        (**self).find_candidates(text)
    }

    fn canonicalize(&self, candidate: &Candidate, mode: DisplayMode) -> Option<String> {
        (**self).canonicalize(candidate, mode)
    }
}

pub struct Resolver<M> {
    matcher: M,
}

impl<M: ReferenceMatcher> Resolver<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    /// Finds the reference under `caret` (a char offset into `text`), or the
    /// first reference in `text` when no caret is given.
    ///
    /// With a caret only the surrounding [`CARET_WINDOW`] chars of the caret's
    /// line are searched, and the chosen candidate must contain the caret or
    /// end right at it.
    pub fn resolve(&self, text: &str, caret: Option<usize>) -> Option<CanonicalReference> {
        let candidate = match caret {
            Some(caret) => {
                let (window, loc) = caret_window(text, caret);
                self.matcher
                    .find_candidates(&window)
                    .into_iter()
                    .find(|c| c.begin <= loc && loc <= c.end)
            }
            None => self.matcher.find_candidates(text).into_iter().next(),
        };
        let Some(candidate) = candidate else {
            debug!("no reference candidate");
            return None;
        };
        let display = self.matcher.canonicalize(&candidate, DisplayMode::First)?;
        let display = display.trim();
        if display.is_empty() {
            debug!(raw = %candidate.raw, "candidate did not validate");
            return None;
        }
        Some(CanonicalReference::new(display))
    }
}

/// Slice of the caret's line within `CARET_WINDOW` chars of the caret, and the
/// caret's offset inside that slice. Offsets past the end clamp to the end.
pub fn caret_window(text: &str, caret: usize) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let caret = caret.min(chars.len());
    let line_start = chars[..caret]
        .iter()
        .rposition(|&c| c == '\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let line_end = chars[caret..]
        .iter()
        .position(|&c| c == '\n' || c == '\r')
        .map(|i| caret + i)
        .unwrap_or(chars.len());
    let begin = caret.saturating_sub(CARET_WINDOW).max(line_start);
    let end = (caret + CARET_WINDOW).min(line_end);
    (chars[begin..end].iter().collect(), caret - begin)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Treats every `X n:n` token as a candidate and accepts only `John`.
    struct JohnOnly;

    impl ReferenceMatcher for JohnOnly {
        fn find_candidates(&self, text: &str) -> Vec<Candidate> {
            let re = regex::Regex::new(r"[A-Za-z]+ \d+:\d+").unwrap();
            re.find_iter(text)
                .map(|m| Candidate {
                    begin: text[..m.start()].chars().count(),
                    end: text[..m.end()].chars().count(),
                    raw: m.as_str().to_string(),
                })
                .collect()
        }

        fn canonicalize(&self, c: &Candidate, _mode: DisplayMode) -> Option<String> {
            c.raw.starts_with("John").then(|| c.raw.clone())
        }
    }

    #[test]
    fn window_is_clipped_to_line() {
        let text = "first line\nJohn 3:16 here\nlast";
        let caret = text.find("3:16").unwrap();
        let (w, loc) = caret_window(text, caret);
        assert_eq!(w, "John 3:16 here");
        assert_eq!(loc, 5);
    }

    #[test]
    fn window_is_bounded_on_long_lines() {
        let text = "x".repeat(100);
        let (w, loc) = caret_window(&text, 50);
        assert_eq!(w.chars().count(), 2 * CARET_WINDOW);
        assert_eq!(loc, CARET_WINDOW);
    }

    #[test]
    fn caret_past_end_is_clamped() {
        let (w, loc) = caret_window("John 3:16", 400);
        assert_eq!(w, "John 3:16");
        assert_eq!(loc, 9);
    }

    #[test]
    fn picks_candidate_under_caret() {
        let res = Resolver::new(JohnOnly);
        let text = "Mark 1:1 and John 3:16 and John 1:1";
        let caret = text.find("3:16").unwrap() + 1;
        assert_eq!(res.resolve(text, Some(caret)).unwrap().as_str(), "John 3:16");
    }

    #[test]
    fn caret_at_end_of_candidate_counts() {
        let res = Resolver::new(JohnOnly);
        let text = "see John 3:16";
        assert_eq!(res.resolve(text, Some(text.len())).unwrap().as_str(), "John 3:16");
    }

    #[test]
    fn caret_outside_any_candidate_is_no_match() {
        let res = Resolver::new(JohnOnly);
        assert!(res.resolve("John 3:16 is a verse people quote", Some(30)).is_none());
    }

    #[test]
    fn no_caret_uses_first_candidate_only() {
        let res = Resolver::new(JohnOnly);
        assert!(res.resolve("Mark 1:1 then John 3:16", None).is_none());
        assert_eq!(res.resolve("John 3:16 then Mark 1:1", None).unwrap().as_str(), "John 3:16");
    }

    #[test]
    fn plain_text_is_no_match() {
        let res = Resolver::new(JohnOnly);
        assert!(res.resolve("nothing to see here", None).is_none());
        assert!(res.resolve("", Some(0)).is_none());
    }
}
