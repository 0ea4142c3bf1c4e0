use crate::units::Pt;
use std::str::SplitWhitespace;

/// Greedy word wrapping over measured line widths.
///
/// Words are the whitespace-separated tokens of the input. Each line packs as many
/// whole words, joined by single spaces, as fit within `max_width`; the first word that
/// would overflow starts the next line. A word wider than `max_width` on its own is
/// emitted alone on its line and never split.
///
/// The iterator is consumed as it goes: create a new one to wrap the same text again.
pub struct GreedyWrap<'t, M> {
    words: SplitWhitespace<'t>,
    pending: Option<&'t str>,
    max_width: Pt,
    measure: M,
}

impl<'t, M> GreedyWrap<'t, M>
where
    M: FnMut(&str) -> Pt,
{
    /// Wrap `text` to `max_width`, measuring candidate lines with `measure`
    pub fn new(text: &'t str, max_width: Pt, measure: M) -> Self {
        GreedyWrap {
            words: text.split_whitespace(),
            pending: None,
            max_width,
            measure,
        }
    }
}

impl<'t, M> Iterator for GreedyWrap<'t, M>
where
    M: FnMut(&str) -> Pt,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.pending.take().or_else(|| self.words.next())?;
        let mut line = first.to_string();

        for word in self.words.by_ref() {
            let candidate = format!("{line} {word}");
            if (self.measure)(&candidate) <= self.max_width {
                line = candidate;
            } else {
                self.pending = Some(word);
                break;
            }
        }

        Some(line)
    }
}

/// Wrap `text` into lines no wider than `max_width` (see [GreedyWrap])
pub fn wrap_text<M>(text: &str, max_width: Pt, measure: M) -> Vec<String>
where
    M: FnMut(&str) -> Pt,
{
    GreedyWrap::new(text, max_width, measure).collect()
}
