//! Collapsing runs of identical consecutive lines.

use super::line::FormattedLine;
use super::style::{Role, StyleRegistry};
use super::Decorator;

/// What a formatted line is: comments break runs but never start one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// A line for an element.
    Element,
    /// A line for a comment.
    Comment,
}

/// Compresses runs of identical lines into a `...skipped N...` marker.
///
/// Lines are compared with the last line emitted anywhere in the
/// walk, not only with siblings.  The marker for a run is written just
/// before the next line which breaks it.  A run still pending when the
/// walk ends is not reported.
#[derive(Debug, Default)]
pub struct SkipState {
    previous_line: String,
    previous_indent: String,
    skip_count: usize,
}

impl SkipState {
    /// Create an empty state.
    pub fn new() -> SkipState {
        Default::default()
    }

    /// Number of duplicates suppressed since the last emitted line.
    pub fn pending(&self) -> usize {
        self.skip_count
    }

    /// Feed one formatted line through the encoder, returning the text
    /// to emit (which may span two lines when a run is flushed) or
    /// `None` if the line is a suppressed duplicate.
    pub fn process<D: Decorator>(
        &mut self,
        kind: LineKind,
        line: FormattedLine,
        styles: &StyleRegistry<D>,
    ) -> Option<String> {
        match kind {
            LineKind::Comment => {
                if self.skip_count > 0 {
                    let out = self.flush(&line.text, styles);
                    self.previous_line.clear();
                    Some(out)
                } else {
                    Some(line.text)
                }
            }
            LineKind::Element => {
                if line.text == self.previous_line {
                    self.skip_count += 1;
                    log::trace!("suppressed duplicate line ({} so far)", self.skip_count);
                    return None;
                }
                let out = if self.skip_count > 0 {
                    self.flush(&line.text, styles)
                } else {
                    line.text.clone()
                };
                self.previous_line = line.text;
                self.previous_indent = line.indent;
                Some(out)
            }
        }
    }

    /// The marker for the pending run followed by `next`; resets the count.
    fn flush<D: Decorator>(&mut self, next: &str, styles: &StyleRegistry<D>) -> String {
        let marker = styles.style_for(Role::Skipped, &format!("...skipped {}...", self.skip_count));
        let out = format!("{}{}\n{}", self.previous_indent, marker, next);
        self.skip_count = 0;
        out
    }
}
