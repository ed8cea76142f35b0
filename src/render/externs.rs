//! Collecting and reporting references to external resources.

use super::style::{Role, StyleRegistry};
use super::{Colour, Decorator};
use crate::dom::Element;
use std::collections::HashSet;

/// Header line printed above the reference report.
pub const REPORT_HEADER: &str = "External references:";

/// Substrings (matched case-insensitively) of values which are inline
/// data or binary media, and never reported.
pub const DENYLIST: &[&str] = &[
    "data:", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico", ".bmp", ".tif", ".mp3",
    ".wav", ".ogg", ".flac", ".m4a", ".mp4", ".webm", ".avi", ".mov", ".mkv",
];

/// How a category pattern is matched against a reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Match {
    Prefix,
    Contains,
}

/// Reference categories, tried in order; the first match wins.
const CATEGORIES: &[(&str, Match, Colour)] = &[
    ("mailto:", Match::Prefix, Colour::Magenta),
    ("https:", Match::Prefix, Colour::Green),
    ("http:", Match::Prefix, Colour::Yellow),
    (".js", Match::Contains, Colour::Cyan),
    (".css", Match::Contains, Colour::Blue),
];

/// The colour of the first category matching `reference`, if any.
pub fn category(reference: &str) -> Option<Colour> {
    CATEGORIES
        .iter()
        .find(|(pattern, how, _)| match how {
            Match::Prefix => reference.starts_with(pattern),
            Match::Contains => reference.contains(pattern),
        })
        .map(|&(_, _, colour)| colour)
}

/// True if `value` looks like inline data or a media file.
pub fn is_denied(value: &str) -> bool {
    let lower = value.to_lowercase();
    DENYLIST.iter().any(|pat| lower.contains(pat))
}

/// The distinct external references seen during a walk.
#[derive(Debug, Default)]
pub struct ExternSet {
    seen: HashSet<String>,
    references: Vec<String>,
}

impl ExternSet {
    /// Create an empty set.
    pub fn new() -> ExternSet {
        Default::default()
    }

    /// Record the `href` and `src` of `elt` if they point somewhere
    /// worth reporting.
    pub fn observe(&mut self, elt: &Element) {
        if let Some(href) = elt.attr("href") {
            if !href.starts_with('#') && href.chars().count() > 1 {
                self.add(href);
            }
        }
        if let Some(src) = elt.attr("src") {
            if !src.is_empty() {
                self.add(src);
            }
        }
    }

    fn add(&mut self, value: &str) {
        if is_denied(value) || self.seen.contains(value) {
            return;
        }
        self.seen.insert(value.into());
        self.references.push(value.into());
    }

    /// References in the order first seen.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Returns true if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// The report lines: blank line, header, then one styled entry per
    /// reference in sorted order.  Empty if nothing was collected.
    pub fn report<D: Decorator>(&self, styles: &StyleRegistry<D>) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut sorted: Vec<&String> = self.references.iter().collect();
        sorted.sort();
        let mut lines = vec![String::new(), REPORT_HEADER.to_string()];
        lines.extend(sorted.into_iter().map(|reference| {
            let styled = match category(reference) {
                Some(colour) => styles.style_for(Role::Extern(colour), reference),
                None => reference.clone(),
            };
            format!("- {}", styled)
        }));
        lines
    }
}
