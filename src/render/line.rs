//! Formatting a single node as one outline line.

use super::classes::ClassColourTable;
use super::style::{Role, StyleRegistry};
use super::{Decorator, Options};
use crate::dom::{Comment, Element, Node};

/// Character repeated to indent a line.
pub const INDENT_CHAR: char = '-';

/// Placed between the indentation and the node itself.
pub const SEPARATOR: &str = "> ";

/// Maximum number of characters of an element's text shown.
pub const PREVIEW_CHARS: usize = 10;

/// A formatted outline line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedLine {
    /// The styled indentation (including the separator) the line starts with.
    pub indent: String,
    /// The whole styled line, indentation included.
    pub text: String,
}

/// Number of indent characters used at `level`.
///
/// The per-level width (optionally computed from half the level) is
/// multiplied by the level again, so deeper levels grow quickly.
pub fn indent_width(options: &Options, level: usize) -> usize {
    let per_level = if options.indent_doubling {
        options.indent_size * (level / 2)
    } else {
        options.indent_size * level
    };
    per_level * level
}

/// A short single-line preview of an element's own text.
pub fn text_preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    let collapsed = head.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{}...", collapsed)
}

/// Formats nodes using the session's styles and class colours.
pub struct LineFormatter<'s, D: Decorator> {
    pub(super) options: &'s Options,
    pub(super) styles: &'s StyleRegistry<D>,
    pub(super) classes: &'s mut ClassColourTable,
}

impl<'s, D: Decorator> LineFormatter<'s, D> {
    /// Format `node` at nesting `level`, or return `None` if the options
    /// suppress it.
    pub fn format(&mut self, node: &Node, level: usize) -> Option<FormattedLine> {
        if self.options.only_comments {
            return match node {
                Node::Comment(Comment { text }) if !text.trim().is_empty() => {
                    let line = self.styles.style_for(Role::CommentOnly, text.trim());
                    Some(FormattedLine {
                        indent: String::new(),
                        text: line,
                    })
                }
                _ => None,
            };
        }

        let mut indent: String = std::iter::repeat(INDENT_CHAR)
            .take(indent_width(self.options, level))
            .collect();
        indent.push_str(SEPARATOR);
        let indent = self.styles.style_for(Role::Indent(level), &indent);

        let elt = match node {
            Node::Comment(Comment { text }) => {
                let text = format!("{}{}", indent, self.styles.style_for(Role::Comment, text.trim()));
                return Some(FormattedLine { indent, text });
            }
            Node::Element(elt) => elt,
        };

        let mut out = indent.clone();
        out.push_str(&self.styles.style_for(Role::Tag, &elt.tag.to_uppercase()));
        out.push_str(&self.id(elt));
        out.push_str(&self.class_list(elt));
        if !self.options.hide_data_attributes {
            out.push_str(&self.data_attributes(elt));
        }
        if !self.options.hide_text && !elt.is_empty() {
            if let Some(text) = &elt.text {
                out.push(' ');
                out.push_str(&self.styles.style_for(Role::TextPreview, &text_preview(text)));
            }
        }

        if self.options.skip_empty_tags && elt.is_empty() {
            return None;
        }
        Some(FormattedLine { indent, text: out })
    }

    fn id(&self, elt: &Element) -> String {
        match elt.attr("id") {
            Some(id) if !id.is_empty() => self.styles.style_for(Role::Id, &format!("#{}", id)),
            _ => String::new(),
        }
    }

    fn class_list(&mut self, elt: &Element) -> String {
        let Some(classes) = elt.attr("class") else {
            return String::new();
        };
        let tokens: Vec<String> = classes
            .split_whitespace()
            .map(|class| {
                let slot = self.classes.slot_for(class);
                self.styles.style_for(Role::Class(slot), &format!(".{}", class))
            })
            .collect();
        if tokens.is_empty() {
            String::new()
        } else {
            format!(" ({})", tokens.concat())
        }
    }

    fn data_attributes(&self, elt: &Element) -> String {
        let data: Vec<String> = elt
            .attributes
            .iter()
            .filter(|(k, _)| k.starts_with("data-"))
            .map(|(k, v)| format!("{}='{}'", k, v))
            .collect();
        if data.is_empty() {
            String::new()
        } else {
            format!(" {{{}}}", self.styles.style_for(Role::DataAttributes, &data.join(", ")))
        }
    }
}
