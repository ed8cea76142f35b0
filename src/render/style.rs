//! The mapping from what a piece of text means to how it looks.

use super::{Colour, Decorator, Style, PALETTE};

/// The semantic role of a piece of outline text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// An upper-cased tag name.
    Tag,
    /// An `#id`.
    Id,
    /// A class token, by its colour slot.
    Class(usize),
    /// The indentation and separator at a nesting level.
    Indent(usize),
    /// A `...skipped N...` marker.
    Skipped,
    /// The text preview of an element.
    TextPreview,
    /// A comment body within the outline.
    Comment,
    /// A comment body in only-comments mode.
    CommentOnly,
    /// The `data-*` attribute summary.
    DataAttributes,
    /// An external reference in the final report.
    Extern(Colour),
}

impl Role {
    /// The visual style for this role.
    pub fn style(self) -> Style {
        match self {
            Role::Tag => Style::fg(Colour::White).bold(),
            Role::Id => Style::fg(Colour::Red).on(Colour::Black).bold(),
            Role::Class(slot) => Style::fg(PALETTE[slot % PALETTE.len()]),
            Role::Indent(level) => Style::fg(PALETTE[level % PALETTE.len()]),
            Role::Skipped => Style::default(),
            Role::TextPreview => Style::default().reverse(),
            Role::Comment => Style::fg(Colour::White).on(Colour::Red).bold(),
            Role::CommentOnly => Style::fg(Colour::Green),
            Role::DataAttributes => Style::fg(Colour::Green).bold(),
            Role::Extern(colour) => Style::fg(colour),
        }
    }
}

/// Applies role styles through a decorator, unless colour is switched off.
///
/// The switch is fixed when the registry is built and applies to every
/// piece of text styled during the session.
pub struct StyleRegistry<D: Decorator> {
    decorator: D,
    enabled: bool,
}

impl<D: Decorator> StyleRegistry<D> {
    /// Create a registry which styles with `decorator` if `enabled`.
    pub fn new(decorator: D, enabled: bool) -> StyleRegistry<D> {
        StyleRegistry { decorator, enabled }
    }

    /// Style `text` for `role`.  Empty text and plain styles are
    /// returned unchanged.
    pub fn style_for(&self, role: Role, text: &str) -> String {
        let style = role.style();
        if !self.enabled || text.is_empty() || style.is_plain() {
            return text.into();
        }
        self.decorator.decorate(style, text)
    }
}
