//! Module containing the outline renderer and the `Decorator` interface
//! used to style its output.

pub mod classes;
pub mod externs;
pub mod line;
pub mod skip;
pub mod style;

use crate::dom::{Document, Element, Node};
use classes::ClassColourTable;
use externs::ExternSet;
use line::LineFormatter;
use skip::{LineKind, SkipState};
use std::io::Write;
use style::StyleRegistry;

/// A terminal colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White
    White,
}

/// The colours cycled through by nesting level and by class.
pub const PALETTE: [Colour; 7] = [
    Colour::Red,
    Colour::Green,
    Colour::Yellow,
    Colour::Blue,
    Colour::Magenta,
    Colour::Cyan,
    Colour::White,
];

/// How a span of text should look.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground colour.
    pub fg: Option<Colour>,
    /// Background colour.
    pub bg: Option<Colour>,
    /// Bold or bright text.
    pub bold: bool,
    /// Reverse video.
    pub reverse: bool,
}

impl Style {
    /// A style with only a foreground colour.
    pub fn fg(colour: Colour) -> Style {
        Style {
            fg: Some(colour),
            ..Default::default()
        }
    }

    /// Add a background colour.
    pub fn on(self, colour: Colour) -> Style {
        Style {
            bg: Some(colour),
            ..self
        }
    }

    /// Make bold.
    pub fn bold(self) -> Style {
        Style { bold: true, ..self }
    }

    /// Make reverse video.
    pub fn reverse(self) -> Style {
        Style {
            reverse: true,
            ..self
        }
    }

    /// True if the style changes nothing.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

/// A type which applies a style to a string.
pub trait Decorator {
    /// Return `text` wrapped in whatever is needed to display it with `style`.
    fn decorate(&self, style: Style, text: &str) -> String;
}

/// A decorator which leaves text unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainDecorator {}

impl PlainDecorator {
    /// Create a new `PlainDecorator`.
    pub fn new() -> PlainDecorator {
        PlainDecorator {}
    }
}

impl Decorator for PlainDecorator {
    fn decorate(&self, _style: Style, text: &str) -> String {
        text.into()
    }
}

/// Options controlling what the outline shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Base indentation width per level.
    pub indent_size: usize,
    /// Use half the level when computing the per-level width.
    pub indent_doubling: bool,
    /// Leave out the `data-*` attribute summary.
    pub hide_data_attributes: bool,
    /// Show only the text of comments.
    pub only_comments: bool,
    /// Neither show nor descend into `head`.
    pub skip_head: bool,
    /// Leave out the text preview.
    pub hide_text: bool,
    /// Leave out elements with no text of their own.
    pub skip_empty_tags: bool,
    /// Output plain text regardless of the decorator.
    pub no_colour: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            indent_size: 4,
            indent_doubling: false,
            hide_data_attributes: false,
            only_comments: false,
            skip_head: false,
            hide_text: false,
            skip_empty_tags: false,
            no_colour: false,
        }
    }
}

/// All the state of one outline rendering: the styles in use, class
/// colours allocated so far, the duplicate run being compressed and the
/// external references collected.
pub struct RenderSession<D: Decorator> {
    options: Options,
    styles: StyleRegistry<D>,
    classes: ClassColourTable,
    skip: SkipState,
    externs: ExternSet,
}

impl<D: Decorator> RenderSession<D> {
    /// Start a session.
    pub fn new(options: Options, decorator: D) -> RenderSession<D> {
        let styles = StyleRegistry::new(decorator, !options.no_colour);
        RenderSession {
            options,
            styles,
            classes: ClassColourTable::new(PALETTE.len()),
            skip: SkipState::new(),
            externs: ExternSet::new(),
        }
    }

    /// Render the outline of `doc` to `out`, followed by the report of
    /// external references if there are any.
    pub fn render<W: Write>(&mut self, doc: &Document, out: &mut W) -> crate::Result<()> {
        log::debug!("rendering outline with {:?}", self.options);
        if let Some(root) = doc.root() {
            self.walk(root, out)?;
        }
        if self.skip.pending() > 0 {
            log::debug!("{} trailing duplicates not reported", self.skip.pending());
        }
        let report = self.externs.report(&self.styles);
        log::debug!(
            "{} external references, {} distinct classes",
            self.externs.references().len(),
            self.classes.len()
        );
        for line in report {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Depth first walk over the children of `root`, which start at
    /// level 0.
    fn walk<W: Write>(&mut self, root: &Element, out: &mut W) -> crate::Result<()> {
        let mut stack = vec![(root.children.iter(), 0usize)];
        while let Some((children, level)) = stack.last_mut() {
            let level = *level;
            let Some(node) = children.next() else {
                stack.pop();
                continue;
            };
            if let Node::Element(elt) = node {
                if self.options.skip_head && elt.tag == "head" {
                    log::trace!("skipping head subtree");
                    continue;
                }
            }
            if let Some(line) = self.visit(node, level) {
                writeln!(out, "{}", line)?;
            }
            if let Node::Element(elt) = node {
                if !elt.children.is_empty() {
                    stack.push((elt.children.iter(), level + 1));
                }
            }
        }
        Ok(())
    }

    /// Format one node and pass it through the duplicate compression,
    /// returning what should be printed for it.
    fn visit(&mut self, node: &Node, level: usize) -> Option<String> {
        let kind = match node {
            Node::Element(elt) => {
                if !self.options.only_comments {
                    self.externs.observe(elt);
                }
                LineKind::Element
            }
            Node::Comment(_) => LineKind::Comment,
        };
        let mut formatter = LineFormatter {
            options: &self.options,
            styles: &self.styles,
            classes: &mut self.classes,
        };
        let line = formatter.format(node, level)?;
        self.skip.process(kind, line, &self.styles)
    }

    /// The external references collected so far, in the order first seen.
    pub fn externs(&self) -> &[String] {
        self.externs.references()
    }
}
