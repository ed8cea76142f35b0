//! Show the element structure of HTML as an indented outline.
//!
//! This crate renders the element tree of an HTML document as one line
//! per element or comment, indented by depth, to make structural clutter
//! (deep nesting, repeated boilerplate blocks, noisy markup) easy to
//! spot.  Class names keep the same colour wherever they appear, runs of
//! identical lines are collapsed into a `...skipped N...` marker, and the
//! external resources the document references are listed at the end.
//!
//! # Examples
//!
//! ```rust
//! # use html2outline::from_read;
//! let html = b"<ul><li>Item</li><li>Item</li><li>Other</li></ul>";
//! assert_eq!(from_read(&html[..]).unwrap(),
//!            "\
//! > HEAD
//! > BODY
//! ----> UL
//! ----------------> LI Item...
//! ----------------> ...skipped 1...
//! ----------------> LI Other...
//! ");
//! ```
//!
//! The `html2outline` binary wraps this for the command line:
//!
//! ```sh
//! $ html2outline --skip-head page.html
//! [...]
//! ```

#![deny(missing_docs)]

pub mod dom;
pub mod render;

#[cfg(unix)]
mod ansi_colours;

#[cfg(unix)]
pub use ansi_colours::{from_read_coloured, AnsiDecorator};
pub use dom::{parse, Document};
pub use render::{Decorator, Options, PlainDecorator, RenderSession};

use std::io;

/// Errors from reading or writing an outline.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An input file could not be read.
    #[error("{path}: {source}")]
    Input {
        /// The path as given.
        path: String,
        /// The underlying error.
        source: io::Error,
    },
    /// An output file could not be created.
    #[error("{path}: {source}")]
    Output {
        /// The path as given.
        path: String,
        /// The underlying error.
        source: io::Error,
    },
    /// An I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub mod config {
    //! Configure the outline using the `Config` type, which can be
    //! constructed using one of the functions in this module.

    #[cfg(unix)]
    use crate::ansi_colours::AnsiDecorator;
    use crate::dom::{parse, Document};
    use crate::render::{Decorator, Options, PlainDecorator, RenderSession};
    use crate::Result;
    use std::io;

    /// Configure the outline rendering.
    pub struct Config<D: Decorator> {
        options: Options,
        decorator: D,
    }

    impl<D: Decorator> Config<D> {
        /// Set the base indentation width per level (default 4).
        pub fn indent_size(mut self, size: usize) -> Self {
            self.options.indent_size = size;
            self
        }

        /// Compute indentation from half the level.
        pub fn indent_doubling(mut self, doubling: bool) -> Self {
            self.options.indent_doubling = doubling;
            self
        }

        /// Leave out `data-*` attributes.
        pub fn hide_data_attributes(mut self, hide: bool) -> Self {
            self.options.hide_data_attributes = hide;
            self
        }

        /// Show only comment text.
        pub fn only_comments(mut self, only: bool) -> Self {
            self.options.only_comments = only;
            self
        }

        /// Don't show or descend into `head`.
        pub fn skip_head(mut self, skip: bool) -> Self {
            self.options.skip_head = skip;
            self
        }

        /// Leave out the text preview.
        pub fn hide_text(mut self, hide: bool) -> Self {
            self.options.hide_text = hide;
            self
        }

        /// Leave out elements with no text of their own.
        pub fn skip_empty_tags(mut self, skip: bool) -> Self {
            self.options.skip_empty_tags = skip;
            self
        }

        /// Output plain text even with a colouring decorator.
        pub fn no_colour(mut self, no_colour: bool) -> Self {
            self.options.no_colour = no_colour;
            self
        }

        /// The options currently set.
        pub fn options(&self) -> &Options {
            &self.options
        }

        /// Render the outline of an already parsed document to `out`.
        pub fn render<W: io::Write>(self, doc: &Document, out: &mut W) -> Result<()> {
            RenderSession::new(self.options, self.decorator).render(doc, out)
        }

        /// Reads HTML from `input` and writes its outline to `out`.
        pub fn write_from_read<R: io::Read, W: io::Write>(self, input: R, out: &mut W) -> Result<()> {
            let doc = parse(input)?;
            self.render(&doc, out)
        }

        /// Reads HTML from `input`, and returns the outline as a `String`.
        pub fn string_from_read<R: io::Read>(self, input: R) -> Result<String> {
            let mut out = Vec::new();
            self.write_from_read(input, &mut out)?;
            Ok(String::from_utf8_lossy(&out).into_owned())
        }

        /// Reads HTML from `input`, and returns the outline as lines.
        pub fn lines_from_read<R: io::Read>(self, input: R) -> Result<Vec<String>> {
            Ok(self
                .string_from_read(input)?
                .lines()
                .map(String::from)
                .collect())
        }
    }

    /// Return a Config producing plain, uncoloured text.
    pub fn plain() -> Config<PlainDecorator> {
        Config {
            options: Options {
                no_colour: true,
                ..Default::default()
            },
            decorator: PlainDecorator::new(),
        }
    }

    /// Return a Config producing ANSI coloured text.
    #[cfg(unix)]
    pub fn ansi() -> Config<AnsiDecorator> {
        with_decorator(AnsiDecorator::new())
    }

    /// Return a Config initialized with a custom decorator.
    pub fn with_decorator<D: Decorator>(decorator: D) -> Config<D> {
        Config {
            options: Options::default(),
            decorator,
        }
    }
}

/// Reads HTML from `input`, and returns its plain text outline.
pub fn from_read<R>(input: R) -> Result<String>
where
    R: io::Read,
{
    config::plain().string_from_read(input)
}
