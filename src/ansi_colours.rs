//! Convenience helper for producing coloured terminal output.
//!
//! The `AnsiDecorator` turns outline styles into the inline escape
//! sequences understood by most terminals, using `termion`.

use crate::render::{Colour, Decorator, Style};
use std::io;
use termion::color::{self, Bg, Fg};

/// A decorator which emits ANSI terminal escape sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiDecorator {}

impl AnsiDecorator {
    /// Create a new `AnsiDecorator`.
    pub fn new() -> AnsiDecorator {
        AnsiDecorator {}
    }
}

fn fg_sequence(colour: Colour) -> String {
    match colour {
        Colour::Black => format!("{}", Fg(color::Black)),
        Colour::Red => format!("{}", Fg(color::Red)),
        Colour::Green => format!("{}", Fg(color::Green)),
        Colour::Yellow => format!("{}", Fg(color::Yellow)),
        Colour::Blue => format!("{}", Fg(color::Blue)),
        Colour::Magenta => format!("{}", Fg(color::Magenta)),
        Colour::Cyan => format!("{}", Fg(color::Cyan)),
        Colour::White => format!("{}", Fg(color::White)),
    }
}

fn bg_sequence(colour: Colour) -> String {
    match colour {
        Colour::Black => format!("{}", Bg(color::Black)),
        Colour::Red => format!("{}", Bg(color::Red)),
        Colour::Green => format!("{}", Bg(color::Green)),
        Colour::Yellow => format!("{}", Bg(color::Yellow)),
        Colour::Blue => format!("{}", Bg(color::Blue)),
        Colour::Magenta => format!("{}", Bg(color::Magenta)),
        Colour::Cyan => format!("{}", Bg(color::Cyan)),
        Colour::White => format!("{}", Bg(color::White)),
    }
}

impl Decorator for AnsiDecorator {
    fn decorate(&self, style: Style, text: &str) -> String {
        let mut result = String::new();
        if let Some(c) = style.fg {
            result.push_str(&fg_sequence(c));
        }
        if let Some(c) = style.bg {
            result.push_str(&bg_sequence(c));
        }
        if style.bold {
            result.push_str(&format!("{}", termion::style::Bold));
        }
        if style.reverse {
            result.push_str(&format!("{}", termion::style::Invert));
        }
        result.push_str(text);
        // One reset clears colours and attributes together.
        result.push_str(&format!("{}", termion::style::Reset));
        result
    }
}

/// Reads HTML from `input`, and returns the outline coloured with ANSI
/// escape sequences using the default options.
pub fn from_read_coloured<R>(input: R) -> Result<String, crate::Error>
where
    R: io::Read,
{
    crate::config::ansi().string_from_read(input)
}
