//! Colored terminal output for word lookups

use crate::table::LineNo;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Result of looking up one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub word: String,
    /// `None` when the word is not in the index
    pub lines: Option<Vec<LineNo>>,
}

/// Print lookups as `word: 1, 2, 3`, marking words that were not found
pub fn print_lookups(lookups: &[Lookup], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for lookup in lookups {
        write_lookup(&mut stdout, lookup)?;
    }

    Ok(())
}

fn write_lookup<W: WriteColor>(out: &mut W, lookup: &Lookup) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", lookup.word)?;
    out.reset()?;
    write!(out, ": ")?;

    match &lookup.lines {
        Some(lines) => {
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    write!(out, ", ")?;
                }
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "{}", line)?;
                out.reset()?;
            }
        }
        None => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "not found")?;
            out.reset()?;
        }
    }

    writeln!(out)
}
