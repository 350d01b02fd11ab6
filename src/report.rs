use std::io::{self, Write};

use crate::{
    domain::{ClueIndex, MansionMap, SuspectRegistry, SuspectView},
    terminal::{Colorize, rule},
};

/// Writes the collected clues in alphabetical order.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_clues(out: &mut impl Write, clues: &ClueIndex) -> io::Result<()> {
    if clues.is_empty() {
        writeln!(out, "{}", "No clues collected yet.".dim())?;
    } else {
        for clue in clues {
            writeln!(out, "  - {clue}")?;
        }
    }
    writeln!(out)
}

/// Writes one suspect and their clues, most recent first.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_suspect(out: &mut impl Write, suspect: SuspectView<'_>) -> io::Result<()> {
    writeln!(
        out,
        "Suspect: {} ({} clue(s))",
        suspect.name().as_str().strong(),
        suspect.citations()
    )?;
    for clue in suspect.clues() {
        writeln!(out, "  - {clue}")?;
    }
    Ok(())
}

/// Writes the outcome of a suspect lookup.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_search(
    out: &mut impl Write,
    name: &str,
    found: Option<SuspectView<'_>>,
) -> io::Result<()> {
    writeln!(out)?;
    match found {
        Some(suspect) => {
            writeln!(out, "{}", "Suspect found.".success())?;
            write_suspect(out, suspect)?;
        }
        None => writeln!(out, "Suspect '{name}' was not found.")?,
    }
    writeln!(out)
}

/// Writes every registered suspect in bucket order.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_all_suspects(out: &mut impl Write, registry: &SuspectRegistry) -> io::Result<()> {
    writeln!(out, "{}", rule('=').dim())?;
    if registry.is_empty() {
        writeln!(out, "No suspects registered yet.")?;
    }
    for suspect in registry.iter() {
        writeln!(out)?;
        write_suspect(out, suspect)?;
    }
    writeln!(out, "{}", rule('=').dim())?;
    writeln!(out)
}

/// Writes the most cited suspect, or a notice that nobody is registered.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_most_cited(out: &mut impl Write, top: Option<SuspectView<'_>>) -> io::Result<()> {
    let Some(suspect) = top else {
        writeln!(out, "No suspects registered for analysis.")?;
        return writeln!(out);
    };

    writeln!(out, "{}", rule('=').dim())?;
    writeln!(out, "    {}", "MOST LIKELY SUSPECT".warning())?;
    writeln!(out, "{}", rule('=').dim())?;
    writeln!(out, "Name: {}", suspect.name().as_str().strong())?;
    writeln!(out, "Clues citing them: {}", suspect.citations())?;
    writeln!(out, "{}", rule('=').dim())?;
    writeln!(out)
}

/// Writes the mansion as an indented outline, marking rooms that hold a clue.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_map(out: &mut impl Write, mansion: &MansionMap) -> io::Result<()> {
    for (depth, room) in mansion.walk() {
        let marker = if room.has_clue() {
            " [clue]".dim()
        } else {
            String::new()
        };
        writeln!(out, "{}{}{marker}", "  ".repeat(depth), room.name())?;
    }
    Ok(())
}
