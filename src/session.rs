//! The interactive investigation.
//!
//! [`InvestigationSession`] owns the mansion, the clue index and the suspect
//! registry, and drives them from a line-oriented menu. Input and output are
//! generic so the whole loop can run against in-memory buffers.
//!
//! Mistyped menu options, blocked doors and unknown suspects are reported to
//! the player and re-prompted; they are never errors. Only a failure of the
//! underlying streams ends the session with an error. End of input ends the
//! session as if the player had chosen to leave.

use std::io::{self, BufRead, Write};

use tracing::instrument;

use crate::{
    case::Case,
    domain::{
        ClueIndex, ClueText, Direction, MansionMap, Room, RoomName, SuspectRegistry,
        registry::Released,
    },
    report,
    terminal::{Colorize, rule},
};

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// An entry on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: walk the mansion.
    Explore,
    /// 2: list collected clues alphabetically.
    ListClues,
    /// 3: look up one suspect by name.
    SearchSuspect,
    /// 4: list every suspect and their clues.
    ListSuspects,
    /// 5: report the most cited suspect.
    MostCited,
    /// 0: close the case.
    Exit,
}

impl MenuChoice {
    /// Parses a menu line. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u8>().ok()? {
            1 => Some(Self::Explore),
            2 => Some(Self::ListClues),
            3 => Some(Self::SearchSuspect),
            4 => Some(Self::ListSuspects),
            5 => Some(Self::MostCited),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A command at an exploration decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreCommand {
    /// `e`/`E` (esquerda) or `d`/`D` (direita).
    Go(Direction),
    /// `s`/`S` (sair): stop exploring.
    Leave,
}

impl ExploreCommand {
    /// Parses a single-letter command, ignoring case and surrounding
    /// whitespace. Anything else is rejected.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.trim().chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match letter.to_ascii_lowercase() {
            'e' => Some(Self::Go(Direction::Left)),
            'd' => Some(Self::Go(Direction::Right)),
            's' => Some(Self::Leave),
            _ => None,
        }
    }
}

/// How an exploration came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationEnd {
    /// The player reached a room with no way onward.
    DeadEnd,
    /// The player chose to stop.
    Left,
    /// Input ran out mid-exploration.
    InputClosed,
}

/// What happened during one walk through the mansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    /// Rooms visited, starting with the entry room.
    pub path: Vec<RoomName>,
    /// Clues seen along the way, in visiting order.
    pub discovered: Vec<ClueText>,
    /// Why the walk stopped.
    pub end: ExplorationEnd,
}

/// Everything released when a session is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    /// Rooms released.
    pub rooms: usize,
    /// Clue index nodes released.
    pub clues: usize,
    /// Suspects and their clue items released.
    pub registry: Released,
}

/// The interactive investigation loop.
#[derive(Debug)]
pub struct InvestigationSession<R, W> {
    mansion: MansionMap,
    registry: SuspectRegistry,
    clues: ClueIndex,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InvestigationSession<R, W> {
    /// Creates a session over `case`, with an empty clue index.
    #[must_use]
    pub fn new(case: Case, input: R, output: W) -> Self {
        Self {
            mansion: case.mansion,
            registry: case.registry,
            clues: ClueIndex::new(),
            input,
            output,
        }
    }

    /// The clues collected so far.
    pub const fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// The suspect registry.
    pub const fn registry(&self) -> &SuspectRegistry {
        &self.registry
    }

    /// The mansion.
    pub const fn mansion(&self) -> &MansionMap {
        &self.mansion
    }

    /// Runs the main menu until the player exits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the input or output stream fails.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        tracing::info!("investigation opened");
        self.write_banner()?;

        loop {
            self.write_main_menu()?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                writeln!(self.output)?;
                break;
            };
            writeln!(self.output)?;

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Explore) => {
                    writeln!(self.output, "=== EXPLORE THE MANSION ===\n")?;
                    self.explore()?;
                }
                Some(MenuChoice::ListClues) => {
                    writeln!(self.output, "=== COLLECTED CLUES (alphabetical) ===")?;
                    report::write_clues(&mut self.output, &self.clues)?;
                }
                Some(MenuChoice::SearchSuspect) => {
                    writeln!(self.output, "=== SEARCH SUSPECT ===")?;
                    self.search_suspect()?;
                }
                Some(MenuChoice::ListSuspects) => {
                    writeln!(self.output, "=== ALL SUSPECTS AND CLUES ===")?;
                    report::write_all_suspects(&mut self.output, &self.registry)?;
                }
                Some(MenuChoice::MostCited) => {
                    writeln!(self.output, "=== FINAL ANALYSIS ===")?;
                    report::write_most_cited(&mut self.output, self.registry.most_cited())?;
                }
                Some(MenuChoice::Exit) => break,
                None => {
                    tracing::debug!(input = %line.trim(), "rejected menu option");
                    writeln!(self.output, "{}\n", "Invalid option!".warning())?;
                }
            }
        }

        writeln!(self.output, "Closing the investigation...")?;
        writeln!(self.output, "Case closed!")?;
        self.output.flush()?;
        tracing::info!(clues = self.clues.len(), "investigation closed");
        Ok(())
    }

    /// Walks the mansion from the entry room until a dead end, an explicit
    /// leave, or the end of input.
    ///
    /// Each room's clue is recorded once per visit; re-prompting in the same
    /// room does not record it again.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the input or output stream fails.
    #[instrument(level = "debug", skip(self))]
    pub fn explore(&mut self) -> Result<Exploration, SessionError> {
        let Self {
            mansion,
            clues,
            input,
            output,
            ..
        } = self;

        let mut current = mansion.entry();
        let mut path = Vec::new();
        let mut discovered = Vec::new();

        let end = 'rooms: loop {
            path.push(current.name().clone());
            visit(output, clues, current, &mut discovered)?;

            if current.is_leaf() {
                writeln!(output, "\nThis room has no more paths!")?;
                writeln!(output, "Returning to the main menu...\n")?;
                break ExplorationEnd::DeadEnd;
            }

            loop {
                write_paths(output, current)?;
                write!(output, "Your choice: ")?;
                output.flush()?;

                let Some(line) = read_line(input)? else {
                    writeln!(output)?;
                    break 'rooms ExplorationEnd::InputClosed;
                };
                writeln!(output)?;

                match ExploreCommand::parse(&line) {
                    Some(ExploreCommand::Go(direction)) => {
                        if let Some(next) = current.child(direction) {
                            tracing::debug!(from = %current.name(), to = %next.name(), "moved");
                            writeln!(output, "Heading {direction}...\n")?;
                            current = next;
                            continue 'rooms;
                        }
                        writeln!(
                            output,
                            "{}\n",
                            format!("ERROR: there is no path to the {direction}!").warning()
                        )?;
                    }
                    Some(ExploreCommand::Leave) => {
                        writeln!(output, "Leaving the exploration...\n")?;
                        break 'rooms ExplorationEnd::Left;
                    }
                    None => writeln!(output, "{}\n", "Invalid option!".warning())?,
                }
            }
        };

        tracing::debug!(rooms = path.len(), clues = discovered.len(), ?end, "exploration over");
        Ok(Exploration {
            path,
            discovered,
            end,
        })
    }

    /// Prompts for a suspect name and reports what the registry holds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the input or output stream fails.
    #[instrument(level = "debug", skip(self))]
    pub fn search_suspect(&mut self) -> Result<(), SessionError> {
        write!(self.output, "Suspect name: ")?;
        self.output.flush()?;

        let name = read_line(&mut self.input)?.unwrap_or_default();
        let name = name.trim_end_matches(['\r', '\n']);

        let found = self.registry.find_suspect(name);
        tracing::debug!(name, found = found.is_some(), "suspect lookup");
        report::write_search(&mut self.output, name, found)?;
        Ok(())
    }

    /// Consumes the session, releasing every structure it owns.
    #[must_use]
    pub fn teardown(self) -> Teardown {
        Teardown {
            rooms: self.mansion.teardown(),
            clues: self.clues.teardown(),
            registry: self.registry.teardown(),
        }
    }

    fn write_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", rule('='))?;
        writeln!(self.output, "      {}", "DETECTIVE QUEST".strong())?;
        writeln!(self.output, "   Room tree, clue index and suspect table")?;
        writeln!(self.output, "{}\n", rule('='))?;
        writeln!(
            self.output,
            "Mansion loaded ({} rooms, {} suspects on file). Ready to investigate.\n",
            self.mansion.room_count(),
            self.registry.len()
        )
    }

    fn write_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", rule('='))?;
        writeln!(self.output, "MAIN MENU")?;
        writeln!(self.output, "{}", rule('='))?;
        writeln!(self.output, "1 - Explore the mansion")?;
        writeln!(self.output, "2 - List collected clues")?;
        writeln!(self.output, "3 - Search for a suspect")?;
        writeln!(self.output, "4 - List all suspects")?;
        writeln!(self.output, "5 - Find the most likely suspect")?;
        writeln!(self.output, "0 - Exit")?;
        writeln!(self.output, "{}", rule('='))
    }
}

fn visit(
    output: &mut impl Write,
    clues: &mut ClueIndex,
    room: &Room,
    discovered: &mut Vec<ClueText>,
) -> io::Result<()> {
    writeln!(output, "{}", rule('='))?;
    writeln!(output, "You are in: {}", room.name().as_str().strong())?;
    writeln!(output, "{}", rule('='))?;

    if let Some(clue) = room.clue() {
        writeln!(output, "\n{}", "*** CLUE FOUND ***".success())?;
        writeln!(output, "Clue: {clue}")?;
        if clues.insert(clue.clone()) {
            writeln!(output, "{}\n", "(Added to the investigation notebook)".dim())?;
        } else {
            writeln!(output, "{}\n", "(Already in the investigation notebook)".dim())?;
        }
        discovered.push(clue.clone());
    }
    Ok(())
}

fn write_paths(output: &mut impl Write, room: &Room) -> io::Result<()> {
    writeln!(output, "Available paths:")?;
    if let Some(left) = room.left() {
        writeln!(output, "  [E] Esquerda (left)  -> {}", left.name())?;
    }
    if let Some(right) = room.right() {
        writeln!(output, "  [D] Direita (right)  -> {}", right.name())?;
    }
    writeln!(output, "  [S] Sair (leave the exploration)")?;
    writeln!(output, "{}", rule('-').dim())?;
    writeln!(output, "E - Left | D - Right | S - Leave")?;
    writeln!(output, "{}", rule('-').dim())
}

/// Reads one line, returning `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}
