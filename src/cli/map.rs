use std::io::{self, Write};

use clap::Parser;
use detective_quest::{Config, MansionMap, case, report, terminal::Colorize};
use tracing::instrument;

#[derive(Debug, Default, Parser)]
#[command(about = "Print the mansion as an outline, marking rooms with clues")]
pub struct Map {
    /// Hide the clue markers
    #[arg(long)]
    no_clues: bool,
}

impl Map {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mansion = case::mansion(config.overflow)?;
        self.write(&mansion, &mut io::stdout().lock())?;
        Ok(())
    }

    fn write(&self, mansion: &MansionMap, out: &mut impl Write) -> io::Result<()> {
        if self.no_clues {
            for (depth, room) in mansion.walk() {
                writeln!(out, "{}{}", "  ".repeat(depth), room.name())?;
            }
        } else {
            report::write_map(out, mansion)?;
        }

        let clues = mansion.walk().filter(|(_, room)| room.has_clue()).count();
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            format!("{} rooms, {clues} with a clue", mansion.room_count()).dim()
        )
    }
}
