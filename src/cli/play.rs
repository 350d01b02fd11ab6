use std::io;

use clap::Parser;
use detective_quest::{Case, Config, InvestigationSession};
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "Walk the mansion, collect clues and question the suspect file")]
pub struct Play {}

impl Play {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let case = Case::build(config.overflow)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = InvestigationSession::new(case, stdin.lock(), stdout.lock());
        session.run()?;

        let released = session.teardown();
        tracing::debug!(
            rooms = released.rooms,
            clues = released.clues,
            suspects = released.registry.suspects,
            suspect_clues = released.registry.clues,
            "released case"
        );
        Ok(())
    }
}
