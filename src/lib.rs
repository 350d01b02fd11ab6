//! Detective Quest
//!
//! A text-menu detective game. The player walks a fixed tree of rooms,
//! collecting clues into an alphabetical index, and queries a hash table of
//! suspects to find out who is cited most.

pub mod domain;
pub use domain::{ClueIndex, Config, MansionMap, Room, SuspectRegistry};

/// The literal mansion and seeded suspect file.
pub mod case;
pub use case::Case;

/// Plain-text rendering of clues, suspects and the map.
pub mod report;

/// The interactive investigation loop.
pub mod session;
pub use session::{InvestigationSession, SessionError};

/// Terminal colour and width helpers.
pub mod terminal;
