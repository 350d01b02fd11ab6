//! Domain models for the investigation.
//!
//! This module contains the three data stores the session drives: the room
//! tree, the clue index and the suspect registry. None of them knows about
//! the others.

/// Bounded, non-empty text types used for names and clues.
pub mod text;
pub use text::{ClueText, OverflowPolicy, RoomName, SuspectName, TextError};

/// The mansion room tree.
pub mod room;
pub use room::{Direction, MansionMap, Room};

/// The ordered index of discovered clues.
pub mod clue_index;
pub use clue_index::ClueIndex;

/// The suspect hash table.
pub mod registry;
pub use registry::{SuspectRegistry, SuspectView};

mod config;
pub use config::{Config, ConfigError};
