//! The case on the desk: the mansion layout and the seeded suspect file.
//!
//! Everything here is literal data wired at startup.

use crate::domain::{
    ClueText, MansionMap, OverflowPolicy, Room, RoomName, SuspectName, SuspectRegistry, TextError,
};

/// The room every exploration starts from.
pub const ENTRY_ROOM: &str = "Hall de Entrada";

/// Clue fragments and the suspect each one points at, in seeding order.
pub const SEED_ASSOCIATIONS: [(&str, &str); 7] = [
    ("venenos", "Dr. Silva"),
    ("Faca ensanguentada", "Carlos"),
    ("Carta amorosa", "Carlos"),
    ("adulterado por Marina", "Marina"),
    ("Pegadas", "Dr. Silva"),
    ("Relogio parado", "Marina"),
    ("Pneu furado", "Carlos"),
];

/// The mansion and the suspect registry for one investigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// The room tree.
    pub mansion: MansionMap,
    /// Suspects pre-loaded with the seeded associations.
    pub registry: SuspectRegistry,
}

impl Case {
    /// Builds the case, applying `policy` to every literal name and clue.
    ///
    /// # Errors
    ///
    /// Returns a [`TextError`] if a literal is empty or, under
    /// [`OverflowPolicy::Reject`], too long.
    pub fn build(policy: OverflowPolicy) -> Result<Self, TextError> {
        Ok(Self {
            mansion: mansion(policy)?,
            registry: registry(policy)?,
        })
    }
}

/// Builds the eight-room mansion.
///
/// ```text
/// Hall de Entrada
/// ├── Biblioteca
/// │   ├── Sotao
/// │   └── Jardim
/// │       └── (right) Garagem
/// └── Cozinha
///     ├── Escritorio
///     └── Quarto Principal
/// ```
///
/// # Errors
///
/// Returns a [`TextError`] if a literal does not fit under `policy`.
pub fn mansion(policy: OverflowPolicy) -> Result<MansionMap, TextError> {
    let room = |name: &str, clue: Option<&str>| -> Result<Room, TextError> {
        let name = RoomName::with_policy(name, policy)?;
        let clue = clue
            .map(|text| ClueText::with_policy(text, policy))
            .transpose()?;
        Ok(Room::new(name, clue))
    };

    let mut hall = room(ENTRY_ROOM, None)?;
    let mut biblioteca = room("Biblioteca", Some("Livro com pagina marcada sobre venenos"))?;
    let mut cozinha = room("Cozinha", Some("Faca ensanguentada escondida"))?;
    let sotao = room("Sotao", Some("Carta amorosa assinada por Carlos"))?;
    let mut jardim = room("Jardim", Some("Pegadas levam ao portao dos fundos"))?;
    let escritorio = room("Escritorio", Some("Documento financeiro adulterado por Marina"))?;
    let quarto = room("Quarto Principal", Some("Relogio parado as 23h15"))?;
    let garagem = room("Garagem", Some("Pneu furado recentemente"))?;

    // Children are moved into their parents, so wire from the leaves up.
    jardim.connect(None, Some(garagem));
    cozinha.connect(Some(escritorio), Some(quarto));
    biblioteca.connect(Some(sotao), Some(jardim));
    hall.connect(Some(biblioteca), Some(cozinha));

    Ok(MansionMap::new(hall))
}

/// Builds the registry pre-loaded with [`SEED_ASSOCIATIONS`].
///
/// # Errors
///
/// Returns a [`TextError`] if a literal does not fit under `policy`.
pub fn registry(policy: OverflowPolicy) -> Result<SuspectRegistry, TextError> {
    let mut registry = SuspectRegistry::new();
    for (clue, suspect) in SEED_ASSOCIATIONS {
        registry.insert_association(
            ClueText::with_policy(clue, policy)?,
            SuspectName::with_policy(suspect, policy)?,
        );
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    #[test]
    fn mansion_has_eight_rooms() {
        let mansion = mansion(OverflowPolicy::Reject).unwrap();
        assert_eq!(mansion.room_count(), 8);
        assert_eq!(mansion.entry().name().as_str(), ENTRY_ROOM);
        assert!(!mansion.entry().has_clue());
    }

    #[test]
    fn jardim_only_leads_right() {
        let mansion = mansion(OverflowPolicy::Reject).unwrap();
        let jardim = mansion
            .entry()
            .child(Direction::Left)
            .and_then(|r| r.child(Direction::Right))
            .unwrap();

        assert_eq!(jardim.name().as_str(), "Jardim");
        assert!(jardim.left().is_none());
        assert_eq!(jardim.right().unwrap().name().as_str(), "Garagem");
    }

    #[test]
    fn leaves_are_the_four_dead_ends() {
        let mansion = mansion(OverflowPolicy::Reject).unwrap();
        let leaves: Vec<_> = mansion
            .walk()
            .filter(|(_, room)| room.is_leaf())
            .map(|(_, room)| room.name().to_string())
            .collect();

        assert_eq!(leaves, vec!["Sotao", "Garagem", "Escritorio", "Quarto Principal"]);
    }

    #[test]
    fn carlos_is_most_cited() {
        let registry = registry(OverflowPolicy::Reject).unwrap();
        let top = registry.most_cited().unwrap();

        assert_eq!(top.name().as_str(), "Carlos");
        assert_eq!(top.citations(), 3);

        let mut clues: Vec<_> = top.clues().map(ClueText::as_str).collect();
        clues.sort_unstable();
        assert_eq!(clues, vec!["Carta amorosa", "Faca ensanguentada", "Pneu furado"]);
    }

    #[test]
    fn seeded_registry_lists_by_bucket() {
        let registry = registry(OverflowPolicy::Reject).unwrap();
        let listed: Vec<_> = registry
            .iter()
            .map(|s| (s.bucket(), s.name().to_string(), s.citations()))
            .collect();

        assert_eq!(
            listed,
            vec![
                (0, "Marina".to_string(), 2),
                (1, "Dr. Silva".to_string(), 2),
                (2, "Carlos".to_string(), 3),
            ]
        );
        assert_eq!(registry.total_citations(), SEED_ASSOCIATIONS.len());
    }

    #[test]
    fn case_builds_under_either_policy() {
        let strict = Case::build(OverflowPolicy::Reject).unwrap();
        let lenient = Case::build(OverflowPolicy::Truncate).unwrap();
        assert_eq!(strict, lenient);
    }
}
