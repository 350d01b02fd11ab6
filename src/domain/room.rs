//! The mansion: a fixed binary tree of rooms.
//!
//! Each [`Room`] owns its children outright. The tree is wired once at
//! startup and only ever read afterwards.

use std::fmt;

use crate::domain::text::{ClueText, RoomName};

/// A way out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The left-hand door ("esquerda").
    Left,
    /// The right-hand door ("direita").
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A room in the mansion, optionally holding a single clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: RoomName,
    clue: Option<ClueText>,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl Room {
    /// Creates a leaf room.
    #[must_use]
    pub const fn new(name: RoomName, clue: Option<ClueText>) -> Self {
        Self {
            name,
            clue,
            left: None,
            right: None,
        }
    }

    /// Sets both children of this room, replacing any existing ones.
    pub fn connect(&mut self, left: Option<Self>, right: Option<Self>) {
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
    }

    /// Builder form of [`Room::connect`].
    #[must_use]
    pub fn with_children(mut self, left: Option<Self>, right: Option<Self>) -> Self {
        self.connect(left, right);
        self
    }

    /// The room's name.
    #[must_use]
    pub const fn name(&self) -> &RoomName {
        &self.name
    }

    /// The clue hidden in this room, if any.
    #[must_use]
    pub const fn clue(&self) -> Option<&ClueText> {
        self.clue.as_ref()
    }

    /// Returns `true` if the room has a clue.
    #[must_use]
    pub const fn has_clue(&self) -> bool {
        self.clue.is_some()
    }

    /// The left child.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The child reached by going in `direction`.
    #[must_use]
    pub fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Returns `true` if there is no way onward from this room.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Hangs `left` and `right` under `parent`. Without a parent nothing is
/// connected and the children are dropped.
pub fn connect_rooms(parent: Option<&mut Room>, left: Option<Room>, right: Option<Room>) {
    if let Some(parent) = parent {
        parent.connect(left, right);
    }
}

/// Releases a room tree children-first and returns the number of rooms
/// released. An absent root releases nothing.
#[must_use]
pub fn teardown(tree: Option<Box<Room>>) -> usize {
    let Some(mut room) = tree else {
        return 0;
    };
    let released = teardown(room.left.take()) + teardown(room.right.take());
    drop(room);
    released + 1
}

/// The mansion map with its designated entry room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MansionMap {
    entry: Room,
}

impl MansionMap {
    /// Creates a map whose exploration always starts at `entry`.
    #[must_use]
    pub const fn new(entry: Room) -> Self {
        Self { entry }
    }

    /// The room every exploration starts from.
    #[must_use]
    pub const fn entry(&self) -> &Room {
        &self.entry
    }

    /// Visits every room in pre-order, yielding each with its depth below the
    /// entry room.
    pub fn walk(&self) -> impl Iterator<Item = (usize, &Room)> + '_ {
        let mut stack = vec![(0, &self.entry)];
        std::iter::from_fn(move || {
            let (depth, room) = stack.pop()?;
            // Right first so the left subtree comes out first.
            stack.extend(room.right().map(|r| (depth + 1, r)));
            stack.extend(room.left().map(|r| (depth + 1, r)));
            Some((depth, room))
        })
    }

    /// The number of rooms in the mansion.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.walk().count()
    }

    /// Releases every room and returns how many there were.
    #[must_use]
    pub fn teardown(self) -> usize {
        teardown(Some(Box::new(self.entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, clue: Option<&str>) -> Room {
        Room::new(
            RoomName::new(name).unwrap(),
            clue.map(|c| ClueText::new(c).unwrap()),
        )
    }

    fn small_mansion() -> MansionMap {
        let hall = room("Hall", None).with_children(
            Some(room("Library", Some("A marked page")).with_children(
                None,
                Some(room("Garage", Some("A flat tyre"))),
            )),
            Some(room("Kitchen", None)),
        );
        MansionMap::new(hall)
    }

    #[test]
    fn new_room_is_a_leaf() {
        let room = room("Attic", Some("A love letter"));
        assert!(room.is_leaf());
        assert!(room.has_clue());
        assert_eq!(room.clue().unwrap().as_str(), "A love letter");
    }

    #[test]
    fn connect_replaces_children() {
        let mut hall = room("Hall", None);
        hall.connect(Some(room("A", None)), Some(room("B", None)));
        hall.connect(None, Some(room("C", None)));

        assert!(hall.left().is_none());
        assert_eq!(hall.right().unwrap().name().as_str(), "C");
        assert!(!hall.is_leaf());
    }

    #[test]
    fn connect_rooms_wires_a_present_parent() {
        let mut hall = room("Hall", None);
        connect_rooms(Some(&mut hall), Some(room("A", None)), None);

        assert_eq!(hall.left().unwrap().name().as_str(), "A");
        assert!(hall.right().is_none());
    }

    #[test]
    fn connect_rooms_without_parent_is_a_no_op() {
        let mut missing: Option<Room> = None;
        connect_rooms(missing.as_mut(), Some(room("A", None)), Some(room("B", None)));
        assert!(missing.is_none());
    }

    #[test]
    fn child_follows_direction() {
        let map = small_mansion();
        let entry = map.entry();
        assert_eq!(entry.child(Direction::Left).unwrap().name().as_str(), "Library");
        assert_eq!(entry.child(Direction::Right).unwrap().name().as_str(), "Kitchen");

        let library = entry.left().unwrap();
        assert!(library.child(Direction::Left).is_none());
    }

    #[test]
    fn walk_is_pre_order_with_depth() {
        let map = small_mansion();
        let visited: Vec<_> = map
            .walk()
            .map(|(depth, room)| (depth, room.name().to_string()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, "Hall".to_string()),
                (1, "Library".to_string()),
                (2, "Garage".to_string()),
                (1, "Kitchen".to_string()),
            ]
        );
    }

    #[test]
    fn teardown_releases_every_room() {
        let map = small_mansion();
        assert_eq!(map.room_count(), 4);
        assert_eq!(map.teardown(), 4);
    }

    #[test]
    fn teardown_of_absent_root_is_a_no_op() {
        assert_eq!(teardown(None), 0);
    }
}
