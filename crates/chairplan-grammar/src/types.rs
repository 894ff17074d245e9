//! Core data types shared by the scanner and the report codecs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// Identifier of a tracked region during a scan.
///
/// Ids are handed out in increasing order and never reused. After a merge
/// an id may become an alias of a smaller one; the registry resolves it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ChairType
// ---------------------------------------------------------------------------

/// The four furniture codes a plan may contain.
///
/// The declaration order is the stable order used in every count tuple
/// and report: `W`, `P`, `S`, `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChairType {
    /// `W`
    Wooden,
    /// `P`
    Plastic,
    /// `S`
    Sofa,
    /// `C`
    China,
}

impl ChairType {
    /// All chair types in report order.
    pub const ALL: [ChairType; 4] =
        [Self::Wooden, Self::Plastic, Self::Sofa, Self::China];

    /// Maps a plan character to its chair type.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'W' => Some(Self::Wooden),
            'P' => Some(Self::Plastic),
            'S' => Some(Self::Sofa),
            'C' => Some(Self::China),
            _ => None,
        }
    }

    /// The single-letter code drawn in plans.
    pub fn code(self) -> char {
        match self {
            Self::Wooden => 'W',
            Self::Plastic => 'P',
            Self::Sofa => 'S',
            Self::China => 'C',
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ChairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// ChairCounts
// ---------------------------------------------------------------------------

/// Furniture tally for one room, one slot per [`ChairType`].
///
/// Serialized as a plain array in `W, P, S, C` order, e.g. `[1, 0, 2, 0]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChairCounts([u32; 4]);

impl ChairCounts {
    /// Builds a tally from explicit `W, P, S, C` values.
    pub const fn new(wooden: u32, plastic: u32, sofa: u32, china: u32) -> Self {
        Self([wooden, plastic, sofa, china])
    }

    /// Returns the count for one chair type.
    pub fn get(&self, chair: ChairType) -> u32 {
        self.0[chair.index()]
    }

    /// Records one more chair of the given type.
    pub fn increment(&mut self, chair: ChairType) {
        self.0[chair.index()] += 1;
    }

    /// Adds every slot of `other` into `self`.
    pub fn add(&mut self, other: &ChairCounts) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            *mine += theirs;
        }
    }

    /// Total number of chairs of any type.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns `true` if no chair of any type was counted.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Iterates `(type, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (ChairType, u32)> + '_ {
        ChairType::ALL.into_iter().map(|chair| (chair, self.get(chair)))
    }

    /// The raw `W, P, S, C` tuple.
    pub fn as_array(&self) -> [u32; 4] {
        self.0
    }
}

impl fmt::Display for ChairCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (chair, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{chair}: {count}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// The result of a successful scan: room name → furniture counts.
///
/// Rooms are kept sorted by name so reports and comparisons are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    rooms: BTreeMap<String, ChairCounts>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a room, returning the previous counts if the name was
    /// already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        counts: ChairCounts,
    ) -> Option<ChairCounts> {
        self.rooms.insert(name.into(), counts)
    }

    /// Looks up a room by name.
    pub fn get(&self, name: &str) -> Option<&ChairCounts> {
        self.rooms.get(name)
    }

    /// Returns `true` if a room with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the plan had no named rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates rooms in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChairCounts)> {
        self.rooms.iter().map(|(name, counts)| (name.as_str(), counts))
    }

    /// Room names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Sum of all rooms' counts.
    pub fn total(&self) -> ChairCounts {
        let mut total = ChairCounts::default();
        for counts in self.rooms.values() {
            total.add(counts);
        }
        total
    }
}

impl FromIterator<(String, ChairCounts)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (String, ChairCounts)>>(iter: I) -> Self {
        Self {
            rooms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_display_and_order() {
        assert_eq!(RoomId(7).to_string(), "R-7");
        assert!(RoomId(1) < RoomId(2));
    }

    #[test]
    fn test_chair_type_codes_match_order() {
        let codes: String = ChairType::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, "WPSC");
        for chair in ChairType::ALL {
            assert_eq!(ChairType::from_code(chair.code()), Some(chair));
        }
        assert_eq!(ChairType::from_code('w'), None);
    }

    #[test]
    fn test_chair_counts_increment_and_add() {
        let mut a = ChairCounts::default();
        assert!(a.is_empty());
        a.increment(ChairType::Sofa);
        a.increment(ChairType::Sofa);
        a.increment(ChairType::Wooden);

        let mut b = ChairCounts::new(1, 2, 0, 3);
        b.add(&a);

        assert_eq!(b.as_array(), [2, 2, 2, 3]);
        assert_eq!(b.total(), 9);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_chair_counts_display() {
        let counts = ChairCounts::new(1, 0, 4, 2);
        assert_eq!(counts.to_string(), "W: 1, P: 0, S: 4, C: 2");
    }

    #[test]
    fn test_inventory_sorted_and_totalled() {
        let mut inv = Inventory::new();
        inv.insert("office", ChairCounts::new(0, 1, 0, 0));
        inv.insert("balcony", ChairCounts::new(2, 0, 0, 1));

        let names: Vec<&str> = inv.names().collect();
        assert_eq!(names, vec!["balcony", "office"]);
        assert_eq!(inv.total(), ChairCounts::new(2, 1, 0, 1));
        assert_eq!(inv.len(), 2);
        assert!(inv.contains("office"));
        assert!(inv.get("kitchen").is_none());
    }

    #[test]
    fn test_inventory_insert_returns_previous() {
        let mut inv = Inventory::new();
        assert!(inv.insert("hall", ChairCounts::default()).is_none());
        let prev = inv.insert("hall", ChairCounts::new(1, 0, 0, 0));
        assert_eq!(prev, Some(ChairCounts::default()));
    }
}
