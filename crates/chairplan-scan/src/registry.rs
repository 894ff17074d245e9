//! Room registry: room records keyed by id, with union-find merging.
//!
//! Every region the sweep discovers gets a fresh [`RoomId`]. When two
//! regions turn out to be the same physical room, one id is kept as the
//! canonical one and the others become aliases of it:
//!
//! ```text
//! create() ──→ R-1, R-2          (two open regions)
//! merge({R-1, R-2}) ──→ R-1      (R-2 now aliases R-1, its record is gone)
//! find(R-2) ──→ R-1
//! ```
//!
//! Only canonical ids own a [`RoomRecord`].

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chairplan_grammar::{ChairCounts, RoomId};

/// What is known about one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    /// The canonical id this record lives under.
    pub id: RoomId,
    /// Set at most once during a scan.
    pub name: Option<String>,
    /// Running furniture tally. Only ever grows.
    pub counts: ChairCounts,
}

impl RoomRecord {
    fn new(id: RoomId) -> Self {
        Self {
            id,
            name: None,
            counts: ChairCounts::default(),
        }
    }
}

/// Owns all room records of one scan.
#[derive(Debug)]
pub struct RoomRegistry {
    /// Records of canonical rooms, ordered by id.
    records: BTreeMap<RoomId, RoomRecord>,

    /// Merged-away id → the id it was merged into. Chains are shortened
    /// by [`find`](Self::find).
    aliases: HashMap<RoomId, RoomId>,

    next_id: u64,
}

impl RoomRegistry {
    /// Creates an empty registry. The first id handed out is `R-1`.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            aliases: HashMap::new(),
            next_id: 1,
        }
    }

    /// Starts a new, unnamed, empty room.
    pub fn create(&mut self) -> RoomId {
        let id = RoomId(self.next_id);
        self.next_id += 1;
        self.records.insert(id, RoomRecord::new(id));
        tracing::debug!(room_id = %id, "room created");
        id
    }

    /// Resolves an id to its canonical id, compressing the alias path.
    pub fn find(&mut self, id: RoomId) -> RoomId {
        let mut root = id;
        while let Some(&parent) = self.aliases.get(&root) {
            root = parent;
        }

        // Point every id on the path straight at the root.
        let mut cursor = id;
        while let Some(parent) = self.aliases.get(&cursor).copied() {
            if parent != root {
                self.aliases.insert(cursor, root);
            }
            cursor = parent;
        }
        root
    }

    /// Merges several canonical rooms into the one with the smallest id.
    ///
    /// `combine` is called once per absorbed record with the surviving
    /// record; it decides how names and counts are folded together. If it
    /// fails, the error is returned as is and the scan is expected to stop.
    ///
    /// Returns the surviving id. A set with one element is a no-op; an
    /// empty set starts a fresh room.
    pub fn merge<F, E>(&mut self, ids: &BTreeSet<RoomId>, mut combine: F) -> Result<RoomId, E>
    where
        F: FnMut(&mut RoomRecord, RoomRecord) -> Result<(), E>,
    {
        let mut ids = ids.iter().copied();
        let Some(canonical) = ids.next() else {
            // Nothing to merge into; hand out a fresh room.
            return Ok(self.create());
        };

        let absorbed: Vec<RoomRecord> = ids
            .filter_map(|id| {
                let record = self.records.remove(&id)?;
                self.aliases.insert(id, canonical);
                Some(record)
            })
            .collect();

        if let Some(survivor) = self.records.get_mut(&canonical) {
            for record in absorbed {
                tracing::debug!(
                    room_id = %canonical,
                    absorbed = %record.id,
                    "rooms merged"
                );
                combine(survivor, record)?;
            }
        }
        Ok(canonical)
    }

    /// The record of a canonical id.
    pub fn get(&self, id: RoomId) -> Option<&RoomRecord> {
        self.records.get(&id)
    }

    /// Mutable access to the record of a canonical id.
    pub fn get_mut(&mut self, id: RoomId) -> Option<&mut RoomRecord> {
        self.records.get_mut(&id)
    }

    /// Number of canonical rooms.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no room was ever created.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the registry, yielding canonical records by id.
    pub fn into_records(self) -> impl Iterator<Item = RoomRecord> {
        self.records.into_values()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}
