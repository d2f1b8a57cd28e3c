//! A fixed-size chained hash table keyed by cell coordinate.
//!
//! The table is `no_std` friendly: buckets are allocated once at
//! construction and never resized. Each bucket holds an ordered sequence of
//! cell records, oldest first, standing in for a collision chain. Lookups
//! always compare full coordinates; the bucket index is only a starting
//! point, never an identity.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::trace;

use crate::config::HASH_MULTIPLIER;
use crate::ship::{Position, Ship};

/// One occupied cell: a coordinate bound to a copy of the occupying ship.
///
/// Every cell of a ship carries its own full copy of the ship's data, so a
/// record can be resolved to the whole vessel without consulting any other
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRecord {
    pub position: Position,
    pub ship: Ship,
}

/// Chained hash table from coordinates to cell records.
///
/// The table tracks cells only; it knows nothing about ship counts. Callers
/// are responsible for keeping at most one record per coordinate (see
/// [`Field`](crate::Field), which destroys an occupant before rebinding its
/// cell).
pub struct CellTable {
    buckets: Vec<Vec<CellRecord>>,
    len: usize,
}

impl CellTable {
    /// Create a table with `count` empty buckets.
    ///
    /// # Panics
    /// Panics if `count` is zero.
    pub fn with_buckets(count: usize) -> Self {
        assert!(count > 0, "bucket count must be nonzero");
        CellTable {
            buckets: (0..count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Number of buckets. Fixed for the lifetime of the table.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket selector: `(x + y) * 97 mod bucket_count`, computed in `u64`
    /// so the sum cannot overflow. Positions on one anti-diagonal (constant
    /// `x + y`) always share a bucket; the chains absorb that clustering.
    pub fn bucket_index(&self, position: Position) -> usize {
        let sum = u64::from(position.x) + u64::from(position.y);
        ((sum * HASH_MULTIPLIER) % self.buckets.len() as u64) as usize
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of records chained in bucket `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`bucket_count`](Self::bucket_count).
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    /// Append a record binding `position` to a copy of `ship`.
    pub fn insert(&mut self, position: Position, ship: Ship) {
        let index = self.bucket_index(position);
        self.buckets[index].push(CellRecord { position, ship });
        self.len += 1;
        trace!("cell {} bound to ship '{}'", position, ship.name());
    }

    /// Find the record at `position`, scanning its chain by coordinate.
    pub fn find(&self, position: Position) -> Option<&CellRecord> {
        self.buckets[self.bucket_index(position)]
            .iter()
            .find(|record| record.position == position)
    }

    /// Remove the record at `position`, keeping the rest of its chain in
    /// order. Returns whether a record was found and removed.
    pub fn remove(&mut self, position: Position) -> bool {
        let index = self.bucket_index(position);
        let chain = &mut self.buckets[index];
        match chain.iter().position(|record| record.position == position) {
            Some(at) => {
                chain.remove(at);
                self.len -= 1;
                trace!("cell {} cleared", position);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for CellTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellTable {{ buckets: {}, records: {} }}",
            self.buckets.len(),
            self.len,
        )
    }
}
