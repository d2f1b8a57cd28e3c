use armada::{CellTable, Orientation, Position, Ship};

fn marker(name: char) -> Ship {
    Ship::new(0, 0, Orientation::Horizontal, 1, name)
}

#[test]
fn test_empty_table() {
    let table = CellTable::with_buckets(16);
    assert_eq!(table.bucket_count(), 16);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert!(table.find(Position::new(3, 4)).is_none());
}

#[test]
fn test_insert_find_remove() {
    let mut table = CellTable::with_buckets(16);
    let p = Position::new(3, 4);
    table.insert(p, marker('a'));
    assert_eq!(table.len(), 1);
    assert_eq!(table.find(p).unwrap().ship.name(), 'a');

    assert!(table.remove(p));
    assert!(table.is_empty());
    assert!(!table.remove(p));
}

// Positions with equal x + y always share a bucket, whatever the bucket
// count: the selector hashes the sum, so anti-diagonals cluster into one
// chain. That is an accepted property of the hash, and lookups stay correct
// because chains are scanned by full coordinate, not bucket.
#[test]
fn test_anti_diagonal_positions_share_a_bucket() {
    let mut table = CellTable::with_buckets(64);
    let diagonal = [Position::new(0, 5), Position::new(1, 4), Position::new(5, 0)];
    let index = table.bucket_index(diagonal[0]);
    for p in diagonal {
        assert_eq!(table.bucket_index(p), index);
    }

    for (p, name) in diagonal.into_iter().zip(['a', 'b', 'c']) {
        table.insert(p, marker(name));
    }
    assert_eq!(table.bucket_len(index), 3);
    assert_eq!(table.find(diagonal[0]).unwrap().ship.name(), 'a');
    assert_eq!(table.find(diagonal[1]).unwrap().ship.name(), 'b');
    assert_eq!(table.find(diagonal[2]).unwrap().ship.name(), 'c');
}

#[test]
fn test_remove_relinks_the_chain() {
    let mut table = CellTable::with_buckets(64);
    let chain = [Position::new(0, 9), Position::new(4, 5), Position::new(9, 0)];
    for (p, name) in chain.into_iter().zip(['a', 'b', 'c']) {
        table.insert(p, marker(name));
    }

    assert!(table.remove(chain[1]));
    assert_eq!(table.len(), 2);
    assert_eq!(table.bucket_len(table.bucket_index(chain[0])), 2);
    assert_eq!(table.find(chain[0]).unwrap().ship.name(), 'a');
    assert!(table.find(chain[1]).is_none());
    assert_eq!(table.find(chain[2]).unwrap().ship.name(), 'c');
}

#[test]
fn test_single_bucket_still_resolves_by_coordinate() {
    let mut table = CellTable::with_buckets(1);
    let ps = [Position::new(1, 2), Position::new(7, 7), Position::new(40, 2)];
    for (p, name) in ps.into_iter().zip(['x', 'y', 'z']) {
        table.insert(p, marker(name));
    }
    assert_eq!(table.bucket_len(0), 3);
    for (p, name) in ps.into_iter().zip(['x', 'y', 'z']) {
        assert_eq!(table.find(p).unwrap().ship.name(), name);
    }
}
