use armada::{Orientation, Position, Ship, COORD_MAX};

#[test]
fn test_cells_in_anchor_order() {
    let ship = Ship::new(2, 1, Orientation::Horizontal, 3, 'T');
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Position::new(2, 1), Position::new(3, 1), Position::new(4, 1)]
    );

    let ship = Ship::new(0, 0, Orientation::Vertical, 4, 'T');
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3)
        ]
    );
}

#[test]
fn test_last_cell() {
    let ship = Ship::new(2, 1, Orientation::Horizontal, 3, 'T');
    assert_eq!(ship.last_cell(), Some(Position::new(4, 1)));

    let ship = Ship::new(COORD_MAX - 1, 0, Orientation::Horizontal, 2, 'T');
    assert_eq!(ship.last_cell(), Some(Position::new(COORD_MAX, 0)));

    let ship = Ship::new(COORD_MAX, 0, Orientation::Horizontal, 2, 'T');
    assert_eq!(ship.last_cell(), None);
}

#[test]
fn test_cells_stop_at_the_edge() {
    // The constructor never validates; iteration just runs out of space.
    let ship = Ship::new(COORD_MAX, 3, Orientation::Horizontal, 3, 'T');
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Position::new(COORD_MAX, 3)]);
}

#[test]
fn test_offset() {
    let p = Position::new(7, 9);
    assert_eq!(p.offset(Orientation::Horizontal, 2), Some(Position::new(9, 9)));
    assert_eq!(p.offset(Orientation::Vertical, 0), Some(p));
    assert_eq!(Position::new(COORD_MAX, 0).offset(Orientation::Horizontal, 1), None);
}
