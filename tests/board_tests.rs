use seabattle::{Board, Cell, Coord, GameError, Orientation, Placement, ShotResult, NUM_SHIPS};

fn at(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

/// Fire at `target` from `attacker` against `defender`, updating both boards.
fn fire(attacker: &mut Board, defender: &mut Board, target: Coord) -> ShotResult {
    attacker.check_target(target).unwrap();
    let res = defender.receive_shot(target).unwrap();
    attacker.record_result(target, res).unwrap();
    res
}

#[test]
fn single_cell_ship_reveals_its_ring() {
    let mut defender = Board::new();
    let mut attacker = Board::new();
    let ship = Placement::new(at(5, 5), 1, Orientation::Horizontal).unwrap();
    defender.place_ship(7, &ship).unwrap();

    assert_eq!(fire(&mut attacker, &mut defender, at(5, 5)), ShotResult::Sank);
    assert_eq!(defender.health(7).unwrap(), 0);
    assert_eq!(defender.ships_alive(), NUM_SHIPS - 1);

    let knowledge = attacker.knowledge();
    assert_eq!(knowledge.get(at(5, 5)).unwrap(), Cell::SunkReveal);
    for n in at(5, 5).neighbours() {
        assert_eq!(knowledge.get(n).unwrap(), Cell::Miss, "neighbour {}", n);
    }
    assert_eq!(knowledge.count(Cell::Miss), 8);
    assert_eq!(attacker.untargeted(), 100 - 9);
}

#[test]
fn four_cell_ship_sinks_on_last_segment() {
    let mut defender = Board::new();
    let mut attacker = Board::new();
    let ship = Placement::new(at(2, 0), 4, Orientation::Horizontal).unwrap();
    defender.place_ship(1, &ship).unwrap();

    for x in 2..5 {
        assert_eq!(fire(&mut attacker, &mut defender, at(x, 0)), ShotResult::Hit);
        assert_eq!(attacker.knowledge().get(at(x, 0)).unwrap(), Cell::Hit);
    }
    assert_eq!(defender.health(1).unwrap(), 1);
    assert_eq!(fire(&mut attacker, &mut defender, at(5, 0)), ShotResult::Sank);

    let knowledge = attacker.knowledge();
    for x in 2..6 {
        assert_eq!(knowledge.get(at(x, 0)).unwrap(), Cell::SunkReveal);
    }
    assert_eq!(knowledge.get(at(1, 0)).unwrap(), Cell::Miss);
    assert_eq!(knowledge.get(at(6, 0)).unwrap(), Cell::Miss);
    for x in 1..7 {
        assert_eq!(knowledge.get(at(x, 1)).unwrap(), Cell::Miss);
    }
    assert_eq!(knowledge.count(Cell::Miss), 8);
    assert_eq!(knowledge.get(at(0, 0)).unwrap(), Cell::Empty);
    assert_eq!(knowledge.get(at(7, 1)).unwrap(), Cell::Empty);
}

#[test]
fn sink_from_the_middle_reveals_both_ends() {
    let mut defender = Board::new();
    let mut attacker = Board::new();
    let ship = Placement::new(at(4, 3), 4, Orientation::Vertical).unwrap();
    defender.place_ship(1, &ship).unwrap();

    for y in [3, 6, 4] {
        assert_eq!(fire(&mut attacker, &mut defender, at(4, y)), ShotResult::Hit);
    }
    assert_eq!(fire(&mut attacker, &mut defender, at(4, 5)), ShotResult::Sank);
    for y in 3..7 {
        assert_eq!(attacker.knowledge().get(at(4, y)).unwrap(), Cell::SunkReveal);
    }
    // 3 x 6 box around the ship minus the ship itself
    assert_eq!(attacker.knowledge().count(Cell::Miss), 18 - 4);
}

#[test]
fn repeated_target_is_rejected() {
    let mut defender = Board::new();
    let mut attacker = Board::new();
    fire(&mut attacker, &mut defender, at(0, 0));
    assert_eq!(
        attacker.check_target(at(0, 0)),
        Err(GameError::AlreadyShot { x: 0, y: 0 })
    );
    assert_eq!(
        attacker.check_target(at(0, 10)),
        Err(GameError::OutOfRange { x: 0, y: 10 })
    );
}

#[test]
fn out_of_range_shot_does_not_mutate() {
    let mut defender = Board::new();
    let before = defender.clone();
    assert_eq!(
        defender.receive_shot(at(10, 10)),
        Err(GameError::OutOfRange { x: 10, y: 10 })
    );
    assert_eq!(defender, before);
}

#[test]
fn last_ship_ends_the_game() {
    let mut defender = Board::new();
    let mut attacker = Board::new();
    // a full fleet, no two ships touching
    let layout = [
        (1, Placement::new(at(0, 0), 4, Orientation::Horizontal).unwrap()),
        (2, Placement::new(at(5, 0), 3, Orientation::Horizontal).unwrap()),
        (3, Placement::new(at(0, 2), 3, Orientation::Horizontal).unwrap()),
        (4, Placement::new(at(4, 2), 2, Orientation::Horizontal).unwrap()),
        (5, Placement::new(at(7, 2), 2, Orientation::Horizontal).unwrap()),
        (6, Placement::new(at(0, 4), 2, Orientation::Horizontal).unwrap()),
        (7, Placement::new(at(3, 4), 1, Orientation::Horizontal).unwrap()),
        (8, Placement::new(at(5, 4), 1, Orientation::Horizontal).unwrap()),
        (9, Placement::new(at(7, 4), 1, Orientation::Horizontal).unwrap()),
        (10, Placement::new(at(9, 4), 1, Orientation::Horizontal).unwrap()),
    ];
    for (id, p) in &layout {
        defender.place_ship(*id, p).unwrap();
    }

    let mut results = Vec::new();
    for (_, p) in &layout {
        for cell in p.cells() {
            results.push(fire(&mut attacker, &mut defender, cell));
        }
    }
    let sinks = results.iter().filter(|r| r.is_sink()).count();
    assert_eq!(sinks, NUM_SHIPS);
    assert_eq!(results.last(), Some(&ShotResult::GameOver));
    assert_eq!(
        results.iter().filter(|&&r| r == ShotResult::GameOver).count(),
        1
    );
    assert!(defender.defeated());

    // a defeated fleet only reports misses
    assert_eq!(defender.receive_shot(at(9, 9)).unwrap(), ShotResult::Miss);
    assert_eq!(defender.ships_alive(), 0);
}
