use log::warn;

use crate::core::{fleet_order, Board, Coord, GameError, PlacementAction, PlacementCursor};

use super::{InputSource, Renderer};

/// Place every ship from the input source, re-prompting on refused confirms.
pub fn arrange_fleet(
    board: &mut Board,
    input: &mut dyn InputSource,
    view: &mut dyn Renderer,
) -> Result<(), GameError> {
    for (id, length) in fleet_order() {
        let mut cursor = PlacementCursor::new(length);
        loop {
            view.draw_fleet(board.fleet(), Some(&cursor.placement()));
            match input.next_placement_action(id, &cursor)? {
                PlacementAction::Confirm => match board.place_ship(id, &cursor.placement()) {
                    Ok(()) => break,
                    Err(err @ GameError::InvalidPlacement { .. }) => {
                        warn!("ship {} rejected: {}", id, err);
                        input.rejected(&err);
                    }
                    Err(err) => return Err(err),
                },
                action => cursor.apply(action),
            }
        }
    }
    view.draw_fleet(board.fleet(), None);
    Ok(())
}

/// Ask for coordinates until one names an unshot cell on the grid.
pub fn choose_shot(
    board: &Board,
    input: &mut dyn InputSource,
    view: &mut dyn Renderer,
) -> Result<Coord, GameError> {
    view.draw_knowledge(board.knowledge());
    loop {
        let at = input.next_shot_coordinate(board.knowledge())?;
        match board.check_target(at) {
            Ok(()) => return Ok(at),
            Err(err @ (GameError::AlreadyShot { .. } | GameError::OutOfRange { .. })) => {
                warn!("shot at ({}, {}) rejected: {}", at.x, at.y, err);
                input.rejected(&err);
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Direction, ShotResult};
    use crate::player::{NoRender, ReplayInput};

    use PlacementAction::{Confirm, Move, Rotate};

    /// Five ships down column 0 and five down column 6, one every other row.
    fn stacked_fleet() -> Vec<PlacementAction> {
        let mut actions = Vec::new();
        for i in 0..5 {
            // cursor starts at (3, 3); go to the top-left corner, then down 2 * i rows
            actions.extend([Move(Direction::Up); 3]);
            actions.extend([Move(Direction::Left); 3]);
            actions.extend(std::iter::repeat(Move(Direction::Down)).take(2 * i));
            actions.push(Confirm);
        }
        for i in 0..5 {
            // remaining ships in column 6, every other row
            actions.extend([Move(Direction::Up); 3]);
            actions.extend([Move(Direction::Right); 3]);
            actions.extend(std::iter::repeat(Move(Direction::Down)).take(2 * i));
            actions.push(Confirm);
        }
        actions
    }

    #[test]
    fn places_whole_fleet_from_actions() {
        let mut board = Board::new();
        let mut input = ReplayInput::new(stacked_fleet(), vec![]);
        arrange_fleet(&mut board, &mut input, &mut NoRender).unwrap();
        assert_eq!(board.fleet().get(Coord::new(0, 0)).unwrap(), Cell::ShipSegment(1));
        assert_eq!(board.fleet().get(Coord::new(3, 0)).unwrap(), Cell::ShipSegment(1));
        assert_eq!(board.fleet().get(Coord::new(0, 8)).unwrap(), Cell::ShipSegment(5));
        assert_eq!(board.fleet().get(Coord::new(6, 0)).unwrap(), Cell::ShipSegment(6));
        assert_eq!(board.fleet().get(Coord::new(6, 8)).unwrap(), Cell::ShipSegment(10));
        assert!(input.rejections().is_empty());
    }

    #[test]
    fn confirm_on_occupied_cells_reprompts() {
        let mut board = Board::new();
        let mut actions = vec![Confirm, Rotate, Confirm];
        // ship 2 overlaps ship 1 twice, then moves clear
        actions.extend([Confirm, Move(Direction::Down), Move(Direction::Down), Confirm]);
        let mut input = ReplayInput::new(actions, vec![]);
        assert_eq!(
            arrange_fleet(&mut board, &mut input, &mut NoRender),
            Err(GameError::InputClosed)
        );
        assert_eq!(board.fleet().get(Coord::new(3, 3)).unwrap(), Cell::ShipSegment(1));
        assert_eq!(board.fleet().get(Coord::new(6, 3)).unwrap(), Cell::ShipSegment(1));
        assert_eq!(board.fleet().get(Coord::new(3, 5)).unwrap(), Cell::ShipSegment(2));
        assert_eq!(board.fleet().get(Coord::new(3, 7)).unwrap(), Cell::ShipSegment(2));
        assert_eq!(input.rejections().len(), 2);
        assert!(matches!(
            input.rejections()[0],
            GameError::InvalidPlacement { x: 3, y: 3, length: 3, .. }
        ));
    }

    #[test]
    fn shot_on_known_cell_is_asked_again() {
        let mut board = Board::new();
        board
            .record_result(Coord::new(2, 2), ShotResult::Miss)
            .unwrap();
        let mut input = ReplayInput::new(
            vec![],
            vec![Coord::new(2, 2), Coord::new(12, 0), Coord::new(2, 3)],
        );
        let at = choose_shot(&board, &mut input, &mut NoRender).unwrap();
        assert_eq!(at, Coord::new(2, 3));
        assert_eq!(
            input.rejections(),
            &[
                GameError::AlreadyShot { x: 2, y: 2 },
                GameError::OutOfRange { x: 12, y: 0 }
            ]
        );
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let board = Board::new();
        let mut input = ReplayInput::new(vec![], vec![]);
        assert_eq!(
            choose_shot(&board, &mut input, &mut NoRender),
            Err(GameError::InputClosed)
        );
    }
}
