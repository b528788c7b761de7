//! Players and the collaborators they talk to.
//!
//! A [`Player`] owns its [`Board`] and is either driven by a human through an
//! [`InputSource`] and [`Renderer`], or scripted with its own seeded RNG:
//! - Interactive: move/rotate/confirm placement, chosen shot coordinates
//! - Scripted: random placement, uniform random targeting over unshot cells

use alloc::boxed::Box;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{
    Board, Coord, GameError, Grid, Outcome, Placement, PlacementAction, PlacementCursor,
    ShotResult,
};

pub mod interactive;
pub mod replay;
pub mod scripted;

pub use replay::ReplayInput;

/// Source of human decisions. Calls block until the human has decided.
pub trait InputSource {
    /// Next move, rotate or confirm for ship `ship` at its provisional position.
    fn next_placement_action(
        &mut self,
        ship: u8,
        cursor: &PlacementCursor,
    ) -> Result<PlacementAction, GameError>;

    /// Next cell to shoot at, given what is known about the opponent.
    fn next_shot_coordinate(&mut self, knowledge: &Grid) -> Result<Coord, GameError>;

    /// The last placement confirm or shot was refused; the source is asked again.
    fn rejected(&mut self, _err: &GameError) {}
}

/// Presentation hook. Called after every state change; nothing is read back.
pub trait Renderer {
    /// Own fleet, optionally with the ship currently being placed.
    fn draw_fleet(&mut self, _fleet: &Grid, _pending: Option<&Placement>) {}

    /// Knowledge of the opponent's fleet.
    fn draw_knowledge(&mut self, _knowledge: &Grid) {}

    /// A shot was resolved; `incoming` is `true` when the opponent fired it.
    fn shot_resolved(&mut self, _at: Coord, _result: ShotResult, _incoming: bool) {}

    /// The match is over.
    fn show_outcome(&mut self, _outcome: Outcome) {}
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRender;

impl Renderer for NoRender {}

/// How a player makes its decisions.
pub enum PlayerKind {
    Interactive {
        input: Box<dyn InputSource>,
        view: Box<dyn Renderer>,
    },
    Scripted {
        rng: SmallRng,
    },
}

/// One side of a match.
pub struct Player {
    board: Board,
    kind: PlayerKind,
}

impl Player {
    pub fn interactive(input: Box<dyn InputSource>, view: Box<dyn Renderer>) -> Self {
        Self {
            board: Board::new(),
            kind: PlayerKind::Interactive { input, view },
        }
    }

    pub fn scripted(rng: SmallRng) -> Self {
        Self {
            board: Board::new(),
            kind: PlayerKind::Scripted { rng },
        }
    }

    /// Scripted player with a reproducible RNG.
    pub fn scripted_from_seed(seed: u64) -> Self {
        Self::scripted(SmallRng::seed_from_u64(seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, PlayerKind::Interactive { .. })
    }

    /// Clear both grids and place the whole fleet.
    pub fn arrange_fleet(&mut self) -> Result<(), GameError> {
        self.board = Board::new();
        match &mut self.kind {
            PlayerKind::Interactive { input, view } => {
                interactive::arrange_fleet(&mut self.board, input.as_mut(), view.as_mut())
            }
            PlayerKind::Scripted { rng } => scripted::arrange_fleet(&mut self.board, rng),
        }
    }

    /// Pick the next cell to shoot at. The result is always an unshot, in-range cell.
    pub fn choose_shot(&mut self) -> Result<Coord, GameError> {
        match &mut self.kind {
            PlayerKind::Interactive { input, view } => {
                interactive::choose_shot(&self.board, input.as_mut(), view.as_mut())
            }
            PlayerKind::Scripted { rng } => scripted::choose_shot(&self.board, rng),
        }
    }

    /// Resolve the opponent's shot against our fleet.
    pub fn receive_shot(&mut self, at: Coord) -> Result<ShotResult, GameError> {
        let result = self.board.receive_shot(at)?;
        if let PlayerKind::Interactive { view, .. } = &mut self.kind {
            view.draw_fleet(self.board.fleet(), None);
            view.shot_resolved(at, result, true);
        }
        Ok(result)
    }

    /// Learn the result of our own shot.
    pub fn receive_result(&mut self, at: Coord, result: ShotResult) -> Result<(), GameError> {
        self.board.record_result(at, result)?;
        if let PlayerKind::Interactive { view, .. } = &mut self.kind {
            view.draw_knowledge(self.board.knowledge());
            view.shot_resolved(at, result, false);
        }
        Ok(())
    }

    /// Tell the player how the match ended.
    pub fn notify_outcome(&mut self, outcome: Outcome) {
        if let PlayerKind::Interactive { view, .. } = &mut self.kind {
            view.show_outcome(outcome);
        }
    }
}
