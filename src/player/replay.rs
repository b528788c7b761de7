use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::core::{Coord, GameError, Grid, PlacementAction, PlacementCursor};

use super::InputSource;

/// Input source that plays back a fixed script of actions and shots.
///
/// Runs out with `GameError::InputClosed`. Every rejection is kept for inspection.
#[derive(Debug, Default, Clone)]
pub struct ReplayInput {
    actions: VecDeque<PlacementAction>,
    shots: VecDeque<Coord>,
    rejections: Vec<GameError>,
}

impl ReplayInput {
    pub fn new(actions: Vec<PlacementAction>, shots: Vec<Coord>) -> Self {
        Self {
            actions: actions.into(),
            shots: shots.into(),
            rejections: Vec::new(),
        }
    }

    /// Queue more shots behind the ones already scripted.
    pub fn push_shots(&mut self, shots: impl IntoIterator<Item = Coord>) {
        self.shots.extend(shots);
    }

    pub fn rejections(&self) -> &[GameError] {
        &self.rejections
    }
}

impl InputSource for ReplayInput {
    fn next_placement_action(
        &mut self,
        _ship: u8,
        _cursor: &PlacementCursor,
    ) -> Result<PlacementAction, GameError> {
        self.actions.pop_front().ok_or(GameError::InputClosed)
    }

    fn next_shot_coordinate(&mut self, _knowledge: &Grid) -> Result<Coord, GameError> {
        self.shots.pop_front().ok_or(GameError::InputClosed)
    }

    fn rejected(&mut self, err: &GameError) {
        self.rejections.push(*err);
    }
}
