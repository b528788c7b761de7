//! Per-player board state: own fleet grid, knowledge of the opponent, ship health.

use log::debug;

use super::common::{GameError, ShotResult};
use super::config::{ship_length, FLEET, MAX_SHIP_LEN, NUM_SHIPS};
use super::grid::{Cell, Coord, Grid};
use super::ship::Placement;

const SWEEP_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Everything one player owns during a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    fleet: Grid,
    knowledge: Grid,
    health: [usize; NUM_SHIPS],
    ships_alive: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty grids and a fleet at full health.
    pub fn new() -> Self {
        Self {
            fleet: Grid::new(),
            knowledge: Grid::new(),
            health: FLEET,
            ships_alive: NUM_SHIPS,
        }
    }

    /// Own ships, padding and incoming shots.
    pub fn fleet(&self) -> &Grid {
        &self.fleet
    }

    /// What we have learned about the opponent's fleet.
    pub fn knowledge(&self) -> &Grid {
        &self.knowledge
    }

    /// Remaining health of the ship with the given 1-based id.
    pub fn health(&self, ship: u8) -> Result<usize, GameError> {
        ship_length(ship).ok_or(GameError::UnknownShip(ship))?;
        Ok(self.health[ship as usize - 1])
    }

    pub fn ships_alive(&self) -> usize {
        self.ships_alive
    }

    /// Whether every ship of this board's fleet has been sunk.
    pub fn defeated(&self) -> bool {
        self.ships_alive == 0
    }

    /// `true` if any cell the placement would cover is not `Empty`.
    ///
    /// Padding counts as occupied, so a ship can never touch another one.
    pub fn occupied(&self, placement: &Placement) -> bool {
        placement
            .cells()
            .any(|c| !matches!(self.fleet.get(c), Ok(Cell::Empty)))
    }

    /// Commit ship `id` at `placement` and pad every free neighbour with `Blocked`.
    pub fn place_ship(&mut self, id: u8, placement: &Placement) -> Result<(), GameError> {
        let length = ship_length(id).ok_or(GameError::UnknownShip(id))?;
        if length != placement.length || self.occupied(placement) {
            return Err(GameError::InvalidPlacement {
                x: placement.anchor.x,
                y: placement.anchor.y,
                length: placement.length,
                orientation: placement.orientation,
            });
        }
        for cell in placement.cells() {
            self.fleet.fill_empty_neighbours(cell, Cell::Blocked)?;
            self.fleet.set(cell, Cell::ShipSegment(id))?;
        }
        debug!(
            "placed ship {} (length {}) at {} {:?}",
            id, length, placement.anchor, placement.orientation
        );
        Ok(())
    }

    /// Resolve an opponent's shot against our fleet.
    ///
    /// Anything but a live ship segment is a miss. A hit segment becomes `Hit`,
    /// so shooting the same cell again cannot damage the ship twice.
    pub fn receive_shot(&mut self, at: Coord) -> Result<ShotResult, GameError> {
        let id = match self.fleet.get(at)? {
            Cell::ShipSegment(id) => id,
            Cell::Empty | Cell::Blocked => {
                self.fleet.set(at, Cell::Miss)?;
                debug!("incoming shot at {}: miss", at);
                return Ok(ShotResult::Miss);
            }
            _ => return Ok(ShotResult::Miss),
        };
        ship_length(id).ok_or(GameError::UnknownShip(id))?;
        self.fleet.set(at, Cell::Hit)?;
        let health = &mut self.health[id as usize - 1];
        *health = health.saturating_sub(1);
        let result = if *health > 0 {
            ShotResult::Hit
        } else {
            self.ships_alive -= 1;
            if self.ships_alive > 0 {
                ShotResult::Sank
            } else {
                ShotResult::GameOver
            }
        };
        debug!("incoming shot at {}: {:?} (ship {})", at, result, id);
        Ok(result)
    }

    /// Fail with `AlreadyShot` unless `at` is an unshot cell of the knowledge grid.
    pub fn check_target(&self, at: Coord) -> Result<(), GameError> {
        match self.knowledge.get(at)? {
            Cell::Empty => Ok(()),
            _ => Err(GameError::AlreadyShot { x: at.x, y: at.y }),
        }
    }

    /// Record the outcome of our own shot at `at` on the knowledge grid.
    ///
    /// On a sink, sweeps outward from `at` along both axes to recover the whole
    /// ship from earlier hits, marks it `SunkReveal` and its empty surroundings `Miss`.
    pub fn record_result(&mut self, at: Coord, result: ShotResult) -> Result<(), GameError> {
        self.check_target(at)?;
        match result {
            ShotResult::Miss => self.knowledge.set(at, Cell::Miss)?,
            ShotResult::Hit => self.knowledge.set(at, Cell::Hit)?,
            ShotResult::Sank | ShotResult::GameOver => {
                self.knowledge.set(at, Cell::Hit)?;
                self.reveal_sunk(at)?;
            }
        }
        Ok(())
    }

    fn reveal_sunk(&mut self, at: Coord) -> Result<(), GameError> {
        for (dx, dy) in SWEEP_DIRECTIONS {
            for step in 0..MAX_SHIP_LEN as i32 {
                let Some(cell) = at.offset(dx * step, dy * step) else {
                    break;
                };
                if !matches!(self.knowledge.get(cell)?, Cell::Hit | Cell::SunkReveal) {
                    break;
                }
                self.knowledge.set(cell, Cell::SunkReveal)?;
                self.knowledge.fill_empty_neighbours(cell, Cell::Miss)?;
            }
        }
        Ok(())
    }

    /// Number of knowledge cells never shot at.
    pub fn untargeted(&self) -> usize {
        self.knowledge.count(Cell::Empty)
    }
}
