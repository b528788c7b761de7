//! Turn controller: alternates shots between two players until one fleet is gone.

use alloc::vec::Vec;

use log::{debug, info};

use crate::core::{Coord, GameError, Outcome, ShotResult};
use crate::player::Player;

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub attacker: Side,
    pub at: Coord,
    pub result: ShotResult,
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub winner: Side,
    /// Shots fired by side one and side two.
    pub shots: [usize; 2],
    pub log: Vec<ShotRecord>,
}

/// A match between two players. Side one shoots first.
pub struct Match {
    players: [Player; 2],
    turn: Side,
    shots: [usize; 2],
    log: Vec<ShotRecord>,
    winner: Option<Side>,
}

impl Match {
    pub fn new(one: Player, two: Player) -> Self {
        Self {
            players: [one, two],
            turn: Side::One,
            shots: [0, 0],
            log: Vec::new(),
            winner: None,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn log(&self) -> &[ShotRecord] {
        &self.log
    }

    /// Both players place their fleets, side one first.
    ///
    /// Starts the match over: side one to move, no shots, no winner.
    pub fn arrange(&mut self) -> Result<(), GameError> {
        self.turn = Side::One;
        self.shots = [0, 0];
        self.log.clear();
        self.winner = None;
        for player in self.players.iter_mut() {
            player.arrange_fleet()?;
        }
        Ok(())
    }

    /// Play exactly one shot.
    ///
    /// A miss passes the turn; a hit or sink lets the attacker shoot again.
    /// On `GameOver` both players are told the outcome and no further shots are allowed.
    pub fn step(&mut self) -> Result<ShotRecord, GameError> {
        if self.winner.is_some() {
            return Err(GameError::MatchOver);
        }
        let turn = self.turn;
        let [one, two] = &mut self.players;
        let (attacker, defender) = match turn {
            Side::One => (one, two),
            Side::Two => (two, one),
        };

        let at = attacker.choose_shot()?;
        let result = defender.receive_shot(at)?;
        attacker.receive_result(at, result)?;

        let record = ShotRecord {
            attacker: turn,
            at,
            result,
        };
        self.shots[turn.index()] += 1;
        self.log.push(record);
        debug!("{:?} fires at {}: {:?}", turn, at, result);

        if result == ShotResult::GameOver {
            attacker.notify_outcome(Outcome::Win);
            defender.notify_outcome(Outcome::Loss);
            self.winner = Some(turn);
            info!(
                "{:?} wins after {} shots ({} by the loser)",
                turn,
                self.shots[turn.index()],
                self.shots[turn.other().index()]
            );
        } else if !result.keeps_turn() {
            self.turn = turn.other();
        }
        Ok(record)
    }

    /// Arrange both fleets and play until one side loses its last ship.
    pub fn run(mut self) -> Result<MatchReport, GameError> {
        info!("match started");
        self.arrange()?;
        self.play_out()
    }

    /// Play until one side loses its last ship; fleets must already be arranged.
    pub fn play_out(mut self) -> Result<MatchReport, GameError> {
        let winner = loop {
            self.step()?;
            if let Some(winner) = self.winner {
                break winner;
            }
        };
        Ok(MatchReport {
            winner,
            shots: self.shots,
            log: self.log,
        })
    }
}
