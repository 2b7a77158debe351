//! Session module - game lifecycle around a board
//!
//! A session owns one board at a time, the fall clock and the configuration.
//! `NewGame` throws the board away and builds a fresh one; each new game
//! draws its seed from a session RNG so a whole session replays identically
//! from the configured seed.

use log::info;

use crate::board::{Board, TickOutcome};
use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::Snapshot;
use crate::timing::{tick_interval_ms, FallClock};
use crate::types::Command;

#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    seeds: SimpleRng,
    board: Board,
    clock: FallClock,
    games_started: u32,
}

impl Session {
    /// Validate `config` and start the first game with its seed
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let board = Board::from_config(&config)?;
        info!(
            "new game 1: {}x{} grid, {} randomizer, seed {}",
            config.columns,
            config.rows,
            config.randomizer.as_str(),
            config.seed
        );
        Ok(Self {
            seeds: SimpleRng::new(config.seed),
            config,
            board,
            clock: FallClock::new(),
            games_started: 1,
        })
    }

    /// Apply a front-end command
    /// Returns true if it changed the game
    pub fn apply(&mut self, command: Command) -> bool {
        match command.board_input() {
            Some(input) => self.board.handle_input(input),
            None => {
                self.new_game();
                true
            }
        }
    }

    /// Feed elapsed wall time and run the tick if one came due
    ///
    /// Returns the number of ticks run: at most one per call, however long
    /// the caller stalled.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.board.is_game_over() {
            if !self.config.auto_restart {
                self.clock.reset();
                return 0;
            }
            self.new_game();
        }

        self.clock.accumulate(elapsed_ms);
        if !self.clock.take_tick(self.board.level()) {
            return 0;
        }
        if let TickOutcome::Locked(event) = self.board.tick() {
            if event.game_over {
                self.clock.reset();
                if self.config.auto_restart {
                    self.new_game();
                }
            }
        }
        1
    }

    /// Discard the board and start over
    pub fn new_game(&mut self) {
        let seed = self.seeds.next_u32();
        let config = GameConfig { seed, ..self.config };
        // The configuration was validated when the session was created.
        self.board = Board::assemble(
            Grid::new(config.columns, config.rows),
            config.randomizer.build(seed),
        );
        self.clock.reset();
        self.games_started += 1;
        info!("new game {}: seed {}", self.games_started, seed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Current fall interval in milliseconds
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.board.level())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_runs_due_ticks_only() {
        let mut session = Session::new(GameConfig::default()).unwrap();
        let start = session.board().falling().origin();

        assert_eq!(session.advance(999), 0);
        assert_eq!(session.board().falling().origin(), start);

        assert_eq!(session.advance(1), 1);
        assert_eq!(session.board().falling().origin(), (start.0, start.1 + 1));

        assert_eq!(session.advance(3_000), 1);
        assert_eq!(session.board().falling().origin(), (start.0, start.1 + 2));
        assert_eq!(session.advance(0), 0);
    }

    #[test]
    fn new_game_command_resets_board() {
        let mut session = Session::new(GameConfig::default()).unwrap();
        session.advance(5_000);
        assert!(session.apply(Command::NewGame));
        assert_eq!(session.games_started(), 2);
        assert_eq!(session.board().score(), 0);
        assert_eq!(session.board().falling().origin().1, 0);
    }

    #[test]
    fn sessions_with_same_seed_agree() {
        let config = GameConfig {
            seed: 99,
            ..GameConfig::default()
        };
        let mut a = Session::new(config).unwrap();
        let mut b = Session::new(config).unwrap();
        for _ in 0..3 {
            a.new_game();
            b.new_game();
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            columns: 2,
            ..GameConfig::default()
        };
        assert_eq!(
            Session::new(config).unwrap_err(),
            ConfigError::TooFewColumns { columns: 2 }
        );
    }
}
