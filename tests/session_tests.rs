//! Session tests - new-game lifecycle, wall-clock driving, auto restart

use blockfall::core::{tick_interval_ms, ConfigError, GameConfig, Randomizer, Session};
use blockfall::types::Command;

fn small_config(auto_restart: bool) -> GameConfig {
    GameConfig {
        columns: 4,
        rows: 6,
        seed: 5,
        randomizer: Randomizer::Uniform,
        auto_restart,
    }
}

/// Drive the session a second at a time until `done` or give up.
fn run_until(session: &mut Session, mut done: impl FnMut(&Session) -> bool) -> bool {
    for _ in 0..10_000 {
        if done(session) {
            return true;
        }
        session.advance(1_000);
    }
    done(session)
}

#[test]
fn test_commands_reach_the_board() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    let start = session.board().falling().origin();

    assert!(session.apply(Command::MoveLeft));
    assert_eq!(session.board().falling().origin(), (start.0 - 1, start.1));
    assert!(session.apply(Command::SoftDrop));
    assert_eq!(session.board().falling().origin(), (start.0 - 1, start.1 + 1));
}

#[test]
fn test_game_over_halts_without_auto_restart() {
    let mut session = Session::new(small_config(false)).unwrap();
    assert!(run_until(&mut session, |s| s.board().is_game_over()));

    let before = session.snapshot();
    assert_eq!(session.advance(60_000), 0);
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.games_started(), 1);

    assert!(session.apply(Command::NewGame));
    assert!(!session.board().is_game_over());
    assert_eq!(session.games_started(), 2);
}

#[test]
fn test_auto_restart_starts_a_new_game() {
    let mut session = Session::new(small_config(true)).unwrap();
    assert!(run_until(&mut session, |s| s.games_started() > 1));
    assert!(!session.board().is_game_over());
    assert_eq!(session.board().score(), 0);
}

#[test]
fn test_tick_interval_follows_level() {
    let session = Session::new(GameConfig::default()).unwrap();
    assert_eq!(session.tick_interval_ms(), 1_000);
    assert_eq!(tick_interval_ms(2), 823);
    assert_eq!(tick_interval_ms(40), 57);
    assert_eq!(tick_interval_ms(60), 20);
}

#[test]
fn test_bag_randomizer_session() {
    let config = GameConfig {
        randomizer: Randomizer::Bag,
        ..GameConfig::default()
    };
    let session = Session::new(config).unwrap();
    assert_ne!(session.board().falling().kind(), session.board().next().kind());
}

#[test]
fn test_rejects_tiny_grid() {
    let config = GameConfig {
        rows: 3,
        ..GameConfig::default()
    };
    let err = Session::new(config).unwrap_err();
    assert_eq!(err, ConfigError::TooFewRows { rows: 3 });
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_long_stall_runs_a_single_tick() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    let start = session.board().falling().origin();

    assert_eq!(session.advance(30_000), 1);
    assert_eq!(session.board().falling().origin(), (start.0, start.1 + 1));
    assert_eq!(session.board().pieces_locked(), 0);
}
