//! Integration tests for the input-to-game-state flow
//!
//! These drive the engine the way the main loop does: a crossterm key event
//! is mapped to an action, then applied to the game state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_frog::core::{GameState, ScriptedRng};
use tui_frog::input::{handle_key_event, should_quit};
use tui_frog::types::{GameAction, GameConfig, Pos};

fn scripted_game() -> GameState<ScriptedRng> {
    // Flies on (0,1)..(0,5); every fly-step draw is 2 (left), which keeps
    // the flies parked behind the frog while it sweeps row 0. The trailing
    // block feeds the placement draws of a restart.
    let mut script = vec![0, 1, 0, 2, 0, 3, 0, 4, 0, 5];
    script.extend([2; 10]);
    script.extend([1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
    let rng = ScriptedRng::new(script).with_fallback(2);
    GameState::with_rng(GameConfig::default(), rng).unwrap()
}

fn press(state: &mut GameState<ScriptedRng>, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => state.apply_action(action),
        None => false,
    }
}

#[test]
fn test_key_events_drive_the_game() {
    let mut state = scripted_game();

    assert!(press(&mut state, KeyCode::Right));
    assert_eq!(state.frog(), Pos::new(0, 1));
    assert_eq!(state.flies_eaten(), 1);

    assert!(press(&mut state, KeyCode::Char('d')));
    assert_eq!(state.frog(), Pos::new(0, 2));
    assert_eq!(state.flies_eaten(), 2);
}

#[test]
fn test_unmapped_keys_change_nothing() {
    let mut state = scripted_game();

    assert!(!press(&mut state, KeyCode::Char('x')));
    assert!(!press(&mut state, KeyCode::Enter));
    assert!(!press(&mut state, KeyCode::Esc));

    assert_eq!(state.total_moves(), 0);
    assert_eq!(state.frog(), Pos::new(0, 0));
}

#[test]
fn test_full_playthrough_and_restart() {
    let mut state = scripted_game();

    // Eat all five flies by walking right along row 0.
    for _ in 0..5 {
        assert!(press(&mut state, KeyCode::Right));
    }
    assert!(state.game_over());
    assert_eq!(state.flies_eaten(), 5);

    // Movement keys are ignored while the game is over.
    assert!(!press(&mut state, KeyCode::Left));
    assert_eq!(state.total_moves(), 5);

    // The restart key starts a new session.
    assert!(press(&mut state, KeyCode::Char('r')));
    assert!(!state.game_over());
    assert_eq!(state.total_moves(), 0);
    assert_eq!(state.flies_remaining(), 5);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn test_restart_key_works_mid_game() {
    let mut state = scripted_game();

    assert!(press(&mut state, KeyCode::Right));
    assert_eq!(state.flies_eaten(), 1);

    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
        Some(GameAction::Restart)
    );
    assert!(press(&mut state, KeyCode::Char('R')));

    assert_eq!(state.flies_eaten(), 0);
    assert_eq!(state.flies_remaining(), 5);
    assert_eq!(state.frog(), Pos::new(0, 0));
}

#[test]
fn test_quit_detection_matches_main_loop() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));

    // Quit keys are not game actions.
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), None);

    // A plain 'c' is neither quit nor action.
    let plain_c = KeyEvent::from(KeyCode::Char('c'));
    assert!(!should_quit(plain_c));
    assert_eq!(handle_key_event(plain_c), None);
}
