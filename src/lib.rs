//! TUI Frog: a terminal frog-and-flies game.
//!
//! A frog hops around a toroidal grid hunting five wandering flies. Every
//! frog move gives each fly one random step; the session ends when the last
//! fly is eaten.
//!
//! # Module Structure
//!
//! - [`core`]: deterministic game logic (board, random source, game state)
//! - [`input`]: `crossterm` key events mapped to game actions
//! - [`term`]: framebuffer, game view, and diff-based terminal renderer
//! - [`types`]: shared primitive types and constants
//!
//! # Example
//!
//! ```
//! use tui_frog::core::GameState;
//! use tui_frog::types::{Direction, GameConfig};
//!
//! // Create a game with a fixed seed
//! let mut game = GameState::new(GameConfig::default(), 12345)?;
//!
//! // Move the frog; every move also steps the flies
//! game.move_frog(Direction::Right);
//! game.move_frog(Direction::Down);
//!
//! assert_eq!(game.total_moves(), 2);
//! assert!(!game.game_over());
//! # Ok::<(), tui_frog::core::GameError>(())
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
