//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod combo;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod matcher;
pub mod phase;
pub mod rng;
pub mod state;
pub mod table;

pub use cards::*;
pub use combo::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use matcher::*;
pub use phase::*;
pub use rng::*;
pub use state::*;
pub use table::*;
