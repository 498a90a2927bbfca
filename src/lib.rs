mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod random;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use random::*;
pub use ship::*;
