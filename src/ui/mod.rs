//! Terminal UI: the game screen, its key bindings and the app loop driving
//! the engine.

mod app;
mod game_view;
pub mod keys;

pub use app::App;
pub use keys::{map_key, Command};
