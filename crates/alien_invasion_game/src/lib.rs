//! Alien Invasion: a fleet of aliens marches down the screen while the
//! player's ship shoots it down.
//!
//! - `game`: rules and per-frame update
//! - `fleet`, `ship`, `alien`, `bullet`: sprites and fleet layout
//! - `scoreboard`, `button`: HUD and menu
//! - `render`: drawing into the frontend's RGB24 framebuffer
//! - `settings`, `stats`, `highscore`: tuning, counters and the high score file

pub mod alien;
pub mod app;
pub mod bullet;
pub mod button;
pub mod error;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod highscore;
pub mod render;
pub mod scoreboard;
pub mod settings;
pub mod ship;
pub mod stats;

pub use app::AlienInvasionApp;
pub use error::StorageError;
pub use game::AlienInvasion;
pub use highscore::HighScoreStore;
pub use settings::Settings;

pub const TITLE: &str = "Alien Invasion";
/// Default integer scaling factor for the SDL2 frontend.
pub const DEFAULT_SCALE: u32 = 1;
