//! Game tuning.
//!
//! Static values can be overridden from a JSON file; the dynamic values are
//! reset at the start of every game and scaled up after every cleared fleet.

use std::fs;
use std::path::Path;

use alien_invasion_common::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};

/// Largest accepted screen width or height.
pub const MAX_SCREEN_SIZE: i32 = 4096;
/// Largest accepted `speedup_scale` and `score_scale`.
pub const MAX_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub background_color: (u8, u8, u8),

    // === Ship ===
    pub ship_limit: u32,

    // === Bullets ===
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: (u8, u8, u8),
    pub bullets_allowed: usize,

    // === Fleet ===
    pub fleet_drop_speed: i32,

    // === Pacing ===
    /// How quickly the game speeds up after each cleared fleet.
    pub speedup_scale: f32,
    /// How quickly alien point values grow after each cleared fleet.
    pub score_scale: f64,
    /// Frames the simulation holds still after losing a ship or clearing a fleet.
    pub freeze_frames: u32,

    // === Dynamic, never read from disk ===
    #[serde(skip)]
    pub ship_speed_factor: f32,
    #[serde(skip)]
    pub bullet_speed_factor: f32,
    #[serde(skip)]
    pub alien_speed_factor: f32,
    /// 1 moves the fleet right, -1 moves it left.
    #[serde(skip)]
    pub fleet_direction: i32,
    #[serde(skip)]
    pub alien_points: u64,

    /// High score as last read from or written to the high score file.
    #[serde(skip)]
    pub local_highest_score: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: 1200,
            screen_height: 800,
            background_color: Color::LIGHT_GRAY.rgb(),

            ship_limit: 3,

            bullet_width: 3,
            bullet_height: 15,
            bullet_color: Color::DARK_GRAY.rgb(),
            bullets_allowed: 3,

            fleet_drop_speed: 10,

            speedup_scale: 1.1,
            score_scale: 1.5,
            freeze_frames: 30,

            ship_speed_factor: 0.0,
            bullet_speed_factor: 0.0,
            alien_speed_factor: 0.0,
            fleet_direction: 1,
            alien_points: 0,

            local_highest_score: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }
}

impl Settings {
    /// Load static settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings =
            serde_json::from_str(&json).map_err(|source| StorageError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        settings.initialize_dynamic_settings();
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(StorageError::InvalidSettings(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.bullet_width <= 0 || self.bullet_height <= 0 {
            return Err(StorageError::InvalidSettings(format!(
                "bullet size must be positive, got {}x{}",
                self.bullet_width, self.bullet_height
            )));
        }
        if self.screen_width > MAX_SCREEN_SIZE || self.screen_height > MAX_SCREEN_SIZE {
            return Err(StorageError::InvalidSettings(format!(
                "screen size must be at most {MAX_SCREEN_SIZE}x{MAX_SCREEN_SIZE}, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        let scales = [f64::from(self.speedup_scale), self.score_scale];
        if scales.iter().any(|scale| !(1.0..=MAX_SCALE).contains(scale)) {
            return Err(StorageError::InvalidSettings(format!(
                "speedup_scale and score_scale must be between 1.0 and {MAX_SCALE}"
            )));
        }
        Ok(())
    }

    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed_factor = 1.5;
        self.bullet_speed_factor = 3.0;
        self.alien_speed_factor = 1.0;
        self.fleet_direction = 1;
        self.alien_points = 50;
    }

    pub fn increase_speed(&mut self) {
        self.ship_speed_factor *= self.speedup_scale;
        self.bullet_speed_factor *= self.speedup_scale;
        self.alien_speed_factor *= self.speedup_scale;
        // Float to int casts saturate at u64::MAX.
        self.alien_points = (self.alien_points as f64 * self.score_scale) as u64;
    }

    pub fn background(&self) -> Color {
        self.background_color.into()
    }

    pub fn bullet(&self) -> Color {
        self.bullet_color.into()
    }
}
