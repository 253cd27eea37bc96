use crate::settings::Settings;

/// Counters for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u64,
    pub level: u32,
    /// Survives `reset_stats`; seeded from the high score file.
    pub high_score: u64,
    pub game_active: bool,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 1,
            high_score: settings.local_highest_score,
            game_active: false,
        };
        stats.reset_stats(settings);
        stats
    }

    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}
