use std::cmp::Ordering;

use alien_invasion_common::Color;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::geometry::Rect;
use crate::render::{Label, SHIP_SPRITE};
use crate::settings::Settings;
use crate::stats::GameStats;

const TEXT_COLOR: Color = Color::CHARCOAL;
const SCORE_MARGIN_RIGHT: i32 = 20;
const LEVEL_GAP: i32 = 5;
const SHIPS_MARGIN_LEFT: i32 = 10;

/// Round to the nearest multiple of ten, ties going to the even multiple.
/// Saturates at `u64::MAX`.
pub fn round_to_tens(value: u64) -> u64 {
    let tens = value / 10;
    let rounded = match (value % 10).cmp(&5) {
        Ordering::Less => tens,
        Ordering::Greater => tens + 1,
        Ordering::Equal if tens % 2 == 0 => tens,
        Ordering::Equal => tens + 1,
    };
    rounded.saturating_mul(10)
}

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Score, high score, level and remaining ships, laid out along the top edge.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    screen: Rect,
    background: Color,
    pub score: Label,
    pub high_score: Label,
    pub level: Label,
    pub ships: Vec<Rect>,
}

impl Scoreboard {
    pub fn new(settings: &Settings, stats: &GameStats, screen: Rect) -> Self {
        let background = settings.background();
        let blank = Label::new("", TEXT_COLOR, Some(background));
        let mut scoreboard = Self {
            screen,
            background,
            score: blank.clone(),
            high_score: blank.clone(),
            level: blank,
            ships: Vec::new(),
        };
        scoreboard.prep_images(stats);
        scoreboard
    }

    pub fn prep_images(&mut self, stats: &GameStats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats);
    }

    /// Top right corner.
    pub fn prep_score(&mut self, stats: &GameStats) {
        let text = format_thousands(round_to_tens(stats.score));
        self.score = Label::new(text, TEXT_COLOR, Some(self.background));
        self.score.rect.set_right(self.screen.right() - SCORE_MARGIN_RIGHT);
        self.score.rect.set_top(0);
    }

    /// Top centre.
    pub fn prep_high_score(&mut self, stats: &GameStats) {
        let text = format!(
            "Highest Score:  {}",
            format_thousands(round_to_tens(stats.high_score))
        );
        self.high_score = Label::new(text, TEXT_COLOR, Some(self.background));
        self.high_score.rect.set_center_x(self.screen.center_x());
        self.high_score.rect.set_top(self.screen.top());
    }

    /// Right-aligned under the score.
    pub fn prep_level(&mut self, stats: &GameStats) {
        let text = format!("Level: {}", stats.level);
        self.level = Label::new(text, TEXT_COLOR, Some(self.background));
        self.level.rect.set_right(self.score.rect.right());
        self.level.rect.set_top(self.score.rect.bottom() + LEVEL_GAP);
    }

    /// One ship icon per remaining ship, top left.
    pub fn prep_ships(&mut self, stats: &GameStats) {
        let icon = SHIP_SPRITE.rect();
        self.ships = (0..stats.ships_left as i32)
            .map(|n| Rect::new(SHIPS_MARGIN_LEFT + n * icon.w, 0, icon.w, icon.h))
            .collect();
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.score.draw(target)?;
        self.high_score.draw(target)?;
        self.level.draw(target)?;
        for ship in &self.ships {
            SHIP_SPRITE.draw(target, ship.x, ship.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 1200, 800)
    }

    #[test]
    fn rounding_matches_half_even() {
        assert_eq!(round_to_tens(0), 0);
        assert_eq!(round_to_tens(112), 110);
        assert_eq!(round_to_tens(118), 120);
        assert_eq!(round_to_tens(75), 80);
        assert_eq!(round_to_tens(65), 60);
        assert_eq!(round_to_tens(5), 0);
        assert_eq!(round_to_tens(15), 20);
    }

    #[test]
    fn rounding_saturates_near_max() {
        assert_eq!(round_to_tens(u64::MAX), u64::MAX);
        assert_eq!(round_to_tens(u64::MAX - 10), 18_446_744_073_709_551_610);
    }

    #[test]
    fn thousands_are_comma_separated() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(100000), "100,000");
    }

    #[test]
    fn labels_are_laid_out_along_top_edge() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.score = 12345;
        stats.high_score = 99999;
        stats.level = 3;
        let board = Scoreboard::new(&settings, &stats, screen());

        assert_eq!(board.score.text, "12,340");
        assert_eq!(board.score.rect.right(), 1180);
        assert_eq!(board.score.rect.top(), 0);

        assert_eq!(board.high_score.text, "Highest Score:  100,000");
        assert_eq!(board.high_score.rect.center_x(), 600);

        assert_eq!(board.level.text, "Level: 3");
        assert_eq!(board.level.rect.right(), 1180);
        assert_eq!(board.level.rect.top(), board.score.rect.bottom() + 5);
    }

    #[test]
    fn ship_icons_follow_ships_left() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        let mut board = Scoreboard::new(&settings, &stats, screen());
        assert_eq!(board.ships.len(), 3);
        assert_eq!(board.ships[0].x, 10);
        assert_eq!(board.ships[1].x, 10 + SHIP_SPRITE.width());

        stats.ships_left = 1;
        board.prep_ships(&stats);
        assert_eq!(board.ships.len(), 1);
    }
}
