//! Game rules: input handling, the per-frame update and drawing order.

use alien_invasion_common::Key;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::alien::Alien;
use crate::bullet::Bullet;
use crate::button::{Button, Tip, HELP_BUTTON_OFFSET, HELP_TEXT};
use crate::fleet;
use crate::geometry::Rect;
use crate::highscore::HighScoreStore;
use crate::render::to_rgb888;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::ship::Ship;
use crate::stats::GameStats;

/// All mutable state of one running game.
pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub aliens: Vec<Alien>,
    pub bullets: Vec<Bullet>,
    pub play_button: Button,
    pub help_button: Button,
    pub help_tip: Tip,
    pub show_help: bool,
    screen: Rect,
    store: HighScoreStore,
    /// Frames left before the simulation resumes.
    freeze_frames: u32,
}

impl AlienInvasion {
    pub fn new(mut settings: Settings, store: HighScoreStore) -> Self {
        settings.local_highest_score = store.load_or_default();
        let screen = Rect::new(0, 0, settings.screen_width, settings.screen_height);
        let stats = GameStats::new(&settings);
        let scoreboard = Scoreboard::new(&settings, &stats, screen);
        let ship = Ship::new(screen);
        let aliens = fleet::create_fleet(screen, ship.rect.h);
        let play_button = Button::new("Play", screen.center_x(), screen.center_y());
        let help_button = Button::new(
            "Help",
            screen.center_x(),
            screen.center_y() + HELP_BUTTON_OFFSET,
        );
        let help_tip = Tip::new(HELP_TEXT, play_button.rect);

        Self {
            settings,
            stats,
            scoreboard,
            ship,
            aliens,
            bullets: Vec::new(),
            play_button,
            help_button,
            help_tip,
            show_help: false,
            screen,
            store,
            freeze_frames: 0,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze_frames > 0
    }

    pub fn handle_key_down(&mut self, key: Key) {
        match key {
            Key::Right => self.ship.input.moving_right = true,
            Key::Left => self.ship.input.moving_left = true,
            Key::Up => self.ship.input.moving_up = true,
            Key::Down => self.ship.input.moving_down = true,
            Key::Space => self.fire_bullet(),
            _ => {}
        }
    }

    pub fn handle_key_up(&mut self, key: Key) {
        match key {
            Key::Right => self.ship.input.moving_right = false,
            Key::Left => self.ship.input.moving_left = false,
            Key::Up => self.ship.input.moving_up = false,
            Key::Down => self.ship.input.moving_down = false,
            _ => {}
        }
    }

    /// While the help tip is open any click only closes it.
    pub fn handle_click(&mut self, x: i32, y: i32) {
        if self.show_help {
            self.show_help = false;
            log::debug!("Help tip closed");
            return;
        }
        self.check_help_button(x, y);
        self.check_play_button(x, y);
    }

    /// Fire a bullet unless the limit is already on screen.
    pub fn fire_bullet(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::new(&self.settings, &self.ship));
        }
    }

    pub fn check_help_button(&mut self, x: i32, y: i32) {
        if self.help_button.is_clicked(x, y) && !self.stats.game_active {
            self.show_help = !self.show_help;
            log::debug!("Help tip {}", if self.show_help { "opened" } else { "closed" });
        }
    }

    /// Start a new game when Play is clicked on the menu.
    pub fn check_play_button(&mut self, x: i32, y: i32) {
        if !self.play_button.is_clicked(x, y) || self.stats.game_active {
            return;
        }
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;
        self.scoreboard.prep_images(&self.stats);

        self.bullets.clear();
        self.aliens = fleet::create_fleet(self.screen, self.ship.rect.h);
        self.ship.center_ship(self.screen);
        self.show_help = false;
        self.freeze_frames = 0;
        log::info!("New game started");
    }

    /// Advance one frame. Does nothing on the menu or while frozen.
    pub fn update(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.freeze_frames > 0 {
            self.freeze_frames -= 1;
            return;
        }
        self.ship.update(&self.settings, self.screen);
        self.update_bullets();
        self.update_aliens();
    }

    pub fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());
        self.check_bullet_alien_collisions();
    }

    /// Remove every bullet that hit something together with the aliens it hit.
    ///
    /// Returns the number of aliens shot down.
    pub fn check_bullet_alien_collisions(&mut self) -> usize {
        let aliens = &mut self.aliens;
        let mut hits_per_bullet = Vec::new();
        self.bullets.retain(|bullet| {
            let before = aliens.len();
            aliens.retain(|alien| !bullet.rect.collides_with(&alien.rect));
            let hits = before - aliens.len();
            if hits > 0 {
                hits_per_bullet.push(hits);
            }
            hits == 0
        });

        let destroyed: usize = hits_per_bullet.iter().sum();
        if destroyed > 0 {
            for hits in &hits_per_bullet {
                let points = self.settings.alien_points.saturating_mul(*hits as u64);
                self.stats.score = self.stats.score.saturating_add(points);
            }
            self.scoreboard.prep_score(&self.stats);
            self.check_high_score();
        }

        if self.aliens.is_empty() {
            self.start_new_level();
        }
        destroyed
    }

    pub fn check_high_score(&mut self) {
        if self.stats.score > self.stats.high_score {
            self.stats.high_score = self.stats.score;
            self.scoreboard.prep_high_score(&self.stats);
        }
    }

    pub fn start_new_level(&mut self) {
        self.bullets.clear();
        self.ship.center_ship(self.screen);
        self.settings.increase_speed();

        self.stats.level += 1;
        self.scoreboard.prep_level(&self.stats);
        log::info!("Fleet cleared, entering level {}", self.stats.level);

        self.freeze_frames = self.settings.freeze_frames;
        self.aliens = fleet::create_fleet(self.screen, self.ship.rect.h);
    }

    pub fn update_aliens(&mut self) {
        fleet::check_fleet_edges(&mut self.settings, &mut self.aliens, self.screen);
        for alien in &mut self.aliens {
            alien.update(&self.settings);
        }

        if self
            .aliens
            .iter()
            .any(|alien| alien.rect.collides_with(&self.ship.rect))
        {
            log::debug!("Ship rammed by an alien");
            self.ship_hit();
            return;
        }
        self.check_aliens_bottom();
    }

    /// An alien reaching the bottom counts as losing a ship.
    pub fn check_aliens_bottom(&mut self) {
        let bottom = self.screen.bottom();
        if self.aliens.iter().any(|alien| alien.rect.bottom() >= bottom) {
            log::debug!("An alien reached the bottom of the screen");
            self.ship_hit();
        }
    }

    pub fn ship_hit(&mut self) {
        if self.stats.ships_left > 0 {
            self.stats.ships_left -= 1;
            self.scoreboard.prep_ships(&self.stats);

            self.bullets.clear();
            self.aliens = fleet::create_fleet(self.screen, self.ship.rect.h);
            self.ship.center_ship(self.screen);

            self.freeze_frames = self.settings.freeze_frames;
            log::info!("Ship lost, {} left", self.stats.ships_left);
        } else {
            self.persist_high_score();
            self.stats.game_active = false;
            log::info!(
                "Game over: score {}, level {}",
                self.stats.score,
                self.stats.level
            );
        }
    }

    /// Write the high score to disk if it beats the one already there.
    pub fn persist_high_score(&mut self) {
        if self.stats.high_score <= self.settings.local_highest_score {
            return;
        }
        match self.store.save(self.stats.high_score) {
            Ok(()) => self.settings.local_highest_score = self.stats.high_score,
            Err(e) => log::warn!("Could not save high score: {e}"),
        }
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(to_rgb888(self.settings.background()))?;

        for bullet in &self.bullets {
            bullet.draw(target, &self.settings)?;
        }
        self.ship.draw(target)?;
        for alien in &self.aliens {
            alien.draw(target)?;
        }
        self.scoreboard.draw(target)?;

        if !self.stats.game_active {
            self.play_button.draw(target)?;
            self.help_button.draw(target)?;
            if self.show_help {
                self.help_tip.draw(target)?;
            }
        }
        Ok(())
    }
}
