use alien_invasion_common::{App, Key, MouseButton};

use crate::game::AlienInvasion;
use crate::highscore::HighScoreStore;
use crate::render::Canvas;
use crate::settings::Settings;
use crate::{DEFAULT_SCALE, TITLE};

/// Frontend-facing wrapper around [`AlienInvasion`].
pub struct AlienInvasionApp {
    should_exit: bool,
    scale: u32,
    pub game: AlienInvasion,
}

impl AlienInvasionApp {
    pub fn new(settings: Settings, store: HighScoreStore) -> Self {
        Self {
            should_exit: false,
            scale: DEFAULT_SCALE,
            game: AlienInvasion::new(settings, store),
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }
}

impl Default for AlienInvasionApp {
    fn default() -> Self {
        Self::new(Settings::default(), HighScoreStore::default())
    }
}

impl App for AlienInvasionApp {
    fn init(&mut self) {
        log::info!(
            "Alien Invasion init, high score {}",
            self.game.stats.high_score
        );
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.game.update();

        let mut canvas = Canvas::new(screen_state, self.width(), self.height());
        self.game
            .draw(&mut canvas)
            .unwrap_or_else(|never| match never {});
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        match (key, is_down) {
            (Key::Escape, true) => self.should_exit = true,
            (key, true) => self.game.handle_key_down(key),
            (key, false) => self.game.handle_key_up(key),
        }
    }

    fn handle_mouse_event(&mut self, button: MouseButton, x: i32, y: i32) {
        if button == MouseButton::Left {
            self.game.handle_click(x, y);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        self.game.persist_high_score();
        log::info!("Alien Invasion exit");
    }

    /// Hidden while playing.
    fn cursor_visible(&self) -> bool {
        !self.game.stats.game_active
    }

    fn width(&self) -> u32 {
        self.game.settings.screen_width as u32
    }

    fn height(&self) -> u32 {
        self.game.settings.screen_height as u32
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::DEFAULT_HIGH_SCORE_FILE;

    fn app(dir: &tempfile::TempDir) -> AlienInvasionApp {
        let store = HighScoreStore::new(dir.path().join(DEFAULT_HIGH_SCORE_FILE));
        AlienInvasionApp::new(Settings::default(), store)
    }

    fn frame(app: &AlienInvasionApp) -> Vec<u8> {
        vec![0u8; (app.width() * app.height() * 3) as usize]
    }

    #[test]
    fn escape_requests_exit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        assert!(!app.should_exit());
        app.handle_key_event(Key::Escape, false);
        assert!(!app.should_exit());
        app.handle_key_event(Key::Escape, true);
        assert!(app.should_exit());
    }

    #[test]
    fn left_click_on_play_hides_cursor_and_runs_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let play = app.game.play_button.rect;
        assert!(app.cursor_visible());

        app.handle_mouse_event(MouseButton::Right, play.center_x(), play.center_y());
        assert!(!app.game.stats.game_active);

        app.handle_mouse_event(MouseButton::Left, play.center_x(), play.center_y());
        assert!(app.game.stats.game_active);
        assert!(!app.cursor_visible());

        app.handle_key_event(Key::Right, true);
        let start = app.game.ship.rect.x;
        let mut screen = frame(&app);
        for _ in 0..10 {
            app.update(&mut screen);
        }
        assert!(app.game.ship.rect.x > start);
        app.handle_key_event(Key::Right, false);
        assert!(!app.game.ship.input.moving_right);
    }

    #[test]
    fn exit_saves_a_new_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        app.game.stats.score = 750;
        app.game.check_high_score();
        app.exit();
        let saved = std::fs::read_to_string(dir.path().join(DEFAULT_HIGH_SCORE_FILE)).unwrap();
        assert_eq!(saved, "750");
    }

    #[test]
    fn reports_surface_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir).with_scale(0);
        assert_eq!((app.width(), app.height()), (1200, 800));
        assert_eq!(app.scale(), 1);
        assert_eq!(app.title(), "Alien Invasion");
    }
}
