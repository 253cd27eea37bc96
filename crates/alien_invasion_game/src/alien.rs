use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::geometry::Rect;
use crate::render::ALIEN_SPRITE;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Alien {
    pub rect: Rect,
    x: f32,
}

impl Alien {
    pub fn new(x: i32, y: i32) -> Self {
        let mut rect = ALIEN_SPRITE.rect();
        rect.x = x;
        rect.y = y;
        Self { rect, x: x as f32 }
    }

    pub fn width() -> i32 {
        ALIEN_SPRITE.width()
    }

    pub fn height() -> i32 {
        ALIEN_SPRITE.height()
    }

    /// Step sideways in the current fleet direction.
    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed_factor * settings.fleet_direction as f32;
        self.rect.x = self.x as i32;
    }

    pub fn drop_by(&mut self, dy: i32) {
        self.rect.y += dy;
    }

    pub fn check_edges(&self, screen: Rect) -> bool {
        self.rect.right() >= screen.right() || self.rect.left() <= screen.left()
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        ALIEN_SPRITE.draw(target, self.rect.x, self.rect.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_with_fleet_direction() {
        let mut settings = Settings::default();
        let mut alien = Alien::new(100, 50);
        alien.update(&settings);
        alien.update(&settings);
        assert_eq!(alien.rect.x, 102);

        settings.fleet_direction = -1;
        settings.alien_speed_factor = 0.5;
        alien.update(&settings);
        assert_eq!(alien.rect.x, 101);
        assert_eq!(alien.rect.y, 50);
    }

    #[test]
    fn edges_are_inclusive() {
        let screen = Rect::new(0, 0, 1200, 800);
        assert!(Alien::new(0, 10).check_edges(screen));
        assert!(Alien::new(1200 - Alien::width(), 10).check_edges(screen));
        assert!(!Alien::new(1, 10).check_edges(screen));
        assert!(!Alien::new(1199 - Alien::width(), 10).check_edges(screen));
    }
}
