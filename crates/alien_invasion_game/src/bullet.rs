use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::geometry::Rect;
use crate::render::fill_rect;
use crate::settings::Settings;
use crate::ship::Ship;

#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    y: f32,
}

impl Bullet {
    /// Spawn at the ship's nose.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_center_x(ship.rect.center_x());
        rect.set_top(ship.rect.top());
        Self {
            rect,
            y: rect.y as f32,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed_factor;
        self.rect.y = self.y as i32;
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
        self.y = y as f32;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }

    pub fn draw<D>(&self, target: &mut D, settings: &Settings) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        fill_rect(target, self.rect, settings.bullet())
    }
}
