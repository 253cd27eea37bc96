use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::geometry::Rect;
use crate::render::SHIP_SPRITE;
use crate::settings::Settings;

/// Held arrow keys. Updated by key events, integrated once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub moving_left: bool,
    pub moving_right: bool,
    pub moving_up: bool,
    pub moving_down: bool,
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub rect: Rect,
    pub input: InputState,
    /// Sub-pixel centre, written back into `rect` every update.
    center_x: f32,
    center_y: f32,
}

impl Ship {
    /// A new ship at the bottom centre of `screen`.
    pub fn new(screen: Rect) -> Self {
        let mut rect = SHIP_SPRITE.rect();
        rect.set_center_x(screen.center_x());
        rect.set_bottom(screen.bottom());
        Self {
            rect,
            input: InputState::default(),
            center_x: rect.center_x() as f32,
            center_y: rect.center_y() as f32,
        }
    }

    pub fn update(&mut self, settings: &Settings, screen: Rect) {
        let speed = settings.ship_speed_factor;
        if self.input.moving_right && self.rect.right() < screen.right() {
            self.center_x += speed;
        }
        if self.input.moving_left && self.rect.left() > screen.left() {
            self.center_x -= speed;
        }
        if self.input.moving_up && self.rect.top() > screen.top() {
            self.center_y -= speed;
        }
        if self.input.moving_down && self.rect.bottom() < screen.bottom() {
            self.center_y += speed;
        }
        self.sync_rect();
    }

    /// Move back to the starting point at the bottom centre.
    pub fn center_ship(&mut self, screen: Rect) {
        self.center_x = screen.center_x() as f32;
        self.center_y = screen.bottom() as f32 - self.rect.h as f32 / 2.0;
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        self.rect.set_center_x(self.center_x as i32);
        self.rect.set_center_y(self.center_y as i32);
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        SHIP_SPRITE.draw(target, self.rect.x, self.rect.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 1200, 800)
    }

    #[test]
    fn starts_at_bottom_center() {
        let ship = Ship::new(screen());
        assert_eq!(ship.rect.bottom(), 800);
        assert_eq!(ship.rect.center_x(), 600);
        assert_eq!(ship.input, InputState::default());
    }

    #[test]
    fn moves_while_flag_is_held() {
        let settings = Settings::default();
        let mut ship = Ship::new(screen());
        ship.input.moving_right = true;
        for _ in 0..10 {
            ship.update(&settings, screen());
        }
        assert_eq!(ship.rect.center_x(), 615);

        ship.input.moving_right = false;
        ship.input.moving_up = true;
        for _ in 0..10 {
            ship.update(&settings, screen());
        }
        assert_eq!(ship.rect.center_x(), 615);
        assert_eq!(ship.rect.center_y(), 765);
    }

    #[test]
    fn stays_inside_screen() {
        let settings = Settings::default();
        let mut ship = Ship::new(screen());
        ship.input.moving_left = true;
        ship.input.moving_down = true;
        for _ in 0..2000 {
            ship.update(&settings, screen());
        }
        assert!(ship.rect.left() <= 0 && ship.rect.left() > -2);
        assert_eq!(ship.rect.bottom(), 800);

        ship.input = InputState {
            moving_right: true,
            moving_up: true,
            ..InputState::default()
        };
        for _ in 0..2000 {
            ship.update(&settings, screen());
        }
        assert!(ship.rect.right() >= 1200 && ship.rect.right() < 1202);
        assert!(ship.rect.top() <= 0 && ship.rect.top() > -2);
    }

    #[test]
    fn center_ship_resets_position() {
        let settings = Settings::default();
        let mut ship = Ship::new(screen());
        ship.input.moving_left = true;
        ship.input.moving_up = true;
        for _ in 0..50 {
            ship.update(&settings, screen());
        }
        ship.center_ship(screen());
        assert_eq!(ship.rect.center_x(), 600);
        assert_eq!(ship.rect.bottom(), 800);
    }
}
