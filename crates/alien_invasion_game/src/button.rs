//! Menu widgets shown while no game is running.

use alien_invasion_common::Color;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::geometry::Rect;
use crate::render::{fill_rect, Label};

pub const BUTTON_WIDTH: i32 = 200;
pub const BUTTON_HEIGHT: i32 = 50;
const BUTTON_COLOR: Color = Color::GREEN;
const BUTTON_TEXT_COLOR: Color = Color::WHITE;

/// Vertical distance between the Play and Help button centres.
pub const HELP_BUTTON_OFFSET: i32 = 70;

pub const TIP_WIDTH: i32 = 800;
pub const TIP_HEIGHT: i32 = 280;
/// Space between the bottom of the tip and the top of the Play button.
pub const TIP_BUTTON_GAP: i32 = 15;
const TIP_COLOR: Color = Color::DARK_GRAY;
const TIP_TEXT_COLOR: Color = Color::WHITE;
const TIP_LINE_GAP: i32 = 12;

pub const HELP_TEXT: &[&str] = &[
    "Left / Right / Up / Down: move the ship",
    "Space: fire",
    "Esc: quit",
    "Shoot down every alien to reach the next level.",
    "Don't let them reach you or the ground.",
    "Click anywhere to close this tip.",
];

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: Label,
}

impl Button {
    pub fn new(msg: &str, center_x: i32, center_y: i32) -> Self {
        let mut rect = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        rect.set_center(center_x, center_y);
        let mut label = Label::new(msg, BUTTON_TEXT_COLOR, Some(BUTTON_COLOR));
        label.rect.set_center(rect.center_x(), rect.center_y());
        Self { rect, label }
    }

    pub fn is_clicked(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        fill_rect(target, self.rect, BUTTON_COLOR)?;
        self.label.draw(target)
    }
}

/// A panel of text sitting just above the menu buttons, leaving them visible.
#[derive(Debug, Clone)]
pub struct Tip {
    pub rect: Rect,
    pub lines: Vec<Label>,
}

impl Tip {
    pub fn new(lines: &[&str], above: Rect) -> Self {
        let mut rect = Rect::new(0, 0, TIP_WIDTH, TIP_HEIGHT);
        rect.set_center_x(above.center_x());
        rect.set_bottom(above.top() - TIP_BUTTON_GAP);

        let mut labels: Vec<Label> = lines
            .iter()
            .map(|line| Label::new(*line, TIP_TEXT_COLOR, Some(TIP_COLOR)))
            .collect();
        let block_height: i32 = labels.iter().map(|l| l.rect.h).sum::<i32>()
            + TIP_LINE_GAP * (labels.len() as i32 - 1).max(0);
        let mut y = rect.center_y() - block_height / 2;
        for label in &mut labels {
            label.rect.set_center_x(rect.center_x());
            label.rect.set_top(y);
            y += label.rect.h + TIP_LINE_GAP;
        }
        Self {
            rect,
            lines: labels,
        }
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        fill_rect(target, self.rect, TIP_COLOR)?;
        for line in &self.lines {
            line.draw(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_centered_and_clickable() {
        let button = Button::new("Play", 600, 400);
        assert_eq!(button.rect, Rect::new(500, 375, 200, 50));
        assert_eq!(button.label.rect.center_x(), 600);
        assert!(button.is_clicked(600, 400));
        assert!(button.is_clicked(500, 375));
        assert!(!button.is_clicked(700, 400));
        assert!(!button.is_clicked(600, 425));
    }

    #[test]
    fn tip_sits_above_the_buttons() {
        let play = Button::new("Play", 600, 400);
        let help = Button::new("Help", 600, 400 + HELP_BUTTON_OFFSET);
        let tip = Tip::new(HELP_TEXT, play.rect);
        assert_eq!(tip.rect, Rect::new(200, 80, 800, 280));
        assert!(!tip.rect.collides_with(&play.rect));
        assert!(!tip.rect.collides_with(&help.rect));
    }

    #[test]
    fn tip_lines_stay_inside_panel() {
        let play = Button::new("Play", 600, 400);
        let tip = Tip::new(HELP_TEXT, play.rect);
        assert_eq!(tip.lines.len(), HELP_TEXT.len());
        for line in &tip.lines {
            assert!(line.rect.left() >= tip.rect.left());
            assert!(line.rect.right() <= tip.rect.right());
            assert!(line.rect.top() >= tip.rect.top());
            assert!(line.rect.bottom() <= tip.rect.bottom());
        }
        assert!(tip.lines.windows(2).all(|w| w[0].rect.bottom() < w[1].rect.top()));
    }
}
