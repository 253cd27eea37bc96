//! Software rendering into the RGB24 framebuffer handed over by the frontend.
//!
//! Drawing goes through `embedded-graphics`, so everything here is generic over
//! a `DrawTarget<Color = Rgb888>`; [`Canvas`] is the target backed by the
//! frontend's byte buffer.

use alien_invasion_common::Color;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use crate::geometry::Rect;

/// Font used for every label in the game.
pub const FONT: &MonoFont<'static> = &FONT_10X20;

const BYTES_PER_PIXEL: usize = 3;

pub struct Canvas<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(buffer: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            buffer.len(),
            width as usize * height as usize * BYTES_PER_PIXEL
        );
        Self {
            buffer,
            width,
            height,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.index(x, y)?;
        Some(Color::new_rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    fn put(&mut self, index: usize, color: Rgb888) {
        // Frames sized differently from the game surface are clipped.
        if let Some(px) = self.buffer.get_mut(index..index + BYTES_PER_PIXEL) {
            px[0] = color.r();
            px[1] = color.g();
            px[2] = color.b();
        }
    }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(index) = self.index(point.x, point.y) {
                self.put(index, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        let x0 = area.top_left.x;
        let y0 = area.top_left.y;
        for y in y0..y0 + area.size.height as i32 {
            for x in x0..x0 + area.size.width as i32 {
                if let Some(index) = self.index(x, y) {
                    self.put(index, color);
                }
            }
        }
        Ok(())
    }
}

#[inline]
pub fn to_rgb888(color: Color) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

pub fn fill_rect<D>(target: &mut D, rect: Rect, color: Color) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if rect.is_empty() {
        return Ok(());
    }
    let area = Rectangle::new(
        Point::new(rect.x, rect.y),
        Size::new(rect.w as u32, rect.h as u32),
    );
    target.fill_solid(&area, to_rgb888(color))
}

/// Pixel size of a single line of `text` in [`FONT`].
pub fn text_size(text: &str) -> (i32, i32) {
    let glyph = FONT.character_size;
    let spacing = FONT.character_spacing;
    let chars = text.chars().count() as u32;
    let width = if chars == 0 {
        0
    } else {
        chars * glyph.width + (chars - 1) * spacing
    };
    (width as i32, glyph.height as i32)
}

/// A rendered single-line label, laid out by its bounding rect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub rect: Rect,
    pub color: Color,
    pub background: Option<Color>,
}

impl Label {
    pub fn new(text: impl Into<String>, color: Color, background: Option<Color>) -> Self {
        let text = text.into();
        let (w, h) = text_size(&text);
        Self {
            text,
            rect: Rect::new(0, 0, w, h),
            color,
            background,
        }
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let mut builder = MonoTextStyleBuilder::new()
            .font(FONT)
            .text_color(to_rgb888(self.color));
        if let Some(background) = self.background {
            builder = builder.background_color(to_rgb888(background));
        }
        Text::with_baseline(
            &self.text,
            Point::new(self.rect.x, self.rect.y),
            builder.build(),
            Baseline::Top,
        )
        .draw(target)?;
        Ok(())
    }
}

/// Built-in pixel art, one string per row, `#` for a lit pixel.
#[derive(Copy, Clone, Debug)]
pub struct Sprite {
    pub rows: &'static [&'static str],
    pub scale: u32,
    pub color: Color,
}

impl Sprite {
    pub fn width(&self) -> i32 {
        let cols = self.rows.first().map(|row| row.len()).unwrap_or(0);
        (cols as u32 * self.scale) as i32
    }

    pub fn height(&self) -> i32 {
        (self.rows.len() as u32 * self.scale) as i32
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    pub fn draw<D>(&self, target: &mut D, x: i32, y: i32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let color = to_rgb888(self.color);
        let cell = Size::new(self.scale, self.scale);
        let scale = self.scale as i32;
        for (row, bits) in self.rows.iter().enumerate() {
            for (col, bit) in bits.bytes().enumerate() {
                if bit != b'#' {
                    continue;
                }
                let top_left = Point::new(x + col as i32 * scale, y + row as i32 * scale);
                target.fill_solid(&Rectangle::new(top_left, cell), color)?;
            }
        }
        Ok(())
    }
}

pub const SHIP_SPRITE: Sprite = Sprite {
    rows: &[
        "......#......",
        ".....###.....",
        ".....###.....",
        ".###########.",
        "#############",
        "#############",
        "#############",
        "#############",
    ],
    scale: 5,
    color: Color::new_rgb(40, 80, 160),
};

pub const ALIEN_SPRITE: Sprite = Sprite {
    rows: &[
        "..#.....#..",
        "...#...#...",
        "..#######..",
        ".##.###.##.",
        "###########",
        "#.#######.#",
        "#.#.....#.#",
        "...##.##...",
    ],
    scale: 6,
    color: Color::new_rgb(40, 150, 60),
};
