#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);

    pub const LIGHT_GRAY: Color = Color::new_rgb(230, 230, 230);
    pub const DARK_GRAY: Color = Color::new_rgb(60, 60, 60);
    pub const CHARCOAL: Color = Color::new_rgb(30, 30, 30);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new_rgb(r, g, b)
    }
}
