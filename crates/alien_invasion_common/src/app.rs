use crate::key::{Key, MouseButton};

/// A game the frontend can drive one frame at a time.
///
/// `update` both advances the game and draws it into `screen`, an RGB24
/// framebuffer of `width() * height() * 3` bytes.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    /// `x` and `y` are in framebuffer coordinates.
    fn handle_mouse_event(&mut self, button: MouseButton, x: i32, y: i32);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn cursor_visible(&self) -> bool {
        true
    }

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
