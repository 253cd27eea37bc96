use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use std::time::{Duration, Instant};
use typed_builder::TypedBuilder;

pub use alien_invasion_common;
pub use alien_invasion_common::App;
pub use sdl2;

use alien_invasion_common::{Key, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    #[builder(default = 1)]
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    /// Target frame time, ~60 FPS by default.
    #[builder(default = Duration::from_micros(16_667))]
    pub frame_time: Duration,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            frame_time,
        } = sdl_init_info;
        let scale = scale.max(1);

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let (window_width, window_height) = window_size(width, height, scale)?;
        let window = video_subsystem
            .window(&title, window_width, window_height)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state =
            vec![0u8; width as usize * height as usize * color_size as usize];
        let mouse = sdl_context.mouse();
        let mut cursor_visible = app.cursor_visible();
        mouse.show_cursor(cursor_visible);

        app.init();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    Event::MouseButtonDown {
                        mouse_btn, x, y, ..
                    } => {
                        let (x, y) = to_logical(x, y, scale);
                        app.handle_mouse_event(map_mouse_button(mouse_btn), x, y);
                    }
                    _ => {}
                }
            }

            if app.cursor_visible() != cursor_visible {
                cursor_visible = app.cursor_visible();
                mouse.show_cursor(cursor_visible);
            }

            app.update(&mut screen_state);

            texture.update(None, &screen_state, width as usize * color_size as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

pub fn window_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32)> {
    match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(anyhow!("window {width}x{height} at scale {scale} is too large")),
    }
}

/// Window coordinates to framebuffer coordinates.
pub fn to_logical(x: i32, y: i32, scale: u32) -> (i32, i32) {
    let scale = scale.max(1) as i32;
    (x / scale, y / scale)
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}

pub fn map_mouse_button(button: sdl2::mouse::MouseButton) -> MouseButton {
    match button {
        sdl2::mouse::MouseButton::Left => MouseButton::Left,
        sdl2::mouse::MouseButton::Middle => MouseButton::Middle,
        sdl2::mouse::MouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}
