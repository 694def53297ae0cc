use log::debug;
use sdl2::pixels::PixelFormatEnum;
use thiserror::Error;

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::FrameBuffer;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl error: {0}")]
    Sdl(String),
}

fn sdl_error(e: impl ToString) -> DisplayError {
    DisplayError::Sdl(e.to_string())
}

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Each pixel of a FrameBuffer is either 0 or all ones, so a frame can be uploaded as-is
/// as a 32 bits per pixel texture which SDL2 stretches over the window.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(sdl_error)?;
        let window = video_subsystem
            .window(
                "Emu-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(sdl_error)?;
        let canvas = window.into_canvas().build().map_err(sdl_error)?;
        debug!("opened {}x scaled window", scale);

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of bytes that represent concatenated rows of pixels,
    /// here 4 bytes (RGBA) per pixel in native byte order.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame.iter().flat_map(|pixel| pixel.to_ne_bytes()).collect()
    }

    /// Uploads the FrameBuffer as an SDL2 RGBA8888 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    /// * `pitch` the number of bytes in one row of `frame`
    pub fn update(&mut self, frame: &FrameBuffer, pitch: usize) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA8888,
                self.width as u32,
                self.height as u32,
            )
            .map_err(sdl_error)?;

        texture
            .update(None, &Display::frame_to_sdl_texture(frame), pitch)
            .map_err(sdl_error)?;

        self.canvas.clear();
        self.canvas.copy(&texture, None, None).map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu8_core::constants::{FRAME_PITCH, PIXEL_ON};

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = [0; DISPLAY_WIDTH * DISPLAY_HEIGHT];
        frame[1] = PIXEL_ON;
        frame[DISPLAY_WIDTH] = PIXEL_ON;
        let texture = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 8192];
        expected[4..8].copy_from_slice(&[255, 255, 255, 255]);
        expected[FRAME_PITCH..FRAME_PITCH + 4].copy_from_slice(&[255, 255, 255, 255]);

        assert_eq!(texture, expected);
    }
}
