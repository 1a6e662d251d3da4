//! SSD1306 driver for the info screen, using the `ssd1306` crate in async
//! buffered graphics mode.
//!
//! [`OledDriver`] owns the panel: construction without I2C traffic,
//! explicit async initialisation, drawing into the frame buffer, and the
//! frame commit.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::OledError;
use crate::layout::{render_info_screen, DisplayConfig, InfoScreen};

/// Concrete display type used internally by [`OledDriver`].
pub type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Async driver for the WiFinder's SSD1306 128×64 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] sends the SSD1306 initialisation sequence.
/// 3. [`OledDriver::show()`] clears, draws an [`InfoScreen`] and commits
///    it. Lower-level drawing is available through
///    [`OledDriver::display_mut()`] and [`OledDriver::flush()`].
///
/// # Example
///
/// ```no_run
/// use wifinder_oled_display_rs::{DisplayConfig, InfoScreen, OledDriver};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.show(&InfoScreen::new(3.7), &DisplayConfig::default()).await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    /// Set after a successful `init()` call.
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before any display operations.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Clear the in-memory frame buffer. No I2C traffic.
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Commit the frame buffer to the panel.
    ///
    /// At 400 kHz I2C this takes approximately 20 ms for a full 1024-byte
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called, or [`OledError::Display`] on a bus-level failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// Mutable access to the frame buffer as an `embedded-graphics`
    /// [`DrawTarget`].
    ///
    /// Returns `None` until the driver has been initialised.
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        if self.initialized {
            Some(&mut self.display)
        } else {
            None
        }
    }

    /// Replace the panel contents with `screen`.
    ///
    /// Clears the frame buffer, draws the four info lines and commits the
    /// frame. Nothing is logged and nothing waits; pacing belongs to the
    /// caller.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before [`init()`](Self::init), or
    /// [`OledError::Display`] if drawing or the commit fails.
    pub async fn show(
        &mut self,
        screen: &InfoScreen,
        config: &DisplayConfig,
    ) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.clear_buffer();
        render_info_screen(&mut self.display, screen, config)?;
        self.flush().await
    }

    /// Whether [`init()`](Self::init) has succeeded. No I2C traffic.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
