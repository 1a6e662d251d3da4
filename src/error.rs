//! Error types for the info screen driver.

use core::fmt;

use display_interface::DisplayError;

/// Errors that can occur while driving the OLED.
///
/// The `ssd1306` crate folds I2C bus errors into [`DisplayError`], so this
/// enum is non-generic.
#[derive(Debug)]
pub enum OledError {
    /// Drawing or bus failure reported by the display interface.
    Display(DisplayError),
    /// The panel did not accept the initialisation sequence.
    InitializationFailed,
    /// A frame was drawn or committed before
    /// [`OledDriver::init()`](crate::OledDriver::init).
    NotInitialized,
}

// Allow `?` on ssd1306 draw and flush results.
impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Display(e) => write!(f, "Display interface error: {:?}", e),
            OledError::InitializationFailed => write!(f, "OLED initialization failed"),
            OledError::NotInitialized => write!(f, "OLED not initialized"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_e) => defmt::write!(f, "Display interface error"),
            OledError::InitializationFailed => defmt::write!(f, "Initialization failed"),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
        }
    }
}
