//! Compile-time hardware and layout constants.
//!
//! The runtime [`DisplayConfig`](crate::DisplayConfig) defaults to these
//! values; change them here for a hardware revision.

/// OLED display width, in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// OLED display height, in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// I2C SDA pin (RP2350 GPIO number).
pub const SDA_PIN: u8 = 4;

/// I2C SCL pin (RP2350 GPIO number).
pub const SCL_PIN: u8 = 5;

/// 7-bit I2C address of the SSD1306.
pub const OLED_ADDRESS: u8 = 0x3C;

/// Pause between info screen refreshes.
pub const REFRESH_PERIOD_MS: u64 = 2000;

/// Top of the "Scanning..." status line.
pub const STATUS_Y: i32 = 0;

/// Top of the title line.
pub const TITLE_Y: i32 = 20;

/// Top of the battery line.
pub const BATTERY_Y: i32 = 40;
