//! Info screen for the WiFinder scanner on an SSD1306 (128×64) OLED,
//! using Embassy.
//!
//! This crate provides the pure [`layout`] of the four-line info screen
//! ("Scanning...", title, battery voltage, designer credit), an
//! [`OledDriver`] that wraps the [`ssd1306`] crate in async
//! buffered-graphics mode, and [`info_screen_task`], a refresh loop that
//! commits a frame, logs the battery line and waits two seconds.
//!
//! # Quick Start
//!
//! ```ignore
//! use wifinder_oled_display_rs::{info_screen_task, DisplayConfig, OledDriver};
//!
//! // In your Embassy main:
//! let oled = OledDriver::new(i2c, OLED_ADDRESS);
//! spawner.spawn(oled_task(oled, battery, DisplayConfig::default())).unwrap();
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn oled_task(
//!     driver: OledDriver<MyI2cType>,
//!     battery: &'static Mutex<CriticalSectionRawMutex, f32>,
//!     config: DisplayConfig,
//! ) {
//!     info_screen_task(driver, battery, config).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** *(default)* — structured logging via [`defmt`]; also the
//!   diagnostic channel for the battery line.
//! - **`task`** — [`info_screen_task`] and [`show_info_screen`], pulling in
//!   `embassy-sync` and `embassy-time`.

#![no_std]

pub mod config;
#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod layout;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(feature = "task")]
pub use display_task::{info_screen_task, show_info_screen};
pub use driver::OledDriver;
pub use error::OledError;
pub use layout::{render_info_screen, DisplayConfig, InfoLine, InfoScreen, TextScale};
