//! Info screen refresh task.
//!
//! [`info_screen_task`] owns the [`OledDriver`] and repaints the info
//! screen from a shared battery reading, writing each committed battery
//! line to the diagnostic log and then pausing for
//! [`DisplayConfig::refresh_period_ms`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::I2c;

use crate::driver::OledDriver;
use crate::error::OledError;
use crate::layout::{DisplayConfig, InfoScreen};

/// Draw and commit the info screen for `voltage`.
///
/// Returns the committed [`InfoScreen`] so the caller can emit its battery
/// line after the frame reached the panel.
///
/// # Errors
///
/// Propagates [`OledDriver::show()`] failures.
pub async fn show_info_screen<I2C>(
    driver: &mut OledDriver<I2C>,
    voltage: f32,
    config: &DisplayConfig,
) -> Result<InfoScreen, OledError>
where
    I2C: I2c,
{
    let screen = InfoScreen::new(voltage);
    driver.show(&screen, config).await?;
    Ok(screen)
}

/// Periodic info screen loop.
///
/// This is a regular `async fn` — **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn oled_task(
///     driver: OledDriver<MyConcreteI2cType>,
///     voltage: &'static Mutex<CriticalSectionRawMutex, f32>,
///     config: DisplayConfig,
/// ) {
///     info_screen_task(driver, voltage, config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the display hardware.
/// 2. Loop:
///    - Copy the current voltage out of the mutex.
///    - Clear, render and commit the frame.
///    - On success, log the battery line once.
///    - Sleep for `config.refresh_period_ms`, whether or not the frame
///      was committed.
///
/// # Errors
///
/// * Initialisation failure: logs the error and **returns** (task exits).
/// * Render / flush failure: logs the error and waits for the next cycle.
#[allow(clippy::needless_pass_by_value)] // config is small and consumed
pub async fn info_screen_task<I2C>(
    mut driver: OledDriver<I2C>,
    voltage: &'static Mutex<CriticalSectionRawMutex, f32>,
    config: DisplayConfig,
) where
    I2C: I2c,
{
    if let Err(_e) = driver.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED init failed: {}", _e);
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("OLED initialised");

    let period = Duration::from_millis(config.refresh_period_ms);

    loop {
        let reading = *voltage.lock().await;

        match show_info_screen(&mut driver, reading, &config).await {
            Ok(_screen) => {
                #[cfg(feature = "defmt")]
                defmt::info!("{=str}", _screen.battery_line());
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Info screen refresh failed: {}", _e);
            }
        }

        Timer::after(period).await;
    }
}
