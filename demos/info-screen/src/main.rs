//! Info screen demo
//!
//! Standalone hardware demonstration that runs [`info_screen_task`] on a
//! Raspberry Pi Pico 2. Battery sensing is not part of this firmware; a
//! second task sweeps the shared reading between 3.00 V and 4.20 V so the
//! battery line visibly changes on each refresh.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP4        | `SDA_PIN`       |
//! | I2C0 SCL  | GP5        | `SCL_PIN`       |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use wifinder_oled_display_rs::config::{OLED_ADDRESS, SCL_PIN, SDA_PIN};
use wifinder_oled_display_rs::{info_screen_task, DisplayConfig, OledDriver};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Latest battery reading in volts, written by `sweep_task`, read by the
/// OLED task.
static BATTERY_VOLTAGE: StaticCell<Mutex<CriticalSectionRawMutex, f32>> = StaticCell::new();

type OledI2c = I2c<'static, I2C0, i2c::Async>;

/// Monomorphises the generic `info_screen_task` so it can be spawned.
#[embassy_executor::task]
async fn oled_task(
    driver: OledDriver<OledI2c>,
    voltage: &'static Mutex<CriticalSectionRawMutex, f32>,
    config: DisplayConfig,
) {
    info_screen_task(driver, voltage, config).await;
}

/// Steps the reading by 0.05 V every second, wrapping from 4.20 V back to
/// 3.00 V.
#[embassy_executor::task]
async fn sweep_task(voltage: &'static Mutex<CriticalSectionRawMutex, f32>) {
    let mut centivolts: u32 = 300;

    loop {
        *voltage.lock().await = centivolts as f32 / 100.0;

        centivolts += 5;
        if centivolts > 420 {
            centivolts = 300;
        }

        Timer::after(Duration::from_millis(1000)).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Info screen demo starting");
    info!("I2C0 SDA=GP{} SCL=GP{} OLED={:#x}", SDA_PIN, SCL_PIN, OLED_ADDRESS);

    // —— Pin assignments ————————————————————————————————————————————————————
    // Keep in sync with config::SDA_PIN / config::SCL_PIN; embassy-rp pins
    // are typed, so the constants cannot select them.
    // I2C_SDA → GP4  (p.PIN_4)
    // I2C_SCL → GP5  (p.PIN_5)
    // ———————————————————————————————————————————————————————————————————————
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_5, // SCL
        p.PIN_4, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let oled = OledDriver::new(i2c, OLED_ADDRESS);
    let voltage = BATTERY_VOLTAGE.init(Mutex::new(0.0));

    spawner.spawn(oled_task(oled, voltage, DisplayConfig::default())).unwrap();
    spawner.spawn(sweep_task(voltage)).unwrap();

    info!("All tasks spawned");
}
