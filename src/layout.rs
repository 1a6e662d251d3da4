//! Info screen layout types and rendering logic.
//!
//! This module defines the [`InfoScreen`] snapshot, the fixed [`InfoLine`]
//! table, the measuring and centring helpers, and the
//! [`render_info_screen`] function that draws a frame using
//! `embedded-graphics`. Nothing here touches the bus or sleeps.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};
use heapless::String;

use crate::config::{
    BATTERY_Y, REFRESH_PERIOD_MS, SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_Y, TITLE_Y,
};

/// Status line shown while the scanner is running.
pub const STATUS_TEXT: &str = "Scanning...";
/// Device name, drawn at [`TextScale::Large`].
pub const TITLE_TEXT: &str = "WiFinder";
/// Credit line pinned to the bottom edge.
pub const DESIGNER_TEXT: &str = "Designer: R Napier";

const BATTERY_PREFIX: &str = "Battery: ";
const BATTERY_SUFFIX: &str = " V";

/// Capacity of the formatted battery line. Large enough for any `f32`
/// printed with two decimals plus the prefix and suffix.
pub const BATTERY_LINE_CAPACITY: usize = 64;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the info screen layout and refresh task.
///
/// [`DisplayConfig::default()`] reproduces the constants in
/// [`config`](crate::config): a 128×64 panel, lines at y = 0 / 20 / 40 with
/// the credit line on the bottom edge, refreshed every 2 s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Top of the status line. Default: 0.
    pub status_y: i32,
    /// Top of the title line. Default: 20.
    pub title_y: i32,
    /// Top of the battery line. Default: 40.
    pub battery_y: i32,
    /// Pause after each committed frame, in milliseconds. Default: 2000.
    pub refresh_period_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_width: SCREEN_WIDTH,
            display_height: SCREEN_HEIGHT,
            status_y: STATUS_Y,
            title_y: TITLE_Y,
            battery_y: BATTERY_Y,
            refresh_period_ms: REFRESH_PERIOD_MS,
        }
    }
}

impl DisplayConfig {
    /// Vertical placement of `line` under this configuration.
    pub fn anchor(&self, line: InfoLine) -> VerticalAnchor {
        match line {
            InfoLine::Status => VerticalAnchor::Top(self.status_y),
            InfoLine::Title => VerticalAnchor::Top(self.title_y),
            InfoLine::Battery => VerticalAnchor::Top(self.battery_y),
            InfoLine::Designer => VerticalAnchor::Bottom,
        }
    }
}

// ── Line table ───────────────────────────────────────────────────────────

/// Font scale for a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextScale {
    /// 6×10 px cells.
    Normal,
    /// 10×20 px cells.
    Large,
}

impl TextScale {
    /// Monospace font backing this scale.
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextScale::Normal => &FONT_6X10,
            TextScale::Large => &FONT_10X20,
        }
    }

    /// Text style drawing lit pixels in this scale's font.
    pub fn style(self) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(self.font(), BinaryColor::On)
    }
}

/// Where a line sits vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Top of the text box at this y coordinate.
    Top(i32),
    /// Bottom of the text box on the bottom edge of the display.
    Bottom,
}

/// The four rows of the info screen, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoLine {
    /// "Scanning..." at the top.
    Status,
    /// Device name, large.
    Title,
    /// Battery voltage readout.
    Battery,
    /// Designer credit on the bottom edge.
    Designer,
}

impl InfoLine {
    /// Every row in display order.
    pub const ALL: [InfoLine; 4] = [
        InfoLine::Status,
        InfoLine::Title,
        InfoLine::Battery,
        InfoLine::Designer,
    ];

    /// Font scale the row is drawn at.
    pub fn scale(self) -> TextScale {
        match self {
            InfoLine::Title => TextScale::Large,
            _ => TextScale::Normal,
        }
    }
}

// ── InfoScreen ───────────────────────────────────────────────────────────

/// Immutable snapshot of everything needed to draw one info screen frame.
///
/// Only the battery line varies between frames; it is formatted once at
/// construction into a fixed-capacity buffer so rendering never allocates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoScreen {
    battery_line: String<BATTERY_LINE_CAPACITY>,
}

impl InfoScreen {
    /// Build the snapshot for a battery reading in volts.
    ///
    /// Any value is accepted, including negatives, NaN and infinities.
    pub fn new(voltage: f32) -> Self {
        Self {
            battery_line: format_battery_line(voltage),
        }
    }

    /// The formatted battery line, e.g. `"Battery: 3.70 V"`.
    ///
    /// This is also the text emitted on the diagnostic channel.
    pub fn battery_line(&self) -> &str {
        self.battery_line.as_str()
    }

    /// Text drawn on `line`.
    pub fn text(&self, line: InfoLine) -> &str {
        match line {
            InfoLine::Status => STATUS_TEXT,
            InfoLine::Title => TITLE_TEXT,
            InfoLine::Battery => self.battery_line(),
            InfoLine::Designer => DESIGNER_TEXT,
        }
    }
}

/// Format a battery reading as `"Battery: <v> V"` with two decimals.
pub fn format_battery_line(voltage: f32) -> String<BATTERY_LINE_CAPACITY> {
    let mut line = String::new();
    // core::fmt::Write, works in no_std without alloc. Cannot overflow at
    // this capacity.
    let _ = write!(line, "{}{:.2}{}", BATTERY_PREFIX, voltage, BATTERY_SUFFIX);
    line
}

// ── Geometry ─────────────────────────────────────────────────────────────

/// Pixel size of `text` drawn at `scale`.
pub fn measure_text(text: &str, scale: TextScale) -> Size {
    Text::with_baseline(text, Point::zero(), scale.style(), Baseline::Top)
        .bounding_box()
        .size
}

/// Left edge that centres a box of `text_width` on a `screen_width` display.
///
/// Odd remainders round the text toward the left edge. Text wider than the
/// screen starts at x = 0 and is clipped on the right.
pub fn centred_x(screen_width: u32, text_width: u32) -> i32 {
    ((screen_width as i32 - text_width as i32) / 2).max(0)
}

/// A line of text with its resolved position and measured size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub text: &'a str,
    pub scale: TextScale,
    /// Top-left corner of the text box.
    pub origin: Point,
    pub size: Size,
}

impl PlacedLine<'_> {
    /// Screen area covered by the line.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, self.size)
    }
}

/// Measure and place `text` for the given scale and anchor.
pub fn place_line<'a>(
    text: &'a str,
    scale: TextScale,
    anchor: VerticalAnchor,
    config: &DisplayConfig,
) -> PlacedLine<'a> {
    let size = measure_text(text, scale);
    let x = centred_x(config.display_width, size.width);
    let y = match anchor {
        VerticalAnchor::Top(y) => y,
        VerticalAnchor::Bottom => config.display_height as i32 - size.height as i32,
    };

    PlacedLine {
        text,
        scale,
        origin: Point::new(x, y),
        size,
    }
}

/// Resolve every row of `screen` to its on-screen position, in display order.
pub fn layout_info_screen<'a>(
    screen: &'a InfoScreen,
    config: &DisplayConfig,
) -> [PlacedLine<'a>; 4] {
    InfoLine::ALL.map(|line| {
        place_line(screen.text(line), line.scale(), config.anchor(line), config)
    })
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Render an [`InfoScreen`] to a display buffer using `embedded-graphics`.
///
/// The caller clears the buffer beforehand and commits it afterwards.
///
/// # Layout
///
/// ```text
/// ┌────────────────────────────┐
/// │        Scanning...         │  ← status_y
/// │                            │
/// │        WiFinder            │  ← title_y (large)
/// │                            │
/// │     Battery: 3.70 V        │  ← battery_y
/// │    Designer: R Napier      │  ← bottom edge
/// └────────────────────────────┘
/// ```
///
/// # Example
///
/// ```no_run
/// # use wifinder_oled_display_rs::layout::{InfoScreen, render_info_screen};
/// # use wifinder_oled_display_rs::DisplayConfig;
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// let screen = InfoScreen::new(3.7);
/// render_info_screen(display, &screen, &DisplayConfig::default()).ok();
/// # }
/// ```
pub fn render_info_screen<D>(
    display: &mut D,
    screen: &InfoScreen,
    config: &DisplayConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for line in layout_info_screen(screen, config) {
        Text::with_baseline(line.text, line.origin, line.scale.style(), Baseline::Top)
            .draw(display)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::primitives::ContainsPoint;

    const W: usize = SCREEN_WIDTH as usize;
    const H: usize = SCREEN_HEIGHT as usize;

    /// Host-side 128×64 monochrome frame buffer.
    struct Framebuffer {
        pixels: [[bool; W]; H],
    }

    impl Framebuffer {
        fn new() -> Self {
            Self {
                pixels: [[false; W]; H],
            }
        }

        fn lit(&self) -> impl Iterator<Item = Point> + '_ {
            self.pixels.iter().enumerate().flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &on)| on)
                    .map(move |(x, _)| Point::new(x as i32, y as i32))
            })
        }
    }

    impl DrawTarget for Framebuffer {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if p.x >= 0 && p.x < W as i32 && p.y >= 0 && p.y < H as i32 {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    impl OriginDimensions for Framebuffer {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    #[test]
    fn battery_line_uses_two_decimals() {
        assert_eq!(format_battery_line(3.7).as_str(), "Battery: 3.70 V");
        assert_eq!(format_battery_line(4.0).as_str(), "Battery: 4.00 V");
        assert_eq!(format_battery_line(3.14159).as_str(), "Battery: 3.14 V");
        assert_eq!(format_battery_line(-1.5).as_str(), "Battery: -1.50 V");
        assert_eq!(format_battery_line(0.0).as_str(), "Battery: 0.00 V");
        // -0.005f32 is stored as -0.004999999888..., so it rounds to -0.00.
        assert_eq!(format_battery_line(-0.005).as_str(), "Battery: -0.00 V");
    }

    #[test]
    fn battery_line_accepts_non_finite_values() {
        assert_eq!(format_battery_line(f32::NAN).as_str(), "Battery: NaN V");
        assert_eq!(format_battery_line(f32::INFINITY).as_str(), "Battery: inf V");
    }

    #[test]
    fn battery_line_fits_extreme_values() {
        let line = format_battery_line(f32::MIN);
        assert!(line.starts_with("Battery: -340282"));
        assert!(line.ends_with(".00 V"));
    }

    #[test]
    fn screen_texts_in_display_order() {
        let screen = InfoScreen::new(3.7);
        let texts = InfoLine::ALL.map(|l| screen.text(l));
        assert_eq!(
            texts,
            ["Scanning...", "WiFinder", "Battery: 3.70 V", "Designer: R Napier"]
        );
        assert_eq!(screen.battery_line(), "Battery: 3.70 V");
    }

    #[test]
    fn only_title_is_large() {
        for line in InfoLine::ALL {
            let expected = if line == InfoLine::Title {
                TextScale::Large
            } else {
                TextScale::Normal
            };
            assert_eq!(line.scale(), expected);
        }
    }

    #[test]
    fn measure_text_is_cell_size_times_length() {
        assert_eq!(measure_text("Scanning...", TextScale::Normal), Size::new(66, 10));
        assert_eq!(measure_text("WiFinder", TextScale::Large), Size::new(80, 20));
    }

    #[test]
    fn centred_x_floors_remainder() {
        assert_eq!(centred_x(128, 66), 31);
        assert_eq!(centred_x(128, 65), 31);
        assert_eq!(centred_x(128, 127), 0);
        assert_eq!(centred_x(128, 128), 0);
        assert_eq!(centred_x(128, 0), 64);
    }

    #[test]
    fn centred_x_clamps_wide_text_to_left_edge() {
        assert_eq!(centred_x(128, 129), 0);
        assert_eq!(centred_x(128, 300), 0);
    }

    #[test]
    fn default_layout_positions() {
        let screen = InfoScreen::new(3.7);
        let lines = layout_info_screen(&screen, &DisplayConfig::default());

        assert_eq!(lines[0].origin, Point::new(31, 0));
        assert_eq!(lines[1].origin, Point::new(24, 20));
        // "Battery: 3.70 V" is 15 cells = 90 px.
        assert_eq!(lines[2].origin, Point::new(19, 40));
        // 18 cells = 108 px, bottom edge at 64.
        assert_eq!(lines[3].origin, Point::new(10, 54));
    }

    #[test]
    fn bottom_line_touches_bottom_edge_at_any_scale() {
        let config = DisplayConfig::default();
        for scale in [TextScale::Normal, TextScale::Large] {
            let line = place_line(DESIGNER_TEXT, scale, VerticalAnchor::Bottom, &config);
            let bottom = line.origin.y + line.size.height as i32;
            assert_eq!(bottom, config.display_height as i32);
        }
    }

    #[test]
    fn layout_follows_config() {
        let config = DisplayConfig {
            display_width: 96,
            display_height: 32,
            status_y: 2,
            title_y: 4,
            battery_y: 6,
            ..DisplayConfig::default()
        };
        let screen = InfoScreen::new(4.0);
        let lines = layout_info_screen(&screen, &config);

        assert_eq!(lines[0].origin, Point::new((96 - 66) / 2, 2));
        assert_eq!(lines[1].origin, Point::new((96 - 80) / 2, 4));
        assert_eq!(lines[2].origin.y, 6);
        assert_eq!(lines[3].origin, Point::new(0, 22));
    }

    #[test]
    fn wide_battery_line_is_clamped() {
        let screen = InfoScreen::new(f32::MAX);
        let lines = layout_info_screen(&screen, &DisplayConfig::default());
        assert!(lines[2].size.width > SCREEN_WIDTH);
        assert_eq!(lines[2].origin.x, 0);
    }

    #[test]
    fn render_draws_every_line_inside_its_box() {
        let screen = InfoScreen::new(3.7);
        let config = DisplayConfig::default();
        let mut fb = Framebuffer::new();

        render_info_screen(&mut fb, &screen, &config).unwrap();

        let lines = layout_info_screen(&screen, &config);
        for p in fb.lit() {
            assert!(
                lines.iter().any(|l| l.bounds().contains(p)),
                "pixel {:?} outside every line",
                p
            );
        }
        for line in &lines {
            assert!(fb.lit().any(|p| line.bounds().contains(p)), "{} not drawn", line.text);
        }
    }

    #[test]
    fn render_is_deterministic() {
        let screen = InfoScreen::new(4.2);
        let config = DisplayConfig::default();
        let mut a = Framebuffer::new();
        let mut b = Framebuffer::new();

        render_info_screen(&mut a, &screen, &config).unwrap();
        render_info_screen(&mut b, &screen, &config).unwrap();

        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.display_width, 128);
        assert_eq!(c.display_height, 64);
        assert_eq!(c.status_y, 0);
        assert_eq!(c.title_y, 20);
        assert_eq!(c.battery_y, 40);
        assert_eq!(c.refresh_period_ms, 2000);
        assert_eq!(c.anchor(InfoLine::Designer), VerticalAnchor::Bottom);
    }
}
