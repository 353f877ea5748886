//! Application display controller
//!
//! Wraps a [`SegmentDriver`] with the behaviour an application usually
//! wants from a small numeric display:
//!
//! - blink and breath effects timed by a cooperative [`PeriodicTimer`]
//! - error codes framed by dashes (`-07-`), clamped to what fits
//! - a data mode that re-renders a value whenever it is updated
//!
//! The host calls [`DisplayController::begin`] once and then
//! [`DisplayController::run`] on every iteration of its main loop.

use core::fmt::Write;

use heapless::String;

use crate::config::{DisplayPins, MAX_DIGITS, PERIOD_BLINK_MS, TEXT_CAPACITY};
use crate::font::FONT_7SEG_DECNUMS;
use crate::result::ResultCode;
use crate::traits::{DriverError, FromPins, PeriodicTimer, SegmentDriver};

/// Text buffer for rendered messages
type Text = String<TEXT_CAPACITY>;

/// Largest error code that fits between the two framing dashes
///
/// `digits - 2` decimal places remain for the code itself.
pub fn error_max(digits: u8) -> u32 {
    let places = u32::from(digits.saturating_sub(2));
    10u32.checked_pow(places).map_or(u32::MAX, |limit| limit - 1)
}

/// Display controller with blink/breath effects and data mode
pub struct DisplayController<D, T> {
    display: D,
    timer: T,
    /// Digit count, at most `MAX_DIGITS` so every frame fits in `Text`
    digits: u8,
    /// Largest renderable error code
    err_max: u32,
    /// Last value set for data mode
    data: f32,
    data_mode: bool,
    blink: bool,
    breath: bool,
}

impl<D: SegmentDriver, T: PeriodicTimer> DisplayController<D, T> {
    /// Create a controller owning `display` and `timer`
    ///
    /// The timer is set to the effect period and halted. No display I/O
    /// happens until [`begin`](Self::begin). A driver reporting more than
    /// `MAX_DIGITS` digits is driven as a `MAX_DIGITS` display.
    pub fn new(display: D, mut timer: T) -> Self {
        timer.set_period(PERIOD_BLINK_MS);
        timer.halt();
        let digits = display.digits().min(MAX_DIGITS);
        Self {
            display,
            timer,
            digits,
            err_max: error_max(digits),
            data: 0.0,
            data_mode: false,
            blink: false,
            breath: false,
        }
    }

    /// Initialise the display and show the placeholder
    ///
    /// A driver failure is shown as an error code. The placeholder is
    /// painted right after it, so the code is only visible for the time
    /// the font installation takes.
    pub fn begin(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("display begin: {} digits", self.digits);

        let init = self
            .display
            .begin()
            .and_then(|()| self.display.set_contrast_min());
        if let Err(err) = init {
            let code = ResultCode::from(err);
            #[cfg(feature = "defmt")]
            defmt::warn!("display init failed: {} -> {}", err, code);
            self.print_error(u32::from(code.code()));
        }
        self.display.set_font(&FONT_7SEG_DECNUMS);
        self.print_init();
        self.set_data_print_on();
    }

    /// Apply active effects when the effect period has elapsed
    ///
    /// Must be called frequently; never blocks.
    pub fn run(&mut self) {
        if !self.timer.poll() {
            return;
        }
        if self.blink {
            unchecked("toggle", self.display.display_toggle());
        }
        if self.breath {
            unchecked("breath", self.display.display_breath());
        }
    }

    /// Start blinking
    pub fn blink_start(&mut self) {
        self.blink = true;
        self.time_start();
    }

    /// Stop blinking
    pub fn blink_stop(&mut self) {
        self.blink = false;
        self.time_stop();
    }

    /// Start breathing
    pub fn breath_start(&mut self) {
        self.breath = true;
        self.time_start();
    }

    /// Stop breathing
    pub fn breath_stop(&mut self) {
        self.breath = false;
        self.time_stop();
    }

    /// Show `msg` starting at `digit`
    pub fn print_text(&mut self, msg: &str, digit: u8) {
        unchecked("on", self.display.display_on());
        self.display.print_text(msg, digit);
        unchecked("flush", self.display.display());
    }

    /// Show `msg` starting at `digit` and start blinking
    pub fn print_text_blink(&mut self, msg: &str, digit: u8) {
        self.blink_start();
        self.display.print_text(msg, digit);
        unchecked("flush", self.display.display());
    }

    /// Show `msg` starting at `digit` and start breathing
    pub fn print_text_breath(&mut self, msg: &str, digit: u8) {
        self.breath_start();
        self.display.print_text(msg, digit);
        unchecked("flush", self.display.display());
    }

    /// Show an error code framed by dashes
    ///
    /// Codes above [`err_max`](Self::err_max) are shown as `err_max`.
    pub fn print_error(&mut self, err: u32) {
        let err = err.min(self.err_max);
        let width = usize::from(self.digits.saturating_sub(2));
        let mut msg = Text::new();
        let _ = write!(msg, "-{:0width$}-", err, width = width);
        self.print_text(&msg, 0);
    }

    /// Stop effects and fill every digit with a dash
    pub fn print_init(&mut self) {
        let mut msg = Text::new();
        for _ in 0..self.digits {
            let _ = msg.push('-');
        }
        self.breath_stop();
        self.blink_stop();
        self.print_text(&msg, 0);
    }

    /// Show the stored value with one decimal place
    pub fn print_data(&mut self) {
        let mut msg = Text::new();
        let _ = write!(msg, "{:.1}", self.data);
        self.print_text(&msg, 0);
    }

    /// Enter data mode, stopping both effects
    pub fn set_data_print_on(&mut self) {
        self.breath_stop();
        self.blink_stop();
        self.data_mode = true;
    }

    /// Leave data mode; effects are left as they are
    pub fn set_data_print_off(&mut self) {
        self.data_mode = false;
    }

    /// Store a value, rendering it immediately in data mode
    pub fn set_data(&mut self, data: f32) {
        self.data = data;
        if self.data_mode {
            self.print_data();
        }
    }

    /// Underlying display driver
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the underlying display driver
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Effect timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Largest error code [`print_error`](Self::print_error) shows unclamped
    pub fn err_max(&self) -> u32 {
        self.err_max
    }

    /// Digit count the controller renders for
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Last value passed to [`set_data`](Self::set_data)
    pub fn data(&self) -> f32 {
        self.data
    }

    /// Check if values are rendered as they are set
    pub fn is_data_mode(&self) -> bool {
        self.data_mode
    }

    /// Check if the blink effect is running
    pub fn is_blinking(&self) -> bool {
        self.blink
    }

    /// Check if the breath effect is running
    pub fn is_breathing(&self) -> bool {
        self.breath
    }

    fn time_start(&mut self) {
        if !self.timer.is_active() {
            self.timer.resume();
            unchecked("contrast max", self.display.set_contrast_max());
            #[cfg(feature = "defmt")]
            defmt::debug!("effect timer resumed");
        }
    }

    fn time_stop(&mut self) {
        if self.timer.is_active() && !self.blink && !self.breath {
            self.timer.halt();
            unchecked("contrast min", self.display.set_contrast_min());
            #[cfg(feature = "defmt")]
            defmt::debug!("effect timer halted");
        }
    }
}

impl<D, T> DisplayController<D, T>
where
    D: SegmentDriver + FromPins,
    T: PeriodicTimer + Default,
{
    /// Build the driver from a pin configuration and create the controller
    pub fn from_pins(pins: DisplayPins) -> Self {
        Self::new(D::from_pins(&pins), T::default())
    }
}

/// Driver calls outside `begin` are not acted upon, only logged
#[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
fn unchecked(op: &'static str, result: Result<(), DriverError>) {
    if let Err(err) = result {
        #[cfg(feature = "defmt")]
        defmt::warn!("display {=str} failed: {}", op, err);
    }
}
