//! End-to-end tests: controller + buffered driver + elapsed timer
//!
//! These tests run on the host with a recording bus and a manual clock.

use std::cell::Cell;
use std::rc::Rc;

use tm7_core::font::{lookup, FONT_7SEG_DECNUMS, SEG_DP, SEG_G};
use tm7_core::traits::{Clock, DriverError, FromPins, PeriodicTimer};
use tm7_core::{DisplayController, DisplayPins};
use tm7_drivers::segment::{BufferedDriver, SegmentBus, CONTRAST_MAX, CONTRAST_MIN};
use tm7_drivers::timer::ElapsedTimer;

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Clone, Default)]
struct ManualClock(Rc<Cell<u32>>);

impl ManualClock {
    fn advance(&self, ms: u32) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

#[derive(Default)]
struct RecordingBus {
    pins: Option<DisplayPins>,
    probe_error: Option<DriverError>,
    frame: Vec<u8>,
    control: Option<(bool, u8)>,
}

impl SegmentBus for RecordingBus {
    fn probe(&mut self) -> Result<(), DriverError> {
        match self.probe_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn write_segments(&mut self, start: u8, segments: &[u8]) -> Result<(), DriverError> {
        let start = usize::from(start);
        self.frame.resize(start + segments.len(), 0);
        self.frame[start..].copy_from_slice(segments);
        Ok(())
    }

    fn write_control(&mut self, on: bool, contrast: u8) -> Result<(), DriverError> {
        self.control = Some((on, contrast));
        Ok(())
    }
}

impl FromPins for RecordingBus {
    fn from_pins(pins: &DisplayPins) -> Self {
        Self {
            pins: Some(*pins),
            ..Default::default()
        }
    }
}

type Controller = DisplayController<BufferedDriver<RecordingBus>, ElapsedTimer<ManualClock>>;

fn setup(pins: DisplayPins) -> (Controller, ManualClock) {
    let clock = ManualClock::default();
    let driver = BufferedDriver::from_pins(&pins);
    let timer = ElapsedTimer::new(clock.clone(), 0);
    (DisplayController::new(driver, timer), clock)
}

fn masks(text: &str) -> Vec<u8> {
    text.chars().map(|ch| lookup(&FONT_7SEG_DECNUMS, ch)).collect()
}

fn frame(ctl: &Controller) -> &[u8] {
    &ctl.display().bus().frame
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_begin_shows_dashes_at_min_contrast() {
    let (mut ctl, _clock) = setup(DisplayPins::new(2, 3));
    ctl.begin();

    assert_eq!(ctl.display().bus().pins, Some(DisplayPins::new(2, 3)));
    assert_eq!(frame(&ctl), &[SEG_G; 4]);
    assert_eq!(ctl.display().bus().control, Some((true, CONTRAST_MIN)));
    assert!(ctl.is_data_mode());
    assert!(!ctl.timer().is_active());
}

#[test]
fn test_data_mode_renders_value() {
    let (mut ctl, _clock) = setup(DisplayPins::new(2, 3));
    ctl.begin();
    ctl.set_data(23.5);

    let two = lookup(&FONT_7SEG_DECNUMS, '2');
    let three = lookup(&FONT_7SEG_DECNUMS, '3');
    let five = lookup(&FONT_7SEG_DECNUMS, '5');
    assert_eq!(frame(&ctl), &[two, three | SEG_DP, five, 0]);
}

#[test]
fn test_failed_probe_still_ends_on_placeholder() {
    let pins = DisplayPins::new(2, 3);
    let mut bus = RecordingBus::from_pins(&pins);
    bus.probe_error = Some(DriverError::Ack);
    let timer = ElapsedTimer::new(ManualClock::default(), 0);
    let mut ctl = DisplayController::new(BufferedDriver::new(bus, pins.digits), timer);

    ctl.begin();
    assert_eq!(frame(&ctl), &[SEG_G; 4]);
    assert!(ctl.display().is_on());
}

#[test]
fn test_blink_toggles_every_period() {
    let (mut ctl, clock) = setup(DisplayPins::new(2, 3));
    ctl.begin();
    ctl.print_text_blink("Err", 0);
    assert_eq!(ctl.timer().period(), 500);
    assert_eq!(ctl.display().contrast(), CONTRAST_MAX);
    assert!(ctl.display().is_on());

    clock.advance(499);
    ctl.run();
    assert!(ctl.display().is_on());

    clock.advance(1);
    ctl.run();
    assert!(!ctl.display().is_on());

    clock.advance(500);
    ctl.run();
    assert!(ctl.display().is_on());
    assert_eq!(&frame(&ctl)[..3], masks("Err").as_slice());
}

#[test]
fn test_breath_fades_and_stop_restores_min_contrast() {
    let (mut ctl, clock) = setup(DisplayPins::new(2, 3));
    ctl.begin();
    ctl.print_text_breath("on", 1);
    assert_eq!(ctl.display().contrast(), CONTRAST_MAX);
    let on = masks("on");
    assert_eq!(frame(&ctl), &[SEG_G, on[0], on[1], 0]);

    for _ in 0..3 {
        clock.advance(500);
        ctl.run();
    }
    assert_eq!(ctl.display().contrast(), CONTRAST_MAX - 3);

    ctl.breath_stop();
    assert!(!ctl.timer().is_active());
    assert_eq!(ctl.display().contrast(), CONTRAST_MIN);
}

#[test]
fn test_data_mode_stops_running_effects() {
    let (mut ctl, clock) = setup(DisplayPins::new(2, 3).with_digits(6));
    ctl.begin();
    ctl.blink_start();
    ctl.breath_start();

    ctl.set_data_print_on();
    ctl.set_data(-12.25);
    clock.advance(5_000);
    ctl.run();

    assert!(!ctl.timer().is_active());
    assert_eq!(ctl.display().contrast(), CONTRAST_MIN);
    assert_eq!(frame(&ctl).len(), 6);
    assert_eq!(frame(&ctl)[0], SEG_G);
}

#[test]
fn test_error_code_on_six_digits() {
    let (mut ctl, _clock) = setup(DisplayPins::new(2, 3).with_digits(6));
    ctl.begin();
    ctl.print_error(123_456);
    assert_eq!(frame(&ctl), masks("-9999-").as_slice());
}
