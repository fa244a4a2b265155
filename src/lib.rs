#![no_std]

//! Door-driven closet light fade control.
//!
//! A hardware timer compare interrupt feeds a [`Ticker`], which coalesces
//! fine-grained interrupts into a millisecond-scale heartbeat. The main loop
//! polls a [`FadeController`], which consumes one heartbeat at a time, reads
//! the door switch and walks a brightness index up (door open) or down (door
//! closed) through a fixed lookup table, writing the result to a PWM channel.
//!
//! Pin and timer register setup, watchdog servicing and interrupt enabling
//! stay in the firmware; this crate reaches the hardware only through
//! [`DoorSensor`] and [`PwmDriver`].
//!
//! # Usage
//!
//! ```ignore
//! // 48 kHz compare interrupt, 1 ms heartbeat
//! static TICKER: Ticker = Ticker::from_rates(48_000, Duration::from_millis(1));
//!
//! // In the timer compare ISR:
//! //     TICKER.on_compare_interrupt();
//!
//! let door = NormallyOpenSwitch::new(|| door_pin.is_high());
//! let mut light = FadeController::new(door, pwm, FadeConfig::default());
//!
//! loop {
//!     watchdog.feed();
//!     light.poll(&TICKER);
//! }
//! ```

pub mod fade;
pub mod table;
pub mod ticker;

pub use fade::{FadeConfig, FadeController, PollOutcome};
pub use table::FADE_TABLE;
pub use ticker::Ticker;

pub use embassy_time::Duration;

/// Abstract door sensor trait
///
/// Implement this trait to support different hardware platforms.
/// Every call must perform a fresh read of the sensor; the fade
/// controller never caches door state between steps.
pub trait DoorSensor {
    /// Returns true if the door is open
    fn is_open(&mut self) -> bool;
}

/// Abstract PWM channel trait
///
/// Covers the two hardware operations the fade controller needs: gating
/// the output pin drive and writing the compare (duty) register.
pub trait PwmDriver {
    /// Enable or disable the output pin drive
    ///
    /// Disabled means the pin is not driven at all, so a duty of zero
    /// cannot leave a residual glow from hardware leakage.
    fn set_enabled(&mut self, enabled: bool);

    /// Write the duty cycle to the compare register
    fn set_duty(&mut self, duty: u8);
}

/// Door sensor adapter for a normally-open switch on a pull-up input.
///
/// With the pull-up enabled the pin reads high while the switch is held
/// closed (door shut), so the electrical level is inverted.
pub struct NormallyOpenSwitch<F: FnMut() -> bool> {
    read_level: F,
}

impl<F: FnMut() -> bool> NormallyOpenSwitch<F> {
    /// Create a new adapter from a raw pin-level read (true = high)
    pub const fn new(read_level: F) -> Self {
        Self { read_level }
    }
}

impl<F: FnMut() -> bool> DoorSensor for NormallyOpenSwitch<F> {
    fn is_open(&mut self) -> bool {
        !(self.read_level)()
    }
}
