//! Fade state machine driven by the tick heartbeat and the door switch.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::table::{FADE_TABLE, is_nondecreasing};
use crate::ticker::Ticker;
use crate::{DoorSensor, PwmDriver};

/// Default pacing: one fade step per 4 consumed ticks.
pub const DEFAULT_STEP_TICKS: u16 = 4;

/// Configuration for the fade controller
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig {
    /// Consumed ticks per fade step
    pub step_ticks: u16,
    /// Brightness lookup table, ascending from off to full duty
    pub table: &'static [u8],
}

impl FadeConfig {
    pub const fn new(step_ticks: u16, table: &'static [u8]) -> Self {
        Self { step_ticks, table }
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_TICKS, &FADE_TABLE)
    }
}

/// What a single `poll` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No tick was pending; nothing changed
    Idle,
    /// A tick was consumed but the step pacing window has not elapsed yet
    Pacing,
    /// A full fade step completed and the PWM output was updated
    Step {
        /// Fade index after the step
        index: usize,
        /// Duty written to the PWM channel
        duty: u8,
    },
}

/// Fade controller - walks the brightness table on door state.
///
/// Owns the fade index and the step pacing counter; the only state it
/// shares with the interrupt context is the [`Ticker`] passed to
/// [`poll`](FadeController::poll). Starts fully off (index 0).
pub struct FadeController<D: DoorSensor, P: PwmDriver> {
    sensor: D,
    pwm: P,
    step_ticks: u16,
    table: &'static [u8],

    // Internal state, main-loop context only
    index: usize,
    step_delay: u16,
}

impl<D: DoorSensor, P: PwmDriver> FadeController<D, P> {
    /// Create a new fade controller.
    ///
    /// Panics if the table is empty or steps down anywhere, or if
    /// `step_ticks` is zero. These are build-time configuration mistakes;
    /// nothing in the run loop can fail.
    pub fn new(sensor: D, pwm: P, config: FadeConfig) -> Self {
        assert!(config.step_ticks > 0);
        assert!(!config.table.is_empty());
        assert!(is_nondecreasing(config.table));
        Self {
            sensor,
            pwm,
            step_ticks: config.step_ticks,
            table: config.table,
            index: 0,
            step_delay: 0,
        }
    }

    /// Run one main-loop iteration.
    ///
    /// Consumes at most one pending tick. Every `step_ticks` consumed
    /// ticks the controller reads the door, moves the fade index one
    /// position (clamped to the table ends) and rewrites the PWM output.
    /// The output drive is disabled whenever the duty is zero, so a closed
    /// door ends with the pin fully released.
    ///
    /// Without a pending tick this is observably a no-op.
    pub fn poll(&mut self, ticker: &Ticker) -> PollOutcome {
        if !ticker.try_consume() {
            return PollOutcome::Idle;
        }

        // Pace the fade independently of the tick rate
        self.step_delay += 1;
        if self.step_delay < self.step_ticks {
            return PollOutcome::Pacing;
        }
        self.step_delay = 0;

        // Fresh read; the door state at tick consumption is what counts
        if self.sensor.is_open() {
            if self.index < self.table.len() - 1 {
                self.index += 1;
            }
        } else {
            if self.index > 0 {
                self.index -= 1;
            }
        }

        let duty = self.table[self.index];
        self.pwm.set_enabled(duty > 0);
        self.pwm.set_duty(duty);

        #[cfg(feature = "esp32-log")]
        println!("fade step: index={} duty={}", self.index, duty);

        PollOutcome::Step {
            index: self.index,
            duty,
        }
    }

    /// Current fade index
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Duty value for the current fade index
    pub const fn duty(&self) -> u8 {
        self.table[self.index]
    }
}
