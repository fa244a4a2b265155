//! Coarse heartbeat derived from a fine timer compare interrupt.
//!
//! The PWM timer fires far faster than the fade needs to move, so the ISR
//! counts compare interrupts and raises a single pending-tick flag once per
//! configured interval. Interrupt and main-loop contexts share the state
//! through critical sections.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Duration;

/// Tick source shared between a timer ISR and the polling main loop.
///
/// The ISR calls [`on_compare_interrupt`](Ticker::on_compare_interrupt),
/// the main loop calls [`try_consume`](Ticker::try_consume). At most one
/// tick is ever pending: intervals that elapse while the flag is still set
/// are dropped, not queued. Under a stalled main loop the fade therefore
/// slows down rather than catching up in a burst.
///
/// Const-constructible so it can live in a `static` reachable from the ISR.
pub struct Ticker {
    interrupts_per_tick: u32,
    /// Written only by the interrupt context
    sub_ticks: Mutex<Cell<u32>>,
    /// Set by the interrupt context, cleared by the main loop
    pending: Mutex<Cell<bool>>,
}

impl Ticker {
    /// Create a ticker that raises one tick every `interrupts_per_tick`
    /// compare interrupts.
    pub const fn new(interrupts_per_tick: u32) -> Self {
        assert!(interrupts_per_tick > 0);
        Self {
            interrupts_per_tick,
            sub_ticks: Mutex::new(Cell::new(0)),
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Create a ticker from the compare-interrupt rate and the desired
    /// tick period.
    ///
    /// Panics at construction if the period is shorter than one interrupt.
    pub const fn from_rates(interrupt_hz: u32, tick: Duration) -> Self {
        let per_tick = (interrupt_hz as u64 * tick.as_millis()) / 1000;
        assert!(per_tick > 0);
        assert!(per_tick <= u32::MAX as u64);
        Self::new(per_tick as u32)
    }

    /// Advance the sub-tick counter from the timer compare ISR.
    ///
    /// O(1) and side-effect-free except for the counter and the pending
    /// flag. Raising the flag while it is already set is a no-op.
    pub fn on_compare_interrupt(&self) {
        critical_section::with(|cs| {
            let sub_ticks = self.sub_ticks.borrow(cs);
            let elapsed = sub_ticks.get() + 1;
            if elapsed < self.interrupts_per_tick {
                sub_ticks.set(elapsed);
                return;
            }
            sub_ticks.set(0);
            self.pending.borrow(cs).set(true);
        });
    }

    /// Consume the pending tick, if any.
    ///
    /// Returns true exactly once per raised tick; the flag is cleared as
    /// part of the same critical section.
    pub fn try_consume(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).replace(false))
    }
}
