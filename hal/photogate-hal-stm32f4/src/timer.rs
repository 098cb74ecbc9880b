//! General-purpose timers for STM32F4
//!
//! - TIM4 paces the display multiplexer: update event per digit, compare
//!   channel 1 event to blank it.
//! - TIM3 is the stopwatch tick. It is started, stopped and rewound by the
//!   stopwatch through [`TickTimer`].
//!
//! Both are programmed with update-request source "counter only", so a
//! software update (UG) reloads the counter without setting UIF.
//!
//! The interrupt side reads and clears the status flags through
//! [`display_event`] and [`tick_event`], which need no handle since the
//! timer objects live inside the dispatcher.

use embassy_stm32::pac;
use embassy_stm32::pac::timer::{vals, TimGp16};
use photogate_core::config::TimerConfig;
use photogate_core::state::Event;
use photogate_core::traits::TickTimer;

/// Status flag bits
const UIF: u32 = 1 << 0;
const CC1IF: u32 = 1 << 1;

/// Program prescaler, reload and compare; the counter is left stopped
fn program(tim: TimGp16, config: &TimerConfig) {
    tim.cr1().write(|w| w.set_urs(vals::Urs::COUNTER_ONLY));
    tim.psc().write_value(config.prescaler);
    tim.arr().write(|w| w.set_arr(config.reload));
    if let Some(compare) = config.compare {
        tim.ccr(0).write(|w| w.set_ccr(compare));
    }

    // Load the shadow registers and zero the prescaler counter
    tim.egr().write(|w| w.set_ug(true));
    clear_flags(tim, UIF | CC1IF);
}

/// Clear rc_w0 status flags without touching the others
fn clear_flags(tim: TimGp16, mask: u32) {
    tim.sr().write(|w| w.0 = !mask);
}

/// TIM4 display refresh timer
pub struct DisplayTimer {
    _private: (),
}

impl DisplayTimer {
    /// Program TIM4 with update and compare interrupts enabled
    pub fn new(config: &TimerConfig) -> Self {
        let tim = pac::TIM4;
        program(tim, config);
        tim.dier().write(|w| {
            w.set_uie(true);
            w.set_ccie(0, config.compare.is_some());
        });
        Self { _private: () }
    }

    /// Start counting with a buffered reload register
    pub fn start(&mut self) {
        pac::TIM4.cr1().modify(|w| {
            w.set_arpe(true);
            w.set_cen(true);
        });
    }
}

/// Take the pending TIM4 events
///
/// Only flags whose interrupt is enabled count. Returns `None` if nothing
/// was pending.
pub fn display_event() -> Option<Event> {
    let tim = pac::TIM4;
    let sr = tim.sr().read();
    let dier = tim.dier().read();

    let update = sr.uif() && dier.uie();
    let compare = sr.ccif(0) && dier.ccie(0);

    let mut mask = 0;
    if update {
        mask |= UIF;
    }
    if compare {
        mask |= CC1IF;
    }
    if mask == 0 {
        return None;
    }
    clear_flags(tim, mask);

    Some(Event::DisplayTick { update, compare })
}

/// TIM3 stopwatch tick timer
pub struct StopwatchTimer {
    _private: (),
}

impl StopwatchTimer {
    /// Program TIM3 with the update interrupt enabled, counter stopped
    pub fn new(config: &TimerConfig) -> Self {
        let tim = pac::TIM3;
        program(tim, config);
        tim.dier().write(|w| w.set_uie(true));
        Self { _private: () }
    }
}

impl TickTimer for StopwatchTimer {
    fn start(&mut self) {
        pac::TIM3.cr1().modify(|w| w.set_cen(true));
    }

    fn stop(&mut self) {
        pac::TIM3.cr1().modify(|w| w.set_cen(false));
    }

    fn clear_pending(&mut self) {
        clear_flags(pac::TIM3, UIF);
    }

    fn rewind(&mut self) {
        pac::TIM3.egr().write(|w| w.set_ug(true));
    }

    fn is_running(&self) -> bool {
        pac::TIM3.cr1().read().cen()
    }
}

/// Take a pending TIM3 update as a tick event
pub fn tick_event() -> Option<Event> {
    let tim = pac::TIM3;
    if !tim.sr().read().uif() {
        return None;
    }
    clear_flags(tim, UIF);
    Some(Event::StopwatchTick)
}
