//! Photogate - Photo-Gate Stopwatch Firmware
//!
//! Main firmware binary for STM32F411-based boards. An object passing the
//! VL6180X proximity sensor starts the stopwatch, the next pass stops it and
//! the one after that resets it. Elapsed time is shown with 100 ms
//! resolution on a multiplexed 4-digit 7-segment display.
//!
//! Everything runs from three interrupt vectors at one priority:
//!
//! - TIM4: display refresh (update and compare events)
//! - TIM3: 100 ms stopwatch tick
//! - EXTI9_5: sensor threshold edge on PA6
//!
//! The main loop only sleeps.

#![no_std]
#![no_main]

mod board;

use core::cell::RefCell;

use cortex_m_rt::entry;
use defmt::*;
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use {defmt_rtt as _, panic_probe as _};

use photogate_core::config::{TimerConfig, TIMER_CLOCK_HZ};
use photogate_core::display::DIGIT_COUNT;
use photogate_core::{Dispatcher, DisplayScheduler, Event, FrameBuffer, Handled, Stopwatch};
use photogate_drivers::bus::I2cMaster;
use photogate_drivers::display::PinLines;
use photogate_drivers::sensor::{SensorBridge, SensorConfig, Vl6180x};
use photogate_hal::i2c::I2cConfig;
use photogate_hal_stm32f4::exti::ExtiLine;
use photogate_hal_stm32f4::gpio::{Line, Pull};
use photogate_hal_stm32f4::timer::{self, DisplayTimer, StopwatchTimer};
use photogate_hal_stm32f4::{clock, i2c};

type SensorBus = I2cMaster<i2c::I2c1Registers>;
type System = Dispatcher<'static, PinLines<Line>, StopwatchTimer, SensorBridge<SensorBus, ExtiLine>>;

/// Segment bitmaps shared by the stopwatch (writer) and display (reader)
static FRAME: FrameBuffer = FrameBuffer::new();

/// Interrupt-driven subsystems, installed once by `main`
static SYSTEM: Mutex<CriticalSectionRawMutex, RefCell<Option<System>>> =
    Mutex::new(RefCell::new(None));

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Photogate firmware starting...");

    // HSI 16 MHz, APB1 undivided: every timing value assumes this clock
    let _p = embassy_stm32::init(Default::default());
    clock::enable_peripherals();
    info!("Peripherals initialized");

    // Display
    let lines = PinLines::new(
        board::ANODES.map(Line::into_open_drain_output),
        board::CATHODES.map(Line::into_open_drain_output),
    );
    let display = DisplayScheduler::new(lines, &FRAME);
    let mut display_timer = DisplayTimer::new(&TimerConfig::DISPLAY);
    info!(
        "Display: {} Hz update, {} Hz per digit",
        TimerConfig::DISPLAY.update_rate_hz(TIMER_CLOCK_HZ),
        TimerConfig::DISPLAY.per_digit_refresh_hz(TIMER_CLOCK_HZ, DIGIT_COUNT as u32)
    );

    // Sensor
    i2c::configure_pin(&board::I2C_SCL);
    i2c::configure_pin(&board::I2C_SDA);
    let bus = I2cMaster::new(i2c::init(&I2cConfig::STANDARD));
    let mut sensor = Vl6180x::new(bus, SensorConfig::DEFAULT);
    let loaded = match sensor.init() {
        Ok(loaded) => loaded,
        Err(e) => match e {},
    };
    if loaded {
        info!("VL6180X fresh out of reset, settings loaded");
    } else {
        info!("VL6180X already configured, settings kept");
    }
    let latch = ExtiLine::falling_edge(board::SENSOR_INT, Pull::Up);
    info!("Sensor interrupt on EXTI{}", latch.line());
    let mut bridge = SensorBridge::new(sensor, latch);

    // Stopwatch
    let stopwatch = Stopwatch::new(StopwatchTimer::new(&TimerConfig::STOPWATCH_TICK), &FRAME);
    info!(
        "Stopwatch: {} us tick",
        TimerConfig::STOPWATCH_TICK.period_us(TIMER_CLOCK_HZ)
    );

    // Edges seen from here on stay latched until the vector is unmasked
    if let Err(e) = bridge.sensor().start_continuous() {
        match e {}
    }
    info!("Ranging started");

    let system = Dispatcher::new(display, stopwatch, bridge);
    SYSTEM.lock(|cell| *cell.borrow_mut() = Some(system));

    // Equal priority: no handler preempts another
    for irq in [interrupt::TIM4, interrupt::TIM3, interrupt::EXTI9_5] {
        irq.set_priority(Priority::P1);
        irq.unpend();
        // SAFETY: SYSTEM is installed, every handler below can run
        unsafe { irq.enable() };
    }
    display_timer.start();
    info!("Ready");

    loop {
        cortex_m::asm::wfi();
    }
}

/// Route one event into the installed system
fn dispatch(event: Event) {
    SYSTEM.lock(|cell| {
        let mut system = cell.borrow_mut();
        let Some(system) = system.as_mut() else {
            return;
        };

        match system.handle(event) {
            Ok(Handled::Sensor(outcome)) => {
                debug!("Sensor edge: {}, state {}", outcome, system.state());
            }
            Ok(_) => {}
            Err(e) => match e {},
        }
    });
}

#[interrupt]
fn TIM4() {
    if let Some(event) = timer::display_event() {
        dispatch(event);
    }
}

#[interrupt]
fn TIM3() {
    if let Some(event) = timer::tick_event() {
        dispatch(event);
    }
}

#[interrupt]
fn EXTI9_5() {
    dispatch(Event::SensorEdge);
}
