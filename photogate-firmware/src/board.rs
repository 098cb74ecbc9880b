//! Board pinout
//!
//! Nucleo-F411RE with the display on the Arduino headers and the VL6180X
//! breakout on I2C1.

use photogate_core::display::{DIGIT_COUNT, SEGMENT_COUNT};
use photogate_hal_stm32f4::gpio::{Line, Port};

/// Digit anodes, leftmost first
pub const ANODES: [Line; DIGIT_COUNT] = [
    Line::new(Port::B, 0),
    Line::new(Port::A, 4),
    Line::new(Port::A, 1),
    Line::new(Port::A, 0),
];

/// Segment cathodes A..G, then the decimal point
pub const CATHODES: [Line; SEGMENT_COUNT] = [
    Line::new(Port::B, 6),
    Line::new(Port::C, 7),
    Line::new(Port::A, 9),
    Line::new(Port::A, 8),
    Line::new(Port::B, 10),
    Line::new(Port::B, 4),
    Line::new(Port::B, 5),
    Line::new(Port::B, 3),
];

/// I2C1 clock
pub const I2C_SCL: Line = Line::new(Port::B, 8);

/// I2C1 data
pub const I2C_SDA: Line = Line::new(Port::B, 9);

/// VL6180X GPIO1, active-low interrupt output (EXTI9_5)
pub const SENSOR_INT: Line = Line::new(Port::A, 6);
