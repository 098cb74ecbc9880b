//! Segment patterns and elapsed-time rendering

use super::frame::DIGIT_COUNT;

/// Segment lines per digit, including the decimal point
pub const SEGMENT_COUNT: usize = 8;

/// Standard 7-segment encoding of 0-9 (bit 0 = segment A)
pub const DIGIT_PATTERNS: [u8; 10] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F,
];

/// Decimal point segment
pub const DECIMAL_POINT: u8 = 1 << 7;

/// All segments off
pub const BLANK: u8 = 0;

/// Split a tick count into its four least significant decimal digits
pub fn decimal_digits(ticks: u32) -> [u8; DIGIT_COUNT] {
    [
        ((ticks / 1000) % 10) as u8,
        ((ticks / 100) % 10) as u8,
        ((ticks / 10) % 10) as u8,
        (ticks % 10) as u8,
    ]
}

/// Render a count of 100 ms ticks as four segment bitmaps
///
/// The third digit always carries the decimal point. Leading zeros are
/// blanked on the first digit, and on the second only when the first is
/// also zero.
pub fn render(ticks: u32) -> [u8; DIGIT_COUNT] {
    let [d1, d2, d3, d4] = decimal_digits(ticks);

    let seg1 = if d1 == 0 { BLANK } else { DIGIT_PATTERNS[d1 as usize] };
    let seg2 = if d1 == 0 && d2 == 0 {
        BLANK
    } else {
        DIGIT_PATTERNS[d2 as usize]
    };
    let seg3 = DIGIT_PATTERNS[d3 as usize] | DECIMAL_POINT;
    let seg4 = DIGIT_PATTERNS[d4 as usize];

    [seg1, seg2, seg3, seg4]
}
