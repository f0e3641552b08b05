//! G-code line formatting
//!
//! The command vocabulary here must stay byte-compatible with existing GRBL
//! laser firmware: `G0`/`G1` moves, bare `X.. S..` continuation moves, and
//! the setup/teardown directives emitted by the program assembler.

/// Format a millimeter value as plain decimal text.
///
/// Four fractional digits, then trailing zeros (and a bare trailing dot)
/// trimmed, so exact values print the way the machine expects (`0.1`, `-5`,
/// `44.4`) and float noise never reaches the output.
pub fn fmt_mm(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Rapid (non-cutting) positioning move
pub fn rapid_move(x_mm: f64, y_mm: f64) -> String {
    format!("G0 X{} Y{}", fmt_mm(x_mm), fmt_mm(y_mm))
}

/// Controlled-feed move with laser power and feed rate
pub fn feed_move(x_mm: f64, y_mm: f64, power: u32, feed_rate: u32) -> String {
    format!(
        "G1 X{} Y{} S{} F{}",
        fmt_mm(x_mm),
        fmt_mm(y_mm),
        power,
        feed_rate
    )
}

/// Continuation move at the previously set feed rate. The power value
/// applies to the segment ending at `x_mm`, not starting there.
pub fn continuation_move(x_mm: f64, power: u32) -> String {
    format!("X{} S{}", fmt_mm(x_mm), power)
}
