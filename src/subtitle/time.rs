// Caption timestamps: "HH:MM:SS,fff" in, "HH:MM:SS:ff" out.
//
// The two directions are not inverses. Input carries a decimal fraction of a
// second, output carries the two-digit SCC frame field, so precision is lost
// both ways.
use crate::error::{Result, SccError};
use chrono::{NaiveTime, Timelike};

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse `HH:MM:SS,fff` into seconds since midnight.
///
/// The part after the comma is read as a decimal fraction, so `,5` is half a
/// second and `,440` is 0.44 s. A missing fraction counts as zero.
pub fn text_to_seconds(text: &str) -> Result<f64> {
    let text = text.trim();
    let (clock, fraction) = text.split_once(',').unwrap_or((text, ""));

    let time = NaiveTime::parse_from_str(clock, "%H:%M:%S")
        .map_err(|e| SccError::time_parse(text, e.to_string()))?;

    let fraction = if fraction.is_empty() {
        0.0
    } else {
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(SccError::time_parse(text, "fraction must be digits"));
        }
        format!("0.{}", fraction)
            .parse::<f64>()
            .map_err(|e| SccError::time_parse(text, e.to_string()))?
    };

    Ok(f64::from(time.num_seconds_from_midnight()) + fraction)
}

/// Format seconds as an SCC timestamp `HH:MM:SS:ff`.
///
/// Whole seconds wrap at midnight. The frame field is derived from the
/// milliseconds as `ms * 100 / 40`, keeping the leading two digits.
pub fn seconds_to_text(seconds: f64) -> String {
    let whole = (seconds.trunc() as i64).rem_euclid(SECONDS_PER_DAY);
    let clock = NaiveTime::from_num_seconds_from_midnight_opt(whole as u32, 0).unwrap_or_default();

    format!("{}:{}", clock.format("%H:%M:%S"), frame_field(millis_of(seconds)))
}

/// Milliseconds of the fractional part, truncated. Rounding to whole
/// microseconds first absorbs float error such as 1.36 -> 1.3599999999999999.
fn millis_of(seconds: f64) -> u32 {
    let micros = (seconds.fract() * 1_000_000.0).round() as u64;
    (micros / 1000).min(999) as u32
}

fn frame_field(millis: u32) -> String {
    let scaled = (millis * 100 / 40).to_string();

    format!("{:0<2}", &scaled[..scaled.len().min(2)])
}
