//! Display formatting for device readings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SECONDS_PER_DAY: u64 = 86_400;

/// `3d 04:05:06`, or `04:05:06` under a day.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    let rest = seconds % SECONDS_PER_DAY;
    let clock = format!("{:02}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);
    if days == 0 { clock } else { format!("{days}d {clock}") }
}

/// Binary-prefixed size with one decimal (`117.2 KiB`).
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 { format!("{bytes} B") } else { format!("{value:.1} {}", UNITS[unit]) }
}

/// Share of `part` in `total`, rounded down, in `0..=100`.
pub fn percent(part: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = part.min(total).saturating_mul(100) / total;
    u8::try_from(value).unwrap_or(100)
}

pub fn format_amperes(value: f64) -> String {
    format!("{value:.2} A")
}

pub fn format_volts(value: f64) -> String {
    format!("{value:.2} V")
}

pub fn format_watts(value: f64) -> String {
    format!("{value:.2} W")
}
