//! Human-readable byte sizes in the service's display format

/// Units in promotion order; nothing is promoted past the last one
pub const SIZE_UNITS: [&str; 3] = ["byte", "kb", "mb"];

/// Format a byte count with `decimals` decimal places and a unit suffix
///
/// The value is divided by 1024 while it is at least 1024, stopping at
/// `mb`. There is no space between number and unit.
///
/// ```
/// use squeeze_upload::size_format;
///
/// assert_eq!(size_format(500, 2), "500.00byte");
/// assert_eq!(size_format(1024, 2), "1.00kb");
/// assert_eq!(size_format(1048576, 0), "1mb");
/// ```
pub fn size_format(bytes: u64, decimals: usize) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{}{}", to_fixed(size, decimals), SIZE_UNITS[unit])
}

/// Round `value` to `decimals` places, with exact halves rounding up
pub fn round_half_up(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format `value` with exactly `decimals` places, rounding halves up
///
/// `format!` alone rounds an exact half to even (`1.125` becomes `1.12`).
pub fn to_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_half_up(value, decimals))
}
