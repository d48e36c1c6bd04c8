const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Format a byte count the way it is displayed in file previews, e.g. `1.5 KB`.
///
/// The largest unit keeping the value at or above 1 is used, with at most two decimals.
/// GB is the largest unit: a terabyte-sized file is shown as `1024 GB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit_index = 0;
    while value >= STEP && unit_index < UNITS.len() - 1 {
        value /= STEP;
        unit_index += 1;
    }

    format!("{} {}", trim_decimals(value), UNITS[unit_index])
}

/// Round to two decimals, then drop the trailing zeros and the dangling separator.
fn trim_decimals(value: f64) -> String {
    let rounded = format!("{value:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}
