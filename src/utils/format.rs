//! Human-readable formatting helpers

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary (1024) units.
///
/// Whole bytes are printed without decimals; every larger unit uses two.
/// Values past the terabyte range stay in TB.
pub fn human_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut threshold: u64 = 1024;
    while unit < SIZE_UNITS.len() - 1 && bytes >= threshold {
        unit += 1;
        threshold = match threshold.checked_mul(1024) {
            Some(next) => next,
            None => break,
        };
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        // Ties round up, matching `toFixed(2)`
        let value = (bytes as f64 / 1024f64.powi(unit as i32) * 100.0).round() / 100.0;
        format!("{:.2} {}", value, SIZE_UNITS[unit])
    }
}

/// Like [`human_file_size`] but renders a missing value as `-`
pub fn human_file_size_opt(bytes: Option<u64>) -> String {
    bytes.map(human_file_size).unwrap_or_else(|| "-".to_string())
}
