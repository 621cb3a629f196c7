//! Display formatting for byte-denominated amounts.

/// `2_000_000.0` → `"2.00 MB"`. The source stores audit volume in bytes
/// with a decimal megabyte convention (1 MB = 1_000_000).
#[inline]
pub fn format_mb(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1_000_000.0)
}

/// `7_000.0` → `"7.0 KB"`. Used by the project history listing.
#[inline]
pub fn format_kb(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1000.0)
}
