//! Byte count formatting

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;
const GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Convert a byte count to a human-readable string. Memory deltas can be
/// negative, so the sign is kept.
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() {
        return bytes.to_string();
    }

    let sign = if bytes < 0.0 { "-" } else { "" };
    let abs = bytes.abs();

    if abs >= GB {
        format!("{}{:.2} GB", sign, abs / GB)
    } else if abs >= MB {
        format!("{}{:.2} MB", sign, abs / MB)
    } else if abs >= KB {
        format!("{}{:.2} KB", sign, abs / KB)
    } else {
        format!("{}{:.0} B", sign, abs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0.0), "0 B");
        assert_eq!(format_bytes(512.0), "512 B");
        assert_eq!(format_bytes(1536.0), "1.50 KB");
        assert_eq!(format_bytes(3.0 * MB), "3.00 MB");
        assert_eq!(format_bytes(2.0 * GB), "2.00 GB");
        assert_eq!(format_bytes(-2048.0), "-2.00 KB");
    }
}
