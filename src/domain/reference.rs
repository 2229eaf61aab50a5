use crate::config::Config;

/// A labeled vertical marker on the size axis (cache capacity or the
/// paging threshold), with the color used in the rendered figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub bytes: u64,
    pub color: LineColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Red,
    Green,
    Brown,
    Blue,
}

impl ReferenceLine {
    fn new(name: &str, bytes: u64, color: LineColor) -> Self {
        Self {
            label: format!("{} ({})", name, format_bytes(bytes)),
            bytes,
            color,
        }
    }
}

/// The four markers of the latency figure, in L1, L2, L3, page-threshold
/// order. Labels carry the configured capacity so overridden values stay
/// truthful.
pub fn boundaries(config: &Config) -> Vec<ReferenceLine> {
    vec![
        ReferenceLine::new("L1", config.l1_bytes, LineColor::Red),
        ReferenceLine::new("L2", config.l2_bytes, LineColor::Green),
        ReferenceLine::new("L3", config.l3_bytes, LineColor::Brown),
        ReferenceLine::new("page threshold", config.page_threshold_bytes, LineColor::Blue),
    ]
}

/// Binary-unit byte formatter: 32768 -> "32 KiB", 9437184 -> "9 MiB".
/// Non-integral magnitudes keep two decimals ("2.25 GiB").
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(u64, &str); 3] = [
        (1 << 30, "GiB"),
        (1 << 20, "MiB"),
        (1 << 10, "KiB"),
    ];

    for (scale, unit) in UNITS {
        if bytes >= scale {
            let value = bytes as f64 / scale as f64;
            if (value - value.round()).abs() < 1e-9 {
                return format!("{} {}", value.round() as u64, unit);
            }
            return format!("{:.2} {}", value, unit);
        }
    }
    format!("{} B", bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            input_path: PathBuf::from("results.csv"),
            page_threshold_bytes: 2_414_600_000,
            l1_bytes: 32 * 1024,
            l2_bytes: 256 * 1024,
            l3_bytes: 9 * 1024 * 1024,
        }
    }

    #[test]
    fn test_four_boundaries_in_order() {
        let lines = boundaries(&test_config());

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].bytes, 32_768);
        assert_eq!(lines[1].bytes, 262_144);
        assert_eq!(lines[2].bytes, 9_437_184);
        assert_eq!(lines[3].bytes, 2_414_600_000);
    }

    #[test]
    fn test_boundary_labels() {
        let lines = boundaries(&test_config());

        assert_eq!(lines[0].label, "L1 (32 KiB)");
        assert_eq!(lines[1].label, "L2 (256 KiB)");
        assert_eq!(lines[2].label, "L3 (9 MiB)");
        assert_eq!(lines[3].label, "page threshold (2.25 GiB)");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(32 * 1024), "32 KiB");
        assert_eq!(format_bytes(9 * 1024 * 1024), "9 MiB");
        assert_eq!(format_bytes(2_414_600_000), "2.25 GiB");
    }
}
