use crate::klog::KlogLevel;

const DEFAULT_SEED: u64 = 0x2545_F491;
const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Info;
const DEFAULT_CLEAR_RGB: u32 = 0x00_0000;
const DEFAULT_FLUSH: bool = true;

/// Compositor settings taken from the kernel command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WmConfig {
    /// Seed for pseudo-random window placement.
    pub seed: u64,
    pub log_level: KlogLevel,
    /// 0xRRGGBB painted where no window covers the screen.
    pub clear_rgb: u32,
    /// Push every refresh to the display device.
    pub flush: bool,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            log_level: DEFAULT_LOG_LEVEL,
            clear_rgb: DEFAULT_CLEAR_RGB,
            flush: DEFAULT_FLUSH,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value.eq_ignore_ascii_case("enabled")
        || value == "1"
    {
        Some(true)
    } else if value.eq_ignore_ascii_case("off")
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("no")
        || value.eq_ignore_ascii_case("disabled")
        || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse::<u64>().ok(),
    }
}

fn parse_rgb(value: &str) -> Option<u32> {
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('#'))
        .unwrap_or(value);
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    if rgb > 0x00FF_FFFF {
        return None;
    }
    Some(rgb)
}

/// Parse `wm.*` tokens out of the kernel command line.
///
/// Unknown tokens are ignored and malformed values keep the default.
pub fn config_from_cmdline(cmdline: Option<&str>) -> WmConfig {
    let mut cfg = WmConfig::default();
    if let Some(cmdline) = cmdline {
        for token in cmdline.split_whitespace() {
            if let Some(value) = token.strip_prefix("wm.seed=") {
                if let Some(seed) = parse_u64(value) {
                    cfg.seed = seed;
                }
            } else if let Some(value) = token.strip_prefix("wm.log=") {
                if let Some(level) = KlogLevel::from_name(value) {
                    cfg.log_level = level;
                }
            } else if let Some(value) = token.strip_prefix("wm.clear=") {
                if let Some(rgb) = parse_rgb(value) {
                    cfg.clear_rgb = rgb;
                }
            } else if let Some(value) = token.strip_prefix("wm.flush=") {
                if let Some(flush) = parse_bool(value) {
                    cfg.flush = flush;
                }
            }
        }
    }
    cfg
}
