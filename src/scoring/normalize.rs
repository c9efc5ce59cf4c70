use tracing::warn;

use crate::constants::{RAW_SCORE_MAX, RAW_SCORE_MIN};

/// Maps a raw oracle score onto `0..=100`.
///
/// `clamp(round((raw - MIN) / (MAX - MIN) * 100), 0, 100)`. A NaN score normalizes to `0`.
///
/// ```
/// use pairing::scoring::normalize;
///
/// assert_eq!(normalize(-5.0), 0);
/// assert_eq!(normalize(0.5), 50);
/// assert_eq!(normalize(6.0), 100);
/// assert_eq!(normalize(42.0), 100);
/// ```
pub fn normalize(raw: f64) -> u8 {
    if raw.is_nan() {
        warn!("Non-numeric raw score, normalizing to 0");
        return 0;
    }

    let scaled = (raw - RAW_SCORE_MIN) / (RAW_SCORE_MAX - RAW_SCORE_MIN) * 100.0;
    scaled.round().clamp(0.0, 100.0) as u8
}
