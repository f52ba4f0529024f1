use crate::config::Config;
use serde_json::Value;

/// Average temperature for one region, in degrees Celsius.
///
/// `celsius` is `NaN` when the server sent something that does not start
/// with a number; the chart shows an empty bar for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionReading {
    pub region: String,
    pub celsius: f64,
}

/// Humidity direction for one region ("Stable", "Increasing", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumidityTrend {
    pub region: String,
    pub trend: String,
}

/// One `/climate-data` reply, with readings kept in the order the server sent them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClimateSnapshot {
    readings: Vec<RegionReading>,
    humidity: Vec<HumidityTrend>,
}

impl ClimateSnapshot {
    pub fn new(readings: Vec<RegionReading>, humidity: Vec<HumidityTrend>) -> Self {
        Self { readings, humidity }
    }

    pub fn readings(&self) -> &[RegionReading] {
        &self.readings
    }

    pub fn humidity(&self) -> &[HumidityTrend] {
        &self.humidity
    }

    /// Category labels and bar heights for the chart, index-aligned.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        self.readings
            .iter()
            .map(|r| (r.region.clone(), r.celsius))
            .unzip()
    }
}

/// Removes the display prefix from a reading.
///
/// The prefix is decoration the server adds to every value; there is no key
/// and nothing is concealed. Values without the prefix come back unchanged.
pub fn strip_display_prefix(raw: &str) -> &str {
    raw.strip_prefix(Config::DISPLAY_PREFIX).unwrap_or(raw)
}

/// Turns a prefixed reading such as `"encrypted_23.5"` into `23.5`.
///
/// Trailing text after the number (a unit, say) is ignored. A reading with no
/// leading number becomes `NaN`.
pub fn display_value(raw: &str) -> f64 {
    leading_number(strip_display_prefix(raw))
}

/// Reads one entry of `average_temp_region`.
pub fn reading_from_json(value: &Value) -> f64 {
    match value {
        Value::String(s) => display_value(s),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Parses the longest decimal number at the start of `s`.
fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    // Only the exact spelling counts, as with the browser's number parsing
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits > 0 || frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
