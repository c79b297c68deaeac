use serde::{Deserialize, Serialize};

/// Serialization settings owned by the caller.
///
/// `precision` is the number of digits kept after the decimal point when
/// printing WKT. A negative value rounds to a power of ten (`-2` prints
/// `1234` as `1200`). `None` prints full precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub precision: Option<i32>,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    pub fn with_precision(mut self, digits: i32) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Per-call digits win over the configured default.
    pub fn resolve(&self, digits: Option<i32>) -> Option<i32> {
        digits.or(self.precision)
    }
}
