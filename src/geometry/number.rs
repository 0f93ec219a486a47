//! Coordinate serialization
//!
//! Coordinates print as the shortest decimal that round-trips, identical to
//! JavaScript's `Number#toString` (`5`, not `5.0`; `0.30000000000000004`, not
//! `0.3`). An optional precision rounds values first for stable output.

/// How coordinates are written into attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormat {
    /// Decimal places to round to; `None` keeps full precision
    pub precision: Option<u32>,
}

impl NumberFormat {
    /// Full precision output
    pub fn exact() -> Self {
        Self { precision: None }
    }

    /// Round to `digits` decimal places before printing
    pub fn with_precision(digits: u32) -> Self {
        Self {
            precision: Some(digits),
        }
    }

    /// Append `value` to `out`
    pub fn write(&self, out: &mut String, value: f64) {
        let mut buf = ryu_js::Buffer::new();
        out.push_str(self.format_into(value, &mut buf));
    }

    /// Format a single value
    pub fn format(&self, value: f64) -> String {
        let mut out = String::new();
        self.write(&mut out, value);
        out
    }

    fn format_into<'b>(&self, value: f64, buf: &'b mut ryu_js::Buffer) -> &'b str {
        if value.is_nan() {
            return "NaN";
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" };
        }
        let mut v = match self.precision {
            Some(digits) => round_to(value, digits),
            None => value,
        };
        // -0 prints as 0
        if v == 0.0 {
            v = 0.0;
        }
        buf.format_finite(v)
    }
}

fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits.min(15) as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
