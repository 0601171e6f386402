//! Timestamp series generation.
//!
//! The first column of every table is a timestamp produced here: a
//! monotonic series `start + k·step` in the configured precision, with
//! optional out-of-order injection and checkpoint-recovery skipping.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GenError;

/// Nanoseconds per unit of a storage precision.
pub fn precision_unit(precision: &str) -> Result<i64, GenError> {
    match precision {
        "ns" => Ok(1),
        "us" => Ok(1_000),
        "ms" => Ok(1_000_000),
        "s" => Ok(1_000_000_000),
        other => Err(GenError::InvalidPrecision(other.to_owned())),
    }
}

/// Nanoseconds per offset unit in `now()±N<unit>` and step expressions.
fn offset_unit(unit: &str) -> Option<i64> {
    match unit {
        "ns" => Some(1),
        "us" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        "d" => Some(24 * 60 * 60 * 1_000_000_000),
        _ => None,
    }
}

/// Convert a timestamp between precisions, truncating toward zero.
#[must_use]
pub fn convert_precision(ts: i64, from_ns_per_unit: i64, to_ns_per_unit: i64) -> i64 {
    if from_ns_per_unit == to_ns_per_unit {
        return ts;
    }
    ts.saturating_mul(from_ns_per_unit) / to_ns_per_unit
}

/// Wall-clock now in the given precision.
fn now_in(precision_ns: i64) -> i64 {
    let ns = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or(i64::MAX);
    ns / precision_ns
}

/// Parse a time expression into the given precision.
///
/// Accepts an integer literal (already in the target precision), `now`,
/// `now()`, or `now()±N<unit>` with unit ∈ ns/us/ms/s/m/h/d. A unitless
/// offset is taken in the target precision.
pub fn parse_time_expr(expr: &str, precision: &str) -> Result<i64, GenError> {
    let precision_ns = precision_unit(precision)?;
    let trimmed: String = expr.chars().filter(|c| !c.is_whitespace()).collect();

    if let Ok(literal) = trimmed.parse::<i64>() {
        return Ok(literal);
    }

    let Some(rest) = trimmed.strip_prefix("now") else {
        return Err(GenError::InvalidTimeExpr(expr.to_owned()));
    };
    let rest = rest.strip_prefix("()").unwrap_or(rest);
    let base = now_in(precision_ns);
    if rest.is_empty() {
        return Ok(base);
    }

    let (negative, offset_str) = match rest.split_at(1) {
        ("+", tail) => (false, tail),
        ("-", tail) => (true, tail),
        _ => return Err(GenError::InvalidTimeExpr(expr.to_owned())),
    };
    let offset = parse_offset(offset_str, precision_ns)
        .ok_or_else(|| GenError::InvalidTimeExpr(expr.to_owned()))?;
    Ok(if negative { base - offset } else { base + offset })
}

/// Parse a step expression (`N` or `N<unit>`) into precision units.
///
/// The step must be positive: the series is strictly monotonic.
pub fn parse_step(step: &str, precision: &str) -> Result<i64, GenError> {
    let precision_ns = precision_unit(precision)?;
    let trimmed: String = step.chars().filter(|c| !c.is_whitespace()).collect();
    let value = parse_offset(&trimmed, precision_ns)
        .ok_or_else(|| GenError::InvalidTimeExpr(step.to_owned()))?;
    if value <= 0 {
        return Err(GenError::InvalidTimeExpr(step.to_owned()));
    }
    Ok(value)
}

/// `N<unit>` → precision units; a unitless `N` is already in precision units.
fn parse_offset(text: &str, precision_ns: i64) -> Option<i64> {
    let unit_pos = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    let (number_part, unit_part) = text.split_at(unit_pos);
    let number: i64 = number_part.parse().ok()?;
    if unit_part.is_empty() {
        return Some(number);
    }
    let unit_ns = offset_unit(unit_part)?;
    Some(number.saturating_mul(unit_ns) / precision_ns)
}

/// One out-of-order injection window, resolved into the series precision.
#[derive(Debug, Clone)]
pub struct DisorderInterval {
    /// Window start (inclusive), in the series precision.
    pub time_start: i64,
    /// Window end (inclusive), in the series precision.
    pub time_end: i64,
    /// Probability a row inside the window is disordered.
    pub ratio: f64,
    /// Max backward offset in milliseconds.
    pub latency_range_ms: i64,
}

/// Outcome of one timestamp draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsOutcome {
    /// Emit this timestamp and move on.
    Emit(i64),
    /// The disorder draw went out of range; retry the same row.
    Retry,
}

/// Monotonic timestamp series with optional disorder injection.
#[derive(Debug)]
pub struct TimestampGenerator {
    start: i64,
    step: i64,
    precision_ns: i64,
    cursor: u64,
    disorder: Vec<DisorderInterval>,
    rng: StdRng,
}

impl TimestampGenerator {
    /// Build from the schema strings.
    pub fn new(start: &str, precision: &str, step: &str) -> Result<Self, GenError> {
        Ok(Self {
            start: parse_time_expr(start, precision)?,
            step: parse_step(step, precision)?,
            precision_ns: precision_unit(precision)?,
            cursor: 0,
            disorder: Vec::new(),
            rng: StdRng::from_os_rng(),
        })
    }

    /// Attach disorder injection windows.
    #[must_use]
    pub fn with_disorder(mut self, intervals: Vec<DisorderInterval>) -> Self {
        self.disorder = intervals;
        self
    }

    /// Series start, in the configured precision.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Step between rows, in the configured precision.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// The nominal (pre-disorder) timestamp the next draw will be based on.
    #[must_use]
    pub fn peek_nominal(&self) -> i64 {
        self.start + self.step * self.cursor as i64
    }

    /// Draw the next timestamp.
    ///
    /// Inside a disorder window the emitted value may lie up to
    /// `latency_range_ms` behind the nominal one; a draw that would land
    /// before the series start yields [`TsOutcome::Retry`] without
    /// advancing, and the caller retries the same row index.
    pub fn next(&mut self) -> TsOutcome {
        let nominal = self.peek_nominal();
        let emitted = match self.disorder_offset(nominal) {
            Some(offset) => {
                let adjusted = nominal - offset;
                if adjusted < self.start {
                    return TsOutcome::Retry;
                }
                adjusted
            }
            None => nominal,
        };
        self.cursor += 1;
        TsOutcome::Emit(emitted)
    }

    fn disorder_offset(&mut self, nominal: i64) -> Option<i64> {
        if self.disorder.is_empty() {
            return None;
        }
        let window = self
            .disorder
            .iter()
            .find(|w| nominal >= w.time_start && nominal <= w.time_end)?;
        if self.rng.random::<f64>() >= window.ratio {
            return None;
        }
        let range = convert_precision(window.latency_range_ms, 1_000_000, self.precision_ns);
        if range <= 0 {
            return None;
        }
        Some(self.rng.random_range(0..=range))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_time_expr("1500000000000", "ms").unwrap(), 1_500_000_000_000);
    }

    #[test]
    fn test_parse_now_with_offset() {
        let base = parse_time_expr("now", "ms").unwrap();
        let ahead = parse_time_expr("now()+10s", "ms").unwrap();
        // 10 s = 10_000 ms; allow for the clock moving between calls.
        assert!((ahead - base - 10_000).abs() < 1_000);

        let behind = parse_time_expr("now()-1h", "ms").unwrap();
        assert!((base - behind - 3_600_000).abs() < 1_000);
    }

    #[test]
    fn test_parse_unitless_offset_uses_precision() {
        let base = parse_time_expr("now", "us").unwrap();
        let ahead = parse_time_expr("now()+500", "us").unwrap();
        assert!((ahead - base - 500).abs() < 100_000);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_time_expr("yesterday", "ms").is_err());
        assert!(parse_time_expr("now()*5", "ms").is_err());
        assert!(parse_time_expr("1000", "h").is_err());
    }

    #[test]
    fn test_step_units() {
        assert_eq!(parse_step("1", "ms").unwrap(), 1);
        assert_eq!(parse_step("10s", "ms").unwrap(), 10_000);
        assert_eq!(parse_step("1m", "us").unwrap(), 60_000_000);
        assert!(parse_step("0", "ms").is_err());
    }

    #[test]
    fn test_precision_conversion_truncates() {
        assert_eq!(convert_precision(1_999, 1_000_000, 1_000_000_000), 1);
        assert_eq!(convert_precision(3, 1_000_000_000, 1_000_000), 3_000);
    }

    #[test]
    fn test_monotonic_series() {
        let mut g = TimestampGenerator::new("1000", "ms", "10").unwrap();
        let mut last = i64::MIN;
        for _ in 0..100 {
            let TsOutcome::Emit(ts) = g.next() else { panic!("no disorder configured") };
            assert!(ts > last);
            last = ts;
        }
        assert_eq!(g.peek_nominal(), 2000);
    }

    #[test]
    fn test_disorder_always_fires_inside_window() {
        let mut g = TimestampGenerator::new("0", "ms", "100")
            .unwrap()
            .with_disorder(vec![DisorderInterval {
                time_start: 1_000,
                time_end: 10_000,
                ratio: 1.0,
                latency_range_ms: 50,
            }]);
        let mut disordered = 0;
        for k in 0..100i64 {
            match g.next() {
                TsOutcome::Emit(ts) => {
                    let nominal = k * 100;
                    if (1_000..=10_000).contains(&nominal) && ts != nominal {
                        disordered += 1;
                        assert!(nominal - ts <= 50);
                    }
                }
                TsOutcome::Retry => panic!("offsets cannot reach below start here"),
            }
        }
        assert!(disordered > 0);
    }
}
