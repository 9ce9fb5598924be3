// Copyright 2026 The Mulbench Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use std::error::Error as StdError;
use std::f64::consts::LOG2_10;
use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use rug::{Assign, Integer};

use crate::config::{BenchConfig, ConfigError};
use crate::rng::TrialRng;

/**
 * Number of bits needed to represent a number with `digits` decimal digits.
 *
 * Rounds `digits * log2(10)` half away from zero, the conversion GMP's
 * bit-oriented entry points expect.
 */
pub fn bits_for_digits(digits: u64) -> u32 {
    (digits as f64 * LOG2_10).round() as u32
}

/**
 * Runs one trial: a fresh generator and `iterations` draw-draw-multiply
 * steps under a single monotonic timing window. Returns the average cost of
 * one multiplication in milliseconds.
 *
 * The generator and the three integers outlive the timing window, so
 * teardown never leaks into the measurement.
 */
pub fn time_trial(bits: u32, iterations: u32) -> f64 {
    debug_assert!(iterations > 0);

    let mut rng = TrialRng::new();
    let mut a = Integer::new();
    let mut b = Integer::new();
    let mut c = Integer::new();

    let start = Instant::now();
    for _ in 0..iterations {
        rng.fill_bits(&mut a, bits);
        rng.fill_bits(&mut b, bits);
        c.assign(&a * &b);
    }
    let elapsed = start.elapsed();

    let ns = elapsed.as_secs() * 1_000_000_000 + elapsed.subsec_nanos() as u64;
    ns as f64 / f64::from(iterations) / 1e6
}

/**
 * Runs the whole benchmark: one header line, then one average-latency line
 * per trial, written to `out`. Returns the per-trial averages.
 */
pub fn run(config: &BenchConfig, out: &mut dyn Write) -> Result<Vec<f64>, Error> {
    config.validate()?;
    let bits = config.bit_width();

    writeln!(out, "multiplying {}-digit numbers", config.digits)?;

    let mut averages = Vec::with_capacity(config.trials as usize);
    for _ in 0..config.trials {
        let ms = time_trial(bits, config.iterations);
        writeln!(out, "{:.6} milliseconds per mpz_mul", ms)?;
        averages.push(ms);
    }
    Ok(averages)
}

/// Multiplies fresh random operands of the given width until `warmup`
/// elapses and returns the achieved count. The sweep tool uses this as the
/// iteration budget for a size it has never timed before.
pub fn calibrate_iterations(bits: u32, warmup: Duration) -> u32 {
    let mut rng = TrialRng::new();
    let mut a = Integer::new();
    let mut b = Integer::new();
    let mut c = Integer::new();

    let mut count: u32 = 0;
    let start = Instant::now();
    while start.elapsed() < warmup {
        rng.fill_bits(&mut a, bits);
        rng.fill_bits(&mut b, bits);
        c.assign(&a * &b);
        count += 1;
    }
    count.max(1)
}

#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Io(io::Error),
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Error {
        Error::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "invalid configuration: {}", e),
            Error::Io(e) => write!(f, "writing results failed: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use quickcheck_macros::quickcheck;

    use super::{bits_for_digits, calibrate_iterations, run, Error};
    use crate::config::{BenchConfig, ConfigError};

    #[test]
    fn bit_width_for_a_million_digits() {
        assert_eq!(bits_for_digits(1_000_000), 3_321_928);
    }

    #[test]
    fn bit_widths_for_small_sizes() {
        for &(digits, bits) in &[
            (1u64, 3u32),
            (2, 7),
            (3, 10),
            (10, 33),
            (100, 332),
            (1_000, 3_322),
        ] {
            assert_eq!(bits_for_digits(digits), bits, "digits {}", digits);
        }
    }

    #[quickcheck]
    fn bit_width_matches_the_rounded_log_ratio(digits: u32) -> bool {
        let digits = u64::from(digits % 100_000_000) + 1;
        bits_for_digits(digits) == (digits as f64 * 3.321928094887362).round() as u32
    }

    #[test]
    fn run_prints_a_header_and_one_line_per_trial() {
        let config = BenchConfig::new(50, 3, 2).unwrap();
        let mut out = Vec::new();
        let averages = run(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "multiplying 50-digit numbers");
        for line in &lines[1..] {
            let value = line
                .strip_suffix(" milliseconds per mpz_mul")
                .expect("timing line suffix");
            assert!(value.contains('.'), "no decimal point in {:?}", value);
            let ms: f64 = value.parse().unwrap();
            assert!(ms.is_finite() && ms >= 0.0);
        }

        assert_eq!(averages.len(), 3);
        assert!(averages.iter().all(|ms| ms.is_finite() && *ms >= 0.0));
    }

    #[test]
    fn zero_iterations_is_an_error_not_a_division_by_zero() {
        let config = BenchConfig {
            iterations: 0,
            ..BenchConfig::default()
        };
        let mut out = Vec::new();
        match run(&config, &mut out) {
            Err(Error::Config(ConfigError::ZeroIterations)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn calibration_reports_at_least_one_iteration() {
        assert!(calibrate_iterations(64, Duration::from_millis(0)) >= 1);
    }
}
