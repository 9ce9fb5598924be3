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

use crate::bench::bits_for_digits;

/// Parameters for one benchmark run.
///
/// The defaults multiply 1,000,000-digit operands over five trials of a
/// thousand multiplications each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Decimal digit count of each operand.
    pub digits: u64,
    /// Number of independent timed runs.
    pub trials: u32,
    /// Multiplications per trial.
    pub iterations: u32,
}

impl Default for BenchConfig {
    fn default() -> BenchConfig {
        BenchConfig {
            digits: 1_000_000,
            trials: 5,
            iterations: 1_000,
        }
    }
}

impl BenchConfig {
    pub fn new(digits: u64, trials: u32, iterations: u32) -> Result<BenchConfig, ConfigError> {
        let config = BenchConfig {
            digits,
            trials,
            iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field before any trial runs.
    ///
    /// A zero iteration count is rejected here; the per-trial average would
    /// otherwise divide by zero. Digit counts whose bit width does not fit
    /// a GMP bit-count argument are rejected as well.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digits == 0 {
            return Err(ConfigError::ZeroDigits);
        }
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if (self.digits as f64 * LOG2_10).round() > u32::MAX as f64 {
            return Err(ConfigError::DigitsTooLarge(self.digits));
        }
        Ok(())
    }

    /// Binary width of each operand. Only meaningful once the configuration
    /// has been validated.
    pub fn bit_width(&self) -> u32 {
        bits_for_digits(self.digits)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDigits,
    ZeroTrials,
    ZeroIterations,
    DigitsTooLarge(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::ZeroDigits => write!(f, "digit count must be positive"),
            ConfigError::ZeroTrials => write!(f, "trial count must be positive"),
            ConfigError::ZeroIterations => write!(f, "iteration count must be positive"),
            ConfigError::DigitsTooLarge(digits) => write!(
                f,
                "{} digits need more bits than a GMP bit count can hold",
                digits
            ),
        }
    }
}

impl StdError for ConfigError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_multiplies_million_digit_numbers() {
        let config = BenchConfig::default();
        assert_eq!(config.digits, 1_000_000);
        assert_eq!(config.trials, 5);
        assert_eq!(config.iterations, 1_000);
        assert!(config.validate().is_ok());
        assert_eq!(config.bit_width(), 3_321_928);
    }

    #[test]
    fn zero_fields_are_rejected() {
        assert_eq!(
            BenchConfig::new(0, 5, 1_000).unwrap_err(),
            ConfigError::ZeroDigits
        );
        assert_eq!(
            BenchConfig::new(50, 0, 1_000).unwrap_err(),
            ConfigError::ZeroTrials
        );
        assert_eq!(
            BenchConfig::new(50, 5, 0).unwrap_err(),
            ConfigError::ZeroIterations
        );
    }

    #[test]
    fn oversized_digit_counts_are_rejected() {
        assert_eq!(
            BenchConfig::new(u64::MAX, 5, 1_000).unwrap_err(),
            ConfigError::DigitsTooLarge(u64::MAX)
        );
        // a billion digits is still representable
        assert!(BenchConfig::new(1_000_000_000, 5, 1_000).is_ok());
    }
}
