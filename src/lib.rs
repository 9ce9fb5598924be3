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

//! Wall-clock benchmark for large integer multiplication.
//!
//! The multiplication itself is GMP's `mpz_mul`, reached through the `rug`
//! crate; this crate contributes the timing loops and the random operand
//! source. A run draws two uniform random integers of a fixed bit width,
//! multiplies them, repeats for a configured number of iterations, and
//! reports the average per-multiplication latency over several independent
//! trials.
//!
//! ```
//! use mulbench::{run, BenchConfig};
//!
//! let config = BenchConfig::new(50, 2, 4).unwrap();
//! let mut out = Vec::new();
//! let averages = run(&config, &mut out).unwrap();
//! assert_eq!(averages.len(), 2);
//! ```

pub mod bench;
pub mod config;
pub mod pi;
pub mod rng;

pub use bench::{bits_for_digits, calibrate_iterations, run, time_trial, Error};
pub use config::{BenchConfig, ConfigError};
pub use rng::TrialRng;
