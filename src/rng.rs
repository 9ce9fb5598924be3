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

use rand::Rng;

use rug::integer::Order;
use rug::rand::RandState;
use rug::{Assign, Integer};

/// Random operand source for a single trial.
///
/// Wraps GMP's default generator. Every trial gets its own state, seeded
/// with 256 bits of OS entropy, so no two trials share a sequence.
pub struct TrialRng {
    state: RandState<'static>,
}

impl TrialRng {
    pub fn new() -> TrialRng {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill(&mut seed[..]);

        let mut state = RandState::new();
        state.seed(&Integer::from_digits(&seed[..], Order::Lsf));
        TrialRng { state }
    }

    /// Replaces `dst` with a uniform random integer in `[0, 2^bits)`.
    pub fn fill_bits(&mut self, dst: &mut Integer, bits: u32) {
        dst.assign(Integer::random_bits(bits, &mut self.state));
    }

    /// Draws a fresh uniform random integer in `[0, 2^bits)`.
    pub fn draw(&mut self, bits: u32) -> Integer {
        let mut value = Integer::new();
        self.fill_bits(&mut value, bits);
        value
    }
}

impl Default for TrialRng {
    fn default() -> TrialRng {
        TrialRng::new()
    }
}
