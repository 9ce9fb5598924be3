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

//! Pi to an arbitrary number of decimal digits, as a multiplication-heavy
//! workload. Values are binary fixed point: an integer `v` with scale `s`
//! stands for the real number `v / 2^s`.

use std::cmp::Ordering;
use std::f64::consts::LOG2_10;

use rug::Integer;

/// Extra decimal digits carried internally to absorb roundoff.
const GUARD_DIGITS: u32 = 3;

/**
 * Computes pi to `num_digits` significant decimal digits, returned as a
 * string of the form `3.14159...`.
 *
 * Uses the quadratically convergent Borwein iteration
 * (http://mathworld.wolfram.com/PiIterations.html), not the fastest known
 * formula but a simple one, with every step dominated by full-precision
 * multiplications. `num_digits` must be at least 20; the Newton seed for
 * the inverse square root consumes 62 bits of the fixed-point scale.
 */
pub fn pi_digits(num_digits: u32) -> String {
    assert!(num_digits >= 20, "pi_digits needs at least 20 digits");

    let internal = num_digits + GUARD_DIGITS;
    let scale = fixed_point_scale(internal);
    let one = Integer::from(1) << scale;
    let two = Integer::from(1) << (scale + 1);
    let one_half = one.clone() >> 1u32;

    let sqrt2 = inv_sqrt(&one_half, internal, scale);
    let invqroot2 = inv_sqrt(&sqrt2, internal, scale);
    let mut x = sqrt2.clone();
    let mut inv_sqrt_x = invqroot2.clone();
    let mut y = fdiv(&one, &invqroot2, scale);
    let mut pi = Integer::from(&two + &sqrt2);

    let mut precision = 2u64;
    loop {
        // x = (1+x) / (2*sqrt(x))
        let x1 = Integer::from(&x + &one);
        x = fmul(&fmul(&x1, &one_half, scale), &inv_sqrt_x, scale);
        inv_sqrt_x = inv_sqrt(&x, internal, scale);
        // pi = pi*(1+x)/(1+y)
        let y1 = Integer::from(&y + &one);
        let inv_y1 = fdiv(&one, &y1, scale);
        let x1 = Integer::from(&x + &one);
        pi = fmul(&pi, &fmul(&x1, &inv_y1, scale), scale);
        precision *= 2;
        if precision >= u64::from(internal) {
            break;
        }
        // y = (1+xy) / [(1+y)*sqrt(x)]
        let xy1 = fmul(&x, &y, scale) + &one;
        y = fmul(&fmul(&xy1, &inv_sqrt_x, scale), &inv_y1, scale);
    }

    to_decimal(&pi, num_digits, scale)
}

/// Fixed-point scale, in bits, for the given decimal precision.
fn fixed_point_scale(digits: u32) -> u32 {
    (f64::from(digits) * LOG2_10).ceil() as u32
}

/// Newton iteration for `1/sqrt(a)` at the given scale, seeded from the top
/// 62 bits of `a` through double-precision arithmetic.
fn inv_sqrt(a: &Integer, digits: u32, scale: u32) -> Integer {
    assert!(a.cmp0() != Ordering::Less, "negative square root");

    let three = Integer::from(3) << scale;
    let head = (a.clone() >> (scale - 62)).to_f64();
    let seed = (1.0 / head.sqrt() * 2f64.powi(93)) as i64;
    let mut x = Integer::from(seed) << (scale - 62);

    let mut precision = 16u64;
    loop {
        // x = 0.5*x*(3 - a*x*x)
        let axx = fmul(a, &fmul(&x, &x, scale), scale);
        let y = Integer::from(&three - &axx);
        x = (fmul(&x, &y, scale) + 1u32) >> 1u32;
        precision *= 2;
        if precision >= u64::from(digits) {
            break;
        }
    }
    x
}

/// Fixed-point multiply: `a*b / 2^scale`, rounded to nearest.
fn fmul(a: &Integer, b: &Integer, scale: u32) -> Integer {
    let mut product = Integer::from(a * b);
    product += Integer::from(1) << (scale - 1);
    product >> scale
}

/// Fixed-point divide: `a*2^scale / b`, rounded.
fn fdiv(a: &Integer, b: &Integer, scale: u32) -> Integer {
    let numerator = (a.clone() << scale) + (b.clone() >> 1u32);
    numerator / b
}

/// Renders the fixed-point value as `3.<digits>`, rounding the final shift.
fn to_decimal(pi: &Integer, num_digits: u32, scale: u32) -> String {
    let pow = Integer::from(Integer::u_pow_u(10, num_digits - 1));
    let mut scaled = Integer::from(pi * &pow);
    scaled += Integer::from(1) << (scale - 1);
    let digits = (scaled >> scale).to_string();
    debug_assert_eq!(digits.len(), num_digits as usize);
    format!("{}.{}", &digits[..1], &digits[1..])
}

#[cfg(test)]
mod test {
    use rug::Integer;

    use super::{fdiv, fixed_point_scale, fmul, inv_sqrt, pi_digits};

    #[test]
    fn eighty_digit_pi_matches_the_known_constant() {
        let pi = pi_digits(80);
        assert_eq!(pi.len(), 81); // 80 digits plus the decimal point
        assert!(
            pi.starts_with(
                "3.141592653589793238462643383279502884197169399375105820974944"
            ),
            "got {}",
            pi
        );
    }

    #[test]
    fn fixed_point_multiply_rounds_to_nearest() {
        let scale = 16u32;
        let one_and_a_half = Integer::from(3) << (scale - 1);
        let two = Integer::from(2) << scale;
        assert_eq!(fmul(&one_and_a_half, &two, scale), Integer::from(3) << scale);
    }

    #[test]
    fn fixed_point_divide_inverts_multiply() {
        let scale = 16u32;
        let three = Integer::from(3) << scale;
        let two = Integer::from(2) << scale;
        assert_eq!(fdiv(&three, &two, scale), Integer::from(3) << (scale - 1));
    }

    #[test]
    fn inverse_square_root_of_one_quarter_is_two() {
        let digits = 40u32;
        let scale = fixed_point_scale(digits);
        let quarter = Integer::from(1) << (scale - 2);
        let expected = Integer::from(1) << (scale + 1);
        let diff = inv_sqrt(&quarter, digits, scale) - &expected;
        assert!(diff.clone().abs() <= 4, "off by {}", diff);
    }
}
