//! Multiplies two random numbers of a given decimal size, once.
//!  cargo run --example mul_once --release -- 250000

use std::env;
use std::time::Instant;

use rug::Integer;

use mulbench::{bits_for_digits, TrialRng};

fn main() {
    let args: Vec<String> = env::args().collect();

    let digits: u64 = match args.len() {
        1 => 250_000,
        2 => match args[1].parse() {
            Ok(d) => d,
            Err(_) => {
                println!("not an integer");
                return;
            }
        },
        _ => {
            println!("usage: mul_once [num_digits]");
            return;
        }
    };

    let bits = bits_for_digits(digits);
    let mut rng = TrialRng::new();
    let a = rng.draw(bits);
    let b = rng.draw(bits);

    println!("multiplying two {}-bit numbers", bits);
    let start = Instant::now();
    let c = Integer::from(&a * &b);
    let elapsed = start.elapsed();
    println!(
        "{}-bit product in {:.6} ms",
        c.significant_bits(),
        elapsed.as_secs_f64() * 1e3
    );
}
