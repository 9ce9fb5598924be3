//! Calculates pi to an arbitrary number of decimal digits.
//!  cargo run --example pi --release -- 100000

use std::env;
use std::time::Instant;

use mulbench::pi::pi_digits;

fn main() {
    let args: Vec<String> = env::args().collect();

    let num_digits: u32 = match args.len() {
        1 => 1_000_000,
        2 => match args[1].parse() {
            Ok(d) => d,
            Err(_) => {
                println!("not an integer");
                return;
            }
        },
        _ => {
            println!("usage: pi [num_digits]");
            return;
        }
    };
    if num_digits < 20 {
        println!("need at least 20 digits");
        return;
    }

    println!("Calculating pi to {} decimal digits:", num_digits);
    let start = Instant::now();
    let pi = pi_digits(num_digits);
    let elapsed = start.elapsed();

    if pi.len() <= 50 {
        println!("\u{3c0}\u{2248}{}", pi);
    } else {
        println!("\u{3c0}\u{2248}{}...{}", &pi[..20], &pi[pi.len() - 20..]);
    }
    println!("Computation took {:.3} seconds.", elapsed.as_secs_f64());
}
