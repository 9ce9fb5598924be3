use std::io;
use std::process;

use mulbench::{run, BenchConfig};

fn main() {
    // command line arguments are accepted and ignored
    let config = BenchConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&config, &mut out) {
        eprintln!("mulbench: {}", e);
        process::exit(1);
    }
}
