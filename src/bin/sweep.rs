#[cfg(not(feature = "sweep"))]
fn main() {
    panic!("the sweep tool can only be built with --features sweep");
}

#[cfg(feature = "sweep")]
fn main() {
    run::run()
}

#[cfg(feature = "sweep")]
mod run {
    use std::time::Duration;

    use clap::{Arg, ArgMatches, Command};

    use mulbench::{bits_for_digits, calibrate_iterations, time_trial};

    pub fn run() {
        let matches = Command::new("sweep")
            .about("mulbench size sweep tool")
            .arg(Arg::new("SIZE").short('s').required(true).help(
                "digit sizes to try. can be a range (1000..64000 or 1000-64000) or a list (1000,2000,4000)",
            ))
            .arg(
                Arg::new("FACTOR")
                    .short('f')
                    .help("factor to step in range mode (defaults 2.0)"),
            )
            .arg(
                Arg::new("LOOPS")
                    .short('l')
                    .help("number of timed trials per size (defaults 5)"),
            )
            .arg(
                Arg::new("WARMUP")
                    .short('d')
                    .help("warmup seconds per size, sets the iteration budget (defaults 2)"),
            )
            .get_matches();

        let loops: u32 = matches
            .get_one::<String>("LOOPS")
            .map(|s| s.parse().unwrap())
            .unwrap_or(5);
        let warmup_secs: u64 = matches
            .get_one::<String>("WARMUP")
            .map(|s| s.parse().unwrap())
            .unwrap_or(2);
        let warmup = Duration::from_secs(warmup_secs);

        println!(
            "{:>12} {:>10} {:>14} {:>14}",
            "digits", "iters", "min ms", "median ms"
        );
        for size in sizes(&matches) {
            let bits = bits_for_digits(size);
            let iterations = calibrate_iterations(bits, warmup);
            let mut values: Vec<f64> = (0..loops).map(|_| time_trial(bits, iterations)).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let median = values[values.len() / 2];
            println!(
                "{:>12} {:>10} {:>14.5} {:>14.5}",
                size, iterations, values[0], median
            );
        }
    }

    fn sizes(matches: &ArgMatches) -> Vec<u64> {
        let size = matches.get_one::<String>("SIZE").unwrap().replace("..", "-");
        let factor: f64 = matches
            .get_one::<String>("FACTOR")
            .map(|s| s.parse().unwrap())
            .unwrap_or(2.0);
        parse_sizes(&size, factor)
    }

    fn parse_sizes(spec: &str, factor: f64) -> Vec<u64> {
        spec.split(',')
            .flat_map(|part| {
                if let Some((beg, end)) = part.split_once('-') {
                    let mut i: u64 = beg.parse().unwrap();
                    let end: u64 = end.parse().unwrap();
                    let mut points = vec![];
                    while i <= end {
                        points.push(i);
                        i = ((i as f64 * factor) as u64).max(i + 1);
                    }
                    points.into_iter()
                } else {
                    vec![part.parse().unwrap()].into_iter()
                }
            })
            .collect()
    }

    #[cfg(test)]
    mod test {
        use super::parse_sizes;

        #[test]
        fn lists_and_ranges() {
            assert_eq!(parse_sizes("1000,2000,4000", 2.0), vec![1000, 2000, 4000]);
            assert_eq!(parse_sizes("1-10", 2.0), vec![1, 2, 4, 8]);
            assert_eq!(parse_sizes("100-100", 2.0), vec![100]);
        }

        #[test]
        fn a_unit_factor_still_advances() {
            assert_eq!(parse_sizes("5-8", 1.0), vec![5, 6, 7, 8]);
        }
    }
}
