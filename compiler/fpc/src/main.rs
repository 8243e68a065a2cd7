//! FP demo driver
//!
//! Runs a demo program sequentially and in parallel and prints both
//! runtimes and the speedup.

fn main() {
    fpc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_usage();
        return;
    }

    match fpc::parse_args(&args).and_then(|options| fpc::run(&options)) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: fp <demo> [options]");
    eprintln!();
    eprintln!("Demos:");
    eprintln!("  matmul       Multiply a square matrix by itself");
    eprintln!("  evens        Count the even numbers in 0..size");
    eprintln!("  sort         Sort the characters of random strings, row by row");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --threads=N  Worker threads for the parallel run (default: one per CPU)");
    eprintln!("  --size=N     Matrix side, sequence length, or number of rows");
    eprintln!("  --seed=N     Seed for generated input");
    eprintln!();
    eprintln!("Set RUST_LOG to enable logging (FP_LOG_TREE=1 for an indented span tree).");
}
