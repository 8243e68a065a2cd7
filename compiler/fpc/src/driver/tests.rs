use pretty_assertions::assert_eq;

use super::*;

fn args(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn parses_demo_and_flags() {
    let options = parse_args(&args(&["matmul", "--threads=4", "--size=16", "--seed=9"])).unwrap();
    assert_eq!(
        options,
        RunOptions {
            demo: Demo::MatMul,
            threads: 4,
            size: 16,
            seed: 9,
        }
    );
}

#[test]
fn defaults_per_demo() {
    let options = parse_args(&args(&["evens"])).unwrap();
    assert_eq!(options.size, 1_000_000);
    assert_eq!(options.threads, 0);
    assert_eq!(parse_args(&args(&["sort"])).unwrap().size, Demo::Sort.default_size());
}

#[test]
fn rejects_bad_arguments() {
    assert!(matches!(parse_args(&[]), Err(DriverError::MissingDemo)));
    assert!(matches!(
        parse_args(&args(&["fib"])),
        Err(DriverError::UnknownDemo(name)) if name == "fib"
    ));
    assert!(matches!(
        parse_args(&args(&["evens", "--size=ten"])),
        Err(DriverError::InvalidValue { flag: "--size", .. })
    ));
    assert!(matches!(
        parse_args(&args(&["evens", "--fast"])),
        Err(DriverError::UnknownOption(_))
    ));
}

#[test]
fn error_messages() {
    assert_eq!(
        DriverError::UnknownDemo("fib".into()).to_string(),
        "unknown demo 'fib' (expected matmul, evens or sort)"
    );
    assert_eq!(
        DriverError::Mismatch { demo: Demo::Sort }.to_string(),
        "sort: sequential and parallel results differ"
    );
}

#[test]
fn runs_small_demos() {
    let mut options = RunOptions::new(Demo::Evens);
    options.size = 1_001;
    options.threads = 2;
    let report = run(&options).unwrap();
    assert_eq!(report.workers, 2);
    assert_eq!(report.result, Value::of(501_i64));

    let mut options = RunOptions::new(Demo::MatMul);
    options.size = 4;
    options.threads = 3;
    assert!(run(&options).unwrap().result.is_sequence());

    let mut options = RunOptions::new(Demo::Sort);
    options.size = 2;
    assert!(run(&options).unwrap().result.is_sequence());
}

#[test]
fn report_format() {
    let report = Report {
        demo: Demo::Evens,
        workers: 4,
        sequential: Duration::from_millis(300),
        parallel: Duration::from_millis(100),
        result: Value::of(1_i64),
    };
    assert_eq!(
        report.to_string(),
        "Sequential runtime: 300 ms\nParallel runtime: 100 ms (4 workers)\nSpeedup: 3.00x"
    );
}
