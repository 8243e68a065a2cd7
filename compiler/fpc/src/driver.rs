//! Command-line driver: argument parsing and the sequential/parallel run.

use std::fmt;
use std::time::{Duration, Instant};

use fp_forms::{ExecPolicy, Forms, Func, PoolConfig, PoolError, WorkerPool};
use fp_value::Value;
use thiserror::Error;

use crate::{input, programs};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("missing demo name")]
    MissingDemo,
    #[error("unknown demo '{0}' (expected matmul, evens or sort)")]
    UnknownDemo(String),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("{demo}: program is undefined on its input")]
    Undefined { demo: Demo },
    #[error("{demo}: sequential and parallel results differ")]
    Mismatch { demo: Demo },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    MatMul,
    Evens,
    Sort,
}

impl Demo {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "matmul" => Some(Demo::MatMul),
            "evens" => Some(Demo::Evens),
            "sort" => Some(Demo::Sort),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Demo::MatMul => "matmul",
            Demo::Evens => "evens",
            Demo::Sort => "sort",
        }
    }

    /// Matrix side, sequence length, or number of string rows.
    pub fn default_size(self) -> usize {
        match self {
            Demo::MatMul => 100,
            Demo::Evens => 1_000_000,
            Demo::Sort => 8,
        }
    }

    pub fn program(self, forms: &Forms) -> Func {
        match self {
            Demo::MatMul => programs::mm(forms),
            Demo::Evens => programs::count_evens(forms),
            Demo::Sort => programs::sort_all(forms),
        }
    }

    pub fn input(self, size: usize, seed: u64) -> Value {
        match self {
            Demo::MatMul => input::matmul_input(size),
            Demo::Evens => input::range(size),
            Demo::Sort => input::random_strings(size, SORT_ROW_LEN, SORT_STRING_LEN, seed),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strings per row and characters per string for the `sort` demo.
const SORT_ROW_LEN: usize = 2_000;
const SORT_STRING_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub demo: Demo,
    /// Worker threads for the parallel run (0 = one per CPU).
    pub threads: usize,
    pub size: usize,
    pub seed: u64,
}

impl RunOptions {
    pub fn new(demo: Demo) -> Self {
        RunOptions {
            demo,
            threads: 0,
            size: demo.default_size(),
            seed: 0x5EED,
        }
    }
}

/// Parse `<demo> [--threads=N] [--size=N] [--seed=N]`.
pub fn parse_args(args: &[String]) -> Result<RunOptions, DriverError> {
    let (name, flags) = args.split_first().ok_or(DriverError::MissingDemo)?;
    let demo = Demo::from_name(name).ok_or_else(|| DriverError::UnknownDemo(name.clone()))?;
    let mut options = RunOptions::new(demo);
    for arg in flags {
        if let Some(n) = arg.strip_prefix("--threads=") {
            options.threads = parse_number("--threads", n)?;
        } else if let Some(n) = arg.strip_prefix("--size=") {
            options.size = parse_number("--size", n)?;
        } else if let Some(n) = arg.strip_prefix("--seed=") {
            options.seed = parse_number("--seed", n)?;
        } else {
            return Err(DriverError::UnknownOption(arg.clone()));
        }
    }
    Ok(options)
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, DriverError> {
    value.parse().map_err(|_| DriverError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

/// Timings of one sequential and one parallel run.
#[derive(Clone, Debug)]
pub struct Report {
    pub demo: Demo,
    pub workers: usize,
    pub sequential: Duration,
    pub parallel: Duration,
    pub result: Value,
}

impl Report {
    pub fn speedup(&self) -> f64 {
        if self.parallel.is_zero() {
            return 1.0;
        }
        self.sequential.as_secs_f64() / self.parallel.as_secs_f64()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequential runtime: {} ms", self.sequential.as_millis())?;
        writeln!(
            f,
            "Parallel runtime: {} ms ({} workers)",
            self.parallel.as_millis(),
            self.workers
        )?;
        write!(f, "Speedup: {:.2}x", self.speedup())
    }
}

/// Build the demo's input, run the program under both policies and
/// compare the results.
#[tracing::instrument(level = "debug", skip_all, fields(demo = %options.demo, size = options.size))]
pub fn run(options: &RunOptions) -> Result<Report, DriverError> {
    let pool = WorkerPool::new(&PoolConfig::with_threads(options.threads))?;
    let workers = pool.workers();
    let x = options.demo.input(options.size, options.seed);

    let sequential_program = options.demo.program(&Forms::sequential());
    let parallel_program = options.demo.program(&Forms::new(ExecPolicy::Parallel(pool)));

    let (seq_result, sequential) = timed(&sequential_program, &x);
    tracing::debug!(elapsed_ms = sequential.as_millis(), "sequential run finished");
    let (par_result, parallel) = timed(&parallel_program, &x);
    tracing::debug!(elapsed_ms = parallel.as_millis(), workers, "parallel run finished");

    if seq_result.is_bottom() {
        return Err(DriverError::Undefined {
            demo: options.demo,
        });
    }
    if seq_result != par_result {
        return Err(DriverError::Mismatch {
            demo: options.demo,
        });
    }
    Ok(Report {
        demo: options.demo,
        workers,
        sequential,
        parallel,
        result: seq_result,
    })
}

fn timed(f: &Func, x: &Value) -> (Value, Duration) {
    let start = Instant::now();
    let result = f.call(x);
    (result, start.elapsed())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
