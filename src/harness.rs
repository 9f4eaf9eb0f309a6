//! Correctness and timing comparison of the radix sorts against `slice::sort_unstable`.

use std::fmt;
use std::time::{Duration, Instant};

use log::debug;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use thiserror::Error;

use crate::{sort_iterative, sort_recursive, RadixKey};

/// Difference between the output of a sort and the reference output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("({label}) mismatch at index {index}: expected {expected}, got {actual}")]
    Value {
        label: String,
        index: usize,
        expected: u64,
        actual: u64,
    },
    #[error("({label}) length mismatch: expected {expected} values, got {actual}")]
    Length {
        label: String,
        expected: usize,
        actual: usize,
    },
}

/// Compare `actual` element-wise against `expected` and report the first difference.
pub fn verify<T: RadixKey + PartialEq>(expected: &[T], actual: &[T], label: &str) -> Result<(), Mismatch> {
    if expected.len() != actual.len() {
        return Err(Mismatch::Length {
            label: label.to_owned(),
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        None => Ok(()),
        Some(index) => Err(Mismatch::Value {
            label: label.to_owned(),
            index,
            expected: expected[index].to_u64(),
            actual: actual[index].to_u64(),
        }),
    }
}

/// Generate `len` values uniformly distributed over the whole range of `T`.
pub fn random_values<T, R: Rng>(rng: &mut R, len: usize) -> Vec<T>
where
    Standard: Distribution<T>,
{
    (0..len).map(|_| rng.gen::<T>()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `slice::sort_unstable`, trusted to be correct.
    Reference,
    /// [`sort_recursive`].
    Recursive,
    /// [`sort_iterative`].
    Iterative,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Reference, Algorithm::Recursive, Algorithm::Iterative];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Reference => "std_sort",
            Algorithm::Recursive => "bin_radix_sort_rec",
            Algorithm::Iterative => "bin_radix_sort_it",
        }
    }

    pub fn sort<T: RadixKey + Ord>(self, values: &mut [T]) {
        match self {
            Algorithm::Reference => values.sort_unstable(),
            Algorithm::Recursive => sort_recursive(values),
            Algorithm::Iterative => sort_iterative(values),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Wall-clock time spent in each algorithm, summed over all repetitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timings {
    totals: [Duration; 3],
    reps: usize,
}

impl Timings {
    pub fn record(&mut self, algorithm: Algorithm, elapsed: Duration) {
        self.totals[algorithm.index()] += elapsed;
    }

    pub fn total(&self, algorithm: Algorithm) -> Duration {
        self.totals[algorithm.index()]
    }

    pub fn reps(&self) -> usize {
        self.reps
    }
}

fn timed<T: RadixKey + Ord>(algorithm: Algorithm, values: &mut [T]) -> Duration {
    let start = Instant::now();
    algorithm.sort(values);
    start.elapsed()
}

/// Sort `reps` random inputs of length `size` with every [`Algorithm`] and check that both radix
/// sorts agree with the reference.
pub fn benchmark<T, R>(rng: &mut R, reps: usize, size: usize) -> Result<Timings, Mismatch>
where
    T: RadixKey + Ord,
    R: Rng,
    Standard: Distribution<T>,
{
    let mut timings = Timings::default();

    for rep in 0..reps {
        let mut reference = random_values::<T, R>(rng, size);
        let mut recursive = reference.clone();
        let mut iterative = reference.clone();

        timings.record(Algorithm::Reference, timed(Algorithm::Reference, &mut reference));
        timings.record(Algorithm::Recursive, timed(Algorithm::Recursive, &mut recursive));
        timings.record(Algorithm::Iterative, timed(Algorithm::Iterative, &mut iterative));
        timings.reps += 1;

        verify(&reference, &recursive, Algorithm::Recursive.name())?;
        verify(&reference, &iterative, Algorithm::Iterative.name())?;

        debug!("rep {} of {} verified", rep + 1, reps);
    }

    Ok(timings)
}

/// Supported key widths, used to select the element type at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::U8, Width::U16, Width::U32, Width::U64];

    pub fn type_name(self) -> &'static str {
        match self {
            Width::U8 => "u8",
            Width::U16 => "u16",
            Width::U32 => "u32",
            Width::U64 => "u64",
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Width::U8 => u8::BITS,
            Width::U16 => u16::BITS,
            Width::U32 => u32::BITS,
            Width::U64 => u64::BITS,
        }
    }

    pub fn benchmark<R: Rng>(self, rng: &mut R, reps: usize, size: usize) -> Result<Report, Mismatch> {
        debug!("benchmarking {} with {} reps of {} values", self.type_name(), reps, size);

        let timings = match self {
            Width::U8 => benchmark::<u8, R>(rng, reps, size)?,
            Width::U16 => benchmark::<u16, R>(rng, reps, size)?,
            Width::U32 => benchmark::<u32, R>(rng, reps, size)?,
            Width::U64 => benchmark::<u64, R>(rng, reps, size)?,
        };

        Ok(Report { width: self, timings })
    }
}

/// Timings of one width, printed in seconds per algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub width: Width,
    pub timings: Timings,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmarking with type \"{}\"", self.width.type_name())?;
        for algorithm in Algorithm::ALL {
            writeln!(
                f,
                "    {}_time (s): {}",
                algorithm.name(),
                self.timings.total(algorithm).as_secs_f64()
            )?;
        }
        Ok(())
    }
}
