//! Step-by-step driver for the demonstration programs.
//!
//! Each step computes its values through the native function table and
//! writes one or more `Label: value` lines. A failing step stops the run and
//! the error records the step label as its source.

use std::fmt::Display;
use std::io::Write;

use primer_foundation::{OrderedMap, Result, Value};
use primer_ops::{RandomSource, native};

use crate::config::{Program, RunConfig};

const X: i64 = 5;
const Y: i64 = 10;

/// Runs a [`Program`] and writes its output lines to `out`.
pub struct Driver<W: Write> {
    config: RunConfig,
    random: RandomSource,
    out: W,
}

impl<W: Write> Driver<W> {
    /// Creates a driver. The random source is seeded from the configuration,
    /// or from entropy when no seed is set.
    pub fn new(config: RunConfig, out: W) -> Self {
        let random = config
            .seed
            .map_or_else(RandomSource::from_entropy, RandomSource::from_seed);
        Self {
            config,
            random,
            out,
        }
    }

    /// The seed the random steps draw from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.random.seed()
    }

    /// The configuration this driver runs with.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Consumes the driver and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs every step of the configured program in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an operation or by writing output.
    pub fn run(&mut self) -> Result<()> {
        let outcome = match self.config.program {
            Program::Standard => self.run_standard(),
            Program::Alternate => self.run_alternate(),
        };
        outcome?;
        self.out.flush()?;
        Ok(())
    }

    fn run_standard(&mut self) -> Result<()> {
        self.step("Result", |d| {
            let (x, y) = (Value::Int(X), Value::Int(Y));
            let sum = native::call("add", &[x.clone(), y.clone()])?;
            let product = native::call("multiply", &[x, y])?;
            let scaled = native::call("multiply", &[sum, product])?;
            let result = native::call("add", &[scaled, Value::Int(d.config.global_value)])?;
            d.line("Result", result)
        })?;

        self.step("Doubled", |d| {
            let items: Value = vec![1i64, 2, 3, 4, 5].into();
            let doubled = native::call("double-all", &[items])?;
            d.line("Doubled", doubled)
        })?;

        self.step("Loose equality", |d| {
            let equal = Value::from("1").loose_eq(&Value::Int(1));
            writeln!(d.out, "Loose equality {equal}")?;
            Ok(())
        })?;

        self.step("Key", |d| {
            let data = OrderedMap::new()
                .insert(Value::from("a"), Value::from("apple"))
                .insert(Value::from("b"), Value::from("banana"));
            for (key, value) in data.iter() {
                writeln!(d.out, "Key: {key} Value: {value}")?;
            }
            Ok(())
        })?;

        self.step("Count", |d| {
            let mut count = 0;
            while count < d.config.count_limit {
                d.line("Count", count)?;
                count += 1;
            }
            Ok(())
        })?;

        self.step("Reversed", |d| {
            let reversed = native::call("reverse", &[Value::from("python")])?;
            d.line("Reversed", reversed)
        })?;

        self.step("ComplexCalc", |d| {
            let total = native::call("complex-calc", &[Value::Int(10)])?;
            d.line("ComplexCalc", total)
        })?;

        self.step("Random", |d| d.draw_randoms("Random"))
    }

    fn run_alternate(&mut self) -> Result<()> {
        self.step("Total", |d| {
            let (x, y) = (Value::Int(X), Value::Int(Y));
            let product = native::call("multiply", &[x.clone(), y.clone()])?;
            let sum = native::call("add", &[x, y])?;
            let partial = native::call("add", &[product, sum])?;
            let total = native::call("add", &[partial, Value::Int(d.config.global_value)])?;
            d.line("Total", total)
        })?;

        self.step("Reversed", |d| {
            let reversed = native::call("reverse", &[Value::from("helloworld")])?;
            d.line("Reversed", reversed)
        })?;

        self.step("ComplexCalc", |d| {
            let total = native::call("alternating-calc", &[Value::Int(8)])?;
            d.line("ComplexCalc", total)
        })?;

        self.step("Random number", |d| d.draw_randoms("Random number"))
    }

    fn step<F>(&mut self, label: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.config.trace {
            eprintln!("\x1b[2m[trace] step {label}\x1b[0m");
        }
        body(self).map_err(|e| e.with_source(label))
    }

    fn line(&mut self, label: &str, value: impl Display) -> Result<()> {
        writeln!(self.out, "{label}: {value}")?;
        Ok(())
    }

    fn draw_randoms(&mut self, label: &str) -> Result<()> {
        let (low, high) = self.config.program.random_bounds();
        for _ in 0..self.config.random_draws {
            let n = self.random.int_inclusive(low, high)?;
            self.line(label, n)?;
        }
        Ok(())
    }
}
