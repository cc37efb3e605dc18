// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! The demonstration runner.
//!
//! Four independent blocks, executed once, in order: a hand-written functor
//! through the generic invoker, an anonymous closure through the same
//! invoker, capture semantics by value and by reference, and type erasure
//! plus a counting predicate. No state crosses a block boundary; the only
//! mutable cell in the whole run is local to the capture block.

use std::cell::Cell;
use std::io::{BufRead, Write};

use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};

use crate::erased::ErasedBinaryOp;
use crate::invocable::functors::{CellSetter, FrozenMin, PairPrinter};
use crate::invocable::{from_fn, operation, Invocable};
use crate::util::options::DemoOptions;

/// Runs the demonstration blocks against an output sink and an input source.
///
/// The sink must be cloneable because the functor block hands the
/// `PairPrinter` a sink of its own alongside the one the invoker writes to.
pub struct DemoRunner<W, R> {
    options: DemoOptions,
    out: W,
    input: R,
}

impl<W, R> DemoRunner<W, R>
where
    W: Write + Clone,
    R: BufRead,
{
    pub fn new(options: DemoOptions, out: W, input: R) -> Self {
        DemoRunner { options, out, input }
    }

    /// Executes all four blocks in order. The first I/O failure aborts the
    /// run and propagates to the caller.
    pub fn run(&mut self) -> Result<()> {
        self.functor_demo()?;
        self.pause()?;
        self.closure_demo()?;
        self.pause()?;
        self.capture_demo()?;
        self.pause()?;
        self.erased_demo()?;
        self.pause()?;
        Ok(())
    }

    /// Blocks until one line of input arrives, then discards it. Content is
    /// ignored; end-of-input falls through so piped runs terminate cleanly.
    fn pause(&mut self) -> Result<()> {
        if !self.options.pause {
            return Ok(());
        }
        debug!("waiting for input");
        let mut discard = String::new();
        self.input.read_line(&mut discard)?;
        Ok(())
    }

    /// A stateless functor passed to the generic invoker with `(2, 3)`.
    fn functor_demo(&mut self) -> Result<()> {
        info!("running the functor demonstration");
        writeln!(self.out, "calling functor with template function:")?;
        let printer = PairPrinter::new(self.out.clone());
        operation(&mut self.out, 2, 3, printer)?;
        Ok(())
    }

    /// An anonymous closure doing the same round trip as the functor.
    fn closure_demo(&mut self) -> Result<()> {
        info!("running the closure demonstration");
        writeln!(self.out, "calling lambda defined function:")?;
        let addition = |a: i32, b: i32| a + b;
        // Computed directly, deliberately unprinted; only the invoker's
        // round trip below echoes the sum.
        addition(2, 3);
        writeln!(
            self.out,
            "passing lambda defined function into template function to be called:"
        )?;
        operation(&mut self.out, 2, 3, from_fn(addition))?;
        Ok(())
    }

    /// Capture by value freezes; capture by reference aliases live storage.
    fn capture_demo(&mut self) -> Result<()> {
        info!("running the capture demonstration");
        let larger = (|a: i32, b: i32| if a > b { a } else { b })(2, 3);
        writeln!(self.out, "larger of 2 and 3: {}", larger)?;

        let two = 2;
        let mut less_than_2 = FrozenMin::new(two);
        let smaller = less_than_2.invoke((3,));
        writeln!(self.out, "smaller of 2 and 3: {}", smaller)?;

        // Read and printed before anything is written to it, so it starts
        // from an explicit 0 rather than an indeterminate value.
        let thing = Cell::new(0);
        writeln!(self.out, "thing: {}", thing.get())?;
        let mut set_thing = CellSetter::new(&thing);
        set_thing.invoke((2,));
        writeln!(self.out, "thing: {}", thing.get())?;
        Ok(())
    }

    /// A type-erased callable, then a predicate counted over a fixed
    /// sequence.
    fn erased_demo(&mut self) -> Result<()> {
        info!("running the type-erasure demonstration");
        let mut multiply = ErasedBinaryOp::boxed(|a, b| a * b);
        writeln!(self.out, "multiply(2, 3): {}", multiply.call(2, 3))?;

        let numbers = vec![2, 5, 17, 99, 33, -6];
        debug!("counting over [{}]", numbers.iter().join(", "));
        let greater_than_10 = |other: i32| other > 10;
        let total = numbers.iter().filter(|&&n| greater_than_10(n)).count();
        writeln!(self.out, "numbers in array greater than 10{}", total)?;
        Ok(())
    }
}
