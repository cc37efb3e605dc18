// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! Functor variants of the [`Invocable`] capability, one per capture shape.
//!
//! [`PairPrinter`] captures nothing, [`FrozenMin`] copies one value in at
//! construction time, and [`CellSetter`] holds a live back-reference to
//! storage it does not own.

use std::cell::Cell;
use std::io::Write;

use super::Invocable;

/// A stateless functor: writes its two inputs separated by a single space
/// and always returns 0, ignoring the inputs for the return value.
pub struct PairPrinter<W> {
    out: W,
}

impl<W: Write> PairPrinter<W> {
    pub fn new(out: W) -> Self {
        PairPrinter { out }
    }
}

impl<W: Write> Invocable<(i32, i32)> for PairPrinter<W> {
    type Output = i32;

    fn invoke(&mut self, (a, b): (i32, i32)) -> i32 {
        writeln!(self.out, "{} {}", a, b).unwrap();
        0
    }
}

/// A value-capturing functor: `a` is copied in when the functor is built
/// and frozen there. Invoking with `b` returns the smaller of the two.
#[derive(Clone, Copy, Debug)]
pub struct FrozenMin {
    a: i32,
}

impl FrozenMin {
    pub fn new(a: i32) -> Self {
        FrozenMin { a }
    }
}

impl Invocable<(i32,)> for FrozenMin {
    type Output = i32;

    fn invoke(&mut self, (b,): (i32,)) -> i32 {
        if self.a < b {
            self.a
        } else {
            b
        }
    }
}

/// A reference-capturing functor: stores a non-owning back-reference to an
/// external cell and writes every argument it is invoked with into it.
///
/// The setter borrows the cell and therefore cannot outlive it; the
/// dangling-alias hazard a by-reference capture carries is a lifetime error
/// here rather than a runtime surprise.
pub struct CellSetter<'a> {
    a: &'a Cell<i32>,
}

impl<'a> CellSetter<'a> {
    pub fn new(a: &'a Cell<i32>) -> Self {
        CellSetter { a }
    }
}

impl Invocable<(i32,)> for CellSetter<'_> {
    type Output = ();

    fn invoke(&mut self, (b,): (i32,)) {
        self.a.set(b);
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use rand::Rng;

    use crate::invocable::functors::{CellSetter, FrozenMin, PairPrinter};
    use crate::invocable::{operation, Invocable};

    #[test]
    fn pair_printer_prints_and_returns_zero() {
        let mut printer = PairPrinter::new(Vec::new());
        assert_eq!(printer.invoke((2, 3)), 0);
        assert_eq!(String::from_utf8(printer.out).unwrap(), "2 3\n");
    }

    #[test]
    fn pair_printer_through_invoker() {
        let mut out = Vec::new();
        let printer = PairPrinter::new(Vec::new());
        let result = operation(&mut out, 2, 3, printer).unwrap();
        assert_eq!(result, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "0\n");
    }

    #[test]
    fn frozen_min_returns_smaller() {
        let two = 2;
        let mut less_than_2 = FrozenMin::new(two);
        assert_eq!(less_than_2.invoke((3,)), 2);
        assert_eq!(less_than_2.invoke((1,)), 1);
    }

    #[test]
    fn value_capture_is_frozen() {
        let mut two = 2;
        let mut frozen = FrozenMin::new(two);
        two = 100;
        assert_eq!(frozen.invoke((3,)), 2);
        assert_eq!(two, 100);
    }

    #[test]
    fn value_capture_is_frozen_randomized() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen_range(-1000..1000);
            let b = rng.gen_range(-1000..1000);
            let mut source = a;
            let mut frozen = FrozenMin::new(source);
            source = rng.gen_range(-1000..1000);
            let expected = if a < b { a } else { b };
            assert_eq!(frozen.invoke((b,)), expected);
            assert!((-1000..1000).contains(&source));
        }
    }

    #[test]
    fn reference_capture_mutates_source() {
        let thing = Cell::new(0);
        let mut set_thing = CellSetter::new(&thing);
        set_thing.invoke((2,));
        assert_eq!(thing.get(), 2);
        set_thing.invoke((-7,));
        assert_eq!(thing.get(), -7);
    }
}
