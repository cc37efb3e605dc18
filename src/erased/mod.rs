// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! Type-erased binary callables.
//!
//! A closure's concrete type is unnameable, so storing one behind the fixed
//! signature `(i32, i32) -> i32` requires erasing it. Both erasure
//! strategies are spelled out as variants of a tagged union: a plain
//! function pointer for capture-free callables, and a boxed trait object
//! carrying its captured state behind a vtable. [`ErasedBinaryOp::call`] is
//! the uniform contract over both.

use std::fmt::{Debug, Formatter, Result};

use crate::invocable::Invocable;

pub enum ErasedBinaryOp {
    /// A capture-free function pointer.
    Ptr(fn(i32, i32) -> i32),
    /// A closure together with its captured state, boxed behind a vtable.
    Boxed(Box<dyn FnMut(i32, i32) -> i32>),
}

impl ErasedBinaryOp {
    /// Erases a closure, moving its captured state onto the heap.
    pub fn boxed<F>(func: F) -> Self
    where
        F: FnMut(i32, i32) -> i32 + 'static,
    {
        ErasedBinaryOp::Boxed(Box::new(func))
    }

    /// Wraps a plain function pointer. Nothing is allocated.
    pub fn ptr(func: fn(i32, i32) -> i32) -> Self {
        ErasedBinaryOp::Ptr(func)
    }

    /// Applies the erased callable, whichever variant is stored.
    pub fn call(&mut self, a: i32, b: i32) -> i32 {
        match self {
            ErasedBinaryOp::Ptr(func) => func(a, b),
            ErasedBinaryOp::Boxed(func) => func(a, b),
        }
    }
}

/// The erased callable is itself invocable, so it can be handed to the
/// generic invoker like any other functor.
impl Invocable<(i32, i32)> for ErasedBinaryOp {
    type Output = i32;

    fn invoke(&mut self, (a, b): (i32, i32)) -> i32 {
        self.call(a, b)
    }
}

impl Debug for ErasedBinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ErasedBinaryOp::Ptr(_) => f.write_str("ErasedBinaryOp::Ptr(..)"),
            ErasedBinaryOp::Boxed(_) => f.write_str("ErasedBinaryOp::Boxed(..)"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::erased::ErasedBinaryOp;
    use crate::invocable::operation;

    fn difference(a: i32, b: i32) -> i32 {
        a - b
    }

    #[test]
    fn boxed_closure_multiplies() {
        let mut multiply = ErasedBinaryOp::boxed(|a, b| a * b);
        assert_eq!(multiply.call(2, 3), 6);
    }

    #[test]
    fn function_pointer_variant() {
        let mut op = ErasedBinaryOp::ptr(difference);
        assert_eq!(op.call(5, 3), 2);
    }

    #[test]
    fn boxed_closure_keeps_captured_state() {
        let factor = 10;
        let mut scaled = ErasedBinaryOp::boxed(move |a, b| (a + b) * factor);
        assert_eq!(scaled.call(2, 3), 50);
    }

    #[test]
    fn erased_op_satisfies_invocable() {
        let mut out = Vec::new();
        let multiply = ErasedBinaryOp::boxed(|a, b| a * b);
        let result = operation(&mut out, 2, 3, multiply).unwrap();
        assert_eq!(result, 6);
        assert_eq!(String::from_utf8(out).unwrap(), "6\n");
    }
}
