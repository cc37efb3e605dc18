// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! A guided tour of callable values in Rust.
//!
//! Closures have compiler-synthesized, unnameable types; this crate gives the
//! concept an explicit seam instead. The [`invocable`] module defines the
//! `Invocable` capability together with hand-written functor variants for
//! each capture shape (stateless, by value, by reference), [`erased`] stores
//! callables behind a fixed signature, and [`demo`] walks through all of it
//! block by block from the `ruclo` binary.

pub mod demo;
pub mod erased;
pub mod invocable;
pub mod util;
