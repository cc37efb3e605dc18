// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, Write};

pub mod options;

/// A cloneable handle to standard output.
///
/// The demonstration blocks hand a sink of their own to functors that print
/// (see `PairPrinter`), so the sink type has to be cloneable. `Stdout` is
/// not; a zero-sized handle that grabs a fresh `stdout()` per write is.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
