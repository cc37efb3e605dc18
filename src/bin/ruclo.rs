// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! The main routine of `ruclo`.
//!
//! Walks through the demonstration blocks once, pacing on stdin after each
//! block unless `--no-pause` is given, and exits 0 on a clean run.

use log::*;
use std::env;
use std::io;

use ruclo::demo::DemoRunner;
use ruclo::util::options::DemoOptions;
use ruclo::util::StdoutSink;

fn main() {
    // Initialize the logger.
    if env::var("RUCLO_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("RUCLO_LOG")
            .write_style("RUCLO_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let mut options = DemoOptions::default();
    let args = env::args().skip(1).collect::<Vec<_>>();
    options.parse_from_args(&args[..]);
    info!("demo options: {:?}", options);

    let stdin = io::stdin();
    let mut runner = DemoRunner::new(options, StdoutSink, stdin.lock());
    let exit_code = match runner.run() {
        Ok(()) => 0,
        Err(e) => {
            error!("demonstration aborted: {:#}", e);
            eprintln!("ruclo: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}
