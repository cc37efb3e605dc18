// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! Demonstration options.

use clap::{Arg, Command};

const RUCLO_USAGE: &str = r#"ruclo [OPTIONS]"#;

/// Creates the clap::Command metadata for argument parsing.
fn make_options_parser() -> Command<'static> {
    Command::new("ruclo")
        .no_binary_name(true)
        .override_usage(RUCLO_USAGE)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("no-pause")
                .long("no-pause")
                .takes_value(false)
                .help("Run straight through without waiting for input between demonstrations."),
        )
}

#[derive(Clone, Debug)]
pub struct DemoOptions {
    /// Wait for one line of input after each demonstration block.
    pub pause: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self { pause: true }
    }
}

impl DemoOptions {
    /// Parses options from a list of strings. Exits with a clap diagnostic
    /// on anything it rejects, including `--help` and `--version`.
    pub fn parse_from_args(&mut self, args: &[String]) {
        let matches = match make_options_parser().try_get_matches_from(args.iter()) {
            Ok(matches) => matches,
            Err(e) => e.exit(),
        };
        self.pause = !matches.contains_id("no-pause");
    }
}

#[cfg(test)]
mod test {
    use crate::util::options::DemoOptions;

    #[test]
    fn defaults_to_pausing() {
        assert!(DemoOptions::default().pause);
    }

    #[test]
    fn no_pause_flag_disables_pacing() {
        let mut options = DemoOptions::default();
        options.parse_from_args(&["--no-pause".to_string()]);
        assert!(!options.pause);
    }

    #[test]
    fn empty_args_keep_defaults() {
        let mut options = DemoOptions::default();
        options.parse_from_args(&[]);
        assert!(options.pause);
    }
}
