// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Config CLI subcommands: show, defaults.

use std::io::Write;

use crate::config::Config;

/// Print effective config as key-value pairs to stdout.
pub fn run_show(config: &Config) {
    print_config(config);
}

/// Print default config values (no file or env overrides) to stdout.
pub fn run_defaults() {
    print_config(&Config::default());
}

/// Write one `key=value` line per summary entry.
pub fn write_config<W: Write>(out: &mut W, config: &Config) -> std::io::Result<()> {
    for (key, value) in config.summary() {
        writeln!(out, "{}={}", key, value)?;
    }
    Ok(())
}

fn print_config(config: &Config) {
    if let Err(e) = write_config(&mut std::io::stdout().lock(), config) {
        eprintln!("Error: failed to write config: {}", e);
    }
}
