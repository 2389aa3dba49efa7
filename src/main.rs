// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! statsd-otlp CLI entry point.
//!
//! ## CLI Subcommands
//!
//! - `statsd-otlp-cli convert <FILE|->` - Convert events to OTLP JSON
//! - `statsd-otlp-cli config show` - Effective configuration
//! - `statsd-otlp-cli config defaults` - Default configuration

use std::process::ExitCode;

use statsd_otlp::cli::{config_cmd, run_convert};
use statsd_otlp::config;
use statsd_otlp::telemetry::init_logging;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match command {
        "convert" => {
            let Some(source) = args.get(2) else {
                eprintln!("Missing input: pass a file path or '-' for stdin");
                print_usage();
                return ExitCode::from(2u8);
            };
            let cfg = match config::load() {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    return ExitCode::from(2u8);
                }
            };
            if let Err(e) = init_logging(&cfg.log) {
                eprintln!("Logging disabled: {}", e);
            }
            let code = run_convert(source, &cfg);
            ExitCode::from(code as u8)
        }
        "config" => {
            let subcommand = args.get(2).map(|s| s.as_str()).unwrap_or("show");
            match subcommand {
                "show" => match config::load() {
                    Ok(cfg) => {
                        config_cmd::run_show(&cfg);
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("Configuration error: {}", e);
                        ExitCode::from(2u8)
                    }
                },
                "defaults" => {
                    config_cmd::run_defaults();
                    ExitCode::SUCCESS
                }
                _ => {
                    eprintln!("Unknown config subcommand: {}", subcommand);
                    print_usage();
                    ExitCode::FAILURE
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("statsd-otlp {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "statsd-otlp v{}

USAGE:
    statsd-otlp-cli [COMMAND] [OPTIONS]

COMMANDS:
    convert FILE   Convert a JSON array of statsd events to OTLP ResourceLogs JSON ('-' reads stdin)
    config         Show configuration (show, defaults)
    version        Show version information
    help           Show this help message

ENVIRONMENT:
    STATSD_OTLP_CONFIG                          TOML config file
    STATSD_OTLP_EVENT_TITLE_ATTRIBUTE_KEY       Title attribute key (default: title)
    STATSD_OTLP_EVENT_CATEGORY_ATTRIBUTE_KEY    Category attribute key (default: category)
    STATSD_OTLP_EVENT_PROPERTIES_ATTRIBUTE_KEY  Properties group key (default: properties)
    STATSD_OTLP_SCOPE_NAME                      Instrumentation scope name
    STATSD_OTLP_LOG_LEVEL                       Log filter (default: info)
    STATSD_OTLP_LOG_FORMAT                      json or pretty
    STATSD_OTLP_LOG_FILE                        Append logs to this file instead of stderr

EXIT CODES:
    0  Success
    1  Some events were rejected
    2  Configuration or input error
",
        version
    );
}
