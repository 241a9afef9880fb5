// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracing setup.
//!
//! The TUI owns stdout, so interactive runs only log when `DOCDECK_LOG_FILE` names a file.
//! MCP stdio mode logs to stderr (stdout carries the protocol).
//!
//! `RUST_LOG` overrides the level filter (default `info`, or `debug` with `--debug`).

use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_FILE_ENV: &str = "DOCDECK_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Logging disabled.
    Off,
    Stderr,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub debug: bool,
    pub sink: LogSink,
}

impl TracingConfig {
    /// Chooses the sink for a run: stderr for stdio MCP, otherwise the env-configured file.
    pub fn for_mode(debug: bool, stdio_mcp: bool) -> Self {
        let sink = if stdio_mcp {
            LogSink::Stderr
        } else {
            match std::env::var_os(LOG_FILE_ENV) {
                Some(path) if !path.is_empty() => LogSink::File(PathBuf::from(path)),
                _ => LogSink::Off,
            }
        };
        Self { debug, sink }
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_tracing(config: &TracingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.debug))
        .with_target(config.debug)
        .with_ansi(false)
        .compact();

    match &config.sink {
        LogSink::Off => Ok(()),
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
    }
}
