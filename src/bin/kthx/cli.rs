//! # Cli
//!
//! This module contains everything needed for parsing the CLI arguments for
//! Kthx.

use clap::{Parser, ValueEnum};

/// Struct containing the CLI configuration for Kthx.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The path to the LOLCODE source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,

    /// Dump the token stream as JSON instead of running the program.
    #[arg(long)]
    pub dump_tokens: bool,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

/// Enum for specifying the log level of Kthx.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// A log level, where also warnings are logged.
    #[value(alias("1"))]
    Warn,

    /// Also log information about the general state of the interpreter, e.g.,
    /// how many tokens a program produced.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally in the interpreter, including
    /// every symbol table update.
    #[value(alias("3"))]
    Debug,

    /// Log extra information, e.g., every single function call.
    #[value(alias("4"))]
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
