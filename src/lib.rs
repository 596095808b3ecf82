//! Log files for test suites, with predictable names that can be committed
//! and compared against later runs.
//!
//! ```no_run
//! use std::io::Write;
//! use testlog::{LogFile, LogFileConfig};
//!
//! let config = LogFileConfig::new().with_suffix(Some("v2"));
//! let mut log = LogFile::open("Run", false, true, &config)?;
//! writeln!(log, "all good")?;
//! # Ok::<(), testlog::Error>(())
//! ```

mod cleanup;
mod config;
mod errors;
mod file_name;
mod files;
mod functions;
mod locale;
mod log_file;
mod suffix;

pub use config::LogFileConfig;
pub use errors::Error;
pub use file_name::{TESTLOG_EXTENSION, log_file_name};
pub use functions::{OpenMode, UTF8_BOM};
pub use locale::Locale;
pub use log_file::LogFile;
pub use suffix::Suffix;
