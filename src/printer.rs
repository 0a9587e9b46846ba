//! Console output sink.
//!
//! Everything the downloader shows to the user goes through a [`Printer`]:
//! the status table on the normal channel, per-job failures on the error
//! channel. Implementations must be shareable across download tasks.
//!
//! # Examples
//!
//! ```rust
//! use multiget::printer::{Printer, StdPrinter};
//!
//! let printer = StdPrinter;
//! printer.print(format_args!("{:>4} \n", "file"));
//! ```

use std::fmt;
use std::io::{self, Write};

/// Output sink with a normal and an error channel.
pub trait Printer: Send + Sync {
    /// Writes formatted text to the normal output.
    fn print(&self, args: fmt::Arguments<'_>);

    /// Writes formatted text to the error output.
    fn eprint(&self, args: fmt::Arguments<'_>);
}

/// Printer writing to the process' stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPrinter;

impl Printer for StdPrinter {
    fn print(&self, args: fmt::Arguments<'_>) {
        let mut out = io::stdout().lock();
        // Output errors are ignored.
        let _ = out.write_fmt(args).and_then(|_| out.flush());
    }

    fn eprint(&self, args: fmt::Arguments<'_>) {
        let _ = io::stderr().lock().write_fmt(args);
    }
}
