//! `log` backend for the kernel.
//!
//! Records are formatted as `[LEVEL] target: message` and handed to a sink
//! function chosen at boot; on hardware that is the serial port. Installation
//! needs no heap, so logging works from the first lines of `kernel_main`.
//!
//! Nothing may log from interrupt context: the sink takes the serial lock,
//! which the interrupted code might already hold.

use core::fmt;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Once;

/// Destination for formatted log lines.
pub type Sink = fn(fmt::Arguments);

/// Logger forwarding every enabled record to a [`Sink`].
pub struct KernelLogger {
    sink: Once<Sink>,
}

static LOGGER: KernelLogger = KernelLogger { sink: Once::new() };

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(sink) = self.sink.get() {
            sink(format_args!(
                "[{:<5}] {}: {}\n",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

/// Installs the kernel logger, writing to `sink` up to `level`.
///
/// Fails if a logger is already installed.
pub fn init(sink: Sink, level: LevelFilter) -> Result<(), SetLoggerError> {
    LOGGER.sink.call_once(|| sink);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;
    use std::string::String;
    use std::sync::Mutex;

    static CAPTURED: Mutex<String> = Mutex::new(String::new());

    fn capture(args: fmt::Arguments) {
        let mut captured = CAPTURED.lock().unwrap();
        captured.write_fmt(args).unwrap();
    }

    #[test]
    fn test_init_routes_records_to_sink() {
        init(capture, LevelFilter::Debug).expect("first install succeeds");
        assert!(init(capture, LevelFilter::Debug).is_err());

        log::warn!(target: "keyboard", "queue overflow, {} dropped", 3);
        log::trace!(target: "keyboard", "filtered out");

        let captured = CAPTURED.lock().unwrap();
        assert!(captured.contains("[WARN ] keyboard: queue overflow, 3 dropped\n"));
        assert!(!captured.contains("filtered out"));
    }
}
