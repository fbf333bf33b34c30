use log::{Level, LevelFilter, Metadata, Record};
use std::collections::VecDeque;
use std::sync::Mutex;

// Tests run in parallel and share this buffer, so assertions should look
// for records naming their own files.
const RING_BUFFER_SIZE: usize = 200;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> = Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

struct RingLogger;

impl log::Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut buffer = LOG_BUFFER.lock().unwrap();
            if buffer.len() >= RING_BUFFER_SIZE {
                buffer.pop_front();
            }
            buffer.push_back(format!("{}: {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Installs the ring logger. Safe to call from every test.
pub fn init_logger() {
    if log::set_logger(&RingLogger).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

/// Captured records mentioning `needle`, oldest first.
pub fn records_containing(needle: &str) -> Vec<String> {
    let buffer = LOG_BUFFER.lock().unwrap();
    buffer
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}
