#![cfg(feature = "thread-id-fmt")]

use log::{LevelFilter, Log, Metadata, Record};
use std::{
    sync::{mpsc, Mutex},
    thread,
    time::Duration,
};
use utils::FormatId;

struct ThreadTaggedLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for ThreadTaggedLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format!("[{:016x}] {}", thread::current().id().formatted(), record.args());
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    fn flush(&self) {}
}

static LOGGER: ThreadTaggedLogger = ThreadTaggedLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn logger_tagging_records_with_thread_id() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let id = thread::current().id().formatted();
        log::debug!("worker started");
        tx.send(id).unwrap();
    });

    let id = rx.recv_timeout(Duration::from_secs(5))
        .expect("formatted() did not return");

    let lines = LOGGER.lines.lock().unwrap();
    let expected = format!("[{:016x}] worker started", id);
    assert!(lines.iter().any(|line| *line == expected), "{:?}", *lines);
}
