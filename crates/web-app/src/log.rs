use std::sync::{Arc, Mutex};

use chrono::Local;
use gloo_console;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};
use thiserror;

/// Number of log entries retained in the persisted log.
const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

/// Persisted ring of recent log messages, kept so that errors swallowed by
/// the data layer remain inspectable.
#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<Vec<Entry>, Error>;
    fn write_entries(&self, entries: &[Entry]) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

pub(crate) fn append(repository: &dyn Repository, entry: Entry) -> Result<(), Error> {
    let mut entries = repository.read_entries()?;
    entries.push(entry);
    if entries.len() > MAX_ENTRIES {
        entries.drain(..entries.len() - MAX_ENTRIES);
    }
    repository.write_entries(&entries)
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Some(ref log) = *LOG.lock().unwrap() {
                let message = record.args().to_string();
                match record.level() {
                    Level::Error => gloo_console::error!(message),
                    Level::Warn => gloo_console::warn!(message),
                    Level::Info => gloo_console::info!(message),
                    Level::Debug | Level::Trace => gloo_console::debug!(message),
                }

                let _ = append(
                    &*log.lock().unwrap(),
                    Entry {
                        time: Local::now().format("%b %d %H:%M:%S").to_string(),
                        level: record.level(),
                        message: record.args().to_string(),
                    },
                );
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        entries: RwLock<Vec<Entry>>,
    }

    impl Repository for FakeRepository {
        fn read_entries(&self) -> Result<Vec<Entry>, Error> {
            Ok(self.entries.read().unwrap().clone())
        }

        fn write_entries(&self, entries: &[Entry]) -> Result<(), Error> {
            *self.entries.write().unwrap() = entries.to_vec();
            Ok(())
        }
    }

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Jan 01 10:00:00".to_string(),
            level: Level::Error,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let repository = FakeRepository::default();

        append(&repository, entry("first")).unwrap();
        append(&repository, entry("second")).unwrap();

        assert_eq!(
            repository.read_entries().unwrap(),
            vec![entry("first"), entry("second")]
        );
    }

    #[test]
    fn test_append_drops_oldest_entries_beyond_limit() {
        let repository = FakeRepository::default();

        for i in 0..MAX_ENTRIES + 10 {
            append(&repository, entry(&i.to_string())).unwrap();
        }

        let entries = repository.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.first().unwrap().message, "10");
        assert_eq!(
            entries.last().unwrap().message,
            (MAX_ENTRIES + 9).to_string()
        );
    }
}
