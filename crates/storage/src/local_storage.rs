use anchor_domain as domain;
use anchor_web_app::log;
use gloo_storage::Storage as GlooStorage;

use crate::document::AppDataDocument;

/// Browser local storage adapter.
///
/// The whole aggregate lives as one JSON document under a fixed key. A
/// missing key reads as the default aggregate; an undecodable value is
/// reported as corrupt so the service can fall back to the default.
pub struct LocalStorage;

const STORAGE_KEY: &str = "anchor-progress-tracker";

impl domain::DataRepository for LocalStorage {
    fn read_app_data(&self) -> Result<domain::AppData, domain::StorageError> {
        match gloo_storage::LocalStorage::get::<AppDataDocument>(STORAGE_KEY) {
            Ok(document) => domain::AppData::try_from(document)
                .map_err(|err| domain::StorageError::Corrupt(err.to_string())),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
                Ok(domain::AppData::default())
            }
            Err(err @ gloo_storage::errors::StorageError::SerdeError(_)) => {
                Err(domain::StorageError::Corrupt(err.to_string()))
            }
            Err(err) => Err(domain::StorageError::Unknown(err.to_string())),
        }
    }

    fn write_app_data(&self, data: &domain::AppData) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(STORAGE_KEY, AppDataDocument::from(data))
            .map_err(|err| domain::StorageError::Unknown(err.to_string()))
    }
}

/// Local storage backend for the persisted application log.
pub struct Log;

const LOG_KEY: &str = "anchor-log";

impl log::Repository for Log {
    fn read_entries(&self) -> Result<Vec<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(LOG_KEY) {
            Ok(entries) => Ok(entries),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(vec![]),
            Err(err) => Err(log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entries(&self, entries: &[log::Entry]) -> Result<(), log::Error> {
        gloo_storage::LocalStorage::set(LOG_KEY, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
