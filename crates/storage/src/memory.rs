use std::cell::RefCell;

use anchor_domain as domain;

use crate::document::AppDataDocument;

/// In-memory adapter for tests and non-web targets.
///
/// The aggregate is kept as a serialized JSON string so that reads and
/// writes exercise the same document path as the local storage adapter.
#[derive(Default)]
pub struct Memory {
    value: RefCell<Option<String>>,
}

impl domain::DataRepository for Memory {
    fn read_app_data(&self) -> Result<domain::AppData, domain::StorageError> {
        match &*self.value.borrow() {
            None => Ok(domain::AppData::default()),
            Some(value) => {
                let document: AppDataDocument = serde_json::from_str(value)
                    .map_err(|err| domain::StorageError::Corrupt(err.to_string()))?;
                domain::AppData::try_from(document)
                    .map_err(|err| domain::StorageError::Corrupt(err.to_string()))
            }
        }
    }

    fn write_app_data(&self, data: &domain::AppData) -> Result<(), domain::StorageError> {
        let value = serde_json::to_string(&AppDataDocument::from(data))
            .map_err(|err| domain::StorageError::Unknown(err.to_string()))?;
        *self.value.borrow_mut() = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anchor_domain::{AppData, DataRepository, Service, StorageError};
    use pretty_assertions::assert_eq;

    use crate::tests::data;

    use super::*;

    #[test]
    fn test_read_returns_default_when_nothing_is_stored() {
        assert_eq!(Memory::default().read_app_data(), Ok(AppData::default()));
    }

    #[test]
    fn test_load_after_save_round_trips() {
        let repository = Memory::default();
        let data = data::app_data();

        repository.write_app_data(&data).unwrap();

        assert_eq!(repository.read_app_data(), Ok(data));
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let repository = Memory::default();
        *repository.value.borrow_mut() = Some("{not json".to_string());

        assert!(matches!(
            repository.read_app_data(),
            Err(StorageError::Corrupt(_))
        ));
    }

    #[test]
    fn test_service_falls_back_to_default_on_corrupt_value() {
        let repository = Memory::default();
        *repository.value.borrow_mut() = Some("[]".to_string());

        assert_eq!(Service::new(repository).load(), AppData::default());
    }

    #[test]
    fn test_preset_persists_and_reloads() {
        let service = Service::new(Memory::default());

        let data = service.load_preset();

        assert!(data.has_loaded_preset);
        assert!(!data.workout_days.is_empty());
        assert_eq!(service.load(), data);
    }
}
