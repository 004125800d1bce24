use std::{cell::RefCell, collections::HashMap, rc::Rc};
use dioxus::logger::tracing::warn;
use web_sys::{window, Storage};

use super::error::AppError;

/// String key-value persistence, shaped after `localStorage`.
pub trait KeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, AppError>;
  fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
  fn remove(&self, key: &str) -> Result<(), AppError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
  fn get(&self, key: &str) -> Result<Option<String>, AppError> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
    (**self).set(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), AppError> {
    (**self).remove(key)
  }
}

/// Lives only as long as the page; used when `localStorage` is off and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.borrow().len()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>, AppError> {
    Ok(self.entries.borrow().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
    self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), AppError> {
    self.entries.borrow_mut().remove(key);
    Ok(())
  }
}

pub struct LocalStore {
  storage: Storage,
}

impl LocalStore {
  pub fn open() -> Result<Self, AppError> {
    let window = window().ok_or_else(|| AppError::WasmError("global window missing".to_string()))?;
    let storage = window.local_storage()
      .map_err(|e| AppError::StorageUnavailable(format!("{:?}", e)))?
      .ok_or_else(|| AppError::StorageUnavailable("localStorage disabled".to_string()))?;
    Ok(Self { storage })
  }
}

impl KeyValueStore for LocalStore {
  fn get(&self, key: &str) -> Result<Option<String>, AppError> {
    self.storage.get_item(key).map_err(|e| AppError::StorageReadError(format!("{}: {:?}", key, e)))
  }

  fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
    self.storage.set_item(key, value).map_err(|e| AppError::StorageWriteError(format!("{}: {:?}", key, e)))
  }

  fn remove(&self, key: &str) -> Result<(), AppError> {
    self.storage.remove_item(key).map_err(|e| AppError::StorageWriteError(format!("{}: {:?}", key, e)))
  }
}

/// `localStorage` when the browser allows it, otherwise a per-page memory store.
pub fn browser_store() -> Rc<dyn KeyValueStore> {
  match LocalStore::open() {
    Ok(store) => Rc::new(store),
    Err(e) => {
      warn!("{}, alert state will not survive reloads", e);
      Rc::new(MemoryStore::new())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
  }

  #[test]
  fn shared_handle_sees_same_entries() {
    let store = Rc::new(MemoryStore::new());
    let handle: Rc<dyn KeyValueStore> = store.clone();
    handle.set("device_alert_never_show", "true").unwrap();
    assert_eq!(store.get("device_alert_never_show").unwrap().as_deref(), Some("true"));
  }
}
