//! In-memory port implementations shared by the unit tests.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use pindrop_domain::{ApiRequest, ApiResponse, Role, User, route_path};
use serde_json::Value;

use crate::ports::{HttpTransport, KeyValueStorage, Navigator, StorageError, TransportError};

pub fn user(role: Role) -> User {
    User {
        id: 7,
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        role,
        pin_code: "560001".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.insert(key, value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Transport that records every request and replays queued responses.
///
/// When the queue is empty it answers `200 {}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .push_back(Ok(ApiResponse::with_json(status, &body)));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request.clone());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::with_json(200, &serde_json::json!({}))))
    }
}

/// Navigator that records redirects and moves to the target path.
#[derive(Debug)]
pub struct RecordingNavigator {
    state: Mutex<(String, Vec<String>)>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            state: Mutex::new((path.to_string(), Vec::new())),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.state.lock().1.clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.state.lock().0.clone()
    }

    fn redirect_unless_at(&self, path: &str) -> bool {
        let mut state = self.state.lock();
        if route_path(&state.0) == path {
            return false;
        }
        state.0 = path.to_string();
        state.1.push(path.to_string());
        true
    }
}
