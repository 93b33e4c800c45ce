//! Mock HEOS controller
//!
//! Records every call and fails on demand, like the `controller` fixture
//! backed by a mocked pyheos client.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ha_heos::{ControllerFactory, HeosController, HeosEntryData, HeosError};

#[derive(Default)]
pub struct MockHeosController {
    hosts: Mutex<Vec<String>>,
    sign_in_calls: Mutex<Vec<(String, String)>>,
    sign_out_calls: AtomicUsize,
    connect_calls: AtomicUsize,
    disconnect_calls: AtomicUsize,
    sign_in_error: Mutex<Option<HeosError>>,
    sign_out_error: Mutex<Option<HeosError>>,
    connect_error: Mutex<Option<HeosError>>,
    signed_in: Mutex<Option<String>>,
}

impl MockHeosController {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Factory handing out this controller for every entry
    pub fn factory(controller: &Arc<Self>) -> ControllerFactory {
        let controller = controller.clone();
        Arc::new(move |data: &HeosEntryData| -> Arc<dyn HeosController> {
            controller.hosts.lock().unwrap().push(data.host.clone());
            controller.clone()
        })
    }

    pub fn fail_sign_in(&self, error: HeosError) {
        *self.sign_in_error.lock().unwrap() = Some(error);
    }

    pub fn fail_sign_out(&self, error: HeosError) {
        *self.sign_out_error.lock().unwrap() = Some(error);
    }

    pub fn fail_connect(&self, error: HeosError) {
        *self.connect_error.lock().unwrap() = Some(error);
    }

    /// Hosts the factory built a controller for
    pub fn hosts(&self) -> Vec<String> {
        self.hosts.lock().unwrap().clone()
    }

    pub fn sign_in_calls(&self) -> Vec<(String, String)> {
        self.sign_in_calls.lock().unwrap().clone()
    }

    pub fn assert_sign_in_called_once_with(&self, username: &str, password: &str) {
        assert_eq!(
            self.sign_in_calls(),
            vec![(username.to_string(), password.to_string())]
        );
    }

    pub fn sign_out_call_count(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    pub fn connect_call_count(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn disconnect_call_count(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }

    /// Forget recorded calls, keeping configured failures
    pub fn reset_calls(&self) {
        self.sign_in_calls.lock().unwrap().clear();
        self.sign_out_calls.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl HeosController for MockHeosController {
    async fn connect(&self) -> Result<(), HeosError> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        match self.connect_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn disconnect(&self) -> Result<(), HeosError> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<(), HeosError> {
        self.sign_in_calls
            .lock()
            .unwrap()
            .push((username.to_string(), password.to_string()));
        if let Some(err) = self.sign_in_error.lock().unwrap().clone() {
            return Err(err);
        }
        *self.signed_in.lock().unwrap() = Some(username.to_string());
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), HeosError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.sign_out_error.lock().unwrap().clone() {
            return Err(err);
        }
        *self.signed_in.lock().unwrap() = None;
        Ok(())
    }

    fn signed_in_username(&self) -> Option<String> {
        self.signed_in.lock().unwrap().clone()
    }
}
