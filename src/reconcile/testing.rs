//! In-memory fakes of the external services for tests

use crate::error::{DisplayError, Result};
use crate::model::WmCommand;
use crate::services::{DisplayServer, MonitorDescription, WindowManager};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct FakeWindowManager {
    available: bool,
    monitors: Vec<(String, Option<u64>)>,
    order: Option<Vec<String>>,
    executed: Mutex<Vec<WmCommand>>,
}

impl FakeWindowManager {
    pub fn new() -> Self {
        Self {
            available: true,
            monitors: Vec::new(),
            order: None,
            executed: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_monitor(mut self, handle: &str, randr_id: Option<u64>) -> Self {
        self.monitors.push((handle.to_string(), randr_id));
        self
    }

    /// Порядок, который возвращает `bspc query -M`, если отличается от порядка добавления
    pub fn with_order(mut self, order: &[&str]) -> Self {
        self.order = Some(order.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect()
    }
}

#[async_trait::async_trait]
impl WindowManager for FakeWindowManager {
    async fn list_monitors(&self) -> Result<Vec<String>> {
        if !self.available {
            return Err(DisplayError::ServiceUnavailable("bspc".to_string()));
        }
        Ok(self
            .order
            .clone()
            .unwrap_or_else(|| self.monitors.iter().map(|(h, _)| h.clone()).collect()))
    }

    async fn describe_monitor(&self, handle: &str) -> Result<MonitorDescription> {
        self.monitors
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, randr_id)| MonitorDescription {
                name: Some(handle.to_string()),
                randr_id: *randr_id,
            })
            .ok_or_else(|| DisplayError::CommandFailed(format!("unknown monitor {}", handle)))
    }

    async fn execute(&self, command: &WmCommand) -> Result<()> {
        self.executed.lock().unwrap().push(command.clone());
        Ok(())
    }
}

pub struct FakeDisplayServer {
    output: Option<String>,
    calls: AtomicUsize,
}

impl FakeDisplayServer {
    pub fn new(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            output: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl DisplayServer for FakeDisplayServer {
    async fn verbose_output(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.output
            .clone()
            .ok_or_else(|| DisplayError::ServiceUnavailable("xrandr".to_string()))
    }
}
