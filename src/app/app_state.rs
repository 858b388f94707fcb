//! State of the demo application.
//!
//! Holds the wheel itself plus a log fed by the wheel's selection callback,
//! so the panels can show how often the callback ran.

use std::cell::RefCell;
use std::rc::Rc;

use channel_wheel::{ChannelCatalog, ChannelWheel};

/// Record of selection-changed notifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionLog {
    /// Number of callbacks received
    pub count: u32,
    /// Channel reported by the latest callback
    pub last: Option<String>,
}

/// Main demo state.
#[derive(Debug)]
pub struct AppState {
    pub wheel: ChannelWheel,
    /// Shared with the wheel's callback
    pub log: Rc<RefCell<SelectionLog>>,
}

impl AppState {
    /// Creates the demo state around a wheel over `catalog`.
    pub fn new(catalog: ChannelCatalog) -> Self {
        let log = Rc::new(RefCell::new(SelectionLog::default()));
        let mut wheel = ChannelWheel::new(catalog);

        let sink = Rc::clone(&log);
        wheel.set_on_selection_changed(move |name| {
            let mut log = sink.borrow_mut();
            log.count += 1;
            log.last = Some(name.to_string());
            tracing::info!(channel = name, count = log.count, "selection changed");
        });

        Self { wheel, log }
    }

    /// Channel names in catalog order.
    pub fn channel_names(&self) -> Vec<String> {
        self.wheel.catalog().names().map(str::to_string).collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ChannelCatalog::default())
    }
}
