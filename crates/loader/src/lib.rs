//! Dependent-select loading: at most one UI-mutating request per widget,
//! cancel-and-replace when a new load starts, bounded timeout at the
//! transport so the widget never stays in the loading state.

pub mod response;
pub mod transport;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::{AbortHandle, JoinHandle};
use tracing::{info, warn};

use formflow_core::DependentSelect;

pub use response::{ResponseStatus, ZonesResponse};
pub use transport::{HttpTransport, ZoneTransport};

/// Repopulates one dependent select from a remote endpoint.
///
/// Exactly one load per widget can mutate UI at a time: starting a new load
/// aborts the previous task before any UI changes, and the in-flight gate is
/// raised synchronously so callers on the event path observe it before the
/// task is first polled.
pub struct RemoteSelectLoader {
    transport: Arc<dyn ZoneTransport>,
    widget: Arc<DependentSelect>,
    in_flight: Arc<AtomicBool>,
    current: Mutex<Option<AbortHandle>>,
}

impl RemoteSelectLoader {
    pub fn new(transport: Arc<dyn ZoneTransport>, widget: Arc<DependentSelect>) -> Self {
        Self {
            transport,
            widget,
            in_flight: Arc::new(AtomicBool::new(false)),
            current: Mutex::new(None),
        }
    }

    /// Whether a load for this widget is pending. Event-path callers gate
    /// on this before triggering another load.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Start loading options for `parent`. Fire-and-forget for event-path
    /// callers; the returned handle can be awaited where completion matters.
    ///
    /// Any earlier load for this widget is aborted first, so the displayed
    /// result always corresponds to the most recent request. An aborted
    /// task never clears the gate; its replacement does.
    pub fn load_options_for(&self, parent: &str) -> JoinHandle<()> {
        if let Some(previous) = self.current.lock().unwrap().take() {
            previous.abort();
        }

        self.in_flight.store(true, Ordering::SeqCst);
        self.widget.enter_loading();

        let transport = Arc::clone(&self.transport);
        let widget = Arc::clone(&self.widget);
        let in_flight = Arc::clone(&self.in_flight);
        let parent = parent.to_owned();

        let handle = tokio::spawn(async move {
            match transport.fetch_zones(&parent).await {
                Ok(response) if response.has_options() => {
                    info!(%parent, count = response.data.len(), "zones loaded");
                    widget.populate(&response.data);
                }
                Ok(_) => {
                    info!(%parent, "no zones available");
                    widget.enter_empty();
                }
                Err(err) => {
                    warn!(%parent, error = %err, "zone load failed");
                    widget.enter_error();
                }
            }
            // Cleared after all UI mutation, so a failure mid-parse still
            // leaves the loader usable for the next attempt.
            in_flight.store(false, Ordering::SeqCst);
        });

        *self.current.lock().unwrap() = Some(handle.abort_handle());
        handle
    }
}
