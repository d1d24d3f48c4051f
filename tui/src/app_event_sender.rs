use tokio::sync::mpsc::UnboundedSender;

use crate::app_event::AppEvent;

#[derive(Clone, Debug)]
pub struct AppEventSender {
    app_event_tx: UnboundedSender<AppEvent>,
}

impl AppEventSender {
    pub fn new(app_event_tx: UnboundedSender<AppEvent>) -> Self {
        Self { app_event_tx }
    }

    /// Send an event to the host event loop. A closed channel means the app
    /// is shutting down, so the error is logged and swallowed.
    pub fn send(&self, event: AppEvent) {
        if let Err(err) = self.app_event_tx.send(event) {
            tracing::error!("failed to send app event: {err}");
        }
    }
}
