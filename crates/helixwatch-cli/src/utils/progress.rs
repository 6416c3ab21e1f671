use helixwatch::engine::progress::{EventCallback, MonitorEvent};
use tokio::sync::mpsc;
use tracing::warn;

/// Forwards workflow events from the blocking monitor thread to the UI task.
#[derive(Clone)]
pub struct CliProgressHandler {
    sender: mpsc::UnboundedSender<MonitorEvent>,
}

impl CliProgressHandler {
    pub fn new(sender: mpsc::UnboundedSender<MonitorEvent>) -> Self {
        Self { sender }
    }

    pub fn get_callback(&self) -> EventCallback<'static> {
        let sender = self.sender.clone();
        Box::new(move |event: MonitorEvent| {
            if let Err(e) = sender.send(event) {
                warn!("Failed to send event to UI channel: {}", e);
            }
        })
    }
}
