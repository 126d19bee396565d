use fleetload::entities::AllocationView;
use fleetload::session::{AllocListener, Notification};
use log::{debug, info, warn};

/// Listener that reports to the log and keeps the notification texts for the output file
#[derive(Debug, Default)]
pub struct LogListener {
    pub messages: Vec<String>,
}

impl AllocListener for LogListener {
    fn on_allocation_change(&mut self, allocations: &[AllocationView]) {
        for a in allocations {
            debug!(
                "[SESSION] vehicle {}: {} requests, {}% weight, {}% volume",
                a.vehicle_id,
                a.requests.len(),
                a.utilization.weight_pct,
                a.utilization.volume_pct
            );
        }
    }

    fn on_notification(&mut self, notification: &Notification) {
        match notification.is_error() {
            true => warn!("[SESSION] {notification}"),
            false => info!("[SESSION] {notification}"),
        }
        self.messages.push(notification.to_string());
    }
}
