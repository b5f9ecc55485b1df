//! Typed shell bus — the cross-module signaling contract with the hosting
//! shell, expressed as explicit payload types over a broadcast channel instead
//! of ambient global dispatch. The bus is injected through `AppState`;
//! subscribers (the shell bridge, tests) attach with [`ShellBus::subscribe`].

use serde::Serialize;
use tokio::sync::broadcast;

use crate::models::job::JobType;

/// One sidebar entry the shell should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub route: String,
}

/// Everything this module ever tells the shell. Payload schemas are the
/// contract; adding a variant is an API change, not a stringly typed event
/// name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    /// Replace the sidebar with these entries.
    SidebarNav { items: Vec<NavItem> },
    /// Replace the breadcrumb trail.
    Breadcrumb { segments: Vec<String> },
    /// Ask the shell to open its login modal.
    RequestLogin,
    /// Push a job-type filter into the shared job browser.
    JobTypeFilter { job_type: Option<JobType> },
    /// Open or close the pricing/upgrade modal.
    PricingModal { open: bool },
    /// Prompt the user to complete their profile before continuing.
    ProfileRequired { reason: String },
}

/// Broadcast bus for shell events. Cloning shares the underlying channel.
#[derive(Debug, Clone)]
pub struct ShellBus {
    tx: broadcast::Sender<ShellEvent>,
}

impl ShellBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event. Returns the number of live subscribers; zero is
    /// normal when no shell bridge is attached.
    pub fn publish(&self, event: ShellEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.tx.subscribe()
    }
}

impl Default for ShellBus {
    fn default() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = ShellBus::default();
        let mut rx = bus.subscribe();

        let delivered = bus.publish(ShellEvent::Breadcrumb {
            segments: vec!["Dashboard".to_string(), "Matches".to_string()],
        });
        assert_eq!(delivered, 1);

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            ShellEvent::Breadcrumb {
                segments: vec!["Dashboard".to_string(), "Matches".to_string()],
            }
        );
    }

    #[test]
    fn test_publish_without_subscribers_is_a_no_op() {
        let bus = ShellBus::default();
        assert_eq!(bus.publish(ShellEvent::RequestLogin), 0);
    }

    #[test]
    fn test_event_payload_schema_is_tagged() {
        let json = serde_json::to_value(ShellEvent::PricingModal { open: true }).unwrap();
        assert_eq!(json["type"], "pricing_modal");
        assert_eq!(json["open"], true);
    }
}
