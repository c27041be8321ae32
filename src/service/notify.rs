// src/service/notify.rs — Outbound notifications

/// Records outbound notifications as structured log events.
///
/// There is deliberately no mail or chat transport behind this;
/// operators tail the log. Recipient addresses come from the records
/// involved, so a transport can be slotted in later without touching
/// the call sites.
#[derive(Debug, Clone)]
pub struct Notifier {
    enabled: bool,
}

impl Notifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn send(&self, to: &str, subject: &str, body: &str) {
        if !self.enabled {
            return;
        }
        tracing::info!(%to, %subject, %body, "notification");
    }
}
