use std::sync::mpsc::Receiver;

use super::broadcast::Multicast;

/// Payload carried by an external trigger firing. The registry ignores its
/// contents; the label exists for the source's own logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerPayload {
    pub label: Option<String>,
}

impl TriggerPayload {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

/// External signal source meaning "an aggregation consumer needs a fresh
/// property view". The registry subscribes once, at construction, for its
/// whole lifetime.
#[derive(Debug, Default)]
pub struct ActionTrigger {
    channel: Multicast<TriggerPayload>,
}

impl ActionTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<TriggerPayload> {
        self.channel.subscribe()
    }

    pub fn fire(&mut self, payload: TriggerPayload) {
        self.channel.emit(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_reaches_every_subscriber() {
        let mut trigger = ActionTrigger::new();
        let first = trigger.subscribe();
        let second = trigger.subscribe();

        trigger.fire(TriggerPayload::labeled("menu-open"));

        assert_eq!(
            first.try_recv().expect("first subscriber"),
            TriggerPayload::labeled("menu-open")
        );
        assert_eq!(
            second.try_recv().expect("second subscriber"),
            TriggerPayload::labeled("menu-open")
        );
    }
}
