use serde::Serialize;
use std::fmt;
use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 64;

/// Which kind of record a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Company,
    Supervisor,
    Property,
    Contractor,
    Invoice,
    JobDescription,
    MyCompanyInfo,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Supervisor => "supervisor",
            Self::Property => "property",
            Self::Contractor => "contractor",
            Self::Invoice => "invoice",
            Self::JobDescription => "job description",
            Self::MyCompanyInfo => "company info",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Saved,
    Deleted,
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub entity: EntityKind,
    pub action: ChangeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl ChangeEvent {
    pub fn saved(entity: EntityKind, id: i32) -> Self {
        Self {
            entity,
            action: ChangeAction::Saved,
            id: Some(id),
        }
    }

    pub fn deleted(entity: EntityKind, id: i32) -> Self {
        Self {
            entity,
            action: ChangeAction::Deleted,
            id: Some(id),
        }
    }

    pub fn replaced(entity: EntityKind) -> Self {
        Self {
            entity,
            action: ChangeAction::Replaced,
            id: None,
        }
    }
}

/// Application-wide "something changed" signal.
///
/// Backed by a broadcast channel: every receiver sees every event, dropping a receiver
/// unsubscribes it, and a receiver that falls behind loses the oldest events instead of
/// stalling the sender.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Returns how many subscribers received the event; zero when nobody listens.
    pub fn notify(&self, event: ChangeEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
