use std::fmt::{self, Display, Formatter};

pub use tokio::sync::broadcast::{self, Receiver, Sender};
use tracing::*;

use crate::Drawly;

#[derive(Clone)]
pub struct EventSubs {
    tx: Sender<Event>,
}

#[derive(Clone, Debug)]
pub enum Event {
    /// The tutorial library changed: an add, remove, update, or clear was
    /// committed. Re-read [crate::Drawly::list_tutorials] on receipt.
    TutorialsChanged,

    /// Something a person should see about the state of their storage.
    StorageNotice(StorageNotice),
}

/// User-visible outcomes of a commit that didn't go cleanly. Display carries
/// the copy clients show verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageNotice {
    OlderTutorialsDropped { dropped: usize },
    SaveFailed,
}

impl Display for StorageNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StorageNotice::OlderTutorialsDropped { .. } => {
                write!(f, "Some older tutorials were removed to make space for new ones.")
            }
            StorageNotice::SaveFailed => write!(
                f,
                "Unable to save tutorial. Please try clearing some tutorials from your library."
            ),
        }
    }
}

impl Default for EventSubs {
    fn default() -> Self {
        let (tx, _) = broadcast::channel::<Event>(10000);
        Self { tx }
    }
}

impl EventSubs {
    pub(crate) fn tutorials_changed(&self) {
        self.queue(Event::TutorialsChanged);
    }

    pub(crate) fn storage_notice(&self, notice: StorageNotice) {
        self.queue(Event::StorageNotice(notice));
    }

    fn queue(&self, evt: Event) {
        if let Err(e) = self.tx.send(evt.clone()) {
            debug!(?evt, ?e, "no subscribers for event");
        }
    }
}

impl Drawly {
    pub fn subscribe(&self) -> Receiver<Event> {
        self.events.tx.subscribe()
    }
}
