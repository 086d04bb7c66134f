//! Game events, the synchronous event channel, and the event log.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use outpost_core::PawnId;

/// Something observable that happened inside the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An item was crafted and appended to the inventory.
    ItemSynthesized {
        /// Display name of the source blueprint.
        blueprint_name: String,
    },
    /// A pawn died. Reserved: nothing in the current actor rules can kill a
    /// pawn, but the channel contract includes the event for consumers.
    PawnDied {
        /// The pawn that died.
        id: PawnId,
    },
    /// A dilemma was presented and the simulation paused for a decision.
    DilemmaPresented {
        /// Id of the presentation.
        id: outpost_core::DilemmaId,
        /// Dilemma headline.
        title: String,
    },
    /// The active dilemma was resolved.
    DilemmaResolved {
        /// Consequence key of the chosen option, a hook for future systems.
        consequence_key: String,
    },
}

impl GameEvent {
    /// Stable wire name of the event kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ItemSynthesized { .. } => "item-synthesized",
            Self::PawnDied { .. } => "pawn-died",
            Self::DilemmaPresented { .. } => "dilemma-presented",
            Self::DilemmaResolved { .. } => "dilemma-resolved",
        }
    }
}

/// Handle returned by [`EventChannel::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback = Rc<RefCell<dyn FnMut(&GameEvent)>>;

/// Synchronous publish/subscribe notifier.
///
/// `emit` invokes all currently registered subscribers in registration
/// order, exactly once each, with no buffering or replay. Dispatch walks a
/// snapshot of the subscriber list, so subscribing or unsubscribing from
/// inside a callback never affects the in-flight dispatch.
#[derive(Default)]
pub struct EventChannel {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriberId, Callback)>>,
}

impl fmt::Debug for EventChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl EventChannel {
    /// Create a channel with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Subscribers are invoked in registration order.
    pub fn subscribe(&self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(callback))));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subs = self.subscribers.borrow_mut();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Deliver an event to every subscriber registered at the start of the
    /// call.
    pub fn emit(&self, event: &GameEvent) {
        // Snapshot, then release the borrow so callbacks may re-enter
        // subscribe/unsubscribe.
        let snapshot: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in snapshot {
            (callback.borrow_mut())(event);
        }
    }
}

/// One recorded event with the simulation time it occurred at.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Simulation time of the event in seconds.
    pub game_time: f64,
    /// The event itself.
    pub event: GameEvent,
}

/// Accumulates every emitted event during a run, oldest first.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
    max_events: usize,
}

impl EventLog {
    /// Create a log with the given capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_events,
        }
    }

    /// Append an entry, dropping the oldest entries past capacity.
    pub fn push(&mut self, game_time: f64, event: GameEvent) {
        self.entries.push(LogEntry { game_time, event });
        if self.max_events > 0 && self.entries.len() > self.max_events {
            let overflow = self.entries.len() - self.max_events;
            self.entries.drain(..overflow);
        }
    }

    /// All recorded entries in order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
