//! Typed event feed
//!
//! Every state change the manager makes is announced on one of four
//! channels. Listeners subscribe per channel and get a [`Subscription`] back
//! to unsubscribe with.

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use mb_battle::{BattleResult, UnitRecord};

use crate::log;
use crate::rejection::ListenerError;
use crate::snapshot::{GameSnapshot, ShopEntryView};

/// Event channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    StateUpdate,
    BattleResult,
    ShopUpdate,
    Merge,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::StateUpdate,
        EventKind::BattleResult,
        EventKind::ShopUpdate,
        EventKind::Merge,
    ];

    fn index(self) -> usize {
        match self {
            EventKind::StateUpdate => 0,
            EventKind::BattleResult => 1,
            EventKind::ShopUpdate => 2,
            EventKind::Merge => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum GameEvent {
    StateUpdate { snapshot: GameSnapshot },
    BattleResult { result: BattleResult, reward: u32 },
    ShopUpdate { entries: Vec<ShopEntryView> },
    #[serde(rename_all = "camelCase")]
    Merge {
        index_a: u32,
        index_b: u32,
        result: UnitRecord,
    },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::StateUpdate { .. } => EventKind::StateUpdate,
            GameEvent::BattleResult { .. } => EventKind::BattleResult,
            GameEvent::ShopUpdate { .. } => EventKind::ShopUpdate,
            GameEvent::Merge { .. } => EventKind::Merge,
        }
    }
}

/// Token returned by [`EventBus::on`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    kind: EventKind,
    id: u64,
}

impl Subscription {
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

pub type Listener = Box<dyn FnMut(&GameEvent) -> Result<(), ListenerError>>;

/// Per-channel listener registries
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    channels: [Vec<(u64, Listener)>; 4],
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` on `kind`. Listeners on a channel run in
    /// subscription order.
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> Subscription
    where
        F: FnMut(&GameEvent) -> Result<(), ListenerError> + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.channels[kind.index()].push((id, Box::new(listener)));
        Subscription { kind, id }
    }

    /// Drop a subscription. Returns false if it was already gone.
    pub fn off(&mut self, subscription: Subscription) -> bool {
        let channel = &mut self.channels[subscription.kind.index()];
        let before = channel.len();
        channel.retain(|(id, _)| *id != subscription.id);
        channel.len() != before
    }

    /// Drop every subscription on every channel
    pub fn clear(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.clear();
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.channels[kind.index()].len()
    }

    /// Deliver `event` to every listener on its channel. A listener that
    /// fails (or, with `std`, panics) is logged and skipped.
    pub fn emit(&mut self, event: &GameEvent) {
        let kind = event.kind();
        for (id, listener) in self.channels[kind.index()].iter_mut() {
            if let Err(err) = invoke(listener, event) {
                log::warn(&format!("{kind:?} listener #{id}: {err}"));
            }
        }
    }
}

#[cfg(feature = "std")]
fn invoke(listener: &mut Listener, event: &GameEvent) -> Result<(), ListenerError> {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    match catch_unwind(AssertUnwindSafe(|| listener(event))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| String::from(*s))
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| String::from("non-string panic payload"));
            Err(ListenerError(format!("panicked: {msg}")))
        }
    }
}

#[cfg(not(feature = "std"))]
fn invoke(listener: &mut Listener, event: &GameEvent) -> Result<(), ListenerError> {
    listener(event)
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts = f.debug_map();
        for kind in EventKind::ALL {
            counts.entry(&kind, &self.listener_count(kind));
        }
        counts.finish()
    }
}
