//! Subscription Dispatcher (§4.6): type-tagged and wildcard fan-out of
//! decoded [`Value`]s to registered callbacks.
//!
//! A single lock guards two structures, `by_type` and `all`; `dispatch`
//! snapshots the relevant callback lists, releases the lock, then invokes
//! the callbacks — so a callback is free to subscribe or unsubscribe without
//! deadlocking or invalidating an in-progress iteration.
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::mem;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::error::SubscriptionError;
use crate::protocol::messages::Value;

/// Number of [`TypeTag`] variants, and the width of the `by_type` bucket array.
const TYPE_COUNT: usize = 8;

/// Closed set of `Value` shapes a subscriber can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum TypeTag {
    RateOfTurn = 0,
    EngineParametersDynamic = 1,
    PositionRapidUpdate = 2,
    GnssPositionData = 3,
    ProductInformation = 4,
    BgWindData = 5,
    MaretronProprietary = 6,
    Unknown = 7,
}

impl TypeTag {
    /// The tag a decoded value belongs to.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::RateOfTurn(_) => Self::RateOfTurn,
            Value::EngineParametersDynamic(_) => Self::EngineParametersDynamic,
            Value::PositionRapidUpdate(_) => Self::PositionRapidUpdate,
            Value::GnssPositionData(_) => Self::GnssPositionData,
            Value::ProductInformation(_) => Self::ProductInformation,
            Value::BgWindData(_) => Self::BgWindData,
            Value::MaretronProprietary(_) => Self::MaretronProprietary,
            Value::Unknown(_) => Self::Unknown,
        }
    }
}

/// A subscriber's callback, invoked once per matching dispatched value.
pub type Callback = Box<dyn FnMut(&Value)>;

struct Subscription {
    id: u64,
    callback: Callback,
}

struct State {
    next_id: u64,
    by_type: [Vec<Subscription>; TYPE_COUNT],
    all: Vec<Subscription>,
}

impl State {
    fn new() -> Self {
        Self {
            next_id: 0,
            by_type: core::array::from_fn(|_| Vec::new()),
            all: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Registry of subscribers, parameterized by the `embassy-sync` raw mutex
/// appropriate to the host (e.g. `NoopRawMutex` for single-threaded use,
/// `CriticalSectionRawMutex` on an interrupt-driven MCU).
pub struct SubscriptionRegistry<M: RawMutex> {
    state: Mutex<M, RefCell<State>>,
}

impl<M: RawMutex> SubscriptionRegistry<M> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(State::new())),
        }
    }

    /// Subscribe to every value tagged `tag`. Returns a monotonically
    /// increasing id usable with [`Self::unsubscribe`].
    pub fn subscribe_type(&self, tag: TypeTag, callback: Callback) -> u64 {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            let id = state.allocate_id();
            state.by_type[tag as usize].push(Subscription { id, callback });
            id
        })
    }

    /// Subscribe to every dispatched value regardless of its tag.
    pub fn subscribe_all(&self, callback: Callback) -> u64 {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            let id = state.allocate_id();
            state.all.push(Subscription { id, callback });
            id
        })
    }

    /// Remove a subscription. Fails if `id` was never issued or was already removed.
    pub fn unsubscribe(&self, id: u64) -> Result<(), SubscriptionError> {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            for bucket in state.by_type.iter_mut() {
                if let Some(pos) = bucket.iter().position(|sub| sub.id == id) {
                    bucket.remove(pos);
                    return Ok(());
                }
            }
            if let Some(pos) = state.all.iter().position(|sub| sub.id == id) {
                state.all.remove(pos);
                return Ok(());
            }
            Err(SubscriptionError::NotFound(id))
        })
    }

    /// Fan a decoded value out to every matching subscriber (§4.6 steps 1-3).
    pub fn dispatch(&self, value: &Value) {
        let tag = TypeTag::of(value);

        let mut type_snapshot = Vec::new();
        let mut all_snapshot = Vec::new();
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            type_snapshot = mem::take(&mut state.by_type[tag as usize]);
            all_snapshot = mem::take(&mut state.all);
        });

        for sub in type_snapshot.iter_mut() {
            (sub.callback)(value);
        }
        for sub in all_snapshot.iter_mut() {
            (sub.callback)(value);
        }

        // Re-merge: anything subscribed while the lock was released stays
        // (it was written directly into the live state, not our snapshot);
        // the snapshotted entries rejoin behind it.
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            state.by_type[tag as usize].append(&mut type_snapshot);
            state.all.append(&mut all_snapshot);
        });
    }

    /// Number of subscribers currently registered for `tag`, for diagnostics/tests.
    pub fn type_subscriber_count(&self, tag: TypeTag) -> usize {
        self.state.lock(|cell| cell.borrow().by_type[tag as usize].len())
    }

    /// Number of wildcard subscribers currently registered, for diagnostics/tests.
    pub fn wildcard_subscriber_count(&self) -> usize {
        self.state.lock(|cell| cell.borrow().all.len())
    }
}

impl<M: RawMutex> Default for SubscriptionRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}
