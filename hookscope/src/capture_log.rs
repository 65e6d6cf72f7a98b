use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::common::{NewRecord, Record};

/// Maximum number of records kept; older ones are evicted first
pub const CAPACITY: usize = 100;

/// Records (newest first) and the next id, always locked together
#[derive(Debug)]
struct CaptureState {
    records: VecDeque<Record>,
    next_id: u64,
}

/// Thread-safe, bounded, newest-first history of captured requests
///
/// Ids are assigned under the write lock, so they follow the order in which
/// inserts enter the critical section. `clear` empties the history but keeps
/// the id counter running: an id is never handed out twice.
#[derive(Debug)]
pub struct CaptureLog {
    state: RwLock<CaptureState>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CaptureState {
                records: VecDeque::with_capacity(CAPACITY),
                next_id: 1,
            }),
        }
    }

    /// Store a record at the front of the history and return its id
    pub fn insert(&self, new_record: NewRecord) -> u64 {
        let method = new_record.method.clone();
        let url = new_record.url.clone();

        let mut state = self.write();

        let id = state.next_id;
        state.next_id += 1;

        state.records.push_front(new_record.into_record(id));
        state.records.truncate(CAPACITY);

        drop(state);
        tracing::debug!(id, method = %method, url = %url, "Captured request");
        id
    }

    /// Copy of the current history, newest first
    pub fn snapshot(&self) -> Vec<Record> {
        self.read().records.iter().cloned().collect()
    }

    pub fn clear(&self) {
        let discarded = {
            let mut state = self.write();
            let discarded = state.records.len();
            state.records.clear();
            discarded
        };
        tracing::info!(discarded, "Cleared captured requests");
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// Id the next insert will receive
    pub fn next_id(&self) -> u64 {
        self.read().next_id
    }

    // Every mutation completes inside one guard, so a poisoned lock still
    // holds a consistent state.
    fn read(&self) -> RwLockReadGuard<'_, CaptureState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CaptureState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}
