use std::{collections::BTreeMap, sync::Arc};

use car_models::{Car, CarId};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Clock, SystemClock};

/// Keyed car records plus the identifier counter.
#[derive(Debug)]
pub(crate) struct CarTable {
    /// `None` once the identifier space is used up.
    pub(crate) next_id: Option<CarId>,
    pub(crate) cars: BTreeMap<CarId, Car>,
}

impl CarTable {
    fn new() -> Self {
        Self {
            next_id: Some(1),
            cars: BTreeMap::new(),
        }
    }

    /// Hands out the next identifier. Identifiers are never reused, even
    /// after the record holding one is deleted.
    pub(crate) fn issue_id(&mut self) -> Option<CarId> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }
}

/// The single owner of all car records.
///
/// Clones share the same table; every DAO operation holds the lock for its
/// whole read-modify-write so callers never observe a half-applied change.
#[derive(Debug, Clone)]
pub struct CarStore {
    table: Arc<RwLock<CarTable>>,
    clock: Arc<dyn Clock>,
}

impl CarStore {
    pub fn new() -> Self { Self::with_clock(SystemClock) }

    pub fn with_clock(clock: impl Clock) -> Self {
        Self {
            table: Arc::new(RwLock::new(CarTable::new())),
            clock: Arc::new(clock),
        }
    }

    pub async fn len(&self) -> usize { self.table.read().await.cars.len() }

    pub async fn is_empty(&self) -> bool { self.len().await == 0 }

    pub(crate) fn clock(&self) -> &dyn Clock { self.clock.as_ref() }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, CarTable> {
        self.table.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, CarTable> {
        self.table.write().await
    }
}

impl Default for CarStore {
    fn default() -> Self { Self::new() }
}
