//! Laundromats, machines, and bookings.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::instrument;

use auro_core::{
    BookingId, BookingStatus, LaundromatId, Latency, MachineId, MachineStatus, SimulatedCall,
};

use super::{SnapshotCell, StoreError, StoreResult};
use crate::locks::EntityLocks;
use crate::models::laundromat::BOOKED_CYCLE_MINUTES;
use crate::models::{Booking, Laundromat, LaundromatFilters, Machine, PayRangeStatus, User};
use crate::storage::{BOOKINGS_KEY, LAUNDROMATS_KEY, Storage};

/// Owns the laundromat collection (machines included) and the bookings made
/// against it.
///
/// Booking and cancelling hold a per-machine lock across the simulated
/// delay, so concurrent attempts on one machine are serialized and the
/// second one sees the first one's result.
pub struct BookingStore {
    latency: Latency,
    laundromats: SnapshotCell<Laundromat>,
    bookings: SnapshotCell<Booking>,
    selected: RwLock<Option<LaundromatId>>,
    payrange: RwLock<HashMap<LaundromatId, PayRangeStatus>>,
    machine_locks: EntityLocks<MachineId>,
}

impl BookingStore {
    /// Load both collections, falling back to the given seeds.
    #[must_use]
    pub fn load(
        storage: Arc<dyn Storage>,
        latency: Latency,
        seed_laundromats: impl FnOnce() -> Vec<Laundromat>,
        seed_bookings: impl FnOnce() -> Vec<Booking>,
    ) -> Self {
        Self {
            latency,
            laundromats: SnapshotCell::load(Arc::clone(&storage), LAUNDROMATS_KEY, seed_laundromats),
            bookings: SnapshotCell::load(storage, BOOKINGS_KEY, seed_bookings),
            selected: RwLock::new(None),
            payrange: RwLock::new(HashMap::new()),
            machine_locks: EntityLocks::new(),
        }
    }

    /// All laundromats.
    pub async fn laundromats(&self) -> Arc<Vec<Laundromat>> {
        self.laundromats.get().await
    }

    /// All bookings, newest first.
    pub async fn bookings(&self) -> Arc<Vec<Booking>> {
        self.bookings.get().await
    }

    /// Bookings belonging to one user.
    pub async fn bookings_for(&self, user_id: &auro_core::UserId) -> Vec<Booking> {
        self.bookings
            .get()
            .await
            .iter()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Look up a laundromat.
    pub async fn laundromat(&self, id: &LaundromatId) -> Option<Laundromat> {
        self.laundromats
            .get()
            .await
            .iter()
            .find(|l| &l.id == id)
            .cloned()
    }

    /// Look up a booking.
    pub async fn booking(&self, id: &BookingId) -> Option<Booking> {
        self.bookings.get().await.iter().find(|b| &b.id == id).cloned()
    }

    /// Laundromats passing every active filter, in collection order.
    pub async fn filter_laundromats(&self, filters: &LaundromatFilters) -> Vec<Laundromat> {
        self.laundromats
            .get()
            .await
            .iter()
            .filter(|l| l.matches(filters))
            .cloned()
            .collect()
    }

    /// Select a laundromat for detail views, or clear the selection.
    ///
    /// # Errors
    ///
    /// `NotFound` when the laundromat does not exist.
    pub async fn select_laundromat(&self, id: Option<LaundromatId>) -> StoreResult<Option<Laundromat>> {
        let laundromat = match &id {
            Some(id) => Some(
                self.laundromat(id)
                    .await
                    .ok_or_else(|| StoreError::not_found("laundromat", id))?,
            ),
            None => None,
        };
        *self.selected.write().await = id;
        Ok(laundromat)
    }

    /// The selected laundromat, as currently stored.
    pub async fn selected(&self) -> Option<Laundromat> {
        let id = self.selected.read().await.clone()?;
        self.laundromat(&id).await
    }

    /// Ask PayRange whether a laundromat's machines are reachable.
    ///
    /// The demo picks an outcome at random after the simulated delay and
    /// remembers it per laundromat.
    ///
    /// # Errors
    ///
    /// `NotFound` when the laundromat does not exist.
    #[instrument(skip(self))]
    pub async fn check_payrange_status(&self, id: &LaundromatId) -> StoreResult<PayRangeStatus> {
        if self.laundromat(id).await.is_none() {
            return Err(StoreError::not_found("laundromat", id));
        }

        self.latency.pause(SimulatedCall::PayRangeStatus).await;

        let index = rand::rng().random_range(0..PayRangeStatus::ALL.len());
        let status = PayRangeStatus::ALL
            .get(index)
            .copied()
            .unwrap_or(PayRangeStatus::Unavailable);
        self.payrange.write().await.insert(id.clone(), status);
        tracing::debug!(?status, "PayRange status recorded");
        Ok(status)
    }

    /// The last recorded PayRange status for a laundromat.
    pub async fn payrange_status(&self, id: &LaundromatId) -> Option<PayRangeStatus> {
        self.payrange.read().await.get(id).copied()
    }

    /// Book an available machine for the signed-in user.
    ///
    /// The machine goes to `in_use` with a 30 minute cycle and one upcoming
    /// booking covering that window is added at the front of the list.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a user, `NotFound` for an unknown
    /// laundromat or machine, `IllegalState` when the machine is not
    /// available once the lock is held.
    #[instrument(skip(self, user), fields(user_id = user.map(|u| u.id.as_str())))]
    pub async fn book_machine(
        &self,
        user: Option<&User>,
        laundromat_id: &LaundromatId,
        machine_id: &MachineId,
    ) -> StoreResult<Booking> {
        let user = user.ok_or(StoreError::NotAuthenticated)?;
        let _machine_guard = self.machine_locks.acquire(machine_id).await;

        self.latency.pause(SimulatedCall::BookMachine).await;

        let mut laundromats = self.laundromats.lock().await;
        let laundromat = laundromats
            .iter()
            .find(|l| &l.id == laundromat_id)
            .ok_or_else(|| StoreError::not_found("laundromat", laundromat_id))?;
        let machine = laundromat
            .machine(machine_id)
            .ok_or_else(|| StoreError::not_found("machine", machine_id))?;
        if machine.status != MachineStatus::Available {
            return Err(StoreError::IllegalState(format!(
                "machine {} is not available",
                machine.number
            )));
        }

        let start_time = Utc::now();
        let booking = Booking {
            id: BookingId::new(format!("booking-{}", uuid::Uuid::new_v4())),
            user_id: user.id.clone(),
            laundromat_id: laundromat.id.clone(),
            laundromat_name: laundromat.name.clone(),
            machine_id: machine.id.clone(),
            machine_type: machine.kind,
            machine_number: machine.number.clone(),
            start_time,
            end_time: start_time + Duration::minutes(i64::from(BOOKED_CYCLE_MINUTES)),
            status: BookingStatus::Upcoming,
        };

        let next = replace_machine(&laundromats, laundromat_id, machine_id, |m| {
            m.started(BOOKED_CYCLE_MINUTES)
        });
        self.laundromats.commit(&mut laundromats, next);

        self.bookings
            .update(|bookings| {
                std::iter::once(booking.clone())
                    .chain(bookings.iter().cloned())
                    .collect()
            })
            .await;

        tracing::info!(booking_id = %booking.id, "Machine booked");
        Ok(booking)
    }

    /// Cancel an upcoming booking and release its machine.
    ///
    /// Returns `false` when the booking does not exist or is no longer
    /// upcoming; machines are untouched in that case.
    #[instrument(skip(self))]
    pub async fn cancel_booking(&self, id: &BookingId) -> bool {
        let machine_id = self.booking(id).await.map(|b| b.machine_id);
        let _machine_guard = match &machine_id {
            Some(machine_id) => Some(self.machine_locks.acquire(machine_id).await),
            None => None,
        };

        self.latency.pause(SimulatedCall::CancelBooking).await;

        let mut laundromats = self.laundromats.lock().await;
        let mut bookings = self.bookings.lock().await;
        let Some(booking) = bookings.iter().find(|b| &b.id == id).cloned() else {
            tracing::info!("Booking not found");
            return false;
        };
        if !booking.is_cancellable() {
            tracing::info!(status = %booking.status, "Booking cannot be cancelled");
            return false;
        }

        let next_bookings = bookings
            .iter()
            .map(|b| {
                if &b.id == id {
                    Booking {
                        status: BookingStatus::Cancelled,
                        ..b.clone()
                    }
                } else {
                    b.clone()
                }
            })
            .collect();
        self.bookings.commit(&mut bookings, next_bookings);

        let next_laundromats = replace_machine(
            &laundromats,
            &booking.laundromat_id,
            &booking.machine_id,
            |m| {
                if m.status == MachineStatus::InUse {
                    m.released()
                } else {
                    m.clone()
                }
            },
        );
        self.laundromats.commit(&mut laundromats, next_laundromats);

        tracing::info!("Booking cancelled");
        true
    }

    /// Take a machine out of service.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown laundromat or machine.
    #[instrument(skip(self))]
    pub async fn mark_out_of_order(
        &self,
        laundromat_id: &LaundromatId,
        machine_id: &MachineId,
    ) -> StoreResult<Machine> {
        let _machine_guard = self.machine_locks.acquire(machine_id).await;
        self.transition(laundromat_id, machine_id, |m| Ok(m.out_of_order()))
            .await
    }

    /// Return an out-of-order machine to service.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown laundromat or machine, `IllegalState` when
    /// the machine is not out of order.
    #[instrument(skip(self))]
    pub async fn reset_machine(
        &self,
        laundromat_id: &LaundromatId,
        machine_id: &MachineId,
    ) -> StoreResult<Machine> {
        let _machine_guard = self.machine_locks.acquire(machine_id).await;
        self.transition(laundromat_id, machine_id, |m| {
            if m.status == MachineStatus::OutOfOrder {
                Ok(m.released())
            } else {
                Err(StoreError::IllegalState(format!(
                    "machine {} is not out of order",
                    m.number
                )))
            }
        })
        .await
    }

    async fn transition(
        &self,
        laundromat_id: &LaundromatId,
        machine_id: &MachineId,
        f: impl FnOnce(&Machine) -> StoreResult<Machine>,
    ) -> StoreResult<Machine> {
        let mut laundromats = self.laundromats.lock().await;
        let machine = laundromats
            .iter()
            .find(|l| &l.id == laundromat_id)
            .ok_or_else(|| StoreError::not_found("laundromat", laundromat_id))?
            .machine(machine_id)
            .ok_or_else(|| StoreError::not_found("machine", machine_id))?;
        let updated = f(machine)?;

        let next = replace_machine(&laundromats, laundromat_id, machine_id, |_| updated.clone());
        self.laundromats.commit(&mut laundromats, next);
        tracing::info!(status = %updated.status, "Machine status changed");
        Ok(updated)
    }
}

fn replace_machine(
    laundromats: &[Laundromat],
    laundromat_id: &LaundromatId,
    machine_id: &MachineId,
    update: impl Fn(&Machine) -> Machine,
) -> Vec<Laundromat> {
    laundromats
        .iter()
        .map(|l| {
            if &l.id == laundromat_id {
                l.with_machine(machine_id, &update)
            } else {
                l.clone()
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use auro_core::{Email, HealthPreference, MachineKind, SubscriptionTier, UserId};

    use super::*;
    use crate::seed;
    use crate::storage::MemoryStorage;

    fn store() -> BookingStore {
        BookingStore::load(
            Arc::new(MemoryStorage::new()),
            Latency::Instant,
            seed::laundromats,
            || seed::bookings(Utc::now()),
        )
    }

    fn user() -> User {
        User {
            id: UserId::new("user-1"),
            name: "Demo User".to_string(),
            email: Email::parse("demo@example.com").unwrap(),
            phone: "5555550100".to_string(),
            subscription: SubscriptionTier::Free,
            health_preferences: vec![HealthPreference::Standard],
            is_authenticated: true,
        }
    }

    fn machine_status(laundromats: &[Laundromat], machine: &str) -> MachineStatus {
        laundromats
            .iter()
            .flat_map(|l| &l.machines)
            .find(|m| m.id.as_str() == machine)
            .unwrap()
            .status
    }

    #[tokio::test]
    async fn test_book_available_machine() {
        let store = store();
        let before = store.bookings().await.len();

        let booking = store
            .book_machine(
                Some(&user()),
                &LaundromatId::new("laundromat-1"),
                &MachineId::new("machine-3"),
            )
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Upcoming);
        assert_eq!(booking.machine_number, "W3");
        assert_eq!(booking.end_time - booking.start_time, Duration::minutes(30));

        let bookings = store.bookings().await;
        assert_eq!(bookings.len(), before + 1);
        assert_eq!(bookings.first().unwrap().id, booking.id);

        let laundromat = store.laundromat(&LaundromatId::new("laundromat-1")).await.unwrap();
        let machine = laundromat.machine(&MachineId::new("machine-3")).unwrap();
        assert_eq!(machine.status, MachineStatus::InUse);
        assert_eq!(machine.time_remaining, Some(30));
    }

    #[tokio::test]
    async fn test_book_rejects_busy_and_unknown() {
        let store = store();
        let laundromat = LaundromatId::new("laundromat-1");

        let busy = store
            .book_machine(Some(&user()), &laundromat, &MachineId::new("machine-2"))
            .await;
        assert!(matches!(busy, Err(StoreError::IllegalState(_))));

        let unknown = store
            .book_machine(Some(&user()), &laundromat, &MachineId::new("machine-99"))
            .await;
        assert!(matches!(unknown, Err(StoreError::NotFound { entity: "machine", .. })));

        let anonymous = store
            .book_machine(None, &laundromat, &MachineId::new("machine-3"))
            .await;
        assert_eq!(anonymous, Err(StoreError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_cancel_releases_machine() {
        let store = store();
        let booking = store
            .book_machine(
                Some(&user()),
                &LaundromatId::new("laundromat-3"),
                &MachineId::new("machine-21"),
            )
            .await
            .unwrap();

        assert!(store.cancel_booking(&booking.id).await);
        assert_eq!(
            store.booking(&booking.id).await.unwrap().status,
            BookingStatus::Cancelled
        );
        assert_eq!(
            machine_status(&store.laundromats().await, "machine-21"),
            MachineStatus::Available
        );

        assert!(!store.cancel_booking(&booking.id).await);
    }

    #[tokio::test]
    async fn test_cancel_completed_changes_nothing() {
        let store = store();
        let before = store.laundromats().await;

        assert!(!store.cancel_booking(&BookingId::new("booking-3")).await);
        assert!(!store.cancel_booking(&BookingId::new("booking-404")).await);

        assert_eq!(*store.laundromats().await, *before);
        assert_eq!(
            store.booking(&BookingId::new("booking-3")).await.unwrap().status,
            BookingStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_concurrent_bookings_of_one_machine() {
        let store = Arc::new(store());
        let laundromat = LaundromatId::new("laundromat-5");
        let machine = MachineId::new("machine-29");

        let attempts = (0..4).map(|_| {
            let store = Arc::clone(&store);
            let laundromat = laundromat.clone();
            let machine = machine.clone();
            tokio::spawn(async move {
                store
                    .book_machine(Some(&user()), &laundromat, &machine)
                    .await
                    .is_ok()
            })
        });

        let mut successes = 0;
        for attempt in attempts.collect::<Vec<_>>() {
            if attempt.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_filters() {
        let store = store();

        let payrange = store
            .filter_laundromats(&LaundromatFilters {
                payment_systems: vec!["PayRange".to_string()],
                ..LaundromatFilters::default()
            })
            .await;
        let ids: Vec<_> = payrange.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["laundromat-1", "laundromat-3", "laundromat-5"]);

        let near_with_tv = store
            .filter_laundromats(&LaundromatFilters {
                max_distance: Some(1.2),
                amenities: vec!["WiFi".to_string(), "TV".to_string()],
                machine_kinds: vec![MachineKind::Dryer],
                ..LaundromatFilters::default()
            })
            .await;
        assert_eq!(near_with_tv.len(), 1);
        assert_eq!(near_with_tv.first().unwrap().id.as_str(), "laundromat-2");

        let all = store.filter_laundromats(&LaundromatFilters::default()).await;
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_out_of_order_and_reset() {
        let store = store();
        let laundromat = LaundromatId::new("laundromat-2");

        let reset = store
            .reset_machine(&laundromat, &MachineId::new("machine-12"))
            .await
            .unwrap();
        assert_eq!(reset.status, MachineStatus::Available);

        let not_broken = store
            .reset_machine(&laundromat, &MachineId::new("machine-12"))
            .await;
        assert!(matches!(not_broken, Err(StoreError::IllegalState(_))));

        let broken = store
            .mark_out_of_order(&laundromat, &MachineId::new("machine-10"))
            .await
            .unwrap();
        assert_eq!(broken.status, MachineStatus::OutOfOrder);
        assert_eq!(broken.time_remaining, None);
    }

    #[tokio::test]
    async fn test_selection_and_payrange() {
        let store = store();
        let id = LaundromatId::new("laundromat-3");

        store.select_laundromat(Some(id.clone())).await.unwrap();
        assert_eq!(store.selected().await.unwrap().name, "Bubble Wash");
        assert!(
            store
                .select_laundromat(Some(LaundromatId::new("nowhere")))
                .await
                .is_err()
        );

        let status = store.check_payrange_status(&id).await.unwrap();
        assert_eq!(store.payrange_status(&id).await, Some(status));
    }
}
