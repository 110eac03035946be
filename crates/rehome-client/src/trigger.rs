//! The migration trigger: move the selected school to the selected district.
//!
//! One activation runs two strictly ordered requests:
//!
//! ```text
//! GET /schools/{id} ──found──▶ reassign district_id ──▶ POST /schools/{id}/update
//!        │                                                   │
//!   not found ──▶ NotFound                  empty body / 404 ──▶ NotFound
//!                                             non-empty body ──▶ show message, Migrated
//! ```
//!
//! Overlapping activations are governed by [`InFlightPolicy`].

use std::sync::atomic::{AtomicBool, Ordering};

use rehome_config::{GeneralConfig, InFlightPolicy};
use rehome_core::entities::Selection;
use rehome_core::errors::CoreError;
use rehome_core::outcome::{Fetched, MigrationOutcome};
use rehome_core::sink::MessageSink;
use thiserror::Error;

use crate::error::ClientError;
use crate::store::SchoolStore;

#[derive(Debug, Error)]
pub enum TriggerError {
    /// The school or district control had nothing selected.
    #[error("invalid selection: {0}")]
    InvalidSelection(#[source] CoreError),

    /// The fetched record could not be pointed at the new district.
    #[error("cannot reassign school record: {0}")]
    Record(#[source] CoreError),

    /// Transport failure, unexpected status, or malformed response.
    #[error(transparent)]
    Store(#[from] ClientError),
}

pub struct MigrationTrigger<S> {
    store: S,
    policy: InFlightPolicy,
    validate_selection: bool,
    in_flight: AtomicBool,
}

impl<S: SchoolStore> MigrationTrigger<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &GeneralConfig::default())
    }

    pub fn with_config(store: S, config: &GeneralConfig) -> Self {
        Self {
            store,
            policy: config.in_flight,
            validate_selection: config.validate_selection,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> InFlightPolicy {
        self.policy
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Run one migration for `selection`, reporting success through `sink`.
    ///
    /// The sink is written at most once, and only when the update response
    /// body is non-empty. Labels are taken from `selection` as passed in.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError`] for an empty selection (when validation is
    /// enabled), a record without a district reference, or any transport
    /// failure. A failed read never issues the write.
    pub async fn activate(
        &self,
        selection: &Selection,
        sink: &impl MessageSink,
    ) -> Result<MigrationOutcome, TriggerError> {
        if self.validate_selection {
            selection.validate().map_err(TriggerError::InvalidSelection)?;
        }

        let _guard = match self.policy {
            InFlightPolicy::Parallel => None,
            InFlightPolicy::SingleFlight => {
                let Some(guard) = InFlightGuard::acquire(&self.in_flight) else {
                    tracing::warn!(
                        school = %selection.school.value,
                        "migration already in flight, ignoring activation"
                    );
                    return Ok(MigrationOutcome::Busy);
                };
                Some(guard)
            }
        };

        let school = &selection.school.value;
        let district = &selection.district.value;

        let mut record = match self.store.fetch_school(school).await? {
            Fetched::Found(record) => record,
            Fetched::NotFound => {
                tracing::warn!(%school, "school not found on read");
                return Ok(MigrationOutcome::NotFound);
            }
        };
        record
            .reassign(school, district)
            .map_err(TriggerError::Record)?;

        let updated = self.store.update_school(school, &record).await?;
        if !updated.succeeded() {
            tracing::warn!(%school, "school not found on update");
            return Ok(MigrationOutcome::NotFound);
        }

        let message = selection.confirmation();
        sink.show(&message);
        tracing::info!(%school, %district, "school migrated");
        Ok(MigrationOutcome::Migrated { message })
    }
}

/// Holds the in-flight flag until dropped, including on early return.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
