//! The two remote operations a migration needs.

use std::future::Future;

use rehome_core::entities::SchoolId;
use rehome_core::outcome::{Fetched, Updated};
use rehome_core::record::SchoolRecord;

use crate::error::ClientError;

/// Read and write access to school records.
///
/// [`SchoolsClient`](crate::SchoolsClient) is the HTTP implementation.
pub trait SchoolStore {
    /// `GET /schools/{id}`.
    fn fetch_school(
        &self,
        id: &SchoolId,
    ) -> impl Future<Output = Result<Fetched, ClientError>> + Send;

    /// `POST /schools/{id}/update` with `record` as the body.
    fn update_school(
        &self,
        id: &SchoolId,
        record: &SchoolRecord,
    ) -> impl Future<Output = Result<Updated, ClientError>> + Send;
}

impl<T: SchoolStore + Sync> SchoolStore for &T {
    fn fetch_school(
        &self,
        id: &SchoolId,
    ) -> impl Future<Output = Result<Fetched, ClientError>> + Send {
        (**self).fetch_school(id)
    }

    fn update_school(
        &self,
        id: &SchoolId,
        record: &SchoolRecord,
    ) -> impl Future<Output = Result<Updated, ClientError>> + Send {
        (**self).update_school(id, record)
    }
}
