//! CLI response types returned as JSON by `rehome` commands.

use serde::{Deserialize, Serialize};

use crate::entities::{Choice, DistrictId, SchoolId};
use crate::outcome::MigrationOutcome;
use crate::record::SchoolRecord;

/// Response from `rehome migrate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MigrateResponse {
    pub school: Choice<SchoolId>,
    pub district: Choice<DistrictId>,
    #[serde(flatten)]
    pub outcome: MigrationOutcome,
}

/// Response from `rehome show`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowResponse {
    pub school_id: SchoolId,
    pub found: bool,
    pub record: Option<SchoolRecord>,
}
