use anyhow::Context;
use rehome_client::{MigrationTrigger, SchoolsClient};
use rehome_config::RehomeConfig;
use rehome_core::entities::{Choice, DistrictId, SchoolId, Selection};
use rehome_core::responses::MigrateResponse;
use rehome_core::sink::MemorySink;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MigrateArgs;
use crate::output::output;

pub async fn handle(
    args: &MigrateArgs,
    config: &RehomeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let selection = selection_from_args(args);
    let client = SchoolsClient::new(&config.server).context("failed to build HTTP client")?;
    let trigger = MigrationTrigger::with_config(client, &config.general);
    let sink = MemorySink::new();

    let outcome = trigger
        .activate(&selection, &sink)
        .await
        .with_context(|| format!("failed to migrate school {}", selection.school.value))?;
    tracing::debug!(
        school = %selection.school.value,
        district = %selection.district.value,
        outcome = ?outcome,
        "migrate finished"
    );

    let response = MigrateResponse {
        school: selection.school,
        district: selection.district,
        outcome,
    };
    output(&response, flags.format, || sink.content())
}

fn selection_from_args(args: &MigrateArgs) -> Selection {
    let school_label = args.school_label.clone().unwrap_or_else(|| args.school.clone());
    let district_label = args
        .district_label
        .clone()
        .unwrap_or_else(|| args.district.clone());
    Selection::new(
        Choice::new(SchoolId::new(args.school.as_str()), school_label),
        Choice::new(DistrictId::new(args.district.as_str()), district_label),
    )
}
