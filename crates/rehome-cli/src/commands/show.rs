use anyhow::Context;
use rehome_client::{SchoolStore, SchoolsClient};
use rehome_config::RehomeConfig;
use rehome_core::entities::SchoolId;
use rehome_core::outcome::Fetched;
use rehome_core::responses::ShowResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::output::{key_value_lines, output};

pub async fn handle(
    args: &ShowArgs,
    config: &RehomeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = SchoolsClient::new(&config.server).context("failed to build HTTP client")?;
    let school_id = SchoolId::new(args.school.as_str());

    let record = match client
        .fetch_school(&school_id)
        .await
        .with_context(|| format!("failed to fetch school {school_id}"))?
    {
        Fetched::Found(record) => Some(record),
        Fetched::NotFound => {
            tracing::debug!(school = %school_id, "school not found");
            None
        }
    };

    let response = ShowResponse {
        school_id,
        found: record.is_some(),
        record,
    };
    output(&response, flags.format, || Some(show_text(&response)))
}

fn show_text(response: &ShowResponse) -> String {
    response.record.as_ref().map_or_else(
        || format!("school {} not found", response.school_id),
        |record| key_value_lines(record.fields()),
    )
}

#[cfg(test)]
mod tests {
    use rehome_core::record::SchoolRecord;
    use serde_json::json;

    use super::*;

    #[test]
    fn text_for_missing_school() {
        let response = ShowResponse {
            school_id: SchoolId::new("99"),
            found: false,
            record: None,
        };
        assert_eq!(show_text(&response), "school 99 not found");
    }

    #[test]
    fn text_for_found_school_lists_fields() {
        let record =
            SchoolRecord::from_value(json!({"id": 12, "name": "Lincoln Elementary"})).unwrap();
        let response = ShowResponse {
            school_id: SchoolId::new("12"),
            found: true,
            record: Some(record),
        };
        assert_eq!(show_text(&response), "id: 12\nname: Lincoln Elementary");
    }
}
