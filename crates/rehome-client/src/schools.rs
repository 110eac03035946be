//! School record endpoints.

use rehome_config::PayloadEncoding;
use rehome_core::entities::SchoolId;
use rehome_core::outcome::{Fetched, Updated};
use rehome_core::record::SchoolRecord;

use crate::{SchoolsClient, error::ClientError, http::check_response, store::SchoolStore};

impl SchoolsClient {
    fn school_url(&self, id: &SchoolId) -> String {
        format!(
            "{}/schools/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    fn update_url(&self, id: &SchoolId) -> String {
        format!("{}/update", self.school_url(id))
    }
}

impl SchoolStore for SchoolsClient {
    async fn fetch_school(&self, id: &SchoolId) -> Result<Fetched, ClientError> {
        let url = self.school_url(id);
        let resp = self.http.get(&url).send().await?;
        tracing::debug!(method = "GET", %url, status = resp.status().as_u16(), "school request");

        let Some(resp) = check_response(resp).await? else {
            return Ok(Fetched::NotFound);
        };
        let body = resp.text().await?;
        parse_record(&body).map(Fetched::Found)
    }

    async fn update_school(
        &self,
        id: &SchoolId,
        record: &SchoolRecord,
    ) -> Result<Updated, ClientError> {
        let url = self.update_url(id);
        let request = self.http.post(&url);
        let request = match self.payload {
            PayloadEncoding::Form => request.form(&record.form_pairs()),
            PayloadEncoding::Json => request.json(record),
        };
        let resp = request.send().await?;
        tracing::debug!(method = "POST", %url, status = resp.status().as_u16(), "school request");

        let Some(resp) = check_response(resp).await? else {
            return Ok(Updated::NotFound);
        };
        Ok(Updated::Accepted(resp.text().await?))
    }
}

fn parse_record(body: &str) -> Result<SchoolRecord, ClientError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))?;
    SchoolRecord::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rehome_config::ServerConfig;

    use super::*;

    fn client(base_url: &str) -> SchoolsClient {
        SchoolsClient::new(&ServerConfig {
            base_url: base_url.into(),
            ..ServerConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn urls_follow_service_routes() {
        let client = client("http://central.test");
        let id = SchoolId::new("12");
        assert_eq!(client.school_url(&id), "http://central.test/schools/12");
        assert_eq!(client.update_url(&id), "http://central.test/schools/12/update");
    }

    #[test]
    fn ids_are_percent_encoded() {
        let client = client("http://central.test");
        assert_eq!(
            client.school_url(&SchoolId::new("a/b c")),
            "http://central.test/schools/a%2Fb%20c"
        );
    }

    #[test]
    fn parse_record_keeps_field_order() {
        let record = parse_record(r#"{"name":"Lincoln Elementary","id":12,"district_id":7}"#)
            .unwrap();
        let keys: Vec<&str> = record.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "id", "district_id"]);
    }

    #[test]
    fn parse_record_rejects_malformed_json() {
        assert!(matches!(
            parse_record("<html>oops</html>"),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn parse_record_rejects_non_object() {
        assert!(matches!(parse_record("[]"), Err(ClientError::Parse(msg)) if msg.contains("array")));
    }
}
