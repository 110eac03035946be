//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (404 as "not found", 429 rate limiting with
//! `Retry-After` parsing, non-success → [`ClientError::Api`]) so request
//! modules stay focused on building requests and mapping bodies.

use reqwest::StatusCode;

use crate::error::ClientError;

/// Check an HTTP response for common error conditions.
///
/// Returns `Ok(None)` for **404 Not Found** and the response unchanged on
/// success. Otherwise:
/// - **429 Too Many Requests** → [`ClientError::RateLimited`] (falls back to
///   60 s if `Retry-After` is absent or unparseable).
/// - **Non-success status** → [`ClientError::Api`] with status code and body.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<Option<reqwest::Response>, ClientError> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ClientError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(Some(resp))
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        assert_eq!(parse_retry_after(&mock_response_with_retry_after("120")), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        assert_eq!(
            parse_retry_after(&mock_response_with_retry_after("soon")),
            60
        );
    }

    #[tokio::test]
    async fn not_found_is_not_an_error() {
        let checked = check_response(mock_response(404, "")).await.unwrap();
        assert!(checked.is_none());
    }

    #[tokio::test]
    async fn rate_limited_default() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn server_error_keeps_body() {
        let err = check_response(mock_response(500, "boom"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn success_passes_through() {
        let checked = check_response(mock_response(200, "1")).await.unwrap();
        assert_eq!(checked.unwrap().text().await.unwrap(), "1");
    }
}
