//! Property-based tests for URL construction
//!
//! These tests verify invariants of base URL normalization, endpoint joining
//! and query-string building across generated inputs.

use std::sync::Arc;

use async_trait::async_trait;
use mg_api::{ApiClient, HttpError, HttpResponse, HttpTransport, RequestOptions, RequestParams};
use proptest::prelude::*;

struct NoTransport;

#[async_trait]
impl HttpTransport for NoTransport {
    async fn get(&self, _url: &str, _options: &RequestOptions) -> Result<HttpResponse, HttpError> {
        Err(HttpError::Connection("offline".to_string()))
    }

    async fn post(&self, _url: &str, _options: &RequestOptions) -> Result<HttpResponse, HttpError> {
        Err(HttpError::Connection("offline".to_string()))
    }
}

fn client(base: &str) -> ApiClient {
    ApiClient::unauthenticated(base, Arc::new(NoTransport))
}

// Strategy for generating base URLs without trailing slashes
fn base_url_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("http"), Just("https")],
        r"[a-z][a-z0-9\-]{0,20}\.(com|org|io)",
        r"(/[a-z0-9]{1,8}){0,3}",
    )
        .prop_map(|(scheme, host, path)| format!("{scheme}://{host}{path}"))
}

// Strategy for generating relative paths without a leading slash
fn path_strategy() -> impl Strategy<Value = String> {
    r"[a-z0-9_\-]{1,12}(/[a-z0-9_\-]{1,12}){0,3}"
}

proptest! {
    #[test]
    fn prop_endpoint_none_never_ends_with_slash(base in base_url_strategy(), slashes in 0usize..4) {
        let input = format!("{base}{}", "/".repeat(slashes));
        let client = client(&input);

        prop_assert_eq!(client.endpoint(None), base.clone());
        prop_assert!(!client.endpoint(None).ends_with('/'));
    }

    #[test]
    fn prop_leading_slash_is_optional(base in base_url_strategy(), path in path_strategy()) {
        let client = client(&base);
        let with_slash = client.endpoint(Some(&format!("/{path}")));
        let without_slash = client.endpoint(Some(&path));

        prop_assert_eq!(&with_slash, &without_slash);
        prop_assert_eq!(with_slash, format!("{base}/{path}"));
    }

    #[test]
    fn prop_query_string_has_one_pair_per_key(
        pairs in prop::collection::vec((r"[a-z]{1,6}", r"[ -~]{0,12}"), 1..6)
    ) {
        let params: RequestParams = pairs.iter().cloned().collect();
        let url = params.append_to("http://a.com/x");

        let query = url.strip_prefix("http://a.com/x?").expect("query separator");
        prop_assert_eq!(query.split('&').count(), params.len());
        prop_assert!(!query.contains(' '));

        let keys: Vec<&str> = query
            .split('&')
            .map(|pair| pair.split('=').next().unwrap_or(""))
            .collect();
        let expected: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn prop_json_body_round_trips(
        pairs in prop::collection::vec((r"[a-z]{1,6}", r"\PC{0,12}"), 0..6)
    ) {
        let params: RequestParams = pairs.iter().cloned().collect();
        let json = params.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        prop_assert_eq!(object.len(), params.len());
        for (key, val) in params.iter() {
            prop_assert_eq!(object[key].as_str(), Some(val));
        }
    }
}
