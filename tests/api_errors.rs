#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;
    use taskdeck::api::{error_detail, ApiError, AuthTransport, RequestOutcome, TokenProvider, NETWORK_FAILURE_STATUS};

    struct NoSession;

    impl TokenProvider for NoSession {
        fn token(&self) -> Option<String> {
            None
        }
    }

    struct FixedToken;

    impl TokenProvider for FixedToken {
        fn token(&self) -> Option<String> {
            Some("test-token".to_string())
        }
    }

    #[test]
    fn status_mapping_follows_the_server_contract() {
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
        assert_eq!(ApiError::from_status(403, String::new()), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(422, "Title is required".to_string()), ApiError::Invalid("Title is required".to_string()));
        assert_eq!(ApiError::from_status(400, "bad".to_string()), ApiError::Invalid("bad".to_string()));
        assert_eq!(
            ApiError::from_status(NETWORK_FAILURE_STATUS, "network error".to_string()),
            ApiError::Network("network error".to_string())
        );
        assert_eq!(ApiError::from_status(500, "boom".to_string()), ApiError::Unknown("boom".to_string()));
        assert_eq!(ApiError::from_status(418, String::new()), ApiError::Unknown(String::new()));
    }

    #[test]
    fn detail_is_exposed_only_when_meaningful() {
        assert_eq!(ApiError::Invalid("too long".to_string()).detail(), Some("too long"));
        assert_eq!(ApiError::Invalid(String::new()).detail(), None);
        assert_eq!(ApiError::Unknown("oops".to_string()).detail(), Some("oops"));
        assert_eq!(ApiError::NotFound.detail(), None);
        assert_eq!(ApiError::Forbidden.detail(), None);
        assert_eq!(ApiError::Unauthenticated.detail(), None);
    }

    #[test]
    fn error_detail_reads_the_server_detail_field() {
        let body = json!({"detail": "Task not found"});
        assert_eq!(error_detail(Some(&body)), "Task not found");
    }

    #[test]
    fn error_detail_falls_back_to_empty_for_other_shapes() {
        // Structured validation bodies are not flattened into banner text
        let body = json!({"detail": [{"loc": ["title"], "msg": "too long"}]});
        assert_eq!(error_detail(Some(&body)), "");
        assert_eq!(error_detail(Some(&json!({"message": "nope"}))), "");
        assert_eq!(error_detail(None), "");
    }

    #[tokio::test]
    async fn missing_token_fails_fast_without_a_network_call() {
        // The URL is unroutable on purpose; if the transport touched the
        // network this would come back as a network failure instead.
        let transport = AuthTransport::new("http://192.0.2.1:9", NoSession);
        let outcome = transport.send(Method::GET, "/api/v1/tasks", None).await;
        assert_eq!(outcome, RequestOutcome::Unauthenticated);
    }

    #[tokio::test]
    async fn unreachable_server_reports_a_network_failure() {
        // Connection refused locally, no HTTP response involved
        let transport = AuthTransport::new("http://127.0.0.1:1", FixedToken);
        let outcome = transport.send(Method::GET, "/api/v1/tasks", None).await;
        assert_eq!(
            outcome,
            RequestOutcome::Failed {
                status: NETWORK_FAILURE_STATUS,
                detail: "network error".to_string(),
            }
        );
    }
}
