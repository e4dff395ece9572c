//! Conversions from external infrastructure errors into domain errors.

use cohort_domain::CohortError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CohortError);

impl From<InfraError> for CohortError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CohortError> for InfraError {
    fn from(value: CohortError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCohortError {
    fn into_cohort(self) -> CohortError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CohortError */
/* -------------------------------------------------------------------------- */

impl IntoCohortError for HttpError {
    fn into_cohort(self) -> CohortError {
        if self.is_timeout() {
            return CohortError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CohortError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => CohortError::Auth(message),
                404 => CohortError::NotFound(message),
                400..=499 => CohortError::InvalidInput(message),
                _ => CohortError::Network(message),
            };
        }

        CohortError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_cohort())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn connection_failure_maps_to_network_error() {
        // Nothing listens on this port.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9")
            .send()
            .await
            .expect_err("request must fail");

        let mapped: CohortError = InfraError::from(err).into();
        match mapped {
            CohortError::Network(msg) => assert!(msg.contains("connection")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn timeout_maps_to_network_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let err = reqwest::Client::new()
            .get(mock_server.uri())
            .timeout(Duration::from_millis(50))
            .send()
            .await
            .expect_err("request must time out");

        let mapped: CohortError = InfraError::from(err).into();
        match mapped {
            CohortError::Network(msg) => assert!(msg.contains("timed out")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn auth_status_maps_to_auth_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = reqwest::Client::new()
            .get(mock_server.uri())
            .send()
            .await
            .expect("request succeeds at transport level")
            .error_for_status()
            .expect_err("status must be an error");

        let mapped: CohortError = InfraError::from(err).into();
        match mapped {
            CohortError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }
}
