//! Response validator unit tests

#[cfg(test)]
mod tests {
    use crate::connect::tunnel::response::{ProxyResponse, RawProxyResponse};
    use crate::connect::tunnel::status::StatusLine;
    use crate::connect::tunnel::validate::{
        EMPTY_RESPONSE_DIAGNOSTIC, ResponseValidator, TunnelOutcome, inspect_proxy_response,
        validate_proxy_response,
    };
    use crate::error::Kind;

    /// Hand-rolled response double with fixed accessor values.
    #[derive(Default)]
    struct StubResponse {
        status: Option<StatusLine>,
        missing_content: bool,
        contents: Option<Vec<u8>>,
        error: Option<String>,
    }

    impl ProxyResponse for StubResponse {
        fn status(&self) -> Option<&StatusLine> {
            self.status.as_ref()
        }

        fn is_missing_content(&self) -> bool {
            self.missing_content
        }

        fn contents(&self) -> Option<&[u8]> {
            self.contents.as_deref()
        }

        fn error(&self) -> Option<&str> {
            self.error.as_deref()
        }
    }

    fn status(raw: &str) -> Option<StatusLine> {
        Some(StatusLine::parse(raw).expect("test status line should parse"))
    }

    #[test]
    fn test_validate_proxy_response_on_success() {
        let cases = [
            (200, "Connection Established"),
            (201, "Created"),
            (202, "Accepted"),
            (226, "IM Used"),
            (299, ""),
        ];

        for (code, reason) in cases {
            let response = StubResponse {
                status: status(&format!("HTTP/1.1 {code} {reason}")),
                ..StubResponse::default()
            };
            assert!(validate_proxy_response(&response), "{code} {reason}");
        }
    }

    #[test]
    fn test_every_2xx_code_succeeds() {
        let validator = ResponseValidator::new();
        for code in 200..=299 {
            let response = StubResponse {
                status: status(&format!("HTTP/1.1 {code} Whatever")),
                ..StubResponse::default()
            };
            let outcome = validator.inspect(&response);
            assert!(outcome.is_established(), "{code}");
            assert!(outcome.diagnostic().is_none());
        }
    }

    #[test]
    fn test_validate_proxy_response_on_failure() {
        let contents = "<html><body>[Fiddler] Proxy Authentication Required.<BR></body></html>";
        let response = StubResponse {
            status: status("HTTP/1.1 407 Proxy Auth Required"),
            missing_content: false,
            contents: Some(contents.as_bytes().to_vec()),
            error: Some(contents.to_string()),
        };

        assert!(!validate_proxy_response(&response));

        let outcome = inspect_proxy_response(&response);
        let diagnostic = outcome.diagnostic().expect("rejection carries a diagnostic");
        assert!(diagnostic.contains("407"));
        assert!(diagnostic.contains("Proxy Auth Required"));
        assert!(diagnostic.contains(contents));
        assert_eq!(
            outcome.status().map(StatusLine::status_code),
            Some(407)
        );
    }

    #[test]
    fn test_non_2xx_codes_fail() {
        for code in [100, 101, 199, 300, 301, 400, 403, 404, 407, 500, 502, 503, 599] {
            let response = StubResponse {
                status: status(&format!("HTTP/1.1 {code} Nope")),
                ..StubResponse::default()
            };
            assert!(!validate_proxy_response(&response), "{code}");
        }
    }

    #[test]
    fn test_rejection_falls_back_to_body() {
        let response = StubResponse {
            status: status("HTTP/1.1 503 Service Unavailable"),
            contents: Some(b"upstream down".to_vec()),
            ..StubResponse::default()
        };

        let outcome = inspect_proxy_response(&response);
        assert_eq!(
            outcome.diagnostic(),
            Some("503 Service Unavailable: upstream down")
        );
    }

    #[test]
    fn test_rejection_prefers_supplied_error() {
        let response = StubResponse {
            status: status("HTTP/1.1 403 Forbidden"),
            contents: Some(b"body text".to_vec()),
            error: Some("transport says no".to_string()),
            ..StubResponse::default()
        };

        let outcome = inspect_proxy_response(&response);
        assert_eq!(outcome.diagnostic(), Some("403 Forbidden: transport says no"));
    }

    #[test]
    fn test_rejection_without_detail_or_reason() {
        let response = StubResponse {
            status: status("HTTP/1.1 502 "),
            missing_content: true,
            ..StubResponse::default()
        };

        let outcome = inspect_proxy_response(&response);
        assert_eq!(outcome.diagnostic(), Some("502 (incomplete body)"));
    }

    #[test]
    fn test_validate_proxy_response_on_empty_response() {
        let empty_response = "\r\n\r\n";
        let response = StubResponse {
            status: None,
            missing_content: false,
            contents: Some(empty_response.as_bytes().to_vec()),
            error: Some(empty_response.to_string()),
        };

        assert!(!validate_proxy_response(&response));
        assert_eq!(
            inspect_proxy_response(&response),
            TunnelOutcome::Malformed {
                diagnostic: empty_response.to_string()
            }
        );
    }

    #[test]
    fn test_malformed_diagnostic_fallbacks() {
        let only_contents = StubResponse {
            contents: Some(b"garbage".to_vec()),
            error: Some(String::new()),
            ..StubResponse::default()
        };
        assert_eq!(
            inspect_proxy_response(&only_contents).diagnostic(),
            Some("garbage")
        );

        let nothing = StubResponse {
            missing_content: true,
            ..StubResponse::default()
        };
        assert_eq!(
            inspect_proxy_response(&nothing).diagnostic(),
            Some(EMPTY_RESPONSE_DIAGNOSTIC)
        );
    }

    #[test]
    fn test_missing_content_does_not_block_known_success() {
        let response = StubResponse {
            status: status("HTTP/1.1 200 Connection Established"),
            missing_content: true,
            ..StubResponse::default()
        };
        assert!(validate_proxy_response(&response));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let response = RawProxyResponse::parse(
            b"HTTP/1.1 407 Proxy Auth Required\r\nContent-Length: 4\r\n\r\ndeny",
        );
        let validator = ResponseValidator::new();

        let first = validator.inspect(&response);
        let second = validator.inspect(&response);
        assert_eq!(first, second);
        assert_eq!(validator.validate(&response), validator.validate(&response));
    }

    #[test]
    fn test_outcome_into_result() {
        let rejected = inspect_proxy_response(&StubResponse {
            status: status("HTTP/1.1 407 Proxy Auth Required"),
            ..StubResponse::default()
        });
        let err = rejected.into_result().expect_err("407 is a rejection");
        assert_eq!(err.kind(), &Kind::ProxyRejected { status_code: 407 });
        assert_eq!(err.status(), Some(407));
        assert!(err.to_string().contains("407"));

        let malformed = inspect_proxy_response(&StubResponse::default());
        let err = malformed.into_result().expect_err("no status is malformed");
        assert_eq!(err.kind(), &Kind::EmptyOrIncompleteResponse);
        assert_eq!(err.diagnostic(), Some(EMPTY_RESPONSE_DIAGNOSTIC));

        let established = inspect_proxy_response(&StubResponse {
            status: status("HTTP/1.1 200 OK"),
            ..StubResponse::default()
        });
        let line = established.into_result().expect("200 is established");
        assert_eq!(line.status_code(), 200);
    }
}
