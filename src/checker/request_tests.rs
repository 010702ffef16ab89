//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("http://icanhazip.com/").unwrap();
        let req = HttpRequest::new(http::Method::HEAD, url.clone());

        assert_eq!(req.method, http::Method::HEAD);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
    }

    #[test]
    fn get_creates_get_request() {
        let url = url::Url::parse("http://icanhazip.com/").unwrap();
        let req = HttpRequest::get(url);

        assert_eq!(req.method, http::Method::GET);
    }

    #[test]
    fn with_header_sets_header() {
        let url = url::Url::parse("http://icanhazip.com/").unwrap();
        let req = HttpRequest::get(url).with_header(
            http::header::USER_AGENT,
            http::HeaderValue::from_static("test-agent"),
        );

        assert_eq!(
            req.headers.get(http::header::USER_AGENT).unwrap(),
            "test-agent"
        );
    }

    #[test]
    fn with_header_replaces_previous_value() {
        let url = url::Url::parse("http://icanhazip.com/").unwrap();
        let req = HttpRequest::get(url)
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("first"),
            )
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("second"),
            );

        let headers = &req.headers;
        assert_eq!(headers.get_all(http::header::USER_AGENT).iter().count(), 1);
        assert_eq!(headers.get(http::header::USER_AGENT).unwrap(), "second");
    }

    #[test]
    fn clone_creates_independent_copy() {
        let url = url::Url::parse("http://icanhazip.com/").unwrap();
        let req1 = HttpRequest::get(url);
        let mut req2 = req1.clone();
        req2.headers.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("text/plain"),
        );

        assert!(req1.headers.is_empty());
        assert_eq!(req2.headers.len(), 1);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn ok_creates_success_response() {
        let resp = HttpResponse::ok("203.0.113.5\n");

        assert_eq!(resp.status, http::StatusCode::OK);
        assert!(resp.is_success());
        assert_eq!(resp.body, b"203.0.113.5\n");
    }

    #[test]
    fn is_success_false_for_error_status() {
        let resp = HttpResponse::new(http::StatusCode::SERVICE_UNAVAILABLE, Vec::new());
        assert!(!resp.is_success());
    }

    #[test]
    fn body_text_returns_utf8() {
        let resp = HttpResponse::ok("2001:db8::1");
        assert_eq!(resp.body_text(), Some("2001:db8::1"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::ok(vec![0xff_u8, 0xfe, 0xfd]);
        assert!(resp.body_text().is_none());
    }
}
