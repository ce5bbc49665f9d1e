//! RawProxyResponse unit tests

#[cfg(test)]
mod tests {
    use crate::connect::tunnel::response::{ProxyResponse, RawProxyResponse, find_head_end};

    #[test]
    fn test_parse_established_without_body() {
        let response = RawProxyResponse::parse(b"HTTP/1.1 200 Connection Established\r\n\r\n");

        let status = response.status().expect("status should be present");
        assert_eq!(status.status_code(), 200);
        assert!(!response.is_missing_content());
        assert!(response.contents().is_none());
        assert!(response.error().is_none());
        assert!(response.is_head_complete());
    }

    #[test]
    fn test_parse_headers_and_body() {
        let raw = b"HTTP/1.1 407 Proxy Authentication Required\r\n\
                    Proxy-Authenticate: Basic realm=\"proxy\"\r\n\
                    content-length: 11\r\n\
                    \r\n\
                    hello world";
        let response = RawProxyResponse::parse(raw);

        assert_eq!(response.headers().len(), 2);
        assert_eq!(
            response.headers().get("Proxy-Authenticate"),
            Some("Basic realm=\"proxy\"")
        );
        assert_eq!(response.content_length(), Some(11));
        assert_eq!(response.contents(), Some(&b"hello world"[..]));
        assert_eq!(response.error(), Some("hello world"));
        assert!(!response.is_missing_content());
    }

    #[test]
    fn test_missing_content_until_body_arrives() {
        let raw = b"HTTP/1.1 407 Proxy Auth Required\r\nContent-Length: 10\r\n\r\nhello";
        let mut response = RawProxyResponse::parse(raw);

        assert!(response.is_missing_content());
        assert_eq!(response.remaining_content(), 5);

        response.add_content(b"world");
        assert!(!response.is_missing_content());
        assert_eq!(response.error(), Some("helloworld"));
        assert_eq!(&response.body()[..], b"helloworld");
    }

    #[test]
    fn test_incomplete_head_is_missing_content() {
        let response = RawProxyResponse::parse(b"HTTP/1.1 200 Conn");
        assert!(response.status().is_some());
        assert!(!response.is_head_complete());
        assert!(response.is_missing_content());
    }

    #[test]
    fn test_empty_response_keeps_blank_content() {
        let response = RawProxyResponse::parse(b"\r\n\r\n");

        assert!(response.status().is_none());
        assert_eq!(response.contents(), Some(&b"\r\n\r\n"[..]));
        assert_eq!(response.error(), Some("\r\n\r\n"));
        assert!(!response.is_missing_content());
    }

    #[test]
    fn test_garbage_response() {
        let response = RawProxyResponse::parse(&[0x16, 0x03, 0x01, 0x00, 0xFF, 0xFE]);
        assert!(response.status().is_none());
        assert_eq!(response.contents().map(<[u8]>::len), Some(6));
        assert!(response.error().is_some());

        let response = RawProxyResponse::parse(b"");
        assert!(response.status().is_none());
        assert!(response.contents().is_none());
        assert!(response.error().is_none());
    }

    #[test]
    fn test_invalid_content_length_is_ignored() {
        let response =
            RawProxyResponse::parse(b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: lots\r\n\r\n");
        assert_eq!(response.content_length(), None);
        assert!(!response.is_missing_content());
    }

    #[test]
    fn test_find_head_end() {
        assert_eq!(find_head_end(b"\r\n\r\n"), Some((0, 4)));
        assert_eq!(find_head_end(b"HTTP/1.1 200 OK\r\n\r\nbody"), Some((15, 19)));
        assert_eq!(find_head_end(b"HTTP/1.1 200 OK\n\nbody"), Some((15, 17)));
        assert_eq!(find_head_end(b"HTTP/1.1 200 OK\r\n"), None);
        assert_eq!(find_head_end(b"HTTP/1.1 200 OK\n"), None);
        assert_eq!(find_head_end(b""), None);
    }

    #[test]
    fn test_bare_lf_head() {
        let response = RawProxyResponse::parse(
            b"HTTP/1.1 407 Proxy Authentication Required\nContent-Length: 4\n\ndeny",
        );
        assert!(response.is_head_complete());
        assert_eq!(response.status().map(|s| s.status_code()), Some(407));
        assert_eq!(response.content_length(), Some(4));
        assert_eq!(&response.body()[..], b"deny");
        assert!(!response.is_missing_content());
    }
}
