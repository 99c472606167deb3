use std::collections::HashMap;

use beacon::http::request::{Method, Request};

fn request_with_headers(headers: HashMap<String, String>) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
    }
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    let req = request_with_headers(headers);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_is_case_sensitive() {
    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), "curl/8.0".to_string());
    let req = request_with_headers(headers);

    assert_eq!(req.header("User-Agent"), Some("curl/8.0"));
    assert_eq!(req.header("user-agent"), None);
    assert_eq!(req.header("USER-AGENT"), None);
}

#[test]
fn test_method_from_token_known_verbs() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("POST"), Method::POST);
    assert_eq!(Method::from_token("PUT"), Method::PUT);
    assert_eq!(Method::from_token("DELETE"), Method::DELETE);
    assert_eq!(Method::from_token("HEAD"), Method::HEAD);
    assert_eq!(Method::from_token("OPTIONS"), Method::OPTIONS);
    assert_eq!(Method::from_token("PATCH"), Method::PATCH);
}

#[test]
fn test_method_from_token_is_case_sensitive() {
    assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
}

#[test]
fn test_method_unknown_token_kept_verbatim() {
    assert_eq!(
        Method::from_token("PURGE"),
        Method::Other("PURGE".to_string())
    );
}

#[test]
fn test_method_as_str_round_trip() {
    assert_eq!(Method::GET.as_str(), "GET");
    assert_eq!(Method::Other("PURGE".to_string()).as_str(), "PURGE");
}

#[test]
fn test_request_with_body() {
    let body_content = b"test body content".to_vec();
    let req = Request {
        method: Method::POST,
        path: "/api".to_string(),
        version: "HTTP/1.1".to_string(),
        headers: HashMap::new(),
        body: body_content.clone(),
    };

    assert_eq!(req.body, body_content);
}

#[test]
fn test_request_clone_is_structurally_equal() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "x".to_string());
    let req = Request {
        method: Method::POST,
        path: "/api".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: b"hello".to_vec(),
    };

    assert_eq!(req.clone(), req);
}
