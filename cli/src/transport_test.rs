use super::*;

#[test]
fn methods_map_to_reqwest() {
    assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(reqwest_method(Method::Put), reqwest::Method::PUT);
    assert_eq!(reqwest_method(Method::Post), reqwest::Method::POST);
}

#[test]
fn transport_builds_with_timeout() {
    assert!(ReqwestTransport::new(Duration::from_secs(5)).is_ok());
}
