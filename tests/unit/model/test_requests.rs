use cloud_client::application::auth::Session;
use cloud_client::error::AppError;
use cloud_client::model::requests::{ApiRequest, RequestMethod, ResourceType};
use reqwest::Method;
use serde_json::json;

const BALANCER: &str = "https://ord.loadbalancers.example/v1.0";

fn discovered_session() -> Session {
    let mut session = Session::with_token("tok");
    session.server_url = Some("https://servers.example/v1.0/998877".to_string());
    session.storage_url = Some("https://storage.example/v1/MossoCloudFS_1".to_string());
    session.cdn_url = Some("https://cdn.example/v1/MossoCloudFS_1/".to_string());
    session.account_id = Some("998877".to_string());
    session
}

#[test]
fn test_server_url_is_base_plus_path() {
    let request = ApiRequest::new(RequestMethod::Get, ResourceType::Server, "/servers/detail");
    let url = request.resolve_url(&discovered_session(), BALANCER).unwrap();
    assert_eq!(url, "https://servers.example/v1.0/998877/servers/detail");
}

#[test]
fn test_storage_and_cdn_urls_have_no_account_splice() {
    let session = discovered_session();

    let storage = ApiRequest::new(RequestMethod::Get, ResourceType::Storage, "/photos");
    assert_eq!(
        storage.resolve_url(&session, BALANCER).unwrap(),
        "https://storage.example/v1/MossoCloudFS_1/photos"
    );

    let cdn = ApiRequest::new(RequestMethod::Get, ResourceType::Cdn, "/photos");
    assert_eq!(
        cdn.resolve_url(&session, BALANCER).unwrap(),
        "https://cdn.example/v1/MossoCloudFS_1/photos"
    );
}

#[test]
fn test_balancer_url_splices_account_id() {
    let request = ApiRequest::new(RequestMethod::Get, ResourceType::Balancer, "/loadbalancers");
    let url = request.resolve_url(&discovered_session(), BALANCER).unwrap();
    assert_eq!(
        url,
        "https://ord.loadbalancers.example/v1.0/998877/loadbalancers"
    );
}

#[test]
fn test_path_without_leading_slash_is_normalized() {
    let request = ApiRequest::new(RequestMethod::Get, ResourceType::Server, "limits");
    assert_eq!(request.normalized_path().unwrap(), "/limits");
}

#[test]
fn test_empty_path_is_rejected() {
    let request = ApiRequest::new(RequestMethod::Get, ResourceType::Server, "  ");
    assert!(matches!(
        request.resolve_url(&discovered_session(), BALANCER),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_missing_endpoint_for_category() {
    let session = Session::with_token("tok");
    for resource in [
        ResourceType::Server,
        ResourceType::Balancer,
        ResourceType::Storage,
        ResourceType::Cdn,
    ] {
        let request = ApiRequest::new(RequestMethod::Get, resource, "/x");
        match request.resolve_url(&session, BALANCER) {
            Err(AppError::MissingEndpoint(r)) => assert_eq!(r, resource),
            other => panic!("Expected MissingEndpoint for {resource}, got {other:?}"),
        }
    }
}

#[test]
fn test_request_method_mapping_and_body_rule() {
    assert_eq!(Method::from(RequestMethod::Get), Method::GET);
    assert_eq!(Method::from(RequestMethod::Post), Method::POST);
    assert_eq!(Method::from(RequestMethod::Put), Method::PUT);
    assert_eq!(Method::from(RequestMethod::Delete), Method::DELETE);
    assert!(RequestMethod::Post.carries_body());
    assert!(RequestMethod::Put.carries_body());
    assert!(!RequestMethod::Get.carries_body());
    assert!(!RequestMethod::Delete.carries_body());
}

#[test]
fn test_with_payload_sets_body() {
    let request = ApiRequest::new(RequestMethod::Post, ResourceType::Server, "/servers")
        .with_payload(json!({"server": {"name": "web01"}}));
    assert_eq!(request.payload, Some(json!({"server": {"name": "web01"}})));
}
