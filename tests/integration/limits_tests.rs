use crate::common::*;
use mockito::Server;

#[tokio::test]
async fn test_get_limits_returns_body_on_200_and_203() {
    for status in [200, 203] {
        let mut server = Server::new_async().await;
        let _auth = mock_auth(&mut server, "tok", 1).await;
        let body = r#"{"limits":{"rate":[],"absolute":{"maxTotalRAMSize":51200}}}"#;
        let limits = server
            .mock("GET", server_path("/limits").as_str())
            .match_header("X-Auth-Token", "tok")
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let client = mock_client(&server);
        let result = client.get_limits().await.unwrap();
        assert_eq!(result.as_deref(), Some(body), "status {status}");

        limits.assert_async().await;
    }
}

#[tokio::test]
async fn test_get_limits_signals_absence_on_other_statuses() {
    for status in [202, 400, 403, 404, 409, 413, 500, 503] {
        let mut server = Server::new_async().await;
        let _auth = mock_auth(&mut server, "tok", 1).await;
        let _limits = server
            .mock("GET", server_path("/limits").as_str())
            .with_status(status)
            .with_body("{}")
            .create_async()
            .await;

        let client = mock_client(&server);
        let result = client.get_limits().await.unwrap();
        assert_eq!(result, None, "status {status}");
    }
}

#[tokio::test]
async fn test_get_limits_propagates_auth_failure() {
    let mut server = Server::new_async().await;
    let _auth = server
        .mock("GET", "/v1.0")
        .with_status(403)
        .create_async()
        .await;

    let client = mock_client(&server);
    assert!(client.get_limits().await.is_err());
}
