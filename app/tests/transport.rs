//! `ReqwestTransport` against the live mock server.

use crud_app::ReqwestTransport;
use crud_core::{ApiError, HttpMethod, HttpRequest, ResourceClient, Transport, User};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn executes_built_requests() {
    let base = start_server().await;
    let transport = ReqwestTransport::new().unwrap();
    let client: ResourceClient<User> = ResourceClient::new(&base);

    let response = transport.execute(client.build_list()).await.unwrap();
    assert_eq!(response.status, 200);
    assert!(response
        .headers
        .iter()
        .any(|(name, value)| name == "content-type" && value.starts_with("application/json")));
    assert_eq!(client.parse_list(response).unwrap().len(), 3);

    let request = client.build_create(&User::new("Ada", "ada@example.com")).unwrap();
    let response = transport.execute(request).await.unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(client.parse_create(response).unwrap().name, "Ada");
}

#[tokio::test]
async fn error_statuses_come_back_as_data() {
    let base = start_server().await;
    let transport = ReqwestTransport::new().unwrap();

    let response = transport
        .execute(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{base}/posts/404"),
            headers: Vec::new(),
            body: None,
        })
        .await
        .unwrap();
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = ReqwestTransport::new().unwrap();
    let err = transport
        .execute(HttpRequest {
            method: HttpMethod::Get,
            path: format!("http://{addr}/users"),
            headers: Vec::new(),
            body: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
