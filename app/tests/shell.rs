//! Scripted sessions through the shell against the live mock server.

use std::sync::Arc;

use crud_app::{ReqwestTransport, Shell};
use crud_core::Route;

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

async fn session(script: &str) -> (Shell<ReqwestTransport>, String) {
    let base = start_server().await;
    let mut shell = Shell::new(&base, Arc::new(ReqwestTransport::new().unwrap()));
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).await.unwrap();
    (shell, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn starts_on_home_and_links_to_users() {
    let (shell, out) = session("quit\n").await;
    assert_eq!(shell.route(), Route::Home);
    assert!(out.contains("== Home =="));
    assert!(out.contains("go /users"));
}

#[tokio::test]
async fn navigating_mounts_the_page() {
    let (shell, out) = session("go /users\n").await;
    assert_eq!(shell.route(), Route::Users);
    assert!(out.contains("Leanne Graham"));
    assert!(out.contains("3 user(s)"));
    assert!(out.contains("[viewing]"));
}

#[tokio::test]
async fn create_appends_locally_numbered_row() {
    let (shell, out) = session("go /users\nset name Ada Lovelace\nset email ada@example.com\nsubmit\n").await;
    assert!(out.contains("created user 4"));
    let page = shell.render().await;
    assert!(page.contains("| 4  | Ada Lovelace"));
    assert!(page.contains("4 user(s)"));
}

#[tokio::test]
async fn blank_field_shows_validation_error() {
    let (shell, _) = session("go /posts\nset title Hello\nsubmit\n").await;
    let page = shell.render().await;
    assert!(page.contains("error: body is required"));
    assert!(page.contains("4 post(s)"));
}

#[tokio::test]
async fn edit_submit_updates_in_place() {
    let (shell, out) = session("go /users\nedit 2\nset name Ervin H.\nsubmit\n").await;
    assert!(out.contains("[editing]"));
    assert!(out.contains("updated user 2"));
    let page = shell.render().await;
    assert!(page.contains("| 2  | Ervin H."));
    assert!(page.contains("[viewing]"));
    assert!(page.contains("3 user(s)"));
}

#[tokio::test]
async fn delete_asks_before_acting() {
    let (shell, out) = session("go /users\ndelete 1\nn\ndelete 1\ny\n").await;
    assert!(out.contains("delete user 1? [y/N]"));
    assert!(out.contains("kept user 1"));
    assert!(out.contains("deleted user 1"));
    let page = shell.render().await;
    assert!(!page.contains("Leanne Graham"));
    assert!(page.contains("2 user(s)"));
}

#[tokio::test]
async fn refresh_restores_server_view() {
    let (shell, out) = session("go /users\ndelete 1\ny\nrefresh\n").await;
    assert!(out.contains("fetched 3 user(s)"));
    assert!(shell.render().await.contains("Leanne Graham"));
}

#[tokio::test]
async fn page_commands_on_home_are_refused() {
    let (shell, out) = session("submit\ndelete 3\n").await;
    assert_eq!(shell.route(), Route::Home);
    assert_eq!(out.matches("open /users or /posts first").count(), 2);
}

#[tokio::test]
async fn bad_input_does_not_end_the_session() {
    let (shell, out) = session("frobnicate\ngo /nowhere\ngo /posts\n").await;
    assert!(out.contains("unknown command 'frobnicate'"));
    assert!(out.contains("unknown route '/nowhere'"));
    assert_eq!(shell.route(), Route::Posts);
}
