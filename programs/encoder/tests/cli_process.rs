//! Process-level tests for the `group-encoder` binary: exit codes, stdout
//! discipline, and the registry base URL override.

use std::io::{ErrorKind, Read, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread::JoinHandle;

use semaphore_group::{group::Group, record::GroupRecord};
use semaphore_group_encoder::encode::GroupCalldata;

const BIN: &str = env!("CARGO_BIN_EXE_group-encoder");
const BASE_URL_ENV: &str = "GROUP_REGISTRY_URL";

const GROUP_JSON: &str = r#"{"id":"7","name":"g7","members":["11","22","33"],"depth":16}"#;

// Minimal one-shot HTTP server; answers a single request with `response`.
fn serve_once(response: String) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0_u8; 1024];
        let _ = stream.read(&mut request).unwrap();
        stream.write_all(response.as_bytes()).unwrap();
    });
    (format!("http://{addr}"), handle)
}

fn ok_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[test]
fn missing_group_id_exits_with_status_1_and_no_network_call() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let output = Command::new(BIN)
        .env(BASE_URL_ENV, &base_url)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please provide a group id"));

    // Nothing ever connected to the registry.
    assert_eq!(listener.accept().unwrap_err().kind(), ErrorKind::WouldBlock);
}

#[test]
fn non_numeric_group_id_exits_with_status_1() {
    let output = Command::new(BIN).arg("g7").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn upstream_error_status_exits_with_status_2_and_empty_stdout() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 5\r\nconnection: close\r\n\r\noops!"
            .to_string(),
    );

    let output = Command::new(BIN)
        .arg("7")
        .env(BASE_URL_ENV, &base_url)
        .output()
        .unwrap();
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_body_exits_with_status_2_and_empty_stdout() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 200 OK\r\ncontent-length: 8\r\nconnection: close\r\n\r\nnot json".to_string(),
    );

    let output = Command::new(BIN)
        .arg("7")
        .env(BASE_URL_ENV, &base_url)
        .output()
        .unwrap();
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn successful_run_writes_exactly_the_encoded_tuple_to_stdout() {
    let (base_url, server) = serve_once(ok_response(GROUP_JSON));

    let output = Command::new(BIN)
        .arg("7")
        .env(BASE_URL_ENV, &base_url)
        .output()
        .unwrap();
    server.join().unwrap();

    let record: GroupRecord = serde_json::from_str(GROUP_JSON).unwrap();
    let group = Group::from_record(&record).unwrap();
    let expected = GroupCalldata::project(&record, &group).encode();

    assert_eq!(output.status.code(), Some(0));
    // Raw bytes, no framing, no trailing newline.
    assert_eq!(output.stdout, expected);
}
