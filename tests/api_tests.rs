// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use momentum::api::{ApiClient, ApiError};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// One-shot HTTP fixture: accepts a single connection, ignores the
/// request, answers with the canned status and JSON body, then closes.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 8192];
            let _ = stream.read(&mut buf);
            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(resp.as_bytes());
        }
    });
    format!("http://{}", addr)
}

#[test]
fn summary_fetch_decodes_the_month() {
    let base = serve_once(
        "200 OK",
        r#"{"month": 2, "year": 2026, "budget": 100.0, "total_spent": 25.0, "saved": 75.0,
           "expenses": [{"id": 1, "amount": 25.0, "note": null, "date": "2026-02-01"}]}"#,
    );
    let api = ApiClient::new(&base, Some("token".into())).unwrap();
    let summary = api.expense_summary(2, 2026).unwrap();
    assert_eq!(summary.month, 2);
    assert_eq!(summary.expenses.len(), 1);
}

#[test]
fn server_rejections_surface_the_detail_verbatim() {
    let base = serve_once(
        "400 Bad Request",
        r#"{"detail": "You can only save today's expense."}"#,
    );
    let api = ApiClient::new(&base, Some("token".into())).unwrap();
    let err = api.record_checkin().unwrap_err();
    match err {
        ApiError::Rejected { status, ref detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "You can only save today's expense.");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(err.to_string(), "You can only save today's expense.");
}

#[test]
fn rejections_without_a_detail_fall_back_to_the_status_reason() {
    let base = serve_once("500 Internal Server Error", "not even json");
    let api = ApiClient::new(&base, Some("token".into())).unwrap();
    match api.checkin_stats().unwrap_err() {
        ApiError::Rejected { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Internal Server Error");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn missing_session_fails_before_any_request() {
    // No listener anywhere near this port; the call must fail on the
    // missing token, not on the socket.
    let api = ApiClient::new("http://127.0.0.1:9", None).unwrap();
    match api.habits().unwrap_err() {
        ApiError::NoSession => {}
        other => panic!("expected NoSession, got {:?}", other),
    }
}

#[test]
fn connection_failures_read_as_network_errors() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener); // port is now closed
    let api = ApiClient::new(&base, Some("token".into())).unwrap();
    match api.checkin_stats().unwrap_err() {
        ApiError::Network(_) => {}
        other => panic!("expected network error, got {:?}", other),
    }
}

#[test]
fn login_needs_no_prior_session() {
    let base = serve_once(
        "200 OK",
        r#"{"access_token": "abc123", "token_type": "bearer"}"#,
    );
    let api = ApiClient::new(&base, None).unwrap();
    let token = api.login("champ", "hunter2").unwrap();
    assert_eq!(token.access_token, "abc123");
}
