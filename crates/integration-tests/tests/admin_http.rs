//! Integration tests for the admin dashboard API: the Operator chat and the
//! side panel it drives.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use auro_integration_tests::{admin_app, body_json, body_text, json_request, request};

async fn send(app: &axum::Router, content: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/chat/messages",
            &json!({"content": content}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn test_conversation_drives_panel() {
    let app = admin_app();

    let reply = send(&app, "show tickets").await;
    assert_eq!(reply["intent"], "ticket-list");
    assert_eq!(reply["panel"]["type"], "tickets");
    assert_eq!(reply["panel"]["data"].as_array().unwrap().len(), 6);

    let html = body_text(app.clone().oneshot(request("GET", "/display")).await.unwrap()).await;
    assert!(html.contains("data-panel=\"tickets\""));

    // text-only replies leave the panel alone
    let reply = send(&app, "help").await;
    assert!(reply["panel"].is_null());
    let panel = body_json(app.clone().oneshot(request("GET", "/display/data")).await.unwrap()).await;
    assert_eq!(panel["type"], "tickets");

    let transcript =
        body_json(app.clone().oneshot(request("GET", "/chat/messages")).await.unwrap()).await;
    assert_eq!(transcript["messages"].as_array().unwrap().len(), 5);
    assert_eq!(transcript["messages"][0]["id"], "welcome-message");
    assert_eq!(transcript["isProcessing"], false);
}

#[tokio::test]
async fn test_blank_message_rejected() {
    let app = admin_app();
    let response = app
        .oneshot(json_request("POST", "/chat/messages", &json!({"content": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ticket_not_found_keeps_placeholder() {
    let app = admin_app();

    let reply = send(&app, "ticket-7").await;
    assert!(reply["panel"].is_null());
    assert!(reply["text"].as_str().unwrap().contains("couldn't find a ticket"));

    let html = body_text(app.oneshot(request("GET", "/display")).await.unwrap()).await;
    assert!(html.contains("No Data Selected"));
}

#[tokio::test]
async fn test_detail_edit_then_back() {
    let app = admin_app();
    send(&app, "find ticket 1001").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/display/ticket/status",
            &json!({"status": "resolved"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ticket = body_json(response).await;
    assert_eq!(ticket["status"], "resolved");

    let html = body_text(app.clone().oneshot(request("GET", "/display")).await.unwrap()).await;
    assert!(html.contains("Status updated from open to resolved"));

    let response = app.clone().oneshot(request("POST", "/display/back")).await.unwrap();
    assert_eq!(body_json(response).await["panel"], "tickets");

    // edits stay on the displayed copy
    let panel = body_json(app.oneshot(request("GET", "/display/data")).await.unwrap()).await;
    let original = panel["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == "TICKET-1001")
        .unwrap();
    assert_eq!(original["status"], "open");
}

#[tokio::test]
async fn test_filtered_list_view() {
    let app = admin_app();
    send(&app, "show logs").await;

    let html = body_text(
        app.clone()
            .oneshot(request("GET", "/display?level=ERROR"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("LOG-001"));
    assert!(!html.contains("LOG-002"));

    let response = app
        .oneshot(request("GET", "/display?level=LOUD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_action_acknowledged_in_transcript() {
    let app = admin_app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/chat/actions",
            &json!({"action": "assign_ticket", "ticketId": "TICKET-1003", "assignee": "Field Tech"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let message = body_json(response).await;
    assert_eq!(message["role"], "assistant");
    assert!(message["content"].as_str().unwrap().contains("Field Tech"));

    let response = app.clone().oneshot(request("DELETE", "/chat/messages")).await.unwrap();
    let transcript = body_json(response).await;
    assert_eq!(transcript["messages"].as_array().unwrap().len(), 1);

    let panel = body_json(app.oneshot(request("GET", "/display/data")).await.unwrap()).await;
    assert!(panel.is_null());
}
