// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Top-items passthrough tests.
//!
//! The relay forwards the supplied time range verbatim (defaulting to
//! `long_term`), returns the upstream JSON byte for byte, and maps any
//! upstream failure to the generic 500.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_time_range_forwarded_verbatim() {
    let upstream = common::spawn_mock_upstream().await;
    let app = common::create_test_app(&upstream);

    for endpoint in ["/top-artists", "/top-tracks"] {
        for time_range in ["long_term", "medium_term", "short_term"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri(format!(
                            "{}?access_token={}&time_range={}",
                            endpoint,
                            common::MOCK_ACCESS_TOKEN,
                            time_range
                        ))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let json = body_json(response).await;
            assert_eq!(json["time_range"], time_range);
        }
    }
}

#[tokio::test]
async fn test_time_range_defaults_to_long_term() {
    let upstream = common::spawn_mock_upstream().await;
    let app = common::create_test_app(&upstream);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!(
                    "/top-artists?access_token={}",
                    common::MOCK_ACCESS_TOKEN
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["time_range"], "long_term");
}

#[tokio::test]
async fn test_unknown_time_range_is_not_validated() {
    let upstream = common::spawn_mock_upstream().await;
    let app = common::create_test_app(&upstream);

    // The relay forwards whatever it was given; the upstream decides.
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!(
                    "/top-artists?access_token={}&time_range=last_week",
                    common::MOCK_ACCESS_TOKEN
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["time_range"], "last_week");
}

#[tokio::test]
async fn test_upstream_rejection_maps_to_500() {
    let upstream = common::spawn_mock_upstream().await;
    let app = common::create_test_app(&upstream);

    for uri in [
        "/top-artists?access_token=stale_token",
        "/top-tracks?access_token=stale_token",
        "/top-artists",
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"Server error");
    }
}

#[tokio::test]
async fn test_passthrough_is_byte_identical() {
    let upstream = common::spawn_mock_upstream().await;
    let app = common::create_test_app(&upstream);

    let relayed = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!(
                    "/top-tracks?access_token={}&time_range=medium_term",
                    common::MOCK_ACCESS_TOKEN
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let relayed_body = axum::body::to_bytes(relayed.into_body(), 1 << 20).await.unwrap();

    let direct = reqwest::Client::new()
        .get(format!("{}/v1/me/top/tracks", upstream))
        .bearer_auth(common::MOCK_ACCESS_TOKEN)
        .query(&[("time_range", "medium_term")])
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();

    assert_eq!(&relayed_body[..], &direct[..]);
}

#[tokio::test]
async fn test_repeated_requests_behave_identically() {
    let upstream = common::spawn_mock_upstream().await;
    let app = common::create_test_app(&upstream);

    let uri = format!(
        "/top-artists?access_token={}&time_range=short_term",
        common::MOCK_ACCESS_TOKEN
    );

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(&uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(
            axum::body::to_bytes(response.into_body(), 1 << 20)
                .await
                .unwrap(),
        );
    }

    // No server-side state accumulates between calls.
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}
