// ABOUTME: HTTP integration tests for the home equipment catalog route
// ABOUTME: The catalog is public and lists every category with its items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::TestApp;
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

#[tokio::test]
async fn test_catalog_lists_categories_and_items() {
    let app = TestApp::new().await;

    let response = AxumTestRequest::get("/api/equipment").send(app.router()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let categories = body["categories"].as_array().unwrap();
    let ids: Vec<&str> = categories
        .iter()
        .map(|category| category["id"].as_str().unwrap())
        .collect();
    for expected in [
        "weights",
        "resistance-bands",
        "cardio",
        "yoga",
        "stability",
        "mobility",
        "plyometrics",
        "recovery",
    ] {
        assert!(ids.contains(&expected), "missing category {expected}");
    }

    let bands = categories
        .iter()
        .find(|category| category["id"] == "resistance-bands")
        .unwrap();
    let medium = bands["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["id"] == "band-medium")
        .unwrap();
    assert_eq!(medium["resistance"], "Srednja");
    assert_eq!(medium["color"], "Rdeča");
    assert!(medium.get("weight").is_none());
}
