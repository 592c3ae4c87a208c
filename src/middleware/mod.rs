// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Request IDs, per-request spans and the CORS layer built from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and span helpers
pub use tracing::{apply_request_tracing, record_user_in_span, RequestSpan};
