// ABOUTME: HTTP security helpers: session cookie parsing and response security headers
// ABOUTME: Shared by the session verifier and the router setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Security Utilities

/// Cookie header parsing
pub mod cookies;
/// Response security headers
pub mod headers;
