// ABOUTME: Error types shared by the server crate
// ABOUTME: Re-exports the core AppError/ErrorCode taxonomy and provider errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

pub use mealwise_core::errors::*;
