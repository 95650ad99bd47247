// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types shared by the stores, the tracker and the CLI handlers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No registered profile; run `tallybook register` first")]
    NotRegistered,

    #[error("Transaction '{0}' not found")]
    NotFound(String),

    #[error("Cancelled")]
    Cancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Entry-time validation failures. These block the mutation and are shown to
/// the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Description is required")]
    EmptyDescription,

    #[error("Name is required")]
    EmptyName,

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("Invalid phone number '{0}'")]
    InvalidPhone(String),
}
