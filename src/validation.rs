// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::ValidationError;
use crate::models::NewExpense;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-]+$").expect("phone pattern compiles"));

/// Entry-time checks for a transaction. Trims the description in place.
pub fn validate_expense(data: &mut NewExpense) -> Result<(), ValidationError> {
    if data.amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    let trimmed = data.description.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if trimmed.len() != data.description.len() {
        data.description = trimmed.to_string();
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// International-style numbers: optional `+`, separators allowed, 7 to 15 digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let p = phone.trim();
    let digits = p.chars().filter(|c| c.is_ascii_digit()).count();
    if PHONE_RE.is_match(p) && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

pub fn validate_registration(name: &str, email: &str, phone: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    validate_email(email)?;
    validate_phone(phone)
}
