// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The fixed category table. Records refer to categories by key; keys that are
//! not in the table display as "Other".

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const FALLBACK_ID: &str = "other";

pub static CATEGORIES: [Category; 8] = [
    Category { id: "food", name: "Food", icon: "utensils", color: "#FF6B6B" },
    Category { id: "transport", name: "Transport", icon: "car", color: "#4ECDC4" },
    Category { id: "entertainment", name: "Entertainment", icon: "film", color: "#FFD166" },
    Category { id: "shopping", name: "Shopping", icon: "shopping-bag", color: "#F78FB3" },
    Category { id: "housing", name: "Housing", icon: "home", color: "#6A0572" },
    Category { id: "utilities", name: "Utilities", icon: "plug", color: "#1A535C" },
    Category { id: "healthcare", name: "Healthcare", icon: "heart", color: "#FF595E" },
    Category { id: FALLBACK_ID, name: "Other", icon: "grid", color: "#8075FF" },
];

static BY_ID: Lazy<HashMap<&'static str, &'static Category>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.id, c)).collect());

pub fn fallback() -> &'static Category {
    &CATEGORIES[CATEGORIES.len() - 1]
}

/// Never fails: unknown keys resolve to the fallback entry.
pub fn category_by_id(id: &str) -> &'static Category {
    BY_ID.get(id).copied().unwrap_or_else(fallback)
}

pub fn is_known(id: &str) -> bool {
    BY_ID.contains_key(id)
}
