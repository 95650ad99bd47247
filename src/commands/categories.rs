// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::CATEGORIES;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let rows = CATEGORIES
        .iter()
        .map(|c| vec![c.id.to_string(), c.name.to_string(), c.color.to_string(), c.icon.to_string()])
        .collect();
    println!("{}", pretty_table(&["Key", "Name", "Color", "Icon"], rows));
    Ok(())
}
