// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::category_by_id;
use crate::tracker::Tracker;
use crate::utils::required_arg;
use anyhow::{Context, Result, bail};
use serde_json::json;

pub fn handle(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = required_arg(sub, "out")?;

    let mut items: Vec<_> = tracker.expenses().all().iter().collect();
    items.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record(["id", "date", "type", "amount", "category", "description"])?;
            for e in &items {
                wtr.write_record([
                    e.id.clone(),
                    e.date.to_string(),
                    e.transaction_type.to_string(),
                    e.amount.to_string(),
                    e.category.clone(),
                    e.description.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let rows: Vec<_> = items
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id,
                        "date": e.date,
                        "transactionType": e.transaction_type,
                        "amount": e.amount,
                        "category": e.category,
                        "categoryName": category_by_id(&e.category).name,
                        "description": e.description,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} transactions to {}", items.len(), out);
    Ok(())
}
