// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{self, category_by_id};
use crate::models::{Expense, NewExpense, TransactionType};
use crate::tracker::{Confirm, Tracker};
use crate::utils::{
    fmt_money, maybe_print_json, month_or, parse_date, parse_decimal, pretty_table, required_arg,
};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;

pub fn handle(tracker: &mut Tracker, m: &clap::ArgMatches, gate: &mut dyn Confirm) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, sub, gate)?,
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("edit", sub)) => edit(tracker, sub, gate)?,
        Some(("rm", sub)) => {
            let id = required_arg(sub, "id")?;
            let existed = tracker.expenses().get(id).is_some();
            tracker.delete_expense(id);
            if existed {
                println!("Removed {}", id);
            } else {
                println!("No transaction with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn category_key(raw: Option<&String>) -> String {
    let key = raw
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| categories::FALLBACK_ID.to_string());
    if !categories::is_known(&key) {
        tracing::debug!(key = %key, "unknown category key, will display as Other");
    }
    key
}

pub fn new_expense_from(sub: &clap::ArgMatches) -> Result<NewExpense> {
    let amount = parse_decimal(required_arg(sub, "amount")?)?;
    let description = required_arg(sub, "description")?.to_string();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let transaction_type = match sub.get_one::<String>("type") {
        Some(t) => t.parse::<TransactionType>()?,
        None => TransactionType::Expense,
    };
    Ok(NewExpense {
        amount,
        category: category_key(sub.get_one::<String>("category")),
        description,
        date,
        transaction_type,
    })
}

fn add(tracker: &mut Tracker, sub: &clap::ArgMatches, gate: &mut dyn Confirm) -> Result<()> {
    let data = new_expense_from(sub)?;
    let fired = tracker.notifications().all().len();
    let e = tracker.add_expense(data, gate)?;
    println!(
        "Recorded {} {} on {} '{}' ({}) id={}",
        e.transaction_type,
        fmt_money(&e.amount),
        e.date,
        e.description,
        category_by_id(&e.category).name,
        e.id
    );
    print_new_notifications(tracker, fired);
    Ok(())
}

/// Applies only the flags that were given.
pub fn apply_edits(mut expense: Expense, sub: &clap::ArgMatches) -> Result<Expense> {
    if let Some(a) = sub.get_one::<String>("amount") {
        expense.amount = parse_decimal(a)?;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        expense.description = d.to_string();
    }
    if sub.get_one::<String>("category").is_some() {
        expense.category = category_key(sub.get_one::<String>("category"));
    }
    if let Some(d) = sub.get_one::<String>("date") {
        expense.date = parse_date(d)?;
    }
    if let Some(t) = sub.get_one::<String>("type") {
        expense.transaction_type = t.parse::<TransactionType>()?;
    }
    Ok(expense)
}

fn edit(tracker: &mut Tracker, sub: &clap::ArgMatches, gate: &mut dyn Confirm) -> Result<()> {
    let id = required_arg(sub, "id")?;
    let current = tracker
        .expenses()
        .get(id)
        .cloned()
        .ok_or_else(|| crate::errors::Error::NotFound(id.to_string()))?;
    let edited = apply_edits(current, sub)?;
    let fired = tracker.notifications().all().len();
    let e = tracker.update_expense(edited, gate)?;
    println!("Updated {} -> {} {} on {}", e.id, e.transaction_type, fmt_money(&e.amount), e.date);
    print_new_notifications(tracker, fired);
    Ok(())
}

/// Show notifications the monitor stored since the list had `before` items.
pub fn print_new_notifications(tracker: &Tracker, before: usize) {
    let all = tracker.notifications().all();
    let new = all.len().saturating_sub(before);
    for n in all.iter().take(new) {
        println!("[{}] {}: {}", n.severity, n.title, n.message);
    }
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl From<&Expense> for TransactionRow {
    fn from(e: &Expense) -> Self {
        TransactionRow {
            id: e.id.clone(),
            date: e.date.to_string(),
            kind: e.transaction_type.to_string(),
            amount: format!("{:.2}", e.amount),
            category: category_by_id(&e.category).name.to_string(),
            description: e.description.clone(),
        }
    }
}

/// Month's transactions, newest first, filtered by `--search` and cut at `--limit`.
pub fn query_rows(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = month_or(sub, tracker.current_month())?;
    let term = sub.get_one::<String>("search").map(|s| s.as_str()).unwrap_or("");
    let mut items = tracker.expenses().search(month, term);
    items.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        items.truncate(*limit);
    }
    Ok(items.into_iter().map(TransactionRow::from).collect())
}

fn list(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(tracker, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let count = data.len();
        let rows: Vec<Vec<String>> = data
            .into_iter()
            .map(|r| vec![r.date, r.kind, r.amount, r.category, r.description, r.id])
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Amount", "Category", "Description", "ID"],
                rows,
            )
        );
        println!(
            "{} {}",
            count,
            if count == 1 { "transaction" } else { "transactions" }
        );
    }
    Ok(())
}
