// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::category_by_id;
use crate::summary::{self, Progress};
use crate::tracker::Tracker;
use crate::utils::{fmt_money, fmt_month, maybe_print_json, month_or, pretty_table};
use anyhow::Result;

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => month_summary(tracker, sub)?,
        Some(("trend", sub)) => trend(tracker, sub)?,
        Some(("daily", sub)) => daily(tracker, sub)?,
        Some(("top", sub)) => top(tracker, sub)?,
        _ => {}
    }
    Ok(())
}

fn month_summary(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or(sub, tracker.current_month())?;
    let s = tracker.summary(month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    println!(
        "{} ({} .. {})",
        fmt_month(month),
        s.date_range.start,
        s.date_range.end
    );
    println!(
        "{}",
        pretty_table(
            &["Expenses", "Income", "Net"],
            vec![vec![
                fmt_money(&s.total_amount),
                fmt_money(&s.total_income),
                format!("{:+.2}", s.net_amount),
            ]],
        )
    );
    let rows: Vec<Vec<String>> = s
        .category_totals
        .iter()
        .map(|(k, v)| vec![category_by_id(k).name.to_string(), fmt_money(v)])
        .collect();
    println!("{}", pretty_table(&["Category", "Total"], rows));
    Ok(())
}

fn trend(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or(sub, tracker.current_month())?;
    let months = *sub.get_one::<usize>("months").unwrap_or(&6);
    let data = summary::monthly_trend(tracker.expenses().all(), month, months);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|p| vec![p.label, format!("{:.2}", p.amount)])
            .collect();
        println!("{}", pretty_table(&["Month", "Amount"], rows));
    }
    Ok(())
}

fn daily(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or(sub, tracker.current_month())?;
    let data = summary::daily_totals(tracker.expenses().all(), month);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .filter(|p| !p.amount.is_zero())
            .map(|p| vec![p.label, format!("{:.2}", p.amount)])
            .collect();
        println!("{}", pretty_table(&["Day", "Amount"], rows));
    }
    Ok(())
}

fn top(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or(sub, tracker.current_month())?;
    let count = *sub.get_one::<usize>("count").unwrap_or(&3);
    let s = tracker.summary(month);
    let data = summary::top_categories(&s, count);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|c| {
                let share = summary::category_share(&s, c.amount)
                    .map_or_else(|| "-".to_string(), |p| format!("{:.0}%", p));
                vec![c.category.name.to_string(), fmt_money(&c.amount), share]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    }
    Ok(())
}

/// Dashboard for a month. Selecting the month makes it active, which runs
/// the limit/goal check.
pub fn overview(tracker: &mut Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or(sub, tracker.current_month())?;
    let fired = tracker.set_current_month(month);
    let s = tracker.summary(month);
    let limit = Progress::expense(&s, tracker.settings().monthly_expense_limit);
    let goal = Progress::saving(&s, tracker.settings().monthly_saving_goal);
    let mut recent = tracker.expenses().monthly_expenses(month);
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    let count = recent.len();
    recent.truncate(5);

    if sub.get_flag("json") || sub.get_flag("jsonl") {
        let v = serde_json::json!({
            "month": fmt_month(month),
            "summary": s,
            "limit": limit,
            "goal": goal,
            "transactions": count,
            "recent": recent,
            "notifications": fired,
        });
        maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &v)?;
        return Ok(());
    }

    let first_name = tracker.profile().name.split(' ').next().unwrap_or("").to_string();
    println!("Hi, {} - {}", first_name, fmt_month(month));
    println!(
        "{}",
        pretty_table(
            &["Expenses", "Income", "Net", "Transactions"],
            vec![vec![
                format!("-{}", fmt_money(&s.total_amount)),
                format!("+{}", fmt_money(&s.total_income)),
                format!("{:+.2}", s.net_amount),
                count.to_string(),
            ]],
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Tracking", "Current", "Target", "Progress", "Status"],
            vec![
                vec![
                    "Expense limit".into(),
                    fmt_money(&limit.current),
                    fmt_money(&limit.target),
                    format!("{:.0}%", limit.percentage),
                    format!("{:?}", limit.status),
                ],
                vec![
                    "Saving goal".into(),
                    fmt_money(&goal.current),
                    fmt_money(&goal.target),
                    format!("{:.0}%", goal.percentage),
                    format!("{:?}", goal.status),
                ],
            ],
        )
    );
    let rows = recent
        .iter()
        .map(|e| {
            vec![
                e.date.to_string(),
                e.transaction_type.to_string(),
                format!("{:.2}", e.amount),
                category_by_id(&e.category).name.to_string(),
                e.description.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Amount", "Category", "Description"], rows)
    );
    for n in &fired {
        println!("[{}] {}: {}", n.severity, n.title, n.message);
    }
    Ok(())
}

/// Run the limit/goal check for a month without showing anything else.
pub fn check(tracker: &mut Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or(sub, tracker.current_month())?;
    let fired = tracker.set_current_month(month);
    if fired.is_empty() {
        println!("{}: within limit, saving goal not reached", fmt_month(month));
    }
    for n in &fired {
        println!("[{}] {}: {}", n.severity, n.title, n.message);
    }
    Ok(())
}
