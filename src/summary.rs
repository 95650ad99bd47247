// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure month-level aggregation over the full transaction list.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::categories::{Category, category_by_id};
use crate::models::{DateRange, Expense, ExpenseSummary, TransactionType};
use crate::utils::{add_months, in_month, month_end, month_start};

/// Expense progress turns to `NearLimit` at this fraction of the limit.
pub const WARNING_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Totals clamp at `Decimal::MAX` instead of overflowing.
fn saturating_sum<'e>(amounts: impl Iterator<Item = &'e Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, a| acc.saturating_add(*a))
}

pub fn monthly_expenses(expenses: &[Expense], month: NaiveDate) -> Vec<&Expense> {
    expenses.iter().filter(|e| in_month(e.date, month)).collect()
}

pub fn summarize(expenses: &[Expense], month: NaiveDate) -> ExpenseSummary {
    let monthly = monthly_expenses(expenses, month);

    let mut total_expenses = Decimal::ZERO;
    let mut total_income = Decimal::ZERO;
    // Buckets add income and expense magnitudes alike.
    let mut category_totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in &monthly {
        match e.transaction_type {
            TransactionType::Expense => total_expenses = total_expenses.saturating_add(e.amount),
            TransactionType::Income => total_income = total_income.saturating_add(e.amount),
        }
        let bucket = category_totals
            .entry(e.category.clone())
            .or_insert(Decimal::ZERO);
        *bucket = bucket.saturating_add(e.amount);
    }

    ExpenseSummary {
        total_amount: total_expenses.abs(),
        total_income,
        net_amount: total_income.saturating_sub(total_expenses),
        category_totals,
        date_range: DateRange {
            start: month_start(month),
            end: month_end(month),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub label: String,
    pub start: NaiveDate,
    pub amount: Decimal,
}

/// Unsigned totals for the `n` months ending at `month`, oldest first.
pub fn monthly_trend(expenses: &[Expense], month: NaiveDate, n: usize) -> Vec<PeriodTotal> {
    (0..n)
        .map(|i| {
            let m = month_start(add_months(month, i as i32 - (n as i32 - 1)));
            let amount = saturating_sum(monthly_expenses(expenses, m).iter().map(|e| &e.amount));
            PeriodTotal {
                label: m.format("%b %Y").to_string(),
                start: m,
                amount,
            }
        })
        .collect()
}

/// One entry per calendar day of the month.
pub fn daily_totals(expenses: &[Expense], month: NaiveDate) -> Vec<PeriodTotal> {
    let start = month_start(month);
    let end = month_end(month);
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|day| {
            let amount = saturating_sum(
                expenses
                    .iter()
                    .filter(|e| e.date == day)
                    .map(|e| &e.amount),
            );
            PeriodTotal {
                label: day.format("%b %-d").to_string(),
                start: day,
                amount,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub key: String,
    pub category: &'static Category,
    pub amount: Decimal,
}

/// Largest buckets first; ties keep key order.
pub fn top_categories(summary: &ExpenseSummary, n: usize) -> Vec<CategoryTotal> {
    let mut items: Vec<CategoryTotal> = summary
        .category_totals
        .iter()
        .map(|(k, v)| CategoryTotal {
            key: k.clone(),
            category: category_by_id(k),
            amount: *v,
        })
        .collect();
    items.sort_by(|a, b| b.amount.cmp(&a.amount));
    items.truncate(n);
    items
}

/// Percentage of all category buckets held by `amount`. Buckets mix income
/// and expense, so the base is both totals together. `None` for an empty month.
pub fn category_share(summary: &ExpenseSummary, amount: Decimal) -> Option<Decimal> {
    let base = summary.total_amount.saturating_add(summary.total_income);
    if base.is_zero() {
        return None;
    }
    let pct = amount
        .checked_div(base)
        .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ONE_HUNDRED);
    Some(pct.min(Decimal::ONE_HUNDRED))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Ok,
    NearLimit,
    OverLimit,
    InProgress,
    Reached,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub current: Decimal,
    pub target: Decimal,
    pub percentage: Decimal,
    pub status: ProgressStatus,
}

fn percentage(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }
    let hundred = Decimal::ONE_HUNDRED;
    // A quotient too large to represent is far past the cap anyway.
    current
        .checked_div(target)
        .and_then(|q| q.checked_mul(hundred))
        .map_or(hundred, |p| p.min(hundred))
}

impl Progress {
    pub fn expense(summary: &ExpenseSummary, limit: Decimal) -> Progress {
        let pct = percentage(summary.total_amount, limit);
        let status = if pct >= Decimal::ONE_HUNDRED {
            ProgressStatus::OverLimit
        } else if pct >= WARNING_THRESHOLD * Decimal::ONE_HUNDRED {
            ProgressStatus::NearLimit
        } else {
            ProgressStatus::Ok
        };
        Progress {
            current: summary.total_amount,
            target: limit,
            percentage: pct,
            status,
        }
    }

    pub fn saving(summary: &ExpenseSummary, goal: Decimal) -> Progress {
        let current = summary.net_amount.max(Decimal::ZERO);
        let pct = percentage(current, goal);
        let status = if pct >= Decimal::ONE_HUNDRED {
            ProgressStatus::Reached
        } else {
            ProgressStatus::InProgress
        };
        Progress {
            current,
            target: goal,
            percentage: pct,
            status,
        }
    }
}
