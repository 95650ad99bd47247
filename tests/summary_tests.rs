// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use tallybook::categories::category_by_id;
use tallybook::models::{Expense, TransactionType};
use tallybook::summary::{self, Progress, ProgressStatus};
use tallybook::utils::{add_months, in_month, month_end};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(id: &str, amount: Decimal, category: &str, date: NaiveDate, kind: TransactionType) -> Expense {
    Expense {
        id: id.into(),
        amount,
        category: category.into(),
        description: format!("item {}", id),
        date,
        transaction_type: kind,
    }
}

#[test]
fn single_expense_month_summary() {
    let list = vec![tx("1", dec!(50), "food", day(2024, 3, 15), TransactionType::Expense)];
    let s = summary::summarize(&list, day(2024, 3, 1));
    assert_eq!(s.total_amount, dec!(50));
    assert_eq!(s.total_income, dec!(0));
    assert_eq!(s.net_amount, dec!(-50));
    assert_eq!(s.category_totals, BTreeMap::from([("food".to_string(), dec!(50))]));
    assert_eq!(s.date_range.start, day(2024, 3, 1));
    assert_eq!(s.date_range.end, day(2024, 3, 31));
}

#[test]
fn empty_month_nets_to_zero() {
    let list = vec![tx("1", dec!(10), "food", day(2024, 4, 1), TransactionType::Expense)];
    let s = summary::summarize(&list, day(2024, 3, 20));
    assert_eq!(s.total_amount, Decimal::ZERO);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.net_amount, Decimal::ZERO);
    assert!(s.category_totals.is_empty());
}

#[test]
fn month_bounds_are_inclusive_and_calendar_aware() {
    let list = vec![
        tx("jan", dec!(1), "food", day(2024, 1, 31), TransactionType::Expense),
        tx("first", dec!(2), "food", day(2024, 2, 1), TransactionType::Expense),
        tx("leap", dec!(4), "food", day(2024, 2, 29), TransactionType::Expense),
        tx("mar", dec!(8), "food", day(2024, 3, 1), TransactionType::Expense),
    ];
    let s = summary::summarize(&list, day(2024, 2, 14));
    assert_eq!(s.total_amount, dec!(6));
    assert_eq!(s.date_range.end, day(2024, 2, 29));

    assert_eq!(month_end(day(2023, 2, 3)), day(2023, 2, 28));
    assert!(in_month(day(2024, 12, 31), day(2024, 12, 1)));
    assert!(!in_month(day(2025, 1, 1), day(2024, 12, 1)));
    assert_eq!(add_months(day(2024, 1, 31), 1), day(2024, 2, 29));
    assert_eq!(add_months(day(2024, 3, 31), -1), day(2024, 2, 29));
    assert_eq!(add_months(day(2024, 1, 15), -1), day(2023, 12, 15));
}

#[test]
fn net_is_income_minus_expenses_and_categories_mix_types() {
    let list = vec![
        tx("1", dec!(1000), "other", day(2024, 3, 1), TransactionType::Income),
        tx("2", dec!(200.25), "food", day(2024, 3, 2), TransactionType::Expense),
        tx("3", dec!(50), "food", day(2024, 3, 3), TransactionType::Income),
        tx("4", dec!(99.75), "housing", day(2024, 3, 31), TransactionType::Expense),
    ];
    let s = summary::summarize(&list, day(2024, 3, 1));
    assert_eq!(s.total_amount, dec!(300));
    assert_eq!(s.total_income, dec!(1050));
    assert_eq!(s.net_amount, s.total_income - s.total_amount);
    assert_eq!(s.net_amount, dec!(750));
    // income and expense land in the same bucket, unsigned
    assert_eq!(s.category_totals["food"], dec!(250.25));
    assert_eq!(s.category_totals["other"], dec!(1000));
    assert!(s.total_amount >= Decimal::ZERO);
}

#[test]
fn unknown_category_resolves_to_other() {
    assert_eq!(category_by_id("crypto").name, "Other");
    assert_eq!(category_by_id("").id, "other");
    assert_eq!(category_by_id("food").name, "Food");
    assert_eq!(category_by_id("healthcare").color, "#FF595E");
}

#[test]
fn trend_covers_trailing_months_oldest_first() {
    let list = vec![
        tx("1", dec!(10), "food", day(2023, 12, 5), TransactionType::Expense),
        tx("2", dec!(20), "food", day(2024, 2, 5), TransactionType::Income),
        tx("3", dec!(5), "food", day(2024, 2, 6), TransactionType::Expense),
        tx("4", dec!(7), "food", day(2024, 3, 9), TransactionType::Expense),
    ];
    let t = summary::monthly_trend(&list, day(2024, 3, 18), 4);
    assert_eq!(t.len(), 4);
    assert_eq!(t[0].start, day(2023, 12, 1));
    assert_eq!(t[0].amount, dec!(10));
    assert_eq!(t[1].amount, dec!(0));
    assert_eq!(t[2].amount, dec!(25));
    assert_eq!(t[3].start, day(2024, 3, 1));
    assert_eq!(t[3].label, "Mar 2024");
}

#[test]
fn daily_totals_cover_every_day() {
    let list = vec![
        tx("1", dec!(3), "food", day(2024, 2, 10), TransactionType::Expense),
        tx("2", dec!(4), "food", day(2024, 2, 10), TransactionType::Expense),
        tx("3", dec!(9), "food", day(2024, 3, 10), TransactionType::Expense),
    ];
    let d = summary::daily_totals(&list, day(2024, 2, 1));
    assert_eq!(d.len(), 29);
    assert_eq!(d[9].start, day(2024, 2, 10));
    assert_eq!(d[9].amount, dec!(7));
    assert_eq!(d.iter().map(|p| p.amount).sum::<Decimal>(), dec!(7));
}

#[test]
fn top_categories_sorted_and_truncated() {
    let list = vec![
        tx("1", dec!(30), "food", day(2024, 3, 1), TransactionType::Expense),
        tx("2", dec!(80), "housing", day(2024, 3, 1), TransactionType::Expense),
        tx("3", dec!(5), "mystery", day(2024, 3, 1), TransactionType::Expense),
        tx("4", dec!(50), "transport", day(2024, 3, 1), TransactionType::Expense),
    ];
    let s = summary::summarize(&list, day(2024, 3, 1));
    let top = summary::top_categories(&s, 3);
    let keys: Vec<&str> = top.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["housing", "transport", "food"]);

    let all = summary::top_categories(&s, 10);
    assert_eq!(all.last().unwrap().category.name, "Other");
}

#[test]
fn progress_against_limit_and_goal() {
    let list = vec![
        tx("1", dec!(1000), "other", day(2024, 3, 1), TransactionType::Income),
        tx("2", dec!(850), "housing", day(2024, 3, 2), TransactionType::Expense),
    ];
    let s = summary::summarize(&list, day(2024, 3, 1));

    let limit = Progress::expense(&s, dec!(1000));
    assert_eq!(limit.percentage, dec!(85));
    assert_eq!(limit.status, ProgressStatus::NearLimit);
    assert_eq!(Progress::expense(&s, dec!(850)).status, ProgressStatus::OverLimit);
    assert_eq!(Progress::expense(&s, dec!(2000)).status, ProgressStatus::Ok);
    assert_eq!(Progress::expense(&s, dec!(100)).percentage, dec!(100));

    let goal = Progress::saving(&s, dec!(300));
    assert_eq!(goal.current, dec!(150));
    assert_eq!(goal.percentage, dec!(50));
    assert_eq!(goal.status, ProgressStatus::InProgress);
    assert_eq!(Progress::saving(&s, dec!(150)).status, ProgressStatus::Reached);

    // a zero target is fully used as soon as anything is spent or saved
    let zero = Progress::expense(&s, Decimal::ZERO);
    assert_eq!(zero.percentage, dec!(100));
    assert_eq!(zero.status, ProgressStatus::OverLimit);
    let empty = summary::summarize(&[], day(2024, 3, 1));
    assert_eq!(Progress::expense(&empty, Decimal::ZERO).percentage, Decimal::ZERO);
    assert_eq!(Progress::expense(&empty, Decimal::ZERO).status, ProgressStatus::Ok);
}

#[test]
fn huge_amounts_saturate_instead_of_overflowing() {
    let big = dec!(50000000000000000000000000000);
    let list = vec![
        tx("1", big, "food", day(2024, 3, 1), TransactionType::Expense),
        tx("2", big, "food", day(2024, 3, 2), TransactionType::Expense),
        tx("3", big, "other", day(2024, 3, 3), TransactionType::Income),
        tx("4", big, "other", day(2024, 3, 3), TransactionType::Income),
    ];
    let s = summary::summarize(&list, day(2024, 3, 1));
    assert_eq!(s.total_amount, Decimal::MAX);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.category_totals["food"], Decimal::MAX);
    assert_eq!(s.net_amount, Decimal::ZERO);

    let trend = summary::monthly_trend(&list, day(2024, 3, 1), 1);
    assert_eq!(trend[0].amount, Decimal::MAX);
    let daily = summary::daily_totals(&list, day(2024, 3, 1));
    assert_eq!(daily[2].amount, Decimal::MAX);

    assert_eq!(Progress::expense(&s, dec!(2000)).percentage, dec!(100));
    assert_eq!(summary::category_share(&s, s.category_totals["food"]), Some(dec!(100)));
}

#[test]
fn tiny_limit_caps_progress() {
    let spent = dec!(100000000000000000000);
    let list = vec![tx("1", spent, "food", day(2024, 3, 1), TransactionType::Expense)];
    let s = summary::summarize(&list, day(2024, 3, 1));
    let p = Progress::expense(&s, dec!(0.0000000001));
    assert_eq!(p.percentage, dec!(100));
    assert_eq!(p.status, ProgressStatus::OverLimit);
}

#[test]
fn category_share_counts_income_buckets_too() {
    let list = vec![
        tx("1", dec!(900), "other", day(2024, 3, 1), TransactionType::Income),
        tx("2", dec!(100), "food", day(2024, 3, 2), TransactionType::Expense),
    ];
    let s = summary::summarize(&list, day(2024, 3, 1));
    assert_eq!(summary::category_share(&s, s.category_totals["other"]), Some(dec!(90)));
    assert_eq!(summary::category_share(&s, s.category_totals["food"]), Some(dec!(10)));

    let empty = summary::summarize(&[], day(2024, 3, 1));
    assert_eq!(summary::category_share(&empty, Decimal::ZERO), None);
}

#[test]
fn negative_net_counts_as_no_savings() {
    let list = vec![tx("1", dec!(40), "food", day(2024, 3, 1), TransactionType::Expense)];
    let s = summary::summarize(&list, day(2024, 3, 1));
    let goal = Progress::saving(&s, dec!(500));
    assert_eq!(goal.current, Decimal::ZERO);
    assert_eq!(goal.percentage, Decimal::ZERO);
}
