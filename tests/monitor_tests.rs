// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use tallybook::db;
use tallybook::errors::{Error, ValidationError};
use tallybook::models::{
    DateRange, ExpenseSummary, NewExpense, Profile, Settings, SettingsPatch, Severity,
    TransactionType,
};
use tallybook::monitor::{self, Alert};
use tallybook::tracker::{AssumeYes, Tracker};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn entry(amount: Decimal, date: &str, kind: TransactionType) -> NewExpense {
    NewExpense {
        amount,
        category: "other".into(),
        description: "entry".into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        transaction_type: kind,
    }
}

fn registered(tracker: &mut Tracker) {
    tracker.register_user("Ada Lovelace", "ada@example.com", "+44 20 7946 0000");
}

fn summary_with(total: Decimal, income: Decimal) -> ExpenseSummary {
    ExpenseSummary {
        total_amount: total,
        total_income: income,
        net_amount: income - total,
        category_totals: BTreeMap::new(),
        date_range: DateRange {
            start: march(),
            end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        },
    }
}

fn registered_profile() -> Profile {
    Profile {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        phone: "+44 20 7946 0000".into(),
        is_registered: true,
    }
}

#[test]
fn limit_overrun_emits_one_warning() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);
    tracker.update_settings(SettingsPatch {
        monthly_expense_limit: Some(dec!(1000)),
        ..Default::default()
    });
    tracker.set_current_month(march());

    tracker
        .add_expense(entry(dec!(1000), "2024-03-01", TransactionType::Income), &mut AssumeYes)
        .unwrap();
    tracker
        .add_expense(entry(dec!(1200), "2024-03-02", TransactionType::Expense), &mut AssumeYes)
        .unwrap();

    let warnings: Vec<_> = tracker
        .notifications()
        .all()
        .iter()
        .filter(|n| n.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].title, "Expense Limit Exceeded");
    assert!(warnings[0].message.contains("$1000"));
    assert!(warnings[0].message.contains("$1200.00"));
    assert!(!warnings[0].read);
}

#[test]
fn saving_goal_fires_only_when_reached() {
    let settings = Settings {
        monthly_expense_limit: dec!(5000),
        monthly_saving_goal: dec!(500),
        ..Settings::default()
    };
    let profile = registered_profile();

    let reached = monitor::evaluate(&profile, &settings, &summary_with(dec!(400), dec!(1000)));
    assert_eq!(reached, vec![Alert::SavingGoalReached { goal: dec!(500) }]);
    let n = reached[0].to_notification();
    assert_eq!(n.severity, Severity::Success);
    assert!(n.message.contains("$500"));

    let short = monitor::evaluate(&profile, &settings, &summary_with(dec!(600), dec!(1000)));
    assert!(short.is_empty());
}

#[test]
fn zero_goal_never_fires() {
    let settings = Settings {
        monthly_saving_goal: Decimal::ZERO,
        ..Settings::default()
    };
    let alerts = monitor::evaluate(&registered_profile(), &settings, &summary_with(dec!(0), dec!(0)));
    assert!(alerts.is_empty());
}

#[test]
fn goal_through_tracker() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);
    tracker.set_current_month(march());

    let fired = tracker.check_goals_and_limits();
    assert!(fired.is_empty());

    tracker
        .add_expense(entry(dec!(400), "2024-03-05", TransactionType::Income), &mut AssumeYes)
        .unwrap();
    assert!(tracker.notifications().all().is_empty());

    tracker
        .add_expense(entry(dec!(200), "2024-03-06", TransactionType::Income), &mut AssumeYes)
        .unwrap();
    let all = tracker.notifications().all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].severity, Severity::Success);
}

#[test]
fn unregistered_profile_gets_no_alerts() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    tracker.set_current_month(march());
    tracker
        .add_expense(entry(dec!(5000), "2024-03-02", TransactionType::Expense), &mut AssumeYes)
        .unwrap();
    assert!(tracker.notifications().all().is_empty());
    assert!(matches!(tracker.require_registered(), Err(Error::NotRegistered)));
}

#[test]
fn checks_are_level_triggered() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);
    tracker.set_current_month(march());
    tracker
        .add_expense(entry(dec!(2500), "2024-03-02", TransactionType::Expense), &mut AssumeYes)
        .unwrap();
    assert_eq!(tracker.notifications().all().len(), 1);

    let again = tracker.check_goals_and_limits();
    assert_eq!(again.len(), 1);
    assert_eq!(tracker.notifications().all().len(), 2);

    // deleting an unknown id still counts as a list change
    tracker.delete_expense("nope");
    assert_eq!(tracker.notifications().all().len(), 3);
}

#[test]
fn other_month_does_not_count() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);
    tracker.set_current_month(march());
    tracker
        .add_expense(entry(dec!(2500), "2024-04-02", TransactionType::Expense), &mut AssumeYes)
        .unwrap();
    assert!(tracker.notifications().all().is_empty());

    let fired = tracker.set_current_month(NaiveDate::from_ymd_opt(2024, 4, 17).unwrap());
    assert_eq!(fired.len(), 1);
    assert_eq!(tracker.current_month(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
}

#[test]
fn declined_limit_gate_stores_nothing() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);
    tracker.update_settings(SettingsPatch {
        monthly_expense_limit: Some(dec!(100)),
        ..Default::default()
    });
    let mut prompts = Vec::new();
    let mut decline = |p: &str| {
        prompts.push(p.to_string());
        false
    };
    let err = tracker
        .add_expense(entry(dec!(150), "2024-03-02", TransactionType::Expense), &mut decline)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert!(tracker.expenses().all().is_empty());
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("$100"));

    // income above the limit is not gated
    let mut never = |_: &str| -> bool { panic!("income must not be gated") };
    tracker
        .add_expense(entry(dec!(150), "2024-03-02", TransactionType::Income), &mut never)
        .unwrap();
}

#[test]
fn entry_validation_blocks_mutation() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);

    let err = tracker
        .add_expense(entry(dec!(0), "2024-03-02", TransactionType::Expense), &mut AssumeYes)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::NonPositiveAmount)));

    let mut blank = entry(dec!(5), "2024-03-02", TransactionType::Expense);
    blank.description = "   ".into();
    let err = tracker.add_expense(blank, &mut AssumeYes).unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::EmptyDescription)));
    assert!(tracker.expenses().all().is_empty());

    let mut padded = entry(dec!(5), "2024-03-02", TransactionType::Expense);
    padded.description = "  Bus ticket ".into();
    let e = tracker.add_expense(padded, &mut AssumeYes).unwrap();
    assert_eq!(e.description, "Bus ticket");
}

#[test]
fn update_runs_gate_and_reports_missing() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);
    tracker.set_current_month(march());
    let e = tracker
        .add_expense(entry(dec!(20), "2024-03-02", TransactionType::Expense), &mut AssumeYes)
        .unwrap();

    let mut bigger = e.clone();
    bigger.amount = dec!(2500);
    let err = tracker
        .update_expense(bigger.clone(), &mut |_: &str| false)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert_eq!(tracker.expenses().get(&e.id).unwrap().amount, dec!(20));

    let updated = tracker.update_expense(bigger, &mut AssumeYes).unwrap();
    assert_eq!(updated.amount, dec!(2500));
    assert_eq!(tracker.notifications().all()[0].severity, Severity::Warning);

    let mut ghost = e;
    ghost.id = "ghost".into();
    assert!(matches!(
        tracker.update_expense(ghost, &mut AssumeYes),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn oversized_entries_keep_the_store_usable() {
    let conn = setup();
    let mut tracker = Tracker::open(&conn);
    registered(&mut tracker);
    tracker.set_current_month(march());
    let big = dec!(50000000000000000000000000000);
    for _ in 0..2 {
        tracker
            .add_expense(entry(big, "2024-03-05", TransactionType::Expense), &mut AssumeYes)
            .unwrap();
    }
    assert_eq!(tracker.summary(march()).total_amount, Decimal::MAX);
    assert_eq!(tracker.notifications().all()[0].severity, Severity::Warning);

    // a fresh session over the same data still summarises
    let mut reopened = Tracker::open(&conn);
    let fired = reopened.set_current_month(march());
    assert_eq!(fired.len(), 1);
    assert_eq!(reopened.expenses().all().len(), 2);
}
