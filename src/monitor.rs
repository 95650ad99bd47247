// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Limit and saving-goal rules evaluated against a month summary.
//!
//! Evaluation is level-triggered: every pass whose condition holds yields an
//! alert, with no memory of earlier passes.

use rust_decimal::Decimal;

use crate::models::{ExpenseSummary, NewNotification, Profile, Settings, Severity};

#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    LimitExceeded { limit: Decimal, spent: Decimal },
    SavingGoalReached { goal: Decimal },
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::LimitExceeded { .. } => "Expense Limit Exceeded",
            Alert::SavingGoalReached { .. } => "Saving Goal Reached!",
        }
    }

    pub fn to_notification(&self) -> NewNotification {
        match self {
            Alert::LimitExceeded { limit, spent } => NewNotification {
                title: self.title().to_string(),
                message: format!(
                    "You've exceeded your monthly expense limit of ${}. Current spending: ${:.2}.",
                    limit, spent
                ),
                severity: Severity::Warning,
            },
            Alert::SavingGoalReached { goal } => NewNotification {
                title: self.title().to_string(),
                message: format!(
                    "Congratulations! You've reached your monthly saving goal of ${}.",
                    goal
                ),
                severity: Severity::Success,
            },
        }
    }
}

/// Nothing fires for an unregistered profile.
pub fn evaluate(profile: &Profile, settings: &Settings, summary: &ExpenseSummary) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if !profile.is_registered {
        return alerts;
    }
    if summary.total_amount > settings.monthly_expense_limit {
        alerts.push(Alert::LimitExceeded {
            limit: settings.monthly_expense_limit,
            spent: summary.total_amount,
        });
    }
    let goal = settings.monthly_saving_goal;
    if goal > Decimal::ZERO && summary.net_amount >= goal {
        alerts.push(Alert::SavingGoalReached { goal });
    }
    alerts
}
