// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ties the stores together. Every mutation of the transaction list, and every
//! change of the active month, is followed by a goal/limit check.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::db::KvStore;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseStore;
use crate::models::{
    Expense, ExpenseSummary, NewExpense, Notification, Profile, ProfilePatch, Settings,
    SettingsPatch, TransactionType,
};
use crate::monitor;
use crate::notifications::NotificationStore;
use crate::settings::UserStore;
use crate::utils::month_start;
use crate::validation::validate_expense;

/// Synchronous yes/no gate in front of risky actions.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers every prompt with yes (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Asks on stderr and reads the answer from stdin; anything but y/yes is no.
pub struct StdinPrompt;

impl Confirm for StdinPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

pub struct Tracker<'a> {
    expenses: ExpenseStore<'a>,
    notifications: NotificationStore<'a>,
    user: UserStore<'a>,
    current_month: NaiveDate,
}

impl<'a> Tracker<'a> {
    /// Hydrate every store from `kv`, defaulting whatever is absent or malformed.
    pub fn open(kv: &'a dyn KvStore) -> Self {
        Tracker {
            expenses: ExpenseStore::load(kv),
            notifications: NotificationStore::load(kv),
            user: UserStore::load(kv),
            current_month: month_start(Local::now().date_naive()),
        }
    }

    pub fn expenses(&self) -> &ExpenseStore<'a> {
        &self.expenses
    }

    pub fn notifications(&self) -> &NotificationStore<'a> {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationStore<'a> {
        &mut self.notifications
    }

    pub fn settings(&self) -> &Settings {
        self.user.settings()
    }

    pub fn profile(&self) -> &Profile {
        self.user.profile()
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn require_registered(&self) -> Result<()> {
        if self.user.is_registered() {
            Ok(())
        } else {
            Err(Error::NotRegistered)
        }
    }

    /// Switch the active month; the monitor runs for the new month.
    pub fn set_current_month(&mut self, month: NaiveDate) -> Vec<Notification> {
        self.current_month = month_start(month);
        self.check_goals_and_limits()
    }

    pub fn summary(&self, month: NaiveDate) -> ExpenseSummary {
        self.expenses.summary(month)
    }

    pub fn add_expense(&mut self, mut data: NewExpense, gate: &mut dyn Confirm) -> Result<Expense> {
        validate_expense(&mut data)?;
        self.confirm_limit(&data, gate)?;
        let expense = self.expenses.add(data);
        tracing::info!(id = %expense.id, amount = %expense.amount, "recorded transaction");
        self.check_goals_and_limits();
        Ok(expense)
    }

    pub fn update_expense(&mut self, expense: Expense, gate: &mut dyn Confirm) -> Result<Expense> {
        if self.expenses.get(&expense.id).is_none() {
            return Err(Error::NotFound(expense.id));
        }
        let id = expense.id.clone();
        let mut data = NewExpense {
            amount: expense.amount,
            category: expense.category,
            description: expense.description,
            date: expense.date,
            transaction_type: expense.transaction_type,
        };
        validate_expense(&mut data)?;
        self.confirm_limit(&data, gate)?;
        let updated = data.into_expense(id);
        self.expenses.update(updated.clone());
        self.check_goals_and_limits();
        Ok(updated)
    }

    /// Deleting an unknown id changes nothing but still re-runs the monitor.
    pub fn delete_expense(&mut self, id: &str) {
        self.expenses.delete(id);
        self.check_goals_and_limits();
    }

    /// Evaluate the active month and store one notification per firing rule.
    pub fn check_goals_and_limits(&mut self) -> Vec<Notification> {
        let summary = self.expenses.summary(self.current_month);
        let alerts = monitor::evaluate(self.user.profile(), self.user.settings(), &summary);
        let mut emitted = Vec::with_capacity(alerts.len());
        for alert in alerts {
            let stored = self.notifications.add(alert.to_notification());
            tracing::info!(title = %stored.title, severity = %stored.severity, "monitor fired");
            tracing::info!("[email to {}]: {}", self.user.profile().email, stored.title);
            emitted.push(stored);
        }
        emitted
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> &Settings {
        self.user.update_settings(patch)
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) -> &Profile {
        self.user.update_profile(patch)
    }

    pub fn register_user(&mut self, name: &str, email: &str, phone: &str) -> &Profile {
        self.user.register_user(name, email, phone)
    }

    /// Only the profile is reset; transactions, settings and notifications stay.
    pub fn logout(&mut self, gate: &mut dyn Confirm) -> Result<()> {
        if !gate.confirm("Are you sure you want to log out?") {
            return Err(Error::Cancelled);
        }
        self.user.logout();
        Ok(())
    }

    /// Removes transactions and notifications; settings and profile survive.
    pub fn wipe_data(&mut self, gate: &mut dyn Confirm) -> Result<()> {
        if !gate.confirm(
            "Are you sure you want to delete all your expense data? This action cannot be undone.",
        ) {
            return Err(Error::Cancelled);
        }
        self.expenses.clear();
        self.notifications.wipe();
        tracing::warn!("all transactions and notifications wiped");
        Ok(())
    }

    fn confirm_limit(&self, data: &NewExpense, gate: &mut dyn Confirm) -> Result<()> {
        let limit = self.user.settings().monthly_expense_limit;
        if data.transaction_type == TransactionType::Expense && data.amount > limit {
            let prompt = format!(
                "This expense exceeds your monthly limit of ${}. Do you want to continue?",
                limit
            );
            if !gate.confirm(&prompt) {
                return Err(Error::Cancelled);
            }
        }
        Ok(())
    }
}
