// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::{EXPENSES_KEY, KvStore, load_document, remove_document, save_document};
use crate::models::{Expense, ExpenseSummary, NewExpense};
use crate::summary;

/// In-memory mirror of the persisted transaction list. Every mutation writes
/// the whole list back before returning.
pub struct ExpenseStore<'a> {
    kv: &'a dyn KvStore,
    expenses: Vec<Expense>,
}

impl<'a> ExpenseStore<'a> {
    pub fn load(kv: &'a dyn KvStore) -> Self {
        let expenses: Vec<Expense> = load_document(kv, EXPENSES_KEY);
        tracing::debug!(count = expenses.len(), "loaded transactions");
        ExpenseStore { kv, expenses }
    }

    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn add(&mut self, data: NewExpense) -> Expense {
        let expense = data.into_expense(Uuid::new_v4().to_string());
        self.expenses.push(expense.clone());
        self.save();
        expense
    }

    /// Absent ids are ignored.
    pub fn delete(&mut self, id: &str) {
        self.expenses.retain(|e| e.id != id);
        self.save();
    }

    /// Replaces the record with the same id in place. Returns false (and still
    /// persists) when no record matches.
    pub fn update(&mut self, expense: Expense) -> bool {
        let mut found = false;
        for slot in self.expenses.iter_mut().filter(|e| e.id == expense.id) {
            *slot = expense.clone();
            found = true;
        }
        self.save();
        found
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
        remove_document(self.kv, EXPENSES_KEY);
    }

    pub fn monthly_expenses(&self, month: NaiveDate) -> Vec<&Expense> {
        summary::monthly_expenses(&self.expenses, month)
    }

    pub fn summary(&self, month: NaiveDate) -> ExpenseSummary {
        summary::summarize(&self.expenses, month)
    }

    /// Case-insensitive match on the description, or a substring of the
    /// amount's decimal text.
    pub fn search(&self, month: NaiveDate, term: &str) -> Vec<&Expense> {
        let monthly = self.monthly_expenses(month);
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return monthly;
        }
        monthly
            .into_iter()
            .filter(|e| {
                e.description.to_lowercase().contains(&needle)
                    || e.amount.normalize().to_string().contains(&needle)
            })
            .collect()
    }

    fn save(&self) {
        save_document(self.kv, EXPENSES_KEY, &self.expenses);
    }
}
