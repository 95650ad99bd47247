// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod account;
pub mod categories;
pub mod exporter;
pub mod notifications;
pub mod reports;
pub mod settings;
pub mod transactions;
