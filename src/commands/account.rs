// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::tracker::{Confirm, Tracker};
use crate::utils::required_arg;
use crate::validation::validate_registration;
use anyhow::Result;

pub fn register(tracker: &mut Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let name = required_arg(sub, "name")?;
    let email = required_arg(sub, "email")?;
    let phone = required_arg(sub, "phone")?;
    validate_registration(name, email, phone)?;
    let p = tracker.register_user(name, email, phone);
    println!("Welcome, {}! Profile registered for {}", p.name, p.email);
    Ok(())
}

pub fn logout(tracker: &mut Tracker, gate: &mut dyn Confirm) -> Result<()> {
    tracker.logout(gate)?;
    println!("Logged out. Transactions, settings and notifications were kept.");
    Ok(())
}

pub fn handle_data(tracker: &mut Tracker, m: &clap::ArgMatches, gate: &mut dyn Confirm) -> Result<()> {
    if let Some(("wipe", _)) = m.subcommand() {
        tracker.wipe_data(gate)?;
        println!("All transactions and notifications deleted");
    }
    Ok(())
}
