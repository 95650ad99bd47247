// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ProfilePatch, SettingsPatch};
use crate::tracker::Tracker;
use crate::utils::{fmt_money, maybe_print_json, parse_bool, parse_decimal, pretty_table};
use crate::validation::{validate_email, validate_phone};
use anyhow::{Result, bail};
use rust_decimal::Decimal;

pub fn handle(tracker: &mut Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(tracker, sub)?,
        Some(("set", sub)) => {
            let patch = settings_patch_from(sub)?;
            if patch.is_empty() {
                bail!("Nothing to update; pass --limit, --goal, --dark-mode or --notifications");
            }
            tracker.update_settings(patch);
            println!("Settings updated");
            show_table(tracker);
        }
        _ => {}
    }
    Ok(())
}

fn non_negative(raw: &str, what: &str) -> Result<Decimal> {
    let v = parse_decimal(raw)?;
    if v < Decimal::ZERO {
        bail!("{} must not be negative", what);
    }
    Ok(v)
}

pub fn settings_patch_from(sub: &clap::ArgMatches) -> Result<SettingsPatch> {
    Ok(SettingsPatch {
        monthly_expense_limit: sub
            .get_one::<String>("limit")
            .map(|s| non_negative(s, "Monthly expense limit"))
            .transpose()?,
        monthly_saving_goal: sub
            .get_one::<String>("goal")
            .map(|s| non_negative(s, "Monthly saving goal"))
            .transpose()?,
        dark_mode: sub
            .get_one::<String>("dark_mode")
            .map(|s| parse_bool(s))
            .transpose()?,
        notifications_enabled: sub
            .get_one::<String>("notifications")
            .map(|s| parse_bool(s))
            .transpose()?,
    })
}

fn on_off(b: bool) -> String {
    if b { "on".into() } else { "off".into() }
}

fn show(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), tracker.settings())? {
        show_table(tracker);
    }
    Ok(())
}

fn show_table(tracker: &Tracker) {
    let s = tracker.settings();
    println!(
        "{}",
        pretty_table(
            &["Setting", "Value"],
            vec![
                vec!["Monthly expense limit".into(), fmt_money(&s.monthly_expense_limit)],
                vec!["Monthly saving goal".into(), fmt_money(&s.monthly_saving_goal)],
                vec!["Dark mode".into(), on_off(s.dark_mode)],
                vec!["Notifications".into(), on_off(s.notifications_enabled)],
            ],
        )
    );
}

pub fn handle_profile(tracker: &mut Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let p = tracker.profile();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), p)? {
                println!(
                    "{}",
                    pretty_table(
                        &["Name", "Email", "Phone", "Registered"],
                        vec![vec![
                            p.name.clone(),
                            p.email.clone(),
                            p.phone.clone(),
                            p.is_registered.to_string(),
                        ]],
                    )
                );
            }
        }
        Some(("set", sub)) => {
            let patch = ProfilePatch {
                name: sub.get_one::<String>("name").map(|s| s.trim().to_string()),
                email: sub.get_one::<String>("email").map(|s| s.trim().to_string()),
                phone: sub.get_one::<String>("phone").map(|s| s.trim().to_string()),
            };
            if patch.is_empty() {
                bail!("Nothing to update; pass --name, --email or --phone");
            }
            if let Some(ref e) = patch.email {
                validate_email(e)?;
            }
            if let Some(ref p) = patch.phone {
                validate_phone(p)?;
            }
            if patch.name.as_deref() == Some("") {
                bail!("Name is required");
            }
            let p = tracker.update_profile(patch);
            println!("Profile updated for {}", p.name);
        }
        _ => {}
    }
    Ok(())
}
