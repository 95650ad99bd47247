// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::tracker::Tracker;
use crate::utils::{maybe_print_json, pretty_table, required_arg};
use anyhow::Result;
use chrono::Utc;

pub fn handle(tracker: &mut Tracker, m: &clap::ArgMatches) -> Result<()> {
    let store = tracker.notifications_mut();
    match m.subcommand() {
        Some(("list", sub)) => {
            let items = store.all().to_vec();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
                let unread = store.unread_count();
                let rows = items
                    .into_iter()
                    .map(|n| {
                        vec![
                            if n.read { " ".into() } else { "*".into() },
                            n.created_at.format("%Y-%m-%d %H:%M").to_string(),
                            n.severity.to_string(),
                            n.title,
                            n.message,
                            n.id,
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["", "Date", "Type", "Title", "Message", "ID"], rows)
                );
                println!("{} unread", unread);
            }
            // Shown once; anything past its presentation delay counts as read.
            store.settle(Utc::now());
        }
        Some(("read", sub)) => {
            let id = required_arg(sub, "id")?;
            store.mark_read(id);
            println!("Marked {} as read", id);
        }
        Some(("rm", sub)) => {
            let id = required_arg(sub, "id")?;
            store.remove(id);
            println!("Removed notification {}", id);
        }
        Some(("clear", _)) => {
            store.clear_all();
            println!("Cleared all notifications");
        }
        _ => {}
    }
    Ok(())
}
