// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use tallybook::tracker::{AssumeYes, Confirm, StdinPrompt, Tracker};
use tallybook::{cli, commands, db, logging};

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = db::db_path(matches.get_one::<PathBuf>("db").map(|p| p.as_path()))?;
    let conn = db::open_or_init(&path)?;
    let mut tracker = Tracker::open(&conn);

    let mut yes = AssumeYes;
    let mut prompt = StdinPrompt;
    let gate: &mut dyn Confirm = if matches.get_flag("yes") {
        &mut yes
    } else {
        &mut prompt
    };

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("register", sub)) => commands::account::register(&mut tracker, sub)?,
        Some(("categories", _)) => commands::categories::handle()?,
        Some(("profile", sub)) if matches!(sub.subcommand_name(), Some("show")) => {
            commands::settings::handle_profile(&mut tracker, sub)?
        }
        Some((name, sub)) => {
            tracker.require_registered()?;
            match name {
                "tx" => commands::transactions::handle(&mut tracker, sub, gate)?,
                "overview" => commands::reports::overview(&mut tracker, sub)?,
                "report" => commands::reports::handle(&tracker, sub)?,
                "check" => commands::reports::check(&mut tracker, sub)?,
                "notify" => commands::notifications::handle(&mut tracker, sub)?,
                "settings" => commands::settings::handle(&mut tracker, sub)?,
                "profile" => commands::settings::handle_profile(&mut tracker, sub)?,
                "logout" => commands::account::logout(&mut tracker, gate)?,
                "data" => commands::account::handle_data(&mut tracker, sub, gate)?,
                "export" => commands::exporter::handle(&tracker, sub)?,
                _ => {
                    cli::build_cli().print_help()?;
                    println!();
                }
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
