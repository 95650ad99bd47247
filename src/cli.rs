// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};
use std::path::PathBuf;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Pretty JSON output"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("One JSON document per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to show (defaults to the current month)")
}

fn record_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .required(required)
            .help("Positive amount"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .short('d')
            .required(required),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .short('c')
            .help("Category key (food, transport, ...); unknown keys show as Other"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .help("Defaults to today"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .short('t')
            .value_parser(["expense", "income"])
            .help("Transaction type (default: expense)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(crate_version!())
        .about("Track expenses and income against monthly limits and saving goals")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Database file (overrides TALLYBOOK_DB and the platform data dir)"),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Answer yes to every confirmation"),
        )
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("register")
                .about("Register the local profile")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("phone").long("phone").required(true)),
        )
        .subcommand(
            Command::new("tx")
                .about("Record, edit and browse transactions")
                .subcommand(record_args(Command::new("add"), true))
                .subcommand(json_args(
                    Command::new("list")
                        .arg(month_arg())
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .short('s')
                                .help("Match description or amount"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(record_args(
                    Command::new("edit").arg(Arg::new("id").required(true)),
                    false,
                ))
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(json_args(
            Command::new("overview")
                .about("Monthly totals, limit and goal progress, recent transactions")
                .arg(month_arg()),
        ))
        .subcommand(
            Command::new("report")
                .about("Aggregated views")
                .subcommand(json_args(Command::new("summary").arg(month_arg())))
                .subcommand(json_args(
                    Command::new("trend").arg(month_arg()).arg(
                        Arg::new("months")
                            .long("months")
                            .value_parser(value_parser!(usize))
                            .default_value("6"),
                    ),
                ))
                .subcommand(json_args(Command::new("daily").arg(month_arg())))
                .subcommand(json_args(
                    Command::new("top").arg(month_arg()).arg(
                        Arg::new("count")
                            .long("count")
                            .value_parser(value_parser!(usize))
                            .default_value("3"),
                    ),
                )),
        )
        .subcommand(
            Command::new("check")
                .about("Evaluate the monthly limit and saving goal now")
                .arg(month_arg()),
        )
        .subcommand(
            Command::new("notify")
                .about("Notification center")
                .subcommand(json_args(Command::new("list")))
                .subcommand(Command::new("read").arg(Arg::new("id").required(true)))
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(Command::new("clear")),
        )
        .subcommand(
            Command::new("settings")
                .about("Monthly limit, saving goal and preferences")
                .subcommand(json_args(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("limit").long("limit").help("Monthly expense limit"))
                        .arg(Arg::new("goal").long("goal").help("Monthly saving goal"))
                        .arg(
                            Arg::new("dark_mode")
                                .long("dark-mode")
                                .value_name("on|off"),
                        )
                        .arg(
                            Arg::new("notifications")
                                .long("notifications")
                                .value_name("on|off"),
                        ),
                ),
        )
        .subcommand(
            Command::new("profile")
                .about("Local profile")
                .subcommand(json_args(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("email").long("email"))
                        .arg(Arg::new("phone").long("phone")),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the profile; data is kept"))
        .subcommand(
            Command::new("data")
                .about("Data maintenance")
                .subcommand(Command::new("wipe").about("Delete all transactions and notifications")),
        )
        .subcommand(
            Command::new("export")
                .about("Export all transactions")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("categories").about("List the category table"))
}
