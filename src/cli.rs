// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn amount_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .allow_hyphen_values(true)
        .help("Signed amount: negative is an expense, positive is income")
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .help("First projected day, YYYY-MM-DD (default: today)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .help("Last projected day, YYYY-MM-DD (default: Dec 31 of the start year)"),
    )
}

pub fn build_cli() -> Command {
    command!()
        .name("cashcal")
        .about("Personal finance calendar with a running balance projected to year end")
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Add a transaction")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(amount_arg("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List transactions by date"),
                )),
        )
        .subcommand(
            Command::new("cal")
                .about("Show the month calendar")
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Show the viewed month (or --month)")
                        .arg(Arg::new("month").long("month").help("YYYY-MM")),
                ))
                .subcommand(json_flags(
                    Command::new("prev").about("Move to the previous month"),
                ))
                .subcommand(json_flags(Command::new("next").about("Move to the next month")))
                .subcommand(json_flags(
                    Command::new("today").about("Jump to the current month"),
                )),
        )
        .subcommand(json_flags(range_args(
            Command::new("project").about("List projected daily balances and transactions"),
        )))
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show").about("Show settings"))
                .subcommand(
                    Command::new("set-balance")
                        .about("Set the opening balance used for projections")
                        .arg(amount_arg("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export transactions or projected events")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(range_args(
                    Command::new("events")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                )),
        )
        .subcommand(
            Command::new("import").about("Import transactions").subcommand(
                Command::new("transactions")
                    .about("Import a CSV with title,date,amount columns")
                    .arg(Arg::new("path").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
