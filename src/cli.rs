// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print raw JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to view (defaults to the current month)")
}

pub fn build_cli() -> Command {
    Command::new("momentum")
        .version(crate_version!())
        .about("Habits, journal, daily check-ins, and expenses against the Momentum API")
        .arg(
            Arg::new("api")
                .long("api")
                .global(true)
                .value_name("URL")
                .help("API base URL (overrides config and MOMENTUM_API)"),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(Arg::new("email").long("email").short('e').required(true))
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and store the session token")
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(Command::new("whoami").about("Show the logged-in account"))
        .subcommand(
            Command::new("dashboard")
                .about("Today's habits with completion and progress")
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .action(ArgAction::SetTrue)
                        .help("Expand the weekly and monthly breakdowns"),
                ),
        )
        .subcommand(
            Command::new("habit")
                .about("Manage habits and their completion logs")
                .subcommand(json_flags(Command::new("list").about("List habits")))
                .subcommand(
                    Command::new("add")
                        .about("Create a habit")
                        .arg(Arg::new("name").long("name").short('n').required(true))
                        .arg(Arg::new("description").long("description").short('d'))
                        .arg(Arg::new("icon").long("icon").default_value("⭐"))
                        .arg(Arg::new("color").long("color").default_value("#6366f1"))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .value_parser(clap::value_parser!(u32))
                                .default_value("7")
                                .help("Target days per week (1-7)"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update a habit")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(Arg::new("name").long("name").short('n'))
                        .arg(Arg::new("description").long("description").short('d'))
                        .arg(Arg::new("icon").long("icon"))
                        .arg(Arg::new("color").long("color"))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("archive")
                                .long("archive")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("restore"),
                        )
                        .arg(
                            Arg::new("restore")
                                .long("restore")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("delete").about("Delete a habit").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("done")
                        .about("Mark a habit completed for a day")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("logs")
                        .about("List completion logs for a habit")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(Arg::new("from").long("from").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").value_name("YYYY-MM-DD")),
                ))
                .subcommand(
                    Command::new("unlog").about("Delete a completion log").arg(
                        Arg::new("log_id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("journal")
                .about("Daily, weekly, and monthly journal entries")
                .subcommand(
                    Command::new("show")
                        .about("Show the entry for a period")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_name("daily|weekly|monthly")
                                .default_value("daily"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Any date inside the period; defaults to today"),
                        ),
                )
                .subcommand(
                    Command::new("write")
                        .about("Save the entry for the current period")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_name("daily|weekly|monthly")
                                .default_value("daily"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Any date inside the period; defaults to today"),
                        )
                        .arg(Arg::new("content").long("content").short('c'))
                        .arg(
                            Arg::new("goal")
                                .long("goal")
                                .help("Monthly only: the skill or goal for the month"),
                        )
                        .arg(
                            Arg::new("rating")
                                .long("rating")
                                .value_name("1-5")
                                .help("Monthly only"),
                        )
                        .arg(Arg::new("feedback").long("feedback").help("Monthly only")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update an entry by id")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(Arg::new("content").long("content").short('c'))
                        .arg(Arg::new("goal").long("goal"))
                        .arg(Arg::new("rating").long("rating").value_name("1-5"))
                        .arg(Arg::new("feedback").long("feedback")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Recent entries")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_name("daily|weekly|monthly"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize))
                                .default_value("10"),
                        ),
                ))
                .subcommand(
                    Command::new("delete").about("Delete an entry").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("checkin")
                .about("Record today's check-in and show the streak calendar")
                .arg(month_arg())
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .action(ArgAction::SetTrue)
                        .help("Only print the streak statistics"),
                ),
        )
        .subcommand(
            Command::new("skill")
                .about("The new-skill-of-the-month progress garden")
                .subcommand(Command::new("show").about("Show the garden").arg(month_arg()))
                .subcommand(
                    Command::new("goal")
                        .about("Set the month's skill goal")
                        .arg(Arg::new("text").required(true))
                        .arg(month_arg()),
                )
                .subcommand(Command::new("plant").about("Toggle today's square in the garden"))
                .subcommand(
                    Command::new("rate")
                        .about("Rate the month (last day of the month only)")
                        .arg(
                            Arg::new("stars")
                                .long("stars")
                                .value_name("1-5")
                                .required(true),
                        )
                        .arg(Arg::new("feedback").long("feedback")),
                )
                .subcommand(json_flags(
                    Command::new("year").about("Every month's skill at a glance"),
                )),
        )
        .subcommand(
            Command::new("expense")
                .about("Daily expenses and monthly budget")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Month summary with daily totals")
                        .arg(month_arg()),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Add an expense for today")
                        .arg(Arg::new("amount").required(true))
                        .arg(Arg::new("note").long("note"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Must be today; defaults to today"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit one of today's expenses")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("delete").about("Delete one of today's expenses").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("budget")
                        .about("Set the monthly budget")
                        .arg(Arg::new("amount").required(true))
                        .arg(month_arg()),
                )
                .subcommand(
                    Command::new("daily-budget")
                        .about("Show or set the budget for a single day")
                        .arg(Arg::new("amount").help("Set when present, show otherwise"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        ),
                ),
        )
}
