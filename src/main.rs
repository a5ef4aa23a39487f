// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use momentum::{api, cli, commands, config};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut cfg = config::load()?;
    if let Some(base) = matches.get_one::<String>("api") {
        cfg.api_base = base.clone();
    } else if let Ok(base) = std::env::var("MOMENTUM_API") {
        cfg.api_base = base;
    }
    let api = api::ApiClient::new(&cfg.api_base, cfg.access_token.clone())?;

    match matches.subcommand() {
        Some(("register", sub)) => commands::auth::register(&api, sub)?,
        Some(("login", sub)) => commands::auth::login(&api, &mut cfg, sub)?,
        Some(("logout", _)) => commands::auth::logout(&mut cfg)?,
        Some(("whoami", _)) => commands::auth::whoami(&api)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&api, sub)?,
        Some(("habit", sub)) => commands::habits::handle(&api, sub)?,
        Some(("journal", sub)) => commands::journal::handle(&api, sub)?,
        Some(("checkin", sub)) => commands::checkins::handle(&api, sub)?,
        Some(("skill", sub)) => commands::skill::handle(&api, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&api, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
