// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{ApiClient, ApiError};
use crate::config::{self, Config};
use crate::models::NewUser;
use anyhow::Result;

pub fn register(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let user = NewUser {
        email: sub.get_one::<String>("email").unwrap().clone(),
        username: sub.get_one::<String>("username").unwrap().clone(),
        password: sub.get_one::<String>("password").unwrap().clone(),
    };
    if user.password.len() < 6 {
        anyhow::bail!("Password must be at least 6 characters");
    }
    let created = api.register(&user)?;
    println!(
        "Registered {} <{}>. Log in with `momentum login`.",
        created.username, created.email
    );
    Ok(())
}

pub fn login(api: &ApiClient, cfg: &mut Config, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("username").unwrap();
    let password = sub.get_one::<String>("password").unwrap();

    let token = match api.login(username, password) {
        Ok(t) => t,
        // Server rejections carry their own message (e.g. bad
        // credentials); anything else reads as connectivity trouble.
        Err(err @ ApiError::Rejected { .. }) => anyhow::bail!("{}", err),
        Err(ApiError::Network(_)) => {
            anyhow::bail!("Cannot connect to server. Please ensure the backend is running.")
        }
        Err(err) => return Err(err.into()),
    };

    cfg.access_token = Some(token.access_token);
    cfg.username = Some(username.clone());
    config::save(cfg)?;
    println!("Logged in as {}. Session stored.", username);
    Ok(())
}

pub fn logout(cfg: &mut Config) -> Result<()> {
    if !cfg.logged_in() {
        println!("No session stored.");
        return Ok(());
    }
    cfg.access_token = None;
    cfg.username = None;
    config::save(cfg)?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(api: &ApiClient) -> Result<()> {
    let user = api.me()?;
    println!(
        "{} <{}> (member since {})",
        user.username,
        user.email,
        user.created_at.format("%Y-%m-%d")
    );
    Ok(())
}
