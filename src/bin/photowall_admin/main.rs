//! photowall-admin: command-line front end for the Photowall admin API.
//! Plays the part of the admin pages: drives the services, follows gate
//! redirects and shows toasts.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;


use clap::Parser;
use tracing::debug;

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli};
use handlers::{images, pages, posts, session};
use photowall::infra::telemetry;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = photowall::config::load(&cli.config)?;
    telemetry::init(&settings.logging)?;
    let ctx = build_ctx_from_cli(&cli, &settings)?;

    let result = match cli.command {
        Commands::Posts(cmd) => posts::handle(&ctx, cmd.action).await,
        Commands::Images(cmd) => images::handle(&ctx, cmd.action).await,
        Commands::Session(cmd) => session::handle(&ctx, cmd.action).await,
        Commands::Page { route } => pages::handle(&ctx, &route).await,
    };

    print::print_toasts(&ctx.toasts);
    let epoch = ctx.revalidation.epoch();
    if epoch > 0 {
        debug!(epoch, "dependent views revalidated");
    }

    result
}
