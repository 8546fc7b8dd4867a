#![deny(clippy::all, clippy::pedantic)]

use photowall::application::context::AdminContext;
use photowall::application::notify::{Notifier, Toast};
use photowall::application::session::AuthStatus;

use crate::args::SessionCmd;
use crate::client::CliError;
use crate::io::read_password;

pub async fn handle(ctx: &AdminContext, cmd: SessionCmd) -> Result<(), CliError> {
    match cmd {
        SessionCmd::Me => {
            match ctx.session.me().await? {
                AuthStatus::Authenticated => println!("authenticated"),
                AuthStatus::Anonymous(status) => println!("anonymous ({})", status.as_u16()),
            }
            Ok(())
        }
        SessionCmd::Login {
            username,
            password_file,
            password_env,
        } => {
            let password = read_password(password_file.as_deref(), password_env.as_deref())?;
            ctx.session.login(&username, &password).await?;
            ctx.toasts.notify(Toast::success(format!("Logged in as {username}")));
            // Printed so it can be exported as PHOTOWALL_SESSION.
            match ctx.session.session_cookie() {
                Some(cookie) => println!("{cookie}"),
                None => println!("logged in"),
            }
            Ok(())
        }
        SessionCmd::Logout => {
            ctx.session.logout().await?;
            ctx.toasts.notify(Toast::success("Logged out"));
            println!("logged out");
            Ok(())
        }
    }
}
