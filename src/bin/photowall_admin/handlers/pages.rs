#![deny(clippy::all, clippy::pedantic)]

use photowall::application::context::AdminContext;
use photowall::application::gate::{AdminPage, AdminRoute, PageLoad};

use crate::client::CliError;
use crate::print::print_json;

pub async fn handle(ctx: &AdminContext, route: &str) -> Result<(), CliError> {
    let route = AdminRoute::parse(route)
        .ok_or_else(|| CliError::InvalidInput(format!("not an admin route: {route}")))?;

    match ctx.gate.load(&route).await? {
        PageLoad::Ready(AdminPage::Dashboard { posts }) => print_json(&posts),
        PageLoad::Ready(AdminPage::Editor { post }) => print_json(&post),
        PageLoad::Redirect(redirect) => {
            println!("redirect {} {}", redirect.status.as_u16(), redirect.location);
            Ok(())
        }
    }
}
