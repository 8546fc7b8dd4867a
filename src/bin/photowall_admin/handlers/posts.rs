#![deny(clippy::all, clippy::pedantic)]

use photowall::application::context::AdminContext;
use photowall::application::gate::AdminRoute;

use crate::args::PostsCmd;
use crate::client::CliError;
use crate::print::print_json;

pub async fn handle(ctx: &AdminContext, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::List { published } => list(ctx, published).await,
        PostsCmd::Get { slug } => print_json(&ctx.posts.get_post(&slug).await?),
        PostsCmd::Create {
            title,
            display_time,
            open,
        } => create(ctx, &title, display_time.as_deref(), open).await,
        PostsCmd::Status { slug, status } => {
            ctx.posts.update_status(&slug, status).await?;
            println!("status updated");
            Ok(())
        }
        PostsCmd::DisplayTime { slug, display_time } => {
            ctx.posts.update_display_time(&slug, &display_time).await?;
            println!("display time updated");
            Ok(())
        }
        PostsCmd::Delete { slug } => {
            ctx.posts.delete_post(&slug).await?;
            println!("deleted");
            Ok(())
        }
    }
}

async fn list(ctx: &AdminContext, published: bool) -> Result<(), CliError> {
    if published {
        print_json(&ctx.posts.list_published_posts().await?)
    } else {
        print_json(&ctx.posts.list_posts().await?)
    }
}

async fn create(
    ctx: &AdminContext,
    title: &str,
    display_time: Option<&str>,
    open: bool,
) -> Result<(), CliError> {
    match (open, display_time) {
        (true, None) => println!("{}", ctx.posts.create_post_and_edit(title).await?),
        (true, Some(_)) => {
            let slug = ctx.posts.create_post_at(title, display_time).await?;
            println!("{}", AdminRoute::Editor { slug });
        }
        (false, _) => println!("{}", ctx.posts.create_post_at(title, display_time).await?),
    }
    Ok(())
}
