#![deny(clippy::all, clippy::pedantic)]

use photowall::application::context::AdminContext;

use crate::args::ImagesCmd;
use crate::client::CliError;
use crate::io::read_images;
use crate::print::print_json;

pub async fn handle(ctx: &AdminContext, cmd: ImagesCmd) -> Result<(), CliError> {
    match cmd {
        ImagesCmd::Upload { files } => {
            let uploads = read_images(&files).await?;
            let urls = ctx.images.upload_images(uploads).await?;
            print_json(&urls)
        }
        ImagesCmd::Attach { slug, urls } => {
            ctx.images.attach_images(&slug, &urls).await?;
            println!("attached {} image(s)", urls.len());
            Ok(())
        }
    }
}
