#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use photowall::application::admin::ImageUpload;

use crate::client::CliError;

/// Password from file, falling back to the environment value.
pub fn read_password(file: Option<&Path>, env: Option<&str>) -> Result<String, CliError> {
    let password = if let Some(path) = file {
        fs::read_to_string(path).map_err(|source| CliError::InputFile {
            path: path.display().to_string(),
            source,
        })?
    } else {
        env.ok_or(CliError::MissingPassword)?.to_string()
    };

    let password = password.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(CliError::MissingPassword);
    }
    Ok(password)
}

pub async fn read_images(files: &[PathBuf]) -> Result<Vec<ImageUpload>, CliError> {
    let mut uploads = Vec::with_capacity(files.len());
    for path in files {
        uploads.push(ImageUpload::from_path(path).await?);
    }
    Ok(uploads)
}
