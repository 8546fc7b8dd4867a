#![deny(clippy::all, clippy::pedantic)]

use photowall::application::notify::ToastLog;
use serde::Serialize;

use crate::client::CliError;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{out}");
    Ok(())
}

/// Toasts go to stderr so stdout stays machine-readable.
pub fn print_toasts(toasts: &ToastLog) {
    for toast in toasts.drain() {
        eprintln!("[{}] {}", toast.kind.as_str(), toast.text);
    }
}
