#![deny(clippy::all, clippy::pedantic)]

pub mod images;
pub mod pages;
pub mod posts;
pub mod session;
