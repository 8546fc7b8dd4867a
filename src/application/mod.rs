//! Application services: resource operations, page gates and their side effects.

pub mod admin;
pub mod context;
pub mod error;
pub mod gate;
pub mod notify;
pub mod revalidate;
pub mod session;
