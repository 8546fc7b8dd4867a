//! Authorization gate run before every protected admin page load.
//!
//! Each visit starts in [`GateState::Checking`], asks the backend who the
//! caller is, and either proceeds to load the page data or redirects to the
//! login path. Nothing is cached between visits.

use std::fmt;

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::application::admin::AdminPostService;
use crate::application::error::AdminError;
use crate::application::session::{AuthStatus, SessionService};
use crate::domain::slug;
use crate::domain::types::Post;

const DASHBOARD_PATH: &str = "/admin";
const EDITOR_PREFIX: &str = "/admin/edit/";

/// Protected admin routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRoute {
    Dashboard,
    Editor { slug: String },
}

impl AdminRoute {
    /// Parse a route path such as `/admin` or `/admin/edit/my-slug`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed == DASHBOARD_PATH {
            return Some(AdminRoute::Dashboard);
        }

        let slug = trimmed.strip_prefix(EDITOR_PREFIX)?;
        let slug = slug::path_segment(slug).ok()?;
        Some(AdminRoute::Editor {
            slug: slug.to_string(),
        })
    }

    pub fn path(&self) -> String {
        match self {
            AdminRoute::Dashboard => DASHBOARD_PATH.to_string(),
            AdminRoute::Editor { slug } => format!("{EDITOR_PREFIX}{slug}"),
        }
    }
}

impl fmt::Display for AdminRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub status: StatusCode,
    pub location: String,
}

/// Outcome of a protected page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLoad<T> {
    Ready(T),
    Redirect(Redirect),
}

impl<T> PageLoad<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageLoad<U> {
        match self {
            PageLoad::Ready(value) => PageLoad::Ready(f(value)),
            PageLoad::Redirect(redirect) => PageLoad::Redirect(redirect),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, PageLoad::Redirect(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            PageLoad::Ready(value) => Some(value),
            PageLoad::Redirect(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Authorized,
    Redirecting,
}

/// Data backing each protected page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard { posts: Vec<Post> },
    Editor { post: Post },
}

#[derive(Clone)]
pub struct AdminGate {
    session: SessionService,
    posts: AdminPostService,
    login_path: String,
}

impl AdminGate {
    pub fn new(
        session: SessionService,
        posts: AdminPostService,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            session,
            posts,
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Layout-level check against `GET /me`.
    pub async fn check(&self) -> Result<GateState, AdminError> {
        let state = match self.session.me().await? {
            AuthStatus::Authenticated => GateState::Authorized,
            AuthStatus::Anonymous(status) => {
                info!(status = status.as_u16(), "session rejected");
                GateState::Redirecting
            }
        };
        debug!(from = ?GateState::Checking, to = ?state, "gate transition");
        Ok(state)
    }

    /// Turn an unauthorized (401/403) result into a login redirect. Every
    /// other error propagates.
    pub fn require<T>(&self, result: Result<T, AdminError>) -> Result<PageLoad<T>, AdminError> {
        match result {
            Ok(value) => Ok(PageLoad::Ready(value)),
            Err(err) if err.is_unauthorized() => {
                info!(error = %err, location = %self.login_path, "redirecting to login");
                Ok(PageLoad::Redirect(self.redirect(StatusCode::SEE_OTHER)))
            }
            Err(err) => Err(err),
        }
    }

    /// Full visit: layout check, then the route's data.
    pub async fn load(&self, route: &AdminRoute) -> Result<PageLoad<AdminPage>, AdminError> {
        if self.check().await? == GateState::Redirecting {
            return Ok(PageLoad::Redirect(self.redirect(StatusCode::FOUND)));
        }

        match route {
            AdminRoute::Dashboard => Ok(self
                .load_dashboard()
                .await?
                .map(|posts| AdminPage::Dashboard { posts })),
            AdminRoute::Editor { slug } => Ok(self
                .load_editor(slug)
                .await?
                .map(|post| AdminPage::Editor { post })),
        }
    }

    pub async fn load_dashboard(&self) -> Result<PageLoad<Vec<Post>>, AdminError> {
        self.require(self.posts.list_posts().await)
    }

    pub async fn load_editor(&self, slug: &str) -> Result<PageLoad<Post>, AdminError> {
        self.require(self.posts.get_post(slug).await)
    }

    fn redirect(&self, status: StatusCode) -> Redirect {
        Redirect {
            status,
            location: self.login_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_routes() {
        assert_eq!(AdminRoute::parse("/admin"), Some(AdminRoute::Dashboard));
        assert_eq!(AdminRoute::parse("/admin/"), Some(AdminRoute::Dashboard));
        assert_eq!(
            AdminRoute::parse("/admin/edit/my-slug?tab=images"),
            Some(AdminRoute::Editor {
                slug: "my-slug".into()
            })
        );
        assert_eq!(AdminRoute::parse("/admin/edit/"), None);
        assert_eq!(AdminRoute::parse("/admin/edit/a/b"), None);
        assert_eq!(AdminRoute::parse("/admin/edit/.."), None);
        assert_eq!(AdminRoute::parse("/admin/edit/."), None);
        assert_eq!(AdminRoute::parse("/admin/edit/a\\b"), None);
        assert_eq!(AdminRoute::parse("/posts"), None);
    }

    #[test]
    fn route_paths_round_trip() {
        let route = AdminRoute::Editor {
            slug: "summer".into(),
        };
        assert_eq!(route.to_string(), "/admin/edit/summer");
        assert_eq!(AdminRoute::parse(&route.path()), Some(route));
    }

    #[test]
    fn page_load_map_keeps_redirects() {
        let redirect = Redirect {
            status: StatusCode::SEE_OTHER,
            location: "/login".into(),
        };
        let load: PageLoad<u8> = PageLoad::Redirect(redirect.clone());
        assert_eq!(load.map(|n| n + 1), PageLoad::Redirect(redirect));
        assert_eq!(PageLoad::Ready(1).map(|n| n + 1).ready(), Some(2));
    }
}
