//! Route table: which path renders which page.
//!
//! The site has a single route today (`/`), but output paths and validation
//! are defined for any absolute path so new pages drop in without touching
//! the writer.

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use std::fmt;
use std::path::PathBuf;

/// Produces the full HTML document for a route.
pub type RenderFn = Box<dyn Fn() -> String + Send + Sync>;

/// One registered page.
pub struct Route {
    path: String,
    render: RenderFn,
}

impl Route {
    /// Route path, e.g. `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Render the page.
    pub fn render(&self) -> String {
        (self.render)()
    }

    /// File this route is written to, relative to the output directory.
    pub fn output_file(&self) -> PathBuf {
        output_file(&self.path)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("path", &self.path).finish()
    }
}

/// Ordered set of routes.
#[derive(Debug, Default)]
pub struct Site {
    routes: Vec<Route>,
}

impl Site {
    /// Empty site.
    pub fn new() -> Self {
        Self::default()
    }

    /// The WPGraphQL site: the landing page at `/`.
    pub fn wpgraphql(config: &SiteConfig) -> Result<Self> {
        let showcase = config.showcase_entries();
        let mut site = Self::new();
        site.route("/", move || crate::render_index(&showcase))?;
        Ok(site)
    }

    /// Register `render` under `path`.
    pub fn route<F>(&mut self, path: impl Into<String>, render: F) -> Result<&mut Self>
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        let path = path.into();
        validate_path(&path)?;
        let file = output_file(&path);
        if self.routes.iter().any(|r| r.output_file() == file) {
            return Err(SiteError::DuplicateRoute(path));
        }
        self.routes.push(Route {
            path,
            render: Box::new(render),
        });
        Ok(self)
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Look up a route by path.
    pub fn get(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }
}

fn validate_path(path: &str) -> Result<()> {
    let reason = if !path.starts_with('/') {
        Some("must start with '/'")
    } else if path.contains(['?', '#']) {
        Some("query strings and fragments are not routes")
    } else if path.split('/').any(|seg| seg == "." || seg == "..") {
        Some("relative segments are not allowed")
    } else if path.contains("//") {
        Some("empty path segment")
    } else if path.len() > 1 && path.ends_with('/') {
        Some("trailing '/' is only allowed on the root route")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SiteError::InvalidRoute {
            path: path.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Map a route path to its output file: `/` → `index.html`,
/// `/docs/about` → `docs/about/index.html`.
pub fn output_file(path: &str) -> PathBuf {
    let mut file = PathBuf::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        file.push(segment);
    }
    file.push("index.html");
    file
}
