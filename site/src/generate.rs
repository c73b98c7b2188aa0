//! Write a [`Site`] to disk as static HTML.

use crate::error::{Result, SiteError};
use crate::routes::Site;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOutput {
    /// Route path
    pub route: String,
    /// Written file
    pub file: PathBuf,
    /// Size of the written HTML
    pub bytes: usize,
}

/// Summary of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Output root
    pub out_dir: PathBuf,
    /// Pages in route order
    pub pages: Vec<PageOutput>,
}

impl BuildReport {
    /// Total bytes written.
    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|p| p.bytes).sum()
    }
}

/// Render every route of `site` into `out_dir`, creating directories as
/// needed. Existing files for the same routes are overwritten.
pub fn write_site(site: &Site, out_dir: &Path) -> Result<BuildReport> {
    let mut pages = Vec::with_capacity(site.routes().len());

    for route in site.routes() {
        let file = out_dir.join(route.output_file());
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SiteError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let html = route.render();
        std::fs::write(&file, &html).map_err(|source| SiteError::Write {
            path: file.clone(),
            source,
        })?;
        tracing::debug!("wrote {} -> {} ({} bytes)", route.path(), file.display(), html.len());

        pages.push(PageOutput {
            route: route.path().to_string(),
            file,
            bytes: html.len(),
        });
    }

    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn writes_index_html() {
        let temp = TempDir::new().expect("temp dir");
        let site = Site::wpgraphql(&SiteConfig::default()).expect("site");

        let report = write_site(&site, temp.path()).expect("build");

        let index = temp.path().join("index.html");
        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.pages[0].file, index);
        let written = std::fs::read_to_string(&index).expect("read index");
        assert_eq!(written.len(), report.total_bytes());
        assert!(written.contains("GraphQL API for WordPress"));
    }

    #[test]
    fn creates_nested_directories() {
        let temp = TempDir::new().expect("temp dir");
        let mut site = Site::new();
        site.route("/docs/about", || "<p>about</p>".to_string()).expect("route");

        write_site(&site, &temp.path().join("out")).expect("build");

        let file = temp.path().join("out/docs/about/index.html");
        assert_eq!(std::fs::read_to_string(file).expect("read"), "<p>about</p>");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = BuildReport {
            out_dir: PathBuf::from("public"),
            pages: vec![PageOutput {
                route: "/".into(),
                file: PathBuf::from("public/index.html"),
                bytes: 10,
            }],
        };
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["pages"][0]["route"], "/");
        assert_eq!(json["pages"][0]["bytes"], 10);
    }

    #[test]
    fn write_failure_names_path() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a dir").expect("write blocker");
        let site = Site::wpgraphql(&SiteConfig::default()).expect("site");

        let err = write_site(&site, &blocker).unwrap_err();
        assert!(matches!(err, SiteError::Write { .. }));
    }
}
