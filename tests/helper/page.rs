//! Releases page test utilities

use mockito::{Matcher, Mock, ServerGuard};

use release_versions::config::ScraperConfig;
use release_versions::version::fetchers::HttpPageFetcher;
use release_versions::version::releases::ReleaseVersions;

/// Render a releases page listing the given tags the way the host does
pub fn releases_page(tags: &[&str]) -> String {
    let releases: String = tags
        .iter()
        .map(|tag| {
            format!(
                r#"<div class="release-entry">
  <div class="release-header">
    <a href="/owner/project/releases/tag/{tag}">
      <span class="css-truncate-target" style="max-width: 125px">{tag}</span>
    </a>
  </div>
</div>
"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Releases</title></head>
<body>
<div class="releases-listing">
{releases}</div>
</body>
</html>"#
    )
}

/// Mock one releases page; `after` is the expected pagination cursor
pub async fn mock_page(
    server: &mut ServerGuard,
    path: &str,
    after: Option<&str>,
    tags: &[&str],
) -> Mock {
    let query = match after {
        Some(cursor) => Matcher::UrlEncoded("after".into(), cursor.into()),
        None => Matcher::Missing,
    };

    server
        .mock("GET", path)
        .match_query(query)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(releases_page(tags))
        .expect(1)
        .create_async()
        .await
}

/// Create an HTTP-backed collector pointing at the mock server
pub fn create_releases(
    server: &ServerGuard,
    owner: &str,
    project: &str,
) -> ReleaseVersions<HttpPageFetcher> {
    let config = ScraperConfig {
        base_url: server.url(),
        ..ScraperConfig::default()
    };
    ReleaseVersions::from_config(&config, owner, project).unwrap()
}
