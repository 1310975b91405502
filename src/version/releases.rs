//! Release version collection for a single project
//!
//! `ReleaseVersions` walks a project's paginated releases listing, accumulates
//! every version it finds and answers "latest version" queries over the sorted
//! result.

use tracing::{debug, info};

use crate::config::{NEXT_PAGE_QUERY, RELEASES_PATH, ScraperConfig};
use crate::version::compare::sort_descending;
use crate::version::decompose::decompose;
use crate::version::error::{ScrapeError, VersionError};
use crate::version::extractor::VersionExtractor;
use crate::version::fetcher::PageFetcher;
use crate::version::fetchers::HttpPageFetcher;

pub struct ReleaseVersions<F: PageFetcher> {
    fetcher: F,
    extractor: VersionExtractor,
    base_url: String,
    owner: String,
    project: String,
    /// Core versions, in fetch order until sorted
    versions: Vec<String>,
    sorted: bool,
    /// Alphabetic prefix of the last entry on the last parsed page
    version_prefix: Option<String>,
}

impl ReleaseVersions<HttpPageFetcher> {
    /// Creates a collector fetching over HTTP with the given configuration
    pub fn from_config(
        config: &ScraperConfig,
        owner: &str,
        project: &str,
    ) -> Result<Self, ScrapeError> {
        let fetcher = HttpPageFetcher::new(&config.user_agent)?;
        let extractor = VersionExtractor::new(&config.version_selector)?;
        Ok(Self::new(fetcher, extractor, &config.base_url, owner, project))
    }
}

impl<F: PageFetcher> ReleaseVersions<F> {
    pub fn new(
        fetcher: F,
        extractor: VersionExtractor,
        base_url: &str,
        owner: &str,
        project: &str,
    ) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            fetcher,
            extractor,
            base_url,
            owner: owner.to_string(),
            project: project.to_string(),
            versions: Vec::new(),
            sorted: false,
            version_prefix: None,
        }
    }

    /// Versions collected so far, highest first once sorted
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn version_prefix(&self) -> Option<&str> {
        self.version_prefix.as_deref()
    }

    /// URL of the first releases page, e.g. `https://github.com/owner/project/releases`
    pub fn releases_url(&self) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url, self.owner, self.project, RELEASES_PATH
        )
    }

    /// URL of the next page to fetch, with a cursor built from the remembered
    /// prefix and the last collected version
    fn next_page_url(&self) -> String {
        let url = self.releases_url();
        match self.versions.last() {
            Some(last) => format!(
                "{url}{NEXT_PAGE_QUERY}{}{last}",
                self.version_prefix.as_deref().unwrap_or_default()
            ),
            None => url,
        }
    }

    /// Append versions, invalidating any previous sort
    pub fn extend_versions(&mut self, versions: impl IntoIterator<Item = String>) {
        self.versions.extend(versions);
        self.sorted = false;
    }

    /// Fetch every releases page until one yields no version, then sort.
    ///
    /// Any fetch failure or unparsable page aborts the whole collection.
    pub async fn collect_all_versions(&mut self) -> Result<(), ScrapeError> {
        loop {
            let url = self.next_page_url();
            debug!("Fetching releases page {}", url);

            let body = self.fetcher.fetch_page(&url).await?;
            let page = self.extractor.extract(&body)?;
            if page.is_empty() {
                debug!("No versions on {}, pagination finished", url);
                break;
            }

            self.version_prefix = page.last_prefix;
            self.extend_versions(page.versions);
        }

        info!(
            "Collected {} versions for {}/{}",
            self.versions.len(),
            self.owner,
            self.project
        );

        self.sort_versions()?;
        Ok(())
    }

    /// Sort collected versions from highest to lowest
    pub fn sort_versions(&mut self) -> Result<(), VersionError> {
        sort_descending(&mut self.versions)?;
        self.sorted = true;
        Ok(())
    }

    fn ensure_sorted(&mut self) -> Result<(), VersionError> {
        if !self.sorted {
            self.sort_versions()?;
        }
        Ok(())
    }

    /// Highest collected version, skipping pre-releases when `only_stable`
    pub fn latest_version(&mut self, only_stable: bool) -> Result<Option<String>, VersionError> {
        self.ensure_sorted()?;
        self.first_matching(|_| true, only_stable)
    }

    /// Highest collected version whose text starts with `major`, skipping
    /// pre-releases when `only_stable`
    pub fn latest_major_version(
        &mut self,
        major: &str,
        only_stable: bool,
    ) -> Result<Option<String>, VersionError> {
        self.ensure_sorted()?;
        self.first_matching(|version| version.starts_with(major), only_stable)
    }

    fn first_matching(
        &self,
        predicate: impl Fn(&str) -> bool,
        only_stable: bool,
    ) -> Result<Option<String>, VersionError> {
        for version in self.versions.iter().filter(|v| predicate(v)) {
            if !only_stable || decompose(version)?.is_stable() {
                return Ok(Some(version.clone()));
            }
        }
        Ok(None)
    }
}
