//! Version extraction from a rendered releases page

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::version::error::ScrapeError;

/// Optional alphabetic prefix followed by dotted digits and an optional
/// `-rc`, `-alpha` or `-beta` suffix with its number
const VERSION_PATTERN: &str = r"([A-Za-z]*)([0-9]+(?:\.[0-9]+)*(?:-(?:rc|alpha|beta)[0-9]*)?)";

/// Versions found on a single page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageVersions {
    /// Core versions in page order, adjacent repeats removed
    pub versions: Vec<String>,
    /// Alphabetic prefix of the page's last entry, if it had one
    pub last_prefix: Option<String>,
}

impl PageVersions {
    /// An empty page marks the end of the listing
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

pub struct VersionExtractor {
    selector: Selector,
    pattern: Regex,
}

impl VersionExtractor {
    /// Creates an extractor reading versions from elements matching `selector`
    pub fn new(selector: &str) -> Result<Self, ScrapeError> {
        let parsed = Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            selector: parsed,
            pattern: Regex::new(VERSION_PATTERN).expect("version pattern is a valid regex"),
        })
    }

    /// Extract the versions listed in `html`.
    ///
    /// Every matching element must contain a version; an element that does not
    /// fails the whole page with `ScrapeError::UnparsablePage`.
    pub fn extract(&self, html: &str) -> Result<PageVersions, ScrapeError> {
        let document = Html::parse_document(html);
        let texts: Vec<String> = document
            .select(&self.selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect();

        let Some(last_text) = texts.last() else {
            debug!("No version elements found on page");
            return Ok(PageVersions::default());
        };

        let mut versions: Vec<String> = Vec::with_capacity(texts.len());
        for text in &texts {
            let (_, core) = self.split_version(text)?;
            if versions.last().map(String::as_str) != Some(core) {
                versions.push(core.to_string());
            }
        }

        let (prefix, _) = self.split_version(last_text)?;
        let last_prefix = (!prefix.is_empty() && prefix.chars().any(char::is_alphabetic))
            .then(|| prefix.to_string());

        debug!(
            "Extracted {} versions (last prefix: {:?})",
            versions.len(),
            last_prefix
        );

        Ok(PageVersions {
            versions,
            last_prefix,
        })
    }

    /// Split element text into its alphabetic prefix and core version
    fn split_version<'t>(&self, text: &'t str) -> Result<(&'t str, &'t str), ScrapeError> {
        let captures = self
            .pattern
            .captures(text)
            .ok_or_else(|| ScrapeError::UnparsablePage {
                text: text.to_string(),
            })?;
        let prefix = captures.get(1).map_or("", |m| m.as_str());
        let core = captures.get(2).map_or("", |m| m.as_str());
        Ok((prefix, core))
    }
}
