//! Scope and options types for the list-articles endpoint

use crate::error::{Error, Result};
use url::Url;

/// Path prefix of the Help Center API
pub const API_PREFIX: &str = "/api/v2/help_center/";

/// Query parameter carrying the page size on the first request
pub const PAGE_SIZE_PARAM: &str = "page[size]";

/// Page size requested when none is configured
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Restriction of the listing to a category or a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Every article in the Help Center
    #[default]
    All,
    /// Articles of one category
    Category(u64),
    /// Articles of one section
    Section(u64),
}

impl Scope {
    /// Create a scope from optional ids
    ///
    /// Category and section are mutually exclusive; passing both fails with
    /// [`Error::InvalidScopeConfiguration`].
    pub fn from_ids(category_id: Option<u64>, section_id: Option<u64>) -> Result<Self> {
        match (category_id, section_id) {
            (Some(category_id), Some(section_id)) => Err(Error::InvalidScopeConfiguration {
                category_id,
                section_id,
            }),
            (Some(id), None) => Ok(Self::Category(positive_id("category_id", id)?)),
            (None, Some(id)) => Ok(Self::Section(positive_id("section_id", id)?)),
            (None, None) => Ok(Self::All),
        }
    }

    /// Path segment between the locale and `articles/`
    fn segment(self) -> String {
        match self {
            Scope::All => String::new(),
            Scope::Category(id) => format!("categories/{id}/"),
            Scope::Section(id) => format!("sections/{id}/"),
        }
    }
}

fn positive_id(field: &str, id: u64) -> Result<u64> {
    if id == 0 {
        return Err(Error::invalid_value(field, "must be a positive integer"));
    }
    Ok(id)
}

/// Validated options for the list-articles endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArticlesOptions {
    base_url: Url,
    locale: Option<String>,
    scope: Scope,
}

impl ListArticlesOptions {
    /// Create options from an already validated scope
    pub fn new(base_url: &str, locale: Option<&str>, scope: Scope) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() || base_url.host_str().is_none() {
            return Err(Error::invalid_value(
                "url",
                format!("'{base_url}' is not an absolute http(s) URL"),
            ));
        }

        let locale = match locale.map(str::trim) {
            Some("") => return Err(Error::invalid_value("locale", "must not be empty")),
            Some(locale) => Some(locale.to_string()),
            None => None,
        };

        Ok(Self {
            base_url,
            locale,
            scope,
        })
    }

    /// Create options from optional raw parts
    pub fn build(
        base_url: &str,
        locale: Option<&str>,
        category_id: Option<u64>,
        section_id: Option<u64>,
    ) -> Result<Self> {
        let scope = Scope::from_ids(category_id, section_id)?;
        Self::new(base_url, locale, scope)
    }

    /// The base URL as given (before any path replacement)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The locale, if any
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// The scope
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Absolute path of the list-articles endpoint
    pub fn path(&self) -> String {
        let locale = self
            .locale
            .as_deref()
            .map(|l| format!("{l}/"))
            .unwrap_or_default();
        format!("{API_PREFIX}{locale}{}articles/", self.scope.segment())
    }

    /// Endpoint URL resolved against the base URL
    ///
    /// The path replaces whatever path, query, and fragment the base URL had;
    /// scheme, host, and port are kept.
    pub fn to_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.set_path(&self.path());
        url
    }

    /// URL of the first page, carrying the page size parameter
    ///
    /// Only the first request is sized this way; following pages use the
    /// server's next link as is.
    pub fn first_page_url(&self, page_size: u32) -> Url {
        let mut url = self.to_url();
        url.query_pairs_mut()
            .append_pair(PAGE_SIZE_PARAM, &page_size.to_string());
        url
    }
}
