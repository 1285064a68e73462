use crate::constants::method;
use crate::credentials::Credentials;
use crate::files::UploadedFile;
use crate::headers::HeaderBag;
use crate::method::is_valid_method;
use indexmap::IndexMap;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost/";

/// Everything needed to build a [`Request`](crate::Request), passed explicitly.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    /// API-relative path, `<resource>[/<ids>]`.
    pub path: String,
    pub query: IndexMap<String, String>,
    pub method: String,
    pub headers: HeaderBag,
    /// Whether the request was dispatched internally rather than over HTTP.
    pub via_router: bool,
    pub csrf_token: Option<String>,
    pub cookies: IndexMap<String, String>,
    pub files: IndexMap<String, UploadedFile>,
    /// CGI-style metadata; `HTTP_*` entries fill in headers that are missing.
    pub server: IndexMap<String, String>,
    pub base_url: String,
    /// Takes precedence over an `Authorization` header.
    pub credentials: Option<Credentials>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            path: String::new(),
            query: IndexMap::new(),
            method: method::GET.into(),
            headers: HeaderBag::default(),
            via_router: false,
            csrf_token: None,
            cookies: IndexMap::new(),
            files: IndexMap::new(),
            server: IndexMap::new(),
            base_url: DEFAULT_BASE_URL.into(),
            credentials: None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unrecognized HTTP method `{0}`")]
    UnrecognizedMethod(String),
    #[error("request path `{0}` must not contain a query, a fragment or dot segments")]
    InvalidPath(String),
    #[error("request path `{path}` is outside the base path `{base}`")]
    PathOutsideBase { path: String, base: String },
    #[error("base URL `{url}` is not a valid URL")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL `{0}` cannot be used as a base")]
    BaseUrlCannotBeABase(String),
}

impl RequestOptions {
    /// Checks the options without building a request.
    ///
    /// Method override headers are not applied here; see
    /// [`Request::create`](crate::Request::create).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_method(&self.method) {
            return Err(ValidationError::UnrecognizedMethod(self.method.clone()));
        }
        validate_path(&self.path)?;
        parse_base_url(&self.base_url)?;
        Ok(())
    }
}

/// Rejects `?`, `#` and `.`/`..` segments, which would escape the base URL
/// once the path is joined onto it.
pub(crate) fn validate_path(path: &str) -> Result<(), ValidationError> {
    if path.contains(['?', '#']) || path.split('/').any(|segment| matches!(segment, "." | "..")) {
        return Err(ValidationError::InvalidPath(path.to_string()));
    }
    Ok(())
}

/// Parses `base_url`, making sure its path ends in `/` so joins append.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ValidationError> {
    let mut url = Url::parse(base_url).map_err(|source| ValidationError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ValidationError::BaseUrlCannotBeABase(base_url.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
