use crate::constants::{header, method};
use crate::credentials::Credentials;
use crate::files::UploadedFile;
use crate::headers::HeaderBag;
use crate::method::{MethodClass, classify, normalize_method};
use crate::options::{RequestOptions, ValidationError, parse_base_url, validate_path};
use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use url::Url;

/// An inbound API request, validated and immutable once built.
#[derive(Clone, Debug)]
pub struct Request {
    path: String,
    query: IndexMap<String, String>,
    method: String,
    class: MethodClass,
    href: Url,
    headers: HeaderBag,
    via_router: bool,
    csrf_token: Option<String>,
    cookies: IndexMap<String, String>,
    files: IndexMap<String, UploadedFile>,
    server: IndexMap<String, String>,
    credentials: Option<Credentials>,
}

impl Request {
    /// Builds a request from explicit options.
    ///
    /// Headers derived from `options.server` only fill gaps left by
    /// `options.headers`. A `POST` with a non-empty `X-HTTP-Method-Override`
    /// header takes the override's method. The effective method must be a
    /// read or write method, otherwise [`ValidationError::UnrecognizedMethod`]
    /// is returned carrying the normalized token.
    pub fn create(options: RequestOptions) -> Result<Self, ValidationError> {
        let RequestOptions {
            path,
            query,
            method,
            mut headers,
            via_router,
            csrf_token,
            cookies,
            files,
            server,
            base_url,
            credentials,
        } = options;

        headers.merge_missing(HeaderBag::from_server(&server));

        let method = Self::effective_method(&method, &headers);
        let class = classify(&method);
        if !class.is_valid() {
            tracing::debug!(method = %method, "rejecting request with unrecognized method");
            return Err(ValidationError::UnrecognizedMethod(method));
        }

        validate_path(&path)?;
        let path = path.trim_matches('/').to_string();
        let href = Self::build_href(&base_url, &path, &query)?;

        let csrf_token = csrf_token.or_else(|| headers.value(header::X_CSRF_TOKEN));
        let credentials = credentials.or_else(|| Self::credentials_from_headers(&headers));

        Ok(Self {
            path,
            query,
            method,
            class,
            href,
            headers,
            via_router,
            csrf_token,
            cookies,
            files,
            server,
            credentials,
        })
    }

    /// Builds a request from an [`http::Request`].
    ///
    /// The URI path must lie under the path of `base_url`; that prefix is
    /// removed and the remainder percent-decoded, so `/api/articles/1%2C2`
    /// under `https://host/api/` becomes `articles/1,2`. Headers are copied
    /// (values that are not visible ASCII are skipped) and cookies are read
    /// from every `Cookie` header.
    pub fn from_http<B>(request: &http::Request<B>, base_url: &str) -> Result<Self, ValidationError> {
        let uri = request.uri();
        let path = Self::api_relative_path(uri.path(), base_url)?;
        let query: IndexMap<String, String> = uri
            .query()
            .map(|query| {
                url::form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        let mut headers = HeaderBag::new();
        for (name, value) in request.headers() {
            match value.to_str() {
                Ok(value) => headers.append(name.as_str(), value),
                Err(_) => tracing::debug!(header = %name, "skipping header with opaque value"),
            }
        }

        let cookies: IndexMap<String, String> = headers
            .get(header::COOKIE)
            .map(|cookie| {
                cookie
                    .values()
                    .iter()
                    .flat_map(|line| parse_cookie_line(line))
                    .collect()
            })
            .unwrap_or_default();

        Self::create(RequestOptions {
            path,
            query,
            method: request.method().as_str().to_string(),
            headers,
            cookies,
            base_url: base_url.to_string(),
            ..RequestOptions::default()
        })
    }

    fn api_relative_path(uri_path: &str, base_url: &str) -> Result<String, ValidationError> {
        let base = parse_base_url(base_url)?;
        let base_path = base.path();
        let relative = match uri_path.strip_prefix(base_path) {
            Some(rest) => rest,
            None if uri_path == base_path.trim_end_matches('/') => "",
            None => {
                return Err(ValidationError::PathOutsideBase {
                    path: uri_path.to_string(),
                    base: base_path.to_string(),
                });
            }
        };

        percent_decode_str(relative)
            .decode_utf8()
            .map(Cow::into_owned)
            .map_err(|_| ValidationError::InvalidPath(relative.to_string()))
    }

    fn effective_method(requested: &str, headers: &HeaderBag) -> String {
        let requested = normalize_method(requested).into_owned();
        if requested != method::POST {
            return requested;
        }

        match headers.value(header::X_HTTP_METHOD_OVERRIDE) {
            Some(overridden) if !overridden.trim().is_empty() => {
                let overridden = normalize_method(overridden.trim()).into_owned();
                tracing::debug!(method = %overridden, "applying method override");
                overridden
            }
            _ => requested,
        }
    }

    fn build_href(
        base_url: &str,
        path: &str,
        query: &IndexMap<String, String>,
    ) -> Result<Url, ValidationError> {
        let mut href = parse_base_url(base_url)?;
        href.path_segments_mut()
            .map_err(|()| ValidationError::BaseUrlCannotBeABase(base_url.to_string()))?
            .pop_if_empty()
            .extend(path.split('/'));
        if !query.is_empty() {
            href.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(href)
    }

    fn credentials_from_headers(headers: &HeaderBag) -> Option<Credentials> {
        let authorization = headers.value(header::AUTHORIZATION)?;
        match Credentials::from_authorization(&authorization) {
            Ok(credentials) => Some(credentials),
            Err(error) => {
                tracing::debug!(%error, "ignoring unusable authorization header");
                None
            }
        }
    }

    /// API-relative path, percent-decoded, without leading or trailing slashes.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &IndexMap<String, String> {
        &self.query
    }

    /// Effective method, uppercase, after any override.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn method_class(&self) -> MethodClass {
        self.class
    }

    pub fn is_read(&self) -> bool {
        self.class.is_read()
    }

    pub fn is_write(&self) -> bool {
        self.class.is_write()
    }

    /// Returns `true` for a `GET` that addresses a collection: either no id
    /// segment follows the resource name, or the id segment lists several ids
    /// separated by commas.
    pub fn is_list_request(&self) -> bool {
        if self.method != method::GET {
            return false;
        }

        let mut segments = self.path.split('/');
        segments.next();
        match segments.next() {
            None => true,
            Some(ids) => ids.is_empty() || ids.contains(','),
        }
    }

    /// Fully qualified URL including the query string.
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    pub fn headers(&self) -> &HeaderBag {
        &self.headers
    }

    pub fn is_via_router(&self) -> bool {
        self.via_router
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn cookies(&self) -> &IndexMap<String, String> {
        &self.cookies
    }

    pub fn files(&self) -> &IndexMap<String, UploadedFile> {
        &self.files
    }

    pub fn server(&self) -> &IndexMap<String, String> {
        &self.server
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn user(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::user)
    }

    pub fn password(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::password)
    }
}

fn parse_cookie_line(line: &str) -> impl Iterator<Item = (String, String)> + '_ {
    line.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), value.trim().trim_matches('"').to_string()))
    })
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
