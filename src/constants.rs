pub mod header {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_MD5: &str = "Content-Md5";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const COOKIE: &str = "Cookie";
    pub const X_CSRF_TOKEN: &str = "X-CSRF-Token";
    pub const X_HTTP_METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// CGI-style server metadata keys (RFC 3875 meta-variables).
pub mod server {
    pub const HTTP_PREFIX: &str = "HTTP_";
    pub const CONTENT_LENGTH: &str = "CONTENT_LENGTH";
    pub const CONTENT_MD5: &str = "CONTENT_MD5";
    pub const CONTENT_TYPE: &str = "CONTENT_TYPE";
}
