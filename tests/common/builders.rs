#![allow(dead_code)]

use restful_request::constants::method;
use restful_request::{Credentials, Request, RequestOptions, ValidationError};

pub const BASE_URL: &str = "https://api.test/api/v1.0/";

pub struct RequestBuilder {
    options: RequestOptions,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            options: RequestOptions {
                method: method::GET.into(),
                base_url: BASE_URL.into(),
                ..RequestOptions::default()
            },
        }
    }

    pub fn method(mut self, method: &str) -> Self {
        self.options.method = method.into();
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.options.path = path.into();
        self
    }

    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.options.query.insert(name.into(), value.into());
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.options.headers.append(name, value);
        self
    }

    pub fn server(mut self, key: &str, value: &str) -> Self {
        self.options.server.insert(key.into(), value.into());
        self
    }

    pub fn credentials(mut self, user: &str, password: &str) -> Self {
        self.options.credentials = Some(Credentials::new(user, password));
        self
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.options.base_url = base_url.into();
        self
    }

    pub fn try_build(self) -> Result<Request, ValidationError> {
        Request::create(self.options)
    }

    pub fn build(self) -> Request {
        self.try_build().expect("valid request options")
    }
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
