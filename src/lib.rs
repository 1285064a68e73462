pub mod constants;
mod credentials;
mod files;
mod headers;
mod method;
mod options;
mod request;
mod util;

pub use credentials::{Credentials, CredentialsError};
pub use files::UploadedFile;
pub use headers::{HeaderBag, HttpHeader};
pub use method::{
    MethodClass, READ_METHODS, WRITE_METHODS, classify, is_read_method, is_valid_method,
    is_write_method, normalize_method,
};
pub use options::{DEFAULT_BASE_URL, RequestOptions, ValidationError};
pub use request::Request;
