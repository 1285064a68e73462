use crate::constants::server;
use crate::util::{header_case_from_env, is_http_token};
use indexmap::IndexMap;

/// A single header: the name as first supplied plus every value given for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpHeader {
    name: String,
    values: Vec<String>,
}

impl HttpHeader {
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Joins every value with `", "`, the list form allowed by RFC 9110.
    pub fn value_string(&self) -> String {
        self.values.join(", ")
    }

    pub fn append<V: Into<String>>(&mut self, value: V) {
        self.values.push(value.into());
    }
}

/// Case-insensitive header collection that keeps first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBag {
    headers: IndexMap<String, HttpHeader>,
}

impl HeaderBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives headers from CGI-style server metadata.
    ///
    /// `HTTP_*` keys map to their header form (`HTTP_X_API_KEY` becomes
    /// `X-Api-Key`) and the three content keys that CGI passes without the
    /// prefix are picked up too. Everything else is ignored.
    pub fn from_server(server: &IndexMap<String, String>) -> Self {
        let mut bag = Self::new();
        for (key, value) in server {
            let name = if let Some(rest) = key.strip_prefix(server::HTTP_PREFIX) {
                header_case_from_env(rest)
            } else if matches!(
                key.as_str(),
                server::CONTENT_TYPE | server::CONTENT_LENGTH | server::CONTENT_MD5
            ) {
                header_case_from_env(key)
            } else {
                continue;
            };

            if !is_http_token(&name) {
                tracing::debug!(key = %key, "ignoring server entry with malformed header name");
                continue;
            }
            bag.add(name, value.clone());
        }
        bag
    }

    fn key(name: &str) -> String {
        name.to_ascii_lowercase()
    }

    /// Sets `name` to a single value, replacing any previous values.
    pub fn add<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        self.headers
            .insert(Self::key(&name), HttpHeader::new(name, value));
    }

    /// Adds another value to `name`, creating the header if needed.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        match self.headers.get_mut(&Self::key(&name)) {
            Some(existing) => existing.append(value),
            None => self.add(name, value),
        }
    }

    pub fn get(&self, name: &str) -> Option<&HttpHeader> {
        self.headers.get(&Self::key(name))
    }

    /// The joined value of `name`, if present.
    pub fn value(&self, name: &str) -> Option<String> {
        self.get(name).map(HttpHeader::value_string)
    }

    pub fn has(&self, name: &str) -> bool {
        self.headers.contains_key(&Self::key(name))
    }

    pub fn remove(&mut self, name: &str) -> Option<HttpHeader> {
        self.headers.shift_remove(&Self::key(name))
    }

    /// Copies every header of `other` whose name is not already present.
    pub fn merge_missing(&mut self, other: HeaderBag) {
        for (key, header) in other.headers {
            self.headers.entry(key).or_insert(header);
        }
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HttpHeader> {
        self.headers.values()
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderBag
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (name, value) in iter {
            bag.append(name, value);
        }
        bag
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
