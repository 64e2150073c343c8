//! Request descriptors and their construction

use gamification_core::{Error, Result};
use reqwest::Url;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully formed request, built once per call and never mutated.
///
/// Adding a header produces a new descriptor (see [`HttpRequest::with_header`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Absolute URL, query string included
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Value of the first header named `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Copy of this request with one more header
    pub fn with_header(&self, name: &str, value: &str) -> Self {
        let mut headers = self.headers.clone();
        headers.push((name.to_string(), value.to_string()));
        Self {
            method: self.method,
            url: self.url.clone(),
            headers,
        }
    }
}

/// Builds [`HttpRequest`] values from primitive parts
pub struct RequestBuilder;

impl RequestBuilder {
    /// Build a request for `instance_url` + `path`.
    ///
    /// `path` replaces whatever path `instance_url` carries. Query items are
    /// form-encoded and appended in the order given; keys are expected to be
    /// unique and are not deduplicated.
    pub fn create(
        instance_url: &str,
        path: &str,
        method: HttpMethod,
        query_items: Option<&[(&str, &str)]>,
    ) -> Result<HttpRequest> {
        let mut url = Url::parse(instance_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", instance_url, e)))?;

        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(Error::InvalidUrl(format!(
                "{}: not an absolute http(s) URL",
                instance_url
            )));
        }

        url.set_path(path);
        url.set_query(None);

        if let Some(items) = query_items.filter(|items| !items.is_empty()) {
            // Form encoding: a space is sent as `+`, a literal `+` as `%2B`
            url.query_pairs_mut().extend_pairs(items.iter());
        }

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
        })
    }
}
