//! Outbound transports: HTTP and OS commands
//!
//! Notifiers talk to the outside world only through these two traits so the
//! dispatch format can be tested without a network or a Mac.

use std::process::Command;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`crate::NotifyError::Http`] unless the status is 2xx
    pub fn error_for_status(self, channel: &str) -> crate::Result<Self> {
        if !self.is_success() {
            return Err(crate::NotifyError::Http(format!(
                "{} returned status {}: {}",
                channel, self.status, self.body
            )));
        }
        Ok(self)
    }
}

/// Owned copies of header or query pairs, as the transports take them
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Abstraction over a blocking HTTP client for dependency injection
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a POST request with a raw body and the given headers
    fn post(&self, url: &str, headers: &[(String, String)], body: &str)
        -> crate::Result<HttpResponse>;

    /// Send a POST request with `params` encoded into the query string and no body
    fn post_query(
        &self,
        url: &str,
        headers: &[(String, String)],
        params: &[(String, String)],
    ) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest's blocking API
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn execute(
        &self,
        url: &str,
        request: reqwest::blocking::RequestBuilder,
    ) -> crate::Result<HttpResponse> {
        let response = request
            .send()
            .map_err(|e| crate::NotifyError::Http(format!("POST {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| crate::NotifyError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let mut request = self.client.post(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        self.execute(url, request.body(body.to_owned()))
    }

    fn post_query(
        &self,
        url: &str,
        headers: &[(String, String)],
        params: &[(String, String)],
    ) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let target = reqwest::Url::parse_with_params(url, params)
            .map_err(|e| crate::NotifyError::Http(format!("Invalid URL {}: {}", url, e)))?;
        let mut request = self.client.post(target);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        self.execute(url, request)
    }
}

/// Abstraction over spawning an OS command
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion and return its exit code, if any.
    /// Output is not captured.
    fn run(&self, program: &str, args: &[String]) -> crate::Result<Option<i32>>;
}

/// Production command runner using `std::process`
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> crate::Result<Option<i32>> {
        tracing::debug!("Running {} {:?}", program, args);
        let status = Command::new(program).args(args).status().map_err(|e| {
            crate::NotifyError::Command(format!("{} could not be started: {}", program, e))
        })?;

        tracing::debug!("{} exited with {}", program, status);
        Ok(status.code())
    }
}
