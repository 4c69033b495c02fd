use crate::error::FetchError;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One blocking GET round trip. Non-2xx answers come back as a `Response`,
/// only failures to talk to the host at all are errors.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, user_agent: &str) -> Result<Response, FetchError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<Response, FetchError> {
        match ureq::get(url).set("User-Agent", user_agent).call() {
            Ok(resp) => {
                let status = resp.status();
                let body = resp
                    .into_string()
                    .map_err(|e| FetchError::Transport(e.to_string()))?;
                Ok(Response { status, body })
            }
            Err(ureq::Error::Status(status, resp)) => Ok(Response {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(e) => Err(FetchError::Transport(e.to_string())),
        }
    }
}

/// In-memory transport serving canned responses by exact URL. Unknown URLs
/// fail like an unreachable host. Every call is recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, Response>,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            url.into(),
            Response {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn ok(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.route(url, 200, body)
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.lock().iter().map(|(url, _)| url.clone()).collect()
    }

    /// User agent sent with the most recent request.
    pub fn last_user_agent(&self) -> Option<String> {
        self.lock().last().map(|(_, ua)| ua.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, String)>> {
        // a poisoned log is still a valid log
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<Response, FetchError> {
        self.lock().push((url.to_string(), user_agent.to_string()));
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Transport(format!("connection refused: {}", url)))
    }
}
