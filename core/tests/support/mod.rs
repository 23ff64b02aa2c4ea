//! Scripted in-memory transport shared by the core integration tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crud_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

struct Reply {
    delay: Duration,
    result: Result<HttpResponse, ApiError>,
}

/// Answers each request with the next reply queued for its method and
/// records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<HttpMethod, VecDeque<Reply>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: HttpMethod, status: u16, body: &str) -> Self {
        self.push(method, Duration::ZERO, Ok(HttpResponse::new(status, body)))
    }

    pub fn reply_after(self, method: HttpMethod, delay: Duration, status: u16, body: &str) -> Self {
        self.push(method, delay, Ok(HttpResponse::new(status, body)))
    }

    pub fn fail(self, method: HttpMethod, message: &str) -> Self {
        self.push(method, Duration::ZERO, Err(ApiError::Transport(message.to_string())))
    }

    fn push(self, method: HttpMethod, delay: Duration, result: Result<HttpResponse, ApiError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(Reply { delay, result });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        self.requests.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&method)
            .and_then(VecDeque::pop_front);
        let Some(reply) = reply else {
            return Err(ApiError::Transport(format!("no scripted reply for {}", method.as_str())));
        };
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }
}
