//! Blocking HTTP execution with ureq.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Executes core requests with a ureq agent.
///
/// HTTP error statuses come back as `Ok(HttpResponse)`; only failures with
/// no response at all become `ApiError::Transport`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = req.url;
        let headers = req.headers;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&url), &headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&url), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), &headers).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(&url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => with_headers(self.agent.patch(&url), &headers).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}

/// Copy the headers the core built onto the outgoing request.
fn with_headers<B>(builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name.as_str(), value.as_str()))
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;

    use todo_core::{Status, TodoClient};

    use super::*;

    /// Accept one connection, reply 204, and hand back the raw request text.
    fn capture_one_request() -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).unwrap();
                raw.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&raw).to_lowercase();
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let content_length = text[..head_end]
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if n == 0 || raw.len() >= head_end + 4 + content_length {
                        break;
                    }
                } else if n == 0 {
                    break;
                }
            }
            stream
                .write_all(b"HTTP/1.1 204 No Content\r\ncontent-length: 0\r\n\r\n")
                .unwrap();
            tx.send(String::from_utf8_lossy(&raw).into_owned()).unwrap();
        });
        (base_url, rx)
    }

    #[test]
    fn forwards_headers_built_by_the_core() {
        let (base_url, rx) = capture_one_request();
        let request = TodoClient::new(&base_url)
            .build_update_status(1, &Status::Completed)
            .unwrap();

        let response = UreqTransport::new().execute(request).unwrap();

        assert_eq!(response.status, 204);
        let raw = rx.recv().unwrap();
        let lowered = raw.to_lowercase();
        assert!(lowered.starts_with("patch /todos/1 "), "{raw}");
        assert!(lowered.contains("content-type: application/json"), "{raw}");
        assert!(raw.ends_with(r#"{"completed":"completed"}"#), "{raw}");
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let request = TodoClient::new(&format!("http://{addr}")).build_list_todos();

        let err = UreqTransport::new().execute(request).unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
    }
}
