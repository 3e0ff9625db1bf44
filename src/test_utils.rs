#[cfg(test)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::app::App;
    use crate::config::Config;
    use crate::server::ServerEndpoint;
    use crate::suggest::{FontSpec, OverlayHost, SuggestRequest, SuggestResponse, TextMeasure};
    use crate::timeline::Timeline;

    pub fn test_app() -> App {
        App::new(&Config::default(), Timeline::default())
    }

    /// App wired to channels the test plays the worker on
    pub struct WiredApp {
        pub app: App,
        pub requests: tokio::sync::mpsc::UnboundedReceiver<SuggestRequest>,
        pub responses: std::sync::mpsc::Sender<SuggestResponse>,
    }

    impl WiredApp {
        pub fn new() -> Self {
            let (request_tx, requests) = tokio::sync::mpsc::unbounded_channel();
            let (responses, response_rx) = std::sync::mpsc::channel();
            let mut app = test_app();
            app.connect_worker(request_tx, response_rx);
            Self {
                app,
                requests,
                responses,
            }
        }

        pub fn type_str(&mut self, text: &str) {
            for c in text.chars() {
                self.app.handle_key_event(key(KeyCode::Char(c)));
            }
        }

        /// All requests the app has sent so far
        pub fn drain_requests(&mut self) -> Vec<SuggestRequest> {
            let mut out = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                out.push(request);
            }
            out
        }

        /// Answer `request` with `suggestions` and let the app pick it up
        pub fn answer(&mut self, request: &SuggestRequest, suggestions: &[&str]) -> bool {
            let SuggestRequest::Query { query, request_id } = request else {
                panic!("Expected a query request");
            };
            self.responses
                .send(SuggestResponse {
                    request_id: *request_id,
                    query: query.clone(),
                    result: Ok(suggestions.iter().map(|s| s.to_string()).collect()),
                })
                .unwrap();
            self.app.poll_suggestions()
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Input control double that records everything the overlay writes
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub query: String,
        pub remainder: String,
        pub offset: u16,
        pub remainder_writes: usize,
    }

    impl RecordingHost {
        pub fn with_query(query: &str) -> Self {
            Self {
                query: query.to_string(),
                ..Self::default()
            }
        }
    }

    impl OverlayHost for RecordingHost {
        fn read_query(&self) -> String {
            self.query.clone()
        }

        fn write_query(&mut self, text: &str) {
            self.query = text.to_string();
        }

        fn write_remainder(&mut self, text: &str) {
            self.remainder = text.to_string();
            self.remainder_writes += 1;
        }

        fn set_overlay_offset(&mut self, cells: u16) {
            self.offset = cells;
        }
    }

    /// Every character is `width` cells wide, whatever the font says
    #[derive(Debug, Clone, Copy)]
    pub struct FixedMeasure {
        pub width: u16,
    }

    impl TextMeasure for FixedMeasure {
        fn measure_text_width(&self, text: &str, _font: &FontSpec) -> u16 {
            (text.chars().count() as u16).saturating_mul(self.width)
        }
    }

    /// One request as seen by the stub server
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub request_line: String,
        pub headers: Vec<String>,
        pub body: String,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<String> {
            let prefix = format!("{}:", name.to_ascii_lowercase());
            self.headers
                .iter()
                .find(|h| h.to_ascii_lowercase().starts_with(&prefix))
                .map(|h| h[prefix.len()..].trim().to_string())
        }
    }

    /// Loopback HTTP server answering every request with a canned response
    pub struct StubServer {
        pub base_url: String,
        pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl StubServer {
        pub fn endpoint(&self) -> ServerEndpoint {
            ServerEndpoint::new(&self.base_url, Duration::from_millis(2000)).unwrap()
        }

        pub fn recorded(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    /// Start a stub that replies `status` with a JSON `body` to every request
    pub async fn stub_server(status: u16, body: &'static str) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let Some(request) = read_request(&mut stream).await else {
                    continue;
                };
                recorded.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        StubServer {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Start a server that accepts connections and never answers
    pub async fn silent_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                open.push(stream);
            }
        });

        format!("http://{}", addr)
    }

    async fn read_request(stream: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                return None;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n").filter(|l| !l.is_empty());
        let request_line = lines.next()?.to_string();
        let headers: Vec<String> = lines.map(str::to_string).collect();

        let content_length = headers
            .iter()
            .find_map(|h| {
                let (name, value) = h.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let body_end = buf.len().min(header_end + content_length);
        let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

        Some(RecordedRequest {
            request_line,
            headers,
            body,
        })
    }
}
