#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    thread,
};

use serde_json::json;

use spritegen::{app::env::Envy, sprites::models::sprite_spec::SpriteSpec, AppState};

// Looks enough like a PNG for a directory listing; the tool never inspects
// the payload, so any bytes would do.
pub static TEST_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89,
];

pub struct MockReply {
    pub status: u16,
    pub body: String,
}

pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

pub struct MockEndpoint {
    pub port: u16,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockEndpoint {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Serves canned replies in order on a background thread, repeating the last
/// reply once the list runs out, and records every request it sees.
pub fn serve(replies: Vec<MockReply>) -> MockEndpoint {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();

    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    thread::spawn(move || {
        let mut served: usize = 0;

        for mut request in server.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);

            recorded.lock().unwrap().push(RecordedRequest {
                url: request.url().to_string(),
                body,
            });

            let reply = match replies.get(served) {
                Some(reply) => reply,
                None => match replies.last() {
                    Some(reply) => reply,
                    None => {
                        let _ = request.respond(
                            tiny_http::Response::from_string("no reply configured")
                                .with_status_code(500),
                        );
                        continue;
                    }
                },
            };
            served += 1;

            let response = tiny_http::Response::from_string(reply.body.clone())
                .with_status_code(reply.status)
                .with_header(
                    tiny_http::Header::from_bytes(
                        &b"Content-Type"[..],
                        &b"application/json"[..],
                    )
                    .unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    MockEndpoint { port, requests }
}

pub fn success_reply(image: &[u8]) -> MockReply {
    MockReply {
        status: 200,
        body: json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your sprite." },
                        {
                            "inlineData": {
                                "mimeType": "image/png",
                                "data": base64::encode(image),
                            }
                        }
                    ]
                }
            }]
        })
        .to_string(),
    }
}

pub fn no_image_reply(text: &str) -> MockReply {
    MockReply {
        status: 200,
        body: json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })
        .to_string(),
    }
}

pub fn blocked_reply() -> MockReply {
    MockReply {
        status: 200,
        body: json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })
        .to_string(),
    }
}

pub fn error_reply(status: u16) -> MockReply {
    MockReply {
        status,
        body: json!({
            "error": { "code": status, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED" }
        })
        .to_string(),
    }
}

pub fn test_state(port: u16, output_dir: &Path) -> AppState {
    AppState::new(Envy {
        app_env: Some("test".to_string()),
        gemini_api_key: "test-key".to_string(),
        output_dir: Some(output_dir.display().to_string()),
        generation_api_url: Some(format!("http://127.0.0.1:{}/v1beta", port)),
        request_delay_ms: Some(0),
    })
}

pub fn spec(name: &str, filename: &str, prompt: &str) -> SpriteSpec {
    SpriteSpec {
        name: name.to_string(),
        filename: filename.to_string(),
        prompt: prompt.to_string(),
    }
}

/// Fresh per-test scratch directory under the system temp dir.
pub fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spritegen-test-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
