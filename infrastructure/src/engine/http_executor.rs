//! HTTP execution engine adapter.
//!
//! Posts one request per invocation to the engine's execute endpoint:
//!
//! ```text
//! POST <base_url>/<execute_path>
//! { "workflowId": "42", "items": [{"json": {"query": "..."}}] }
//! { "workflow": { ...inline definition... }, "items": [...] }
//! ```
//!
//! The engine answers with the output branches, either bare
//! (`[[{"json": {...}}]]`) or wrapped as `{"data": [[...]]}`.

use async_trait::async_trait;
use serde_json::{Value, json};
use toolbridge_application::{EngineError, WorkflowExecutor};
use toolbridge_domain::util::truncate_str;
use toolbridge_domain::{ExecutionResult, WorkflowItem, WorkflowReference};
use tracing::debug;

use crate::config::FileEngineConfig;

/// Maximum number of error body bytes kept in [`EngineError::Status`].
const MAX_ERROR_BODY: usize = 2 * 1024;

/// Execution engine reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWorkflowExecutor {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpWorkflowExecutor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: None,
        }
    }

    pub fn from_config(config: &FileEngineConfig) -> Self {
        let executor = Self::new(config.endpoint());
        match &config.token {
            Some(token) if !token.is_empty() => executor.with_token(token.clone()),
            _ => executor,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(reference: &WorkflowReference, items: &[WorkflowItem]) -> Value {
        match reference {
            WorkflowReference::ById(id) => json!({ "workflowId": id, "items": items }),
            WorkflowReference::ByInlineDefinition(definition) => {
                json!({ "workflow": definition, "items": items })
            }
        }
    }
}

/// Unwrap a `{"data": ...}` envelope if the engine used one.
fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

#[async_trait]
impl WorkflowExecutor for HttpWorkflowExecutor {
    async fn execute(
        &self,
        reference: &WorkflowReference,
        items: Vec<WorkflowItem>,
    ) -> Result<ExecutionResult, EngineError> {
        let body = Self::request_body(reference, &items);
        debug!(endpoint = %self.endpoint, workflow = %reference.describe(), "Posting execution request");

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(EngineError::Status {
                status: status.as_u16(),
                body: truncate_str(text.trim(), MAX_ERROR_BODY).to_string(),
            });
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| EngineError::InvalidResponse(e.to_string()))?;

        Ok(ExecutionResult::new(unwrap_data(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP request with a canned response and hand back
    /// the raw request text.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if received.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&received).to_string()
        });

        (format!("http://{}/execute", addr), handle)
    }

    #[test]
    fn test_request_body_by_id() {
        let body = HttpWorkflowExecutor::request_body(
            &WorkflowReference::ById("42".into()),
            &[WorkflowItem::from_query("hi")],
        );
        assert_eq!(
            body,
            json!({"workflowId": "42", "items": [{"json": {"query": "hi"}}]})
        );
    }

    #[test]
    fn test_request_body_inline() {
        let body = HttpWorkflowExecutor::request_body(
            &WorkflowReference::ByInlineDefinition(json!({"nodes": []})),
            &[],
        );
        assert_eq!(body, json!({"workflow": {"nodes": []}, "items": []}));
    }

    #[test]
    fn test_unwrap_data_envelope() {
        assert_eq!(unwrap_data(json!({"data": [[1]]})), json!([[1]]));
        assert_eq!(unwrap_data(json!([[1]])), json!([[1]]));
        assert_eq!(unwrap_data(json!({"other": 1})), json!({"other": 1}));
    }

    #[test]
    fn test_from_config_skips_empty_token() {
        let config = FileEngineConfig {
            token: Some(String::new()),
            ..Default::default()
        };
        let executor = HttpWorkflowExecutor::from_config(&config);
        assert!(executor.token.is_none());
        assert_eq!(executor.endpoint(), config.endpoint());
    }

    #[tokio::test]
    async fn test_execute_posts_items_and_parses_result() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"data": [[{"json": {"response": "blue"}}]]}"#,
        )
        .await;
        let executor = HttpWorkflowExecutor::new(url).with_token("t0k");

        let result = executor
            .execute(
                &WorkflowReference::ById("42".into()),
                vec![WorkflowItem::from_query("sky?")],
            )
            .await
            .unwrap();

        assert_eq!(result.as_value(), &json!([[{"json": {"response": "blue"}}]]));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /execute"));
        assert!(request.to_lowercase().contains("authorization: bearer t0k"));
        assert!(request.contains(r#""workflowId":"42""#));
        assert!(request.contains(r#""query":"sky?""#));
    }

    #[tokio::test]
    async fn test_execute_maps_http_error_status() {
        let (url, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            r#"{"message": "workflow crashed"}"#,
        )
        .await;
        let executor = HttpWorkflowExecutor::new(url);

        let err = executor
            .execute(&WorkflowReference::ById("1".into()), vec![])
            .await
            .unwrap_err();

        match err {
            EngineError::Status { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("workflow crashed"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_rejects_non_json_body() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", "not json").await;
        let executor = HttpWorkflowExecutor::new(url);

        let err = executor
            .execute(&WorkflowReference::ById("1".into()), vec![])
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::InvalidResponse(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_unreachable_engine_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let executor = HttpWorkflowExecutor::new(format!("http://{}/execute", addr));
        let err = executor
            .execute(&WorkflowReference::ById("1".into()), vec![])
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::Transport(_)));
    }
}
