//! Tests for the run module.

use std::sync::Mutex;

use discord_webhook::config::Cli;
use discord_webhook::transport::{MultipartForm, RouteKey};
use http::Method;
use tempfile::tempdir;

use super::*;

/// Mock transport that records requests and answers with a fixed status.
#[derive(Debug)]
struct RecordingClient {
    status: StatusCode,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingClient {
    fn new() -> Self {
        Self {
            status: StatusCode::OK,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn single_request(&self) -> HttpRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "Expected exactly one request");
        requests[0].clone()
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for RecordingClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::new(
            self.status,
            HeaderMap::new(),
            b"{}".to_vec(),
        ))
    }
}

/// Parses a full command line (global options and subcommand).
fn parse(args: &[&str]) -> (ValidatedConfig, Command) {
    let mut full_args = vec!["discord-webhook", "--webhook-id", "123"];
    full_args.extend(args);
    let cli = Cli::parse_from_iter(full_args);
    let config = ValidatedConfig::from_raw(&cli, None).unwrap();
    (config, cli.command)
}

fn client() -> WebhookClient<RecordingClient> {
    WebhookClient::new(RecordingClient::new())
}

async fn run(args: &[&str]) -> (WebhookClient<RecordingClient>, Result<HttpResponse, RunError>) {
    let (config, command) = parse(args);
    let client = client();
    let result = dispatch(&client, &config, command).await;
    (client, result)
}

mod run_error {
    use super::*;

    #[test]
    fn unsuccessful_displays_status() {
        let error = RunError::Unsuccessful {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(error.to_string(), "Request failed with status 404 Not Found");
    }

    #[test]
    fn missing_credential_is_usage_error() {
        let error = RunError::MissingCredential {
            field: field::WEBHOOK_TOKEN,
            hint: "hint",
        };
        assert!(error.is_usage());
    }

    #[test]
    fn unsuccessful_is_not_usage_error() {
        let error = RunError::Unsuccessful {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(!error.is_usage());
    }
}

mod credentials {
    use super::*;

    #[test]
    fn webhook_token_is_preferred() {
        let (config, _) = parse(&["--webhook-token", "tkn", "--bot-token", "Bot b", "get"]);

        assert_eq!(credential(&config).unwrap(), Credential::WebhookToken("tkn"));
    }

    #[test]
    fn bot_token_is_fallback() {
        let (config, _) = parse(&["--bot-token", "Bot b", "get"]);

        assert_eq!(credential(&config).unwrap(), Credential::BotToken("Bot b"));
    }

    #[test]
    fn no_token_is_missing_credential() {
        let (config, _) = parse(&["get"]);

        assert!(matches!(
            credential(&config),
            Err(RunError::MissingCredential {
                field: "bot_token",
                ..
            })
        ));
    }

    #[test]
    fn bot_token_does_not_satisfy_webhook_token() {
        let (config, _) = parse(&["--bot-token", "Bot b", "get"]);

        assert!(matches!(
            require_webhook_token(&config),
            Err(RunError::MissingCredential {
                field: "webhook_token",
                ..
            })
        ));
    }
}

mod dispatch_routing {
    use super::*;

    #[tokio::test]
    async fn get_with_webhook_token_uses_token_variant() {
        let (client, result) = run(&["--webhook-token", "tkn", "get"]).await;

        assert!(result.is_ok());
        let req = client.transport().single_request();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.path(), "/api/v9/webhooks/123/tkn");
        assert!(req.headers.get(http::header::AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn get_with_bot_token_sends_authorization() {
        let (client, _) = run(&["--bot-token", "Bot b", "get"]).await;

        let req = client.transport().single_request();
        assert_eq!(req.url.path(), "/api/v9/webhooks/123");
        assert_eq!(req.headers.get(http::header::AUTHORIZATION).unwrap(), "Bot b");
    }

    #[tokio::test]
    async fn execute_sends_message() {
        let (client, _) = run(&[
            "--webhook-token",
            "tkn",
            "execute",
            "--content",
            "hi",
            "--wait",
        ])
        .await;

        let req = client.transport().single_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.route, RouteKey::WebhooksWid);
        assert_eq!(req.url.query(), Some("wait=true"));
        assert_eq!(
            req.body.as_ref().and_then(RequestBody::as_json).unwrap(),
            br#"{"content":"hi"}"#
        );
    }

    #[tokio::test]
    async fn update_with_bot_token_sends_reason() {
        let (client, _) = run(&[
            "--bot-token",
            "Bot b",
            "update",
            "--name",
            "x",
            "--reason",
            "cleanup",
        ])
        .await;

        let req = client.transport().single_request();
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(req.headers.get("x-audit-log-reason").unwrap(), "cleanup");
        assert_eq!(
            req.body.as_ref().and_then(RequestBody::as_json).unwrap(),
            br#"{"name":"x"}"#
        );
    }

    #[tokio::test]
    async fn delete_with_token_uses_token_variant() {
        let (client, _) = run(&["--webhook-token", "tkn", "delete"]).await;

        let req = client.transport().single_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.url.path(), "/api/v9/webhooks/123/tkn");
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn message_commands_address_the_message() {
        let (client, _) = run(&[
            "--webhook-token",
            "tkn",
            "get-message",
            "--message-id",
            "456",
        ])
        .await;
        assert_eq!(
            client.transport().single_request().url.path(),
            "/api/v9/webhooks/123/tkn/messages/456"
        );

        let (client, _) = run(&[
            "--webhook-token",
            "tkn",
            "delete-message",
            "--message-id",
            "456",
        ])
        .await;
        let req = client.transport().single_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.route, RouteKey::WebhooksWidMessages);
    }

    #[tokio::test]
    async fn edit_message_sends_patch() {
        let (client, _) = run(&[
            "--webhook-token",
            "tkn",
            "edit-message",
            "--message-id",
            "456",
            "--content",
            "edited",
        ])
        .await;

        let req = client.transport().single_request();
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(
            req.body.as_ref().and_then(RequestBody::as_json).unwrap(),
            br#"{"content":"edited"}"#
        );
    }

    #[tokio::test]
    async fn execute_without_webhook_token_sends_nothing() {
        let (client, result) = run(&["--bot-token", "Bot b", "execute", "--content", "hi"]).await;

        assert!(matches!(result, Err(RunError::MissingCredential { .. })));
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn invalid_embed_sends_nothing() {
        let (client, result) = run(&[
            "--webhook-token",
            "tkn",
            "execute",
            "--embed",
            "{not json",
        ])
        .await;

        assert!(matches!(result, Err(RunError::InvalidArgument(_))));
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn init_is_not_dispatched() {
        let (client, result) = run(&["init"]).await;

        assert!(matches!(result, Err(RunError::NotAnApiCommand("init"))));
        assert_eq!(client.transport().request_count(), 0);
    }
}

mod attachments {
    use super::*;

    #[test]
    fn files_are_loaded_in_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.png");
        std::fs::write(&first, b"first").unwrap();
        std::fs::write(&second, b"second").unwrap();

        let attachments = load_attachments(&[first, second]).unwrap();

        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].filename, "a.txt");
        assert_eq!(attachments[0].data, b"first");
        assert_eq!(attachments[1].filename, "b.png");
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.bin");

        let result = load_attachments(&[missing.clone()]);

        assert!(matches!(
            result,
            Err(RunError::Attachment { ref path, .. }) if *path == missing
        ));
    }

    #[tokio::test]
    async fn execute_with_file_sends_multipart() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("log.txt");
        std::fs::write(&file, b"log").unwrap();
        let file = file.to_str().unwrap().to_string();

        let (client, _) = run(&[
            "--webhook-token",
            "tkn",
            "execute",
            "--content",
            "see file",
            "--file",
            &file,
        ])
        .await;

        let req = client.transport().single_request();
        let form: &MultipartForm = req.body.as_ref().and_then(RequestBody::as_multipart).unwrap();
        assert_eq!(form.file_count(), 1);
        assert!(form.field("0").is_some());
        assert!(form.field("payload_json").is_some());
        assert!(req.headers.get(http::header::CONTENT_TYPE).is_none());
    }
}

mod dry_run {
    use super::*;

    #[test]
    fn redact_url_hides_token() {
        let url = Url::parse("https://discord.com/api/v9/webhooks/123/secret/messages/456").unwrap();

        assert_eq!(
            redact_url(&url),
            "https://discord.com/api/v9/webhooks/123/***/messages/456"
        );
    }

    #[test]
    fn redact_url_keeps_query() {
        let url = Url::parse("https://discord.com/api/v9/webhooks/123/secret?wait=true").unwrap();

        assert_eq!(
            redact_url(&url),
            "https://discord.com/api/v9/webhooks/123/***?wait=true"
        );
    }

    #[test]
    fn redact_url_without_token_is_unchanged() {
        let url = Url::parse("https://discord.com/api/v9/webhooks/123").unwrap();

        assert_eq!(redact_url(&url), url.as_str());
    }

    #[tokio::test]
    async fn dry_run_client_answers_no_content() {
        let url = Url::parse("https://discord.com/api/v9/webhooks/123/secret").unwrap();
        let request = HttpRequest::new(RouteKey::WebhooksWid, Method::DELETE, url);

        let response = DryRunClient.request(request).await.unwrap();

        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(response.body.is_empty());
    }

    #[test]
    fn create_client_honors_dry_run() {
        let (config, _) = parse(&["--dry-run", "get"]);

        let client = create_client(&config).unwrap();

        assert!(matches!(client.transport(), AppClient::DryRun(_)));
    }

    #[test]
    fn describe_body_summarizes() {
        assert_eq!(describe_body(None), "none");
        assert_eq!(
            describe_body(Some(&RequestBody::Json(b"{}".to_vec()))),
            "json (2 bytes)"
        );
    }
}

mod reporting {
    use super::*;

    fn response(status: StatusCode, body: &[u8]) -> HttpResponse {
        HttpResponse::new(status, HeaderMap::new(), body.to_vec())
    }

    #[test]
    fn success_writes_body() {
        let mut out = Vec::new();

        report(&response(StatusCode::OK, br#"{"id":"1"}"#), &mut out).unwrap();

        assert_eq!(out, b"{\"id\":\"1\"}\n");
    }

    #[test]
    fn empty_body_writes_nothing() {
        let mut out = Vec::new();

        report(&response(StatusCode::NO_CONTENT, b""), &mut out).unwrap();

        assert!(out.is_empty());
    }

    /// Writer whose every write fails like a closed pipe.
    struct ClosedPipe;

    impl std::io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_output_error() {
        let result = report(&response(StatusCode::OK, br#"{"id":"1"}"#), &mut ClosedPipe);

        assert!(matches!(
            result,
            Err(RunError::Output(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn empty_body_skips_writer() {
        assert!(report(&response(StatusCode::NO_CONTENT, b""), &mut ClosedPipe).is_ok());
    }

    #[test]
    fn non_success_is_error_after_writing_body() {
        let mut out = Vec::new();

        let result = report(&response(StatusCode::NOT_FOUND, br#"{"code":10015}"#), &mut out);

        assert!(matches!(
            result,
            Err(RunError::Unsuccessful { status }) if status == StatusCode::NOT_FOUND
        ));
        assert!(!out.is_empty());
    }
}
