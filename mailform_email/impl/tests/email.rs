//! Delivery tests against a local [smtp4dev](https://github.com/rnwood/smtp4dev)
//! instance. Run with `SMTP_URL` and `SMTP4DEV_URL` set and `--ignored`.

use std::time::{Duration, Instant};

use mailform_email_contracts::{Email, EmailService};
use mailform_email_impl::EmailServiceImpl;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires a running smtp4dev instance"]
async fn send_email() {
    let client = setup().await;

    let result = client
        .email
        .send(Email {
            recipient: "test@example.com".parse().unwrap(),
            reply_to: Some("replyto@example.com".parse().unwrap()),
            subject: "The Subject\r\nBcc: evil@example.com".into(),
            text_body: "Hello World!".into(),
            html_body: "<h1>Hello World!</h1>".into(),
        })
        .await
        .unwrap();

    assert!(result);

    let mail = client.wait_for_mail().await;
    assert_eq!(mail.from, "no-reply@example.com");
    assert_eq!(mail.to, "test@example.com");
    assert_eq!(mail.subject, "The Subject Bcc: evil@example.com");

    let details = client.fetch_email_details(mail.id).await;
    assert!(details.plain_text);
    assert!(details.html);
    let reply_to = details
        .headers
        .iter()
        .find(|h| h.name == "Reply-To")
        .unwrap();
    assert_eq!(reply_to.value, "replyto@example.com");
    assert!(!details.headers.iter().any(|h| h.name == "Bcc"));
}

struct TestClient {
    email: EmailServiceImpl,
    smtp4dev_url: Url,
    http: reqwest::Client,
}

impl TestClient {
    async fn reset(&self) {
        self.http
            .delete(self.smtp4dev_url.join("api/Messages/*").unwrap())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    async fn wait_for_mail(&self) -> EmailSummary {
        let now = Instant::now();
        while now.elapsed() < Duration::from_secs(2) {
            let mut mailbox = self.get::<PaginationResponse<_>>("api/Messages").await;
            if let Some(mail) = mailbox.results.pop() {
                return mail;
            }
        }
        panic!("No email received");
    }

    async fn fetch_email_details(&self, id: Uuid) -> EmailDetails {
        self.get(&format!("api/Messages/{id}")).await
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> T {
        self.http
            .get(self.smtp4dev_url.join(path).unwrap())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

async fn setup() -> TestClient {
    let smtp_url = std::env::var("SMTP_URL").expect("SMTP_URL is not set");
    let smtp4dev_url = std::env::var("SMTP4DEV_URL")
        .expect("SMTP4DEV_URL is not set")
        .parse()
        .expect("SMTP4DEV_URL is not a valid url");

    let email = EmailServiceImpl::new(
        &smtp_url,
        "Contact Form <no-reply@example.com>".parse().unwrap(),
        Some(Duration::from_secs(5)),
    )
    .unwrap();

    let client = TestClient {
        email,
        smtp4dev_url,
        http: reqwest::Client::new(),
    };

    client.reset().await;

    client
}

#[derive(Debug, Deserialize)]
struct PaginationResponse<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct EmailSummary {
    id: Uuid,
    from: String,
    to: String,
    subject: String,
}

#[derive(Debug, Deserialize)]
struct EmailDetails {
    headers: Vec<EmailHeader>,
    #[serde(rename = "hasPlainTextBody")]
    plain_text: bool,
    #[serde(rename = "hasHtmlBody")]
    html: bool,
}

#[derive(Debug, Deserialize)]
struct EmailHeader {
    name: String,
    value: String,
}
