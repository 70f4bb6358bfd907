use anyhow::ensure;
use clap::Subcommand;
use mailform_config::Config;
use mailform_email_contracts::{Email, EmailService};
use mailform_models::email_address::EmailAddress;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email)?;

    let ok = email_service
        .send(Email {
            recipient,
            reply_to: Some(config.contact.owner),
            subject: "Email Deliverability Test".into(),
            text_body: "Email deliverability seems to be working!".into(),
            html_body: "<p>Email deliverability seems to be working!</p>".into(),
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
