use anyhow::Context;
use mailform_config::EmailConfig;
use mailform_email_impl::EmailServiceImpl;

/// Create the SMTP transport. No connection is made until the first message
/// is sent or the server is pinged.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(
        &config.smtp_url,
        config.from.clone(),
        config.timeout.map(Into::into),
    )
    .context("Failed to configure SMTP transport")
}
