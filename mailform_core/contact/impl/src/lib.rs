use mailform_core_contact_contracts::{ContactService, ContactSubmitError};
use mailform_email_contracts::{Email, EmailService};
use mailform_models::email_address::EmailAddress;
use tracing::{debug, error, warn};

pub mod compose;
pub mod validate;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Receives the notifications and the replies to acknowledgements.
    pub owner: EmailAddress,
}

impl<EmailS> ContactServiceImpl<EmailS> {
    pub fn new(email: EmailS, config: ContactFeatureConfig) -> Self {
        Self { email, config }
    }
}

/// Result of a single delivery attempt.
#[derive(Debug)]
enum DeliveryOutcome {
    Delivered,
    Rejected,
    Failed(anyhow::Error),
}

impl<EmailS> ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn deliver(&self, email: Email) -> DeliveryOutcome {
        match self.email.send(email).await {
            Ok(true) => DeliveryOutcome::Delivered,
            Ok(false) => DeliveryOutcome::Rejected,
            Err(err) => DeliveryOutcome::Failed(err),
        }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn submit(&self, body: String) -> Result<(), ContactSubmitError> {
        if body.is_empty() {
            return Err(ContactSubmitError::BadRequest);
        }

        let payload = validate::parse_payload(&body).inspect_err(|reason| {
            debug!(%reason, "rejected contact form submission");
        })?;

        let notification = compose::owner_notification(&payload, &self.config.owner);
        match self.deliver(notification).await {
            DeliveryOutcome::Delivered => debug!("sent owner notification"),
            DeliveryOutcome::Rejected => {
                error!("Failed to send owner notification: rejected by smtp server");
                return Err(ContactSubmitError::Send);
            }
            DeliveryOutcome::Failed(err) => {
                error!("Failed to send owner notification: {err:#}");
                return Err(ContactSubmitError::Send);
            }
        }

        // The owner has been notified, so the submission succeeds regardless
        // of what happens to the acknowledgement.
        let acknowledgement = compose::acknowledgement(&payload, &self.config.owner);
        match self.deliver(acknowledgement).await {
            DeliveryOutcome::Delivered => debug!("sent acknowledgement"),
            DeliveryOutcome::Rejected => {
                warn!("Failed to send acknowledgement: rejected by smtp server")
            }
            DeliveryOutcome::Failed(err) => warn!("Failed to send acknowledgement: {err:#}"),
        }

        Ok(())
    }
}
