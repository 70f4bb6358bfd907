use std::sync::Arc;

use mailform_api_rest::{middlewares::cors::AllowedOrigins, RestServer, RestServerConfig};
use mailform_config::Config;
use mailform_core_contact_impl::{ContactFeatureConfig, ContactServiceImpl};
use mailform_email_contracts::EmailService;
use tracing::{info, warn};

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    email.ping().await?;

    let contact = ContactServiceImpl::new(
        email,
        ContactFeatureConfig {
            owner: config.contact.owner,
        },
    );

    let allowed_origins = AllowedOrigins::parse(&config.cors.allowed_origins);
    if allowed_origins.is_empty() {
        warn!("No allowed origins configured, browsers will not be able to read responses");
    }

    let server = RestServer::new(
        contact,
        RestServerConfig {
            addr: config.http.address,
            allowed_origins: Arc::new(allowed_origins),
        },
    );

    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
