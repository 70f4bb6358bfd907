use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use mailform_core_contact_contracts::ContactService;
use mailform_utils::Apply;
use middlewares::cors::AllowedOrigins;
use tokio::net::TcpListener;

pub mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    pub allowed_origins: Arc<AllowedOrigins>,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact, config: RestServerConfig) -> Self {
        Self { contact, config }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.config.addr).await?;
        let router = self.router();
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .fallback(routes::not_found)
            .apply(middlewares::panic_handler::add)
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
            .apply(|router| middlewares::cors::add(router, self.config.allowed_origins))
    }
}
