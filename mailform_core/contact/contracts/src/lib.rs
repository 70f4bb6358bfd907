use std::future::Future;

use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate a raw contact form submission, notify the site owner and send
    /// an acknowledgement to the submitter.
    ///
    /// Only a failed owner notification fails the submission. A failed
    /// acknowledgement is logged and otherwise ignored.
    fn submit(&self, body: String) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Bad Request")]
    BadRequest,
    #[error(transparent)]
    Invalid(#[from] PayloadRejection),
    #[error("Failed to send owner notification.")]
    Send,
}

/// The first problem found in a submission. The message is safe to show to
/// the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadRejection {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Bad Request")]
    NotAnObject,
    #[error("Invalid name")]
    Name,
    #[error("Invalid email")]
    Email,
    #[error("Invalid title")]
    Title,
    #[error("Invalid message")]
    Message,
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(mut self, body: String, result: Result<(), ContactSubmitError>) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(body))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
