use mailform_email_contracts::Email;
use mailform_models::{contact::ContactPayload, email_address::EmailAddress};
use mailform_utils::sanitize::{escape_markup, sanitize_header_field, to_display_html};

pub const ACKNOWLEDGEMENT_SUBJECT: &str = "Thank you for your message";

/// Build the notification for the site owner.
///
/// Replies go straight to the submitter.
pub fn owner_notification(payload: &ContactPayload, owner: &EmailAddress) -> Email {
    let name = payload.name.as_str();
    let email = payload.email.as_str();
    let title = payload.title.as_str();
    let message = payload.message.as_str();

    let subject = format!(
        "[Contact] {} - {}",
        sanitize_header_field(title),
        sanitize_header_field(name)
    );

    let text_body = format!(
        "\
Name: {name}
Email: {email}

Title: {title}

Message:
{message}
"
    );

    let html_body = format!(
        "\
<p><strong>Name</strong>: {}</p>
<p><strong>Email</strong>: {}</p>
<p><strong>Title</strong>: {}</p>
<p><strong>Message</strong></p>
<p>{}</p>
",
        escape_markup(name),
        escape_markup(email),
        escape_markup(title),
        to_display_html(message),
    );

    Email {
        recipient: owner.clone(),
        reply_to: Some(payload.email.clone()),
        subject,
        text_body,
        html_body,
    }
}

/// Build the confirmation for the submitter, echoing their message back.
///
/// Replies go to `reply_to` rather than the (unmonitored) sender address.
pub fn acknowledgement(payload: &ContactPayload, reply_to: &EmailAddress) -> Email {
    let name = payload.name.as_str();
    let title = payload.title.as_str();
    let message = payload.message.as_str();

    let text_body = format!(
        "\
Dear {name},

Thank you for contacting us. We have received your message and will get back
to you as soon as possible.

If you did not send this message, please ignore this email.

----------------------------------------

Your message:

{title}

{message}
"
    );

    let html_body = format!(
        "\
<p>Dear {},</p>
<p>
Thank you for contacting us. We have received your message and will get back<br/>
to you as soon as possible.
</p>
<p>If you did not send this message, please ignore this email.</p>
<hr/>
<p>Your message:</p>
<p>{}</p>
<p>{}</p>
",
        escape_markup(name),
        escape_markup(title),
        to_display_html(message),
    );

    Email {
        recipient: payload.email.clone(),
        reply_to: Some(reply_to.clone()),
        subject: ACKNOWLEDGEMENT_SUBJECT.into(),
        text_body,
        html_body,
    }
}
