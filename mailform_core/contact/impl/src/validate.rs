use mailform_core_contact_contracts::PayloadRejection;
use mailform_models::contact::{
    ContactMessage, ContactName, ContactPayload, ContactTitle, CONTACT_EMAIL_REGEX,
};
use serde_json::{Map, Value};

/// Parse and validate a JSON submission.
///
/// Fields are checked in the order `name`, `email`, `title`, `message` and
/// the first invalid one is reported. All fields of the returned payload are
/// trimmed. Unknown fields are ignored.
pub fn parse_payload(raw: &str) -> Result<ContactPayload, PayloadRejection> {
    let value =
        serde_json::from_str::<Value>(raw).map_err(|_| PayloadRejection::InvalidJson)?;
    let Value::Object(fields) = value else {
        return Err(PayloadRejection::NotAnObject);
    };

    let name = string_field(&fields, "name")
        .and_then(|name| ContactName::try_new(name.to_owned()).ok())
        .ok_or(PayloadRejection::Name)?;

    let email = string_field(&fields, "email")
        .map(str::trim)
        .filter(|email| email.chars().count() <= ContactPayload::EMAIL_MAX_LEN)
        .filter(|email| CONTACT_EMAIL_REGEX.is_match(email))
        .and_then(|email| email.parse().ok())
        .ok_or(PayloadRejection::Email)?;

    let title = string_field(&fields, "title")
        .and_then(|title| ContactTitle::try_new(title.to_owned()).ok())
        .ok_or(PayloadRejection::Title)?;

    let message = string_field(&fields, "message")
        .and_then(|message| ContactMessage::try_new(message.to_owned()).ok())
        .ok_or(PayloadRejection::Message)?;

    Ok(ContactPayload {
        name,
        email,
        title,
        message,
    })
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}
