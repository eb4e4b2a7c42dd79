use anyhow::Context as _;
use serde_json::Value;

use crate::model::{ProfileData, ProfileResponse};

/// Detail shown on a 400 when the service gives none.
pub const DEFAULT_NOT_FOUND_DETAIL: &str = "Invalid UID";
/// Message shown when an application-level failure carries no message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Unknown error";

/// Response body, decoded as JSON when possible.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }
}

/// Status code and body as received from the profile service.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: ResponseBody,
}

/// What a profile lookup resolved to.
#[derive(Clone, Debug)]
pub enum Lookup {
    /// 200 with `status: "success"`.
    Found(ProfileData),
    /// 200 with any other status; carries the payload's message.
    Rejected { message: String },
    /// 400 with a JSON body.
    NotFound { detail: String },
    /// 400 whose body could not be read as an error object.
    InvalidUid,
    /// 500.
    ServerError,
    /// Any other non-200 status.
    HttpError { status: u16 },
}

/// Map a raw response onto a [`Lookup`].
///
/// Errors are reserved for bodies that cannot be decoded on the success path;
/// every non-200 status classifies without failing.
pub fn classify(raw: RawResponse) -> anyhow::Result<Lookup> {
    match raw.status {
        200 => classify_ok(raw.body),
        400 => Ok(classify_bad_request(raw.body)),
        500 => Ok(Lookup::ServerError),
        status => Ok(Lookup::HttpError { status }),
    }
}

fn classify_ok(body: ResponseBody) -> anyhow::Result<Lookup> {
    let value = match body {
        ResponseBody::Json(value) => value,
        ResponseBody::Text(_) => anyhow::bail!("profile service returned a non-JSON body"),
    };

    let response: ProfileResponse =
        serde_json::from_value(value).context("failed to decode profile response")?;

    if !response.is_success() {
        return Ok(Lookup::Rejected {
            message: response
                .message
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned()),
        });
    }

    let data = response
        .data
        .context("profile response is missing `data`")?;
    Ok(Lookup::Found(data))
}

fn classify_bad_request(body: ResponseBody) -> Lookup {
    let ResponseBody::Json(Value::Object(mut error)) = body else {
        return Lookup::InvalidUid;
    };

    let detail = match error.remove("detail") {
        Some(Value::String(text)) => text,
        None | Some(Value::Null) => DEFAULT_NOT_FOUND_DETAIL.to_owned(),
        Some(other) => other.to_string(),
    };
    Lookup::NotFound { detail }
}
