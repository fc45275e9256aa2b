//! Response envelope returned by every call.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value as JsonValue;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::de;

/// Processing status reported by the server.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResponseStatus {
    Pending,
    Started,
    Success,
    Warning,
    Error,
}

impl ResponseStatus {
    /// Gets the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Response of the API, generic over the type of `responsedata`.
///
/// The client hands this back as-is. An `error` status is a normal response,
/// not an `Err`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ResponseMessage<T> {
    /// Unique id of the request, created by the server.
    #[serde(rename = "serverrequestid")]
    pub server_request_id: String,
    /// Id of the request as given by the client.
    #[serde(rename = "clientrequestid", default, deserialize_with = "de::empty_as_none")]
    pub client_request_id: Option<String>,
    /// Name of the action that was called.
    pub action: String,
    pub status: ResponseStatus,
    /// Detailed status code, e.g. 2000.
    #[serde(rename = "statuscode", deserialize_with = "de::number")]
    pub status_code: u32,
    #[serde(rename = "shortmessage")]
    pub short_message: String,
    #[serde(rename = "longmessage", default)]
    pub long_message: Option<String>,
    #[serde(rename = "responsedata", default, deserialize_with = "de::empty_as_none")]
    pub response_data: Option<T>,
}

impl<T> ResponseMessage<T> {
    /// Returns whether the status is `success`.
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Response of calls that don't return structured data.
pub type UntypedResponse = ResponseMessage<JsonValue>;

/// Returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionObject {
    /// Session id to pass to every following call.
    #[serde(rename = "apisessionid")]
    pub api_session_id: String,
}
