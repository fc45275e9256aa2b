use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use strum_macros::{Display, IntoStaticStr};

/// Server action invoked by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub(crate) enum Action {
    Login,
    Logout,
    InfoDnsZone,
    InfoDnsRecords,
    UpdateDnsZone,
    UpdateDnsRecords,
}

/// The `param` object sent to the API.
///
/// Keys keep their insertion order.
#[derive(Debug)]
pub(crate) struct Payload {
    payload: JsonMap<String, JsonValue>,
}

impl Payload {
    /// Creates a new payload, with the given authorization details.
    pub(crate) fn new(customer_number: u32, apikey: &str) -> Self {
        let mut payload = JsonMap::new();
        payload.insert("customernumber".to_string(), customer_number.into());
        payload.insert("apikey".to_string(), apikey.into());
        Self { payload }
    }

    /// Adds the given key-value pair.
    pub(crate) fn add<T: Into<JsonValue>>(mut self, key: &str, value: T) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// In the case that `value` is some, adds the key-value pair.
    pub(crate) fn add_if_some<T: Into<JsonValue>>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.payload.insert(key.to_string(), value.into());
        }
        self
    }

    /// Adds the given object under `key`.
    pub(crate) fn add_object<T: Serialize>(
        self,
        key: &str,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(self.add(key, serde_json::to_value(value)?))
    }
}

impl From<Payload> for JsonValue {
    fn from(value: Payload) -> Self {
        JsonValue::Object(value.payload)
    }
}

/// Envelope wrapping every request.
#[derive(Debug, Serialize)]
pub(crate) struct RequestMessage {
    action: Action,
    param: JsonValue,
}

impl RequestMessage {
    pub(crate) fn new(action: Action, param: Payload) -> Self {
        Self {
            action,
            param: param.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tokens() {
        for (action, token) in [
            (Action::Login, "login"),
            (Action::Logout, "logout"),
            (Action::InfoDnsZone, "infoDnsZone"),
            (Action::InfoDnsRecords, "infoDnsRecords"),
            (Action::UpdateDnsZone, "updateDnsZone"),
            (Action::UpdateDnsRecords, "updateDnsRecords"),
        ] {
            assert_eq!(action.to_string(), token);
            assert_eq!(<&str>::from(action), token);
            assert_eq!(serde_json::to_value(action).unwrap(), token);
        }
    }

    #[test]
    fn keeps_insertion_order_and_skips_absent() {
        let payload = Payload::new(4321, "SomeApiKey")
            .add("apisessionid", "SomeApiSessionId")
            .add("domainname", "netcup.de")
            .add_if_some::<&str>("clientrequestid", None);
        let message = RequestMessage::new(Action::InfoDnsZone, payload);

        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            concat!(
                r#"{"action":"infoDnsZone","param":{"customernumber":4321,"apikey":"SomeApiKey","#,
                r#""apisessionid":"SomeApiSessionId","domainname":"netcup.de"}}"#
            )
        );
    }

    #[test]
    fn adds_present_optional() {
        let payload = Payload::new(4321, "SomeApiKey").add_if_some("clientrequestid", Some("Id1"));
        let value = JsonValue::from(payload);

        assert_eq!(value["clientrequestid"], "Id1");
    }
}
