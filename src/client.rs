use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::payload::{Action, Payload, RequestMessage};
use crate::transport::{ReqwestTransport, Transport};
use crate::{
    ClientError, DnsRecordSet, DnsZone, ProtocolError, ResponseMessage, SessionObject,
    UntypedResponse, validation,
};

/// The netcup JSON API endpoint.
pub const ENDPOINT_URL: &str = "https://ccp.netcup.net/run/webservice/servers/endpoint.php?JSON";

const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    customer_number: Option<u32>,
    apikey: Option<String>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            customer_number: None,
            apikey: None,
        }
    }

    /// Sets the API endpoint to the one given.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// Sets the customer number to the one given.
    pub fn customer_number(mut self, customer_number: u32) -> Self {
        self.customer_number = Some(customer_number);
        self
    }

    /// Sets the API key to the one given.
    pub fn apikey(mut self, apikey: &str) -> Self {
        self.apikey = Some(apikey.to_string());
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, [ENDPOINT_URL] is used.
    ///
    /// # Errors
    /// - `InvalidArgument` if the customer number or API key is missing, zero
    ///   or blank.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientError> {
        self.build_with_transport(ReqwestTransport::new())
    }

    /// Builds a [Client] that sends its requests through `transport`.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<Client<T>, ClientError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => ENDPOINT_URL.parse()?,
        };
        let customer_number = self
            .customer_number
            .ok_or_else(|| ClientError::invalid_argument("customernumber", "missing"))?;
        let apikey = self
            .apikey
            .ok_or_else(|| ClientError::invalid_argument("apikey", "missing"))?;

        Client::<T>::create(endpoint, customer_number, &apikey, transport)
    }
}

/// API client.
///
/// The client keeps no session. Call [Client::login] and pass the returned
/// session id to every other call, then [Client::logout].
///
/// Responses are returned as they come. A response with an `error` status is
/// still `Ok`; only invalid arguments and transport failures are `Err`.
pub struct Client<T: Transport = ReqwestTransport> {
    endpoint: Url,
    customer_number: u32,
    apikey: String,
    transport: T,
    disposed: AtomicBool,
}

impl Client {
    /// Creates a new Client using the default endpoint.
    ///
    /// # Errors
    /// - `InvalidArgument` if `customer_number` is zero or `apikey` is blank.
    pub fn new(customer_number: u32, apikey: &str) -> Result<Self, ClientError> {
        Self::builder()
            .customer_number(customer_number)
            .apikey(apikey)
            .build()
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> Client<T> {
    /// Creates a new Client using the default endpoint and the given transport.
    pub fn with_transport(
        customer_number: u32,
        apikey: &str,
        transport: T,
    ) -> Result<Self, ClientError> {
        ClientBuilder::new()
            .customer_number(customer_number)
            .apikey(apikey)
            .build_with_transport(transport)
    }

    fn create(
        endpoint: Url,
        customer_number: u32,
        apikey: &str,
        transport: T,
    ) -> Result<Self, ClientError> {
        validation::customer_number(customer_number)?;
        validation::require("apikey", apikey)?;

        Ok(Self {
            endpoint,
            customer_number,
            apikey: apikey.to_string(),
            transport,
            disposed: AtomicBool::new(false),
        })
    }

    /// Releases the transport.
    ///
    /// Only the first call has an effect. Every operation afterwards fails
    /// with `UseAfterDispose`.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        log::debug!("disposing client for customer {}", self.customer_number);
        self.transport.release();
    }

    /// Returns whether [Client::dispose] has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn check_disposed(&self) -> Result<(), ClientError> {
        if self.is_disposed() {
            return Err(ClientError::UseAfterDispose);
        }
        Ok(())
    }

    /// Checks the credentials of a call within a session.
    ///
    /// Returns the client request id to send.
    fn check_session<'a>(
        &self,
        api_session_id: &str,
        client_request_id: Option<&'a str>,
    ) -> Result<Option<&'a str>, ClientError> {
        self.check_disposed()?;
        validation::require("apisessionid", api_session_id)?;
        validation::client_request_id(client_request_id)
    }

    /// Returns a payload for sending to the netcup API.
    ///
    /// This payload already includes the data necessary for authorization.
    fn payload(&self) -> Payload {
        Payload::new(self.customer_number, &self.apikey)
    }

    /// Wraps the payload in the request envelope, sends it and parses the response.
    async fn send_request<R: DeserializeOwned>(
        &self,
        action: Action,
        payload: Payload,
        cancel: &CancellationToken,
    ) -> Result<ResponseMessage<R>, ClientError> {
        let body = serde_json::to_string(&RequestMessage::new(action, payload))?;
        log::debug!("sending {action} request");

        let text = self
            .transport
            .post(&self.endpoint, CONTENT_TYPE, body, cancel)
            .await
            .inspect_err(|e| {
                if let ProtocolError::Cancelled = e {
                    log::warn!("{action} request was cancelled");
                }
            })?;

        let resp = serde_json::from_str::<ResponseMessage<R>>(&text).map_err(|e| {
            log::error!(
                "unable to parse {action} response of {} bytes: {e}",
                text.len()
            );
            ProtocolError::Json(e)
        })?;
        log::debug!(
            "{action} finished with status {} ({})",
            resp.status,
            resp.status_code
        );

        Ok(resp)
    }

    /// Creates a session for API users.
    ///
    /// The session id in the response has to be passed to every other call.
    ///
    /// # Errors
    /// - `InvalidArgument` if `api_password` is blank.
    /// - `InvalidFormat` if `client_request_id` isn't alphanumeric.
    pub async fn login(
        &self,
        api_password: &str,
        client_request_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ResponseMessage<SessionObject>, ClientError> {
        self.check_disposed()?;
        validation::require("apipassword", api_password)?;
        let client_request_id = validation::client_request_id(client_request_id)?;

        let payload = self
            .payload()
            .add("apipassword", api_password)
            .add_if_some("clientrequestid", client_request_id);

        self.send_request(Action::Login, payload, cancel).await
    }

    /// Ends the session.
    pub async fn logout(
        &self,
        api_session_id: &str,
        client_request_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<UntypedResponse, ClientError> {
        let client_request_id = self.check_session(api_session_id, client_request_id)?;

        let payload = self
            .payload()
            .add("apisessionid", api_session_id)
            .add_if_some("clientrequestid", client_request_id);

        self.send_request(Action::Logout, payload, cancel).await
    }

    /// Gets the zone settings of `domain_name` on the netcup nameservers.
    ///
    /// # Errors
    /// - `InvalidFormat` if `domain_name` is not a domain under a known public suffix.
    pub async fn info_dns_zone(
        &self,
        api_session_id: &str,
        domain_name: &str,
        client_request_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ResponseMessage<DnsZone>, ClientError> {
        let client_request_id = self.check_session(api_session_id, client_request_id)?;
        validation::domain_name(domain_name)?;

        let payload = self
            .payload()
            .add("apisessionid", api_session_id)
            .add("domainname", domain_name)
            .add_if_some("clientrequestid", client_request_id);

        self.send_request(Action::InfoDnsZone, payload, cancel).await
    }

    /// Gets all records of the zone of `domain_name`.
    pub async fn info_dns_records(
        &self,
        api_session_id: &str,
        domain_name: &str,
        client_request_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ResponseMessage<DnsRecordSet>, ClientError> {
        let client_request_id = self.check_session(api_session_id, client_request_id)?;
        validation::domain_name(domain_name)?;

        let payload = self
            .payload()
            .add("apisessionid", api_session_id)
            .add("domainname", domain_name)
            .add_if_some("clientrequestid", client_request_id);

        self.send_request(Action::InfoDnsRecords, payload, cancel).await
    }

    /// Updates the zone settings of `domain_name`.
    ///
    /// `name` and `serial` of `zone` are never sent. With DNSSEC enabled, the
    /// zone is resigned a few minutes after the update.
    ///
    /// # Errors
    /// - `OutOfRange` if any of ttl, refresh, retry or expire is zero.
    pub async fn update_dns_zone(
        &self,
        api_session_id: &str,
        domain_name: &str,
        zone: &DnsZone,
        client_request_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ResponseMessage<DnsZone>, ClientError> {
        let client_request_id = self.check_session(api_session_id, client_request_id)?;
        validation::domain_name(domain_name)?;
        validation::zone(zone)?;

        let payload = self
            .payload()
            .add("apisessionid", api_session_id)
            .add("domainname", domain_name)
            .add_object("dnszone", &zone.for_update())?
            .add_if_some("clientrequestid", client_request_id);

        self.send_request(Action::UpdateDnsZone, payload, cancel).await
    }

    /// Updates the records of the zone of `domain_name`.
    ///
    /// Records without an id are created, records with an id are changed or,
    /// with `delete_record` set, deleted. Records not in `records` are kept.
    /// The `state` of each record is never sent.
    ///
    /// # Errors
    /// - `OutOfRange` if a record has an id of zero.
    /// - `InvalidArgument` if a record is missing its hostname or destination,
    ///   an MX record has no priority or a record to delete has no id.
    /// - `InvalidFormat` if a record has an unsupported type.
    pub async fn update_dns_records(
        &self,
        api_session_id: &str,
        domain_name: &str,
        records: &DnsRecordSet,
        client_request_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ResponseMessage<DnsRecordSet>, ClientError> {
        let client_request_id = self.check_session(api_session_id, client_request_id)?;
        validation::domain_name(domain_name)?;
        records.records.iter().try_for_each(validation::record)?;

        let payload = self
            .payload()
            .add("apisessionid", api_session_id)
            .add("domainname", domain_name)
            .add_object("dnsrecordset", &records.for_update())?
            .add_if_some("clientrequestid", client_request_id);

        self.send_request(Action::UpdateDnsRecords, payload, cancel).await
    }
}

impl<T: Transport> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("customer_number", &self.customer_number)
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Drop for Client<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
