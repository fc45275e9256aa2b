//! # Simple and type-safe client for the netcup CCP DNS API.
//!
//! Implements an easy-to-use client for the DNS part of the [netcup CCP API].
//! Arguments are checked against the constraints of the server before
//! anything is sent.
//!
//! ## Examples
//!
//! ```no_run
//! use netcup_ccp::{CancellationToken, Client, DnsRecord, DnsRecordSet, RecordType};
//!
//! # async fn run() -> Result<(), netcup_ccp::ClientError> {
//! let client = Client::new(12345, "<APIKEY>")?;
//! let cancel = CancellationToken::new();
//!
//! let login = client.login("<APIPASSWORD>", None, &cancel).await?;
//! let session = login.response_data.unwrap().api_session_id;
//!
//! let records = DnsRecordSet::new(vec![
//!     DnsRecord::new("www", RecordType::A, "46.38.224.30"),
//!     DnsRecord::new("@", RecordType::Mx, "mail.example.com").with_priority(10),
//! ]);
//! let resp = client
//!     .update_dns_records(&session, "example.com", &records, None, &cancel)
//!     .await?;
//! println!("{}: {}", resp.status, resp.short_message);
//!
//! client.logout(&session, None, &cancel).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [netcup CCP API]: https://ccp.netcup.net/run/webservice/servers/endpoint.php

mod client;
mod de;
mod errors;
mod payload;
pub mod record;
mod response;
pub mod transport;
mod validation;
pub mod zone;

pub use client::*;
pub use errors::*;
pub use record::{DnsRecord, DnsRecordSet, RecordType};
pub use response::*;
pub use tokio_util::sync::CancellationToken;
pub use zone::DnsZone;
