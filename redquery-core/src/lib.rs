//! Core types and client-less behavior for Redshift-compatible data-warehouse
//! events APIs.
//!
//! The service speaks the classic query protocol: requests carry
//! `application/x-www-form-urlencoded` parameters on a signed HTTP call and
//! responses are XML documents. This crate owns the typed models on both
//! sides of that boundary plus request construction, and deliberately stops
//! there; signing, transport and retries belong to the client layer built on
//! top of it.
//!
//! ```
//! use redquery_core::{EventsParams, Request, SourceType};
//!
//! let params = EventsParams::default().source_type(SourceType::Cluster);
//! let req = Request::new("/").describe_events(&params)?;
//! assert_eq!(
//!     req.uri().query(),
//!     Some("Action=DescribeEvents&Version=2012-12-01&SourceType=Cluster"),
//! );
//! # Ok::<(), redquery_core::Error>(())
//! ```

pub mod event;
pub use event::Event;

pub mod params;
pub use params::EventsParams;

pub mod request;
pub use request::Request;

pub mod response;
pub use response::EventsMessage;

pub mod source_type;
pub use source_type::SourceType;

pub mod xml;
pub use xml::Element;

mod error;
pub use error::{Error, ErrorResponse};

/// Convenient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
