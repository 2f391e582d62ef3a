//! Request builder for the events API.
//!
//! Produces plain [`http::Request`] values for an external client to sign and
//! send; no transport lives in this crate.

use crate::{params::EventsParams, Error, Result};

/// Query-protocol version this crate speaks.
pub const API_VERSION: &str = "2012-12-01";

/// A request builder for one service endpoint
///
/// Takes the path component of the endpoint url and supplies constructors for
/// the calls this crate models. The operations return [`http::Request`]
/// objects carrying a fully encoded query string.
#[derive(Debug, Clone)]
pub struct Request {
    /// The path component of the endpoint url
    pub url_path: String,
}

impl Request {
    /// New request builder with an endpoint's url path
    pub fn new<S: Into<String>>(url_path: S) -> Self {
        Self {
            url_path: url_path.into(),
        }
    }

    /// List events matching the given filters
    pub fn describe_events(&self, ep: &EventsParams) -> Result<http::Request<Vec<u8>>> {
        ep.validate()?;
        let target = format!("{}?", self.url_path);
        let start = target.len();
        let mut qp = form_urlencoded::Serializer::for_suffix(target, start);
        qp.append_pair("Action", "DescribeEvents");
        qp.append_pair("Version", API_VERSION);
        ep.populate_qp(&mut qp);

        let urlstr = qp.finish();
        let req = http::Request::get(urlstr);
        req.body(vec![]).map_err(Error::HttpError)
    }
}

/// Sanity checks that filter combinations land in the expected query strings
#[cfg(test)]
mod test {
    use crate::{params::EventsParams, request::Request, Error, SourceType};

    #[test]
    fn describe_events_url() {
        let req = Request::new("/")
            .describe_events(&EventsParams::default())
            .unwrap();
        assert_eq!(req.uri(), "/?Action=DescribeEvents&Version=2012-12-01");
    }

    #[test]
    fn describe_events_url_filtered() {
        let ep = EventsParams::default()
            .source(SourceType::Cluster, "my-cluster")
            .duration(60)
            .max_records(20);
        let req = Request::new("/").describe_events(&ep).unwrap();
        assert_eq!(
            req.uri(),
            "/?Action=DescribeEvents&Version=2012-12-01\
             &SourceIdentifier=my-cluster&SourceType=Cluster\
             &Duration=60&MaxRecords=20"
        );
    }

    #[test]
    fn describe_events_url_paged() {
        let ep = EventsParams::default().marker("page-2");
        let req = Request::new("/").describe_events(&ep).unwrap();
        assert_eq!(
            req.uri(),
            "/?Action=DescribeEvents&Version=2012-12-01&Marker=page-2"
        );
    }

    #[test]
    fn invalid_params_fail_before_serialization() {
        let ep = EventsParams::default().max_records(1000);
        let err = Request::new("/").describe_events(&ep).unwrap_err();
        assert!(matches!(err, Error::RequestValidation(_)));
    }
}
