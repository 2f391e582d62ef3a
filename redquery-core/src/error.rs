//! Error handling in [`redquery-core`][crate]

use crate::xml::Element;
use thiserror::Error;

/// Possible errors when working with [`redquery-core`][crate]
#[derive(Error, Debug)]
pub enum Error {
    /// ApiError for when the service answers with an error envelope
    ///
    /// Returned by response parsing when the document is an `ErrorResponse`
    /// rather than a result. Throttling and expired-marker failures from the
    /// service surface here.
    #[error("ApiError")]
    Api(#[source] ErrorResponse),

    /// The response body was not a well-formed XML document
    #[error("error reading response document")]
    XmlParse(#[from] quick_xml::Error),

    /// The response body contained no root element
    #[error("response document has no root element")]
    EmptyDocument,

    /// The response envelope did not contain the expected result node
    #[error("response document has no {0} node")]
    MissingResult(&'static str),

    /// Http based error
    #[error("HttpError")]
    HttpError(#[from] http::Error),

    /// A request validation failed
    #[error("Request validation failed with {0}")]
    RequestValidation(String),
}

/// An error response from the API.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("{code}: {message}")]
pub struct ErrorResponse {
    /// Machine-readable error code, such as `Throttling`
    pub code: String,
    /// A message about the error
    pub message: String,
    /// Identifier of the failed request, for support correlation
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Extract an error envelope from a parsed `ErrorResponse` document.
    ///
    /// As lenient as the model bindings: missing children leave the matching
    /// field empty rather than failing a second time on the error path.
    pub fn from_xml(node: &Element) -> ErrorResponse {
        let error = node.first_child("Error");
        let field = |name| error.and_then(|e| e.child_text(name)).map(str::to_string);
        ErrorResponse {
            code: field("Code").unwrap_or_default(),
            message: field("Message").unwrap_or_default(),
            request_id: node.child_text("RequestId").map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THROTTLING: &str = r#"
    <ErrorResponse>
        <Error>
            <Type>Sender</Type>
            <Code>Throttling</Code>
            <Message>Rate exceeded</Message>
        </Error>
        <RequestId>6e6f7a64-0e99-4a1b-b7c9</RequestId>
    </ErrorResponse>"#;

    #[test]
    fn decodes_error_envelopes() {
        let root = Element::parse(THROTTLING).unwrap();
        let err = ErrorResponse::from_xml(&root);
        assert_eq!(err.code, "Throttling");
        assert_eq!(err.message, "Rate exceeded");
        assert_eq!(err.request_id.as_deref(), Some("6e6f7a64-0e99-4a1b-b7c9"));
        assert_eq!(err.to_string(), "Throttling: Rate exceeded");
    }

    #[test]
    fn tolerates_bare_envelopes() {
        let root = Element::parse("<ErrorResponse/>").unwrap();
        let err = ErrorResponse::from_xml(&root);
        assert_eq!(err.code, "");
        assert_eq!(err.message, "");
        assert_eq!(err.request_id, None);
    }
}
