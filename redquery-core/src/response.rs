//! Typed response models for the events API.

use crate::{error::ErrorResponse, event::Event, xml::Element, Error, Result};

/// One page of events returned by the describe-events call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsMessage {
    /// Continuation marker for the next page, when one exists.
    pub marker: Option<String>,
    /// The events on this page, in the order the service returned them.
    pub events: Vec<Event>,
}

impl EventsMessage {
    /// Decode a whole response document.
    ///
    /// Accepts either the full `DescribeEventsResponse` envelope or a bare
    /// `DescribeEventsResult` node. A service error document surfaces as
    /// [`Error::Api`].
    ///
    /// ```
    /// use redquery_core::EventsMessage;
    /// let doc = "<DescribeEventsResponse><DescribeEventsResult>\
    ///            <Events><Event><EventId>evt-1</EventId></Event></Events>\
    ///            </DescribeEventsResult></DescribeEventsResponse>";
    /// let page = EventsMessage::parse(doc)?;
    /// assert_eq!(page.events[0].event_id.as_deref(), Some("evt-1"));
    /// # Ok::<(), redquery_core::Error>(())
    /// ```
    pub fn parse(document: &str) -> Result<EventsMessage> {
        let root = Element::parse(document)?;
        if root.name() == "ErrorResponse" {
            return Err(Error::Api(ErrorResponse::from_xml(&root)));
        }
        let result = if root.name() == "DescribeEventsResult" {
            &root
        } else {
            root.first_child("DescribeEventsResult")
                .ok_or(Error::MissingResult("DescribeEventsResult"))?
        };
        Ok(EventsMessage::from_xml(result))
    }

    /// Extract a page of events from a `DescribeEventsResult` node.
    ///
    /// Lenient like [`Event::from_xml`]: an absent `Events` list yields an
    /// empty page.
    pub fn from_xml(node: &Element) -> EventsMessage {
        EventsMessage {
            marker: node.child_text("Marker").map(str::to_string),
            events: node
                .first_child("Events")
                .map(|events| events.children("Event").map(Event::from_xml).collect())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceType;

    const PAGE: &str = r#"
    <DescribeEventsResponse>
        <DescribeEventsResult>
            <Marker>page-2</Marker>
            <Events>
                <Event>
                    <SourceIdentifier>my-cluster</SourceIdentifier>
                    <SourceType>Cluster</SourceType>
                    <EventId>evt-1</EventId>
                </Event>
                <Event>
                    <SourceType>ClusterSnapshot</SourceType>
                    <EventId>evt-2</EventId>
                </Event>
            </Events>
        </DescribeEventsResult>
        <ResponseMetadata>
            <RequestId>9f1b9c3e-1c2d-4b5a</RequestId>
        </ResponseMetadata>
    </DescribeEventsResponse>"#;

    const THROTTLED: &str = r#"
    <ErrorResponse>
        <Error>
            <Code>Throttling</Code>
            <Message>Rate exceeded</Message>
        </Error>
        <RequestId>6e6f7a64-0e99</RequestId>
    </ErrorResponse>"#;

    #[test]
    fn decodes_a_full_page() {
        let page = EventsMessage::parse(PAGE).unwrap();
        assert_eq!(page.marker.as_deref(), Some("page-2"));
        assert_eq!(page.events.len(), 2);
        assert_eq!(page.events[0].event_id.as_deref(), Some("evt-1"));
        assert_eq!(page.events[0].source_type, Some(SourceType::Cluster));
        assert_eq!(page.events[1].source_type, Some(SourceType::ClusterSnapshot));
        assert_eq!(page.events[1].source_identifier, None);
    }

    #[test]
    fn decodes_a_bare_result_node() {
        let page = EventsMessage::parse("<DescribeEventsResult><Events/></DescribeEventsResult>").unwrap();
        assert_eq!(page, EventsMessage::default());
    }

    #[test]
    fn empty_result_yields_empty_page() {
        let page = EventsMessage::parse(
            "<DescribeEventsResponse><DescribeEventsResult/></DescribeEventsResponse>",
        )
        .unwrap();
        assert_eq!(page.marker, None);
        assert!(page.events.is_empty());
    }

    #[test]
    fn error_envelopes_surface_as_api_errors() {
        match EventsMessage::parse(THROTTLED) {
            Err(Error::Api(err)) => {
                assert_eq!(err.code, "Throttling");
                assert_eq!(err.message, "Rate exceeded");
                assert_eq!(err.request_id.as_deref(), Some("6e6f7a64-0e99"));
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_envelopes_are_rejected() {
        assert!(matches!(
            EventsMessage::parse("<SomethingElse/>"),
            Err(Error::MissingResult(_))
        ));
    }
}
