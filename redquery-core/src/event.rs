//! The event record and its query-string serialization.

use crate::{source_type::SourceType, xml::Element};

/// A single notification event reported by the service.
///
/// Every field is optional and presence-tracked: a field absent from the
/// source document stays `None` and is skipped entirely during query
/// serialization, while a field present with empty text is `Some` and is
/// emitted. Instances come from [`Event::default`] or from a parsed response
/// node and are not mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event {
    /// Identifier of the resource the event was reported against.
    pub source_identifier: Option<String>,
    /// Category of that resource.
    pub source_type: Option<SourceType>,
    /// Human-readable description of the event.
    pub message: Option<String>,
    /// Categories the service filed the event under.
    ///
    /// `Some(vec![])` when the document carried an empty category list,
    /// `None` when it carried no list at all. The distinction matters to
    /// callers diffing pages, even though both serialize to zero keys.
    pub event_categories: Option<Vec<String>>,
    /// Severity label such as `INFO` or `ERROR`.
    pub severity: Option<String>,
    /// Seconds since the epoch at which the event occurred.
    ///
    /// Unparseable wire text decodes as `0.0`, matching the service protocol.
    pub date: Option<f64>,
    /// Service-assigned identifier of the event itself.
    pub event_id: Option<String>,
}

impl Event {
    /// Extract an event from a response node.
    ///
    /// Extraction is best effort and never fails: missing children leave the
    /// matching field `None`, unrecognized `SourceType` text becomes
    /// [`SourceType::Unknown`], and malformed `Date` text becomes `0.0`. The
    /// service guarantees schema validity upstream; this layer only pulls
    /// fields out of it.
    pub fn from_xml(node: &Element) -> Event {
        let mut event = Event::default();
        if let Some(text) = node.child_text("SourceIdentifier") {
            event.source_identifier = Some(text.to_string());
        }
        if let Some(text) = node.child_text("SourceType") {
            event.source_type = Some(SourceType::parse(text));
        }
        if let Some(text) = node.child_text("Message") {
            event.message = Some(text.to_string());
        }
        if let Some(categories) = node.first_child("EventCategories") {
            event.event_categories = Some(
                categories
                    .children("EventCategory")
                    .map(|category| category.text().to_string())
                    .collect(),
            );
        }
        if let Some(text) = node.child_text("Severity") {
            event.severity = Some(text.to_string());
        }
        if let Some(text) = node.child_text("Date") {
            event.date = Some(text.parse().unwrap_or(0.0));
        }
        if let Some(text) = node.child_text("EventId") {
            event.event_id = Some(text.to_string());
        }
        event
    }

    /// Append the set fields as `key=value&` pairs under `location`.
    ///
    /// Used when the event is a single top-level parameter of a request.
    /// Unset fields emit nothing, not even a separator.
    pub fn append_query(&self, out: &mut String, location: &str) {
        self.append_fields(out, location);
    }

    /// Append the set fields for the `index`-th member of a list parameter.
    ///
    /// Keys take the shape `{location}.{index}{value_location}.{Field}`;
    /// per-field formatting is identical to [`Event::append_query`].
    ///
    /// ```
    /// use redquery_core::Event;
    /// let event = Event { event_id: Some("evt-42".into()), ..Event::default() };
    /// let mut out = String::new();
    /// event.append_query_member(&mut out, "Events.member", 3, ".Event");
    /// assert_eq!(out, "Events.member.3.Event.EventId=evt-42&");
    /// ```
    pub fn append_query_member(
        &self,
        out: &mut String,
        location: &str,
        index: usize,
        value_location: &str,
    ) {
        let prefix = format!("{location}.{index}{value_location}");
        self.append_fields(out, &prefix);
    }

    // Fixed field order is part of the wire contract
    fn append_fields(&self, out: &mut String, prefix: &str) {
        if let Some(source_identifier) = &self.source_identifier {
            append_pair(out, prefix, "SourceIdentifier", source_identifier);
        }
        if let Some(source_type) = &self.source_type {
            append_pair(out, prefix, "SourceType", source_type.as_str());
        }
        if let Some(message) = &self.message {
            append_pair(out, prefix, "Message", message);
        }
        if let Some(categories) = &self.event_categories {
            for (idx, category) in categories.iter().enumerate() {
                append_pair(out, prefix, &format!("EventCategory.{}", idx + 1), category);
            }
        }
        if let Some(severity) = &self.severity {
            append_pair(out, prefix, "Severity", severity);
        }
        if let Some(date) = self.date {
            append_pair(out, prefix, "Date", &date.to_string());
        }
        if let Some(event_id) = &self.event_id {
            append_pair(out, prefix, "EventId", event_id);
        }
    }
}

impl From<&Element> for Event {
    fn from(node: &Element) -> Event {
        Event::from_xml(node)
    }
}

/// Write one `{prefix}.{name}={value}&` fragment, form-urlencoding the value.
fn append_pair(out: &mut String, prefix: &str, name: &str, value: &str) {
    out.push_str(prefix);
    out.push('.');
    out.push_str(name);
    out.push('=');
    out.extend(form_urlencoded::byte_serialize(value.as_bytes()));
    out.push('&');
}
