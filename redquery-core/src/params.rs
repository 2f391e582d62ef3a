//! Optional request parameters for the events API calls.

use crate::{source_type::SourceType, Error};
use jiff::Timestamp;

/// Filters for the describe-events call
///
/// All fields default to unset, which asks the service for every event still
/// inside its retention window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsParams {
    /// Only return events reported against the resource with this identifier.
    ///
    /// When set, `source_type` must say what kind of resource the identifier
    /// names; the service rejects one without the other.
    pub source_identifier: Option<String>,

    /// Only return events reported against this kind of resource.
    pub source_type: Option<SourceType>,

    /// Beginning of the interval to report events from.
    pub start_time: Option<Timestamp>,

    /// End of the interval to report events from.
    pub end_time: Option<Timestamp>,

    /// Number of minutes before now to report events for.
    pub duration: Option<u32>,

    /// Maximum number of events per response page.
    ///
    /// The service accepts values between 20 and 100; pages that overflow the
    /// cap come back with a continuation marker.
    pub max_records: Option<u32>,

    /// Continuation marker returned by a previous page.
    pub marker: Option<String>,
}

impl EventsParams {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(max) = self.max_records {
            if !(20..=100).contains(&max) {
                return Err(Error::RequestValidation(
                    "EventsParams::max_records must be between 20 and 100".into(),
                ));
            }
        }
        if self.source_identifier.is_some() && self.source_type.is_none() {
            return Err(Error::RequestValidation(
                "EventsParams::source_type is required when source_identifier is set".into(),
            ));
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err(Error::RequestValidation(
                    "EventsParams::end_time must not precede start_time".into(),
                ));
            }
        }
        Ok(())
    }

    // Populate query parameters in the service's canonical ordering
    pub(crate) fn populate_qp(&self, qp: &mut form_urlencoded::Serializer<String>) {
        if let Some(source_identifier) = &self.source_identifier {
            qp.append_pair("SourceIdentifier", source_identifier);
        }
        if let Some(source_type) = &self.source_type {
            qp.append_pair("SourceType", source_type.as_str());
        }
        if let Some(start) = &self.start_time {
            qp.append_pair("StartTime", &start.to_string());
        }
        if let Some(end) = &self.end_time {
            qp.append_pair("EndTime", &end.to_string());
        }
        if let Some(duration) = &self.duration {
            qp.append_pair("Duration", &duration.to_string());
        }
        if let Some(max) = &self.max_records {
            qp.append_pair("MaxRecords", &max.to_string());
        }
        if let Some(marker) = &self.marker {
            qp.append_pair("Marker", marker);
        }
    }
}

/// Builder interface to EventsParams
///
/// Usage:
/// ```
/// use redquery_core::{EventsParams, SourceType};
/// let ep = EventsParams::default()
///     .source(SourceType::Cluster, "my-cluster")
///     .max_records(50);
/// ```
impl EventsParams {
    /// Restrict events to one resource, named by category and identifier
    #[must_use]
    pub fn source(mut self, source_type: SourceType, source_identifier: &str) -> Self {
        self.source_type = Some(source_type);
        self.source_identifier = Some(source_identifier.to_string());
        self
    }

    /// Restrict events to one resource category
    #[must_use]
    pub fn source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// Report events between two instants
    #[must_use]
    pub fn between(mut self, start: Timestamp, end: Timestamp) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Report events from the trailing `minutes` minutes
    #[must_use]
    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Cap the number of events per response page
    #[must_use]
    pub fn max_records(mut self, max_records: u32) -> Self {
        self.max_records = Some(max_records);
        self
    }

    /// Resume listing from a continuation marker
    #[must_use]
    pub fn marker(mut self, marker: &str) -> Self {
        self.marker = Some(marker.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        assert!(EventsParams::default().validate().is_ok());
    }

    #[test]
    fn max_records_is_range_checked() {
        let err = EventsParams::default().max_records(5).validate().unwrap_err();
        assert!(matches!(err, Error::RequestValidation(_)));
        assert!(EventsParams::default().max_records(20).validate().is_ok());
        assert!(EventsParams::default().max_records(100).validate().is_ok());
    }

    #[test]
    fn source_identifier_requires_source_type() {
        let ep = EventsParams {
            source_identifier: Some("my-cluster".to_string()),
            ..EventsParams::default()
        };
        assert!(matches!(ep.validate(), Err(Error::RequestValidation(_))));
        assert!(ep.source_type(SourceType::Cluster).validate().is_ok());
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let start = Timestamp::from_second(1_700_000_000).unwrap();
        let end = Timestamp::from_second(1_700_003_600).unwrap();
        assert!(EventsParams::default().between(start, end).validate().is_ok());
        assert!(matches!(
            EventsParams::default().between(end, start).validate(),
            Err(Error::RequestValidation(_))
        ));
    }
}
