//! Source categories for reported events.

use std::{convert::Infallible, fmt, str::FromStr};

/// Category of the resource an [`Event`](crate::Event) was reported against.
///
/// The wire protocol treats this as an open set: values added on the service
/// side after this crate was published parse as [`SourceType::Unknown`]
/// instead of failing, so old clients keep decoding new responses.
///
/// ```
/// use redquery_core::SourceType;
/// assert_eq!(SourceType::parse("Cluster"), SourceType::Cluster);
/// assert_eq!(SourceType::parse("Bogus"), SourceType::Unknown);
/// assert_eq!(SourceType::Cluster.as_str(), "Cluster");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SourceType {
    /// A warehouse cluster.
    Cluster,
    /// A parameter group applied to clusters.
    ClusterParameterGroup,
    /// A security group controlling cluster access.
    ClusterSecurityGroup,
    /// A snapshot taken of a cluster.
    ClusterSnapshot,
    /// A subnet group clusters are provisioned into.
    ClusterSubnetGroup,
    /// A source category this crate does not know about.
    #[default]
    Unknown,
}

impl SourceType {
    /// An infallible parse of a source-type wire name.
    ///
    /// Unrecognized names map to [`SourceType::Unknown`] rather than erroring.
    pub fn parse(name: &str) -> SourceType {
        match name {
            "Cluster" => SourceType::Cluster,
            "ClusterParameterGroup" => SourceType::ClusterParameterGroup,
            "ClusterSecurityGroup" => SourceType::ClusterSecurityGroup,
            "ClusterSnapshot" => SourceType::ClusterSnapshot,
            "ClusterSubnetGroup" => SourceType::ClusterSubnetGroup,
            _ => SourceType::Unknown,
        }
    }

    /// Canonical wire name of the source type.
    ///
    /// [`SourceType::Unknown`] has no wire name and maps to the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Cluster => "Cluster",
            SourceType::ClusterParameterGroup => "ClusterParameterGroup",
            SourceType::ClusterSecurityGroup => "ClusterSecurityGroup",
            SourceType::ClusterSnapshot => "ClusterSnapshot",
            SourceType::ClusterSubnetGroup => "ClusterSubnetGroup",
            SourceType::Unknown => "",
        }
    }
}

/// An infallible FromStr implementation for more generic users
impl FromStr for SourceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SourceType::parse(s))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_variants_round_trip() {
        for name in [
            "Cluster",
            "ClusterParameterGroup",
            "ClusterSecurityGroup",
            "ClusterSnapshot",
            "ClusterSubnetGroup",
        ] {
            assert_eq!(SourceType::parse(name).as_str(), name);
        }
    }

    #[test]
    fn unrecognized_names_become_unknown() {
        assert_eq!(SourceType::parse("Bogus"), SourceType::Unknown);
        assert_eq!(SourceType::parse(""), SourceType::Unknown);
        assert_eq!("Bogus".parse::<SourceType>(), Ok(SourceType::Unknown));
    }
}
