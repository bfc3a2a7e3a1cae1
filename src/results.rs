use pep440_rs::Version;
use serde::{Serialize, Serializer};
use url::Url;

/// A release file identified by project name and version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageData {
    /// Canonical project name
    pub name: String,

    /// Version parsed from the filename
    #[serde(serialize_with = "serialize_version")]
    pub version: Version,

    /// URL the file is downloaded from
    pub source_url: Url,
}

impl PackageData {
    /// Create a new package data instance
    pub fn new(name: String, version: Version, source_url: Url) -> Self {
        Self {
            name,
            version,
            source_url,
        }
    }
}

fn serialize_version<S: Serializer>(version: &Version, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(version)
}
