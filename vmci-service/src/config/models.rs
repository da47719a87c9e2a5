use serde::{Deserialize, Serialize};

/// Centralized version configuration consumed by the matrix generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionsConfig {
    /// Versions the project actively builds and tests against.
    pub supported_versions: Vec<VersionDescriptor>,
    /// Pre-release versions, only included in the matrix on request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upcoming_versions: Vec<VersionDescriptor>,
}

/// One OS version entry from the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionDescriptor {
    pub version: String,
    #[serde(default)]
    pub lts: Option<String>,
    pub image_offer: String,
    pub image_sku: String,
    /// Runtime version expected to ship with this OS version.
    pub python: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pre_release_image: Option<PreReleaseImage>,
}

/// Alternate image coordinates for versions that only exist as daily builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreReleaseImage {
    pub offer: String,
    pub sku: String,
}

impl VersionDescriptor {
    /// The LTS label, falling back to the plain version identifier.
    pub fn lts_label(&self) -> &str {
        self.lts.as_deref().unwrap_or(&self.version)
    }

    /// Whether this version is marked as actively maintained.
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }
}
