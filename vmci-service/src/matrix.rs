// Job Matrix Generation
// Derives CI job-matrix entries from the version configuration

use crate::config::{VersionDescriptor, VersionsConfig};
use serde::{Deserialize, Serialize};

/// One row of the CI job matrix: a single OS-version build/test target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub ubuntu_version: String,
    pub ubuntu_lts: String,
    pub image_offer: String,
    pub image_sku: String,
    pub python_expected: String,
    pub continue_on_error: bool,
}

/// Job matrix in the shape the CI orchestrator consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatrix {
    pub include: Vec<MatrixEntry>,
}

impl JobMatrix {
    /// Build the matrix: supported versions first, in configuration
    /// order, followed by upcoming versions when requested.
    pub fn generate(config: &VersionsConfig, include_upcoming: bool) -> Self {
        let mut include: Vec<MatrixEntry> = config
            .supported_versions
            .iter()
            .map(supported_entry)
            .collect();

        if include_upcoming {
            include.extend(config.upcoming_versions.iter().map(upcoming_entry));
        }

        JobMatrix { include }
    }

    /// Serialize to the single-line JSON document the orchestrator expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn supported_entry(version: &VersionDescriptor) -> MatrixEntry {
    MatrixEntry {
        ubuntu_version: version.version.clone(),
        ubuntu_lts: version.lts_label().to_string(),
        image_offer: version.image_offer.clone(),
        image_sku: version.image_sku.clone(),
        python_expected: version.python.clone(),
        // Only active versions may fail the build
        continue_on_error: !version.is_active(),
    }
}

fn upcoming_entry(version: &VersionDescriptor) -> MatrixEntry {
    // Prefer the pre-release image when one is published
    let (image_offer, image_sku) = match &version.pre_release_image {
        Some(image) => (image.offer.clone(), image.sku.clone()),
        None => (version.image_offer.clone(), version.image_sku.clone()),
    };

    MatrixEntry {
        ubuntu_version: version.version.clone(),
        ubuntu_lts: version.lts_label().to_string(),
        image_offer,
        image_sku,
        python_expected: version.python.clone(),
        continue_on_error: true,
    }
}
