//! Generation arguments.
//!
//! Typed container for the knobs config emitters need. Fields are
//! enumerated explicitly rather than copied by reflection so the
//! surface each emitter depends on is statically checkable.

use crate::id::TopoId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments shared by all config emitters in a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenArgs {
    /// Root directory for generated per-entity configuration
    pub output_dir: PathBuf,

    /// Whether the deployment uses container networking; controls how
    /// dispatcher metrics addresses are resolved
    #[serde(default)]
    pub docker: bool,

    /// Registry prefix for container images, if any
    #[serde(default)]
    pub docker_registry: Option<String>,

    /// Tag applied to container images, if any
    #[serde(default)]
    pub image_tag: Option<String>,
}

impl GenArgs {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        GenArgs {
            output_dir: output_dir.into(),
            docker: false,
            docker_registry: None,
            image_tag: None,
        }
    }

    /// Configuration directory for one entity under the output root
    pub fn config_dir(&self, topo_id: &TopoId) -> PathBuf {
        topo_id.base_dir(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let args = GenArgs::new("/out");
        let topo_id: TopoId = "1-ff00:0:110".parse().unwrap();
        assert_eq!(
            args.config_dir(&topo_id),
            PathBuf::from("/out/ASff00_0_110")
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let args: GenArgs = serde_yaml::from_str("output_dir: gen").unwrap();
        assert_eq!(args.output_dir, PathBuf::from("gen"));
        assert!(!args.docker);
        assert!(args.docker_registry.is_none());
        assert!(args.image_tag.is_none());
    }
}
