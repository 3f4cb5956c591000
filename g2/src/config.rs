use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{G2Error, Result};

/// Tunables of the G2 scalar multiplication and decoding paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct G2Config {
    /// Window width of the plain wNAF multiplication
    pub wnaf_window: usize,

    /// Window width of both halves in the GLV multiplication
    pub glv_window: usize,

    /// Route `wnaf_mul` through the GLV decomposition.
    /// Only valid for points of the prime-order subgroup.
    pub use_glv: bool,

    /// Bucket window of MultiExp, chosen from the batch size when unset
    pub multiexp_window: Option<usize>,

    /// Reject compressed/uncompressed encodings outside the prime-order subgroup
    pub subgroup_check: bool,
}

impl Default for G2Config {
    fn default() -> Self {
        Self {
            wnaf_window: 5,
            glv_window: 4,
            use_glv: true,
            multiexp_window: None,
            subgroup_check: true,
        }
    }
}

impl G2Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: G2Config =
            toml::from_str(s).map_err(|e| G2Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        debug!("Loaded G2 configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            G2Error::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=16).contains(&self.wnaf_window) {
            return Err(G2Error::InvalidConfig(format!(
                "wnaf_window must be in 2..=16, got {}",
                self.wnaf_window
            )));
        }
        if !(2..=16).contains(&self.glv_window) {
            return Err(G2Error::InvalidConfig(format!(
                "glv_window must be in 2..=16, got {}",
                self.glv_window
            )));
        }
        if let Some(c) = self.multiexp_window {
            if !(1..=16).contains(&c) {
                return Err(G2Error::InvalidConfig(format!(
                    "multiexp_window must be in 1..=16, got {c}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(G2Config::default().validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = G2Config::from_toml_str(
            r#"
            wnaf_window = 6
            use_glv = false
            multiexp_window = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.wnaf_window, 6);
        assert_eq!(config.glv_window, 4);
        assert!(!config.use_glv);
        assert_eq!(config.multiexp_window, Some(8));
        assert!(config.subgroup_check);

        assert_eq!(G2Config::from_toml_str("").unwrap(), G2Config::default());
    }

    #[test]
    fn test_rejects_bad_windows() {
        assert!(matches!(
            G2Config::from_toml_str("wnaf_window = 1"),
            Err(G2Error::InvalidConfig(_))
        ));
        assert!(matches!(
            G2Config::from_toml_str("glv_window = 17"),
            Err(G2Error::InvalidConfig(_))
        ));
        assert!(matches!(
            G2Config::from_toml_str("multiexp_window = 0"),
            Err(G2Error::InvalidConfig(_))
        ));
        assert!(matches!(
            G2Config::from_toml_str("unknown_key = true"),
            Err(G2Error::InvalidConfig(_))
        ));
    }
}
