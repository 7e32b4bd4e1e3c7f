use std::path::Path;

use serde::Deserialize;

use crate::ffi::jbig2enc::{GenericRegionOptions, TemplateOffset};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Jbig2Settings {
    pub duplicate_line_removal: bool,
    pub template_x: i32,
    pub template_y: i32,
    pub use_refinement: bool,
    /// Luma values below this become mask foreground.
    pub threshold: u8,
}

impl Default for Jbig2Settings {
    fn default() -> Self {
        Jbig2Settings {
            duplicate_line_removal: true,
            template_x: -1,
            template_y: -1,
            use_refinement: false,
            threshold: 128,
        }
    }
}

impl Jbig2Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        Ok(serde_yml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn options(&self) -> GenericRegionOptions {
        GenericRegionOptions {
            duplicate_line_removal: self.duplicate_line_removal,
            template: TemplateOffset::new(self.template_x, self.template_y),
            use_refinement: self.use_refinement,
        }
    }
}
