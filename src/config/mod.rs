pub mod settings;

use settings::Jbig2Settings;
use std::path::Path;

/// File name looked up by [`load_settings_in`].
pub const SETTINGS_FILE_NAME: &str = "jbig2.yaml";

/// Load `jbig2.yaml` from `dir`.
///
/// Returns the default settings when the file does not exist.
pub fn load_settings_in(dir: &Path) -> crate::error::Result<Jbig2Settings> {
    let settings_path = dir.join(SETTINGS_FILE_NAME);

    if settings_path.exists() {
        Jbig2Settings::from_file(&settings_path)
    } else {
        Ok(Jbig2Settings::default())
    }
}
