use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::error;

/// One entry of the build-codes config file. `code` may be null or
/// absent for builds whose code was never filled in.
#[derive(Debug, Deserialize)]
pub struct BuildCode {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Deserialize)]
struct BuildCodeFile {
    #[serde(default)]
    build_codes: Vec<BuildCode>,
}

/// Load `(name, code)` pairs from a JSON config file. A missing file or
/// malformed JSON is logged and yields an empty list — batch semantics,
/// nothing to process.
pub fn load_build_codes(path: &Path) -> Vec<BuildCode> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            error!("File not found: {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<BuildCodeFile>(&data) {
        Ok(file) => file.build_codes,
        Err(e) => {
            error!("Failed to decode JSON from file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
