//! Filesystem-level orchestration of a generation run.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::api::description::ApiDescription;
use crate::api::{DirectorySink, GenerateConfig, TsRenderer};
use crate::error::GenerateError;

/// Generate the client module tree for the api description at `api_path`,
/// writing under `out_dir`.
///
/// The output directory is fully replaced: any previously present files
/// are destroyed, and the resulting tree is a pure function of the
/// description. A failure mid-run may leave a partial tree behind; the
/// next successful run starts with a wipe.
pub fn generate_client(
    api_path: &Path,
    out_dir: &Path,
    config: &GenerateConfig,
) -> Result<(), GenerateError> {
    debug!(
        api_path = %api_path.display(),
        out_dir = %out_dir.display(),
        "Reading api description."
    );
    let json =
        fs::read_to_string(api_path).map_err(|err| GenerateError::io(api_path, err))?;
    let description = ApiDescription::from_json(&json)?;

    debug!(
        modules = description.modules.len(),
        "Parsed api description; generating client modules."
    );
    let renderer = TsRenderer::new(config);
    let mut sink = DirectorySink::new(out_dir);
    crate::api::generate(&description, config, &renderer, &mut sink)?;

    info!(
        out_dir = %out_dir.display(),
        modules = description.modules.len(),
        "Client modules generated successfully."
    );
    Ok(())
}
