//! Deployment functions used across test cases.

use std::path::PathBuf;

pub const STATIC_DEPLOYMENT_PATH: &str = "static/";

/// Find the project root via the crate root provided by `cargo test`.
/// This depends on the convention that all our crates live in `/crates/<group>/<name>`
/// or `/crates/<name>`, so we walk up until we find the deployment directory.
pub fn get_path_from_project_root(deployment_path: &str) -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .map(|dir| dir.join(deployment_path))
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| manifest_dir.join("../../..").join(deployment_path))
}
