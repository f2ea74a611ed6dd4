use anyhow::{Context, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

use crate::Result;
use crate::env::{HelperEnv, HelperEnvKey};

const MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// The directory, relative to the project root, where `npm run build`
/// leaves the built template content.
pub const BUILD_OUTPUT_DIR_NAME: &str = "dist";

/// The `node --version` prefix this project is known to build with.
pub const DEFAULT_NODE_VERSION_PREFIX: &str = "v14.17.";

/// Everything the actions need to know about where they run,
/// resolved once at startup.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    project_root: Utf8PathBuf,
    build_dir: Utf8PathBuf,
    node_version_prefix: String,
    env: HelperEnv,
}

impl BuildConfig {
    pub fn new(env: HelperEnv) -> Result<Self> {
        let project_root = match env.get(HelperEnvKey::ProjectRoot) {
            Some(root) => Utf8PathBuf::from(root),
            None => Utf8PathBuf::from(MANIFEST_DIR),
        };
        let project_root = canonicalize(&project_root)?;
        let build_dir = project_root.join(BUILD_OUTPUT_DIR_NAME);
        let node_version_prefix = env
            .get(HelperEnvKey::NodeVersion)
            .unwrap_or(DEFAULT_NODE_VERSION_PREFIX)
            .to_string();

        tracing::debug!(%project_root, %build_dir, %node_version_prefix);
        Ok(Self {
            project_root,
            build_dir,
            node_version_prefix,
            env,
        })
    }

    pub fn project_root(&self) -> &Utf8Path {
        &self.project_root
    }

    pub fn build_dir(&self) -> &Utf8Path {
        &self.build_dir
    }

    pub fn node_version_prefix(&self) -> &str {
        &self.node_version_prefix
    }

    pub fn env(&self) -> &HelperEnv {
        &self.env
    }
}

fn canonicalize(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let resolved = dunce::canonicalize(path)
        .with_context(|| format!("Could not find the project root at `{path}`."))?;
    Utf8PathBuf::from_path_buf(resolved)
        .map_err(|p| anyhow!("The project root `{}` is not valid UTF-8.", p.display()))
}
