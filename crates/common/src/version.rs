use std::fmt;

use serde::Serialize;

/// Build metadata captured by `build.rs` at compile time.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub build_profile: &'static str,
    pub build_features: &'static str,
    pub build_timestamp: &'static str,
    pub rust_version: &'static str,
    pub version: &'static str,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version: {}\nprofile: {}\nfeatures: {}\nbuilt: {}\nrustc: {}",
            self.version,
            self.build_profile,
            self.build_features,
            self.build_timestamp,
            self.rust_version
        )
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        build_profile: env!("BUILD_PROFILE"),
        build_features: env!("BUILD_FEATURES"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        rust_version: env!("RUST_VERSION"),
        version: env!("REPO_VERSION"),
    }
}
