use std::path::PathBuf;

use crate::Args;

/// Solver run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub images: Vec<PathBuf>,
    #[allow(dead_code)]
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            images: args.images,
            log_level: args.log_level,
        }
    }
}
