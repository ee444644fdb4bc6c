use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_DIR: &str = "data";
pub const DATASET_FILE: &str = "layers.json";
pub const INDEX_FILE: &str = "index.json";

/// Where the dataset is read from and where the index is written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl IndexerConfig {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Self {
        Self { input_path: input_path.as_ref().to_path_buf(), output_path: output_path.as_ref().to_path_buf() }
    }

    /// `<base>/data/layers.json` in, `<base>/data/index.json` out.
    pub fn from_base_dir<P: AsRef<Path>>(base: P) -> Self {
        let data = base.as_ref().join(DATA_DIR);
        Self { input_path: data.join(DATASET_FILE), output_path: data.join(INDEX_FILE) }
    }

    pub fn with_input(mut self, input_path: Option<PathBuf>) -> Self {
        if let Some(p) = input_path { self.input_path = p; }
        self
    }

    pub fn with_output(mut self, output_path: Option<PathBuf>) -> Self {
        if let Some(p) = output_path { self.output_path = p; }
        self
    }
}

impl Default for IndexerConfig {
    fn default() -> Self { Self::from_base_dir(".") }
}
