//! Report import configuration from TOML (`[report]` section)

use reviewng_application::ImportParams;
use serde::{Deserialize, Serialize};

/// Raw report import configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    /// URL returning one reported revision id per line
    pub url: String,
    /// Group that receives imported edits
    pub group_name: String,
    /// Votes required to settle an imported edit
    pub default_required: u32,
}

impl Default for FileReportConfig {
    fn default() -> Self {
        let params = ImportParams::default();
        Self {
            url: "https://cluebotng.toolforge.org/api.php".to_string(),
            group_name: params.group_name,
            default_required: params.default_required,
        }
    }
}

impl FileReportConfig {
    pub fn to_import_params(&self) -> ImportParams {
        ImportParams::default()
            .with_group_name(self.group_name.clone())
            .with_default_required(self.default_required)
    }
}
