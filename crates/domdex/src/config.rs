//! Template configuration

use std::path::{Path, PathBuf};

/// Environment variable overriding [`Config::view_folder`]
pub const VIEW_FOLDER_ENV: &str = "DOMDEX_VIEW_FOLDER";

/// Rendering and indexing options
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder views and partials are resolved against
    pub view_folder: PathBuf,

    /// Extension tried when a partial name has none
    pub view_extension: String,

    /// Attribute indexed by `LookupKind::TestId` (lowercase, as parsed)
    pub test_id_attribute: String,

    /// Maximum nesting of partial includes
    pub max_partial_depth: usize,
}

impl Config {
    /// Default config with the view folder taken from the environment when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(folder) = std::env::var_os(VIEW_FOLDER_ENV) {
            config.view_folder = PathBuf::from(folder);
        }
        config
    }

    pub fn with_view_folder(mut self, folder: impl AsRef<Path>) -> Self {
        self.view_folder = folder.as_ref().to_path_buf();
        self
    }

    pub fn with_view_extension(mut self, extension: &str) -> Self {
        self.view_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Attribute names come out of the parser lowercased, so this one is too
    pub fn with_test_id_attribute(mut self, attribute: &str) -> Self {
        self.test_id_attribute = attribute.to_ascii_lowercase();
        self
    }

    pub fn with_max_partial_depth(mut self, depth: usize) -> Self {
        self.max_partial_depth = depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_folder: PathBuf::from("Views"),
            view_extension: "cshtml".to_string(),
            test_id_attribute: "data-testid".to_string(),
            max_partial_depth: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_view_folder("tests/views")
            .with_view_extension(".html")
            .with_test_id_attribute("data-testId")
            .with_max_partial_depth(2);

        assert_eq!(config.view_folder, PathBuf::from("tests/views"));
        assert_eq!(config.view_extension, "html");
        assert_eq!(config.test_id_attribute, "data-testid");
        assert_eq!(config.max_partial_depth, 2);
    }

    #[test]
    fn test_from_env() {
        // SAFETY: no other test reads or writes this variable
        unsafe { std::env::set_var(VIEW_FOLDER_ENV, "/srv/app/Views") };
        let config = Config::from_env();
        assert_eq!(config.view_folder, PathBuf::from("/srv/app/Views"));
        assert_eq!(config.view_extension, "cshtml");
        assert_eq!(config.test_id_attribute, "data-testid");

        // SAFETY: as above
        unsafe { std::env::remove_var(VIEW_FOLDER_ENV) };
        assert_eq!(Config::from_env().view_folder, PathBuf::from("Views"));
    }
}
