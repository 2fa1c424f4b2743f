use crate::grid::Position;
use crate::grid_errors::{GridError, GridResult};
use log::warn;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the mesh demo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Shape of the demo mesh: one row per file letter, `ranks` columns each
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    /// File letters, bottom row first
    pub files: String,
    pub ranks: i32,
    pub root: Position,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            files: "ABC".to_string(),
            ranks: 7,
            root: Position::new('A', 1),
        }
    }
}

impl MeshConfig {
    pub fn new(files: &str, ranks: i32) -> Self {
        let root = Position::new(files.chars().next().unwrap_or('A'), 1);
        Self {
            files: files.to_string(),
            ranks,
            root,
        }
    }

    pub fn file_letters(&self) -> Vec<char> {
        self.files.chars().collect()
    }

    pub fn cell_count(&self) -> usize {
        self.files.chars().count() * self.ranks.max(0) as usize
    }

    /// Check the mesh has a shape and the root lies inside it
    pub fn validate(&self) -> GridResult<()> {
        let files = self.file_letters();
        if files.is_empty() {
            return Err(GridError::ConfigurationError(
                "at least one file letter is required".to_string(),
            ));
        }
        if self.ranks <= 0 {
            return Err(GridError::ConfigurationError(
                "ranks must be positive".to_string(),
            ));
        }

        let mut seen = files.clone();
        seen.sort_unstable();
        seen.dedup();
        if seen.len() != files.len() {
            return Err(GridError::ConfigurationError(format!(
                "duplicate file letters in '{}'",
                self.files
            )));
        }

        let root = self.root;
        if !files.contains(&root.file) || root.rank < 1 || root.rank > self.ranks {
            return Err(GridError::ConfigurationError(format!(
                "root {} is outside the {}x{} mesh",
                root,
                files.len(),
                self.ranks
            )));
        }

        Ok(())
    }
}

/// Diagnostic output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print section headings before each report
    pub show_headers: bool,
    /// Colour section headings
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_headers: true,
            color: true,
        }
    }
}

impl GridConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: GridConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(files) = std::env::var("LINK_GRID_FILES") {
            if !files.trim().is_empty() {
                config.mesh.files = files.trim().to_string();
                // Keep the root on the new bottom row unless told otherwise
                config.mesh.root = MeshConfig::new(&config.mesh.files, config.mesh.ranks).root;
            }
        }
        if let Ok(ranks) = std::env::var("LINK_GRID_RANKS") {
            match ranks.trim().parse::<i32>() {
                Ok(ranks) => config.mesh.ranks = ranks,
                Err(e) => warn!(
                    "Ignoring LINK_GRID_RANKS='{}' ({}), keeping {}",
                    ranks, e, config.mesh.ranks
                ),
            }
        }
        if let Ok(root) = std::env::var("LINK_GRID_ROOT") {
            match root.parse::<Position>() {
                Ok(root) => config.mesh.root = root,
                Err(e) => warn!(
                    "Ignoring LINK_GRID_ROOT='{}' ({}), keeping {}",
                    root, e, config.mesh.root
                ),
            }
        }
        if let Ok(color) = std::env::var("LINK_GRID_COLOR") {
            config.display.color = color.to_lowercase() == "true";
        }

        config
    }

    /// Validate configuration values
    pub fn validate(&self) -> GridResult<()> {
        self.mesh.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_three_by_seven() {
        let config = GridConfig::default();
        assert_eq!(config.mesh.file_letters(), vec!['A', 'B', 'C']);
        assert_eq!(config.mesh.ranks, 7);
        assert_eq!(config.mesh.root, Position::new('A', 1));
        assert_eq!(config.mesh.cell_count(), 21);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        let mut config = GridConfig::default();
        config.mesh.ranks = 0;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.mesh.files = String::new();
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.mesh.files = "ABA".to_string();
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.mesh.root = Position::new('D', 1);
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.mesh.root = Position::new('B', 8);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let path =
            std::env::temp_dir().join(format!("link_grid_config_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        let mut config = GridConfig::default();
        config.mesh = MeshConfig::new("XY", 3);
        config.display.color = false;
        config.save_to_file(&path).unwrap();

        let loaded = GridConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.mesh.files, "XY");
        assert_eq!(loaded.mesh.ranks, 3);
        assert_eq!(loaded.mesh.root, Position::new('X', 1));
        assert!(!loaded.display.color);
    }

    #[test]
    fn test_from_env_falls_back_on_unparsable_values() {
        // Only this test touches the LINK_GRID_* variables
        std::env::set_var("LINK_GRID_RANKS", "seven");
        std::env::set_var("LINK_GRID_ROOT", "A?");
        let config = GridConfig::from_env();
        std::env::remove_var("LINK_GRID_RANKS");
        std::env::remove_var("LINK_GRID_ROOT");

        assert_eq!(config.mesh.ranks, 7);
        assert_eq!(config.mesh.root, Position::new('A', 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "display": { "show_headers": false, "color": false } }"#;
        let config: GridConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mesh.ranks, 7);
        assert!(!config.display.show_headers);
    }
}
