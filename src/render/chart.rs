use std::fs;
use std::path::Path;

use crate::render::RenderError;

/// A figure that can be serialised to SVG.
pub trait Chart {
    fn render(&self) -> Result<String, RenderError>;

    /// Renders and writes the figure, creating parent directories.
    fn save(&self, path: &Path) -> Result<(), RenderError> {
        let svg = self.render()?;
        let io_err = |source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, svg).map_err(io_err)
    }
}
