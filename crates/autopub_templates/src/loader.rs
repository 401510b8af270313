//! File access for templates and generated workflows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use autopub_spec::WORKFLOW_FILE_PREFIX;

use crate::error::{TemplateError, TemplateResult};

/// Filesystem operations the generator needs.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Generated workflow files (`auto-publish-*.<extension>`) in `dir`.
    fn workflow_files(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;
}

/// [`TemplateFs`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl TemplateFs for LocalFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn workflow_files(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/{}*.{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            WORKFLOW_FILE_PREFIX,
            glob::Pattern::escape(extension)
        );
        debug!("Listing workflows matching {}", pattern);

        let paths = glob::glob(&pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // glob drops a leading `./`, so results are re-rooted at `dir`.
        let mut files = Vec::new();
        for entry in paths {
            let path = entry.map_err(io::Error::from)?;
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name() {
                files.push(dir.join(name));
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Read the workflow template.
pub fn load_template<F: TemplateFs + ?Sized>(fs: &F, path: &Path) -> TemplateResult<String> {
    debug!("Loading workflow template from {:?}", path);
    fs.read_to_string(path)
        .map_err(|source| TemplateError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })
}
