//! Path resolution: input path -> identifier name and output locations.

use std::path::{Component, Path, PathBuf};

use crate::errors::CoreError;

/// Directory and file-name conventions for generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    /// Directory created beside the source file (`__tests__`).
    pub tests_dir: String,
    /// Middle segment of the fixture file name (`<name>.test_cases.<ext>`).
    pub fixture_suffix: String,
    /// Middle segment of the test file name (`<name>.test.<ext>`).
    pub test_suffix: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            tests_dir: "__tests__".to_string(),
            fixture_suffix: "test_cases".to_string(),
            test_suffix: "test".to_string(),
        }
    }
}

/// Naming metadata derived once from the input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPaths {
    /// Exported identifier the component is imported under (`UserCard`).
    pub identifier_name: String,
    pub source_path: PathBuf,
    /// File stem of the source (`user_card`).
    pub source_base_name: String,
    /// Source extension without the dot, reused for both outputs.
    pub extension: String,
    pub test_directory: PathBuf,
    pub fixture_file_path: PathBuf,
    pub test_file_path: PathBuf,
    fixture_suffix: String,
}

impl ComponentPaths {
    /// Derive all naming fields from a component source path.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPath`] when the path has no file name and
    /// [`CoreError::MissingExtension`] when it has no extension.
    pub fn resolve(path: &Path, naming: &NamingConvention) -> Result<Self, CoreError> {
        let display = path.display().to_string();
        let base_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::InvalidPath(display.clone()))?
            .to_string();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or(CoreError::MissingExtension(display))?
            .to_string();

        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        let test_directory = parent.join(&naming.tests_dir);
        let fixture_file_path =
            test_directory.join(format!("{base_name}.{}.{extension}", naming.fixture_suffix));
        let test_file_path =
            test_directory.join(format!("{base_name}.{}.{extension}", naming.test_suffix));

        Ok(Self {
            identifier_name: identifier_name(&base_name),
            source_path: path.to_path_buf(),
            source_base_name: base_name,
            extension,
            test_directory,
            fixture_file_path,
            test_file_path,
            fixture_suffix: naming.fixture_suffix.clone(),
        })
    }

    /// Module specifier of the fixture file as seen from the test file.
    #[must_use]
    pub fn fixture_module_specifier(&self) -> String {
        format!("./{}.{}", self.source_base_name, self.fixture_suffix)
    }

    /// Module specifier of the component as seen from the test directory.
    #[must_use]
    pub fn component_module_specifier(&self) -> String {
        format!("../{}", self.source_base_name)
    }

    /// `..` prefix leading from the test directory back to the project root.
    ///
    /// One `..` per normal segment of the test directory; `.` segments do
    /// not count and `..` segments cancel a preceding one.
    #[must_use]
    pub fn project_root_prefix(&self) -> String {
        let mut depth = 0usize;
        for component in self.test_directory.components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::ParentDir => depth = depth.saturating_sub(1),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
        vec![".."; depth].join("/")
    }
}

/// Derive the exported identifier from a file stem.
///
/// Upper-cases the first character and turns every `_x` boundary (with `x`
/// lowercase) into `X`. Other characters pass through untouched.
#[must_use]
pub fn identifier_name(base_name: &str) -> String {
    let mut out = String::with_capacity(base_name.len());
    let mut chars = base_name.chars().peekable();

    if let Some(first) = chars.next_if(|c| c.is_lowercase()) {
        out.extend(first.to_uppercase());
    }

    while let Some(c) = chars.next() {
        if c == '_'
            && let Some(next) = chars.peek().copied()
            && next.is_lowercase()
        {
            chars.next();
            out.extend(next.to_uppercase());
            continue;
        }
        out.push(c);
    }
    out
}
