// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::ast::Tree;
use crate::options::Options;
use crate::{export, parser, resolver, JessyError};

/// Compile jessy source text to the target selected in `options`.
///
/// Parses with `options.tab`, resolves references unless `options.solve`
/// is off, then renders.
///
/// # Examples
/// ```
/// use jessy::{run, Options, Target};
///
/// let out = run("some: thing\nother: $some", &Options::default()).unwrap();
/// assert_eq!(out, "var some = 'thing',\n    other = 'thing';");
///
/// let sass = Options::default().with_target(Target::Sass);
/// assert_eq!(run("gap: 4px", &sass).unwrap(), "$gap: 4px;");
/// ```
pub fn run(input: &str, options: &Options) -> Result<String, JessyError> {
    let tree = load(input, options)?;
    Ok(export::render(&tree, options))
}

/// Read a jessy file and compile it with [`run`].
///
/// A leading `~/` is expanded to the home directory.
///
/// # Errors
/// Returns [`JessyError::FileError`] if the file cannot be read, or any
/// error [`run`] produces.
pub fn from_file<P: AsRef<Path>>(path: P, options: &Options) -> Result<String, JessyError> {
    let content = read_source(path)?;
    run(&content, options)
}

/// Parse and resolve without rendering.
pub(crate) fn load(input: &str, options: &Options) -> Result<Tree, JessyError> {
    let tree = parser::parse_with(input, options)?;
    Ok(resolver::resolve(tree, options))
}

/// Read a source file, expanding a leading `~/`.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, JessyError> {
    let path = expand_home(path.as_ref())?;
    debug!("reading {}", path.display());
    fs::read_to_string(&path).map_err(|e| JessyError::from_io_error(&e, &path))
}

/// Expand "~/" against the user's home directory.
fn expand_home(path: &Path) -> Result<PathBuf, JessyError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| JessyError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: path.to_string_lossy().to_string(),
        kind: std::io::ErrorKind::NotFound,
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}

/// Holds one set of options for compiling many inputs.
///
/// # Example
/// ```
/// use jessy::{Jessy, Options};
///
/// let jessy = Jessy::new(Options::default().with_namespace("theme"));
/// assert_eq!(jessy.run("gap: 4").unwrap(), "var theme = {\n    gap: 4\n};");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Jessy {
    options: Options,
}

impl Jessy {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn run(&self, input: &str) -> Result<String, JessyError> {
        run(input, &self.options)
    }

    pub fn from_file<P: AsRef<Path>>(&self, path: P) -> Result<String, JessyError> {
        from_file(path, &self.options)
    }

    /// Parse and resolve `input` into a tree, without rendering it.
    pub fn parse(&self, input: &str) -> Result<Tree, JessyError> {
        load(input, &self.options)
    }

    /// Parse and resolve `input`, then export the tree as JSON.
    pub fn to_json(&self, input: &str) -> Result<String, JessyError> {
        export::export_tree_to_json(&self.parse(input)?)
    }
}
