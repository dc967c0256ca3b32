pub mod ast;
pub mod error;
pub mod export;
pub mod options;
pub mod parser;
pub mod pipeline;
pub mod resolver;

pub use ast::{Tree, Value};
pub use error::JessyError;
pub use export::{export_tree_to_json, render_script, render_stylesheet};
pub use options::{Options, PartialOptions, Target};
pub use parser::{parse, parse_with};
pub use pipeline::{from_file, run, Jessy};
pub use resolver::{resolve, resolve_references};
