//! Template compilation.
//!
//! Templates are user-supplied Tera sources: a set of named partial
//! fragments plus one main template per output class. Partials register
//! first, in the order configured, into a single shared namespace; the main
//! template parses last and can `{% include %}` or `{% extends %}` any of
//! them. Registering the same name twice is a compile error, not a silent
//! override.
//!
//! Every compile carries the same helper set: Tera's built-in formatting and
//! escaping filters, plus two of our own —
//!
//! - `slugify`: the same reduction used for post URLs, so templates can
//!   build anchors from titles
//! - `markdown`: CommonMark → HTML for free-text comment bodies (pair with
//!   `safe` to emit the result unescaped)
//!
//! A [`CompiledTemplate`] is immutable and safe to execute repeatedly —
//! rendering the same context twice produces byte-identical output.

use crate::naming;
use pulldown_cmark::{Parser, html as md_html};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse template {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: tera::Error,
    },
    #[error("template {name} defined more than once")]
    DuplicateName { name: String },
    #[error("failed to render template {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// A compiled main template plus its partial namespace.
pub struct CompiledTemplate {
    tera: Tera,
    main: String,
}

impl CompiledTemplate {
    /// Execute against a context. Same context in, same bytes out.
    pub fn render(&self, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(&self.main, context)
            .map_err(|source| TemplateError::Render {
                name: self.main.clone(),
                source,
            })
    }
}

/// Read each partial file into a `(name, contents)` pair.
///
/// The name is the file's base name — what `{% include %}` refers to.
pub fn read_partials(paths: &[PathBuf]) -> Result<Vec<(String, String)>, TemplateError> {
    let mut partials = Vec::with_capacity(paths.len());
    for path in paths {
        let contents = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.clone(),
            source,
        })?;
        partials.push((template_name(path), contents));
    }
    Ok(partials)
}

/// Compile the template at `main_path` against the given partial fragments.
pub fn compile(
    main_path: &Path,
    partials: &[(String, String)],
) -> Result<CompiledTemplate, TemplateError> {
    let mut tera = Tera::default();
    tera.register_filter("slugify", slugify_filter);
    tera.register_filter("markdown", markdown_filter);

    let mut seen = HashSet::new();
    for (name, contents) in partials {
        if !seen.insert(name.clone()) {
            return Err(TemplateError::DuplicateName { name: name.clone() });
        }
        tera.add_raw_template(name, contents)
            .map_err(|source| TemplateError::Parse {
                name: name.clone(),
                source,
            })?;
    }

    let main = template_name(main_path);
    if seen.contains(&main) {
        return Err(TemplateError::DuplicateName { name: main });
    }
    let contents = fs::read_to_string(main_path).map_err(|source| TemplateError::Read {
        path: main_path.to_path_buf(),
        source,
    })?;
    tera.add_raw_template(&main, &contents)
        .map_err(|source| TemplateError::Parse {
            name: main.clone(),
            source,
        })?;

    Ok(CompiledTemplate { tera, main })
}

/// Templates are addressed by base name; `.html` names get auto-escaping.
fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn slugify_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let input = tera::try_get_value!("slugify", "value", String, value);
    Ok(Value::String(naming::slugify(&input)))
}

fn markdown_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let input = tera::try_get_value!("markdown", "value", String, value);
    let mut html = String::new();
    md_html::push_html(&mut html, Parser::new(&input));
    Ok(Value::String(html))
}
