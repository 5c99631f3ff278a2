use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Args;

#[derive(Debug, Error)]
pub(crate) enum AuthorsError {
    #[error("authors list is empty (file: {path:?})")]
    EmptyFromFile { path: PathBuf },

    #[error("failed to read authors file: {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) type Result<T> = std::result::Result<T, AuthorsError>;

/// Собирает список запросов из CLI:
/// - `--author` в порядке указания
/// - `--authors-file` -> quote_core::authors::read_authors_from_path
/// - `--random N`     -> N пустых авторов
pub(crate) fn load_requests(args: &Args) -> Result<Vec<String>> {
    let mut out = args.authors.clone();

    if let Some(path) = &args.authors_file {
        out.extend(load_from_file(path)?);
    }

    out.extend(std::iter::repeat_n(String::new(), args.random));

    Ok(out)
}

fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref().to_path_buf();

    let authors = quote_core::authors::read_authors_from_path(&path).map_err(|e| {
        AuthorsError::ReadFile {
            path: path.clone(),
            source: e,
        }
    })?;

    if authors.is_empty() {
        return Err(AuthorsError::EmptyFromFile { path });
    }

    Ok(authors)
}
