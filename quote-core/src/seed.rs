use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::SeedFileError;

/// Одна запись seed-файла: автор и его цитата.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    /// имя автора, без пробелов по краям
    pub author: String,
    /// текст цитаты
    pub quote: String,
}

/// Читает seed-файл формата `Автор | цитата`, по одной цитате на строку.
///
/// Пустые строки и строки, начинающиеся с `#`, пропускаются.
/// Порядок записей сохраняется.
pub fn read_quotes<R: io::Read>(reader: R) -> Result<Vec<SeedEntry>, SeedFileError> {
    let buf = BufReader::new(reader);
    let mut out = Vec::new();

    for (idx, line) in buf.lines().enumerate() {
        let line = line?;
        if let Some(entry) = parse_line(&line, idx + 1)? {
            out.push(entry);
        }
    }

    Ok(out)
}

/// Чтение seed-файла с диска
pub fn read_quotes_from_path(path: impl AsRef<Path>) -> Result<Vec<SeedEntry>, SeedFileError> {
    let f = File::open(path)?;
    read_quotes(f)
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<SeedEntry>, SeedFileError> {
    let s = line.trim();
    if s.is_empty() || s.starts_with('#') {
        return Ok(None);
    }

    // '#' внутри цитаты — часть текста, поэтому inline-комментариев нет
    let (author, quote) = s
        .split_once('|')
        .ok_or(SeedFileError::MissingSeparator { line: line_no })?;

    let author = author.trim();
    if author.is_empty() {
        return Err(SeedFileError::EmptyAuthor { line: line_no });
    }

    let quote = quote.trim();
    if quote.is_empty() {
        return Err(SeedFileError::EmptyQuote { line: line_no });
    }

    Ok(Some(SeedEntry {
        author: author.to_string(),
        quote: quote.to_string(),
    }))
}
