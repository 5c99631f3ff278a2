use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Чтение списка авторов: по одному на строку.
///
/// Строки, начинающиеся с `#`, пропускаются; `#` внутри имени сохраняется.
///
/// Результат отсортирован и без повторов. Регистр сохраняется:
/// имена сравниваются точно.
pub fn read_authors<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let mut set = BTreeSet::new();
    let buf = BufReader::new(reader);

    for line in buf.lines() {
        let line = line?;
        if let Some(a) = normalize_line(&line) {
            set.insert(a);
        }
    }

    Ok(set.into_iter().collect())
}

/// Чтение списка авторов из файла
pub fn read_authors_from_path(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let f = File::open(path)?;
    read_authors(f)
}

fn normalize_line(line: &str) -> Option<String> {
    let s = line.trim();
    if s.is_empty() || s.starts_with('#') {
        return None;
    }

    Some(s.to_string())
}
