use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Minimal reader for the launcher's INI-style cfg files: `key=value`
/// lines, `[Section]` headers and `#`/`;` comments skipped, later
/// duplicates win. Section names are ignored since the launcher's keys
/// are globally unique.
pub(crate) fn read_cfg(path: &Path) -> io::Result<HashMap<String, String>> {
    let text = std::fs::read_to_string(path)?;
    let mut values = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty()
            || line.starts_with('[')
            || line.starts_with('#')
            || line.starts_with(';')
        {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(values)
}
