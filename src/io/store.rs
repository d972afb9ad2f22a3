// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Loading and saving figure files.
//!
//! The format is chosen from the file extension here, at the file
//! boundary. A missing file or an unsupported extension is logged and
//! treated as an empty result; every other failure is returned.

use super::serialization::Format;
use crate::error::Result;
use std::path::Path;

/// Load `Label: value` lines from a figure file.
///
/// Returns no lines if the file does not exist or its extension is not
/// one of `.txt`, `.json` or `.xml`.
pub fn load(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        log::error!("File not found: {}", path.display());
        return Ok(Vec::new());
    }

    let Some(format) = Format::from_path(path) else {
        log::error!("Unsupported file format: {}", path.display());
        return Ok(Vec::new());
    };

    let contents = std::fs::read_to_string(path)?;
    let lines = format.decode(&contents)?;
    log::info!("Loaded {} lines from {} ({:?})", lines.len(), path.display(), format);
    Ok(lines)
}

/// Save `Label: value` lines to a figure file.
///
/// Writes nothing if the extension is not supported.
pub fn save<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let Some(format) = Format::from_path(path) else {
        log::error!("Unsupported file format: {}", path.display());
        return Ok(());
    };

    let contents = format.encode(lines)?;
    std::fs::write(path, contents)?;
    log::info!("Saved {} ({:?})", path.display(), format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::figure::Figure;
    use tempfile::TempDir;

    const BOX: [&str; 3] = ["Name: Box", "Width: 3", "Height: 4"];

    #[test]
    fn test_text_save_load_exact_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r.txt");

        save(&path, &BOX).unwrap();
        assert_eq!(load(&path).unwrap(), BOX);
    }

    #[test]
    fn test_json_save_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r.json");

        save(&path, &BOX).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({"Name": "Box", "Width": 3, "Height": 4}));
        assert_eq!(load(&path).unwrap(), BOX);
    }

    #[test]
    fn test_roundtrip_each_format() {
        let dir = TempDir::new().unwrap();
        let figure = Figure::new("Tall: thin", 7, -12);

        for file_name in ["f.txt", "f.json", "f.xml", "F.XML"] {
            let path = dir.path().join(file_name);
            save(&path, &figure.to_lines()).unwrap();
            let loaded = Figure::from_lines(&load(&path).unwrap()).unwrap();
            assert_eq!(loaded, figure, "roundtrip through {}", file_name);
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let lines = load(&dir.path().join("absent.json")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_unsupported_extension_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r.yaml");

        save(&path, &BOX).unwrap();
        assert!(!path.exists());

        std::fs::write(&path, "Name: Box\nWidth: 3\nHeight: 4\n").unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_xml_generic_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.xml");
        std::fs::write(&path, "<Root><A>1</A><B>two</B><C/><D>x</D></Root>").unwrap();

        assert_eq!(load(&path).unwrap(), vec!["A: 1", "B: two", "C: ", "D: x"]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn test_malformed_lines_do_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r.json");

        assert!(save(&path, &["Name: Box"]).is_err());
        assert!(!path.exists());
    }
}
