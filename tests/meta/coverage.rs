//! Layout checks keeping `src/<area>/<module>.rs` and `tests/unit` in step

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Module organisation and target roots carry no tests of their own
    fn is_structural(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("lib.rs" | "main.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file below `root`, relative to it
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).map_err(io::Error::other)?;
                    found.insert(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn modules(root: &str) -> io::Result<BTreeSet<PathBuf>> {
        Ok(rust_files(Path::new(root))?
            .into_iter()
            .filter(|path| !is_structural(path))
            .collect())
    }

    fn listing(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each src module has a unit test file at the same relative path
    // Verified by deleting tests/unit/figure/cut.rs
    #[test]
    fn test_every_module_has_unit_tests() -> io::Result<()> {
        let sources = modules(SRC)?;
        let units = modules(UNIT)?;
        let missing: Vec<&PathBuf> = sources.difference(&units).collect();

        assert!(
            missing.is_empty(),
            "src modules without tests/unit counterparts:\n{}",
            listing(&missing)
        );
        Ok(())
    }

    // Tests unit test files do not outlive the module they cover
    #[test]
    fn test_unit_tests_have_modules() -> io::Result<()> {
        let sources = modules(SRC)?;
        let units = modules(UNIT)?;
        let orphaned: Vec<&PathBuf> = units.difference(&sources).collect();

        assert!(
            orphaned.is_empty(),
            "tests/unit files with no src module:\n{}",
            listing(&orphaned)
        );
        Ok(())
    }

    // Tests the unit target root declares every src area
    // Verified by dropping `mod scene;` from tests/unit/main.rs
    #[test]
    fn test_unit_root_declares_areas() -> io::Result<()> {
        let root = fs::read_to_string(Path::new(UNIT).join("main.rs"))?;
        for entry in fs::read_dir(SRC)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            let Some(area) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            assert!(
                root.contains(&format!("mod {area};")),
                "tests/unit/main.rs does not declare `mod {area};`"
            );
        }
        Ok(())
    }

    // Tests non-structural files under tests/ contain test functions
    #[test]
    fn test_test_files_contain_tests() -> io::Result<()> {
        let mut empty = Vec::new();
        for path in rust_files(Path::new("tests"))? {
            if is_structural(&path) {
                continue;
            }
            let content = fs::read_to_string(Path::new("tests").join(&path))?;
            if !content.contains("#[test]") {
                empty.push(path);
            }
        }

        assert!(
            empty.is_empty(),
            "test files without #[test] functions:\n{}",
            listing(&empty.iter().collect::<Vec<_>>())
        );
        Ok(())
    }
}
