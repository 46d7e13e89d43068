use std::collections::HashSet;
use std::path::Path;

/// Extensions commonly used for ROM dumps and disc images.
const COMMON_ROM_EXTENSIONS: &[&str] = &[
    "zip", "7z", "iso", "bin", "cue", "nes", "sfc", "smc", "md", "gba", "gbc", "gb", "pce",
];

/// Case-insensitive set of allowed file extensions.
///
/// Entries are stored lowercase without the leading dot, so `"sfc"`, `".sfc"`
/// and `".SFC"` all name the same extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    allowed: HashSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = extensions
            .into_iter()
            .map(|ext| normalize(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();

        Self { allowed }
    }

    pub fn common_roms() -> Self {
        Self::new(COMMON_ROM_EXTENSIONS)
    }

    /// Whether the file at `path` has an allowed extension.
    /// Files without an extension never pass a filter.
    pub fn allows(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| self.allowed.contains(&normalize(&ext.to_string_lossy())))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_regardless_of_dot_and_case() {
        let filter = ExtensionFilter::new([".SFC", "nes"]);
        assert_eq!(filter.len(), 2);
        assert!(filter.allows(Path::new("Game.sfc")));
        assert!(filter.allows(Path::new("roms/Game (USA).SfC")));
        assert!(filter.allows(Path::new("Game.NES")));
        assert!(!filter.allows(Path::new("Game.gba")));
    }

    #[test]
    fn files_without_extension_are_rejected() {
        let filter = ExtensionFilter::new(["sfc"]);
        assert!(!filter.allows(Path::new("README")));
        assert!(!filter.allows(Path::new(".sfc")));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let filter = ExtensionFilter::new(["", ".", " "]);
        assert!(filter.is_empty());
    }

    #[test]
    fn common_roms_covers_cartridge_and_disc_formats() {
        let filter = ExtensionFilter::common_roms();
        assert!(filter.allows(Path::new("Game.sfc")));
        assert!(filter.allows(Path::new("Game.cue")));
        assert!(filter.allows(Path::new("Game.7z")));
        assert!(!filter.allows(Path::new("notes.txt")));
    }
}
