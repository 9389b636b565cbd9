/// Options that control the behavior of a [`crate::Scanner`].
///
/// Use the [`crate::ScannerBuilder`] to create a scanner with non-default options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// If set, `set_position` and `forward` ignore targets beyond the end of the buffer
    /// instead of accepting them.
    pub strict_positions: bool,
    /// If set, the class code `W` matches the same characters as `w`, as the original C
    /// implementation did. Otherwise `W` matches all characters that `w` does not match.
    pub legacy_non_word: bool,
    /// If set, the scanner keeps the compiled form of every class sequence it is asked to scan
    /// so that repeated scans with the same sequence don't parse it again.
    pub class_cache: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            strict_positions: false,
            legacy_non_word: false,
            class_cache: true,
        }
    }
}
