use crate::{Buffer, Scanner, ScannerOptions};

/// A builder for creating a scanner.
///
/// ```
/// use strscan::ScannerBuilder;
///
/// let mut scanner = ScannerBuilder::new()
///     .strict_positions(true)
///     .build("key: value");
/// scanner.set_position(100);
/// assert_eq!(scanner.position(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    options: ScannerOptions,
}

impl ScannerBuilder {
    /// Creates a new scanner builder with default options.
    pub fn new() -> Self {
        Self {
            options: ScannerOptions::default(),
        }
    }

    /// Replaces all options of the builder.
    pub fn with_options(mut self, options: ScannerOptions) -> Self {
        self.options = options;
        self
    }

    /// Rejects cursor moves beyond the end of the buffer.
    pub fn strict_positions(mut self, strict: bool) -> Self {
        self.options.strict_positions = strict;
        self
    }

    /// Lets the class code `W` behave like `w`, as the C implementation did.
    pub fn legacy_non_word(mut self, legacy: bool) -> Self {
        self.options.legacy_non_word = legacy;
        self
    }

    /// Enables or disables caching of compiled class sequences.
    pub fn class_cache(mut self, enabled: bool) -> Self {
        self.options.class_cache = enabled;
        self
    }

    /// Builds a scanner over a private copy of the input.
    pub fn build(self, input: impl AsRef<[u8]>) -> Scanner<'static> {
        Scanner::with_buffer(Buffer::copied(input.as_ref()), self.options)
    }

    /// Builds a scanner that borrows the input without copying it.
    pub fn build_borrowed<T>(self, input: &T) -> Scanner<'_>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        Scanner::with_buffer(Buffer::borrowed(input.as_ref()), self.options)
    }
}
