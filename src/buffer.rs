/// The character buffer a scanner works on.
///
/// The buffer is either an independent copy owned by the scanner or a view into memory owned
/// by the caller. The variant is fixed when the scanner is created and the scanner never
/// mutates the buffer in either case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Buffer<'a> {
    /// A copy of the input that is released together with the scanner.
    Owned(Box<[u8]>),
    /// Caller owned input. It must outlive the scanner, which the lifetime enforces.
    Borrowed(&'a [u8]),
}

impl<'a> Buffer<'a> {
    /// Creates an owned buffer by copying the given input.
    pub fn copied(input: &[u8]) -> Buffer<'static> {
        Buffer::Owned(input.into())
    }

    /// Creates a buffer that borrows the given input.
    pub fn borrowed(input: &'a [u8]) -> Self {
        Buffer::Borrowed(input)
    }

    /// Returns the contents of the buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Buffer::Owned(bytes) => bytes,
            Buffer::Borrowed(bytes) => bytes,
        }
    }

    /// Returns true if the buffer is an owned copy.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Buffer::Owned(_))
    }

    /// Number of characters in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the buffer contains no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl AsRef<[u8]> for Buffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_buffer_is_independent() {
        let mut input = b"hello".to_vec();
        let buffer = Buffer::copied(&input);
        input[0] = b'j';
        assert!(buffer.is_owned());
        assert_eq!(buffer.as_bytes(), b"hello");
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn test_borrowed_buffer() {
        let input = "world";
        let buffer = Buffer::borrowed(input.as_bytes());
        assert!(!buffer.is_owned());
        assert_eq!(buffer.as_bytes().as_ptr(), input.as_ptr());
        assert!(!buffer.is_empty());
    }
}
