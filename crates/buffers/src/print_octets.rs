//! Hex rendering of byte runs for debug output.

use std::fmt;

/// Default number of octets shown before the output is elided.
pub const DEFAULT_MAX_OCTETS: usize = 16;

/// Displays a byte slice as space-separated lowercase hex.
///
/// # Example
///
/// ```
/// use bytecursor_buffers::Octets;
///
/// assert_eq!(Octets::new(&[0x01, 0x02, 0x0a, 0xff]).to_string(), "01 02 0a ff");
/// assert_eq!(Octets::with_max(&[1, 2, 3], 2).to_string(), "01 02... (1 more)");
/// ```
#[derive(Clone, Copy)]
pub struct Octets<'a> {
    octets: &'a [u8],
    max: usize,
}

impl<'a> Octets<'a> {
    pub fn new(octets: &'a [u8]) -> Self {
        Self::with_max(octets, DEFAULT_MAX_OCTETS)
    }

    pub fn with_max(octets: &'a [u8], max: usize) -> Self {
        Self { octets, max }
    }
}

impl fmt::Display for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.octets.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        if self.octets.len() > self.max {
            write!(f, "... ({} more)", self.octets.len() - self.max)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Formats up to `max` octets as a hex string.
pub fn print_octets(octets: &[u8], max: usize) -> String {
    Octets::with_max(octets, max).to_string()
}
