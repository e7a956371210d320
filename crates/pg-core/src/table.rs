/// Table byte→scalaire Unicode : 256 entrées, immuable après construction.
///
/// L'index *i* donne l'interprétation de l'octet *i* pour l'encodage. Le
/// stockage en `[char; 256]` garantit structurellement que chaque entrée est
/// un scalaire Unicode valide, jamais un surrogate.
///
/// # Example
/// ```
/// use pg_core::{Codec, EncodingSpec, build};
/// let table = build(&EncodingSpec::codec("Latin1", Codec::Latin1)).unwrap();
/// assert_eq!(table.get(0x41), 'A');
/// assert_eq!(table.get(0xE9), 'é');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingTable {
    entries: [char; 256],
}

impl EncodingTable {
    pub(crate) fn new(entries: [char; 256]) -> Self {
        Self { entries }
    }

    /// Interprétation de l'octet `byte` pour cet encodage.
    #[inline]
    #[must_use]
    pub fn get(&self, byte: u8) -> char {
        self.entries[usize::from(byte)]
    }

    /// Les 256 entrées, dans l'ordre des octets.
    #[must_use]
    pub fn entries(&self) -> &[char; 256] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_indexes_by_byte_value() {
        let mut entries = ['\u{FFFD}'; 256];
        entries[0x41] = 'A';
        entries[0xFF] = '\u{00A0}';
        let table = EncodingTable::new(entries);
        assert_eq!(table.get(0x41), 'A');
        assert_eq!(table.get(0xFF), '\u{00A0}');
        assert_eq!(table.get(0x00), '\u{FFFD}');
    }
}
