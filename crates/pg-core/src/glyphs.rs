/// Caractère de remplacement pour un octet sans mapping défini.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Glyphe "maison" Topaz (U+2302), dessiné en 0x7F par les fontes Amiga.
pub const HOUSE_GLYPH: char = '\u{2302}';

/// Glyphes écran PC BIOS / CP437 pour la plage de contrôle C0 (0x00–0x1F).
///
/// En ANSI art, ces octets sont traités comme des glyphes dessinables
/// (smileys, flèches, notes de musique), pas comme des actions de contrôle.
pub const CONTROL_RANGE_GLYPHS: [char; 32] = [
    '\u{0000}', '\u{263A}', '\u{263B}', '\u{2665}', '\u{2666}', '\u{2663}', '\u{2660}', '\u{2022}',
    '\u{25D8}', '\u{25CB}', '\u{25D9}', '\u{2642}', '\u{2640}', '\u{266A}', '\u{266B}', '\u{263C}',
    '\u{25BA}', '\u{25C4}', '\u{2195}', '\u{203C}', '\u{00B6}', '\u{00A7}', '\u{25AC}', '\u{21A8}',
    '\u{2191}', '\u{2193}', '\u{2192}', '\u{2190}', '\u{221F}', '\u{2194}', '\u{25B2}', '\u{25BC}',
];

/// Glyphe écran OEM conventionnel pour un octet de la plage de contrôle.
///
/// Couvre les 33 octets 0x00–0x1F et 0x7F ; `None` pour tout autre octet.
///
/// # Example
/// ```
/// use pg_core::glyphs::control_glyph;
/// assert_eq!(control_glyph(0x01), Some('\u{263A}'));
/// assert_eq!(control_glyph(0x7F), Some('\u{2302}'));
/// assert_eq!(control_glyph(0x20), None);
/// ```
#[must_use]
pub fn control_glyph(byte: u8) -> Option<char> {
    match byte {
        0x00..=0x1F => Some(CONTROL_RANGE_GLYPHS[usize::from(byte)]),
        0x7F => Some(HOUSE_GLYPH),
        _ => None,
    }
}
