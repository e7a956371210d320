//! Construction des tables : fonction pure de (spec) → table complète.

use crate::error::TableError;
use crate::glyphs::{HOUSE_GLYPH, control_glyph};
use crate::mapping;
use crate::spec::{EncodingSpec, TableSource};
use crate::table::EncodingTable;

/// Construit la table 256 entrées d'un encodage.
///
/// Totale et déterministe : chaque octet 0–255 reçoit toujours un scalaire
/// défini, un octet non mappé par le codec devient U+FFFD. Aucun effet de
/// bord hors la lecture unique du fichier de mapping quand cette source est
/// utilisée ; deux appels avec la même spec produisent des tables
/// bit-identiques.
///
/// # Errors
/// Voir [`TableError`] : codepage inconnu, décodage non 1:1, champ hors
/// plage ou fichier de mapping incomplet. Pas de table partielle en cas
/// d'échec.
///
/// # Example
/// ```
/// use pg_core::{EncodingSpec, build};
/// let table = build(&EncodingSpec::oem("Cp437", 437)).unwrap();
/// assert_eq!(table.get(0x01), '\u{263A}');
/// assert_eq!(table.get(0x41), 'A');
/// ```
pub fn build(spec: &EncodingSpec) -> Result<EncodingTable, TableError> {
    let mut entries = match &spec.source {
        TableSource::Codec(codec) => {
            let mut entries = ['\u{FFFD}'; 256];
            for (i, slot) in entries.iter_mut().enumerate() {
                let byte = i as u8;
                // Les glyphes écran OEM priment sur le codec : ces octets
                // sont des symboles dessinables, pas des contrôles.
                let overridden = if spec.control_glyphs {
                    control_glyph(byte)
                } else {
                    None
                };
                *slot = match overridden {
                    Some(glyph) => glyph,
                    None => codec.decode_byte(&spec.name, byte)?,
                };
            }
            entries
        }
        TableSource::MappingFile(path) => mapping::table_from_mapping_file(path)?,
    };

    if spec.house_glyph {
        entries[0x7F] = HOUSE_GLYPH;
    }

    log::debug!("Table {} construite (256 entrées)", spec.name);
    Ok(EncodingTable::new(entries))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::codec::Codec;
    use crate::registry::builtin_encodings;

    use super::*;

    #[test]
    fn every_builtin_encoding_is_total() {
        for spec in builtin_encodings() {
            let table = build(&spec).unwrap();
            // [char; 256] : chaque entrée est un scalaire valide par type.
            assert_eq!(table.entries().len(), 256, "{}", spec.name);
        }
    }

    #[test]
    fn build_is_idempotent() {
        for spec in builtin_encodings() {
            assert_eq!(build(&spec).unwrap(), build(&spec).unwrap(), "{}", spec.name);
        }
    }

    #[test]
    fn control_glyphs_take_precedence_over_codec() {
        let table = build(&EncodingSpec::oem("Cp437", 437)).unwrap();
        assert_eq!(table.get(0x01), '\u{263A}');
        assert_eq!(table.get(0x10), '\u{25BA}');
        assert_eq!(table.get(0x7F), '\u{2302}');
    }

    #[test]
    fn control_glyphs_do_not_leak_into_iso_encodings() {
        let latin1 = build(&EncodingSpec::codec("Latin1", Codec::Latin1)).unwrap();
        assert_eq!(latin1.get(0x01), '\u{0001}');

        let iso15 = build(&EncodingSpec::codec(
            "Iso8859_15",
            Codec::Iso(encoding_rs::ISO_8859_15),
        ))
        .unwrap();
        assert_eq!(iso15.get(0x01), '\u{0001}');
    }

    #[test]
    fn house_glyph_scope() {
        let amiga = build(
            &EncodingSpec::codec("AmigaLatin1", Codec::Latin1).with_house_glyph(),
        )
        .unwrap();
        assert_eq!(amiga.get(0x7F), '\u{2302}');

        // Latin-1 sans patch garde DEL.
        let plain = build(&EncodingSpec::codec("Latin1", Codec::Latin1)).unwrap();
        assert_eq!(plain.get(0x7F), '\u{007F}');
    }

    #[test]
    fn house_glyph_applies_to_amiga_iso_variants() {
        for spec in builtin_encodings() {
            if spec.name.starts_with("Amiga") {
                assert_eq!(build(&spec).unwrap().get(0x7F), '\u{2302}', "{}", spec.name);
            }
        }
    }

    #[test]
    fn cp437_end_to_end() {
        let table = build(&EncodingSpec::oem("Cp437", 437)).unwrap();
        assert_eq!(table.get(0x01), '\u{263A}');
        assert_eq!(table.get(0x41), 'A');
        assert_eq!(table.get(0xFF), '\u{00A0}');

        // Hors plage de contrôle, la table doit coïncider avec le décodage
        // par octet du codec de référence.
        for b in 0x20..=0xFEu8 {
            if b == 0x7F {
                continue;
            }
            let reference = Codec::Oem(437).decode_byte("Cp437", b).unwrap();
            assert_eq!(table.get(b), reference, "octet 0x{b:02X}");
        }
    }

    #[test]
    fn mapping_backed_build_honors_house_glyph_patch() {
        let mut content = String::new();
        for b in 0..=255u8 {
            content.push_str(&format!("0x{b:02X} 0x{:04X}\n", u32::from(b)));
        }
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let spec = EncodingSpec::mapping("Amiga1251", file.path()).with_house_glyph();
        let table = build(&spec).unwrap();
        assert_eq!(table.get(0x41), 'A');
        assert_eq!(table.get(0x7F), '\u{2302}');
    }

    #[test]
    fn incomplete_mapping_fails_without_partial_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0x00 0x0000\n").unwrap();
        let spec = EncodingSpec::mapping("Partial", file.path());
        assert!(matches!(
            build(&spec),
            Err(TableError::IncompleteMapping { .. })
        ));
    }
}
