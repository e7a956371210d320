use crate::codec::Codec;
use crate::spec::EncodingSpec;

/// Les encodages générés par défaut, sans manifeste.
///
/// Couvre les codepages DOS/OEM classiques de la scène ANSI, plus les
/// variantes Amiga. Les encodages adossés à un fichier de mapping externe
/// (ex: Amiga-1251) se déclarent via le manifeste TOML, leur table ne
/// faisant pas partie des codecs embarqués.
///
/// # Example
/// ```
/// use pg_core::{build, builtin_encodings};
/// for spec in builtin_encodings() {
///     assert!(build(&spec).is_ok(), "{}", spec.name);
/// }
/// ```
#[must_use]
pub fn builtin_encodings() -> Vec<EncodingSpec> {
    vec![
        EncodingSpec::oem("Cp437", 437),
        EncodingSpec::oem("Cp850", 850),
        EncodingSpec::oem("Cp852", 852),
        EncodingSpec::oem("Cp855", 855),
        EncodingSpec::oem("Cp857", 857),
        EncodingSpec::oem("Cp860", 860),
        EncodingSpec::oem("Cp861", 861),
        EncodingSpec::oem("Cp862", 862),
        EncodingSpec::oem("Cp863", 863),
        EncodingSpec::oem("Cp865", 865),
        EncodingSpec::oem("Cp866", 866),
        EncodingSpec::oem("Cp775", 775),
        EncodingSpec::oem("Cp737", 737),
        EncodingSpec::oem("Cp869", 869),
        // ISO-8859-1 (ECMA-94) est une base raisonnable pour beaucoup de
        // fontes Amiga ; les fontes lignée Topaz dessinent une "maison" en
        // 0x7F, d'où le patch.
        EncodingSpec::codec("AmigaLatin1", Codec::Latin1).with_house_glyph(),
        // ISO-8859-* saveur Amiga (locales, import-export texte), même
        // patch 0x7F → U+2302 par cohérence avec les fontes courantes.
        EncodingSpec::codec("AmigaIso8859_15", Codec::Iso(encoding_rs::ISO_8859_15))
            .with_house_glyph(),
        EncodingSpec::codec("AmigaIso8859_2", Codec::Iso(encoding_rs::ISO_8859_2))
            .with_house_glyph(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::spec::TableSource;

    use super::*;

    #[test]
    fn oem_entries_carry_control_glyphs_iso_entries_do_not() {
        for spec in builtin_encodings() {
            let is_oem = matches!(spec.source, TableSource::Codec(Codec::Oem(_)));
            assert_eq!(spec.control_glyphs, is_oem, "{}", spec.name);
        }
    }

    #[test]
    fn amiga_entries_carry_the_house_patch() {
        for spec in builtin_encodings() {
            assert_eq!(spec.house_glyph, spec.name.starts_with("Amiga"), "{}", spec.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let specs = builtin_encodings();
        for (i, a) in specs.iter().enumerate() {
            for b in &specs[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
