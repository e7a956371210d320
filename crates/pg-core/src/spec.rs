use std::path::PathBuf;

use crate::codec::Codec;

/// Source de données d'une table : codec embarqué ou fichier de mapping.
#[derive(Clone, Debug)]
pub enum TableSource {
    /// Décodage octet par octet via un codec embarqué.
    Codec(Codec),
    /// Fichier texte "Format A" (`0xBB 0xCCCC [#commentaire]`).
    MappingFile(PathBuf),
}

/// Déclaration d'un encodage : un nom, une source, et des capacités fixées
/// à l'enregistrement.
///
/// Les conventions d'affichage (glyphes écran OEM, patch maison Topaz) sont
/// des flags explicites par encodage — jamais déduits d'un préfixe de nom au
/// moment de la génération.
#[derive(Clone, Debug)]
pub struct EncodingSpec {
    /// Nom de l'encodage (constante générée, libellés d'erreurs).
    pub name: String,
    /// Source des 256 entrées.
    pub source: TableSource,
    /// Appliquer les glyphes écran OEM sur 0x00–0x1F et 0x7F.
    ///
    /// Prioritaire sur le codec ; sans effet sur une source fichier de
    /// mapping (le fichier définit déjà chaque octet explicitement).
    pub control_glyphs: bool,
    /// Patch Topaz : forcer 0x7F à U+2302 (HOUSE) après construction.
    pub house_glyph: bool,
}

impl EncodingSpec {
    /// Encodage adossé à un codec, sans convention d'affichage particulière.
    pub fn codec(name: impl Into<String>, codec: Codec) -> Self {
        Self {
            name: name.into(),
            source: TableSource::Codec(codec),
            control_glyphs: false,
            house_glyph: false,
        }
    }

    /// Codepage DOS/OEM : codec `oem_cp` + glyphes écran sur la plage de
    /// contrôle.
    pub fn oem(name: impl Into<String>, codepage: u16) -> Self {
        Self {
            name: name.into(),
            source: TableSource::Codec(Codec::Oem(codepage)),
            control_glyphs: true,
            house_glyph: false,
        }
    }

    /// Encodage adossé à un fichier de mapping "Format A".
    pub fn mapping(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: TableSource::MappingFile(path.into()),
            control_glyphs: false,
            house_glyph: false,
        }
    }

    /// Active le patch maison (0x7F → U+2302).
    #[must_use]
    pub fn with_house_glyph(mut self) -> Self {
        self.house_glyph = true;
        self
    }
}
