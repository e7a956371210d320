use oem_cp::code_table::DECODING_TABLE_CP_MAP;
use oem_cp::code_table_type::TableType;

use crate::error::TableError;
use crate::glyphs::REPLACEMENT;

/// Codec single-byte embarqué : la fonction de base octet → codepoint.
///
/// L'ancien recours à un registre de codecs fourni par la plateforme devient
/// ici un renvoi explicite vers des tables tierces : `oem_cp` pour les
/// codepages DOS/OEM, `encoding_rs` pour les variantes ISO-8859, et
/// l'identité pour Latin-1.
#[derive(Clone, Copy, Debug)]
pub enum Codec {
    /// Codepage DOS/OEM (ex: 437, 850), via les tables `oem_cp`.
    Oem(u16),
    /// ISO-8859-1 : identité octet → codepoint.
    Latin1,
    /// Encodage single-byte décodé via `encoding_rs` (ISO-8859-2, -15).
    Iso(&'static encoding_rs::Encoding),
}

impl Codec {
    /// Décode un octet en exactement un scalaire Unicode.
    ///
    /// Un octet non défini par le codec est substitué par U+FFFD, jamais une
    /// erreur : la construction de table reste totale. `encoding` n'intervient
    /// que dans le libellé des erreurs.
    ///
    /// # Errors
    /// - [`TableError::UnknownCodepage`] si aucune table `oem_cp` n'existe
    ///   pour ce numéro de codepage.
    /// - [`TableError::DecodeArity`] si le décodage produit plus d'un
    ///   scalaire (violation de contrat, jamais observé sur les encodages
    ///   single-byte supportés).
    pub fn decode_byte(self, encoding: &str, byte: u8) -> Result<char, TableError> {
        match self {
            Self::Oem(codepage) => {
                let table = DECODING_TABLE_CP_MAP
                    .get(&codepage)
                    .ok_or(TableError::UnknownCodepage { codepage })?;
                if byte < 0x80 {
                    // La moitié basse des codepages DOS est l'identité ASCII.
                    return Ok(char::from(byte));
                }
                let high = usize::from(byte) - 128;
                Ok(match table {
                    TableType::Complete(forward) => forward[high],
                    TableType::Incomplete(forward) => forward[high].unwrap_or(REPLACEMENT),
                })
            }
            Self::Latin1 => Ok(char::from(byte)),
            Self::Iso(enc) => {
                let bytes = [byte];
                let (decoded, _had_errors) = enc.decode_without_bom_handling(&bytes);
                let mut scalars = decoded.chars();
                let first = scalars.next().unwrap_or(REPLACEMENT);
                let rest = scalars.count();
                if rest > 0 {
                    return Err(TableError::DecodeArity {
                        encoding: encoding.to_string(),
                        byte,
                        count: rest + 1,
                    });
                }
                Ok(first)
            }
        }
    }
}
