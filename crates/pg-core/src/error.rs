use thiserror::Error;

/// Errors originating from table construction.
///
/// Pas de retry, pas de table partielle : la construction est déterministe,
/// un échec remonte immédiatement avec le contexte (encodage, fichier,
/// valeur) nécessaire pour corriger l'entrée.
#[derive(Error, Debug)]
pub enum TableError {
    /// OEM codepage number with no bundled decoding table.
    #[error("Codepage OEM inconnu : cp{codepage}")]
    UnknownCodepage {
        /// Numeric codepage identifier.
        codepage: u16,
    },

    /// A single byte decoded to more than one scalar value.
    #[error("Décodage non 1:1 pour {encoding} : l'octet 0x{byte:02X} produit {count} scalaires")]
    DecodeArity {
        /// Encoding being built.
        encoding: String,
        /// Offending byte value.
        byte: u8,
        /// Number of scalar values produced.
        count: usize,
    },

    /// Mapping-file field outside its valid range.
    #[error("{file} : valeur hors plage : {token}")]
    Range {
        /// Mapping file path.
        file: String,
        /// Offending token, as written in the file.
        token: String,
    },

    /// Mapping file does not define all 256 byte values.
    #[error("{file} : 256 mappings attendus, {found} trouvés ; manquants : {missing}")]
    IncompleteMapping {
        /// Mapping file path.
        file: String,
        /// Number of byte values explicitly defined.
        found: usize,
        /// First missing byte values (capped at 16), formatted `0xNN`.
        missing: String,
    },

    /// Mapping file could not be read.
    #[error("Impossible de lire {file} : {source}")]
    Io {
        /// Mapping file path.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
