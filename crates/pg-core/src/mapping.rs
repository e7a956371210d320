//! Parsing des fichiers de mapping "Format A" :
//!
//! ```text
//! 0xA4 0x20AC #EURO SIGN
//! ```
//!
//! Une ligne par octet. Tout ce qui ne ressemble pas à deux champs hex
//! `0x...` est ignoré (commentaires, en-têtes). Un champ hex dont la valeur
//! sort de sa plage (octet > 0xFF, codepoint > 0x10FFFF ou surrogate) fait
//! échouer la construction. Les doublons s'écrasent, dernière ligne gagnante.

use std::path::Path;

use crate::error::TableError;
use crate::glyphs::REPLACEMENT;

/// Nombre maximal d'octets manquants listés dans l'erreur.
const MISSING_LIST_CAP: usize = 16;

/// Construit les 256 entrées depuis un fichier de mapping.
///
/// Le fichier est lu une seule fois, décodé en UTF-8 au mieux (les octets
/// invalides n'affectent pas les champs hex, purement ASCII).
pub(crate) fn table_from_mapping_file(path: &Path) -> Result<[char; 256], TableError> {
    let raw = std::fs::read(path).map_err(|source| TableError::Io {
        file: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8_lossy(&raw);

    let mut entries = [REPLACEMENT; 256];
    let mut seen = [false; 256];

    for line in text.lines() {
        let Some((byte_digits, cp_digits)) = mapping_fields(line) else {
            continue;
        };
        let byte = parse_hex(path, byte_digits)?;
        if byte > 0xFF {
            return Err(range_error(path, byte_digits));
        }
        let cp = parse_hex(path, cp_digits)?;
        let Some(ch) = char::from_u32(cp) else {
            return Err(range_error(path, cp_digits));
        };
        entries[byte as usize] = ch;
        seen[byte as usize] = true;
    }

    let missing: Vec<usize> = seen
        .iter()
        .enumerate()
        .filter_map(|(i, &set)| (!set).then_some(i))
        .collect();
    if !missing.is_empty() {
        let listed = missing
            .iter()
            .take(MISSING_LIST_CAP)
            .map(|b| format!("0x{b:02X}"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(TableError::IncompleteMapping {
            file: path.display().to_string(),
            found: 256 - missing.len(),
            missing: listed,
        });
    }

    Ok(entries)
}

/// Extrait les digits des deux champs hex d'une ligne, ou `None` si la ligne
/// n'a pas la forme attendue (elle est alors ignorée).
fn mapping_fields(line: &str) -> Option<(&str, &str)> {
    let payload = line.split_once('#').map_or(line, |(before, _)| before);
    let mut fields = payload.split_whitespace();
    let byte = hex_digits(fields.next()?)?;
    let cp = hex_digits(fields.next()?)?;
    Some((byte, cp))
}

/// Digits d'un champ `0x` + hex, ou `None` si le champ a une autre forme.
fn hex_digits(token: &str) -> Option<&str> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(digits)
}

fn parse_hex(path: &Path, digits: &str) -> Result<u32, TableError> {
    // Un champ de plus de 8 digits déborde u32 : hors plage, même politique.
    u32::from_str_radix(digits, 16).map_err(|_| range_error(path, digits))
}

fn range_error(path: &Path, digits: &str) -> TableError {
    TableError::Range {
        file: path.display().to_string(),
        token: format!("0x{digits}"),
    }
}
