//! Représentation texte échappée des fichiers ANSI binaires.
//!
//! Les `.ans` bruts sont illisibles pour la plupart des outils texte ; on
//! les reformate en littéral multi-lignes n'utilisant que des échappements
//! `\xHH`, non ambigu et copiable-collable tel quel.

use std::fmt::Write as _;

use anyhow::{Result, bail};

/// Largeur de wrap minimale acceptée (4 octets échappés par ligne).
pub const MIN_WRAP: usize = 16;

/// Formate `data` en littéral échappé multi-lignes.
///
/// Chaque octet devient un jeton de 4 caractères `\xHH` (hex minuscule) ;
/// la concaténation est découpée en tranches alignées sur les jetons,
/// `(wrap / 4) * 4` caractères par ligne.
///
/// # Errors
/// Retourne une erreur si `wrap < 16`.
///
/// # Example
/// ```
/// use pg_emit::wrapped_escape_literal;
/// let out = wrapped_escape_literal(b"\x1b[0mA", 16).unwrap();
/// assert_eq!(out, "data = (\n    b'\\x1b\\x5b\\x30\\x6d'\n    b'\\x41'\n)\n");
/// ```
pub fn wrapped_escape_literal(data: &[u8], wrap: usize) -> Result<String> {
    if wrap < MIN_WRAP {
        bail!("wrap doit être >= {MIN_WRAP} (reçu : {wrap})");
    }
    if data.is_empty() {
        return Ok("data = b''\n".to_string());
    }

    let mut escaped = String::with_capacity(data.len() * 4);
    for byte in data {
        let _ = write!(escaped, "\\x{byte:02x}");
    }

    // Découpage sur les frontières de jetons : 4 caractères par octet.
    let chunk_chars = (wrap / 4) * 4;

    let mut out = String::from("data = (\n");
    for chunk in escaped.as_bytes().chunks(chunk_chars) {
        out.push_str("    b'");
        // Purement ASCII par construction.
        out.push_str(std::str::from_utf8(chunk)?);
        out.push_str("'\n");
    }
    out.push_str(")\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_byte_becomes_a_four_char_token() {
        let out = wrapped_escape_literal(&[0x00, 0xFF, 0x1B], 120).unwrap();
        assert_eq!(out, "data = (\n    b'\\x00\\xff\\x1b'\n)\n");
    }

    #[test]
    fn wrap_splits_on_token_boundaries() {
        // wrap = 17 → tranches de 16 caractères = 4 octets.
        let data: Vec<u8> = (0..10).collect();
        let out = wrapped_escape_literal(&data, 17).unwrap();
        let body: Vec<&str> = out
            .lines()
            .filter(|l| l.trim_start().starts_with("b'"))
            .collect();
        assert_eq!(body.len(), 3);
        assert_eq!(body[0].trim_start(), "b'\\x00\\x01\\x02\\x03'");
        assert_eq!(body[2].trim_start(), "b'\\x08\\x09'");
    }

    #[test]
    fn wrap_below_minimum_is_rejected() {
        assert!(wrapped_escape_literal(b"x", 15).is_err());
        assert!(wrapped_escape_literal(b"x", MIN_WRAP).is_ok());
    }

    #[test]
    fn empty_input_yields_empty_literal() {
        assert_eq!(wrapped_escape_literal(&[], 120).unwrap(), "data = b''\n");
    }

    #[test]
    fn hex_is_lowercase() {
        let out = wrapped_escape_literal(&[0xAB, 0xCD], 120).unwrap();
        assert!(out.contains("\\xab\\xcd"));
    }
}
