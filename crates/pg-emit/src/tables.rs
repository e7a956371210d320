//! Émission du source Rust des tables construites.
//!
//! Chaque encodage devient une déclaration `pub static NOM: [char; 256]`,
//! entrées en échappements hex `'\u{XXXX}'` (évite tout problème de
//! quoting dans le code généré), 16 par ligne pour la lisibilité.

use std::fmt::Write as _;

use pg_core::EncodingTable;

/// Entrées par ligne dans le source généré.
const ENTRIES_PER_ROW: usize = 16;

const HEADER: &str = "// Generated by phosgen — do not edit.\n";

/// Nom de constante Rust dérivé du nom d'encodage.
///
/// # Example
/// ```
/// use pg_emit::tables::const_name;
/// assert_eq!(const_name("Cp437"), "CP437");
/// assert_eq!(const_name("AmigaIso8859_15"), "AMIGA_ISO8859_15");
/// ```
#[must_use]
pub fn const_name(encoding_name: &str) -> String {
    let mut out = String::with_capacity(encoding_name.len() + 4);
    let mut prev_lower = false;
    for ch in encoding_name.chars() {
        if !ch.is_ascii_alphanumeric() {
            out.push('_');
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.push(ch.to_ascii_uppercase());
    }
    out
}

fn scalar_literal(ch: char) -> String {
    format!("'\\u{{{:04X}}}'", u32::from(ch))
}

/// Émet la déclaration d'une seule table.
#[must_use]
pub fn emit_table(encoding_name: &str, table: &EncodingTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "pub static {}: [char; 256] = [",
        const_name(encoding_name)
    );
    for row in table.entries().chunks(ENTRIES_PER_ROW) {
        let items: Vec<String> = row.iter().map(|&ch| scalar_literal(ch)).collect();
        let _ = writeln!(out, "    {},", items.join(", "));
    }
    out.push_str("];\n");
    out
}

/// Émet le fichier complet pour un ensemble de tables nommées.
#[must_use]
pub fn emit_module(tables: &[(String, EncodingTable)]) -> String {
    let mut out = String::from(HEADER);
    for (name, table) in tables {
        out.push('\n');
        out.push_str(&emit_table(name, table));
    }
    log::debug!("{} tables émises", tables.len());
    out
}

#[cfg(test)]
mod tests {
    use pg_core::{EncodingSpec, build};

    use super::*;

    #[test]
    fn const_name_handles_oem_and_amiga_names() {
        assert_eq!(const_name("Cp437"), "CP437");
        assert_eq!(const_name("AmigaLatin1"), "AMIGA_LATIN1");
        assert_eq!(const_name("AmigaIso8859_15"), "AMIGA_ISO8859_15");
        assert_eq!(const_name("my-custom map"), "MY_CUSTOM_MAP");
    }

    #[test]
    fn emit_table_uses_sixteen_entries_per_row() {
        let table = build(&EncodingSpec::oem("Cp437", 437)).unwrap();
        let source = emit_table("Cp437", &table);
        let lines: Vec<&str> = source.lines().collect();
        // 1 ligne de déclaration + 16 lignes de 16 entrées + "];".
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "pub static CP437: [char; 256] = [");
        assert_eq!(lines[17], "];");
        for row in &lines[1..17] {
            assert_eq!(row.matches("'\\u{").count(), 16);
        }
    }

    #[test]
    fn emitted_entries_are_hex_escapes() {
        let table = build(&EncodingSpec::oem("Cp437", 437)).unwrap();
        let source = emit_table("Cp437", &table);
        // 0x01 → U+263A en tête de première rangée, après 0x00.
        assert!(source.contains("'\\u{0000}', '\\u{263A}'"));
        // 0xFF → U+00A0 en fin de dernière rangée.
        assert!(source.contains("'\\u{00A0}',\n];"));
    }

    #[test]
    fn emit_module_prefixes_header_and_joins_tables() {
        let cp437 = build(&EncodingSpec::oem("Cp437", 437)).unwrap();
        let cp850 = build(&EncodingSpec::oem("Cp850", 850)).unwrap();
        let source = emit_module(&[
            ("Cp437".to_string(), cp437),
            ("Cp850".to_string(), cp850),
        ]);
        assert!(source.starts_with("// Generated by phosgen"));
        assert!(source.contains("pub static CP437"));
        assert!(source.contains("pub static CP850"));
    }
}
