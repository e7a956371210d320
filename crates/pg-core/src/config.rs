use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::codec::Codec;
use crate::spec::EncodingSpec;

/// Manifeste TOML déclarant des encodages supplémentaires.
///
/// ```toml
/// [[encoding]]
/// name = "Cp858"
/// codec = "cp858"
///
/// [[encoding]]
/// name = "Amiga1251"
/// mapping = "mappings/Amiga-1251.txt"
/// house_glyph = false
/// ```
///
/// Chaque entrée a exactement une source : `codec` (nom de codec embarqué)
/// ou `mapping` (fichier "Format A", chemin relatif au manifeste). Les flags
/// `control_glyphs` / `house_glyph` sont optionnels ; par défaut, les codecs
/// OEM reçoivent les glyphes écran, rien d'autre.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    encoding: Vec<EncodingEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EncodingEntry {
    name: String,
    codec: Option<String>,
    mapping: Option<PathBuf>,
    control_glyphs: Option<bool>,
    house_glyph: Option<bool>,
}

/// Charge un manifeste et résout ses entrées en specs d'encodage.
///
/// # Errors
/// Retourne une erreur si le fichier est illisible, si le TOML est invalide,
/// si une entrée n'a pas exactement une source, ou si un nom de codec est
/// inconnu.
///
/// # Example
/// ```no_run
/// use pg_core::config::load_manifest;
/// use std::path::Path;
/// let specs = load_manifest(Path::new("encodings.toml")).unwrap();
/// ```
pub fn load_manifest(path: &Path) -> Result<Vec<EncodingSpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let file: ManifestFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    file.encoding
        .into_iter()
        .map(|entry| resolve_entry(base, entry))
        .collect()
}

fn resolve_entry(base: &Path, entry: EncodingEntry) -> Result<EncodingSpec> {
    let mut spec = match (entry.codec, entry.mapping) {
        (Some(codec_name), None) => {
            let codec = resolve_codec(&codec_name)
                .with_context(|| format!("Encodage {}", entry.name))?;
            let mut spec = EncodingSpec::codec(entry.name, codec);
            // Défaut d'enregistrement : glyphes écran pour les codecs OEM.
            spec.control_glyphs = matches!(codec, Codec::Oem(_));
            spec
        }
        (None, Some(mapping)) => EncodingSpec::mapping(entry.name, base.join(mapping)),
        _ => bail!(
            "Encodage {} : exactement une source requise (codec OU mapping)",
            entry.name
        ),
    };

    if let Some(v) = entry.control_glyphs {
        spec.control_glyphs = v;
    }
    if let Some(v) = entry.house_glyph {
        spec.house_glyph = v;
    }
    Ok(spec)
}

/// Résout un nom de codec du manifeste vers un codec embarqué.
fn resolve_codec(name: &str) -> Result<Codec> {
    let lower = name.to_ascii_lowercase();
    if let Some(digits) = lower.strip_prefix("cp") {
        let codepage: u16 = digits
            .parse()
            .with_context(|| format!("Codec inconnu : {name}"))?;
        if !oem_cp::code_table::DECODING_TABLE_CP_MAP.contains_key(&codepage) {
            bail!("Codepage OEM non supporté : cp{codepage}");
        }
        return Ok(Codec::Oem(codepage));
    }
    match lower.as_str() {
        "latin-1" | "latin1" | "iso8859-1" => Ok(Codec::Latin1),
        "iso8859-2" | "iso-8859-2" => Ok(Codec::Iso(encoding_rs::ISO_8859_2)),
        "iso8859-15" | "iso-8859-15" => Ok(Codec::Iso(encoding_rs::ISO_8859_15)),
        _ => bail!("Codec inconnu : {name}"),
    }
}
