use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::EscapeArgs;

/// Point d'entrée de la commande `escape`.
///
/// Pour chaque `<nom>.ans` trouvé, écrit `<nom>.txt` contenant le littéral
/// échappé `\xHH`. Les sorties existantes sont ignorées sauf `--overwrite`.
///
/// # Errors
/// Retourne une erreur si le dossier d'entrée est invalide, si un fichier
/// est illisible, ou si une sortie ne peut pas être écrite.
pub fn run(args: &EscapeArgs) -> Result<()> {
    args.validate()?;

    let files = collect_ans_files(&args.input_dir, args.recursive)?;
    if files.is_empty() {
        println!("Aucun fichier .ans trouvé.");
        return Ok(());
    }

    let mut converted = 0usize;
    let mut skipped = 0usize;
    for input in &files {
        let out_path = resolve_output_path(input, &args.input_dir, args.output_dir.as_deref())?;
        if out_path.exists() && !args.overwrite {
            skipped += 1;
            continue;
        }
        if !args.dry_run {
            convert_one(input, &out_path, args.wrap)?;
        }
        println!("{} -> {}", input.display(), out_path.display());
        converted += 1;
    }

    if skipped > 0 {
        println!("{skipped} ignorés (déjà présents ; utilisez --overwrite).");
    }
    println!("{converted} convertis.");
    Ok(())
}

fn convert_one(input: &Path, out_path: &Path, wrap: usize) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer {}", parent.display()))?;
    }
    let data =
        std::fs::read(input).with_context(|| format!("Impossible de lire {}", input.display()))?;
    let text = pg_emit::wrapped_escape_literal(&data, wrap)?;
    std::fs::write(out_path, text)
        .with_context(|| format!("Impossible d'écrire {}", out_path.display()))?;
    Ok(())
}

/// Liste les `.ans` (casse ignorée) du dossier, triés pour un ordre stable.
fn collect_ans_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut stack = vec![dir.to_path_buf()];
    let mut found = Vec::new();
    while let Some(current) = stack.pop() {
        let entries = std::fs::read_dir(&current)
            .with_context(|| format!("Impossible de lister {}", current.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                if recursive {
                    stack.push(path);
                }
            } else if is_ans(&path) {
                found.push(path);
            }
        }
    }
    found.sort();
    Ok(found)
}

fn is_ans(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ans"))
}

/// Chemin de sortie : à côté de l'entrée, ou miroir sous `output_dir`.
fn resolve_output_path(
    input: &Path,
    input_dir: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    match output_dir {
        None => Ok(input.with_extension("txt")),
        Some(out) => {
            let rel = input.strip_prefix(input_dir).with_context(|| {
                format!(
                    "{} n'est pas sous {}",
                    input.display(),
                    input_dir.display()
                )
            })?;
            Ok(out.join(rel).with_extension("txt"))
        }
    }
}
