use anyhow::{Context, Result};
use pg_core::{EncodingSpec, build, builtin_encodings};

use crate::cli::GenArgs;

/// Point d'entrée de la commande `gen`.
///
/// # Errors
/// Retourne une erreur si le manifeste est invalide, si une table échoue à
/// se construire, ou si la sortie ne peut pas être écrite.
pub fn run(args: &GenArgs) -> Result<()> {
    // 1. Rassembler les specs (intégrées + manifeste)
    let specs = assemble_specs(args)?;

    // 2. Construire chaque table
    let mut tables = Vec::with_capacity(specs.len());
    for spec in &specs {
        log::info!("Construction de la table {}...", spec.name);
        let table =
            build(spec).with_context(|| format!("Échec de construction pour {}", spec.name))?;
        tables.push((spec.name.clone(), table));
    }

    // 3. Émettre le source et écrire
    let source = pg_emit::emit_module(&tables);
    match args.out {
        Some(ref path) => {
            std::fs::write(path, source)
                .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
            log::info!("{} tables écrites dans {}", tables.len(), path.display());
        }
        None => print!("{source}"),
    }
    Ok(())
}

fn assemble_specs(args: &GenArgs) -> Result<Vec<EncodingSpec>> {
    let mut specs = if args.manifest_only {
        Vec::new()
    } else {
        builtin_encodings()
    };
    if let Some(ref manifest) = args.manifest {
        specs.extend(pg_core::config::load_manifest(manifest)?);
    }
    if !args.only.is_empty() {
        specs.retain(|spec| args.only.iter().any(|name| name == &spec.name));
        if specs.is_empty() {
            anyhow::bail!("Aucun encodage ne correspond à --only");
        }
    }
    Ok(specs)
}
