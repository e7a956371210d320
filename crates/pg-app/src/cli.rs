use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// phosgen — Générateur de tables d'encodage legacy et utilitaires ANSI.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Générer le source Rust des tables byte→Unicode.
    Gen(GenArgs),
    /// Convertir des fichiers .ans binaires en littéraux échappés \xHH.
    Escape(EscapeArgs),
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Manifeste TOML d'encodages supplémentaires ([[encoding]]).
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Ignorer les encodages intégrés, ne garder que ceux du manifeste.
    #[arg(long, default_value_t = false, requires = "manifest")]
    pub manifest_only: bool,

    /// Fichier de sortie. Si omis, écrit sur stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Ne générer que les encodages nommés (répétable).
    #[arg(long)]
    pub only: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EscapeArgs {
    /// Dossier contenant les fichiers .ans.
    pub input_dir: PathBuf,

    /// Dossier de sortie (miroir de l'arborescence). Défaut : à côté de
    /// chaque .ans.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Descendre dans les sous-dossiers.
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Écraser les .txt existants.
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Largeur max approximative par ligne b'...' (>= 16).
    #[arg(long, default_value_t = 120)]
    pub wrap: usize,

    /// Afficher les conversions prévues sans écrire.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl EscapeArgs {
    /// Validate that the input directory exists.
    ///
    /// # Errors
    /// Returns an error if `input_dir` is not a directory.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.input_dir.is_dir() {
            anyhow::bail!(
                "input_dir n'est pas un dossier : {}",
                self.input_dir.display()
            );
        }
        Ok(())
    }
}
