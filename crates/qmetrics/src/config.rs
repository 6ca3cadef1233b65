use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qmetrics_config as cli;
use qmetrics_settings::{
    ComplexitySettings, CouplingSettings, DEFAULT_OUT_DIR, DEFAULT_REPORT, DEFAULT_RULE,
    DEFAULT_TABLE, DEFAULT_TOP, ExtractSettings, SourceLayout,
};
use tracing::debug;

/// Repository root plus the parsed config file, if any.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub file: Option<PathBuf>,
    pub toml: cli::TomlConfig,
}

impl ResolvedConfig {
    /// Load `--config`, or `<root>/qmetrics.toml` when it exists.
    pub fn load(global: &cli::GlobalArgs) -> Result<Self> {
        let root = global.root.clone().unwrap_or_default();
        let file = match &global.config {
            Some(path) => Some(path.clone()),
            None => Some(root.join(cli::CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        };
        let toml = match &file {
            Some(path) => cli::TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => cli::TomlConfig::default(),
        };
        debug!(
            root = %root.display(),
            config = ?file.as_ref().map(|p| p.display().to_string()),
            "resolved configuration"
        );
        Ok(Self { root, file, toml })
    }

    /// Anchor a relative path at the repository root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn out_dir(&self, flag: Option<&PathBuf>) -> PathBuf {
        let dir = flag
            .cloned()
            .or_else(|| self.toml.paths.out_dir.as_deref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
        self.resolve_path(&dir)
    }

    pub fn complexity(&self, args: &cli::CliComplexityArgs) -> ComplexitySettings {
        let section = &self.toml.complexity;
        let defaults = SourceLayout::default();
        let report = args
            .report
            .clone()
            .or_else(|| section.report.as_deref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT));

        ComplexitySettings {
            report: self.resolve_path(&report),
            out_dir: self.out_dir(args.out_dir.as_ref()),
            extract: ExtractSettings {
                rule: args
                    .rule
                    .clone()
                    .or_else(|| section.rule.clone())
                    .unwrap_or_else(|| DEFAULT_RULE.to_string()),
                layout: SourceLayout {
                    source_root: section.source_root.clone().unwrap_or(defaults.source_root),
                    suffix: section.source_suffix.clone().unwrap_or(defaults.suffix),
                },
            },
            top: args.top.or(section.top).unwrap_or(DEFAULT_TOP),
            format: args.format.unwrap_or_default(),
        }
    }

    pub fn coupling(&self, args: &cli::CliCouplingArgs) -> CouplingSettings {
        let table = args
            .table
            .clone()
            .or_else(|| self.toml.coupling.table.as_deref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE));

        CouplingSettings {
            table: self.resolve_path(&table),
            out_dir: self.out_dir(args.out_dir.as_ref()),
            format: args.format.unwrap_or_default(),
        }
    }

    /// Settings for both pipelines of `qmetrics run`.
    pub fn run(&self, args: &cli::RunArgs) -> (ComplexitySettings, CouplingSettings) {
        let complexity = self.complexity(&cli::CliComplexityArgs {
            out_dir: args.out_dir.clone(),
            format: args.format,
            ..Default::default()
        });
        let coupling = self.coupling(&cli::CliCouplingArgs {
            out_dir: args.out_dir.clone(),
            format: args.format,
            ..Default::default()
        });
        (complexity, coupling)
    }
}
