//! Command-line interface for generating fragments from CSV files

use crate::analysis::patterns::PatternFilter;
use crate::analysis::vocabulary::{CasePolicy, ExtractionOptions};
use crate::generation::generator::{DuplicatePolicy, FragmentGenerator, GeneratorConfig};
use crate::generation::strategies::StrategyKind;
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_MAX_ATTEMPTS, INPUT_EXTENSION, MAX_COUNT, MIN_COUNT, OUTPUT_FILE_NAME,
    OUTPUT_SUFFIX,
};
use crate::io::corpus::SourceCorpus;
use crate::io::error::{FragmentError, Result, WithPath};
use crate::io::export::{ExportMode, render, write_fragments};
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fragmentgen")]
#[command(
    author,
    version,
    about = "Generate short text fragments by recombining a column of source samples"
)]
/// Command-line arguments for the fragment generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input CSV file or directory of CSV files (first column is used)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of fragments to generate per file
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_COUNT,
        value_parser = clap::value_parser!(u64).range(MIN_COUNT..=MAX_COUNT)
    )]
    pub count: u64,

    /// Random seed for reproducible output (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Word casing applied during extraction
    #[arg(long, value_enum, default_value_t = CasePolicy::Preserve)]
    pub case: CasePolicy,

    /// Comma-separated strategies to draw from (all when omitted)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub strategies: Vec<StrategyKind>,

    /// Keep only patterns containing a special character
    #[arg(short, long)]
    pub distinctive_patterns: bool,

    /// Insert words as extracted, without random styling
    #[arg(short, long)]
    pub plain: bool,

    /// Allow identical fragments within one batch
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Draws per fragment before a duplicate is accepted
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Shuffle the source rows once after loading
    #[arg(long)]
    pub shuffle: bool,

    /// Write a single-file batch here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write a single-file batch to fragments.txt next to the input
    #[arg(long)]
    pub save: bool,

    /// Prepend the batch to an existing output file instead of replacing it
    #[arg(short, long)]
    pub append: bool,

    /// Process files even if their output exists (directory mode)
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip && !self.append
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Extraction options selected by the flags
    pub const fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            case_policy: self.case,
            pattern_filter: if self.distinctive_patterns {
                PatternFilter::Distinctive
            } else {
                PatternFilter::All
            },
        }
    }

    /// Generator configuration selected by the flags
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            strategies: if self.strategies.is_empty() {
                StrategyKind::ALL.to_vec()
            } else {
                self.strategies.clone()
            },
            styled: !self.plain,
            duplicates: if self.allow_duplicates {
                DuplicatePolicy::Allow
            } else {
                DuplicatePolicy::UniqueWithinBatch {
                    max_attempts: self.max_attempts,
                }
            },
        }
    }

    /// How saved batches treat an existing file
    pub const fn export_mode(&self) -> ExportMode {
        if self.append {
            ExportMode::Prepend
        } else {
            ExportMode::Overwrite
        }
    }
}

/// Orchestrates fragment generation over one CSV file or a directory of them
pub struct FileProcessor {
    cli: Cli,
    rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            cli,
            rng,
            progress_manager: None,
        }
    }

    /// Process the target according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, a corpus fails to load,
    /// the configuration is rejected, generation fails, or output cannot be
    /// written
    pub fn process(&mut self) -> Result<()> {
        self.cli.generator_config().validate()?;

        if self.cli.target.is_file() {
            if !has_input_extension(&self.cli.target) {
                return Err(FragmentError::InvalidTarget {
                    path: self.cli.target.clone(),
                    reason: "target file must be a CSV file",
                });
            }
            let target = self.cli.target.clone();
            return self.process_single(&target);
        }

        if self.cli.target.is_dir() {
            return self.process_directory();
        }

        Err(FragmentError::InvalidTarget {
            path: self.cli.target.clone(),
            reason: "target must be a CSV file or directory",
        })
    }

    fn process_single(&mut self, input_path: &Path) -> Result<()> {
        let fragments = self.generate_for(input_path)?;

        let destination = self.cli.output.clone().or_else(|| {
            self.cli
                .save
                .then(|| Self::get_saved_path(input_path))
        });

        match destination {
            Some(path) => write_fragments(&path, &fragments, self.cli.export_mode()),
            None => {
                let stdout_path = Path::new("<stdout>");
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", render(&fragments)).with_path(stdout_path, "write")?;
                stdout.flush().with_path(stdout_path, "flush")
            }
        }
    }

    fn process_directory(&mut self) -> Result<()> {
        let files = self.collect_files()?;
        if files.is_empty() {
            tracing::warn!(directory = %self.cli.target.display(), "no CSV files to process");
            return Ok(());
        }

        if self.cli.should_show_progress() {
            let mut pm = ProgressManager::new();
            pm.initialize(files.len());
            self.progress_manager = Some(pm);
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let fragments = self.generate_for(file)?;
            write_fragments(
                &Self::get_output_path(file),
                &fragments,
                self.cli.export_mode(),
            )?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(fragments.len());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
            let path = entry.with_path(target, "read directory")?.path();
            if path.is_file() && has_input_extension(&path) && self.should_process_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            tracing::info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn generate_for(&mut self, input_path: &Path) -> Result<Vec<String>> {
        let mut corpus = SourceCorpus::from_csv_path(input_path)?;
        if self.cli.shuffle {
            corpus = corpus.shuffled(&mut self.rng);
        }

        let generator = FragmentGenerator::from_corpus(
            &corpus,
            self.cli.extraction_options(),
            self.cli.generator_config(),
        )?;

        generator.generate(self.cli.count as usize, &mut self.rng)
    }

    /// Output path used in directory mode: `<stem>_fragments.txt`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.txt", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    /// Output path used by `--save`: `fragments.txt` beside the input
    pub fn get_saved_path(input_path: &Path) -> PathBuf {
        input_path.parent().map_or_else(
            || PathBuf::from(OUTPUT_FILE_NAME),
            |parent| parent.join(OUTPUT_FILE_NAME),
        )
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(INPUT_EXTENSION))
}
