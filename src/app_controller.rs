use anyhow::Result;
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::subtitle_processor;

// @module: Application controller for subtitle-to-script extraction

/// Main application controller for bilingual script extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the extraction workflow for a single subtitle file
    ///
    /// The generated script lands in `output_dir` under the input's stem and
    /// the configured extension. Existing outputs are skipped unless
    /// `force_overwrite` is set.
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(&output_dir)?;

        let output_path =
            FileManager::generate_output_path(&input_file, &output_dir, &self.config.output_extension);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, script already exists (use -f to force overwrite): {:?}", output_path);
            return Ok(());
        }

        let script = self.extract_script(&input_file)?;
        FileManager::write_to_file(&output_path, &script)?;

        info!(
            "Wrote bilingual script to {:?} in {:.1}s",
            output_path,
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Run the extraction workflow over every subtitle file in a directory
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_subtitle_files(&input_dir)?;
        if files.is_empty() {
            warn!("No subtitle files found in directory: {:?}", input_dir);
            return Ok(());
        }

        info!("Found {} subtitle file(s) to process", files.len());

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut failed_count = 0;
        for file in &files {
            progress.set_message(
                file.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let output_dir = file.parent().unwrap_or(Path::new(".")).to_path_buf();
            if let Err(e) = self.run(file.clone(), output_dir, force_overwrite) {
                error!("Failed to process {:?}: {}", file, e);
                failed_count += 1;
            }

            progress.inc(1);
        }

        progress.finish_and_clear();

        if failed_count > 0 {
            warn!("Finished with {} failed file(s) out of {}", failed_count, files.len());
        } else {
            info!("Finished processing {} file(s)", files.len());
        }

        Ok(())
    }

    /// Read, size-check and process one subtitle file into a script string
    fn extract_script(&self, input_file: &Path) -> Result<String> {
        let bytes = FileManager::read_bytes(input_file)?;

        // The size cap belongs to the hosting layer, not the pipeline: it
        // rejects oversized uploads before any decoding happens.
        if bytes.len() as u64 > self.config.max_file_size_bytes {
            return Err(anyhow::anyhow!(
                "File too large ({} bytes, max {} bytes): {:?}",
                bytes.len(),
                self.config.max_file_size_bytes,
                input_file
            ));
        }

        let filename = input_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        debug!("Processing subtitle file: {}", filename);

        let script = subtitle_processor::process_subtitle(&bytes, &filename)?;
        Ok(script)
    }
}
