use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqldoc::html::prefix_heading_ids;
use libgqldoc::markdown::MarkdownProcessor;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct MarkdownCmd {
    #[arg(
        default_values_t=[
            "md".to_string(),
            "html".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter=',',
    )]
    exts: Vec<String>,

    #[arg(
        help="Prefix every heading `id` with these parts (slugified and \
             joined with `-`). May be given more than once.",
        long,
    )]
    heading_prefix: Vec<String>,

    #[arg(
        help="Rewrite each file in place instead of printing the results.",
        long,
    )]
    in_place: bool,

    #[arg(
        help="Paths to one or more documentation files or directories \
             containing documentation files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl MarkdownCmd {
    fn execute(&self) -> anyhow::Result<String> {
        let exts = normalize_exts(&self.exts);
        let file_paths = collect_files(&self.file_or_dir_paths, &exts)?;
        log::debug!("Found {} documentation files to process.", file_paths.len());

        // Tab-set ids must stay unique across every file of the run.
        let mut processor = MarkdownProcessor::new();
        processor.reset();

        let mut outputs = vec![];
        for path in &file_paths {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path:?}"))?;
            let processed = processor.process(content.as_str());
            let processed = prefix_heading_ids(processed.as_str(), &self.heading_prefix)
                .into_owned();

            if self.in_place {
                if processed != content {
                    std::fs::write(path, processed.as_str())
                        .with_context(|| format!("Failed to write {path:?}"))?;
                    log::debug!("Rewrote {path:?}.");
                } else {
                    log::trace!("No changes for {path:?}.");
                }
            } else {
                outputs.push(processed);
            }
        }

        if self.in_place {
            Ok(format!(
                "{} Processed {} files ({} tab sets).",
                output_utils::GREEN_CHECK,
                file_paths.len(),
                processor.tab_sets().last_id(),
            ))
        } else {
            Ok(outputs.join("\n"))
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for MarkdownCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.execute().into()
    }
}

/// Lowercases and strips any leading `.` so `--exts .MD,html` works.
pub(super) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Every file at or under `paths` whose extension is in `exts`, in walk
/// order. A single explicit file argument is always kept regardless of its
/// extension.
pub(super) fn collect_files(
    paths: &[PathBuf],
    exts: &HashSet<String>,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed while scanning files at/under {path:?}")
            })?;
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {:?}.", entry.path());
                continue;
            }
            if has_matching_ext(entry.path(), exts) {
                file_paths.push(entry.into_path());
            }
        }
    }

    if file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to process {first_arg_path:?} even though it doesn't \
            match any of the --exts ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(first_arg_path.to_owned());
    }

    Ok(file_paths)
}

fn has_matching_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| exts.contains(&ext))
}
