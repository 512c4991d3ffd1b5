use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use libgqlshape::QueryBuilder;
use libgqlshape::document::OperationKind;
use libgqlshape::shape::ValueType;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        help="Render `mutation` documents instead of `query` documents.",
        long,
    )]
    mutation: bool,

    #[arg(
        help="Name to give each rendered operation.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for shape \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    shape_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more JSON shape files or directories \
             containing shape files to render.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl RenderCmd {
    fn query_builder(&self) -> QueryBuilder {
        let operation_kind =
            if self.mutation {
                OperationKind::Mutation
            } else {
                OperationKind::Query
            };

        QueryBuilder::new()
            .set_operation_kind(operation_kind)
            .set_operation_name(self.operation_name.clone())
    }

    /// Find all shape files recursively located at or under each path
    /// passed as an arg.
    fn find_shape_files(&self, errors: &mut Vec<anyhow::Error>) -> Vec<PathBuf> {
        let shape_file_exts = normalize_file_exts(&self.shape_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            // A file named explicitly is rendered whatever its extension.
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        let path = entry.path();
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && shape_file_exts.contains(&format!(".{ext}")) {
                            file_paths.push(path.to_owned());
                        }
                    },

                    Ok(entry) => {
                        log::trace!("Skipping non-file: {:#?}.", entry.path());
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        log::debug!("Found {} shape files to render.", file_paths.len());
        file_paths
    }
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let file_paths = self.find_shape_files(&mut errors);
        if file_paths.is_empty() && errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No shape files found.",
                output_utils::RED_X,
            ));
        }

        let builder = self.query_builder();
        let mut documents = vec![];
        for path in &file_paths {
            match render_shape_file(&builder, path).await {
                Ok(document) if file_paths.len() > 1 => {
                    documents.push(format!("# {}\n{document}", path.display()));
                },
                Ok(document) => documents.push(document),
                Err(e) => errors.push(e),
            }
        }

        let stdout = documents.join("\n\n");
        if !errors.is_empty() {
            let stderr =
                errors.iter()
                    .map(|e| format!("{} {e:#}", output_utils::RED_X))
                    .collect::<Vec<_>>()
                    .join("\n");
            return CommandResult::partial_failure(stdout, stderr);
        }

        log::info!(
            "{} Rendered {} documents.",
            output_utils::GREEN_CHECK,
            documents.len(),
        );
        CommandResult::stdout(format_args!("{stdout}"))
    }
}

pub(crate) async fn render_shape_file(
    builder: &QueryBuilder,
    path: &Path,
) -> anyhow::Result<String> {
    let source =
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

    render_shape_source(builder, &source)
        .with_context(|| format!("Failed to render {}", path.display()))
}

/// Render the document described by the JSON text of one shape file: a
/// [`ValueType`] whose root is a record.
pub(crate) fn render_shape_source(
    builder: &QueryBuilder,
    source: &str,
) -> anyhow::Result<String> {
    let root: ValueType = serde_json::from_str(source)?;
    Ok(builder.build_root(&root)?)
}

/// `["json", ".shape"]` → `{".json", ".shape"}`
pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}
