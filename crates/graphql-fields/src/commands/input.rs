use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// One query document and the name it is reported under.
#[derive(Debug)]
pub(crate) struct QueryInput {
    pub label: String,
    pub source: String,
}

pub(crate) fn inline(query: String) -> QueryInput {
    QueryInput {
        label: "<query>".to_string(),
        source: query,
    }
}

pub(crate) async fn read_stdin() -> anyhow::Result<QueryInput> {
    let mut source = String::new();
    tokio::io::stdin()
        .read_to_string(&mut source)
        .await
        .context("failed to read query from stdin")?;
    Ok(QueryInput {
        label: "<stdin>".to_string(),
        source,
    })
}

/// Expands `paths` into the files to read: files named directly are always
/// included, directories are walked recursively and filtered to
/// `graphql_file_exts`.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let graphql_file_exts: HashSet<String> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut file_paths = vec![];
    for path in paths {
        if path.is_file() {
            file_paths.push(path.to_owned());
            continue;
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("failed to walk {}", path.display())
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            let matches_ext = entry_path
                .extension()
                .map(|ext| ext.to_string_lossy())
                .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
            if matches_ext {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                file_paths.push(entry_path.to_owned());
            }
        }
    }

    log::debug!("Found {} GraphQL files.", file_paths.len());
    Ok(file_paths)
}

/// Reads every file concurrently. The result keeps the order of
/// `file_paths`.
pub(crate) async fn read_files(file_paths: Vec<PathBuf>) -> anyhow::Result<Vec<QueryInput>> {
    let mut join_set = JoinSet::new();
    for (index, path) in file_paths.into_iter().enumerate() {
        join_set.spawn(async move {
            let source = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            anyhow::Ok((index, QueryInput {
                label: path.display().to_string(),
                source,
            }))
        });
    }

    let mut inputs = Vec::with_capacity(join_set.len());
    while let Some(joined) = join_set.join_next().await {
        inputs.push(joined.context("file reader task failed")??);
    }
    inputs.sort_by_key(|(index, _)| *index);
    Ok(inputs.into_iter().map(|(_, input)| input).collect())
}
