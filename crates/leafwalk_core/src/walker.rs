//! Document discovery.
//!
//! [`DocumentWalker`] finds documents with `ignore`'s parallel walker and
//! loads each one on the walker thread that found it. Results are sorted by
//! path before anyone sees them, so the thread count never changes the
//! order. [`DocumentWalker::stream`] hands the documents to a consumer as a
//! [`Channel`] value.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, ParallelVisitor, ParallelVisitorBuilder, WalkBuilder, WalkState};
use leafwalk_value::{Channel, ObjectLayout, Producer, Record, Value};
use tracing::{debug, error, info, warn};

use crate::document::load_document;
use crate::{LeafwalkConfig, LeafwalkError};

/// Type name of the records produced by [`DocumentWalker::stream`].
pub const DOCUMENT_RECORD: &str = "Document";

/// A file that matched the include patterns, and what loading it gave.
#[derive(Debug)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub document: Result<Value, LeafwalkError>,
}

/// Finds and loads the documents a [`LeafwalkConfig`] selects.
#[derive(Debug, Clone)]
pub struct DocumentWalker {
    respect_gitignore: bool,
    include_hidden: bool,
    max_depth: Option<usize>,
    layout: ObjectLayout,
    capacity: usize,
    filter: Arc<DocumentFilter>,
}

impl DocumentWalker {
    pub fn new(config: &LeafwalkConfig) -> Self {
        Self {
            respect_gitignore: config.respect_gitignore,
            include_hidden: config.include_hidden,
            max_depth: config.max_depth,
            layout: config.object_layout,
            capacity: config.channel_capacity,
            filter: Arc::new(DocumentFilter::new(&config.include, &config.exclude)),
        }
    }

    /// Finds every document under `paths` and loads it.
    ///
    /// Files that fail to load are returned with their error. The result is
    /// sorted by path.
    pub fn load(&self, paths: &[PathBuf]) -> Vec<LoadedDocument> {
        let Some((first, rest)) = paths.split_first() else {
            return Vec::new();
        };

        let mut builder = WalkBuilder::new(first);
        for path in rest {
            builder.add(path);
        }
        builder
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .hidden(!self.include_hidden)
            .max_depth(self.max_depth);

        let (tx, rx) = crossbeam_channel::unbounded();
        let mut loaders = LoaderBuilder {
            tx,
            filter: Arc::clone(&self.filter),
            layout: self.layout,
        };
        builder.build_parallel().visit(&mut loaders);
        drop(loaders);

        let mut documents: Vec<LoadedDocument> = rx.iter().collect();
        documents.sort_by(|a, b| a.path.cmp(&b.path));
        documents.dedup_by(|a, b| a.path == b.path);

        let failed = documents.iter().filter(|d| d.document.is_err()).count();
        info!("Found {} documents ({} failed to load)", documents.len(), failed);

        documents
    }

    /// Loads the documents under `paths` on a background thread.
    ///
    /// Returns a channel yielding one `Document` record per loaded file, in
    /// sorted path order:
    ///
    /// ```text
    /// Document { path: Text, document: <file contents as a value> }
    /// ```
    ///
    /// The channel closes once every document was sent. Files that cannot be
    /// read or parsed are logged and skipped. Dropping the channel early stops
    /// the producer at its next send.
    pub fn stream(&self, paths: &[PathBuf]) -> Channel {
        let (tx, channel) = Channel::bounded(self.capacity);
        let walker = self.clone();
        let paths = paths.to_vec();

        let spawned = thread::Builder::new()
            .name("leafwalk-documents".to_string())
            .spawn(move || walker.produce(&paths, &tx));

        // On failure the producer is dropped with the closure, closing the channel
        if let Err(e) = spawned {
            error!("Failed to start document stream: {}", e);
        }

        channel
    }

    fn produce(&self, paths: &[PathBuf], tx: &Producer) {
        let mut sent = 0usize;

        for LoadedDocument { path, document } in self.load(paths) {
            let document = match document {
                Ok(document) => document,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let record = Record::named(DOCUMENT_RECORD)
                .field("path", path.display().to_string())
                .field("document", document);

            if tx.send(Value::from(record)).is_err() {
                debug!("Document stream receiver dropped after {} documents", sent);
                return;
            }
            sent += 1;
        }

        debug!("Document stream finished ({} documents)", sent);
    }
}

struct LoaderBuilder {
    tx: Sender<LoadedDocument>,
    filter: Arc<DocumentFilter>,
    layout: ObjectLayout,
}

impl<'s> ParallelVisitorBuilder<'s> for LoaderBuilder {
    fn build(&mut self) -> Box<dyn ParallelVisitor + 's> {
        Box::new(Loader {
            tx: self.tx.clone(),
            filter: Arc::clone(&self.filter),
            layout: self.layout,
        })
    }
}

/// Loads matching files as the walker reaches them.
struct Loader {
    tx: Sender<LoadedDocument>,
    filter: Arc<DocumentFilter>,
    layout: ObjectLayout,
}

impl ParallelVisitor for Loader {
    fn visit(&mut self, entry: Result<DirEntry, ignore::Error>) -> WalkState {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Walk error: {}", e);
                return WalkState::Continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !self.filter.accepts(entry.path())
        {
            return WalkState::Continue;
        }

        let path = entry.into_path();
        let document = load_document(&path, self.layout);
        if self.tx.send(LoadedDocument { path, document }).is_err() {
            return WalkState::Quit;
        }
        WalkState::Continue
    }
}

/// Include and exclude globs. Exclusion wins.
#[derive(Debug)]
struct DocumentFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl DocumentFilter {
    fn new(include: &[String], exclude: &[String]) -> Self {
        Self {
            include: glob_set(include, "include"),
            exclude: glob_set(exclude, "exclude"),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        let excluded = self.exclude.as_ref().is_some_and(|set| set.is_match(path));
        let included = self.include.as_ref().is_none_or(|set| set.is_match(path));
        included && !excluded
    }
}

/// Compiles `patterns`, or `None` when there are none.
///
/// Invalid patterns are logged and left out.
fn glob_set(patterns: &[String], kind: &str) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => warn!("Ignoring invalid {} pattern {:?}: {}", kind, pattern, e),
        }
    }

    builder
        .build()
        .inspect_err(|e| warn!("Failed to build {} patterns: {}", kind, e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MAX_NESTING;
    use leafwalk_value::{Shape, collect_text};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        // .gitignore is only honoured inside a repository
        let _ = Command::new("git").arg("init").current_dir(root).output();

        fs::write(root.join("a.json"), r#"{ "name": "alpha" }"#).unwrap();
        fs::write(root.join("notes.txt"), "not json").unwrap();
        fs::write(root.join("b.jsonc"), "// comment\n[\"beta\"]").unwrap();
        fs::write(root.join(".hidden.json"), r#""hidden""#).unwrap();

        let subdir = root.join("subdir");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("c.json"), r#"{ "city": "Leeds", "age": 27 }"#).unwrap();

        let vendor = root.join("vendor");
        fs::create_dir(&vendor).unwrap();
        fs::write(vendor.join("pkg.json"), r#""vendored""#).unwrap();
        fs::write(root.join(".gitignore"), "vendor/\n").unwrap();

        temp
    }

    fn names(walker: &DocumentWalker, root: &Path) -> Vec<String> {
        walker
            .load(&[root.to_path_buf()])
            .into_iter()
            .map(|d| d.path.strip_prefix(root).unwrap().display().to_string())
            .collect()
    }

    fn walker_with(edit: impl FnOnce(&mut LeafwalkConfig)) -> DocumentWalker {
        let mut config = LeafwalkConfig::default();
        edit(&mut config);
        DocumentWalker::new(&config)
    }

    fn texts(channel: Channel) -> Vec<String> {
        collect_text(&Value::from(channel))
    }

    #[test]
    fn test_load_filters_and_sorts() {
        let temp = create_test_tree();
        let walker = walker_with(|c| c.exclude = vec!["**/vendor/**".to_string()]);

        assert_eq!(
            names(&walker, temp.path()),
            vec!["a.json", "b.jsonc", "subdir/c.json"]
        );
    }

    #[test]
    fn test_load_parses_documents() {
        let temp = create_test_tree();
        let walker = walker_with(|_| {});

        let documents = walker.load(&[temp.path().join("subdir")]);
        assert_eq!(documents.len(), 1);

        let value = documents[0].document.as_ref().unwrap();
        assert_eq!(value.shape(), Shape::Record);
        assert_eq!(collect_text(value), vec!["Leeds"]);
    }

    #[test]
    fn test_load_respects_gitignore() {
        let temp = create_test_tree();
        if !temp.path().join(".git").exists() {
            return;
        }

        let found = names(&walker_with(|_| {}), temp.path());
        assert!(!found.iter().any(|f| f.starts_with("vendor")));
    }

    #[test]
    fn test_load_ignores_gitignore_when_disabled() {
        let temp = create_test_tree();
        let found = names(&walker_with(|c| c.respect_gitignore = false), temp.path());

        assert!(found.contains(&"vendor/pkg.json".to_string()));
    }

    #[test]
    fn test_load_hidden_files() {
        let temp = create_test_tree();

        let default = names(&walker_with(|_| {}), temp.path());
        assert!(!default.contains(&".hidden.json".to_string()));

        let hidden = names(&walker_with(|c| c.include_hidden = true), temp.path());
        assert!(hidden.contains(&".hidden.json".to_string()));
    }

    #[test]
    fn test_load_max_depth() {
        let temp = create_test_tree();
        let found = names(&walker_with(|c| c.max_depth = Some(1)), temp.path());

        assert!(!found.is_empty());
        assert!(found.iter().all(|f| !f.contains('/')));
    }

    #[test]
    fn test_load_empty_paths() {
        assert!(walker_with(|_| {}).load(&[]).is_empty());
    }

    #[test]
    fn test_load_keeps_failures() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.json"), "{ broken").unwrap();
        fs::write(temp.path().join("good.json"), r#""fine""#).unwrap();

        let documents = walker_with(|_| {}).load(&[temp.path().to_path_buf()]);

        assert_eq!(documents.len(), 2);
        assert!(matches!(documents[0].document, Err(LeafwalkError::Parse { .. })));
        assert!(documents[1].document.is_ok());
    }

    #[test]
    fn test_stream_yields_documents_in_path_order() {
        let temp = create_test_tree();
        let walker = walker_with(|c| {
            c.exclude = vec!["**/vendor/**".to_string()];
            c.channel_capacity = 1;
        });

        let channel = walker.stream(&[temp.path().to_path_buf()]);

        let mut paths = Vec::new();
        while let Some(item) = channel.recv() {
            let Value::Record(record) = &item else {
                panic!("expected a record, got {:?}", item.shape());
            };
            assert_eq!(record.name.as_deref(), Some(DOCUMENT_RECORD));
            paths.push(record.get("path").and_then(Value::as_text).unwrap().to_string());
        }

        assert_eq!(paths.len(), 3);
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn test_stream_as_channel_value() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.json"), r#"{ "Name": "Scott", "Age": 27 }"#).unwrap();
        fs::write(temp.path().join("two.json"), r#"["Leeds", 1, "Manchester"]"#).unwrap();

        let got = texts(walker_with(|_| {}).stream(&[temp.path().to_path_buf()]));

        // Each document contributes its path first, then its textual leaves
        assert_eq!(got.len(), 5);
        assert!(got[0].ends_with("one.json"));
        assert_eq!(got[1], "Scott");
        assert!(got[2].ends_with("two.json"));
        assert_eq!(&got[3..], ["Leeds", "Manchester"]);
    }

    #[test]
    fn test_stream_skips_invalid_documents() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.json"), "{ broken").unwrap();
        fs::write(temp.path().join("good.json"), r#""fine""#).unwrap();

        let channel = walker_with(|_| {}).stream(&[temp.path().to_path_buf()]);
        assert_eq!(channel.iter().count(), 1);
    }

    #[test]
    fn test_stream_skips_deeply_nested_documents() {
        let temp = TempDir::new().unwrap();
        let deep = 10 * MAX_NESTING;
        fs::write(
            temp.path().join("deep.json"),
            format!("{}\"deep\"{}", "[".repeat(deep), "]".repeat(deep)),
        )
        .unwrap();
        fs::write(temp.path().join("flat.json"), r#"["flat"]"#).unwrap();

        let got = texts(walker_with(|_| {}).stream(&[temp.path().to_path_buf()]));

        assert_eq!(got.len(), 2);
        assert!(got[0].ends_with("flat.json"));
        assert_eq!(got[1], "flat");
    }

    #[test]
    fn test_filter_include() {
        let filter = DocumentFilter::new(&["*.json".to_string()], &[]);

        assert!(filter.accepts(Path::new("test.json")));
        assert!(filter.accepts(Path::new("subdir/test.json")));
        assert!(!filter.accepts(Path::new("test.txt")));
    }

    #[test]
    fn test_filter_exclude_wins() {
        let filter = DocumentFilter::new(
            &["**/*.json".to_string()],
            &["**/node_modules/**".to_string()],
        );

        assert!(filter.accepts(Path::new("package.json")));
        assert!(!filter.accepts(Path::new("node_modules/pkg/package.json")));
        assert!(!filter.accepts(Path::new("src/main.rs")));
    }

    #[test]
    fn test_filter_without_patterns_accepts_everything() {
        let filter = DocumentFilter::new(&[], &[]);
        assert!(filter.accepts(Path::new("anything.bin")));
    }
}
