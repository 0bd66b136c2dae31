//! Append-only JSON-lines score file.

use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use game_core::ScoreRecord;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::repository::{RepositoryError, Result, ScoreRepository};

/// File-based score store.
///
/// Stores one record per line:
/// ```text
/// {"date":"2021-01-01","high_score":100,"name":"Al"}
/// {"date":"2021-01-02","high_score":80,"name":"Bo"}
/// ```
///
/// Each append is a single write of one complete line to a file opened in
/// append mode. In-process appends are serialized by `write_lock`.
///
/// A line is committed once its newline is on disk. An unterminated final
/// line is what an interrupted append leaves behind: readers skip it and the
/// next append cuts it off before writing.
pub struct FileScoreRepository {
    /// Full path to the score file
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileScoreRepository {
    /// Open (or lazily create) the score file at `path`.
    ///
    /// The parent directory is created immediately; the file itself appears
    /// on the first append.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        tracing::debug!("Opened score repository: {}", path.display());

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_line(number: usize, line: &[u8]) -> Result<ScoreRecord> {
    let value: serde_json::Value =
        serde_json::from_slice(line).map_err(|e| RepositoryError::CorruptedData {
            line: number,
            message: e.to_string(),
        })?;

    ScoreRecord::from_value(&value).map_err(|e| RepositoryError::CorruptedData {
        line: number,
        message: e.to_string(),
    })
}

/// Truncate the file back to its last newline.
async fn discard_torn_tail(path: &Path) -> Result<()> {
    let mut file = match OpenOptions::new().read(true).write(true).open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(RepositoryError::Io(e)),
    };

    let len = file.metadata().await.map_err(RepositoryError::Io)?.len();
    if len == 0 {
        return Ok(());
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .await
        .map_err(RepositoryError::Io)?;
    file.read_exact(&mut last)
        .await
        .map_err(RepositoryError::Io)?;
    if last[0] == b'\n' {
        return Ok(());
    }

    let mut contents = Vec::new();
    file.seek(SeekFrom::Start(0))
        .await
        .map_err(RepositoryError::Io)?;
    file.read_to_end(&mut contents)
        .await
        .map_err(RepositoryError::Io)?;

    let keep = contents
        .iter()
        .rposition(|byte| *byte == b'\n')
        .map_or(0, |index| index + 1);

    tracing::warn!(
        "Discarding {} bytes of an interrupted append in {}",
        contents.len() - keep,
        path.display()
    );
    file.set_len(keep as u64)
        .await
        .map_err(RepositoryError::Io)?;

    Ok(())
}

#[async_trait]
impl ScoreRepository for FileScoreRepository {
    async fn find_all(&self) -> Result<Vec<ScoreRecord>> {
        let contents = match fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepositoryError::Io(e)),
        };

        let mut records = Vec::new();
        for (index, line) in contents.split_inclusive(|byte| *byte == b'\n').enumerate() {
            let Some(line) = line.strip_suffix(b"\n") else {
                tracing::warn!(
                    "Skipping unterminated line {} in {}",
                    index + 1,
                    self.path.display()
                );
                break;
            };
            if line.trim_ascii().is_empty() {
                continue;
            }
            records.push(parse_line(index + 1, line)?);
        }

        Ok(records)
    }

    async fn append(&self, record: &ScoreRecord) -> Result<()> {
        let mut line =
            serde_json::to_string(record).map_err(|e| RepositoryError::Json(e.to_string()))?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        discard_torn_tail(&self.path).await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(RepositoryError::Io)?;

        file.write_all(line.as_bytes())
            .await
            .map_err(RepositoryError::Io)?;
        file.flush().await.map_err(RepositoryError::Io)?;

        tracing::debug!("Appended score for {:?} to {}", record.name, self.path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileScoreRepository::new(dir.path().join("nested/scores.jsonl")).unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(dir.path().join("nested").is_dir());
    }

    #[tokio::test]
    async fn test_append_then_find_all_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.jsonl");
        let repo = FileScoreRepository::new(&path).unwrap();

        let first = ScoreRecord::new("Al", 100, "2021-01-01");
        let second = ScoreRecord::from_value(
            &json!({"name": "Bo", "high_score": 12.5, "date": "2021-01-02", "mode": "timed"}),
        )
        .unwrap();

        repo.append(&first).await.unwrap();
        repo.append(&second).await.unwrap();

        let reopened = FileScoreRepository::new(&path).unwrap();
        assert_eq!(reopened.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_corrupted_line_is_reported_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.jsonl");
        std::fs::write(
            &path,
            "{\"name\":\"Al\",\"high_score\":1,\"date\":\"d\"}\n\n{\"name\":\"Bo\"}\n",
        )
        .unwrap();

        let repo = FileScoreRepository::new(&path).unwrap();
        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData { line: 3, .. }));
    }

    #[tokio::test]
    async fn test_interrupted_append_is_skipped_then_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.jsonl");
        let mut contents = b"{\"name\":\"Al\",\"high_score\":1,\"date\":\"d\"}\n".to_vec();
        // Cut off mid-way through a multi-byte character.
        contents.extend_from_slice(&"{\"name\":\"Zoë".as_bytes()[..12]);
        std::fs::write(&path, &contents).unwrap();

        let repo = FileScoreRepository::new(&path).unwrap();
        let al = ScoreRecord::new("Al", 1, "d");
        assert_eq!(repo.find_all().await.unwrap(), vec![al.clone()]);

        let bo = ScoreRecord::new("Bo", 2, "e");
        repo.append(&bo).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![al, bo]);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_torn_only_line_leaves_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.jsonl");
        std::fs::write(&path, "{\"name\":\"A").unwrap();

        let repo = FileScoreRepository::new(&path).unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());

        let record = ScoreRecord::new("Al", 3, "d");
        repo.append(&record).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap(), vec![record]);
    }
}
