use std::{
    ffi::OsString,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;
use serde::Serialize;
use tokio::{
    fs::{self, File},
    io::{AsyncWriteExt, BufWriter},
};

use crate::{
    error::{GenerateError, Result},
    models::Person,
};

// Records are serialized into a chunk buffer and flushed every CHUNK_SIZE records.
const CHUNK_SIZE: usize = 1000;

/// Writes all records as one compact JSON array, replacing `path`.
pub async fn write(people: &[Person], path: &Path) -> Result<()> {
    write_stream(people, path, &ProgressBar::hidden()).await?;
    Ok(())
}

/// Streams records into `path` as one compact JSON array and returns how many
/// were written.
///
/// Symlinks are followed, so the file they point to is the one replaced. The
/// array goes to a temporary file next to that target, which takes over the
/// target's permissions and is renamed over it once complete. On failure the
/// temporary file is removed and the target is left untouched. When the
/// target's directory does not allow new files but the target itself exists,
/// the target is truncated and written in place.
pub async fn write_stream<I>(people: I, path: &Path, progress: &ProgressBar) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let target = resolve_target(path).await;
    let existing = fs::metadata(&target)
        .await
        .ok()
        .filter(|metadata| metadata.is_file());
    let temp_path = temp_path(&target)?;

    let file = match File::create(&temp_path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::PermissionDenied && existing.is_some() => {
            tracing::debug!(
                "Cannot create {}, writing {} in place",
                temp_path.display(),
                target.display()
            );
            let file = File::create(&target)
                .await
                .map_err(|e| GenerateError::io(path, e))?;
            return write_array(people, file, path, progress).await;
        }
        Err(e) => return Err(GenerateError::io(path, e)),
    };

    let result = async {
        let written = write_array(people, file, path, progress).await?;
        if let Some(metadata) = existing {
            fs::set_permissions(&temp_path, metadata.permissions())
                .await
                .map_err(|e| GenerateError::io(path, e))?;
        }
        fs::rename(&temp_path, &target)
            .await
            .map_err(|e| GenerateError::io(path, e))?;
        Ok::<_, GenerateError>(written)
    }
    .await;

    if result.is_err() {
        if let Err(e) = fs::remove_file(&temp_path).await {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("Could not remove {}: {:?}", temp_path.display(), e);
            }
        }
    }

    result
}

async fn write_array<I>(
    people: I,
    file: File,
    path: &Path,
    progress: &ProgressBar,
) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let io_error = |e| GenerateError::io(path, e);

    let mut writer = BufWriter::new(file);

    let mut buffer = Vec::with_capacity(CHUNK_SIZE * 256);
    buffer.push(b'[');

    let mut written = 0;
    for person in people {
        if written > 0 {
            buffer.push(b',');
        }
        serde_json::to_writer(&mut buffer, &person)?;
        written += 1;

        if written % CHUNK_SIZE == 0 {
            writer.write_all(&buffer).await.map_err(io_error)?;
            buffer.clear();
            progress.set_position(written as u64);
        }
    }

    buffer.push(b']');
    writer.write_all(&buffer).await.map_err(io_error)?;
    writer.flush().await.map_err(io_error)?;
    writer.get_ref().sync_all().await.map_err(io_error)?;
    progress.set_position(written as u64);

    tracing::debug!("Serialized {} records for {}", written, path.display());

    Ok(written)
}

/// The file a write to `path` should replace: the end of the symlink chain
/// when `path` exists, otherwise `path` itself.
async fn resolve_target(path: &Path) -> PathBuf {
    match fs::canonicalize(path).await {
        Ok(resolved) => resolved,
        Err(_) => path.to_path_buf(),
    }
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        GenerateError::io(
            path,
            Error::new(ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;

    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");

    Ok(path.with_file_name(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use tempfile::tempdir;

    #[tokio::test]
    async fn empty_input_writes_an_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");

        write(&[], &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn streamed_output_matches_serde_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");
        // Crosses a chunk boundary.
        let people = Generator::new(Some(9)).generate(CHUNK_SIZE + 3);

        let written = write_stream(&people, &path, &ProgressBar::hidden())
            .await
            .unwrap();

        assert_eq!(written, CHUNK_SIZE + 3);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, serde_json::to_string(&people).unwrap());
    }

    #[tokio::test]
    async fn overwrites_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");
        std::fs::write(&path, "previous contents that are longer than the new ones").unwrap();

        let people = Generator::new(Some(10)).generate(2);
        write(&people, &path).await.unwrap();

        let parsed: Vec<Person> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, people);
    }

    #[tokio::test]
    async fn leaves_no_temporary_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");

        write(&Generator::new(Some(11)).generate(5), &path).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![OsString::from("people.json")]);
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("people.json");

        let error = write(&Generator::new(Some(12)).generate(1), &path)
            .await
            .unwrap_err();

        match error {
            GenerateError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn directory_target_fails_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();

        let result = write(&Generator::new(Some(13)).generate(1), &path).await;

        assert!(matches!(result, Err(GenerateError::Io { .. })));
        assert!(path.is_dir());
        assert!(!dir.path().join(".taken.tmp").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn writes_through_a_symlink() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("link.json");
        std::fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write(&[], &link).await.unwrap();

        assert_eq!(std::fs::read_to_string(&real).unwrap(), "[]");
        assert!(
            std::fs::symlink_metadata(&link)
                .unwrap()
                .file_type()
                .is_symlink()
        );
        assert_eq!(std::fs::read_to_string(&link).unwrap(), "[]");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn keeps_the_permissions_of_a_replaced_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("people.json");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write(&Generator::new(Some(14)).generate(2), &path).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn temp_path_is_a_hidden_sibling() {
        assert_eq!(
            temp_path(Path::new("/data/people.json")).unwrap(),
            PathBuf::from("/data/.people.json.tmp")
        );
        assert!(temp_path(Path::new("/")).is_err());
    }
}
