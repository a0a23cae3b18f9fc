use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{EpsError, EpsResult};

/// Where bytes go until `finish`.
enum Target {
    /// New or regular-file destination: bytes land in a sibling `.partial` file
    /// that is renamed over the destination on success.
    Staged { partial: PathBuf },
    /// Existing non-regular destination (device, fifo, symlink): written in
    /// place and never removed.
    Direct,
}

/// Buffered destination file. Dropping it closes the handle; `finish` is the
/// only way to report the document as complete.
pub struct FileSink {
    path: PathBuf,
    target: Target,
    inner: BufWriter<File>,
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

impl FileSink {
    pub fn create(path: impl AsRef<Path>) -> EpsResult<Self> {
        let path = path.as_ref().to_path_buf();
        let staged = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta.file_type().is_file(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => return Err(EpsError::io(&path, err)),
        };

        let (target, file) = if staged {
            let partial = partial_path(&path);
            let file = File::create(&partial).map_err(|e| EpsError::io(&path, e))?;
            (Target::Staged { partial }, file)
        } else {
            let file = File::create(&path).map_err(|e| EpsError::io(&path, e))?;
            (Target::Direct, file)
        };

        Ok(Self {
            path,
            target,
            inner: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_staged(&self) -> bool {
        matches!(self.target, Target::Staged { .. })
    }

    /// Flushes buffered bytes. A staged file is synced and renamed over the
    /// destination; on any failure it is removed and the destination is left as it was.
    pub fn finish(self) -> EpsResult<()> {
        let Self {
            path,
            target,
            inner,
        } = self;
        let file = inner.into_inner().map_err(|e| e.into_error());

        let result = match &target {
            Target::Direct => file.map(drop),
            Target::Staged { partial } => file
                .and_then(|f| f.sync_all())
                .and_then(|()| std::fs::rename(partial, &path)),
        };

        result.map_err(|err| {
            remove_partial(&target);
            EpsError::io(&path, err)
        })
    }

    /// Closes the handle and removes the staged file, if any. The destination
    /// itself is never touched.
    pub fn discard(self) {
        let Self { target, inner, .. } = self;
        drop(inner);
        remove_partial(&target);
    }
}

fn remove_partial(target: &Target) {
    if let Target::Staged { partial } = target {
        if let Err(err) = std::fs::remove_file(partial) {
            tracing::warn!(path = %partial.display(), %err, "could not remove partial output");
        }
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
