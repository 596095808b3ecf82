use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    cleanup,
    config::LogFileConfig,
    errors::Error,
    file_name,
    files::FileWithPath,
    functions::{self, OpenMode},
};

/// A test-suite log file, open from construction until closed or dropped.
///
/// Text is written through [`Write`]. Dropping an open log file flushes and
/// closes it; failures at that point are logged, never raised.
pub struct LogFile {
    /// `None` once closed
    file: Option<FileWithPath>,
    path: PathBuf,
}

impl LogFile {
    /// Opens `<base_name>[.<locale>]<suffix>.testlog`.
    ///
    /// A new file is truncated and starts with a UTF-8 byte-order mark,
    /// otherwise writes are appended to whatever the file already holds.
    pub fn open(
        base_name: &str,
        has_locale_specific_data: bool,
        is_new_file: bool,
        config: &LogFileConfig,
    ) -> Result<Self, Error> {
        let path = file_name::log_file_name(base_name, has_locale_specific_data, config)?;
        let mode = OpenMode::for_new_file(is_new_file);

        let file = functions::open_file(&path, mode)?;
        let mut file = FileWithPath::new(file, path.clone());
        log::debug!("opened log file {path:?} ({mode:?})");

        if is_new_file {
            functions::write_byte_order_mark(&mut file.file)?;
            log::trace!("wrote byte-order mark to {path:?}");
        }

        Ok(Self {
            file: Some(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Flushes and closes the file. Closing an already closed file does nothing.
    pub fn close(&mut self) -> Result<(), Error> {
        if let Some(file) = self.file.take() {
            file.close()?;
            log::debug!("closed log file {:?}", self.path);
        }

        Ok(())
    }

    fn handle(&mut self) -> io::Result<&mut FileWithPath> {
        self.file.as_mut().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotConnected,
                format!("log file {:?} is closed", self.path),
            )
        })
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.handle()?.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.handle()?.file.flush()
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            cleanup::close_file_logged(file);
        }
    }
}
