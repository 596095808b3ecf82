use std::{
    fs::File,
    io::BufWriter,
    path::PathBuf,
};

pub struct FileWithPath {
    pub file: BufWriter<File>,
    pub path: PathBuf,
}

impl FileWithPath {
    pub fn new(file: File, path: PathBuf) -> Self {
        Self {
            file: BufWriter::new(file),
            path,
        }
    }

    /// Flushes buffered data and closes the handle
    pub fn close(self) -> std::io::Result<()> {
        // Flushes the buffer, the handle is closed when dropped
        self.file.into_inner().map_err(|e| e.into_error())?;

        Ok(())
    }
}
