use crate::errors::Error;
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

/// U+FEFF encoded as UTF-8
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Discards any existing content
    Truncate,
    /// Keeps existing content, creating the file if needed
    Append,
}

impl OpenMode {
    pub fn for_new_file(is_new_file: bool) -> Self {
        if is_new_file {
            OpenMode::Truncate
        } else {
            OpenMode::Append
        }
    }
}

pub fn open_file(path: &Path, mode: OpenMode) -> Result<File, Error> {
    let mut options = OpenOptions::new();
    options.create(true);

    match mode {
        OpenMode::Truncate => options.write(true).truncate(true),
        OpenMode::Append => options.append(true),
    };

    Ok(options.open(path)?)
}

pub fn write_byte_order_mark<W: Write>(writer: &mut W) -> Result<(), Error> {
    writer.write_all(&UTF8_BOM)?;

    Ok(())
}
