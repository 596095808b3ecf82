use crate::files::FileWithPath;

/// Closes a file, logging instead of returning any failure.
///
/// Used where an error has nowhere to go, such as during drop.
pub fn close_file_logged(file: FileWithPath) {
    let path = file.path.clone();
    match file.close() {
        Ok(_) => {
            log::debug!("closed log file {path:?}");
        }
        Err(e) => {
            log::error!("failed to close log file {:?}: {:?}", path, e);
        }
    }
}
