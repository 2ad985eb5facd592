use std::path::PathBuf;

use pixview_core::io::image_io::DecodedImage;
use pixview_core::observe::SourceId;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file for the given source assignment.
    LoadImage { source: SourceId, path: PathBuf },
}

/// Results sent back to the UI thread, from the worker or a file dialog.
pub enum WorkerResult {
    ImageLoaded {
        source: SourceId,
        path: PathBuf,
        image: DecodedImage,
    },
    /// The file dialog closed; `None` if it was cancelled.
    FilePicked {
        path: Option<PathBuf>,
    },
    /// Decoding failed for the given source assignment.
    Error {
        source: SourceId,
        message: String,
    },
}
