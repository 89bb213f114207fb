use super::FilesAction;
use anyhow::Result;
use chatdesk_core::ui::display::format_attachment;
use chatdesk_core::{
    AttachmentDirectory, ChatdeskConfig, UploadFile, UploadOutcome, make_attachment_store,
};
use console::style;
use std::path::Path;

/// Handle `files list` and `files upload`
pub async fn handle_files_command(config: &ChatdeskConfig, action: FilesAction) -> Result<()> {
    let directory = AttachmentDirectory::new(make_attachment_store(config)?);

    match action {
        FilesAction::List => {
            directory.refresh().await;
        }
        FilesAction::Upload { path } => {
            upload_path(&directory, &path).await;
        }
    }

    print_listing(&directory);
    Ok(())
}

/// Upload one file from disk; read failures are logged and skip the upload
pub async fn upload_path(directory: &AttachmentDirectory, path: &Path) {
    let file = match UploadFile::from_path(path).await {
        Ok(file) => Some(file),
        Err(err) => {
            tracing::error!("upload error: {err}");
            None
        }
    };

    match directory.upload(file).await {
        UploadOutcome::Uploaded(_) => {
            println!("{} uploaded {}", style("✓").green(), path.display());
        }
        // already logged by the directory
        UploadOutcome::Failed(_) | UploadOutcome::Skipped => {}
    }
}

pub fn print_listing(directory: &AttachmentDirectory) {
    let listing = directory.listing();
    if listing.is_empty() {
        println!("{}", style("No files uploaded yet.").dim());
        return;
    }
    for attachment in &listing {
        println!("{}", format_attachment(attachment));
    }
}
