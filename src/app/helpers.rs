//! Async helper functions for file dialogs and export

use std::path::PathBuf;

/// Default export name, `blob-YYYYMMDD-HHMMSS.svg` in local time
pub fn export_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("blob-{}.svg", now.format("%Y%m%d-%H%M%S"))
}

/// Ask for a destination and write `document` there
/// Returns `Ok(None)` when the dialog is cancelled
pub async fn save_svg(
    document: String,
    file_name: String,
    title: String,
) -> anyhow::Result<Option<PathBuf>> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title(&title)
        .set_file_name(&file_name)
        .add_filter("SVG", &["svg"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    tokio::fs::write(&path, document).await?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn export_name_uses_timestamp() {
        let now = chrono::Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 2)
            .single()
            .expect("unambiguous local time");
        assert_eq!(export_file_name(now), "blob-20240309-070502.svg");
    }
}
