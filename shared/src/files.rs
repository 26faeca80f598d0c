/// Attachment validation for tool panels.
///
/// Mirrors the product upload rules: a 50 MB cap shared by every panel, a
/// fixed extension allow-list per tool, and batch semantics where the first
/// invalid file rejects the whole batch.
use crate::config;
use crate::errors::FileError;
use crate::tools::ToolId;

/// A file attached to a panel. Metadata only; content is never fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size_bytes: u64,
    pub mime: Option<String>,
}

/// Extension allow-list for a tool's panel. The download panel takes no
/// files at all.
pub fn allowed_extensions(tool: ToolId) -> &'static [&'static str] {
    match tool {
        ToolId::Image => &config::SUPPORTED_IMAGE_FORMATS,
        ToolId::Document => &config::SUPPORTED_DOCUMENT_FORMATS,
        ToolId::Audio => &config::SUPPORTED_AUDIO_FORMATS,
        ToolId::Font => &config::SUPPORTED_FONT_FORMATS,
        ToolId::Download => &[],
    }
}

/// Lowercased suffix after the final dot; `None` when there is no usable
/// suffix.
fn extension(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    let ext = &name[idx + 1..];
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate one file: size cap first, then the extension allow-list.
pub fn validate(tool: ToolId, file: &FileInfo) -> Result<(), FileError> {
    if file.size_bytes > config::MAX_FILE_SIZE_BYTES {
        return Err(FileError::TooLarge);
    }
    let ext = extension(&file.name).ok_or(FileError::UnsupportedFormat)?;
    if !allowed_extensions(tool).contains(&ext.as_str()) {
        return Err(FileError::UnsupportedFormat);
    }
    Ok(())
}

/// Validate a batch; stops at the first invalid file.
pub fn validate_batch(tool: ToolId, files: &[FileInfo]) -> Result<(), FileError> {
    for file in files {
        validate(tool, file)?;
    }
    Ok(())
}

/// Human-readable size for panel file lists.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size_bytes: u64) -> FileInfo {
        FileInfo {
            name: name.to_string(),
            size_bytes,
            mime: None,
        }
    }

    #[test]
    fn test_size_cap_is_inclusive() {
        let at_cap = file("photo.jpg", config::MAX_FILE_SIZE_BYTES);
        assert!(validate(ToolId::Image, &at_cap).is_ok());

        let over = file("photo.jpg", config::MAX_FILE_SIZE_BYTES + 1);
        assert_eq!(validate(ToolId::Image, &over), Err(FileError::TooLarge));
    }

    #[test]
    fn test_size_checked_before_extension() {
        // Oversized AND wrongly typed reports the size problem.
        let both_wrong = file("video.mkv", config::MAX_FILE_SIZE_BYTES + 1);
        assert_eq!(validate(ToolId::Image, &both_wrong), Err(FileError::TooLarge));
    }

    #[test]
    fn test_unsupported_extension() {
        let f = file("photo.xyz", 100);
        assert_eq!(validate(ToolId::Image, &f), Err(FileError::UnsupportedFormat));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(validate(ToolId::Image, &file("PHOTO.JPG", 100)).is_ok());
        assert!(validate(ToolId::Font, &file("Sans.WOFF2", 100)).is_ok());
    }

    #[test]
    fn test_extensionless_name_rejected() {
        let f = file("README", 100);
        assert_eq!(validate(ToolId::Document, &f), Err(FileError::UnsupportedFormat));
        let trailing_dot = file("weird.", 100);
        assert_eq!(
            validate(ToolId::Document, &trailing_dot),
            Err(FileError::UnsupportedFormat)
        );
    }

    #[test]
    fn test_final_suffix_wins() {
        // Only the part after the last dot counts.
        assert!(validate(ToolId::Font, &file("font.v2.woff2", 100)).is_ok());
        assert_eq!(
            validate(ToolId::Font, &file("font.woff2.bak", 100)),
            Err(FileError::UnsupportedFormat)
        );
    }

    #[test]
    fn test_allow_lists_differ_per_tool() {
        let song = file("song.mp3", 100);
        assert!(validate(ToolId::Audio, &song).is_ok());
        assert_eq!(validate(ToolId::Image, &song), Err(FileError::UnsupportedFormat));

        let doc = file("paper.pdf", 100);
        assert!(validate(ToolId::Document, &doc).is_ok());
        assert_eq!(validate(ToolId::Audio, &doc), Err(FileError::UnsupportedFormat));
    }

    #[test]
    fn test_download_accepts_no_files() {
        assert!(allowed_extensions(ToolId::Download).is_empty());
        let f = file("clip.mp4", 100);
        assert_eq!(
            validate(ToolId::Download, &f),
            Err(FileError::UnsupportedFormat)
        );
    }

    #[test]
    fn test_batch_stops_at_first_invalid() {
        let batch = vec![
            file("a.png", 100),
            file("b.png", config::MAX_FILE_SIZE_BYTES + 1),
            file("c.xyz", 100),
        ];
        // The oversized file comes before the badly typed one.
        assert_eq!(
            validate_batch(ToolId::Image, &batch),
            Err(FileError::TooLarge)
        );

        let ok = vec![file("a.png", 100), file("b.gif", 200)];
        assert!(validate_batch(ToolId::Image, &ok).is_ok());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
