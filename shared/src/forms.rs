/// Per-tool panel form state.
///
/// Every open panel owns exactly one form. Option buttons mutate it and the
/// panel re-renders from it; processing only reads it. Numeric options clamp
/// at their range edges, list options cycle with wrap-around, and option
/// changes never touch the attached files.
use crate::errors::FileError;
use crate::files::{self, FileInfo};
use crate::site::{self, Platform};
use crate::tools::ToolId;

// ====== OPTION TABLES ======

/// A selectable option, straight from the product catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub blurb: Option<&'static str>,
}

const fn choice(value: &'static str, label: &'static str) -> FormatChoice {
    FormatChoice { value, label, blurb: None }
}

const fn choice_with(
    value: &'static str,
    label: &'static str,
    blurb: &'static str,
) -> FormatChoice {
    FormatChoice { value, label, blurb: Some(blurb) }
}

pub const IMAGE_OUTPUT_FORMATS: [FormatChoice; 6] = [
    choice("original", "Keep Original"),
    choice("jpg", "JPEG"),
    choice("png", "PNG"),
    choice("webp", "WebP"),
    choice("avif", "AVIF"),
    choice("bmp", "BMP"),
];

pub const RESIZE_PRESETS: [(u32, u32); 4] =
    [(1920, 1080), (1280, 720), (800, 600), (400, 400)];

pub const AUDIO_OUTPUT_FORMATS: [FormatChoice; 6] = [
    choice_with("mp3", "MP3", "Most compatible"),
    choice_with("wav", "WAV", "Lossless quality"),
    choice_with("flac", "FLAC", "Compressed lossless"),
    choice_with("aac", "AAC", "Apple standard"),
    choice_with("ogg", "OGG", "Open source"),
    choice_with("m4a", "M4A", "iTunes format"),
];

pub const SAMPLE_RATES: [(u32, &str); 4] = [
    (22050, "22,050 Hz"),
    (44100, "44,100 Hz (CD Quality)"),
    (48000, "48,000 Hz (Studio)"),
    (96000, "96,000 Hz (High Res)"),
];

pub const DOCUMENT_CONVERSIONS: [FormatChoice; 5] = [
    choice("pdf", "PDF"),
    choice("docx", "Word Document"),
    choice("csv", "CSV"),
    choice("txt", "Plain Text"),
    choice("rtf", "Rich Text Format"),
];

pub const FONT_OUTPUT_FORMATS: [FormatChoice; 4] = [
    choice_with("woff2", "WOFF2", "Best compression"),
    choice_with("woff", "WOFF", "Good compatibility"),
    choice_with("ttf", "TTF", "Universal support"),
    choice_with("otf", "OTF", "OpenType features"),
];

/// Subsetting presets: (label, unicode ranges).
pub const UNICODE_PRESETS: [(&str, &str); 5] = [
    ("Latin Basic", "U+0020-007F"),
    ("Latin Extended", "U+0020-007F,U+00A0-00FF,U+0100-017F"),
    ("Cyrillic", "U+0400-04FF"),
    ("Greek", "U+0370-03FF"),
    ("Arabic", "U+0600-06FF"),
];

// ====== FIELD ACTIONS ======

/// Option buttons a panel keyboard can press. Actions that do not belong to
/// the currently open form are ignored (stale keyboards after a panel
/// switch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    CompressionUp,
    CompressionDown,
    ResizeCycle,
    FormatCycle,
    BitrateUp,
    BitrateDown,
    SampleRateCycle,
    ConversionCycle,
    SubsettingToggle,
    RangesCycle,
}

// ====== PER-TOOL FORMS ======

#[derive(Debug, Clone, PartialEq)]
pub struct ImageForm {
    pub files: Vec<FileInfo>,
    /// Compression level in percent, 10 to 100 in steps of 5.
    pub compression: u8,
    /// Target dimensions; `None` keeps the original size.
    pub resize: Option<(u32, u32)>,
    pub format_idx: usize,
    pub error: Option<String>,
}

impl Default for ImageForm {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            compression: 80,
            resize: None,
            format_idx: 0,
            error: None,
        }
    }
}

impl ImageForm {
    pub fn format(&self) -> &'static FormatChoice {
        &IMAGE_OUTPUT_FORMATS[self.format_idx]
    }

    fn bump_compression(&mut self, delta: i16) {
        let next = self.compression as i16 + delta;
        self.compression = next.clamp(10, 100) as u8;
    }

    /// None -> 1920x1080 -> 1280x720 -> 800x600 -> 400x400 -> None.
    fn cycle_resize(&mut self) {
        self.resize = match self.resize {
            None => Some(RESIZE_PRESETS[0]),
            Some(current) => match RESIZE_PRESETS.iter().position(|p| *p == current) {
                Some(idx) if idx + 1 < RESIZE_PRESETS.len() => Some(RESIZE_PRESETS[idx + 1]),
                _ => None,
            },
        };
    }

    fn cycle_format(&mut self) {
        self.format_idx = (self.format_idx + 1) % IMAGE_OUTPUT_FORMATS.len();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioForm {
    pub files: Vec<FileInfo>,
    pub format_idx: usize,
    /// Bitrate in kbps, 64 to 320 in steps of 32.
    pub bitrate: u32,
    pub sample_rate_idx: usize,
    pub error: Option<String>,
}

impl Default for AudioForm {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            format_idx: 0,
            bitrate: 320,
            sample_rate_idx: 1, // 44,100 Hz
            error: None,
        }
    }
}

impl AudioForm {
    pub fn format(&self) -> &'static FormatChoice {
        &AUDIO_OUTPUT_FORMATS[self.format_idx]
    }

    pub fn sample_rate(&self) -> u32 {
        SAMPLE_RATES[self.sample_rate_idx].0
    }

    pub fn sample_rate_label(&self) -> &'static str {
        SAMPLE_RATES[self.sample_rate_idx].1
    }

    fn cycle_format(&mut self) {
        self.format_idx = (self.format_idx + 1) % AUDIO_OUTPUT_FORMATS.len();
    }

    fn bump_bitrate(&mut self, delta: i32) {
        let next = self.bitrate as i32 + delta;
        self.bitrate = next.clamp(64, 320) as u32;
    }

    fn cycle_sample_rate(&mut self) {
        self.sample_rate_idx = (self.sample_rate_idx + 1) % SAMPLE_RATES.len();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentForm {
    pub files: Vec<FileInfo>,
    pub conversion_idx: usize,
    pub error: Option<String>,
}

impl Default for DocumentForm {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            conversion_idx: 0,
            error: None,
        }
    }
}

impl DocumentForm {
    pub fn conversion(&self) -> &'static FormatChoice {
        &DOCUMENT_CONVERSIONS[self.conversion_idx]
    }

    fn cycle_conversion(&mut self) {
        self.conversion_idx = (self.conversion_idx + 1) % DOCUMENT_CONVERSIONS.len();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontForm {
    pub files: Vec<FileInfo>,
    pub format_idx: usize,
    pub subsetting: bool,
    /// Unicode ranges for subsetting; empty until a preset is picked.
    pub unicode_ranges: String,
    pub error: Option<String>,
}

impl Default for FontForm {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            format_idx: 0,
            subsetting: false,
            unicode_ranges: String::new(),
            error: None,
        }
    }
}

impl FontForm {
    pub fn format(&self) -> &'static FormatChoice {
        &FONT_OUTPUT_FORMATS[self.format_idx]
    }

    /// Preset label for the current ranges: "none" while empty, "custom" for
    /// anything that is not a preset.
    pub fn ranges_label(&self) -> &'static str {
        if self.unicode_ranges.is_empty() {
            return "none";
        }
        UNICODE_PRESETS
            .iter()
            .find(|(_, ranges)| *ranges == self.unicode_ranges)
            .map(|(label, _)| *label)
            .unwrap_or("custom")
    }

    fn cycle_format(&mut self) {
        self.format_idx = (self.format_idx + 1) % FONT_OUTPUT_FORMATS.len();
    }

    fn toggle_subsetting(&mut self) {
        self.subsetting = !self.subsetting;
    }

    /// Walk the preset list; anything unrecognized restarts at the first
    /// preset.
    fn cycle_ranges(&mut self) {
        let next = match UNICODE_PRESETS
            .iter()
            .position(|(_, ranges)| *ranges == self.unicode_ranges)
        {
            Some(idx) => (idx + 1) % UNICODE_PRESETS.len(),
            None => 0,
        };
        self.unicode_ranges = UNICODE_PRESETS[next].1.to_string();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadForm {
    pub url: Option<String>,
    pub platform: Option<Platform>,
    pub format_idx: usize,
}

impl DownloadForm {
    /// Set the pending URL, re-run detection, and auto-select the first
    /// format. Empty input clears URL and platform together.
    pub fn set_url(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.clear();
            return;
        }
        self.url = Some(trimmed.to_string());
        self.platform = site::detect(trimmed).map(|s| s.platform);
        self.format_idx = 0;
    }

    /// Format list for the detected platform; empty while undetected.
    pub fn formats(&self) -> &'static [&'static str] {
        match self.platform {
            Some(platform) => site::site_info(platform).formats,
            None => &[],
        }
    }

    pub fn selected_format(&self) -> Option<&'static str> {
        self.formats().get(self.format_idx).copied()
    }

    /// Out-of-range picks (stale keyboards) are ignored.
    pub fn select_format(&mut self, idx: usize) {
        if idx < self.formats().len() {
            self.format_idx = idx;
        }
    }

    pub fn clear(&mut self) {
        self.url = None;
        self.platform = None;
        self.format_idx = 0;
    }
}

// ====== PANEL FORM ======

#[derive(Debug, Clone, PartialEq)]
pub enum PanelForm {
    Download(DownloadForm),
    Image(ImageForm),
    Document(DocumentForm),
    Audio(AudioForm),
    Font(FontForm),
}

impl PanelForm {
    /// Default form for a tool.
    pub fn for_tool(tool: ToolId) -> Self {
        match tool {
            ToolId::Download => PanelForm::Download(DownloadForm::default()),
            ToolId::Image => PanelForm::Image(ImageForm::default()),
            ToolId::Document => PanelForm::Document(DocumentForm::default()),
            ToolId::Audio => PanelForm::Audio(AudioForm::default()),
            ToolId::Font => PanelForm::Font(FontForm::default()),
        }
    }

    pub fn tool(&self) -> ToolId {
        match self {
            PanelForm::Download(_) => ToolId::Download,
            PanelForm::Image(_) => ToolId::Image,
            PanelForm::Document(_) => ToolId::Document,
            PanelForm::Audio(_) => ToolId::Audio,
            PanelForm::Font(_) => ToolId::Font,
        }
    }

    /// Apply an option button press; mismatched actions are no-ops.
    pub fn apply(&mut self, action: FieldAction) {
        match (self, action) {
            (PanelForm::Image(f), FieldAction::CompressionUp) => f.bump_compression(5),
            (PanelForm::Image(f), FieldAction::CompressionDown) => f.bump_compression(-5),
            (PanelForm::Image(f), FieldAction::ResizeCycle) => f.cycle_resize(),
            (PanelForm::Image(f), FieldAction::FormatCycle) => f.cycle_format(),
            (PanelForm::Audio(f), FieldAction::FormatCycle) => f.cycle_format(),
            (PanelForm::Audio(f), FieldAction::BitrateUp) => f.bump_bitrate(32),
            (PanelForm::Audio(f), FieldAction::BitrateDown) => f.bump_bitrate(-32),
            (PanelForm::Audio(f), FieldAction::SampleRateCycle) => f.cycle_sample_rate(),
            (PanelForm::Document(f), FieldAction::ConversionCycle) => f.cycle_conversion(),
            (PanelForm::Font(f), FieldAction::FormatCycle) => f.cycle_format(),
            (PanelForm::Font(f), FieldAction::SubsettingToggle) => f.toggle_subsetting(),
            (PanelForm::Font(f), FieldAction::RangesCycle) => f.cycle_ranges(),
            _ => {}
        }
    }

    /// Attached files; the download panel takes none.
    pub fn files(&self) -> &[FileInfo] {
        match self {
            PanelForm::Image(f) => &f.files,
            PanelForm::Document(f) => &f.files,
            PanelForm::Audio(f) => &f.files,
            PanelForm::Font(f) => &f.files,
            PanelForm::Download(_) => &[],
        }
    }

    fn files_mut(&mut self) -> Option<&mut Vec<FileInfo>> {
        match self {
            PanelForm::Image(f) => Some(&mut f.files),
            PanelForm::Document(f) => Some(&mut f.files),
            PanelForm::Audio(f) => Some(&mut f.files),
            PanelForm::Font(f) => Some(&mut f.files),
            PanelForm::Download(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelForm::Image(f) => f.error.as_deref(),
            PanelForm::Document(f) => f.error.as_deref(),
            PanelForm::Audio(f) => f.error.as_deref(),
            PanelForm::Font(f) => f.error.as_deref(),
            PanelForm::Download(_) => None,
        }
    }

    fn set_error(&mut self, message: Option<String>) {
        match self {
            PanelForm::Image(f) => f.error = message,
            PanelForm::Document(f) => f.error = message,
            PanelForm::Audio(f) => f.error = message,
            PanelForm::Font(f) => f.error = message,
            PanelForm::Download(_) => {}
        }
    }

    /// Validate and attach a batch of files. The first invalid file rejects
    /// the whole batch; the error text is kept on the form for inline
    /// display.
    pub fn attach_files(&mut self, batch: Vec<FileInfo>) -> Result<(), FileError> {
        let tool = self.tool();
        if let Err(err) = files::validate_batch(tool, &batch) {
            self.set_error(Some(err.to_string()));
            return Err(err);
        }
        self.set_error(None);
        if let Some(list) = self.files_mut() {
            list.extend(batch);
        }
        Ok(())
    }

    /// Clear All: drops the attached files and any stale error.
    pub fn clear_files(&mut self) {
        if let Some(list) = self.files_mut() {
            list.clear();
        }
        self.set_error(None);
    }

    /// Confirmation line for the Process button, worded exactly like the
    /// product copy. `None` while the file list is empty and always `None`
    /// for the download panel, which has its own flow.
    pub fn process_summary(&self) -> Option<String> {
        let count = self.files().len();
        if count == 0 {
            return None;
        }
        match self {
            PanelForm::Image(f) => Some(format!(
                "Processing {} image(s) with {}% compression",
                count, f.compression
            )),
            PanelForm::Audio(f) => Some(format!(
                "Converting {} audio file(s) to {} at {}kbps",
                count,
                f.format().value.to_uppercase(),
                f.bitrate
            )),
            PanelForm::Document(f) => Some(format!(
                "Converting {} document(s) to {}",
                count,
                f.conversion().value.to_uppercase()
            )),
            PanelForm::Font(f) => Some(format!(
                "Converting {} font file(s) to {}",
                count,
                f.format().value.to_uppercase()
            )),
            PanelForm::Download(_) => None,
        }
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;

    fn file_named(name: &str) -> FileInfo {
        FileInfo {
            name: name.to_string(),
            size_bytes: 1024,
            mime: None,
        }
    }

    #[test]
    fn test_defaults_per_tool() {
        match PanelForm::for_tool(ToolId::Image) {
            PanelForm::Image(f) => {
                assert_eq!(f.compression, 80);
                assert_eq!(f.resize, None);
                assert_eq!(f.format().value, "original");
            }
            other => panic!("unexpected form: {:?}", other),
        }
        match PanelForm::for_tool(ToolId::Audio) {
            PanelForm::Audio(f) => {
                assert_eq!(f.format().value, "mp3");
                assert_eq!(f.bitrate, 320);
                assert_eq!(f.sample_rate(), 44100);
            }
            other => panic!("unexpected form: {:?}", other),
        }
        match PanelForm::for_tool(ToolId::Font) {
            PanelForm::Font(f) => {
                assert_eq!(f.format().value, "woff2");
                assert!(!f.subsetting);
                assert_eq!(f.ranges_label(), "none");
            }
            other => panic!("unexpected form: {:?}", other),
        }
    }

    #[test]
    fn test_compression_clamps() {
        let mut form = PanelForm::for_tool(ToolId::Image);
        for _ in 0..10 {
            form.apply(FieldAction::CompressionUp);
        }
        match &form {
            PanelForm::Image(f) => assert_eq!(f.compression, 100),
            _ => unreachable!(),
        }
        for _ in 0..30 {
            form.apply(FieldAction::CompressionDown);
        }
        match &form {
            PanelForm::Image(f) => assert_eq!(f.compression, 10),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_resize_cycle_round_trip() {
        let mut f = ImageForm::default();
        let mut seen = vec![f.resize];
        for _ in 0..RESIZE_PRESETS.len() + 1 {
            f.cycle_resize();
            seen.push(f.resize);
        }
        assert_eq!(seen.first(), Some(&None));
        assert_eq!(seen[1], Some((1920, 1080)));
        assert_eq!(seen.last(), Some(&None)); // full cycle lands back on original size
    }

    #[test]
    fn test_image_format_wraps() {
        let mut f = ImageForm::default();
        for _ in 0..IMAGE_OUTPUT_FORMATS.len() {
            f.cycle_format();
        }
        assert_eq!(f.format().value, "original");
    }

    #[test]
    fn test_bitrate_clamps() {
        let mut f = AudioForm::default();
        f.bump_bitrate(32);
        assert_eq!(f.bitrate, 320); // already at the top
        for _ in 0..20 {
            f.bump_bitrate(-32);
        }
        assert_eq!(f.bitrate, 64);
    }

    #[test]
    fn test_sample_rate_cycle() {
        let mut f = AudioForm::default();
        assert_eq!(f.sample_rate(), 44100);
        f.cycle_sample_rate();
        assert_eq!(f.sample_rate(), 48000);
        f.cycle_sample_rate();
        assert_eq!(f.sample_rate(), 96000);
        f.cycle_sample_rate();
        assert_eq!(f.sample_rate(), 22050);
    }

    #[test]
    fn test_document_conversion_cycle() {
        let mut f = DocumentForm::default();
        assert_eq!(f.conversion().value, "pdf");
        f.cycle_conversion();
        assert_eq!(f.conversion().value, "docx");
        assert_eq!(f.conversion().label, "Word Document");
    }

    #[test]
    fn test_font_ranges_cycle() {
        let mut f = FontForm::default();
        f.cycle_ranges();
        assert_eq!(f.unicode_ranges, "U+0020-007F");
        assert_eq!(f.ranges_label(), "Latin Basic");
        f.cycle_ranges();
        assert_eq!(f.ranges_label(), "Latin Extended");

        f.unicode_ranges = "U+1234-5678".to_string();
        assert_eq!(f.ranges_label(), "custom");
        f.cycle_ranges(); // unrecognized value restarts the walk
        assert_eq!(f.ranges_label(), "Latin Basic");
    }

    #[test]
    fn test_subsetting_toggle() {
        let mut form = PanelForm::for_tool(ToolId::Font);
        form.apply(FieldAction::SubsettingToggle);
        match &form {
            PanelForm::Font(f) => assert!(f.subsetting),
            _ => unreachable!(),
        }
        form.apply(FieldAction::SubsettingToggle);
        match &form {
            PanelForm::Font(f) => assert!(!f.subsetting),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_mismatched_action_is_noop() {
        let mut form = PanelForm::for_tool(ToolId::Document);
        let before = form.clone();
        form.apply(FieldAction::BitrateUp);
        form.apply(FieldAction::SubsettingToggle);
        assert_eq!(form, before);
    }

    #[test]
    fn test_download_set_url_detects_platform() {
        let mut f = DownloadForm::default();
        f.set_url("https://youtu.be/abc123");
        assert_eq!(f.platform, Some(Platform::Youtube));
        assert_eq!(f.formats(), &["MP4", "MP3", "WEBM"]);
        assert_eq!(f.selected_format(), Some("MP4")); // first format auto-selected

        f.select_format(2);
        assert_eq!(f.selected_format(), Some("WEBM"));

        // New URL resets the pick
        f.set_url("https://github.com/rust-lang/rust");
        assert_eq!(f.selected_format(), Some("ZIP"));
    }

    #[test]
    fn test_download_unknown_url_has_no_formats() {
        let mut f = DownloadForm::default();
        f.set_url("https://example.com/page");
        assert_eq!(f.platform, None);
        assert!(f.formats().is_empty());
        assert_eq!(f.selected_format(), None);
    }

    #[test]
    fn test_download_empty_url_clears_state() {
        let mut f = DownloadForm::default();
        f.set_url("https://youtube.com/watch?v=x");
        f.select_format(1);
        f.set_url("   ");
        assert_eq!(f.url, None);
        assert_eq!(f.platform, None);
        assert_eq!(f.format_idx, 0);
    }

    #[test]
    fn test_download_select_out_of_range_ignored() {
        let mut f = DownloadForm::default();
        f.set_url("https://tiktok.com/@u/video/1");
        f.select_format(5);
        assert_eq!(f.selected_format(), Some("MP4"));
    }

    #[test]
    fn test_attach_files_and_clear() {
        let mut form = PanelForm::for_tool(ToolId::Image);
        assert!(form.attach_files(vec![file_named("a.png"), file_named("b.jpg")]).is_ok());
        assert_eq!(form.files().len(), 2);
        assert!(form.error().is_none());

        form.clear_files();
        assert!(form.files().is_empty());
    }

    #[test]
    fn test_attach_rejects_whole_batch() {
        let mut form = PanelForm::for_tool(ToolId::Image);
        let batch = vec![file_named("ok.png"), file_named("nope.mp3"), file_named("fine.gif")];
        assert_eq!(form.attach_files(batch), Err(FileError::UnsupportedFormat));
        assert!(form.files().is_empty()); // valid files in the batch are not kept
        assert_eq!(form.error(), Some("File format is not supported"));
    }

    #[test]
    fn test_successful_attach_clears_error() {
        let mut form = PanelForm::for_tool(ToolId::Image);
        let _ = form.attach_files(vec![file_named("bad.exe")]);
        assert!(form.error().is_some());
        assert!(form.attach_files(vec![file_named("good.webp")]).is_ok());
        assert!(form.error().is_none());
        assert_eq!(form.files().len(), 1);
    }

    #[test]
    fn test_option_changes_keep_files() {
        let mut form = PanelForm::for_tool(ToolId::Image);
        form.attach_files(vec![file_named("a.png")]).unwrap();
        form.apply(FieldAction::CompressionUp);
        form.apply(FieldAction::FormatCycle);
        form.apply(FieldAction::ResizeCycle);
        assert_eq!(form.files().len(), 1);
    }

    #[test]
    fn test_process_summaries() {
        let mut image = PanelForm::for_tool(ToolId::Image);
        assert_eq!(image.process_summary(), None); // nothing attached yet
        image.attach_files(vec![file_named("a.png"), file_named("b.png")]).unwrap();
        assert_eq!(
            image.process_summary().unwrap(),
            "Processing 2 image(s) with 80% compression"
        );

        let mut audio = PanelForm::for_tool(ToolId::Audio);
        audio
            .attach_files(vec![FileInfo {
                name: "song.wav".to_string(),
                size_bytes: 2048,
                mime: None,
            }])
            .unwrap();
        assert_eq!(
            audio.process_summary().unwrap(),
            "Converting 1 audio file(s) to MP3 at 320kbps"
        );

        let mut doc = PanelForm::for_tool(ToolId::Document);
        doc.attach_files(vec![FileInfo {
            name: "report.docx".to_string(),
            size_bytes: 512,
            mime: None,
        }])
        .unwrap();
        assert_eq!(
            doc.process_summary().unwrap(),
            "Converting 1 document(s) to PDF"
        );

        let mut font = PanelForm::for_tool(ToolId::Font);
        font.attach_files(vec![FileInfo {
            name: "sans.ttf".to_string(),
            size_bytes: 256,
            mime: None,
        }])
        .unwrap();
        assert_eq!(
            font.process_summary().unwrap(),
            "Converting 1 font file(s) to WOFF2"
        );
    }

    #[test]
    fn test_download_panel_has_no_summary_or_files() {
        let form = PanelForm::for_tool(ToolId::Download);
        assert!(form.files().is_empty());
        assert_eq!(form.process_summary(), None);
    }
}
