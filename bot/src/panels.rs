/// Message texts and inline keyboards.
///
/// Every view the bot shows is rendered here as a pure function returning
/// `(text, keyboard)`, so handlers stay thin and the views are testable
/// without a network. Panels are edited in place: an option tap re-renders
/// the same message with the mutated form.
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use creatorhub_shared::config;
use creatorhub_shared::consent::ConsentState;
use creatorhub_shared::files;
use creatorhub_shared::forms::{
    AudioForm, DocumentForm, DownloadForm, FieldAction, FontForm, FormatChoice, ImageForm,
    PanelForm,
};
use creatorhub_shared::models::{HistoryEntry, Preferences};
use creatorhub_shared::site::{self, SiteInfo};
use creatorhub_shared::tools::{self, ToolId, GENERIC_DETAIL, TOOLS};

use crate::callback;

/// Text shown while the quick-download timer runs.
pub const DOWNLOAD_SPINNER: &str = "⏳ Starting download…";

/// Attached files listed before the "… and N more" line.
const FILE_LIST_LIMIT: usize = 5;

// ====== TOOL GRID ======

/// The landing view: product header, tool cards, URL prompt.
pub fn tools_grid(consented: bool) -> (String, InlineKeyboardMarkup) {
    let mut text = format!("✨ {} — {}\n\n", config::APP_NAME, config::APP_TAGLINE);
    for tool in TOOLS.iter() {
        text.push_str(&format!("{} {} — {}\n", tool.icon, tool.title, tool.description));
    }
    text.push_str(&format!("\nPaste any URL to get started:\n{}", config::URL_PROMPT));
    if !consented {
        text.push_str("\n\n🔒 Tools unlock after you agree to the terms below.");
    }

    let rows: Vec<Vec<InlineKeyboardButton>> = TOOLS
        .chunks(2)
        .map(|chunk| {
            chunk
                .iter()
                .map(|tool| {
                    InlineKeyboardButton::callback(
                        format!("{} {}", tool.icon, tool.title),
                        callback::encode_select_tool(tool.id.as_str()),
                    )
                })
                .collect()
        })
        .collect();

    (text, InlineKeyboardMarkup::new(rows))
}

// ====== CONSENT ======

/// The consent footer: one checkbox that gates every tool.
pub fn consent_footer(consent: &ConsentState) -> (String, InlineKeyboardMarkup) {
    let text = format!(
        "🛡 {} Terms\n\n\
         I understand this is a portfolio project and agree to use it responsibly.\n\n\
         Check the box to use the tools. By checking it, you acknowledge the terms \
         and agree to use {} for educational purposes only.",
        config::APP_NAME,
        config::APP_NAME
    );

    let checkbox = if consent.is_consented() {
        InlineKeyboardButton::callback(
            "☑️ I agree — tools unlocked",
            callback::encode_set_consent(false),
        )
    } else {
        InlineKeyboardButton::callback("⬜ I agree to the terms", callback::encode_set_consent(true))
    };
    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![checkbox],
        vec![InlineKeyboardButton::callback(
            "📋 Read full terms and conditions",
            callback::READ_TERMS,
        )],
    ]);

    (text, keyboard)
}

/// The full terms dialog with the staged read/agree pair. Informational:
/// the footer checkbox stays the gate.
pub fn terms_dialog(consent: &ConsentState) -> (String, InlineKeyboardMarkup) {
    let text = "\
⚠️ User Consent Required

Portfolio Project Notice: this is a demonstration project, NOT a commercial \
service. Do not use it for production work or sensitive content.

🛡 Terms of Use
• Legal Responsibility: you alone must hold the rights to any content you \
download, process, or convert. This includes copyright, licensing, and \
platform terms of service.
• Privacy & Data: files are processed locally when possible. No guarantees \
are made about data persistence or security.
• No Warranty: provided \"as is\". Results may vary. Not suitable for \
commercial use.

Copyright Notice: downloading copyrighted content without permission may \
violate copyright laws. Platform terms of service (YouTube, Instagram, etc.) \
may prohibit downloading. You assume all legal risks."
        .to_string();

    let read_label = if consent.has_read_terms() {
        "☑️ I have read the notice"
    } else {
        "⬜ I have read the notice"
    };
    let agree = if consent.agreed_to_terms() {
        InlineKeyboardButton::callback(
            "☑️ I agree at my own risk",
            callback::encode_set_agreement(false),
        )
    } else {
        InlineKeyboardButton::callback(
            "⬜ I agree at my own risk",
            callback::encode_set_agreement(true),
        )
    };
    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(read_label, callback::READ_TERMS)],
        vec![agree],
        vec![InlineKeyboardButton::callback("✖ I Decline", callback::DECLINE_TERMS)],
    ]);

    (text, keyboard)
}

// ====== TOOL PANELS ======

/// Render the open panel for a form.
pub fn tool_panel(form: &PanelForm) -> (String, InlineKeyboardMarkup) {
    match form {
        PanelForm::Download(f) => download_panel(f),
        PanelForm::Image(f) => image_panel(f),
        PanelForm::Document(f) => document_panel(f),
        PanelForm::Audio(f) => audio_panel(f),
        PanelForm::Font(f) => font_panel(f),
    }
}

/// Shown when a callback carries a tool id that is not in the catalog.
pub fn fallback_panel() -> (String, InlineKeyboardMarkup) {
    let text = format!(
        "❓ Tool not found\n\n{}\nThat tool id is not in the catalog.",
        GENERIC_DETAIL
    );
    let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "⬅️ Back to tools",
        callback::CLOSE_PANEL,
    )]]);
    (text, keyboard)
}

fn panel_header(id: ToolId) -> String {
    let info = tools::tool_info(id);
    format!("{} {}\n{}\n", info.icon, info.title, info.detail)
}

fn download_panel(f: &DownloadForm) -> (String, InlineKeyboardMarkup) {
    let mut text = panel_header(ToolId::Download);
    text.push('\n');
    match (&f.url, f.platform) {
        (Some(url), Some(platform)) => {
            let site = site::site_info(platform);
            text.push_str(&format!("🔗 {}\n", truncate(url, 60)));
            text.push_str(&format!("{} {} — ready to download\n", site.icon, site.name));
        }
        (Some(url), None) => {
            text.push_str(&format!("🔗 {}\n", truncate(url, 60)));
            text.push_str("🌐 No supported platform recognized.\n");
        }
        _ => {
            text.push_str("🔗 No URL yet — paste a link in this chat.\n");
        }
    }

    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    let formats = f.formats();
    if !formats.is_empty() {
        for chunk_start in (0..formats.len()).step_by(3) {
            let row = formats[chunk_start..(chunk_start + 3).min(formats.len())]
                .iter()
                .enumerate()
                .map(|(offset, fmt)| {
                    let idx = chunk_start + offset;
                    let label = if f.selected_format() == Some(*fmt) {
                        format!("✓ {}", fmt)
                    } else {
                        (*fmt).to_string()
                    };
                    InlineKeyboardButton::callback(label, callback::encode_download_format(idx))
                })
                .collect();
            rows.push(row);
        }
    }
    // Download only becomes available once a format is selected, which
    // requires a detected platform.
    if f.selected_format().is_some() {
        rows.push(vec![InlineKeyboardButton::callback(
            "⬇️ Download",
            callback::START_DOWNLOAD,
        )]);
    }
    rows.push(vec![close_button()]);

    (text, InlineKeyboardMarkup::new(rows))
}

fn image_panel(f: &ImageForm) -> (String, InlineKeyboardMarkup) {
    let resize_label = match f.resize {
        Some((w, h)) => format!("{}x{}", w, h),
        None => "original size".to_string(),
    };

    let mut text = panel_header(ToolId::Image);
    text.push('\n');
    text.push_str(&format!("Compression: {}%\n", f.compression));
    text.push_str(&format!("Resize: {}\n", resize_label));
    text.push_str(&format!("Output format: {}\n", f.format().label));
    text.push_str(&file_section(&f.files, f.error.as_deref(), "images"));

    let rows = vec![
        vec![
            InlineKeyboardButton::callback(
                "➖ Compression",
                callback::encode_field(FieldAction::CompressionDown),
            ),
            InlineKeyboardButton::callback(
                "➕ Compression",
                callback::encode_field(FieldAction::CompressionUp),
            ),
        ],
        vec![InlineKeyboardButton::callback(
            format!("📐 Resize: {}", resize_label),
            callback::encode_field(FieldAction::ResizeCycle),
        )],
        vec![InlineKeyboardButton::callback(
            format!("🎨 Format: {}", f.format().label),
            callback::encode_field(FieldAction::FormatCycle),
        )],
        process_row(),
        vec![close_button()],
    ];

    (text, InlineKeyboardMarkup::new(rows))
}

fn audio_panel(f: &AudioForm) -> (String, InlineKeyboardMarkup) {
    let mut text = panel_header(ToolId::Audio);
    text.push('\n');
    text.push_str(&format!("Output format: {}\n", choice_label(f.format())));
    text.push_str(&format!("Bitrate: {} kbps\n", f.bitrate));
    text.push_str(&format!("Sample rate: {}\n", f.sample_rate_label()));
    text.push_str(&file_section(&f.files, f.error.as_deref(), "audio files"));

    let rows = vec![
        vec![InlineKeyboardButton::callback(
            format!("🎚 Format: {}", f.format().label),
            callback::encode_field(FieldAction::FormatCycle),
        )],
        vec![
            InlineKeyboardButton::callback(
                "➖ Bitrate",
                callback::encode_field(FieldAction::BitrateDown),
            ),
            InlineKeyboardButton::callback(
                "➕ Bitrate",
                callback::encode_field(FieldAction::BitrateUp),
            ),
        ],
        vec![InlineKeyboardButton::callback(
            format!("🎛 Sample rate: {}", f.sample_rate_label()),
            callback::encode_field(FieldAction::SampleRateCycle),
        )],
        process_row(),
        vec![close_button()],
    ];

    (text, InlineKeyboardMarkup::new(rows))
}

fn document_panel(f: &DocumentForm) -> (String, InlineKeyboardMarkup) {
    let mut text = panel_header(ToolId::Document);
    text.push('\n');
    text.push_str(&format!("Convert to: {}\n", f.conversion().label));
    text.push_str(&file_section(&f.files, f.error.as_deref(), "documents"));

    let rows = vec![
        vec![InlineKeyboardButton::callback(
            format!("📑 Convert to: {}", f.conversion().label),
            callback::encode_field(FieldAction::ConversionCycle),
        )],
        process_row(),
        vec![close_button()],
    ];

    (text, InlineKeyboardMarkup::new(rows))
}

fn font_panel(f: &FontForm) -> (String, InlineKeyboardMarkup) {
    let subsetting_label = if f.subsetting { "on" } else { "off" };

    let mut text = panel_header(ToolId::Font);
    text.push('\n');
    text.push_str(&format!("Output format: {}\n", choice_label(f.format())));
    text.push_str(&format!("Subsetting: {}\n", subsetting_label));
    text.push_str(&format!("Unicode ranges: {}\n", f.ranges_label()));
    text.push_str(&file_section(&f.files, f.error.as_deref(), "font files"));

    let rows = vec![
        vec![InlineKeyboardButton::callback(
            format!("🅰 Format: {}", f.format().label),
            callback::encode_field(FieldAction::FormatCycle),
        )],
        vec![InlineKeyboardButton::callback(
            format!("✂️ Subsetting: {}", subsetting_label),
            callback::encode_field(FieldAction::SubsettingToggle),
        )],
        vec![InlineKeyboardButton::callback(
            format!("🔣 Ranges: {}", f.ranges_label()),
            callback::encode_field(FieldAction::RangesCycle),
        )],
        process_row(),
        vec![close_button()],
    ];

    (text, InlineKeyboardMarkup::new(rows))
}

fn choice_label(choice: &FormatChoice) -> String {
    match choice.blurb {
        Some(blurb) => format!("{} ({})", choice.label, blurb),
        None => choice.label.to_string(),
    }
}

fn file_section(list: &[files::FileInfo], error: Option<&str>, noun: &str) -> String {
    let mut out = String::new();
    if list.is_empty() {
        out.push_str(&format!("\n📎 No files yet — send {} to this chat.\n", noun));
    } else {
        out.push_str(&format!("\n📎 {} file(s) attached:\n", list.len()));
        for file in list.iter().take(FILE_LIST_LIMIT) {
            out.push_str(&format!(
                "• {} ({})\n",
                file.name,
                files::format_size(file.size_bytes)
            ));
        }
        if list.len() > FILE_LIST_LIMIT {
            out.push_str(&format!("… and {} more\n", list.len() - FILE_LIST_LIMIT));
        }
    }
    if let Some(message) = error {
        out.push_str(&format!("\n⚠️ {}\n", message));
    }
    out
}

fn process_row() -> Vec<InlineKeyboardButton> {
    vec![
        InlineKeyboardButton::callback("⚙️ Process", callback::PROCESS_FILES),
        InlineKeyboardButton::callback("🗑 Clear All", callback::CLEAR_FILES),
    ]
}

fn close_button() -> InlineKeyboardButton {
    InlineKeyboardButton::callback("✖ Close", callback::CLOSE_PANEL)
}

// ====== URL DETECTION BADGE ======

/// Badge sent under a pasted URL, with quick-download and open-panel buttons.
pub fn detection_badge(site: Option<&SiteInfo>, url: &str) -> (String, InlineKeyboardMarkup) {
    let text = match site {
        Some(site) => format!(
            "{} {} link detected\nReady to download from {}\nFormats: {}",
            site.icon,
            site.name,
            site.name,
            site.formats.join(" · ")
        ),
        None => format!(
            "🌐 Website link detected\n{}\nNo specific platform recognized — a generic download is available.",
            truncate(url, 60)
        ),
    };

    let keyboard = InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("⬇️ Quick download", callback::QUICK_DOWNLOAD),
        InlineKeyboardButton::callback(
            "🧰 Open downloader",
            callback::encode_select_tool(ToolId::Download.as_str()),
        ),
    ]]);

    (text, keyboard)
}

// ====== SETTINGS ======

pub fn settings_panel(prefs: &Preferences) -> (String, InlineKeyboardMarkup) {
    let on_off = |v: bool| if v { "on" } else { "off" };
    let text = format!(
        "⚙️ Settings\n\n\
         Theme: {}\n\
         Language: {}\n\
         Auto-save: {}\n\
         Notifications: {}\n\n\
         Stored per chat. Tap a button to change a value.",
        prefs.theme,
        prefs.language,
        on_off(prefs.auto_save),
        on_off(prefs.notifications),
    );

    let flag = |v: bool| if v { "✅" } else { "🚫" };
    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback(
                format!("🎨 Theme: {}", prefs.theme),
                callback::CYCLE_THEME,
            ),
            InlineKeyboardButton::callback(
                format!("🌐 Language: {}", prefs.language),
                callback::CYCLE_LANGUAGE,
            ),
        ],
        vec![
            InlineKeyboardButton::callback(
                format!("💾 Auto-save {}", flag(prefs.auto_save)),
                callback::TOGGLE_AUTO_SAVE,
            ),
            InlineKeyboardButton::callback(
                format!("🔔 Notifications {}", flag(prefs.notifications)),
                callback::TOGGLE_NOTIFICATIONS,
            ),
        ],
    ]);

    (text, keyboard)
}

// ====== DOWNLOAD TEXTS ======

/// Final line of the quick-download flow, worded exactly like the product
/// copy. `None` site means the generic "website" wording.
pub fn download_started_text(site_name: Option<&str>) -> String {
    format!("Download started for: {} content", site_name.unwrap_or("website"))
}

pub fn download_progress_text(short_id: &str, url: &str, percent: u8) -> String {
    format!(
        "⬇️ Downloading [{}]\n{}\n{} {}%",
        short_id,
        truncate(url, 60),
        progress_bar(percent),
        percent
    )
}

pub fn download_complete_text(short_id: &str, site_name: &str, format: &str) -> String {
    format!("✅ Download complete [{}]\n{} — {}", short_id, site_name, format)
}

// ====== HISTORY ======

/// The five most recent simulated downloads, newest first.
pub fn history_text(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No simulated downloads yet.\nPaste a URL or open the Content Downloader."
            .to_string();
    }
    let mut text = String::from("📥 Recent downloads\n\n");
    for entry in history.iter().take(5) {
        text.push_str(&format!(
            "{} {} — {} · {}\n   {}\n",
            entry.status.icon(),
            entry.site_name,
            entry.format,
            entry.timestamp.format("%H:%M:%S"),
            truncate(&entry.url, 60)
        ));
    }
    text
}

// ====== SMALL HELPERS ======

/// Generate a simple text progress bar.
pub fn progress_bar(percent: u8) -> String {
    let filled = (percent as usize) / 5; // 20 chars total
    let empty = 20_usize.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

pub fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

fn truncate(input: &str, max_chars: usize) -> String {
    if input.chars().count() > max_chars {
        format!("{}…", input.chars().take(max_chars - 1).collect::<String>())
    } else {
        input.to_string()
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use creatorhub_shared::models::{HistoryStatus, Preferences};
    use creatorhub_shared::site;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_datas(kb: &InlineKeyboardMarkup) -> Vec<String> {
        kb.inline_keyboard
            .iter()
            .flatten()
            .filter_map(|b| match &b.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_grid_lists_every_tool() {
        let (text, kb) = tools_grid(true);
        assert!(text.contains("CreatorHub"));
        assert!(text.contains("Content Downloader"));
        assert!(!text.contains("🔒"));

        let datas = callback_datas(&kb);
        assert_eq!(datas.len(), 5);
        assert!(datas.contains(&"ts:download".to_string()));
        assert!(datas.contains(&"ts:font".to_string()));
    }

    #[test]
    fn test_grid_mentions_lock_when_unconsented() {
        let (text, _) = tools_grid(false);
        assert!(text.contains("🔒"));
    }

    #[test]
    fn test_footer_checkbox_flips() {
        let mut consent = ConsentState::new();
        let (_, kb) = consent_footer(&consent);
        assert!(callback_datas(&kb).contains(&"cs:1".to_string()));

        consent.set_consented(true);
        let (_, kb) = consent_footer(&consent);
        assert!(callback_datas(&kb).contains(&"cs:0".to_string()));
    }

    #[test]
    fn test_terms_dialog_stages() {
        let mut consent = ConsentState::new();
        let (text, kb) = terms_dialog(&consent);
        assert!(text.contains("User Consent Required"));
        let datas = callback_datas(&kb);
        assert!(datas.contains(&"tr".to_string()));
        assert!(datas.contains(&"ta:1".to_string()));
        assert!(datas.contains(&"tx".to_string()));

        consent.mark_terms_read();
        consent.set_agreement(true);
        let (_, kb) = terms_dialog(&consent);
        assert!(callback_datas(&kb).contains(&"ta:0".to_string()));
    }

    #[test]
    fn test_download_panel_without_url_has_no_download_button() {
        let form = PanelForm::for_tool(ToolId::Download);
        let (text, kb) = tool_panel(&form);
        assert!(text.contains("No URL yet"));
        let datas = callback_datas(&kb);
        assert!(!datas.contains(&"dl".to_string()));
        assert!(datas.contains(&"px".to_string()));
    }

    #[test]
    fn test_download_panel_with_platform_offers_formats() {
        let mut form = PanelForm::for_tool(ToolId::Download);
        if let PanelForm::Download(f) = &mut form {
            f.set_url("https://youtu.be/abc123");
        }
        let (text, kb) = tool_panel(&form);
        assert!(text.contains("YouTube"));

        let datas = callback_datas(&kb);
        assert!(datas.contains(&"df:0".to_string()));
        assert!(datas.contains(&"df:2".to_string()));
        assert!(datas.contains(&"dl".to_string()));

        // First format is auto-selected and marked.
        let marked = kb
            .inline_keyboard
            .iter()
            .flatten()
            .any(|b| b.text == "✓ MP4");
        assert!(marked);
    }

    #[test]
    fn test_download_panel_unknown_url_has_formats_hidden() {
        let mut form = PanelForm::for_tool(ToolId::Download);
        if let PanelForm::Download(f) = &mut form {
            f.set_url("https://example.com/page");
        }
        let (text, kb) = tool_panel(&form);
        assert!(text.contains("No supported platform"));
        let datas = callback_datas(&kb);
        assert!(!datas.iter().any(|d| d.starts_with("df:")));
        assert!(!datas.contains(&"dl".to_string()));
    }

    #[test]
    fn test_image_panel_summary_and_controls() {
        let form = PanelForm::for_tool(ToolId::Image);
        let (text, kb) = tool_panel(&form);
        assert!(text.contains("Compression: 80%"));
        assert!(text.contains("Resize: original size"));
        assert!(text.contains("No files yet"));

        let datas = callback_datas(&kb);
        assert!(datas.contains(&"fa:cu".to_string()));
        assert!(datas.contains(&"fa:rz".to_string()));
        assert!(datas.contains(&"pp".to_string()));
        assert!(datas.contains(&"pc".to_string()));
    }

    #[test]
    fn test_panel_shows_inline_error() {
        let mut form = PanelForm::for_tool(ToolId::Font);
        let _ = form.attach_files(vec![files::FileInfo {
            name: "photo.xyz".to_string(),
            size_bytes: 10,
            mime: None,
        }]);
        let (text, _) = tool_panel(&form);
        assert!(text.contains("⚠️ File format is not supported"));
    }

    #[test]
    fn test_audio_panel_buttons() {
        let form = PanelForm::for_tool(ToolId::Audio);
        let (text, kb) = tool_panel(&form);
        assert!(text.contains("Bitrate: 320 kbps"));
        assert!(text.contains("44,100 Hz (CD Quality)"));
        let datas = callback_datas(&kb);
        assert!(datas.contains(&"fa:bu".to_string()));
        assert!(datas.contains(&"fa:bd".to_string()));
        assert!(datas.contains(&"fa:sr".to_string()));
    }

    #[test]
    fn test_fallback_panel() {
        let (text, kb) = fallback_panel();
        assert!(text.contains("Tool not found"));
        assert!(callback_datas(&kb).contains(&"px".to_string()));
    }

    #[test]
    fn test_detection_badge_known_site() {
        let site = site::detect("https://github.com/rust-lang/rust");
        let (text, kb) = detection_badge(site, "https://github.com/rust-lang/rust");
        assert!(text.contains("GitHub"));
        assert!(text.contains("ZIP · TAR.GZ"));
        let datas = callback_datas(&kb);
        assert!(datas.contains(&"qd".to_string()));
        assert!(datas.contains(&"ts:download".to_string()));
    }

    #[test]
    fn test_detection_badge_generic_url() {
        let (text, _) = detection_badge(None, "https://example.com/page");
        assert!(text.contains("Website link detected"));
    }

    #[test]
    fn test_settings_panel_reflects_prefs() {
        let mut prefs = Preferences::default_for(1);
        prefs.notifications = false;
        let (text, kb) = settings_panel(&prefs);
        assert!(text.contains("Notifications: off"));
        let datas = callback_datas(&kb);
        assert!(datas.contains(&"sx:th".to_string()));
        assert!(datas.contains(&"sx:nt".to_string()));
    }

    #[test]
    fn test_download_started_wording() {
        assert_eq!(
            download_started_text(Some("YouTube")),
            "Download started for: YouTube content"
        );
        assert_eq!(
            download_started_text(None),
            "Download started for: website content"
        );
    }

    #[test]
    fn test_history_text_caps_at_five() {
        let entries: Vec<HistoryEntry> = (0..8)
            .map(|i| HistoryEntry {
                url: format!("https://youtu.be/{}", i),
                site_name: "YouTube".to_string(),
                format: "MP4".to_string(),
                status: HistoryStatus::Completed,
                timestamp: Utc::now(),
            })
            .collect();
        let text = history_text(&entries);
        assert_eq!(text.matches("✅").count(), 5);
        assert!(text.contains("https://youtu.be/0"));
        assert!(!text.contains("https://youtu.be/5"));
    }

    #[test]
    fn test_history_text_empty() {
        assert!(history_text(&[]).contains("No simulated downloads yet"));
    }

    #[test]
    fn test_progress_bar_shapes() {
        assert_eq!(progress_bar(0), format!("[{}]", " ".repeat(20)));
        assert_eq!(progress_bar(100), format!("[{}]", "=".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "=".repeat(10), " ".repeat(10)));
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }

    #[test]
    fn test_truncate_counts_chars() {
        let long = "x".repeat(80);
        let cut = truncate(&long, 60);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate("short", 60), "short");
    }
}
