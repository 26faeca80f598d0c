/// Callback data grammar for inline keyboards.
///
/// Two-character prefixes with colon-separated arguments, e.g. "ts:image" or
/// "fa:cu". Telegram caps callback data at 64 bytes, so decode rejects
/// anything longer before it parses. Unknown payloads decode to `None` and
/// the handler answers them without acting.
use creatorhub_shared::forms::FieldAction;

/// Telegram's hard limit on callback data.
pub const MAX_CALLBACK_BYTES: usize = 64;

/// A decoded inline-button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// Grid card tap. Carries the raw tool id so unknown ids still reach the
    /// gate and its fallback.
    SelectTool(String),
    /// Footer checkbox set to the given value.
    SetConsent(bool),
    /// Open the full terms and mark them read.
    ReadTerms,
    /// Agreement checkbox inside the terms dialog.
    SetAgreement(bool),
    /// "I Decline" inside the terms dialog.
    DeclineTerms,
    /// Option button inside an open panel.
    Field(FieldAction),
    /// Process button of a file panel.
    ProcessFiles,
    /// Clear All button of a file panel.
    ClearFiles,
    /// Close button of the open panel (also backs out of the fallback).
    ClosePanel,
    /// Quick download of the last pasted URL.
    QuickDownload,
    /// Format pick inside the download panel.
    DownloadFormat(usize),
    /// Download button of the download panel.
    StartDownload,
    CycleTheme,
    CycleLanguage,
    ToggleAutoSave,
    ToggleNotifications,
}

// ====== ENCODING ======

pub fn encode_select_tool(raw_id: &str) -> String {
    format!("ts:{}", raw_id)
}

pub fn encode_set_consent(value: bool) -> String {
    format!("cs:{}", flag(value))
}

pub const READ_TERMS: &str = "tr";

pub fn encode_set_agreement(value: bool) -> String {
    format!("ta:{}", flag(value))
}

pub const DECLINE_TERMS: &str = "tx";

pub fn encode_field(action: FieldAction) -> String {
    format!("fa:{}", field_code(action))
}

pub const PROCESS_FILES: &str = "pp";
pub const CLEAR_FILES: &str = "pc";
pub const CLOSE_PANEL: &str = "px";
pub const QUICK_DOWNLOAD: &str = "qd";

pub fn encode_download_format(idx: usize) -> String {
    format!("df:{}", idx)
}

pub const START_DOWNLOAD: &str = "dl";
pub const CYCLE_THEME: &str = "sx:th";
pub const CYCLE_LANGUAGE: &str = "sx:lg";
pub const TOGGLE_AUTO_SAVE: &str = "sx:as";
pub const TOGGLE_NOTIFICATIONS: &str = "sx:nt";

fn flag(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

fn field_code(action: FieldAction) -> &'static str {
    match action {
        FieldAction::CompressionUp => "cu",
        FieldAction::CompressionDown => "cd",
        FieldAction::ResizeCycle => "rz",
        FieldAction::FormatCycle => "fm",
        FieldAction::BitrateUp => "bu",
        FieldAction::BitrateDown => "bd",
        FieldAction::SampleRateCycle => "sr",
        FieldAction::ConversionCycle => "cv",
        FieldAction::SubsettingToggle => "st",
        FieldAction::RangesCycle => "ur",
    }
}

// ====== DECODING ======

/// Decode callback data into an action. Empty, oversized, or malformed
/// payloads return `None`.
pub fn decode(data: &str) -> Option<CallbackAction> {
    if data.is_empty() || data.len() > MAX_CALLBACK_BYTES {
        return None;
    }
    let (prefix, rest) = match data.split_once(':') {
        Some((p, r)) => (p, Some(r)),
        None => (data, None),
    };
    match (prefix, rest) {
        ("ts", Some(id)) if !id.is_empty() => Some(CallbackAction::SelectTool(id.to_string())),
        ("cs", Some(v)) => parse_flag(v).map(CallbackAction::SetConsent),
        ("tr", None) => Some(CallbackAction::ReadTerms),
        ("ta", Some(v)) => parse_flag(v).map(CallbackAction::SetAgreement),
        ("tx", None) => Some(CallbackAction::DeclineTerms),
        ("fa", Some(code)) => parse_field(code).map(CallbackAction::Field),
        ("pp", None) => Some(CallbackAction::ProcessFiles),
        ("pc", None) => Some(CallbackAction::ClearFiles),
        ("px", None) => Some(CallbackAction::ClosePanel),
        ("qd", None) => Some(CallbackAction::QuickDownload),
        ("df", Some(idx)) => idx.parse().ok().map(CallbackAction::DownloadFormat),
        ("dl", None) => Some(CallbackAction::StartDownload),
        ("sx", Some("th")) => Some(CallbackAction::CycleTheme),
        ("sx", Some("lg")) => Some(CallbackAction::CycleLanguage),
        ("sx", Some("as")) => Some(CallbackAction::ToggleAutoSave),
        ("sx", Some("nt")) => Some(CallbackAction::ToggleNotifications),
        _ => None,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

fn parse_field(code: &str) -> Option<FieldAction> {
    match code {
        "cu" => Some(FieldAction::CompressionUp),
        "cd" => Some(FieldAction::CompressionDown),
        "rz" => Some(FieldAction::ResizeCycle),
        "fm" => Some(FieldAction::FormatCycle),
        "bu" => Some(FieldAction::BitrateUp),
        "bd" => Some(FieldAction::BitrateDown),
        "sr" => Some(FieldAction::SampleRateCycle),
        "cv" => Some(FieldAction::ConversionCycle),
        "st" => Some(FieldAction::SubsettingToggle),
        "ur" => Some(FieldAction::RangesCycle),
        _ => None,
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;
    use creatorhub_shared::tools::TOOLS;

    const FIELD_ACTIONS: [FieldAction; 10] = [
        FieldAction::CompressionUp,
        FieldAction::CompressionDown,
        FieldAction::ResizeCycle,
        FieldAction::FormatCycle,
        FieldAction::BitrateUp,
        FieldAction::BitrateDown,
        FieldAction::SampleRateCycle,
        FieldAction::ConversionCycle,
        FieldAction::SubsettingToggle,
        FieldAction::RangesCycle,
    ];

    #[test]
    fn test_round_trip_tool_select() {
        for tool in TOOLS.iter() {
            let data = encode_select_tool(tool.id.as_str());
            assert_eq!(
                decode(&data),
                Some(CallbackAction::SelectTool(tool.id.as_str().to_string()))
            );
        }
    }

    #[test]
    fn test_round_trip_consent_and_terms() {
        assert_eq!(
            decode(&encode_set_consent(true)),
            Some(CallbackAction::SetConsent(true))
        );
        assert_eq!(
            decode(&encode_set_consent(false)),
            Some(CallbackAction::SetConsent(false))
        );
        assert_eq!(decode(READ_TERMS), Some(CallbackAction::ReadTerms));
        assert_eq!(
            decode(&encode_set_agreement(true)),
            Some(CallbackAction::SetAgreement(true))
        );
        assert_eq!(
            decode(&encode_set_agreement(false)),
            Some(CallbackAction::SetAgreement(false))
        );
        assert_eq!(decode(DECLINE_TERMS), Some(CallbackAction::DeclineTerms));
    }

    #[test]
    fn test_round_trip_field_actions() {
        for action in FIELD_ACTIONS {
            let data = encode_field(action);
            assert_eq!(decode(&data), Some(CallbackAction::Field(action)));
        }
    }

    #[test]
    fn test_round_trip_panel_and_download() {
        assert_eq!(decode(PROCESS_FILES), Some(CallbackAction::ProcessFiles));
        assert_eq!(decode(CLEAR_FILES), Some(CallbackAction::ClearFiles));
        assert_eq!(decode(CLOSE_PANEL), Some(CallbackAction::ClosePanel));
        assert_eq!(decode(QUICK_DOWNLOAD), Some(CallbackAction::QuickDownload));
        assert_eq!(
            decode(&encode_download_format(2)),
            Some(CallbackAction::DownloadFormat(2))
        );
        assert_eq!(decode(START_DOWNLOAD), Some(CallbackAction::StartDownload));
    }

    #[test]
    fn test_round_trip_settings() {
        assert_eq!(decode(CYCLE_THEME), Some(CallbackAction::CycleTheme));
        assert_eq!(decode(CYCLE_LANGUAGE), Some(CallbackAction::CycleLanguage));
        assert_eq!(decode(TOGGLE_AUTO_SAVE), Some(CallbackAction::ToggleAutoSave));
        assert_eq!(
            decode(TOGGLE_NOTIFICATIONS),
            Some(CallbackAction::ToggleNotifications)
        );
    }

    #[test]
    fn test_unknown_payloads() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("zz"), None);
        assert_eq!(decode("zz:1"), None);
        assert_eq!(decode("ts:"), None);
        assert_eq!(decode("cs:yes"), None);
        assert_eq!(decode("fa:qq"), None);
        assert_eq!(decode("df:abc"), None);
        assert_eq!(decode("sx:zz"), None);
        // Bare prefixes that require an argument
        assert_eq!(decode("ts"), None);
        assert_eq!(decode("fa"), None);
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let data = format!("ts:{}", "a".repeat(100));
        assert_eq!(decode(&data), None);
    }

    #[test]
    fn test_encodings_fit_telegram_limit() {
        let mut all: Vec<String> = vec![
            READ_TERMS.into(),
            DECLINE_TERMS.into(),
            PROCESS_FILES.into(),
            CLEAR_FILES.into(),
            CLOSE_PANEL.into(),
            QUICK_DOWNLOAD.into(),
            START_DOWNLOAD.into(),
            CYCLE_THEME.into(),
            CYCLE_LANGUAGE.into(),
            TOGGLE_AUTO_SAVE.into(),
            TOGGLE_NOTIFICATIONS.into(),
            encode_set_consent(true),
            encode_set_agreement(false),
            encode_download_format(99),
        ];
        all.extend(TOOLS.iter().map(|t| encode_select_tool(t.id.as_str())));
        all.extend(FIELD_ACTIONS.iter().map(|a| encode_field(*a)));

        for data in all {
            assert!(
                data.len() <= MAX_CALLBACK_BYTES,
                "payload too long: {}",
                data
            );
        }
    }
}
