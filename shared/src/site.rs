/// Site detection for pasted URLs.
///
/// An ordered pattern table decides which platform badge and format list a
/// URL gets. Patterns are case-insensitive substring tests and the first
/// match in declaration order wins, so YouTube outranks everything below it
/// when a message somehow matches more than one entry.
use once_cell::sync::Lazy;
use regex::Regex;

// ====== PLATFORM TABLE ======

/// Platform recognized by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Youtube,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Github,
    Tiktok,
}

/// Display metadata and simulated download formats for one platform.
#[derive(Debug)]
pub struct SiteInfo {
    pub platform: Platform,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub gradient: &'static str,
    pub formats: &'static [&'static str],
    pattern: &'static str,
}

/// Detection table. First match wins, so keep the order stable.
pub const SITES: [SiteInfo; 7] = [
    SiteInfo {
        platform: Platform::Youtube,
        name: "YouTube",
        icon: "📺",
        color: "text-red-500",
        gradient: "from-red-500 to-red-600",
        formats: &["MP4", "MP3", "WEBM"],
        pattern: r"youtube\.com|youtu\.be",
    },
    SiteInfo {
        platform: Platform::Linkedin,
        name: "LinkedIn",
        icon: "💼",
        color: "text-blue-600",
        gradient: "from-blue-500 to-blue-600",
        formats: &["MP4", "JPG"],
        pattern: r"linkedin\.com",
    },
    SiteInfo {
        platform: Platform::Twitter,
        name: "Twitter/X",
        icon: "🐦",
        color: "text-gray-800",
        gradient: "from-gray-700 to-gray-800",
        formats: &["MP4", "JPG", "GIF"],
        pattern: r"twitter\.com|x\.com",
    },
    SiteInfo {
        platform: Platform::Instagram,
        name: "Instagram",
        icon: "📸",
        color: "text-pink-500",
        gradient: "from-pink-500 to-purple-600",
        formats: &["MP4", "JPG", "MP3"],
        pattern: r"instagram\.com",
    },
    SiteInfo {
        platform: Platform::Facebook,
        name: "Facebook",
        icon: "📘",
        color: "text-blue-700",
        gradient: "from-blue-600 to-blue-700",
        formats: &["MP4", "JPG"],
        pattern: r"facebook\.com|fb\.com",
    },
    SiteInfo {
        platform: Platform::Github,
        name: "GitHub",
        icon: "🐙",
        color: "text-gray-800",
        gradient: "from-gray-600 to-gray-800",
        formats: &["ZIP", "TAR.GZ"],
        pattern: r"github\.com",
    },
    SiteInfo {
        platform: Platform::Tiktok,
        name: "TikTok",
        icon: "🌐",
        color: "text-pink-600",
        gradient: "from-pink-500 to-red-500",
        formats: &["MP4"],
        pattern: r"tiktok\.com",
    },
];

// ====== COMPILED PATTERNS ======

static SITE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SITES
        .iter()
        .map(|site| Regex::new(&format!("(?i){}", site.pattern)).unwrap())
        .collect()
});

static GENERIC_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:https?://|www\.)[^\s<>\[\](){},"']+"#).unwrap());

// ====== DETECTION ======

/// Detect the platform for a pasted URL or message text.
///
/// Empty or whitespace-only input never reaches the pattern table.
pub fn detect(input: &str) -> Option<&'static SiteInfo> {
    if input.trim().is_empty() {
        return None;
    }
    SITE_PATTERNS
        .iter()
        .position(|re| re.is_match(input))
        .map(|idx| &SITES[idx])
}

/// Generic URL shape check for the "website" fallback when no platform
/// pattern matches.
pub fn looks_like_url(input: &str) -> bool {
    GENERIC_URL_RE.is_match(input)
}

/// Table entry for a typed platform.
pub fn site_info(platform: Platform) -> &'static SiteInfo {
    match platform {
        Platform::Youtube => &SITES[0],
        Platform::Linkedin => &SITES[1],
        Platform::Twitter => &SITES[2],
        Platform::Instagram => &SITES[3],
        Platform::Facebook => &SITES[4],
        Platform::Github => &SITES[5],
        Platform::Tiktok => &SITES[6],
    }
}

// ====== TESTS ======
