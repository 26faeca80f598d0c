/// Tool catalog for the CreatorHub suite.
///
/// Five tools in fixed declaration order. The grid, the panel router, and
/// the callback grammar all work off this table, so the order here is the
/// display order everywhere.
use serde::{Deserialize, Serialize};

/// Typed identifier for a catalog tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Download,
    Image,
    Document,
    Audio,
    Font,
}

impl ToolId {
    /// Parse a raw wire id. Unknown ids stay unparsed so the caller can
    /// route them to the "Tool not found" fallback instead of guessing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "download" => Some(ToolId::Download),
            "image" => Some(ToolId::Image),
            "document" => Some(ToolId::Document),
            "audio" => Some(ToolId::Audio),
            "font" => Some(ToolId::Font),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Download => "download",
            ToolId::Image => "image",
            ToolId::Document => "document",
            ToolId::Audio => "audio",
            ToolId::Font => "font",
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gradient accent classes carried over from the product style guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub primary: &'static str,
    pub hover: &'static str,
    pub shadow: &'static str,
}

/// One entry in the tool catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub id: ToolId,
    pub title: &'static str,
    /// Short blurb shown on the grid card.
    pub description: &'static str,
    /// Longer line shown in the open panel header.
    pub detail: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

/// Header line for ids that resolve to no tool.
pub const GENERIC_DETAIL: &str = "Professional file conversion and optimization tools";

/// The catalog, in display order.
pub const TOOLS: [ToolInfo; 5] = [
    ToolInfo {
        id: ToolId::Download,
        title: "Content Downloader",
        description: "Download content from various platforms",
        detail: "Paste a link from supported platforms to download content",
        icon: "⬇️",
        accent: Accent {
            primary: "from-blue-500 to-blue-600",
            hover: "from-blue-600 to-blue-700",
            shadow: "shadow-blue-500/25",
        },
    },
    ToolInfo {
        id: ToolId::Image,
        title: "Image Processor",
        description: "Compress, resize, and convert images",
        detail: "Compress, resize, and convert images with advanced algorithms",
        icon: "🖼",
        accent: Accent {
            primary: "from-emerald-500 to-emerald-600",
            hover: "from-emerald-600 to-emerald-700",
            shadow: "shadow-emerald-500/25",
        },
    },
    ToolInfo {
        id: ToolId::Document,
        title: "Document Converter",
        description: "Convert and process documents",
        detail: "Convert documents between various formats including Word to PDF",
        icon: "📄",
        accent: Accent {
            primary: "from-indigo-500 to-indigo-600",
            hover: "from-indigo-600 to-indigo-700",
            shadow: "shadow-indigo-500/25",
        },
    },
    ToolInfo {
        id: ToolId::Audio,
        title: "Audio Processor",
        description: "Convert and process audio files",
        detail: "Transform audio files to MP3, WAV, FLAC and other formats",
        icon: "🎵",
        accent: Accent {
            primary: "from-purple-500 to-purple-600",
            hover: "from-purple-600 to-purple-700",
            shadow: "shadow-purple-500/25",
        },
    },
    ToolInfo {
        id: ToolId::Font,
        title: "Font Optimizer",
        description: "Convert and optimize web fonts",
        detail: "Convert fonts to web-optimized WOFF format for better performance",
        icon: "🔤",
        accent: Accent {
            primary: "from-orange-500 to-orange-600",
            hover: "from-orange-600 to-orange-700",
            shadow: "shadow-orange-500/25",
        },
    },
];

/// Catalog entry for a typed id.
pub fn tool_info(id: ToolId) -> &'static ToolInfo {
    match id {
        ToolId::Download => &TOOLS[0],
        ToolId::Image => &TOOLS[1],
        ToolId::Document => &TOOLS[2],
        ToolId::Audio => &TOOLS[3],
        ToolId::Font => &TOOLS[4],
    }
}

/// Resolve a raw wire id to its catalog entry.
pub fn find_tool(raw: &str) -> Option<&'static ToolInfo> {
    ToolId::parse(raw).map(tool_info)
}

// ====== TESTS ======
