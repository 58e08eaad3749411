//! Filename derivation: description slugs and file-type extensions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Slug used when nothing filesystem-safe survives.
pub const UNTITLED: &str = "untitled";

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.\-]").expect("valid regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").expect("valid regex"));
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid regex"));

/// Lower-case, hyphenated, filesystem-safe form of `text`.
///
/// Dots survive so `invoice.pdf` and `v1.2.3` stay intact.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept = DISALLOWED.replace_all(lowered.trim(), "");
    let hyphenated = SEPARATORS.replace_all(&kept, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        UNTITLED.to_string()
    } else {
        slug.to_string()
    }
}

/// File-type tag accepted by `suggest_location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    Pdf,
    Image,
    Python,
    JavaScript,
    TypeScript,
    Json,
    Yaml,
    Csv,
    Html,
    Css,
    Code,
    Folder,
    File,
    /// Caller gave an explicit extension such as `.py`.
    Extension(String),
    /// Anything else; no extension is appended.
    Unknown(String),
}

impl FileType {
    /// Leading-dot extension, or `""` when none applies.
    pub fn extension(&self) -> &str {
        match self {
            FileType::Markdown => ".md",
            FileType::Pdf => ".pdf",
            FileType::Image => ".png",
            FileType::Python => ".py",
            FileType::JavaScript => ".js",
            FileType::TypeScript => ".ts",
            FileType::Json => ".json",
            FileType::Yaml => ".yaml",
            FileType::Csv => ".csv",
            FileType::Html => ".html",
            FileType::Css => ".css",
            FileType::Code | FileType::Folder | FileType::File | FileType::Unknown(_) => "",
            FileType::Extension(ext) => ext,
        }
    }
}

impl From<&str> for FileType {
    fn from(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        if tag.starts_with('.') {
            return FileType::Extension(tag);
        }
        match tag.as_str() {
            "markdown" | "md" => FileType::Markdown,
            "pdf" => FileType::Pdf,
            "image" => FileType::Image,
            "python" => FileType::Python,
            "javascript" => FileType::JavaScript,
            "typescript" => FileType::TypeScript,
            "json" => FileType::Json,
            "yaml" => FileType::Yaml,
            "csv" => FileType::Csv,
            "html" => FileType::Html,
            "css" => FileType::Css,
            "code" => FileType::Code,
            "folder" => FileType::Folder,
            "file" => FileType::File,
            _ => FileType::Unknown(tag),
        }
    }
}

/// Extension for a file-type tag (case-insensitive).
pub fn extension_for(file_type: &str) -> String {
    FileType::from(file_type).extension().to_string()
}

/// `{slug}{extension}`; no trailing dot when there is no extension.
pub fn filename_for(description: &str, file_type: &FileType) -> String {
    let mut name = slugify(description);
    name.push_str(file_type.extension());
    name
}
