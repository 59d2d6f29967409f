//! Output writers: classic tag file, JSON, and TOON

use crate::cli::OutputFormat;
use crate::error::{Result, ShtagsError};
use crate::schema::{Tag, TagFile};
use crate::toon::encode_toon;

/// Render scanned files in the requested format
pub fn render(files: &[TagFile], format: OutputFormat, sorted: bool) -> Result<String> {
    match format {
        OutputFormat::Ctags => Ok(format_ctags(files, sorted)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(files).map_err(|e| ShtagsError::Output {
                message: format!("JSON serialization failed: {}", e),
            })
        }
        OutputFormat::Toon => Ok(encode_toon(files)),
    }
}

/// Tag file in the extended ctags format.
///
/// One line per tag: `name<TAB>file<TAB>/^pattern$/;"<TAB>kind`, preceded by
/// the `!_TAG_` pseudo-tags.
pub fn format_ctags(files: &[TagFile], sorted: bool) -> String {
    let mut entries: Vec<(&str, &Tag)> = files
        .iter()
        .flat_map(|f| f.tags.iter().map(move |t| (f.file.as_str(), t)))
        .collect();

    if sorted {
        entries.sort_by(|(fa, a), (fb, b)| {
            a.name
                .as_bytes()
                .cmp(b.name.as_bytes())
                .then_with(|| fa.cmp(fb))
                .then_with(|| a.line.cmp(&b.line))
        });
    }

    let mut out = String::new();
    out.push_str("!_TAG_FILE_FORMAT\t2\t/extended format; --format=1 will not append ;\" to lines/\n");
    out.push_str(&format!(
        "!_TAG_FILE_SORTED\t{}\t/0=unsorted, 1=sorted, 2=foldcase/\n",
        u8::from(sorted)
    ));
    out.push_str(&format!("!_TAG_PROGRAM_NAME\t{}\t//\n", env!("CARGO_PKG_NAME")));
    out.push_str(&format!("!_TAG_PROGRAM_VERSION\t{}\t//\n", env!("CARGO_PKG_VERSION")));

    for (file, tag) in entries {
        out.push_str(&format!(
            "{}\t{}\t/^{}$/;\"\t{}\n",
            tag.name,
            file,
            escape_pattern(&tag.pattern),
            tag.kind.letter
        ));
    }

    out
}

/// Escape `\` and `/` so the line survives inside a `/.../` search command
pub fn escape_pattern(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for c in line.chars() {
        if c == '\\' || c == '/' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
