//! Emitter — renders the typed TypeScript data module and writes it out.
//!
//! Output shape, per bucket in fixed order:
//!
//! ```text
//! // =====================================================
//! // TEST1 - 40 题
//! // =====================================================
//! export const TEST1_TRIALS: TrialItem[] = [ ...pretty JSON... ];
//! ```
//!
//! preceded once by a header comment and the type import.

use crate::config::EmitConfig;
use crate::{Buckets, ConvertError, Result, Trial};
use std::path::{Path, PathBuf};

const BANNER_RULE: &str = "// =====================================================\n";

/// Render the full module text. Deterministic for a given input.
pub fn render_module(trials: &Buckets<Trial>, emit: &EmitConfig) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("// {}\n", emit.header_comment));
    out.push_str(&format!(
        "import {{ {} }} from '{}';\n\n",
        emit.type_name, emit.type_module
    ));

    for (bucket, items) in trials.iter() {
        // serde_json's pretty printer indents by two spaces and leaves
        // non-ASCII text unescaped.
        let body = serde_json::to_string_pretty(items)
            .map_err(|source| ConvertError::Serialize { bucket, source })?;

        out.push_str(BANNER_RULE);
        out.push_str(&format!(
            "// {} - {} {}\n",
            bucket.upper(),
            items.len(),
            emit.count_unit
        ));
        out.push_str(BANNER_RULE);
        out.push_str(&format!(
            "export const {}: {}[] = ",
            bucket.const_name(),
            emit.type_name
        ));
        out.push_str(&body);
        out.push_str(";\n\n");
    }
    Ok(out)
}

/// Replace the file at `path` with `contents`.
///
/// The text goes to a sibling temporary file first and is then renamed over
/// the target, so readers see either the old module or the complete new one.
/// An existing symlink is written through: the link stays and its target is
/// replaced.
pub fn write_module(path: &Path, contents: &str) -> Result<()> {
    let target = resolve_target(path);
    let tmp = temp_path(&target);
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Err(source) = std::fs::write(&tmp, contents) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    if let Err(source) = std::fs::rename(&tmp, &target) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    tracing::debug!(
        path = %path.display(),
        target = %target.display(),
        bytes = contents.len(),
        "wrote module"
    );
    Ok(())
}

/// The file a write to `path` should land in. Existing paths are resolved
/// through symlinks; anything else (including a dangling link) is used as is.
fn resolve_target(path: &Path) -> PathBuf {
    match std::fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(_) => path.to_path_buf(),
    }
}

/// Whether `path` already holds exactly `contents`. A missing file is simply
/// out of date.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == contents.as_bytes()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ConvertError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
