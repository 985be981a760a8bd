//! URI-reference classification and absolute resolution.
//!
//! The classifier is pure string inspection, with no I/O and no filesystem checks,
//! and rejects anything spanning more than one line. Windows drive and UNC
//! shapes are recognized before generic scheme detection, because `C:\x`
//! would otherwise parse as a URI with scheme `c`.

use std::{
    env,
    path::{Component, Path, PathBuf},
};

use derive_more::derive::{Display, Error};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static WINDOWS_DRIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]:[\\/]").unwrap());
static WINDOWS_UNC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\\\[^\\/]+[\\/][^\\/]+").unwrap());
static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").unwrap());

/// What shape a single-line string has as a URI reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriKind {
    /// `http://` or `https://` with a non-empty host.
    AbsoluteHttp,
    /// A `file:` URI.
    FileUri,
    /// Any other explicit scheme (`mailto:`, `data:`, `ftp:`, `ssh:`, …).
    OtherAbsolute,
    /// `//host/...`, a network-path reference per RFC 3986.
    SchemeRelative,
    /// `#...`, a same-document reference.
    FragmentOnly,
    /// `/...`, an absolute POSIX path (or root-relative reference).
    AbsolutePosixPath,
    /// `C:\...` or `C:/...`.
    WindowsDrivePath,
    /// `\\server\share\...`.
    WindowsUnc,
    /// Everything else that is non-empty and single-line.
    RelativePath,
}

/// Classify a string, or `None` when it is empty, whitespace-only, or spans
/// multiple lines.
pub fn classify(value: &str) -> Option<UriKind> {
    if value.contains('\n') || value.contains('\r') {
        return None;
    }

    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if WINDOWS_DRIVE.is_match(value) {
        return Some(UriKind::WindowsDrivePath);
    }
    if WINDOWS_UNC.is_match(value) {
        return Some(UriKind::WindowsUnc);
    }

    if let Some(scheme) = SCHEME.captures(value).map(|caps| caps[1].to_ascii_lowercase()) {
        return match scheme.as_str() {
            "http" | "https" => match Url::parse(value) {
                Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => {
                    Some(UriKind::AbsoluteHttp)
                }
                _ => None,
            },
            "file" => Some(UriKind::FileUri),
            _ => Some(UriKind::OtherAbsolute),
        };
    }

    if let Some(rest) = value.strip_prefix("//") {
        let netloc = rest.split('/').next().unwrap_or("");
        if !netloc.is_empty() {
            return Some(UriKind::SchemeRelative);
        }
    }

    if value.starts_with('#') {
        return Some(UriKind::FragmentOnly);
    }
    if value.starts_with('/') {
        return Some(UriKind::AbsolutePosixPath);
    }

    Some(UriKind::RelativePath)
}

/// Whether the string is a filesystem path (absolute, relative, or Windows).
pub fn is_path(value: &str) -> bool {
    matches!(
        classify(value),
        Some(
            UriKind::AbsolutePosixPath
                | UriKind::WindowsDrivePath
                | UriKind::WindowsUnc
                | UriKind::RelativePath
        )
    )
}

/// Whether the string is a URI with an explicit scheme.
pub fn is_absolute_uri(value: &str) -> bool {
    matches!(
        classify(value),
        Some(UriKind::AbsoluteHttp | UriKind::FileUri | UriKind::OtherAbsolute)
    )
}

/// Whether the string is a network-path (`//host/...`) reference.
pub fn is_scheme_relative_uri(value: &str) -> bool {
    classify(value) == Some(UriKind::SchemeRelative)
}

/// Whether the string is a same-document (`#...`) reference.
pub fn is_fragment_only_uri(value: &str) -> bool {
    classify(value) == Some(UriKind::FragmentOnly)
}

/// Failures of [`resolve_to_absolute`].
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum UriResolutionError {
    /// The input spans multiple lines.
    #[display("input must be a single-line string")]
    MultiLine,

    /// An http(s) value or base without a usable host.
    #[display("malformed URL (missing host): {url}")]
    MalformedUrl {
        /// The offending value.
        url: String,
    },

    /// A `//host/...` reference was given without an http(s) base.
    #[display("scheme-relative URLs require a URL base")]
    SchemeRelativeWithoutUrlBase,

    /// A filesystem-path value cannot be combined with an http(s) base.
    #[display("cannot resolve a local path against an HTTP(S) base URL")]
    PathAgainstHttpBase,

    /// A `file:` URI that does not map to a local path.
    #[display("not a usable file URI: {uri}")]
    InvalidFileUri {
        /// The offending value.
        uri: String,
    },

    /// The process has no usable working directory to resolve against.
    #[display("current working directory is unavailable")]
    CurrentDirUnavailable,
}

/// Resolve `value` to an absolute URL (with scheme) or an absolute
/// filesystem path (without one).
///
/// - Absolute http(s) URLs normalize (dot segments collapse, an empty path
///   becomes `/`).
/// - `file:` URIs convert to absolute filesystem paths.
/// - Relative references join a URL base into a URL, and a path or `file:`
///   base into an absolute path; with no base they resolve against the
///   current directory (the empty string resolves to the current directory
///   itself).
/// - Other explicit schemes pass through untouched.
/// - Scheme-relative input requires an http(s) base; path-shaped Windows
///   input rejects an http(s) base.
pub fn resolve_to_absolute(
    value: &str,
    base_uri: Option<&str>,
) -> Result<String, UriResolutionError> {
    if value.contains('\n') || value.contains('\r') {
        return Err(UriResolutionError::MultiLine);
    }

    let trimmed = value.trim();

    match classify(trimmed) {
        Some(UriKind::AbsoluteHttp) => normalize_http_url(trimmed),

        Some(UriKind::FileUri) => file_uri_to_path(trimmed),

        Some(UriKind::OtherAbsolute) => Ok(trimmed.to_owned()),

        Some(UriKind::WindowsDrivePath | UriKind::WindowsUnc) => match base_uri {
            Some(base) if is_http_base(base) => Err(UriResolutionError::PathAgainstHttpBase),
            _ => Ok(trimmed.to_owned()),
        },

        Some(UriKind::SchemeRelative) => match base_uri {
            Some(base) if is_http_base(base) => join_url(base, trimmed),
            _ => Err(UriResolutionError::SchemeRelativeWithoutUrlBase),
        },

        // Malformed http(s): a scheme without a host.
        None if SCHEME.is_match(trimmed) => Err(UriResolutionError::MalformedUrl {
            url: trimmed.to_owned(),
        }),

        // Relative references, root-relative paths, fragments, and the
        // empty string.
        _ => match base_uri {
            Some(base) if is_http_base(base) => join_url(base, trimmed),
            Some(base) => resolve_against_path_base(trimmed, base),
            None => resolve_against_cwd(trimmed),
        },
    }
}

fn is_http_base(base: &str) -> bool {
    classify(base) == Some(UriKind::AbsoluteHttp)
}

fn normalize_http_url(value: &str) -> Result<String, UriResolutionError> {
    match Url::parse(value) {
        Ok(url) => Ok(url.to_string()),
        Err(_) => Err(UriResolutionError::MalformedUrl {
            url: value.to_owned(),
        }),
    }
}

fn join_url(base: &str, value: &str) -> Result<String, UriResolutionError> {
    let base = Url::parse(base).map_err(|_| UriResolutionError::MalformedUrl {
        url: base.to_owned(),
    })?;

    base.join(value)
        .map(|url| url.to_string())
        .map_err(|_| UriResolutionError::MalformedUrl {
            url: value.to_owned(),
        })
}

fn file_uri_to_path(value: &str) -> Result<String, UriResolutionError> {
    let invalid = || UriResolutionError::InvalidFileUri {
        uri: value.to_owned(),
    };

    let url = Url::parse(value).map_err(|_| invalid())?;
    let path = url.to_file_path().map_err(|_| invalid())?;

    Ok(normalize_path(&path).display().to_string())
}

fn resolve_against_path_base(value: &str, base: &str) -> Result<String, UriResolutionError> {
    let base_path = if classify(base) == Some(UriKind::FileUri) {
        let url = Url::parse(base).map_err(|_| UriResolutionError::InvalidFileUri {
            uri: base.to_owned(),
        })?;
        url.to_file_path()
            .map_err(|_| UriResolutionError::InvalidFileUri {
                uri: base.to_owned(),
            })?
    } else {
        PathBuf::from(base)
    };

    let joined = if Path::new(value).is_absolute() {
        PathBuf::from(value)
    } else {
        base_path.join(value)
    };

    let joined = if joined.is_absolute() {
        joined
    } else {
        current_dir()?.join(joined)
    };

    Ok(normalize_path(&joined).display().to_string())
}

fn resolve_against_cwd(value: &str) -> Result<String, UriResolutionError> {
    let path = Path::new(value);

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir()?.join(path)
    };

    Ok(normalize_path(&joined).display().to_string())
}

fn current_dir() -> Result<PathBuf, UriResolutionError> {
    env::current_dir().map_err(|_| UriResolutionError::CurrentDirUnavailable)
}

/// Lexical path normalization: collapse `.` and resolve `..` without
/// touching the filesystem, so nonexistent targets still resolve.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }

    normalized
}
