//! Hash-fragment routes.
//!
//! The application understands two navigation targets: the paginated index
//! (`#/`, `#/<page>`) and the submission confirmation (`#/submitted`).

use std::fmt;

/// Literal segment of the confirmation route.
const SUBMITTED_SEGMENT: &str = "submitted";

/// Parsed navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Paginated bookmark list; pages are 1-based.
    Index(usize),
    /// Confirmation view for the most recently added bookmark.
    Submitted,
}

impl Route {
    /// Parses a location hash such as `#/3` or `#/submitted`.
    ///
    /// A segment starting with a positive integer selects that index page
    /// (trailing characters after the digits are ignored). Anything else,
    /// including `#/`, `#/0` and unknown words, falls back to `Index(1)`.
    pub fn parse(hash: &str) -> Route {
        let segment = hash
            .strip_prefix("#/")
            .or_else(|| hash.strip_prefix('#'))
            .unwrap_or(hash)
            .trim();

        if segment == SUBMITTED_SEGMENT {
            return Route::Submitted;
        }

        match leading_page_number(segment) {
            Some(page) if page >= 1 => Route::Index(page),
            _ => Route::Index(1),
        }
    }

    /// The hash that navigates to this route.
    pub fn to_hash(&self) -> String {
        match self {
            Route::Index(page) => format!("#/{}", page),
            Route::Submitted => format!("#/{}", SUBMITTED_SEGMENT),
        }
    }

    /// The page number for index routes.
    pub fn page(&self) -> Option<usize> {
        match self {
            Route::Index(page) => Some(*page),
            Route::Submitted => None,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Index(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}

/// Reads the run of ASCII digits at the start of `segment`.
fn leading_page_number(segment: &str) -> Option<usize> {
    let end = segment
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(segment.len());
    if end == 0 {
        return None;
    }
    // Overlong digit runs saturate instead of failing.
    Some(segment[..end].parse::<usize>().unwrap_or(usize::MAX))
}
