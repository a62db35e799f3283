//! Paper geometry for the print/PDF path.
//!
//! The browser's print pipeline owns pagination and output format; all we
//! control is the page box the preview is laid out against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown paper size '{0}', expected 'a4' or 'letter'")]
pub struct UnknownPaperSize(pub String);

impl FromStr for PaperSize {
    type Err = UnknownPaperSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PaperSize::A4),
            "letter" | "us-letter" => Ok(PaperSize::Letter),
            other => Err(UnknownPaperSize(other.to_string())),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSize::A4 => write!(f, "A4"),
            PaperSize::Letter => write!(f, "Letter"),
        }
    }
}

/// Page box handed to the print stylesheet. All lengths in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageConfig {
    pub paper: PaperSize,
    /// Value for the CSS `@page { size: … }` rule.
    pub css_size: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
}

/// A4 is 210 × 297 mm, US letter 8.5" × 11". Both use 0.5" margins.
pub fn page_config(paper: PaperSize) -> PageConfig {
    match paper {
        PaperSize::A4 => PageConfig {
            paper,
            css_size: "A4",
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 12.7,
        },
        PaperSize::Letter => PageConfig {
            paper,
            css_size: "letter",
            width_mm: 215.9,
            height_mm: 279.4,
            margin_mm: 12.7,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paper_size() {
        assert_eq!("a4".parse::<PaperSize>(), Ok(PaperSize::A4));
        assert_eq!(" Letter ".parse::<PaperSize>(), Ok(PaperSize::Letter));
        assert_eq!(
            "legal".parse::<PaperSize>(),
            Err(UnknownPaperSize("legal".to_string()))
        );
    }

    #[test]
    fn test_default_is_a4() {
        let page = page_config(PaperSize::default());
        assert_eq!(page.css_size, "A4");
        assert_eq!(page.height_mm, 297.0);
    }
}
