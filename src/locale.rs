//! Locale detection and per-locale string tables
//!
//! The locale is decided once per document by scanning the preamble text the host collected.
//! Two kinds of markers are recognised, in priority order:
//!
//! 1. A default-language directive: `\setdefaultlanguage{greek}` or `\setmainlanguage{english}`.
//! 2. A bracketed package option: `\usepackage[greek]{babel}`. In an option list the last
//!    recognised language is the main one, as babel does.
//!
//! Without any marker the locale is English. Nothing outside this module looks at preamble
//! text; renderers only receive the resolved [Locale].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static LANGUAGE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\set(?:default|main)language\s*(?:\[[^\]]*\])?\s*\{\s*(greek|english)\s*\}")
        .expect("valid language directive regex")
});

static BRACKET_OPTIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]").expect("valid bracket option regex"));

/// Output language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    El,
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const EL_MONTHS: [&str; 12] = [
    "Ιαν", "Φεβ", "Μαρ", "Απρ", "Μάι", "Ιούν", "Ιούλ", "Αύγ", "Σεπ", "Οκτ", "Νοέ", "Δεκ",
];

impl Locale {
    /// Literal used for ongoing date ranges.
    pub fn present_literal(self) -> &'static str {
        match self {
            Locale::En => "present",
            Locale::El => "σήμερα",
        }
    }

    /// Abbreviated month name for a 1-based month, `None` when out of range.
    pub fn month_abbreviation(self, month: u32) -> Option<&'static str> {
        let table = match self {
            Locale::En => &EN_MONTHS,
            Locale::El => &EL_MONTHS,
        };
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        table.get(index).copied()
    }

    /// Heading word that marks an education subtree.
    pub fn education_marker(self) -> &'static str {
        match self {
            Locale::En => "Education",
            Locale::El => "Εκπαίδευση",
        }
    }

    /// Whether a section title names the education part of the CV.
    pub fn is_education_title(self, title: &str) -> bool {
        title
            .to_lowercase()
            .contains(&self.education_marker().to_lowercase())
    }

    fn from_language_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "greek" => Some(Locale::El),
            "english" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::El => write!(f, "el"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "el" | "greek" => Ok(Locale::El),
            other => Err(format!("unknown locale '{other}' (expected en or el)")),
        }
    }
}

/// Detect the document locale from assembled preamble text.
pub fn detect(preamble: &str) -> Locale {
    let locale = directive_locale(preamble)
        .or_else(|| bracket_locale(preamble))
        .unwrap_or_default();
    tracing::debug!(%locale, "detected locale");
    locale
}

fn directive_locale(preamble: &str) -> Option<Locale> {
    LANGUAGE_DIRECTIVE
        .captures(preamble)
        .and_then(|caps| Locale::from_language_name(&caps[1]))
}

fn bracket_locale(preamble: &str) -> Option<Locale> {
    BRACKET_OPTIONS.captures_iter(preamble).find_map(|caps| {
        caps[1]
            .split(',')
            .filter_map(Locale::from_language_name)
            .last()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_defaults_to_english() {
        assert_eq!(detect(""), Locale::En);
        assert_eq!(detect("\\usepackage{hyperref}"), Locale::En);
    }

    #[test]
    fn test_directive_detects_greek() {
        assert_eq!(detect("\\setdefaultlanguage{greek}"), Locale::El);
        assert_eq!(
            detect("\\setmainlanguage[variant=monotonic]{greek}"),
            Locale::El
        );
    }

    #[test]
    fn test_bracket_option_detects_greek() {
        assert_eq!(detect("\\usepackage[greek]{babel}"), Locale::El);
    }

    #[test]
    fn test_last_language_in_option_list_wins() {
        assert_eq!(detect("\\usepackage[greek,english]{babel}"), Locale::En);
        assert_eq!(detect("\\usepackage[english, greek]{babel}"), Locale::El);
    }

    #[test]
    fn test_directive_beats_bracket_option() {
        let preamble = "\\usepackage[greek]{babel}\n\\setdefaultlanguage{english}";
        assert_eq!(detect(preamble), Locale::En);
        let preamble = "\\usepackage[english]{babel}\n\\setdefaultlanguage{greek}";
        assert_eq!(detect(preamble), Locale::El);
    }

    #[test]
    fn test_unrelated_brackets_are_skipped() {
        let preamble = "\\documentclass[11pt,a4paper]{article}\n\\usepackage[greek]{babel}";
        assert_eq!(detect(preamble), Locale::El);
    }

    #[test]
    fn test_month_table_bounds() {
        assert_eq!(Locale::En.month_abbreviation(1), Some("Jan"));
        assert_eq!(Locale::El.month_abbreviation(12), Some("Δεκ"));
        assert_eq!(Locale::En.month_abbreviation(0), None);
        assert_eq!(Locale::En.month_abbreviation(13), None);
    }

    #[test]
    fn test_education_title_matching() {
        assert!(Locale::En.is_education_title("Education & Training"));
        assert!(Locale::En.is_education_title("EDUCATION"));
        assert!(Locale::El.is_education_title("Εκπαίδευση"));
        assert!(!Locale::En.is_education_title("Experience"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("EL".parse::<Locale>(), Ok(Locale::El));
        assert_eq!("english".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }
}
