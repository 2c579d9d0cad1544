//! Date token normalisation
//!
//! Entry dates arrive as loose strings: host timestamps such as `<2019-03-05 Tue>`, partial
//! dates, bare years, words like "present", or free text. [DateToken::parse] recognises them
//! in a fixed order and [DateToken::render] prints them for a locale and a [DateContext].
//!
//! Anything unrecognised is kept verbatim; there is no error path. A token carrying more than
//! one year counts as unrecognised.

use crate::locale::Locale;
use once_cell::sync::Lazy;
use regex::Regex;

static EXACT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})").expect("valid date regex"));

static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{4})-([0-9]{1,2})\b").expect("valid year-month regex"));

static YEAR_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{4})\b").expect("valid year regex"));

const PRESENT_WORDS: &[&str] = &[
    "present",
    "now",
    "today",
    "current",
    "ongoing",
    "σήμερα",
    "τώρα",
    "παρόν",
    "μέχρι σήμερα",
];

/// How much of a date a section wants to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateContext {
    /// Month and two-digit year
    #[default]
    Default,
    /// Four-digit year only
    Education,
}

/// A parsed date value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    ExactDate { year: u32, month: u32, day: u32 },
    YearMonth { year: u32, month: u32 },
    YearOnly { year: u32 },
    Present,
    Unparsed(String),
}

impl DateToken {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_present_word(trimmed) {
            return DateToken::Present;
        }
        // Two or more dates in one token (a range written into one field) stay verbatim.
        if YEAR_ONLY.find_iter(trimmed).count() > 1 {
            return unparsed(trimmed);
        }
        if let Some(caps) = EXACT_DATE.captures(trimmed) {
            let (year, month, day) = (number(&caps[1]), number(&caps[2]), number(&caps[3]));
            if (1..=12).contains(&month) && (1..=31).contains(&day) {
                return DateToken::ExactDate { year, month, day };
            }
            return unparsed(trimmed);
        }
        if let Some(caps) = YEAR_MONTH.captures(trimmed) {
            let (year, month) = (number(&caps[1]), number(&caps[2]));
            if (1..=12).contains(&month) {
                return DateToken::YearMonth { year, month };
            }
            return unparsed(trimmed);
        }
        if let Some(caps) = YEAR_ONLY.captures(trimmed) {
            return DateToken::YearOnly {
                year: number(&caps[1]),
            };
        }
        unparsed(trimmed)
    }

    pub fn render(&self, context: DateContext, locale: Locale) -> String {
        match (self, context) {
            (DateToken::Present, _) => locale.present_literal().to_string(),
            (DateToken::Unparsed(raw), _) => raw.clone(),
            (DateToken::ExactDate { year, .. }, DateContext::Education)
            | (DateToken::YearMonth { year, .. }, DateContext::Education)
            | (DateToken::YearOnly { year }, _) => format!("{year:04}"),
            (DateToken::ExactDate { year, month, .. }, DateContext::Default)
            | (DateToken::YearMonth { year, month }, DateContext::Default) => {
                month_year(*year, *month, locale)
            }
        }
    }
}

fn is_present_word(token: &str) -> bool {
    let word = token
        .trim_matches(|c: char| matches!(c, '<' | '>' | '[' | ']') || c.is_whitespace())
        .to_lowercase();
    PRESENT_WORDS.contains(&word.as_str())
}

fn number(digits: &str) -> u32 {
    // The regexes only capture up to four ASCII digits.
    digits.parse().unwrap_or_default()
}

fn unparsed(raw: &str) -> DateToken {
    tracing::trace!(raw, "date kept verbatim");
    DateToken::Unparsed(raw.to_string())
}

fn month_year(year: u32, month: u32, locale: Locale) -> String {
    match locale.month_abbreviation(month) {
        Some(abbr) => format!("{abbr} '{:02}", year % 100),
        None => format!("{year:04}"),
    }
}

/// Parse and render a single raw date.
pub fn format(raw: &str, context: DateContext, locale: Locale) -> String {
    DateToken::parse(raw).render(context, locale)
}

/// Render a `from -- to` range.
///
/// A missing end means the range is ongoing. A missing start leaves only the end, and no
/// dates at all give an empty string.
pub fn format_range(
    from: Option<&str>,
    to: Option<&str>,
    context: DateContext,
    locale: Locale,
) -> String {
    let from = from.map(str::trim).filter(|s| !s.is_empty());
    let to = to.map(str::trim).filter(|s| !s.is_empty());
    match (from, to) {
        (Some(from), Some(to)) => format!(
            "{} -- {}",
            format(from, context, locale),
            format(to, context, locale)
        ),
        (Some(from), None) => format!(
            "{} -- {}",
            format(from, context, locale),
            locale.present_literal()
        ),
        (None, Some(to)) => format(to, context, locale),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<2019-03-05 Tue>", DateToken::ExactDate { year: 2019, month: 3, day: 5 })]
    #[case("2019-3-5", DateToken::ExactDate { year: 2019, month: 3, day: 5 })]
    #[case("<2020-11>", DateToken::YearMonth { year: 2020, month: 11 })]
    #[case("2017", DateToken::YearOnly { year: 2017 })]
    #[case("Spring 2017", DateToken::YearOnly { year: 2017 })]
    #[case("Present", DateToken::Present)]
    #[case("<now>", DateToken::Present)]
    #[case("Σήμερα", DateToken::Present)]
    #[case("μέχρι σήμερα", DateToken::Present)]
    #[case("a while ago", DateToken::Unparsed("a while ago".to_string()))]
    #[case("2019-13-01", DateToken::Unparsed("2019-13-01".to_string()))]
    #[case("2015-2017", DateToken::Unparsed("2015-2017".to_string()))]
    #[case(
        "<2019-03-05 Tue>--<2020-01-01 Wed>",
        DateToken::Unparsed("<2019-03-05 Tue>--<2020-01-01 Wed>".to_string())
    )]
    fn test_parse(#[case] raw: &str, #[case] expected: DateToken) {
        assert_eq!(DateToken::parse(raw), expected);
    }

    #[rstest]
    #[case("<2019-03-05>", DateContext::Default, Locale::En, "Mar '19")]
    #[case("<2019-03-05>", DateContext::Education, Locale::En, "2019")]
    #[case("<2021-07>", DateContext::Default, Locale::En, "Jul '21")]
    #[case("<2005-01-20>", DateContext::Default, Locale::En, "Jan '05")]
    #[case("2017", DateContext::Default, Locale::En, "2017")]
    #[case("today", DateContext::Education, Locale::En, "present")]
    #[case("today", DateContext::Default, Locale::El, "σήμερα")]
    #[case("<2019-05-05>", DateContext::Default, Locale::El, "Μάι '19")]
    #[case("summer school", DateContext::Education, Locale::El, "summer school")]
    fn test_format(
        #[case] raw: &str,
        #[case] context: DateContext,
        #[case] locale: Locale,
        #[case] expected: &str,
    ) {
        assert_eq!(format(raw, context, locale), expected);
    }

    #[test]
    fn test_range_with_both_ends() {
        let range = format_range(
            Some("<2019-03-05>"),
            Some("<2021-07-01>"),
            DateContext::Default,
            Locale::En,
        );
        assert_eq!(range, "Mar '19 -- Jul '21");
    }

    #[test]
    fn test_open_range_is_ongoing() {
        let range = format_range(Some("<2019-03-05>"), None, DateContext::Default, Locale::En);
        assert_eq!(range, "Mar '19 -- present");
    }

    #[test]
    fn test_greek_range() {
        let range = format_range(Some("<2019-03-05>"), None, DateContext::Default, Locale::El);
        assert_eq!(range, "Μαρ '19 -- σήμερα");
    }

    #[test]
    fn test_blank_end_counts_as_missing() {
        let range = format_range(Some("2015"), Some("  "), DateContext::Default, Locale::En);
        assert_eq!(range, "2015 -- present");
    }

    #[test]
    fn test_range_without_dates_is_empty() {
        assert_eq!(
            format_range(None, None, DateContext::Default, Locale::En),
            ""
        );
    }

    #[test]
    fn test_range_in_one_field_is_kept_verbatim() {
        let range = format_range(Some("2015-2017"), None, DateContext::Default, Locale::En);
        assert_eq!(range, "2015-2017 -- present");
        let range = format_range(
            None,
            Some("<2019-03-05 Tue>--<2020-01-01 Wed>"),
            DateContext::Education,
            Locale::En,
        );
        assert_eq!(range, "<2019-03-05 Tue>--<2020-01-01 Wed>");
    }

    #[test]
    fn test_range_with_only_end() {
        let range = format_range(
            None,
            Some("<2021-07-01>"),
            DateContext::Education,
            Locale::En,
        );
        assert_eq!(range, "2021");
    }
}
