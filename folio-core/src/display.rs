use chrono::{Datelike, NaiveDate};
use unicode_normalization::UnicodeNormalization;

const INSTITUTION_IMAGE_DIR: &str = "assets/img/institutions";

/// Render tags as `#tag` words separated by spaces
pub fn print_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describe when a course was (or will be) concluded, relative to `today`
pub fn conclusion_message(conclusion: Option<NaiveDate>, today: NaiveDate) -> String {
    match conclusion {
        None => "In progress".to_string(),
        Some(date) if date <= today => format!("Concluded in {:02}/{}", date.month(), date.year()),
        Some(date) => format!("Expected in {:02}/{}", date.month(), date.year()),
    }
}

/// Image asset path for an institution logo
pub fn institution_image(institution: &str) -> String {
    format!("{}/{}.png", INSTITUTION_IMAGE_DIR, slugify(institution))
}

/// Lowercase ASCII slug: accents dropped, other runs of characters become `-`
pub fn slugify(s: &str) -> String {
    let ascii: String = s
        .nfd()
        .filter(|c| c.is_ascii())
        .collect::<String>()
        .to_ascii_lowercase();

    ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Whole years between `birth` and `today`; zero for a future birth date
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth).unwrap_or(0)
}
