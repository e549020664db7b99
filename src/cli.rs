use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::{SortBy, SortKey, SortOrder, DEFAULT_ITEMS_PER_PAGE};
use std::path::PathBuf;

/// Portfolio browser - show the profile, courses and books of a portfolio
/// data file, with facet filters and pagination
///
/// Examples:
///   # About and contact sections
///   folio portfolio.json profile
///
///   # First page of courses
///   folio portfolio.json courses
///
///   # Courses from MIT or UFRJ tagged "ai", newest first
///   folio portfolio.json courses --group MIT --group UFRJ --tag ai --sort date --desc
///
///   # Third page of books, ten per page, with the facet toggles
///   folio portfolio.json books --page 3 --per-page 10 --facets
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Multiple --group values are combined with OR\n  \
    - Multiple --tag values are combined with OR\n  \
    - Groups and tags are combined with AND\n  \
    - Naming the same value twice switches it back off\n\n\
Pagination:\n  \
    - Any filter sends the list back to page 1 before --page is applied")]
pub struct Cli {
    /// Path to the portfolio JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub view: View,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Reference date for ages and conclusion messages (defaults to today)
    #[arg(long, global = true, value_name = "YYYY-MM-DD", hide = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum View {
    /// About and contact sections
    Profile,
    /// Courses, grouped by institution
    Courses(ListArgs),
    /// Books, grouped by publisher
    Books(ListArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Toggle an institution/publisher filter (repeatable)
    #[arg(short, long = "group", value_name = "NAME", visible_aliases = ["institution", "publisher"])]
    pub groups: Vec<String>,

    /// Toggle a tag filter (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Page to show
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Items per page
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
    pub per_page: usize,

    /// Field to sort by
    #[arg(short, long, value_enum, default_value_t = SortField::Title)]
    pub sort: SortField,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Also list the available facet values and whether each is active
    #[arg(long)]
    pub facets: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Group,
    Date,
}

impl ListArgs {
    pub fn sort_by(&self) -> SortBy {
        let key = match self.sort {
            SortField::Title => SortKey::Title,
            SortField::Group => SortKey::Group,
            SortField::Date => SortKey::Date,
        };
        let order = if self.desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        SortBy::new(key, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_course_filters() {
        let cli = Cli::parse_from([
            "folio", "data.json", "courses", "--institution", "MIT", "-t", "ai", "--tag", "web",
            "--sort", "date", "--desc",
        ]);

        match cli.view {
            View::Courses(args) => {
                assert_eq!(args.groups, vec!["MIT"]);
                assert_eq!(args.tags, vec!["ai", "web"]);
                assert_eq!(args.page, 1);
                assert_eq!(args.per_page, 5);
                assert_eq!(args.sort_by(), SortBy::new(SortKey::Date, SortOrder::Desc));
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["folio", "data.json", "profile", "--no-color", "--today", "2024-05-10"]);

        assert!(cli.no_color);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 5, 10));
    }
}
