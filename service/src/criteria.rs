//! [`Criteria`] for filtering and paginating [`Row`]s.

use std::sync::LazyLock;

use common::{
    pagination::{PageNumber, RowsPerPage},
    Date,
};
use regex::Regex;

use crate::read::Row;

/// Complete set of filter and pagination parameters of a [`Row`] table.
///
/// Filtering is conjunctive: a [`Row`] survives only if it satisfies
/// every active predicate. A predicate is active iff its criterion is
/// non-empty (text), contains at least one digit (phone), or is `Some`
/// (date bounds).
///
/// A [`Row`] whose `birth_date` is not parseable as a calendar date never
/// satisfies an active date bound, so such rows are excluded only while a
/// date filter is active.
#[derive(Clone, Debug, Default)]
pub struct Criteria {
    /// Family name criterion: case-sensitive contiguous substring match,
    /// no normalization.
    pub last_name: String,

    /// City criterion, with the same semantics as `last_name`.
    pub city: String,

    /// Phone criterion: non-digit characters are stripped from both this
    /// criterion and the [`Row`]'s phone before the substring match.
    pub phone: String,

    /// Inclusive lower bound on the [`Row`]'s birth date.
    pub from_birth_date: Option<Date>,

    /// Inclusive upper bound on the [`Row`]'s birth date.
    pub to_birth_date: Option<Date>,

    /// Number of [`Row`]s per displayed page.
    pub rows_per_page: RowsPerPage,

    /// Currently selected page.
    pub current_page: PageNumber,
}

impl Criteria {
    /// Indicates whether the given [`Row`] satisfies every active
    /// predicate of this [`Criteria`].
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        if !self.last_name.is_empty()
            && !row.last_name.contains(&self.last_name)
        {
            return false;
        }

        if !self.city.is_empty() && !row.city.contains(&self.city) {
            return false;
        }

        let phone = extract_digits(&self.phone);
        if !phone.is_empty() && !extract_digits(&row.phone).contains(&phone) {
            return false;
        }

        if self.from_birth_date.is_some() || self.to_birth_date.is_some() {
            let Ok(birth_date) = Date::parse(&row.birth_date) else {
                return false;
            };
            if self.from_birth_date.is_some_and(|from| birth_date < from) {
                return false;
            }
            if self.to_birth_date.is_some_and(|to| birth_date > to) {
                return false;
            }
        }

        true
    }

    /// Returns the sub-sequence of the given [`Row`]s satisfying every
    /// active predicate of this [`Criteria`], preserving their order.
    #[must_use]
    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    /// Clears all the filter criteria, leaving the paging parameters
    /// (`rows_per_page`, `current_page`) untouched.
    pub fn reset(&mut self) {
        *self = Self {
            rows_per_page: self.rows_per_page,
            current_page: self.current_page,
            ..Self::default()
        };
    }
}

/// Extracts all the decimal digits of the given `input`, preserving their
/// order.
fn extract_digits(input: &str) -> String {
    /// Regular expression matching a single decimal digit.
    static REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\d").expect("valid regex"));

    REGEX.find_iter(input).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod spec {
    use common::{pagination::RowsPerPage, Date};

    use crate::read::Row;

    use super::Criteria;

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "1".into(),
                last_name: "Smith".into(),
                city: "Reno".into(),
                phone: "(555) 111-2222".into(),
                birth_date: "1990-01-01".into(),
                ..Row::default()
            },
            Row {
                id: "2".into(),
                last_name: "Jones".into(),
                city: "Reno".into(),
                phone: "555-333-4444".into(),
                birth_date: "1985-06-15".into(),
                ..Row::default()
            },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_keep_every_row() {
        let rows = rows();

        assert_eq!(Criteria::default().apply(&rows), rows);
    }

    #[test]
    fn city_criterion_keeps_matching_rows() {
        let criteria = Criteria {
            city: "Reno".into(),
            rows_per_page: RowsPerPage::new(10).unwrap(),
            ..Criteria::default()
        };

        assert_eq!(ids(&criteria.apply(&rows())), ["1", "2"]);
    }

    #[test]
    fn text_criteria_are_case_sensitive_substrings() {
        let rows = rows();

        let criteria = Criteria {
            last_name: "mit".into(),
            ..Criteria::default()
        };
        assert_eq!(ids(&criteria.apply(&rows)), ["1"]);

        let criteria = Criteria {
            last_name: "smith".into(),
            ..Criteria::default()
        };
        assert!(criteria.apply(&rows).is_empty());
    }

    #[test]
    fn phone_criterion_matches_stripped_digits() {
        let criteria = Criteria {
            phone: "5553".into(),
            ..Criteria::default()
        };

        // "5553334444" contains "5553", "5551112222" doesn't.
        assert_eq!(ids(&criteria.apply(&rows())), ["2"]);
    }

    #[test]
    fn phone_criterion_tolerates_formatting() {
        let criteria = Criteria {
            phone: "(555) 3".into(),
            ..Criteria::default()
        };

        assert_eq!(ids(&criteria.apply(&rows())), ["2"]);
    }

    #[test]
    fn phone_criterion_without_digits_is_inactive() {
        let criteria = Criteria {
            phone: "()- ".into(),
            ..Criteria::default()
        };

        assert_eq!(ids(&criteria.apply(&rows())), ["1", "2"]);
    }

    #[test]
    fn from_birth_date_is_inclusive_lower_bound() {
        let criteria = Criteria {
            from_birth_date: Some(Date::parse("1988-01-01").unwrap()),
            ..Criteria::default()
        };
        assert_eq!(ids(&criteria.apply(&rows())), ["1"]);

        let criteria = Criteria {
            from_birth_date: Some(Date::parse("1990-01-01").unwrap()),
            ..Criteria::default()
        };
        assert_eq!(ids(&criteria.apply(&rows())), ["1"]);
    }

    #[test]
    fn to_birth_date_is_inclusive_upper_bound() {
        let criteria = Criteria {
            to_birth_date: Some(Date::parse("1985-06-15").unwrap()),
            ..Criteria::default()
        };

        assert_eq!(ids(&criteria.apply(&rows())), ["2"]);
    }

    #[test]
    fn unparseable_birth_date_never_matches_active_bound() {
        let mut rows = rows();
        rows[0].birth_date = "not-a-date".into();

        let criteria = Criteria {
            from_birth_date: Some(Date::parse("1900-01-01").unwrap()),
            ..Criteria::default()
        };
        assert_eq!(ids(&criteria.apply(&rows)), ["2"]);

        // Without an active date bound the same row passes.
        assert_eq!(ids(&Criteria::default().apply(&rows)), ["1", "2"]);
    }

    #[test]
    fn filtering_is_conjunctive() {
        let criteria = Criteria {
            city: "Reno".into(),
            last_name: "Jones".into(),
            phone: "5551".into(),
            ..Criteria::default()
        };

        // Each predicate alone matches some row, but no row satisfies
        // all of them at once.
        assert!(criteria.apply(&rows()).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = Criteria {
            city: "Reno".into(),
            phone: "5553".into(),
            ..Criteria::default()
        };

        let once = criteria.apply(&rows());
        assert_eq!(criteria.apply(&once), once);
    }

    #[test]
    fn reset_preserves_paging_parameters() {
        let mut criteria = Criteria {
            last_name: "Smith".into(),
            city: "Reno".into(),
            phone: "5551".into(),
            from_birth_date: Some(Date::parse("1980-01-01").unwrap()),
            to_birth_date: Some(Date::parse("1999-12-31").unwrap()),
            rows_per_page: RowsPerPage::new(20).unwrap(),
            current_page: common::pagination::PageNumber::new(2).unwrap(),
        };

        criteria.reset();

        assert!(criteria.last_name.is_empty());
        assert!(criteria.city.is_empty());
        assert!(criteria.phone.is_empty());
        assert!(criteria.from_birth_date.is_none());
        assert!(criteria.to_birth_date.is_none());
        assert_eq!(criteria.rows_per_page.get(), 20);
        assert_eq!(criteria.current_page.get(), 2);
    }
}
