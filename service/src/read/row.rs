//! [`Row`] read model definition.

use crate::domain::User;

/// Flat projection of a [`User`] for tabular display.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row {
    /// ID of the projected [`User`], unique within a single row set and
    /// stable across recomputations.
    pub id: String,

    /// Phone number, raw and unnormalized.
    pub phone: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// City of residence.
    pub city: String,

    /// Date of birth as a string, parseable as a calendar date.
    pub birth_date: String,
}

// Total projection: a missing nested field becomes an empty value, never
// a failed row.
impl From<User> for Row {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            location,
            phone,
            dob,
        } = user;

        let (first_name, last_name) = name
            .map(|n| (n.first.unwrap_or_default(), n.last.unwrap_or_default()))
            .unwrap_or_default();

        Self {
            id: id.and_then(|id| id.value).unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            first_name,
            last_name,
            city: location.and_then(|l| l.city).unwrap_or_default(),
            birth_date: dob.unwrap_or_default(),
        }
    }
}

/// Projects the given [`User`]s into [`Row`]s, one per [`User`],
/// preserving order.
#[must_use]
pub fn project(users: impl IntoIterator<Item = User>) -> Vec<Row> {
    users.into_iter().map(Row::from).collect()
}

#[cfg(test)]
mod spec {
    use crate::domain::{user, User};

    use super::{project, Row};

    #[test]
    fn projects_nested_fields_flat() {
        let user = User {
            id: Some(user::Id {
                value: Some("42".into()),
            }),
            name: Some(user::Name {
                first: Some("Jane".into()),
                last: Some("Smith".into()),
            }),
            location: Some(user::Location {
                city: Some("Reno".into()),
            }),
            phone: Some("(555) 111-2222".into()),
            dob: Some("1990-01-01".into()),
        };

        assert_eq!(
            Row::from(user),
            Row {
                id: "42".into(),
                phone: "(555) 111-2222".into(),
                first_name: "Jane".into(),
                last_name: "Smith".into(),
                city: "Reno".into(),
                birth_date: "1990-01-01".into(),
            },
        );
    }

    #[test]
    fn tolerates_missing_fields() {
        assert_eq!(Row::from(User::default()), Row::default());

        let half_filled = User {
            name: Some(user::Name {
                first: None,
                last: Some("Jones".into()),
            }),
            ..User::default()
        };
        assert_eq!(
            Row::from(half_filled),
            Row {
                last_name: "Jones".into(),
                ..Row::default()
            },
        );
    }

    #[test]
    fn preserves_order_and_count() {
        let users = (0..5).map(|i| User {
            id: Some(user::Id {
                value: Some(i.to_string()),
            }),
            ..User::default()
        });

        let ids = project(users)
            .into_iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, ["0", "1", "2", "3", "4"]);
    }
}
