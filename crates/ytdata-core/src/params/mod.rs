//! Operation parameter schemas.
//!
//! Every API method has a parameter struct implementing [`Params`]. The
//! client validates it, substitutes path parameters and appends the rest to
//! the query string before any request is built.

mod activities;
mod captions;
mod channels;
mod comments;
mod live;
mod memberships;
mod misc;
mod playlists;
mod search;
mod subscriptions;
mod videos;

pub use activities::*;
pub use captions::*;
pub use channels::*;
pub use comments::*;
pub use live::*;
pub use memberships::*;
pub use misc::*;
pub use playlists::*;
pub use search::*;
pub use subscriptions::*;
pub use videos::*;

use crate::error::{ParamError, ParamIssue};
use crate::types::Parts;

/// Parameters of a single API operation.
pub trait Params: std::fmt::Debug + Send + Sync {
    /// Returns the value for a `{name}` placeholder in the endpoint path.
    fn path_param(&self, name: &str) -> Option<String>;

    /// Appends query parameters in wire form.
    fn append_query(&self, query: &mut Query);

    /// Records every validation failure in `validator`.
    fn validate(&self, validator: &mut Validator);

    /// Validates the parameters for `operation`.
    fn check(&self, operation: &'static str) -> Result<(), ParamError> {
        let mut validator = Validator::new();
        self.validate(&mut validator);
        validator.finish(operation)
    }
}

/// Ordered query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter in wire form.
    pub fn push<V: QueryValue + ?Sized>(&mut self, key: &'static str, value: &V) {
        self.pairs.push((key, value.query_value()));
    }

    /// Returns the value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A value that can be written into a query string.
///
/// Sequences are comma-joined into a single value, which is the API's
/// convention for list parameters such as `part` and `id`.
pub trait QueryValue {
    fn query_value(&self) -> String;
}

impl QueryValue for String {
    fn query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for str {
    fn query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for bool {
    fn query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for u32 {
    fn query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for f64 {
    fn query_value(&self) -> String {
        self.to_string()
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn query_value(&self) -> String {
        self.iter()
            .map(QueryValue::query_value)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl QueryValue for Parts {
    fn query_value(&self) -> String {
        self.to_string()
    }
}

/// A required parameter value that can be empty.
///
/// Types that cannot be empty (enums, numbers, booleans) keep the default.
pub trait Required {
    fn is_missing(&self) -> bool {
        false
    }
}

impl Required for String {
    fn is_missing(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T: Required> Required for Vec<T> {
    fn is_missing(&self) -> bool {
        self.is_empty() || self.iter().any(Required::is_missing)
    }
}

impl Required for Parts {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Required for bool {}
impl Required for u32 {}

/// Collects parameter validation failures.
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<ParamIssue>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a free-form failure for `field`.
    pub fn invalid(&mut self, field: &'static str, reason: impl Into<String>) {
        self.issues.push(ParamIssue {
            field,
            reason: reason.into(),
        });
    }

    /// Fails if a required value is empty.
    pub fn required<T: Required + ?Sized>(&mut self, field: &'static str, value: &T) {
        if value.is_missing() {
            self.invalid(field, "is required and must not be empty");
        }
    }

    /// Fails if `value` is set and outside `min..=max`.
    pub fn range(&mut self, field: &'static str, value: Option<u32>, min: u32, max: u32) {
        if let Some(value) = value {
            if value < min || value > max {
                self.invalid(
                    field,
                    format!("must be between {} and {} (got {})", min, max, value),
                );
            }
        }
    }

    /// Fails unless exactly one of the named filters is set.
    ///
    /// Every filter is reported so the caller sees the whole group.
    pub fn exactly_one(&mut self, filters: &[(&'static str, bool)]) {
        let set = filters.iter().filter(|(_, present)| *present).count();
        if set == 1 {
            return;
        }
        let names = filters
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        let reason = if set == 0 {
            format!("one of {} must be set", names)
        } else {
            format!("only one of {} may be set", names)
        };
        for &(name, present) in filters {
            if set == 0 || present {
                self.invalid(name, reason.clone());
            }
        }
    }

    /// Fails if more than one of the named filters is set.
    pub fn at_most_one(&mut self, filters: &[(&'static str, bool)]) {
        if filters.iter().filter(|(_, present)| *present).count() > 1 {
            self.exactly_one(filters);
        }
    }

    /// Fails if `field` is set while `condition` does not hold.
    pub fn only_with(&mut self, field: &'static str, present: bool, condition: bool, reason: &str) {
        if present && !condition {
            self.invalid(field, format!("may only be set {}", reason));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the collected failures as a [`ParamError`], if any.
    pub fn finish(self, operation: &'static str) -> Result<(), ParamError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ParamError {
                operation,
                issues: self.issues,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_comma_joined() {
        let mut query = Query::new();
        query.push("id", &vec!["a".to_string(), "b".to_string()]);
        query.push("part", &Parts::from("snippet,statistics"));
        query.push("mine", &true);

        assert_eq!(query.get("id"), Some("a,b"));
        assert_eq!(query.get("part"), Some("snippet,statistics"));
        assert_eq!(query.get("mine"), Some("true"));
    }

    #[test]
    fn range_reports_out_of_bounds() {
        let mut validator = Validator::new();
        validator.range("maxResults", Some(51), 0, 50);
        validator.range("pageSize", None, 1, 5);

        let err = validator.finish("youtube.test").unwrap_err();
        assert_eq!(err.fields(), vec!["maxResults"]);
        assert!(err.issues[0].reason.contains("between 0 and 50"));
    }

    #[test]
    fn exactly_one_reports_whole_group_when_unset() {
        let mut validator = Validator::new();
        validator.exactly_one(&[("chart", false), ("id", false), ("myRating", false)]);

        let err = validator.finish("youtube.videos.list").unwrap_err();
        assert_eq!(err.fields(), vec!["chart", "id", "myRating"]);
    }

    #[test]
    fn exactly_one_reports_conflicting_filters() {
        let mut validator = Validator::new();
        validator.exactly_one(&[("chart", true), ("id", true), ("myRating", false)]);

        let err = validator.finish("youtube.videos.list").unwrap_err();
        assert_eq!(err.fields(), vec!["chart", "id"]);
    }

    #[test]
    fn at_most_one_allows_none() {
        let mut validator = Validator::new();
        validator.at_most_one(&[("forMine", false), ("channelId", false)]);
        assert!(validator.is_empty());
    }

    #[test]
    fn blank_strings_are_missing() {
        let mut validator = Validator::new();
        validator.required("id", &"  ".to_string());
        validator.required("part", &Parts::default());
        assert_eq!(validator.finish("x").unwrap_err().fields(), vec!["id", "part"]);
    }

    #[test]
    fn lists_with_blank_elements_are_missing() {
        let mut validator = Validator::new();
        validator.required("id", &Vec::<String>::new());
        validator.required("videoId", &vec!["abc".to_string(), " ".to_string()]);
        validator.required("channelId", &vec!["UC1".to_string()]);
        assert_eq!(
            validator.finish("x").unwrap_err().fields(),
            vec!["id", "videoId"]
        );
    }
}
