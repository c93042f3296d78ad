//! Optional foreign-key filter shared by `Post::by_user` and
//! `Comment::by_post`.
//!
//! # Invariants
//! - `Some(id)` restricts rows to `column = id`; a non-matching id yields an
//!   empty result, never an error.
//! - `None` applies no restriction at all (pass-through, not empty).

use rusqlite::types::Value;

/// A foreign-key equality filter that is only applied when a value is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyScope {
    column: &'static str,
    value: Option<i64>,
}

impl ForeignKeyScope {
    /// `column` is a trusted, compile-time column name; it is spliced into SQL.
    pub const fn new(column: &'static str, value: Option<i64>) -> Self {
        Self { column, value }
    }

    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Returns whether this scope narrows the result set.
    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    /// Row-level form of the predicate, for records already in memory.
    pub fn matches(&self, foreign_key: i64) -> bool {
        self.value.map_or(true, |id| id == foreign_key)
    }

    /// Appends ` AND <column> = ?` plus its bind value when active.
    pub(crate) fn push_sql(&self, sql: &mut String, bind_values: &mut Vec<Value>) {
        if let Some(id) = self.value {
            sql.push_str(" AND ");
            sql.push_str(self.column);
            sql.push_str(" = ?");
            bind_values.push(Value::Integer(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ForeignKeyScope;
    use rusqlite::types::Value;

    #[test]
    fn absent_value_leaves_query_untouched() {
        let scope = ForeignKeyScope::new("post_id", None);
        let mut sql = String::from("SELECT id FROM comments WHERE 1 = 1");
        let mut binds = Vec::new();

        scope.push_sql(&mut sql, &mut binds);

        assert_eq!(sql, "SELECT id FROM comments WHERE 1 = 1");
        assert!(binds.is_empty());
        assert!(!scope.is_active());
    }

    #[test]
    fn present_value_adds_equality_clause() {
        let scope = ForeignKeyScope::new("user_id", Some(5));
        let mut sql = String::from("SELECT id FROM posts WHERE 1 = 1");
        let mut binds = Vec::new();

        scope.push_sql(&mut sql, &mut binds);

        assert_eq!(sql, "SELECT id FROM posts WHERE 1 = 1 AND user_id = ?");
        assert_eq!(binds, vec![Value::Integer(5)]);
    }

    #[test]
    fn matches_is_pass_through_when_absent() {
        let rows = [(1_i64, 10_i64), (2, 20)];

        let all: Vec<i64> = rows
            .iter()
            .filter(|(_, post_id)| ForeignKeyScope::new("post_id", None).matches(*post_id))
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(all, vec![1, 2]);

        let scoped: Vec<i64> = rows
            .iter()
            .filter(|(_, post_id)| ForeignKeyScope::new("post_id", Some(10)).matches(*post_id))
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(scoped, vec![1]);

        let none: Vec<i64> = rows
            .iter()
            .filter(|(_, post_id)| ForeignKeyScope::new("post_id", Some(99)).matches(*post_id))
            .map(|(id, _)| *id)
            .collect();
        assert!(none.is_empty());
    }
}
