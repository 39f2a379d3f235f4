//! Small SELECT builder for the list endpoints.
//!
//! Column names and fixed fragments are `&'static str`, so only literals written in
//! this crate ever reach the SQL text. Anything that comes from a request goes in
//! as a bound parameter and `sqlx::QueryBuilder` numbers the placeholders.

use sqlx::{Postgres, QueryBuilder};

#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    Fixed(&'static str),
    Eq(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct SelectQuery {
    base: &'static str,
    predicates: Vec<Predicate>,
    order_by: Option<&'static str>,
    page: Option<(i64, i64)>,
}

impl SelectQuery {
    /// `base` is everything up to, but not including, the WHERE clause.
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            predicates: Vec::new(),
            order_by: None,
            page: None,
        }
    }

    /// Mandatory condition with no user input, e.g. `is_active = true`.
    pub fn filter(mut self, fragment: &'static str) -> Self {
        self.predicates.push(Predicate::Fixed(fragment));
        self
    }

    /// Adds `column = $n` only when a value is present.
    pub fn eq_opt(mut self, column: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate::Eq(column, value));
        }
        self
    }

    pub fn order_by(mut self, clause: &'static str) -> Self {
        self.order_by = Some(clause);
        self
    }

    pub fn page(mut self, limit: i64, offset: i64) -> Self {
        self.page = Some((limit, offset));
        self
    }

    pub fn into_builder(self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(self.base);

        for (i, predicate) in self.predicates.into_iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                Predicate::Fixed(fragment) => {
                    qb.push(fragment);
                }
                Predicate::Eq(column, value) => {
                    qb.push(column).push(" = ").push_bind(value);
                }
            }
        }

        if let Some(clause) = self.order_by {
            qb.push(" ORDER BY ").push(clause);
        }

        if let Some((limit, offset)) = self.page {
            qb.push(" LIMIT ").push_bind(limit);
            qb.push(" OFFSET ").push_bind(offset);
        }

        qb
    }
}
