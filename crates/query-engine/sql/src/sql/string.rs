//! Type definitions of a low-level SQL string representation.

/// A SQL query under construction.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
        }
    }

    /// Append SQL keywords and punctuation.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append an identifier. Identifiers come from the field bindings or
    /// from the caller and are trusted, so they are written unquoted.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push_str(identifier);
    }

    /// Append a single-quoted string literal, doubling any embedded quotes.
    pub fn append_string_literal(&mut self, value: &str) {
        self.sql.push('\'');
        self.sql.push_str(&value.replace('\'', "''"));
        self.sql.push('\'');
    }
}
