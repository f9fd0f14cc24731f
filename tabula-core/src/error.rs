use std::{
    error,
    fmt::{self, Display},
};

/// Misuse of a [`Schema`](crate::Schema) detected before any SQL is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A qualified name was requested while the table alias is empty.
    MissingAlias { table: String },
    /// A qualified name or a query was requested before the columns were installed.
    MissingColumns { table: String },
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingAlias { table } => {
                write!(f, "Table `{table}` must have an alias to qualify its columns")
            }
            SchemaError::MissingColumns { table } => {
                write!(f, "Table `{table}` has no columns, install them first")
            }
        }
    }
}

impl error::Error for SchemaError {}

/// Dynamic attribute resolution failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// Neither a declared field, a column nor the content object has the attribute.
    NotFound { attribute: String, table: String },
    /// Neither the record nor its content object declares the method.
    MethodNotFound { method: String, table: String },
    /// No column of the table has the given name or alias.
    UnknownColumn { column: String, table: String },
}

impl Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::NotFound { attribute, table } => {
                write!(f, "Attribute `{attribute}` not found in a record of `{table}`")
            }
            AttributeError::MethodNotFound { method, table } => {
                write!(f, "Method `{method}` not found in a record of `{table}`")
            }
            AttributeError::UnknownColumn { column, table } => {
                write!(f, "Column or alias `{column}` does not exist in `{table}`")
            }
        }
    }
}

impl error::Error for AttributeError {}
