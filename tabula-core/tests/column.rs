#[cfg(test)]
mod tests {
    use tabula_core::{Column, ColumnSet, Value};

    fn columns() -> ColumnSet {
        ColumnSet::new()
            .with(Column::new("id").column_type("int").primary(true))
            .with(Column::new("email").alias("mail").column_type("varchar"))
            .with(Column::new("name").column_type("varchar"))
    }

    #[test]
    fn column_defaults() {
        let column = Column::new("email");
        assert_eq!(column.name(), "email");
        assert_eq!(column.get_alias(), "email");
        assert_eq!(column.get_type(), "");
        assert!(!column.is_primary());
        assert!(column.get_value().is_null());
        assert!(column.alias_is_name());
        assert!(!Column::new("email").alias("mail").alias_is_name());
        assert!(Column::new("email").alias("").alias_is_name());
    }

    #[test]
    fn hydrate_appends_new_columns() {
        let mut columns = columns();
        columns.hydrate(Column::new("created_at").column_type("timestamp"));
        assert_eq!(columns.len(), 4);
        assert_eq!(columns.names(), ["id", "email", "name", "created_at"]);
        assert_eq!(
            columns.find_by("created_at").map(Column::get_type),
            Some("timestamp")
        );
    }

    #[test]
    fn hydrate_replaces_in_place() {
        let mut columns = columns();
        columns
            .hydrate(Column::new("email").alias("address").column_type("text"))
            .hydrate(Column::new("id").column_type("bigint"));
        assert_eq!(columns.len(), 3);
        assert_eq!(columns.names(), ["id", "email", "name"]);
        let email = columns.find_by("email").expect("email is a column");
        assert_eq!(email.get_alias(), "address");
        assert_eq!(email.get_type(), "text");
        assert_eq!(columns.find_by("mail"), None);
        let id = columns.find("id").expect("id is a column");
        assert_eq!(id.get_type(), "bigint");
        assert!(!id.is_primary());
    }

    #[test]
    fn find_by_name_then_alias() {
        let columns = ColumnSet::new()
            .with(Column::new("first").alias("second"))
            .with(Column::new("second").alias("third"));
        assert_eq!(columns.find_by("second").map(Column::name), Some("second"));
        assert_eq!(columns.find_by("third").map(Column::name), Some("second"));
        assert_eq!(columns.find_by("first").map(Column::name), Some("first"));
        assert_eq!(columns.find_by("fourth"), None);
        assert_eq!(columns.find("third"), None);
    }

    #[test]
    fn projections_follow_insertion_order() {
        let columns = columns();
        assert_eq!(columns.names(), ["id", "email", "name"]);
        assert_eq!(
            columns.aliased_names(),
            ["id AS id", "email AS mail", "name AS name"]
        );
        let empty = ColumnSet::new();
        assert!(empty.names().is_empty());
        assert!(empty.aliased_names().is_empty());
    }

    #[test]
    fn primary_column() {
        let columns = columns();
        assert_eq!(columns.primary().map(Column::name), Some("id"));
        let columns = ColumnSet::new()
            .with(Column::new("a"))
            .with(Column::new("b").primary(true))
            .with(Column::new("c").primary(true));
        assert_eq!(columns.primary().map(Column::name), Some("b"));
        let columns = ColumnSet::new().with(Column::new("a"));
        assert_eq!(columns.primary(), None);
    }

    #[test]
    fn reset_values() {
        let mut columns = ColumnSet::new()
            .with(Column::new("a").value(1))
            .with(Column::new("b").value("x"));
        assert_eq!(columns.find("a").map(Column::get_value), Some(&Value::Int32(Some(1))));
        columns.find_by_mut("b").expect("b exists").set_value(2i64);
        assert_eq!(columns.find("b").map(Column::get_value), Some(&Value::Int64(Some(2))));
        columns.reset_values();
        assert!(columns.iter().all(|v| v.get_value().is_null()));
    }

    #[test]
    fn collect_keeps_first_position() {
        let columns: ColumnSet = [
            Column::new("a"),
            Column::new("b"),
            Column::new("a").column_type("int"),
        ]
        .into_iter()
        .collect();
        assert_eq!(columns.names(), ["a", "b"]);
        assert_eq!(columns.find("a").map(Column::get_type), Some("int"));
    }
}
