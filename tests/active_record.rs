#[cfg(test)]
mod tests {
    use serde_json::json;
    use tabula::{ActiveRecord, AttributeError, Entity, Record, Value};
    use tabula_tests::{Articles, Users, init_logs, row};

    #[test]
    fn hydrate_round_trip() {
        init_logs();
        let users = Users::new();
        let source = row(
            ["id", "email"],
            [Value::Int64(Some(7)), Value::Varchar(Some("seven@example.com".into()))],
        );
        let record = users.hydrate_record(&source);
        for (label, value) in source.iter() {
            assert_eq!(&record.get(label).unwrap(), value);
        }
    }

    #[test]
    fn hydrate_drops_unknown_labels() {
        let users = Users::new();
        let mut record = users.active_record();
        record.hydrate(&row(
            ["id", "nickname"],
            [1.into(), "neo".into()],
        ));
        assert_eq!(record.attributes().len(), 1);
        assert!(record.is_declared("id"));
        assert!(!record.is_declared("nickname"));
        let error = record.get("nickname").unwrap_err();
        assert_eq!(
            error.downcast_ref::<AttributeError>(),
            Some(&AttributeError::NotFound {
                attribute: "nickname".into(),
                table: "tabula_tests::users::users".into(),
            })
        );
    }

    #[test]
    fn hydrate_matches_aliases() {
        let articles = Articles::new();
        let record = articles.hydrate_record(&row(
            ["id", "headline"],
            [1.into(), "Breaking".into()],
        ));
        assert!(record.is_declared("title"));
        assert!(!record.is_declared("headline"));
        assert_eq!(record.get("title").unwrap(), Value::Varchar(Some("Breaking".into())));
    }

    #[test]
    fn hydrate_keeps_declared_fields() {
        let articles = Articles::new();
        let record = articles.hydrate_record(&row(
            ["slug", "id"],
            ["from-row".into(), 9.into()],
        ));
        assert_eq!(record.get("slug").unwrap(), Value::Varchar(None));
        assert_eq!(record.get("id").unwrap(), Value::Int32(Some(9)));
    }

    #[test]
    fn get_falls_back_to_schema_columns() {
        let mut users = Users::new();
        users.set("email", "column@example.com").unwrap();
        let record = users.active_record();
        assert!(record.attributes().is_empty());
        assert_eq!(
            record.get("email").unwrap(),
            Value::Varchar(Some("column@example.com".into()))
        );
        assert_eq!(record.get("id").unwrap(), Value::Null);
    }

    #[test]
    fn declared_fields_win_over_columns() {
        let mut users = Users::new();
        users.set("id", 1).unwrap();
        let mut record = users.active_record();
        record.set("id", 2);
        assert_eq!(record.get_as::<i32>("id").unwrap(), 2);
        assert_eq!(users.schema().value("id"), Some(&Value::Int32(Some(1))));
    }

    #[test]
    fn set_creates_fields() {
        let users = Users::new();
        let mut record = users.active_record();
        record.set("anything", true).set("other", 1.5);
        assert_eq!(record.get("anything").unwrap(), Value::Boolean(Some(true)));
        assert_eq!(record.get_as::<f64>("other").unwrap(), 1.5);
    }

    #[test]
    fn get_falls_back_to_content() {
        let articles = Articles::new();
        let record = articles.hydrate_record(&row(
            ["id", "body"],
            [
                1.into(),
                json!({"author": "Ada", "tags": ["rust", "sql"], "views": 10}).into(),
            ],
        ));
        assert_eq!(
            record.get("author").unwrap(),
            Value::Varchar(Some("Ada".into()))
        );
        assert_eq!(record.get_as::<i64>("views").unwrap(), 10);
        assert_eq!(
            record.get("tags").unwrap(),
            Value::Json(Some(json!(["rust", "sql"])))
        );
        assert!(record.get("missing").is_err());
    }

    #[test]
    fn record_without_content() {
        let articles = Articles::new();
        let record = articles.active_record();
        assert!(record.content().is_none());
        assert!(record.get("author").is_err());
    }

    #[test]
    fn call_declared_method() {
        let articles = Articles::new();
        let mut record = articles.hydrate_record(&row(
            ["id", "headline"],
            [1.into(), "Señor".into()],
        ));
        assert_eq!(
            record.call("title_length", &[]).unwrap(),
            Value::UInt64(Some(5))
        );
        assert!(record.call("title_length", &[1.into()]).is_err());
    }

    #[test]
    fn call_falls_back_to_content() {
        let articles = Articles::new();
        let mut record = articles.hydrate_record(&row(
            ["id", "body"],
            [1.into(), json!({"author": "Ada"}).into()],
        ));
        assert_eq!(
            record.call("author", &[]).unwrap(),
            Value::Varchar(Some("Ada".into()))
        );
        let error = record.call("publish", &[]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AttributeError>(),
            Some(AttributeError::MethodNotFound { method, .. }) if method == "publish"
        ));
    }

    #[test]
    fn generic_record_content() {
        let mut users = Users::new();
        users.schema_mut().hydrate(tabula::Column::new("settings").column_type("json"));
        users
            .set("settings", r#"{"theme": "dark", "sizes": [10, 12]}"#)
            .unwrap();
        let record = Record::new(users.schema()).with_content("settings");
        assert_eq!(
            record.get("theme").unwrap(),
            Value::Varchar(Some("dark".into()))
        );
        let mut record = Record::new(users.schema())
            .with_declared(["sizes"])
            .with_content("settings");
        assert_eq!(record.get("sizes").unwrap(), Value::Null);
        assert_eq!(record.call("sizes", &[]).unwrap(), Value::Json(Some(json!([10, 12]))));

        let record = Record::new(users.schema()).with_content("email");
        assert!(record.content().is_none());
    }

    #[test]
    fn null_declared_field_does_not_hide_content_column() {
        let mut users = Users::new();
        users.schema_mut().hydrate(tabula::Column::new("settings").column_type("json"));
        users.set("settings", json!({"theme": "light"})).unwrap();
        let record = Record::new(users.schema())
            .with_declared(["settings"])
            .with_content("settings");
        assert_eq!(record.get("settings").unwrap(), Value::Null);
        assert_eq!(
            record.get("theme").unwrap(),
            Value::Varchar(Some("light".into()))
        );
        let mut record = record;
        record.set("settings", json!({"theme": "dark"}));
        assert_eq!(
            record.get("theme").unwrap(),
            Value::Varchar(Some("dark".into()))
        );
    }

    #[test]
    fn article_content_from_schema_column() {
        let mut articles = Articles::new();
        articles.set("body", json!({"author": "Grace"})).unwrap();
        let mut record = articles.active_record();
        assert!(!record.is_declared("body"));
        assert_eq!(
            record.get("author").unwrap(),
            Value::Varchar(Some("Grace".into()))
        );
        assert_eq!(
            record.call("author", &[]).unwrap(),
            Value::Varchar(Some("Grace".into()))
        );
    }
}
