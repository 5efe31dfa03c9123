//! End-to-end statement texts across dialects.

use sqlforge::{
    BindMode, Condition, OrderBy, Postgres, Range, SqlServer, Sqlite, Value, col, delete, insert,
    select, update,
};

#[test]
fn statements_end_with_semicolon_newline() {
    let dialect = SqlServer;
    let texts = [
        select("People").to_sql_statement(&dialect).unwrap(),
        insert("People")
            .value("Name", "Tom")
            .to_sql_statement(&dialect)
            .unwrap(),
        update("People")
            .set("Name", "Tom")
            .to_sql_statement(&dialect)
            .unwrap(),
        delete("People").to_sql_statement(&dialect).unwrap(),
    ];
    for sql in texts {
        assert!(sql.text().ends_with(";\n"), "got: {:?}", sql.text());
    }
}

#[test]
fn parsed_and_explicit_order_by_render_identically_per_dialect() {
    fn render(order: OrderBy, dialect: &dyn sqlforge::Dialect) -> String {
        select("People")
            .columns(["Id", "Name"])
            .order_by(order)
            .to_sql_statement(dialect)
            .unwrap()
            .text()
            .to_string()
    }

    for dialect in [&SqlServer as &dyn sqlforge::Dialect, &Sqlite, &Postgres] {
        let parsed = render(OrderBy::parse("Id desc, Name").unwrap(), dialect);
        let explicit = render(OrderBy::desc("Id").then_asc("Name"), dialect);
        assert_eq!(parsed, explicit);
    }
}

#[test]
fn order_by_parse_null_object_omits_clause() {
    assert_eq!(OrderBy::parse(""), None);

    let sql = select("People")
        .columns(["Id"])
        .order_by(OrderBy::parse("   "))
        .to_sql_statement(&SqlServer)
        .unwrap();
    assert_eq!(sql.text(), "Select [Id] From [People];\n");
}

#[test]
fn second_page_on_windowing_dialect() {
    let sql = select("People")
        .columns(["Id", "Name"])
        .filter(Condition::gt("Age", 18_i64))
        .order_by(OrderBy::asc("Id"))
        .range(Range::new(3, 5).unwrap())
        .to_sql_statement(&SqlServer)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Select [Id],[Name] From (Select [Id],[Name], ROW_NUMBER() Over (Order By [Id] ASC) \
         As __rownumber__ From [People] Where [Age] > @Age_0) As T \
         Where T.__rownumber__ >= 3 And T.__rownumber__ <= 5;\n"
    );
    assert_eq!(sql.params().len(), 1);
}

#[test]
fn second_page_on_limit_offset_dialects() {
    let sqlite = select("People")
        .columns(["Id", "Name"])
        .order_by(OrderBy::asc("Id"))
        .range(Range::new(3, 5).unwrap())
        .to_sql_statement(&Sqlite)
        .unwrap();
    assert_eq!(
        sqlite.text(),
        "Select [Id],[Name] From [People] Order By [Id] ASC Limit 3 Offset 2;\n"
    );

    let postgres = select("People")
        .columns(["Id", "Name"])
        .order_by(OrderBy::asc("Id"))
        .range(Range::new(3, 5).unwrap())
        .to_sql_statement(&Postgres)
        .unwrap();
    assert_eq!(
        postgres.text(),
        "Select \"Id\",\"Name\" From \"People\" Order By \"Id\" ASC Limit 3 Offset 2;\n"
    );
}

#[test]
fn where_tree_parameter_counts_per_mode() {
    let condition = Condition::gt("Age", 18_i64)
        .and(Condition::lt("Age", 23_i64))
        .or(Condition::eq("Name", "Tom"));

    let parameterized = select("People")
        .filter(condition.clone())
        .to_sql_statement(&SqlServer)
        .unwrap();
    assert_eq!(parameterized.params().len(), 3);

    let inline = select("People")
        .filter(condition)
        .to_sql_statement_with(&SqlServer, BindMode::Inline)
        .unwrap();
    assert_eq!(inline.params().len(), 0);
    assert_eq!(
        inline.text(),
        "Select * From [People] Where (([Age] > 18) And ([Age] < 23)) Or ([Name] = 'Tom');\n"
    );
}

#[test]
fn column_comparison_binds_nothing_in_either_mode() {
    for mode in [BindMode::Parameterized, BindMode::Inline] {
        let sql = select("People")
            .filter(Condition::gt("Age", col("Count")))
            .to_sql_statement_with(&SqlServer, mode)
            .unwrap();
        assert_eq!(sql.text(), "Select * From [People] Where [Age] > [Count];\n");
        assert!(sql.params().is_empty());
    }
}

#[test]
fn parameter_names_are_stable_and_positional() {
    let sql = select("People")
        .filter(Condition::gt("Age", 18_i64).and(Condition::lt("Age", 23_i64)))
        .to_sql_statement(&SqlServer)
        .unwrap();

    let p0 = sql.params().get(0).unwrap();
    let p1 = sql.params().get(1).unwrap();
    assert_eq!(p0.name(), "@Age_0");
    assert_eq!(p0.value(), &Value::Int(18));
    assert_eq!(p1.name(), "@Age_1");
    assert_eq!(p1.value(), &Value::Int(23));
}

#[test]
fn condition_reuse_across_statements_and_dialects() {
    let condition = Condition::eq("Name", "Tom");

    let a = select("People")
        .filter(condition.clone())
        .to_sql_statement(&SqlServer)
        .unwrap();
    assert_eq!(a.text(), "Select * From [People] Where [Name] = @Name_0;\n");

    let b = delete("People")
        .filter(condition.clone())
        .to_sql_statement(&Postgres)
        .unwrap();
    assert_eq!(b.text(), "Delete From \"People\" Where \"Name\" = :Name_0;\n");
}

#[test]
fn inline_literals_are_escaped() {
    let sql = insert("People")
        .value("Name", "O'Brien")
        .to_sql_statement_with(&SqlServer, BindMode::Inline)
        .unwrap();
    assert_eq!(
        sql.text(),
        "Insert Into [People] ([Name]) Values ('O''Brien');\n"
    );
}
