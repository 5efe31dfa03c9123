use super::*;
use crate::clause::{GroupBy, OrderBy, Range};
use crate::condition::Condition;
use crate::dialect::{Postgres, SqlServer, Sqlite};
use crate::param::BindMode;
use crate::value::Value;

#[test]
fn insert_renders_values_clause() {
    let sql = insert("People")
        .value("Name", "Tom")
        .value("Age", 18_i64)
        .to_sql_statement(&SqlServer)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Insert Into [People] ([Name],[Age]) Values (@Name_0,@Age_1);\n"
    );
    assert_eq!(sql.params().len(), 2);
}

#[test]
fn insert_with_no_values_still_renders() {
    let sql = insert("People").to_sql_statement(&SqlServer).unwrap();
    assert_eq!(sql.text(), "Insert Into [People];\n");
    assert!(sql.params().is_empty());
}

#[test]
fn update_renders_set_then_where() {
    let sql = update("People")
        .set("Name", "xyz")
        .filter(Condition::eq("Id", 2_i64))
        .to_sql_statement(&SqlServer)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Update [People] Set [Name]=@Name_0 Where [Id] = @Id_1;\n"
    );
    assert_eq!(sql.params().get(0).unwrap().name(), "@Name_0");
    assert_eq!(sql.params().get(1).unwrap().name(), "@Id_1");
}

#[test]
fn update_with_empty_where_omits_keyword() {
    let sql = update("People")
        .set("Name", "x")
        .to_sql_statement(&SqlServer)
        .unwrap();
    assert_eq!(sql.text(), "Update [People] Set [Name]=@Name_0;\n");
}

#[test]
fn delete_renders_where() {
    let sql = delete("People")
        .filter(Condition::eq("Id", 1_i64))
        .to_sql_statement(&SqlServer)
        .unwrap();
    assert_eq!(sql.text(), "Delete From [People] Where [Id] = @Id_0;\n");
}

#[test]
fn delete_with_empty_condition_deletes_all() {
    let sql = delete("People").to_sql_statement(&SqlServer).unwrap();
    assert_eq!(sql.text(), "Delete From [People];\n");
    assert!(sql.params().is_empty());
}

#[test]
fn select_defaults_to_star() {
    let sql = select("People").to_sql_statement(&SqlServer).unwrap();
    assert_eq!(sql.text(), "Select * From [People];\n");
}

#[test]
fn select_renders_columns_where_and_order() {
    let sql = select("People")
        .columns(["Id", "Name"])
        .filter(Condition::eq("Name", "Tom"))
        .order_by(OrderBy::asc("Id"))
        .to_sql_statement(&SqlServer)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Select [Id],[Name] From [People] Where [Name] = @Name_0 Order By [Id] ASC;\n"
    );
    assert_eq!(sql.params().len(), 1);
}

#[test]
fn select_empty_condition_omits_where() {
    let sql = select("People")
        .columns(["Id"])
        .filter(Condition::empty())
        .to_sql_statement(&SqlServer)
        .unwrap();
    assert_eq!(sql.text(), "Select [Id] From [People];\n");
}

#[test]
fn select_group_by_renders_before_order_by() {
    let sql = select("Books")
        .columns(["Category_Id"])
        .group_by(GroupBy::of(["Category_Id"]))
        .order_by(OrderBy::desc("Category_Id"))
        .to_sql_statement(&SqlServer)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Select [Category_Id] From [Books] Group By [Category_Id] Order By [Category_Id] DESC;\n"
    );
}

#[test]
fn select_range_on_windowing_dialect() {
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
    assert_eq!(sql.params().get(0).unwrap().name(), "@Age_0");
}

#[test]
fn select_range_on_limit_offset_dialect() {
    let sql = select("People")
        .columns(["Id", "Name"])
        .order_by(OrderBy::asc("Id"))
        .range(Range::new(3, 5).unwrap())
        .to_sql_statement(&Sqlite)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Select [Id],[Name] From [People] Order By [Id] ASC Limit 3 Offset 2;\n"
    );
}

#[test]
fn select_range_with_group_by_groups_inside() {
    let sql = select("Books")
        .columns(["Category_Id"])
        .group_by(GroupBy::of(["Category_Id"]))
        .order_by(OrderBy::asc("Category_Id"))
        .range(Range::new(1, 2).unwrap())
        .to_sql_statement(&SqlServer)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Select [Category_Id] From (Select [Category_Id], ROW_NUMBER() Over \
         (Order By [Category_Id] ASC) As __rownumber__ From [Books] \
         Group By [Category_Id]) As T \
         Where T.__rownumber__ >= 1 And T.__rownumber__ <= 2;\n"
    );
}

#[test]
fn postgres_quoting_and_prefix() {
    let sql = select("People")
        .columns(["Id", "Name"])
        .filter(Condition::eq("Name", "Tom"))
        .to_sql_statement(&Postgres)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Select \"Id\",\"Name\" From \"People\" Where \"Name\" = :Name_0;\n"
    );
}

#[test]
fn inline_mode_renders_literals_and_no_params() {
    let sql = update("People")
        .set("Name", "O'Brien")
        .filter(Condition::eq("Id", 2_i64))
        .to_sql_statement_with(&SqlServer, BindMode::Inline)
        .unwrap();

    assert_eq!(
        sql.text(),
        "Update [People] Set [Name]='O''Brien' Where [Id] = 2;\n"
    );
    assert!(sql.params().is_empty());
}

#[test]
fn same_builder_renders_both_modes() {
    // The mode is a render-time argument, not baked into the clause tree.
    let builder = select("People")
        .columns(["Id"])
        .filter(Condition::eq("Name", "Tom"));

    let parameterized = builder.to_sql_statement(&SqlServer).unwrap();
    assert_eq!(parameterized.params().len(), 1);
    assert_eq!(
        parameterized.text(),
        "Select [Id] From [People] Where [Name] = @Name_0;\n"
    );

    let inline = builder
        .to_sql_statement_with(&SqlServer, BindMode::Inline)
        .unwrap();
    assert!(inline.params().is_empty());
    assert_eq!(inline.text(), "Select [Id] From [People] Where [Name] = 'Tom';\n");
}

#[test]
fn parameter_values_survive_into_statement() {
    let sql = select("People")
        .filter(
            Condition::gt("Age", 18_i64).and(Condition::lt("Age", 23_i64)),
        )
        .to_sql_statement(&SqlServer)
        .unwrap();

    assert_eq!(sql.params().get(0).unwrap().value(), &Value::Int(18));
    assert_eq!(sql.params().get(1).unwrap().value(), &Value::Int(23));
}
