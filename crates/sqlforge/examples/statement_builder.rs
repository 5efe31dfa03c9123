//! Statement building across dialects.
//!
//! Run with: cargo run --example statement_builder -p sqlforge

use sqlforge::{
    BindMode, Condition, OrderBy, OrmError, Postgres, Range, SqlServer, Sqlite, col, delete,
    insert, select, update,
};

fn main() -> Result<(), OrmError> {
    // ============================================
    // Example 1: a filtered, ordered select
    // ============================================
    println!("=== Select ===");

    let adults = select("People")
        .columns(["Id", "Name"])
        .filter(Condition::gt("Age", 18_i64).and(Condition::lt("Age", 65_i64)))
        .order_by(OrderBy::asc("Id"));

    let sql = adults.to_sql_statement(&SqlServer)?;
    print!("{}", sql.text());
    for param in sql.params() {
        println!("  {} = {:?}", param.name(), param.value());
    }

    // The same builder renders for any dialect.
    print!("{}", adults.to_sql_statement(&Postgres)?.text());

    // ============================================
    // Example 2: paging
    // ============================================
    println!("\n=== Paging ===");

    let page = adults.clone().range(Range::new(11, 20)?);
    // SqlServer pages with ROW_NUMBER windowing, Sqlite with Limit/Offset.
    print!("{}", page.to_sql_statement(&SqlServer)?.text());
    print!("{}", page.to_sql_statement(&Sqlite)?.text());

    // ============================================
    // Example 3: inline bind mode
    // ============================================
    println!("\n=== Inline mode ===");

    let sql = adults.to_sql_statement_with(&SqlServer, BindMode::Inline)?;
    print!("{}", sql.text());
    assert!(sql.params().is_empty());

    // ============================================
    // Example 4: insert, update, delete
    // ============================================
    println!("\n=== Write statements ===");

    print!(
        "{}",
        insert("People")
            .value("Name", "Tom")
            .value("Age", 33_i64)
            .to_sql_statement(&SqlServer)?
            .text()
    );
    print!(
        "{}",
        update("People")
            .set("Name", "Jerry")
            .filter(Condition::eq("Id", 1_i64))
            .to_sql_statement(&SqlServer)?
            .text()
    );
    print!(
        "{}",
        delete("People")
            .filter(Condition::le("Age", col("MinAge")))
            .to_sql_statement(&SqlServer)?
            .text()
    );

    Ok(())
}
