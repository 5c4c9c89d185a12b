//! Behavioural properties of a schema comparison

use anyhow::Result;
use oradiff::catalog::{Schema, SchemaBuilder};
use oradiff::diff::context::{DiffContext, DiffOptions};
use oradiff::diff::diff_all;
use oradiff::diff::equivalence::Equivalences;
use oradiff::diff::manager::changes;
use oradiff::diff::operations::{ObjectKind, Operation};
use rstest::rstest;

use crate::helpers::fixtures::*;

fn mixed_schema() -> Result<Schema> {
    let mut orders = table("ORDERS", vec![number("ID", 1, 10), varchar("NOTE", 2, 200)]);
    orders.indexes.push(index("ORDERS_PK", "ORDERS", &["ID"]));

    SchemaBuilder::new()
        .table(orders)
        .table(table("CUSTOMERS", vec![number("ID", 1, 10)]))
        .sequence(sequence("SEQ_ORDERS", 20))
        .procedure(procedure("PURGE", &["procedure purge is", "begin", "  null;", "end;"]))
        .view(view("V_ORDERS", &["ID"], "select id from orders"))
        .build()
}

#[rstest]
#[case::empty(Schema::empty())]
#[case::mixed(mixed_schema().unwrap())]
fn test_self_diff_has_no_changes(#[case] schema: Schema) {
    let ctx = DiffContext::default();
    assert!(changes(&ctx, &schema, &schema).is_empty());
}

#[rstest]
#[case::equivalence_group(&["ORDERS", "ORDERS_V2"], &["ORDERS", "ORDERS_V2"])]
#[case::case_only(&["orders", "ORDERS"], &[])]
fn test_self_diff_with_matching_names(
    #[case] names: &[&str],
    #[case] group: &[&str],
) -> Result<()> {
    let ctx = DiffContext::default().with_equivalences(Equivalences::from_groups([group.to_vec()]));
    let schema = names
        .iter()
        .fold(SchemaBuilder::new(), |builder, name| {
            builder.table(table(name, vec![number("ID", 1, 10)]))
        })
        .build()?;

    assert!(changes(&ctx, &schema, &schema).is_empty());
    Ok(())
}

#[test]
fn test_new_and_removed_are_symmetric() -> Result<()> {
    let ctx = DiffContext::default();
    let a = mixed_schema()?;
    let b = SchemaBuilder::new()
        .table(table("CUSTOMERS", vec![number("ID", 1, 10)]))
        .table(table("INVOICES", vec![number("ID", 1, 10)]))
        .sequence(sequence("SEQ_INVOICES", 20))
        .build()?;

    let forward = diff_all(&ctx, &a, &b);
    let backward = diff_all(&ctx, &b, &a);

    assert_eq!(forward.tables.new, backward.tables.removed);
    assert_eq!(forward.tables.removed, backward.tables.new);
    assert_eq!(forward.sequences.new, backward.sequences.removed);
    assert_eq!(forward.procedures.removed, backward.procedures.new);
    assert_eq!(forward.views.removed, backward.views.new);
    Ok(())
}

#[rstest]
#[case::blank_lines(&["procedure purge is", "", "begin", "  null;", "", "end;"])]
#[case::indentation(&["  procedure purge is", "begin", "      null;   ", "end;"])]
#[case::case(&["PROCEDURE PURGE IS", "BEGIN", "  NULL;", "END;"])]
#[case::comment_lines(&["procedure purge is", "-- housekeeping", "begin", "  null;", "end;"])]
fn test_cosmetic_source_changes_are_ignored(#[case] lines: &[&str]) -> Result<()> {
    let ctx = DiffContext::default();
    let old = SchemaBuilder::new()
        .procedure(procedure("PURGE", &["procedure purge is", "begin", "  null;", "end;"]))
        .build()?;
    let new = SchemaBuilder::new().procedure(procedure("PURGE", lines)).build()?;

    assert!(changes(&ctx, &old, &new).is_empty());
    Ok(())
}

#[test]
fn test_comment_lines_count_when_not_ignored() -> Result<()> {
    let ctx = DiffContext::new(DiffOptions {
        ignore_source_comments: false,
        ..DiffOptions::default()
    });
    let old = SchemaBuilder::new()
        .procedure(procedure("PURGE", &["procedure purge is", "begin null; end;"]))
        .build()?;
    let new = SchemaBuilder::new()
        .procedure(procedure(
            "PURGE",
            &["procedure purge is", "-- housekeeping", "begin null; end;"],
        ))
        .build()?;

    let stream = changes(&ctx, &old, &new);
    assert_eq!(stream.len(), 1);
    assert_eq!(stream[0].operation, Operation::Update);
    assert_eq!(stream[0].kind, ObjectKind::Procedure);
    Ok(())
}

#[test]
fn test_column_alter_is_minimal() -> Result<()> {
    let ctx = DiffContext::default();
    let old = SchemaBuilder::new()
        .table(table(
            "T",
            vec![varchar("A", 1, 10), varchar("B", 2, 10), varchar("C", 3, 10)],
        ))
        .build()?;
    let new = SchemaBuilder::new()
        .table(table(
            "T",
            vec![varchar("B", 1, 20), varchar("C", 2, 10), varchar("D", 3, 10)],
        ))
        .build()?;

    let stream = changes(&ctx, &old, &new);
    assert_eq!(stream.len(), 1);
    let sql = stream[0].to_sql(&ctx)?;
    assert_eq!(
        sql,
        concat!(
            "alter table \"T\" add (\n  \"D\" VARCHAR2(10)\n);\n",
            "alter table \"T\" drop column \"A\";\n",
            "alter table \"T\" modify (\n  \"B\" VARCHAR2(20)\n);\n",
        )
    );
    assert!(!sql.contains("\"C\""));
    Ok(())
}

#[test]
fn test_equivalence_rename_is_single_update() -> Result<()> {
    let ctx = DiffContext::default()
        .with_equivalences(Equivalences::from_groups([["OLD_T", "NEW_T"]]));
    let old = SchemaBuilder::new()
        .table(table("OLD_T", vec![number("ID", 1, 10)]))
        .build()?;
    let new = SchemaBuilder::new()
        .table(table("NEW_T", vec![number("ID", 1, 10)]))
        .build()?;

    let stream = changes(&ctx, &old, &new);
    assert_eq!(stream.len(), 1);
    assert_eq!(stream[0].operation, Operation::Update);
    assert_eq!(stream[0].name, "OLD_T");
    assert_eq!(stream[0].to_sql(&ctx)?, "ALTER TABLE OLD_T RENAME TO NEW_T;");
    Ok(())
}

#[test]
fn test_without_equivalence_rename_is_drop_and_create() -> Result<()> {
    let ctx = DiffContext::default();
    let old = SchemaBuilder::new()
        .table(table("OLD_T", vec![number("ID", 1, 10)]))
        .build()?;
    let new = SchemaBuilder::new()
        .table(table("NEW_T", vec![number("ID", 1, 10)]))
        .build()?;

    let operations: Vec<_> = changes(&ctx, &old, &new)
        .iter()
        .map(|c| (c.operation, c.name.clone()))
        .collect();
    assert_eq!(
        operations,
        vec![
            (Operation::Create, "NEW_T".to_string()),
            (Operation::Drop, "OLD_T".to_string())
        ]
    );
    Ok(())
}

#[test]
fn test_sequence_cache_only_change() -> Result<()> {
    let ctx = DiffContext::default();
    let old = SchemaBuilder::new().sequence(sequence("S", 20)).build()?;
    let mut changed = sequence("S", 50);
    changed.last_number = "4711".to_string();
    let new = SchemaBuilder::new().sequence(changed).build()?;

    let stream = changes(&ctx, &old, &new);
    assert_eq!(stream.len(), 1);
    assert_eq!(stream[0].to_sql(&ctx)?, "alter sequence S\ncache 50\n;\n");
    Ok(())
}

#[test]
fn test_sequence_last_number_alone_is_no_change() -> Result<()> {
    let ctx = DiffContext::default();
    let old = SchemaBuilder::new().sequence(sequence("S", 20)).build()?;
    let mut moved = sequence("S", 20);
    moved.last_number = "9000".to_string();
    let new = SchemaBuilder::new().sequence(moved).build()?;

    assert!(changes(&ctx, &old, &new).is_empty());
    Ok(())
}

#[test]
fn test_categories_follow_fixed_order() -> Result<()> {
    let ctx = DiffContext::default();
    let target = mixed_schema()?;

    let kinds: Vec<_> = changes(&ctx, &Schema::empty(), &target)
        .iter()
        .map(|c| c.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ObjectKind::Table,
            ObjectKind::Table,
            ObjectKind::Procedure,
            ObjectKind::Sequence,
            ObjectKind::View
        ]
    );
    Ok(())
}

#[rstest]
#[case::ignored(true, 0)]
#[case::reported(false, 1)]
fn test_column_comment_changes(#[case] ignore: bool, #[case] expected: usize) -> Result<()> {
    let ctx = DiffContext::new(DiffOptions {
        ignore_object_comments: ignore,
        ..DiffOptions::default()
    });
    let old = SchemaBuilder::new()
        .table(table("T", vec![varchar("A", 1, 10)]))
        .build()?;
    let mut commented = varchar("A", 1, 10);
    commented.comment = Some("Customer name".to_string());
    let new = SchemaBuilder::new()
        .table(table("T", vec![commented]))
        .build()?;

    let stream = changes(&ctx, &old, &new);
    assert_eq!(stream.len(), expected);
    if let Some(change) = stream.first() {
        assert_eq!(
            change.to_sql(&ctx)?,
            "comment on column T.A\n  is 'Customer name';\n"
        );
    }
    Ok(())
}
