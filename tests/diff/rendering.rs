//! DDL produced for whole objects as seen through the change stream

use anyhow::Result;
use oradiff::catalog::grant::Grant;
use oradiff::catalog::job::Job;
use oradiff::catalog::synonym::{PublicSynonym, Synonym};
use oradiff::catalog::table::Column;
use oradiff::catalog::triggers::Trigger;
use oradiff::catalog::{Schema, SchemaBuilder};
use oradiff::diff::context::{DiffContext, DiffOptions};
use oradiff::diff::manager::changes;
use oradiff::diff::operations::{ObjectKind, Operation};
use oradiff::substitution::{Substitutions, TABLESPACES, USERS_ROLES};

use crate::helpers::fixtures::*;

fn script(ctx: &DiffContext, initial: &Schema, target: &Schema) -> Result<String> {
    let mut sql = String::new();
    for change in changes(ctx, initial, target) {
        sql.push_str(&change.to_sql(ctx)?);
    }
    Ok(sql)
}

#[test]
fn test_create_table_with_tablespace_and_grants() -> Result<()> {
    let ctx = DiffContext::new(DiffOptions {
        with_tablespace: true,
        ignore_grant_changes: false,
        ..DiffOptions::default()
    })
    .with_substitutions(
        Substitutions::in_memory()
            .with_mapping(TABLESPACES, "DEV_DATA", "PROD_DATA")
            .with_mapping(USERS_ROLES, "DEV_READER", "PROD_READER"),
    );

    let mut orders = table("ORDERS", vec![number("ID", 1, 10)]);
    orders.tablespace = "DEV_DATA".to_string();
    orders.grants.push(Grant {
        select: true,
        ..Grant::new("DEV_READER")
    });
    let target = SchemaBuilder::new().table(orders).build()?;

    assert_eq!(
        script(&ctx, &Schema::empty(), &target)?,
        concat!(
            "create table \"ORDERS\" (\n  \"ID\" NUMBER(10)\n)\ntablespace PROD_DATA;\n",
            "GRANT SELECT ON ORDERS to PROD_READER;\n",
        )
    );
    Ok(())
}

#[test]
fn test_grants_left_out_by_default() -> Result<()> {
    let ctx = DiffContext::default();
    let mut orders = table("ORDERS", vec![number("ID", 1, 10)]);
    orders.grants.push(Grant {
        select: true,
        ..Grant::new("READER")
    });
    let target = SchemaBuilder::new().table(orders).build()?;

    assert!(!script(&ctx, &Schema::empty(), &target)?.contains("GRANT"));
    Ok(())
}

#[test]
fn test_unknown_type_renders_placeholder() -> Result<()> {
    let ctx = DiffContext::default();
    let target = SchemaBuilder::new()
        .table(table("DOCS", vec![Column::new("BODY", 1, "XMLTYPE")]))
        .build()?;

    assert_eq!(
        script(&ctx, &Schema::empty(), &target)?,
        "create table \"DOCS\" (\n  \"BODY\" UNKNOWN\n);\n"
    );
    Ok(())
}

#[test]
fn test_public_synonyms_created_and_dropped_with_table() -> Result<()> {
    let ctx = DiffContext::default();
    let mut orders = table("ORDERS", vec![number("ID", 1, 10)]);
    orders.public_synonyms.push(PublicSynonym {
        name: "ORDERS".to_string(),
        table_owner: "APP".to_string(),
        table_name: "ORDERS".to_string(),
    });
    let schema = SchemaBuilder::new().table(orders).build()?;

    let created = script(&ctx, &Schema::empty(), &schema)?;
    assert!(created.ends_with("create public synonym ORDERS for ORDERS;\n"));

    let dropped = script(&ctx, &schema, &Schema::empty())?;
    assert_eq!(dropped, "drop table ORDERS;\ndrop public synonym ORDERS;\n");
    Ok(())
}

#[test]
fn test_changed_index_is_recreated_on_old_table_name() -> Result<()> {
    let ctx = DiffContext::default();
    let mut old = table("ORDERS", vec![number("ID", 1, 10), number("CUSTOMER_ID", 2, 10)]);
    old.indexes.push(index("ORDERS_IX", "ORDERS", &["ID"]));
    let mut new = old.clone();
    new.indexes = vec![index("ORDERS_IX", "ORDERS", &["CUSTOMER_ID", "ID"])];

    let initial = SchemaBuilder::new().table(old).build()?;
    let target = SchemaBuilder::new().table(new).build()?;

    assert_eq!(
        script(&ctx, &initial, &target)?,
        "drop index ORDERS_IX;\ncreate index ORDERS_IX on ORDERS\n(CUSTOMER_ID, ID);\n"
    );
    Ok(())
}

#[test]
fn test_trigger_replaced_with_sanitized_header() -> Result<()> {
    let ctx = DiffContext::default();
    let trigger = |body: &str| Trigger {
        name: "TRG_ORDERS_BI".to_string(),
        trigger_type: "BEFORE EACH ROW".to_string(),
        event: "INSERT".to_string(),
        table_name: "ORDERS".to_string(),
        when_clause: None,
        status: "ENABLED".to_string(),
        description: "\"APP\".\"TRG_ORDERS_BI\" BEFORE INSERT ON \"APP\".\"ORDERS\"".to_string(),
        body: body.to_string(),
    };
    let initial = SchemaBuilder::new()
        .trigger(trigger("BEGIN\n  NULL;\nEND;"))
        .build()?;
    let target = SchemaBuilder::new()
        .trigger(trigger("BEGIN\n  :new.id := 1;\nEND;"))
        .build()?;

    assert_eq!(
        script(&ctx, &initial, &target)?,
        "CREATE OR REPLACE TRIGGER TRG_ORDERS_BI BEFORE INSERT ON ORDERS\nBEGIN\n  :new.id := 1;\nEND;\n/\n"
    );
    Ok(())
}

#[test]
fn test_broken_flag_alone_is_no_change() -> Result<()> {
    let ctx = DiffContext::default();
    let job = |broken| Job {
        name: "42".to_string(),
        what: "pkg_stats.refresh;".to_string(),
        next_date: "01-01-2024 02:00:00".to_string(),
        interval: "sysdate + 1".to_string(),
        broken,
    };
    let initial = SchemaBuilder::new().job(job(false)).build()?;
    let target = SchemaBuilder::new().job(job(true)).build()?;

    assert!(changes(&ctx, &initial, &target).is_empty());
    let removed = script(&ctx, &initial, &Schema::empty())?;
    assert!(removed.contains("sys.dbms_job.remove(42);"));
    Ok(())
}

#[test]
fn test_job_schedule_change_is_update() -> Result<()> {
    let ctx = DiffContext::default();
    let job = |interval: &str| Job {
        name: "42".to_string(),
        what: "pkg_stats.refresh;".to_string(),
        next_date: "01-01-2024 02:00:00".to_string(),
        interval: interval.to_string(),
        broken: false,
    };
    let initial = SchemaBuilder::new().job(job("sysdate + 1")).build()?;
    let target = SchemaBuilder::new().job(job("sysdate + 7")).build()?;

    let stream = changes(&ctx, &initial, &target);
    assert_eq!(stream.len(), 1);
    assert_eq!(stream[0].kind, ObjectKind::Job);
    assert_eq!(stream[0].operation, Operation::Update);
    Ok(())
}

#[test]
fn test_synonym_target_change_is_update() -> Result<()> {
    let ctx = DiffContext::default();
    let synonym = |table_name: &str| Synonym {
        owner: "REPORTING".to_string(),
        name: "ORDERS".to_string(),
        table_owner: "APP".to_string(),
        table_name: table_name.to_string(),
    };
    let initial = SchemaBuilder::new().synonym(synonym("ORDERS")).build()?;
    let target = SchemaBuilder::new().synonym(synonym("ORDERS_V2")).build()?;

    let stream = changes(&ctx, &initial, &target);
    assert_eq!(stream.len(), 1);
    assert_eq!(stream[0].kind, ObjectKind::Synonym);
    assert_eq!(stream[0].operation, Operation::Update);
    assert!(stream[0].to_sql(&ctx)?.contains("APP.ORDERS_V2"));
    Ok(())
}
