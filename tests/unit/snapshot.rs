//! Snapshot files as the schema source and sink

use anyhow::Result;
use oradiff::catalog::constraint::{Constraint, ConstraintType};
use oradiff::catalog::grant::Grant;
use oradiff::catalog::index::IndexColumn;
use oradiff::catalog::job::Job;
use oradiff::catalog::source::Package;
use oradiff::catalog::synonym::{PublicSynonym, Synonym};
use oradiff::catalog::triggers::Trigger;
use oradiff::catalog::{Schema, SchemaBuilder};
use oradiff::snapshot;
use std::fs;
use tempfile::TempDir;

use crate::helpers::fixtures::*;

fn full_schema() -> Result<Schema> {
    let mut orders = table("ORDERS", vec![number("ID", 1, 10), varchar("NOTE", 2, 200)]);
    orders.tablespace = "USERS".to_string();
    orders.comment = Some("Customer orders".to_string());
    orders.columns[1].comment = Some("Free text".to_string());
    orders.columns[1].default_value = Some("'n/a'".to_string());
    orders.indexes.push(index("ORDERS_PK", "ORDERS", &["ID"]));
    orders.grants.push(Grant {
        select: true,
        update: true,
        ..Grant::new("REPORTING")
    });
    orders.constraints.push(Constraint {
        name: "ORDERS_PK".to_string(),
        constraint_type: ConstraintType::PrimaryKey,
        search_condition: None,
        ref_user_name: None,
        ref_constraint_name: None,
        delete_rule: None,
        status: "ENABLED".to_string(),
        deferrable: "NOT DEFERRABLE".to_string(),
        deferred: "IMMEDIATE".to_string(),
        validated: "VALIDATED".to_string(),
        generated: "USER NAME".to_string(),
        columns: vec![IndexColumn::new("ID", 1)],
    });
    orders.constraints.push(Constraint {
        name: "ORDERS_CUSTOMER_FK".to_string(),
        constraint_type: ConstraintType::ForeignKey,
        search_condition: None,
        ref_user_name: Some("CRM".to_string()),
        ref_constraint_name: Some("CUSTOMERS_PK".to_string()),
        delete_rule: Some("CASCADE".to_string()),
        status: "ENABLED".to_string(),
        deferrable: "DEFERRABLE".to_string(),
        deferred: "DEFERRED".to_string(),
        validated: "NOT VALIDATED".to_string(),
        generated: "USER NAME".to_string(),
        columns: vec![IndexColumn::new("NOTE", 1)],
    });
    orders.public_synonyms.push(PublicSynonym {
        name: "ORDERS".to_string(),
        table_owner: "APP".to_string(),
        table_name: "ORDERS".to_string(),
    });

    SchemaBuilder::new()
        .table(orders)
        .package(Package {
            name: "PKG_ORDERS".to_string(),
            declaration: vec!["package pkg_orders is\n".to_string(), "end;\n".to_string()],
            body: vec!["package body pkg_orders is\n".to_string(), "end;\n".to_string()],
        })
        .procedure(procedure("PURGE", &["procedure purge is", "begin null; end;"]))
        .function(procedure("NEXT_ID", &["function next_id return number is", "begin return 1; end;"]))
        .job(Job {
            name: "42".to_string(),
            what: "purge;".to_string(),
            next_date: "01-01-2024 02:00:00".to_string(),
            interval: "sysdate + 1".to_string(),
            broken: true,
        })
        .sequence(sequence("SEQ_ORDERS", 20))
        .synonym(Synonym {
            owner: "APP".to_string(),
            name: "CUSTOMERS".to_string(),
            table_owner: "CRM".to_string(),
            table_name: "CUSTOMERS".to_string(),
        })
        .trigger(Trigger {
            name: "TRG_ORDERS_BI".to_string(),
            trigger_type: "BEFORE EACH ROW".to_string(),
            event: "INSERT".to_string(),
            table_name: "ORDERS".to_string(),
            when_clause: Some("new.id is null".to_string()),
            status: "ENABLED".to_string(),
            description: "TRG_ORDERS_BI BEFORE INSERT ON ORDERS".to_string(),
            body: "BEGIN NULL; END;".to_string(),
        })
        .view(view("V_ORDERS", &["ID"], "select id from orders"))
        .build()
}

#[test]
fn test_round_trip_preserves_every_field() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("full.json");
    let schema = full_schema()?;

    snapshot::save(&schema, &path)?;
    let loaded = snapshot::load(&path)?;

    assert_eq!(loaded, schema);
    assert_eq!(loaded.object_count(), 9);
    assert_eq!(loaded.tables()["ORDERS"].constraints.len(), 2);

    let json = fs::read_to_string(&path)?;
    assert!(json.contains(r#""constraint_type": "P""#));
    assert!(json.contains(r#""constraint_type": "R""#));
    assert!(json.contains(r#""delete_rule": "CASCADE""#));
    Ok(())
}

#[test]
fn test_constraint_type_codes() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("constraints.json");
    fs::write(
        &path,
        r#"{
  "tables": [
    {
      "owner": "APP",
      "name": "ORDERS",
      "columns": [{ "name": "ID", "id": 1, "data_type": "NUMBER" }],
      "constraints": [
        { "name": "ORDERS_UK", "constraint_type": "U" },
        { "name": "ORDERS_ID_CK", "constraint_type": "C", "search_condition": "ID > 0" }
      ]
    }
  ]
}"#,
    )?;

    let schema = snapshot::load(&path)?;
    let constraints = &schema.tables()["ORDERS"].constraints;
    assert_eq!(constraints[0].constraint_type, ConstraintType::Unique);
    assert_eq!(constraints[1].constraint_type, ConstraintType::Check);
    assert_eq!(constraints[1].search_condition.as_deref(), Some("ID > 0"));
    assert_eq!(constraints[1].ref_constraint_name, None);
    Ok(())
}

#[test]
fn test_minimal_snapshot_uses_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("minimal.json");
    fs::write(
        &path,
        r#"{
  "tables": [
    {
      "owner": "APP",
      "name": "ORDERS",
      "columns": [{ "name": "ID", "id": 1, "data_type": "NUMBER" }]
    }
  ]
}"#,
    )?;

    let schema = snapshot::load(&path)?;
    let column = &schema.tables()["ORDERS"].columns[0];
    assert!(column.nullable);
    assert_eq!(column.default_value, None);
    assert!(schema.views().is_empty());
    Ok(())
}

#[test]
fn test_unknown_category_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("odd.json");
    fs::write(&path, r#"{"materialized_views": []}"#)?;

    assert!(snapshot::load(&path).is_err());
    Ok(())
}
