//! Schema objects shared across tests

use oradiff::catalog::index::{Index, IndexColumn};
use oradiff::catalog::sequence::Sequence;
use oradiff::catalog::source::Source;
use oradiff::catalog::table::{Column, Table};
use oradiff::catalog::view::View;

pub fn varchar(name: &str, id: u32, length: u32) -> Column {
    Column {
        length,
        ..Column::new(name, id, "VARCHAR2")
    }
}

pub fn number(name: &str, id: u32, precision: u32) -> Column {
    Column {
        precision,
        ..Column::new(name, id, "NUMBER")
    }
}

pub fn table(name: &str, columns: Vec<Column>) -> Table {
    Table {
        columns,
        ..Table::new("APP", name)
    }
}

pub fn index(name: &str, table_name: &str, columns: &[&str]) -> Index {
    Index {
        columns: columns
            .iter()
            .enumerate()
            .map(|(i, c)| IndexColumn::new(*c, i as u32 + 1))
            .collect(),
        ..Index::new("APP", name, table_name)
    }
}

pub fn sequence(name: &str, cache_size: u32) -> Sequence {
    Sequence {
        name: name.to_string(),
        min_value: "1".to_string(),
        max_value: "999999999".to_string(),
        increment_by: "1".to_string(),
        cycle: false,
        order: false,
        cache_size,
        last_number: "1".to_string(),
    }
}

pub fn procedure(name: &str, lines: &[&str]) -> Source {
    Source {
        name: name.to_string(),
        body: lines.iter().map(|l| format!("{}\n", l)).collect(),
    }
}

pub fn view(name: &str, columns: &[&str], source: &str) -> View {
    View {
        name: name.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        source: source.to_string(),
    }
}
