//! Graphviz DOT output.

use std::fmt::Write;

use super::{ErColumn, ErSchema, ErTable};

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn column_row(column: &ErColumn) -> String {
    let name = escape_html(&column.name);
    let name = if column.primary_key {
        format!("<u>{name}</u>")
    } else {
        name
    };

    let mut flags = Vec::new();
    if column.primary_key {
        flags.push("PK");
    }
    if column.unique {
        flags.push("UQ");
    }
    if column.nullable {
        flags.push("NULL");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };

    let default = column
        .default
        .as_deref()
        .map(|value| format!(" = {}", escape_html(value)))
        .unwrap_or_default();

    format!(
        "<tr><td port=\"{port}\" align=\"left\">{name} <font color=\"grey40\">{ty}</font>{default}{flags}</td></tr>",
        port = escape_html(&column.name),
        ty = escape_html(&column.sql_type.to_lowercase()),
    )
}

fn table_node(out: &mut String, table: &ErTable) {
    let _ = writeln!(out, "    \"{}\" [label=<", table.name);
    let _ = writeln!(
        out,
        "        <table border=\"0\" cellborder=\"1\" cellspacing=\"0\" cellpadding=\"4\">"
    );
    let _ = writeln!(
        out,
        "        <tr><td bgcolor=\"lightgrey\"><b>{}</b></td></tr>",
        escape_html(&table.name)
    );
    for column in &table.columns {
        let _ = writeln!(out, "        {}", column_row(column));
    }
    let _ = writeln!(out, "        </table>>];");
}

/// Render the schema as a Graphviz digraph.
///
/// One node per table; each foreign key is an edge from the referencing
/// column to the referenced one, labelled with its ON DELETE action.
pub fn to_dot(schema: &ErSchema) -> String {
    let mut out = String::new();
    out.push_str("digraph er {\n");
    out.push_str("    graph [rankdir=LR, fontname=\"Helvetica\"];\n");
    out.push_str("    node [shape=plain, fontname=\"Helvetica\"];\n");
    out.push_str("    edge [arrowhead=none, arrowtail=crow, dir=both, fontsize=9];\n");

    for table in &schema.tables {
        out.push('\n');
        table_node(&mut out, table);
    }

    out.push('\n');
    for table in &schema.tables {
        for fk in &table.foreign_keys {
            let label = match fk.on_delete.as_str() {
                "" | "NO ACTION" => String::new(),
                action => format!(" [label=\"on delete {}\"]", action.to_lowercase()),
            };
            let _ = writeln!(
                out,
                "    \"{}\":\"{}\" -> \"{}\":\"{}\"{};",
                table.name, fk.column, fk.references_table, fk.references_column, label
            );
        }
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::ErForeignKey;

    fn column(name: &str, sql_type: &str) -> ErColumn {
        ErColumn {
            name: name.to_string(),
            sql_type: sql_type.to_string(),
            nullable: false,
            primary_key: false,
            unique: false,
            default: None,
        }
    }

    fn sample() -> ErSchema {
        ErSchema {
            tables: vec![
                ErTable {
                    name: "post".to_string(),
                    columns: vec![
                        ErColumn {
                            primary_key: true,
                            ..column("id", "INTEGER")
                        },
                        column("user_id", "INTEGER"),
                        ErColumn {
                            nullable: true,
                            ..column("caption", "TEXT")
                        },
                    ],
                    foreign_keys: vec![ErForeignKey {
                        column: "user_id".to_string(),
                        references_table: "user".to_string(),
                        references_column: "id".to_string(),
                        on_delete: "CASCADE".to_string(),
                    }],
                },
                ErTable {
                    name: "user".to_string(),
                    columns: vec![
                        ErColumn {
                            primary_key: true,
                            ..column("id", "INTEGER")
                        },
                        ErColumn {
                            unique: true,
                            ..column("email", "varchar(120)")
                        },
                    ],
                    foreign_keys: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_dot_has_node_per_table_and_edge_per_fk() {
        let dot = to_dot(&sample());

        assert!(dot.starts_with("digraph er {"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(dot.contains("\"post\" [label=<"));
        assert!(dot.contains("\"user\" [label=<"));
        assert!(dot.contains("\"post\":\"user_id\" -> \"user\":\"id\" [label=\"on delete cascade\"];"));
        assert_eq!(dot.matches("->").count(), 1);
    }

    #[test]
    fn test_dot_marks_column_flags() {
        let dot = to_dot(&sample());

        assert!(dot.contains("<u>id</u>"));
        assert!(dot.contains("email <font color=\"grey40\">varchar(120)</font> [UQ]"));
        assert!(dot.contains("caption <font color=\"grey40\">text</font> [NULL]"));
    }

    #[test]
    fn test_dot_shows_column_default() {
        let active = ErColumn {
            default: Some("'t'".to_string()),
            ..column("is_active", "boolean")
        };

        assert_eq!(
            column_row(&active),
            "<tr><td port=\"is_active\" align=\"left\">is_active <font color=\"grey40\">boolean</font> = 't'</td></tr>"
        );
        assert!(!column_row(&column("url", "TEXT")).contains(" = "));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
