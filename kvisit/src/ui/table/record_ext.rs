//! Table rendering for visited records.

use comfy_table::{Cell, ContentArrangement};
use kvisit_visitor::Record;

/// Extension trait rendering a [`Record`] the way `kubectl get` renders a
/// resource.
pub trait RecordExt {
    /// Renders a header row followed by one row holding the record fields.
    fn render_table(&self) -> String;
}

impl RecordExt for Record {
    fn render_table(&self) -> String {
        comfy_table::Table::new()
            .load_preset(comfy_table::presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["NAMESPACE", "NAME", "AUXILIARY"])
            .add_row([
                Cell::new(&self.namespace),
                Cell::new(&self.name),
                Cell::new(&self.auxiliary),
            ])
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_contains_fields() {
        let record = Record {
            namespace: "JorgeLuis".to_string(),
            name: "Jorge Luis".to_string(),
            auxiliary: "remote".to_string(),
        };
        let table = record.render_table();

        assert!(table.lines().any(|line| line.contains("NAMESPACE") && line.contains("AUXILIARY")));
        assert!(table.lines().any(|line| {
            line.contains("JorgeLuis") && line.contains("Jorge Luis") && line.contains("remote")
        }));
    }
}
