//! Table rendering for the list of available decorators.

use comfy_table::{Cell, ContentArrangement};

use crate::config::DecoratorKind;

pub trait DecoratorKindExt {
    /// Renders every known decorator. Decorators contained in `self` are
    /// marked as enabled.
    fn render_table(&self) -> String;
}

impl DecoratorKindExt for [DecoratorKind] {
    fn render_table(&self) -> String {
        let rows = DecoratorKind::ALL
            .iter()
            .map(|kind| {
                let position = self.iter().position(|enabled| enabled == kind);
                [
                    Cell::new(kind),
                    Cell::new(position.map_or_else(String::new, |index| (index + 1).to_string())),
                    Cell::new(kind.description()),
                ]
            })
            .collect::<Vec<_>>();

        comfy_table::Table::new()
            .load_preset(comfy_table::presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["NAME", "ORDER", "DESCRIPTION"])
            .add_rows(rows)
            .to_string()
    }
}
