//! Route templates with `{id}` placeholders.

use grid_model::RowId;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Substitute every `{id}` placeholder with the percent-encoded row id.
/// Routes without a placeholder pass through unchanged.
pub fn substitute_id(template: &str, id: RowId) -> String {
    let encoded = utf8_percent_encode(&id.to_string(), NON_ALPHANUMERIC).to_string();
    template.replace("{id}", &encoded)
}

#[cfg(test)]
mod tests {
    use super::substitute_id;
    use grid_model::RowId;

    #[test]
    fn substitutes_all_placeholders() {
        assert_eq!(substitute_id("/items/{id}", RowId(7)), "/items/7");
        assert_eq!(
            substitute_id("/items/{id}/copies/{id}", RowId(7)),
            "/items/7/copies/7"
        );
        assert_eq!(substitute_id("/items/all", RowId(7)), "/items/all");
    }

    #[test]
    fn encodes_negative_ids() {
        assert_eq!(substitute_id("/items/{id}", RowId(-3)), "/items/%2D3");
    }
}
