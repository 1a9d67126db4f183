//! Fields command implementation
//!
//! Lists the exportable field catalog.

use crate::domain::FIELD_CATALOG;
use clap::Args;

/// Arguments for the fields command
#[derive(Args, Debug)]
pub struct FieldsArgs {}

impl FieldsArgs {
    /// Execute the fields command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        println!("{}", Self::render_catalog());
        Ok(0)
    }

    fn render_catalog() -> String {
        let width = FIELD_CATALOG
            .iter()
            .map(|f| f.label.len())
            .max()
            .unwrap_or(0);

        let mut out = format!("{:<width$}  Key\n", "Label");
        for field in FIELD_CATALOG.iter() {
            out.push_str(&format!("{:<width$}  {}\n", field.label, field.key));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_field() {
        let rendered = FieldsArgs::render_catalog();
        assert_eq!(rendered.lines().count(), FIELD_CATALOG.len() + 1);
        assert!(rendered.contains("Mobile Number"));
        assert!(rendered.contains("mobile_number"));
        assert!(rendered.contains("createdAt"));
    }
}
