//! Source column names.

pub const BRAND_NAME: &str = "brand_name";
pub const DOSAGE_FORM: &str = "dosage_form";
pub const ROUTE: &str = "route";
pub const ACTIVE_INGREDIENTS: &str = "active_ingredients";

/// Columns every medication source must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[BRAND_NAME, ACTIVE_INGREDIENTS, DOSAGE_FORM, ROUTE];
