//! Parser for the encoded forms grammar.
//!
//! Column and row specs are written as comma separated lists such as
//! `"right:pref, 4dlu, 50dlu:grow"`. This crate turns those strings, and the
//! smaller grammars for cell constraints, borders, and groups, into the typed
//! values of `forms-core`. Built on `nom` for the token level rules.

mod grammar;
mod lexer;

pub use grammar::{
    parse_border, parse_cell_constraints, parse_column_spec, parse_column_specs,
    parse_constant_size, parse_groups, parse_row_spec, parse_row_specs, parse_size,
};

/// Parse column and row specs in one call.
///
/// # Example
///
/// ```ignore
/// use forms_parser::parse_specs;
///
/// let (columns, rows) = parse_specs("right:pref, 4dlu, 50dlu", "pref, 3dlu, pref")?;
/// assert_eq!(columns.len(), 3);
/// ```
pub fn parse_specs(
    encoded_columns: &str,
    encoded_rows: &str,
) -> Result<(Vec<forms_core::ColumnSpec>, Vec<forms_core::RowSpec>), forms_core::ParseError> {
    Ok((parse_column_specs(encoded_columns)?, parse_row_specs(encoded_rows)?))
}
