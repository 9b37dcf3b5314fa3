//! Grammar rules for encoded specs, sizes, cell constraints, borders, and
//! groups.
//!
//! All rules are case insensitive and ignore surrounding whitespace.

use forms_core::{
    Border, CellAlignment, CellConstraints, ColumnSpec, ComponentSize, ConstantSize, FormSpec,
    Orientation, ParseError, RowSpec, Size, SpecAlignment, Unit, DEFAULT_GROW, NO_GROW,
};
use tracing::trace;

use crate::lexer::*;

/// Parse a comma separated list of column specs.
pub fn parse_column_specs(encoded: &str) -> Result<Vec<ColumnSpec>, ParseError> {
    parse_spec_list(encoded, Orientation::Horizontal, "column specs", |spec| {
        ColumnSpec::new(spec.default_alignment(), spec.size().clone(), spec.resize_weight())
    })
}

/// Parse a comma separated list of row specs.
pub fn parse_row_specs(encoded: &str) -> Result<Vec<RowSpec>, ParseError> {
    parse_spec_list(encoded, Orientation::Vertical, "row specs", |spec| {
        RowSpec::new(spec.default_alignment(), spec.size().clone(), spec.resize_weight())
    })
}

/// Parse a single column spec such as `right:pref:grow`.
pub fn parse_column_spec(encoded: &str) -> Result<ColumnSpec, ParseError> {
    let spec = parse_form_spec(encoded, Orientation::Horizontal)?;
    ColumnSpec::new(spec.default_alignment(), spec.size().clone(), spec.resize_weight())
        .map_err(|_| invalid_resize(encoded))
}

/// Parse a single row spec such as `top:pref`.
pub fn parse_row_spec(encoded: &str) -> Result<RowSpec, ParseError> {
    let spec = parse_form_spec(encoded, Orientation::Vertical)?;
    RowSpec::new(spec.default_alignment(), spec.size().clone(), spec.resize_weight())
        .map_err(|_| invalid_resize(encoded))
}

fn parse_spec_list<T, E>(
    encoded: &str,
    orientation: Orientation,
    what: &'static str,
    wrap: impl Fn(FormSpec) -> Result<T, E>,
) -> Result<Vec<T>, ParseError> {
    let lower = encoded.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return Err(ParseError::Empty { what });
    }

    let specs = split_top_level(&lower, ',')
        .into_iter()
        .map(|token| {
            if token.is_empty() {
                return Err(ParseError::Empty { what: "spec" });
            }
            let spec = parse_form_spec(token, orientation)?;
            wrap(spec).map_err(|_| invalid_resize(token))
        })
        .collect::<Result<Vec<_>, _>>()?;

    trace!(count = specs.len(), %orientation, "parsed form specs");
    Ok(specs)
}

/// Parse `[alignment:]size[:resize]`.
fn parse_form_spec(encoded: &str, orientation: Orientation) -> Result<FormSpec, ParseError> {
    let lower = encoded.trim().to_ascii_lowercase();
    let parts = split_top_level(&lower, ':');

    let (alignment, size, resize) = match parts.as_slice() {
        [size] => (None, *size, None),
        [first, second] => match parse_spec_alignment(first, orientation)? {
            Some(alignment) => (Some(alignment), *second, None),
            None => (None, *first, Some(*second)),
        },
        [alignment, size, resize] => {
            let alignment = parse_spec_alignment(alignment, orientation)?.ok_or_else(|| {
                ParseError::InvalidAlignment {
                    token: alignment.to_string(),
                    orientation,
                }
            })?;
            (Some(alignment), *size, Some(*resize))
        }
        _ => {
            return Err(ParseError::UnexpectedToken {
                found: encoded.to_string(),
                expected: "[alignment:]size[:resize]".to_string(),
            })
        }
    };

    let size = parse_size(size, orientation)?;
    let weight = match resize {
        Some(token) => parse_resize(token)?,
        None => NO_GROW,
    };

    FormSpec::new(
        orientation,
        alignment.unwrap_or_else(|| SpecAlignment::default_for(orientation)),
        size,
        weight,
    )
    .map_err(|_| invalid_resize(encoded))
}

/// Returns `Ok(None)` if the token is not an alignment at all, and an error
/// if it is an alignment of the other axis.
fn parse_spec_alignment(
    token: &str,
    orientation: Orientation,
) -> Result<Option<SpecAlignment>, ParseError> {
    let alignment = match (token, orientation) {
        ("center" | "c", _) => Some(SpecAlignment::Center),
        ("fill" | "f", _) => Some(SpecAlignment::Fill),
        ("left" | "l", Orientation::Horizontal) => Some(SpecAlignment::Start),
        ("right" | "r", Orientation::Horizontal) => Some(SpecAlignment::End),
        ("top" | "t", Orientation::Vertical) => Some(SpecAlignment::Start),
        ("bottom" | "b", Orientation::Vertical) => Some(SpecAlignment::End),
        ("left" | "l" | "right" | "r" | "top" | "t" | "bottom" | "b", _) => {
            return Err(ParseError::InvalidAlignment {
                token: token.to_string(),
                orientation,
            })
        }
        _ => None,
    };
    Ok(alignment)
}

fn parse_resize(token: &str) -> Result<f64, ParseError> {
    match token {
        "none" | "n" => return Ok(NO_GROW),
        "grow" | "g" => return Ok(DEFAULT_GROW),
        _ => {}
    }
    let args = token
        .strip_prefix("grow")
        .or_else(|| token.strip_prefix('g'))
        .ok_or_else(|| invalid_resize(token))?;
    parenthesized_number(args.trim())
        .map(|(_, weight)| weight)
        .map_err(|_| invalid_resize(token))
}

fn invalid_resize(token: &str) -> ParseError {
    ParseError::InvalidResize {
        token: token.to_string(),
    }
}

/// Parse a size: a component size, a constant, a bounded size, or a sum.
pub fn parse_size(encoded: &str, orientation: Orientation) -> Result<Size, ParseError> {
    let token = encoded.trim().to_ascii_lowercase();
    let parts = split_top_level(&token, '+');
    if parts.len() > 1 {
        let parts = parts
            .into_iter()
            .map(|part| parse_atomic_size(part, orientation))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Size::Sum(parts));
    }
    parse_atomic_size(&token, orientation)
}

fn parse_atomic_size(token: &str, orientation: Orientation) -> Result<Size, ParseError> {
    if token.is_empty() {
        return Err(ParseError::InvalidSize {
            token: token.to_string(),
        });
    }
    if let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        return parse_bracket_bounded_size(token, inner, orientation);
    }
    if let Some(args) = function_args(token, "max") {
        return parse_legacy_bounded_size(token, args, orientation, false);
    }
    if let Some(args) = function_args(token, "min") {
        return parse_legacy_bounded_size(token, args, orientation, true);
    }
    if let Some(size) = parse_component_size(token) {
        return Ok(Size::Component(size));
    }
    parse_constant_size(token, orientation).map(Size::Constant)
}

fn parse_component_size(token: &str) -> Option<ComponentSize> {
    match token {
        "min" | "m" => Some(ComponentSize::Minimum),
        "pref" | "p" => Some(ComponentSize::Preferred),
        "default" | "d" => Some(ComponentSize::Default),
        _ => None,
    }
}

/// `max(a;b)` bounds the basis from below, `min(a;b)` from above. One side
/// must be a constant size.
fn parse_legacy_bounded_size(
    token: &str,
    args: &str,
    orientation: Orientation,
    upper: bool,
) -> Result<Size, ParseError> {
    let parts = split_top_level(args, ';');
    let [first, second] = parts.as_slice() else {
        return Err(invalid_bounded(token, "expected two sizes separated by ';'"));
    };
    let first = parse_atomic_size(first, orientation)?;
    let second = parse_atomic_size(second, orientation)?;

    let (basis, bound) = match (first.is_constant(), second.is_constant()) {
        (true, true) => return Err(invalid_bounded(token, "sizes must not both be constants")),
        (false, false) => {
            return Err(invalid_bounded(token, "one of the sizes must be a constant"))
        }
        (true, false) => (second, first),
        (false, true) => (first, second),
    };
    Ok(if upper {
        Size::bounded(basis, None, Some(bound))
    } else {
        Size::bounded(basis, Some(bound), None)
    })
}

/// `[lower,basis]`, `[basis,upper]`, or `[lower,basis,upper]`. Each element
/// may itself be a sum such as `pref+2px`.
fn parse_bracket_bounded_size(
    token: &str,
    inner: &str,
    orientation: Orientation,
) -> Result<Size, ParseError> {
    let sizes = split_top_level(inner, ',')
        .into_iter()
        .map(|part| parse_size(part, orientation))
        .collect::<Result<Vec<_>, _>>()?;

    match <[Size; 2]>::try_from(sizes) {
        Ok([first, second]) => match (first.is_constant(), second.is_constant()) {
            (true, false) => Ok(Size::bounded(second, Some(first), None)),
            (false, true) => Ok(Size::bounded(first, None, Some(second))),
            (true, true) => Err(invalid_bounded(token, "sizes must not both be constants")),
            (false, false) => Err(invalid_bounded(token, "one of the sizes must be a constant")),
        },
        Err(sizes) => match <[Size; 3]>::try_from(sizes) {
            Ok([lower, basis, upper]) => {
                if !lower.is_constant() || !upper.is_constant() {
                    return Err(invalid_bounded(token, "the bounds must be constant sizes"));
                }
                Ok(Size::bounded(basis, Some(lower), Some(upper)))
            }
            Err(_) => Err(invalid_bounded(token, "expected two or three sizes")),
        },
    }
}

fn invalid_bounded(token: &str, reason: &str) -> ParseError {
    ParseError::InvalidBoundedSize {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a constant size such as `4dlu`, `12px`, `2.5mm`, or `30`.
///
/// `dlu` means horizontal dialog units for columns and vertical ones for rows.
pub fn parse_constant_size(
    encoded: &str,
    orientation: Orientation,
) -> Result<ConstantSize, ParseError> {
    let token = encoded.trim().to_ascii_lowercase();
    let (_, (value, unit_text)) = number_with_unit(&token).map_err(|_| {
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            ParseError::InvalidNumber {
                value: token.clone(),
            }
        } else {
            ParseError::InvalidSize {
                token: token.clone(),
            }
        }
    })?;

    let unit = match unit_text {
        "" | "px" => Unit::Pixel,
        "pt" => Unit::Point,
        "dlu" => Unit::dialog_units(orientation),
        "dlux" => Unit::DialogUnitsX,
        "dluy" => Unit::DialogUnitsY,
        "mm" => Unit::Millimeter,
        "cm" => Unit::Centimeter,
        "in" => Unit::Inch,
        other => {
            return Err(ParseError::InvalidUnit {
                unit: other.to_string(),
                token: token.clone(),
            })
        }
    };

    if unit.requires_integer() && value.fract() != 0.0 {
        return Err(ParseError::NonIntegerValue {
            value: token.clone(),
            unit: unit.abbreviation().to_string(),
        });
    }

    Ok(ConstantSize::new(value, unit))
}

/// Parse encoded cell constraints: `"x, y"`, `"x, y, w, h"`,
/// `"x, y, hAlign, vAlign"`, or `"x, y, w, h, hAlign, vAlign"`.
pub fn parse_cell_constraints(encoded: &str) -> Result<CellConstraints, ParseError> {
    let lower = encoded.trim().to_ascii_lowercase();
    let tokens: Vec<&str> = lower.split(',').map(str::trim).collect();
    let invalid = |reason: &str| ParseError::InvalidCellConstraints {
        encoded: encoded.to_string(),
        reason: reason.to_string(),
    };
    let index = |token: &str| -> Result<usize, ParseError> {
        match token.parse::<usize>() {
            Ok(0) => Err(invalid("indices and spans must be positive")),
            Ok(value) => Ok(value),
            Err(_) => Err(invalid(&format!("{:?} is not an index", token))),
        }
    };

    let cc = match *tokens.as_slice() {
        [x, y] => CellConstraints::xy(index(x)?, index(y)?),
        [x, y, third, fourth] => {
            if third.starts_with(|c: char| c.is_ascii_digit()) {
                CellConstraints::xywh(index(x)?, index(y)?, index(third)?, index(fourth)?)
            } else {
                CellConstraints::xy(index(x)?, index(y)?).with_alignment(
                    parse_cell_alignment(third, Orientation::Horizontal)?,
                    parse_cell_alignment(fourth, Orientation::Vertical)?,
                )
            }
        }
        [x, y, w, h, h_align, v_align] => {
            CellConstraints::xywh(index(x)?, index(y)?, index(w)?, index(h)?).with_alignment(
                parse_cell_alignment(h_align, Orientation::Horizontal)?,
                parse_cell_alignment(v_align, Orientation::Vertical)?,
            )
        }
        _ => return Err(invalid("expected 2, 4, or 6 comma separated values")),
    };
    Ok(cc)
}

fn parse_cell_alignment(token: &str, orientation: Orientation) -> Result<CellAlignment, ParseError> {
    match token {
        "default" | "d" => Ok(CellAlignment::Default),
        _ => match parse_spec_alignment(token, orientation)? {
            Some(alignment) => Ok(alignment.into()),
            None => Err(ParseError::InvalidAlignment {
                token: token.to_string(),
                orientation,
            }),
        },
    }
}

/// Parse an empty border of four constant sizes: `"top, left, bottom, right"`.
pub fn parse_border(encoded: &str) -> Result<Border, ParseError> {
    let tokens: Vec<&str> = encoded
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    let [top, left, bottom, right] = tokens.as_slice() else {
        return Err(ParseError::WrongTokenCount {
            what: "border",
            encoded: encoded.to_string(),
            expected: 4,
            found: tokens.len(),
        });
    };
    Ok(Border::new(
        parse_constant_size(top, Orientation::Vertical)?,
        parse_constant_size(left, Orientation::Horizontal)?,
        parse_constant_size(bottom, Orientation::Vertical)?,
        parse_constant_size(right, Orientation::Horizontal)?,
    ))
}

/// Parse groups of 1-based indices: `"1, 3, 5; 2, 4"`.
pub fn parse_groups(encoded: &str) -> Result<Vec<Vec<usize>>, ParseError> {
    let invalid = |reason: String| ParseError::InvalidGroup {
        encoded: encoded.to_string(),
        reason,
    };
    if encoded.trim().is_empty() {
        return Ok(Vec::new());
    }
    encoded
        .split(';')
        .map(|group| {
            let indices = group
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| match t.parse::<usize>() {
                    Ok(0) => Err(invalid("indices are 1-based".to_string())),
                    Ok(index) => Ok(index),
                    Err(_) => Err(invalid(format!("{:?} is not an index", t))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if indices.is_empty() {
                return Err(invalid("groups must not be empty".to_string()));
            }
            Ok(indices)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms_core::BoundedSize;

    #[test]
    fn test_parse_column_specs() {
        let specs = parse_column_specs("right:pref, 6dlu, 50dlu, 4dlu, default").unwrap();
        assert_eq!(specs.len(), 5);
        assert_eq!(specs[0].default_alignment(), SpecAlignment::End);
        assert_eq!(specs[0].size(), &Size::PREFERRED);
        assert_eq!(specs[1].size(), &Size::dlu_x(6));
        assert_eq!(specs[1].default_alignment(), SpecAlignment::Fill);
        assert_eq!(specs[4].size(), &Size::DEFAULT);
        assert!(!specs[4].can_grow());
    }

    #[test]
    fn test_parse_row_specs() {
        let specs = parse_row_specs("pref, 3dlu, top:pref:grow, fill:0px:g(0.5)").unwrap();
        assert_eq!(specs.len(), 4);
        assert_eq!(specs[0].default_alignment(), SpecAlignment::Center);
        assert_eq!(specs[1].size(), &Size::dlu_y(3));
        assert_eq!(specs[2].default_alignment(), SpecAlignment::Start);
        assert_eq!(specs[2].resize_weight(), 1.0);
        assert_eq!(specs[3].default_alignment(), SpecAlignment::Fill);
        assert_eq!(specs[3].resize_weight(), 0.5);
    }

    #[test]
    fn test_size_with_resize_only() {
        let spec = parse_column_spec("PREF:GROW").unwrap();
        assert_eq!(spec.size(), &Size::PREFERRED);
        assert_eq!(spec.resize_weight(), 1.0);

        let spec = parse_column_spec("p:none").unwrap();
        assert!(!spec.can_grow());
    }

    #[test]
    fn test_wrong_axis_alignment() {
        assert_eq!(
            parse_column_spec("top:pref").unwrap_err(),
            ParseError::InvalidAlignment {
                token: "top".to_string(),
                orientation: Orientation::Horizontal,
            }
        );
        assert!(parse_row_spec("left:pref").is_err());
    }

    #[test]
    fn test_empty_specs() {
        assert_eq!(
            parse_column_specs("  ").unwrap_err(),
            ParseError::Empty { what: "column specs" }
        );
        assert_eq!(parse_row_specs("pref,,pref").unwrap_err(), ParseError::Empty { what: "spec" });
    }

    #[test]
    fn test_invalid_resize() {
        assert!(matches!(
            parse_column_spec("pref:grow(abc)"),
            Err(ParseError::InvalidResize { .. })
        ));
        assert!(matches!(
            parse_column_spec("pref:shrink"),
            Err(ParseError::InvalidResize { .. })
        ));
    }

    #[test]
    fn test_constant_sizes() {
        assert_eq!(
            parse_constant_size("12px", Orientation::Horizontal).unwrap(),
            ConstantSize::pixel(12)
        );
        assert_eq!(
            parse_constant_size("30", Orientation::Vertical).unwrap(),
            ConstantSize::pixel(30)
        );
        assert_eq!(
            parse_constant_size("4dlu", Orientation::Vertical).unwrap(),
            ConstantSize::dlu_y(4)
        );
        assert_eq!(
            parse_constant_size("4dluX", Orientation::Vertical).unwrap(),
            ConstantSize::dlu_x(4)
        );
        assert_eq!(
            parse_constant_size("2.5mm", Orientation::Horizontal).unwrap(),
            ConstantSize::new(2.5, Unit::Millimeter)
        );
        assert_eq!(
            parse_constant_size("1in", Orientation::Horizontal).unwrap(),
            ConstantSize::new(1.0, Unit::Inch)
        );
    }

    #[test]
    fn test_constant_size_errors() {
        assert!(matches!(
            parse_constant_size("2.5px", Orientation::Horizontal),
            Err(ParseError::NonIntegerValue { .. })
        ));
        assert!(matches!(
            parse_constant_size("3em", Orientation::Horizontal),
            Err(ParseError::InvalidUnit { .. })
        ));
        assert!(matches!(
            parse_constant_size("wide", Orientation::Horizontal),
            Err(ParseError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_legacy_bounded_sizes() {
        let size = parse_size("max(4dlu;pref)", Orientation::Horizontal).unwrap();
        assert_eq!(size, Size::bounded(Size::PREFERRED, Some(Size::dlu_x(4)), None));

        let size = parse_size("min(pref;50dlu)", Orientation::Horizontal).unwrap();
        assert_eq!(size, Size::bounded(Size::PREFERRED, None, Some(Size::dlu_x(50))));

        assert!(matches!(
            parse_size("max(4dlu;6dlu)", Orientation::Horizontal),
            Err(ParseError::InvalidBoundedSize { .. })
        ));
        assert!(matches!(
            parse_size("max(pref;min)", Orientation::Horizontal),
            Err(ParseError::InvalidBoundedSize { .. })
        ));
    }

    #[test]
    fn test_bracket_bounded_sizes() {
        let size = parse_size("[50dlu,pref]", Orientation::Horizontal).unwrap();
        assert_eq!(size, Size::bounded(Size::PREFERRED, Some(Size::dlu_x(50)), None));

        let size = parse_size("[pref, 100px]", Orientation::Horizontal).unwrap();
        assert_eq!(size, Size::bounded(Size::PREFERRED, None, Some(Size::pixel(100))));

        let Size::Bounded(bounded) = parse_size("[10px,default,20dlu]", Orientation::Vertical).unwrap() else {
            panic!("Expected bounded size");
        };
        assert_eq!(
            *bounded,
            BoundedSize {
                basis: Size::DEFAULT,
                lower: Some(Size::pixel(10)),
                upper: Some(Size::dlu_y(20)),
            }
        );

        let size = parse_size("[4px,pref+2px]", Orientation::Horizontal).unwrap();
        assert_eq!(
            size,
            Size::bounded(Size::sum(vec![Size::PREFERRED, Size::pixel(2)]), Some(Size::pixel(4)), None)
        );
        assert_eq!(size.to_string(), "[4px,pref+2px]");

        assert!(parse_size("[pref]", Orientation::Horizontal).is_err());
        assert!(parse_size("[pref,min,pref]", Orientation::Horizontal).is_err());
    }

    #[test]
    fn test_bounded_specs_survive_list_split() {
        let specs = parse_column_specs("[50dlu,pref]:grow, 4dlu").unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs[0].can_grow());
    }

    #[test]
    fn test_sum_size() {
        let size = parse_size("pref+4dlu", Orientation::Vertical).unwrap();
        assert_eq!(size, Size::sum(vec![Size::PREFERRED, Size::dlu_y(4)]));
    }

    #[test]
    fn test_cell_constraints() {
        assert_eq!(parse_cell_constraints("1, 3").unwrap(), CellConstraints::xy(1, 3));
        assert_eq!(
            parse_cell_constraints("1, 3, 5, 1").unwrap(),
            CellConstraints::xywh(1, 3, 5, 1)
        );
        assert_eq!(
            parse_cell_constraints("1, 3, r, t").unwrap(),
            CellConstraints::xy(1, 3).with_alignment(CellAlignment::End, CellAlignment::Start)
        );
        assert_eq!(
            parse_cell_constraints("2, 1, 3, 2, fill, bottom").unwrap(),
            CellConstraints::xywh(2, 1, 3, 2)
                .with_alignment(CellAlignment::Fill, CellAlignment::End)
        );
    }

    #[test]
    fn test_cell_constraint_errors() {
        assert!(parse_cell_constraints("0, 1").is_err());
        assert!(parse_cell_constraints("1").is_err());
        assert!(parse_cell_constraints("1, 1, top, left").is_err());
        assert!(parse_cell_constraints("1, x").is_err());
    }

    #[test]
    fn test_border() {
        let border = parse_border("4dlu, 4dlu, 4dlu, 4dlu").unwrap();
        assert_eq!(border.top, ConstantSize::dlu_y(4));
        assert_eq!(border.left, ConstantSize::dlu_x(4));

        assert_eq!(
            parse_border("4dlu, 4dlu").unwrap_err(),
            ParseError::WrongTokenCount {
                what: "border",
                encoded: "4dlu, 4dlu".to_string(),
                expected: 4,
                found: 2,
            }
        );
    }

    #[test]
    fn test_groups() {
        assert_eq!(parse_groups("1, 3, 5; 2,4").unwrap(), vec![vec![1, 3, 5], vec![2, 4]]);
        assert_eq!(parse_groups("").unwrap(), Vec::<Vec<usize>>::new());
        assert!(parse_groups("1,2;").is_err());
        assert!(parse_groups("0").is_err());
    }

    #[test]
    fn test_display_matches_encoding() {
        for encoded in [
            "right:pref",
            "default:grow",
            "[50dlu,pref]",
            "[4px,pref+2px]",
            "top:pref:grow(0.5)",
        ] {
            let orientation = if encoded.starts_with("top") {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let spec = parse_form_spec(encoded, orientation).unwrap();
            assert_eq!(spec.to_string(), encoded);
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_parsers_reject_garbage_without_panicking(input in "\\PC{0,40}") {
            let _ = parse_column_specs(&input);
            let _ = parse_row_specs(&input);
            let _ = parse_cell_constraints(&input);
            let _ = parse_border(&input);
            let _ = parse_groups(&input);
        }

        #[test]
        fn prop_constant_sizes_parse(value in 0u32..10_000, unit in "(px|pt|dlu|mm|cm|in)") {
            let encoded = format!("{}{}", value, unit);
            let size = parse_constant_size(&encoded, Orientation::Horizontal).unwrap();
            proptest::prop_assert_eq!(size.value, value as f64);
            proptest::prop_assert_eq!(size.to_string(), encoded);
        }
    }
}
