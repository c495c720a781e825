use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::domain::common::entities::app_errors::CoreError;

/// Section titles recognized as course-header rows, upper-cased.
pub const COURSE_SECTIONS: [&str; 4] = ["APPETIZERS", "MAIN COURSE", "BREADS", "DESSERTS"];

/// Party sizes assumed when the sheet carries no `PAX` header, one per
/// alternating column pair starting at column 1.
pub const DEFAULT_PARTY_SIZES: [i32; 4] = [50, 100, 250, 500];

/// A parsed quantity cell: leading integer plus unit letters. The
/// parenthetical conversion note (e.g. `(1PC=50GM)`) is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuantity {
    pub value: Decimal,
    pub unit: String,
}

fn quantity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)\s*([A-Za-z]+)(?:\(.*\))?").unwrap_or_else(|_| unreachable!())
    })
}

/// Parses cells like `"4KG"` or `"200 PC(1PC=50GM)"`. Returns `None`
/// for anything that does not start with an integer followed by unit
/// letters.
pub fn parse_quantity_cell(cell: &str) -> Option<ParsedQuantity> {
    let captures = quantity_pattern().captures(cell.trim())?;
    let value: Decimal = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str().to_string();

    Some(ParsedQuantity { value, unit })
}

/// Column-to-party-size mapping for quantity cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    /// (party size, column index) pairs.
    pub columns: Vec<(i32, usize)>,
}

impl ColumnMap {
    /// Derives the mapping from a header row: every cell ending in
    /// `PAX` contributes its leading integer and column index.
    /// Malformed `PAX` cells are ignored.
    pub fn from_header(header: &[String]) -> Self {
        let mut columns = Vec::new();

        for (index, cell) in header.iter().enumerate() {
            let cell = cell.trim();
            if !cell.ends_with("PAX") {
                continue;
            }
            if let Some(first) = cell.split_whitespace().next()
                && let Ok(size) = first.parse::<i32>()
            {
                columns.push((size, index));
            }
        }

        Self { columns }
    }

    /// The fixed banquet-sheet convention: party sizes 50/100/250/500
    /// in alternating columns 1, 3, 5, 7.
    pub fn fixed() -> Self {
        Self {
            columns: DEFAULT_PARTY_SIZES
                .iter()
                .enumerate()
                .map(|(i, &size)| (size, i * 2 + 1))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Reads the raw CSV bytes into rows of trimmed-width string cells.
pub fn read_rows(data: &[u8]) -> Result<Vec<Vec<String>>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CoreError::Invalid(format!("malformed CSV: {}", e)))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(rows)
}

pub fn is_empty_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Returns the canonical course name when the row is a section header.
pub fn course_header(row: &[String]) -> Option<String> {
    let first = row.first()?.trim();
    if COURSE_SECTIONS.contains(&first.to_uppercase().as_str()) {
        Some(first.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_quantity() {
        let parsed = parse_quantity_cell("4KG").unwrap();
        assert_eq!(parsed.value, Decimal::from(4));
        assert_eq!(parsed.unit, "KG");
    }

    #[test]
    fn parses_quantity_with_conversion_note() {
        let parsed = parse_quantity_cell("200 PC(1PC=50GM)").unwrap();
        assert_eq!(parsed.value, Decimal::from(200));
        assert_eq!(parsed.unit, "PC");
    }

    #[test]
    fn parses_quantity_with_space_before_unit() {
        let parsed = parse_quantity_cell("12 LTR").unwrap();
        assert_eq!(parsed.value, Decimal::from(12));
        assert_eq!(parsed.unit, "LTR");
    }

    #[test]
    fn rejects_non_numeric_cell() {
        assert!(parse_quantity_cell("abc").is_none());
        assert!(parse_quantity_cell("").is_none());
        assert!(parse_quantity_cell("KG4").is_none());
    }

    #[test]
    fn column_map_from_pax_header() {
        let header: Vec<String> = ["MENU", "50 PAX", "", "100 PAX", "", "250 PAX"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = ColumnMap::from_header(&header);
        assert_eq!(map.columns, vec![(50, 1), (100, 3), (250, 5)]);
    }

    #[test]
    fn column_map_ignores_malformed_pax_cells() {
        let header: Vec<String> = ["MENU", "fifty PAX", "100 PAX"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = ColumnMap::from_header(&header);
        assert_eq!(map.columns, vec![(100, 2)]);
    }

    #[test]
    fn fixed_column_map_uses_alternating_columns() {
        let map = ColumnMap::fixed();
        assert_eq!(map.columns, vec![(50, 1), (100, 3), (250, 5), (500, 7)]);
    }

    #[test]
    fn detects_course_headers_case_insensitively() {
        let row = vec!["Main Course".to_string(), "".to_string()];
        assert_eq!(course_header(&row), Some("Main Course".to_string()));

        let row = vec!["PANEER TIKKA".to_string()];
        assert_eq!(course_header(&row), None);
    }

    #[test]
    fn reads_rows_from_bytes() {
        let data = b"MENU,50 PAX\nAPPETIZERS,\nPANEER TIKKA,4KG\n";
        let rows = read_rows(data).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], "PANEER TIKKA");
        assert_eq!(rows[2][1], "4KG");
    }

    #[test]
    fn empty_row_detection() {
        assert!(is_empty_row(&[" ".to_string(), "".to_string()]));
        assert!(!is_empty_row(&["x".to_string()]));
    }
}
