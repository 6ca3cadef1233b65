//! # qmetrics-coupling
//!
//! **Tier 2 (Extraction + Aggregation)**
//!
//! Reads a CK class metrics table, normalizes its loosely named columns into
//! [`ClassCoupling`] rows, ranks them and computes the coupling factor.
//!
//! ## Column matching
//! Header names are compared case-insensitively after trimming. When several
//! columns share an alias, the first non-empty cell of a row wins.
//!
//! ## Cell coercion
//! Numeric cells never fail a run: anything that is not a finite,
//! non-negative number becomes zero.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use tracing::debug;

use qmetrics_math::coupling_factor;
use qmetrics_types::{ClassCoupling, CouplingFactor, CouplingReport};

/// Normalized column keys understood by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Class,
    Wmc,
    Lcom,
    Cbo,
    Nom,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Class,
        Column::Wmc,
        Column::Lcom,
        Column::Cbo,
        Column::Nom,
    ];

    /// Lower-case header alias.
    pub fn alias(self) -> &'static str {
        match self {
            Column::Class => "class",
            Column::Wmc => "wmc",
            Column::Lcom => "lcom",
            Column::Cbo => "cbo",
            Column::Nom => "nom",
        }
    }

    fn matches(self, header: &str) -> bool {
        header
            .trim()
            .trim_start_matches('\u{feff}')
            .trim()
            .eq_ignore_ascii_case(self.alias())
    }
}

/// Header positions for each [`Column`].
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    positions: [Vec<usize>; 5],
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut map = Self::default();
        for (idx, header) in headers.iter().enumerate() {
            for column in Column::ALL {
                if column.matches(header) {
                    map.positions[column as usize].push(idx);
                }
            }
        }
        map
    }

    /// First non-empty cell among the positions of `column`.
    pub fn cell<'r>(&self, record: &'r StringRecord, column: Column) -> Option<&'r str> {
        self.positions[column as usize]
            .iter()
            .filter_map(|&idx| record.get(idx))
            .find(|value| !value.is_empty())
    }
}

/// Integer metric; truncates fractions, anything unusable becomes `0`.
#[must_use]
pub fn coerce_count(cell: Option<&str>) -> u64 {
    cell.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value.trunc() as u64)
        .unwrap_or(0)
}

/// Floating metric; anything unusable becomes `0.0`.
#[must_use]
pub fn coerce_ratio(cell: Option<&str>) -> f64 {
    cell.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(0.0)
}

/// Build one typed row from a CSV record.
pub fn row_from_record(columns: &ColumnMap, record: &StringRecord) -> ClassCoupling {
    ClassCoupling {
        class: columns
            .cell(record, Column::Class)
            .unwrap_or_default()
            .to_string(),
        wmc: coerce_count(columns.cell(record, Column::Wmc)),
        lcom: coerce_ratio(columns.cell(record, Column::Lcom)),
        cbo: coerce_count(columns.cell(record, Column::Cbo)),
        nom: coerce_count(columns.cell(record, Column::Nom)),
    }
}

/// Parse a header-first CK table. Blank lines are skipped, short rows are
/// padded with absent values.
pub fn parse_coupling_table<R: Read>(input: R) -> Result<Vec<ClassCoupling>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let columns = ColumnMap::from_headers(reader.headers().context("Failed to read CSV header")?);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        if record.iter().all(str::is_empty) && record.len() <= 1 {
            continue;
        }
        rows.push(row_from_record(&columns, &record));
    }
    Ok(rows)
}

/// Read a CK table from disk. The file handle lives only for the parse.
pub fn read_coupling_table(path: &Path) -> Result<Vec<ClassCoupling>> {
    let rows = {
        let file = File::open(path)
            .with_context(|| format!("Failed to open class metrics table {}", path.display()))?;
        parse_coupling_table(BufReader::new(file))
            .with_context(|| format!("Failed to parse class metrics table {}", path.display()))?
    };
    debug!(table = %path.display(), rows = rows.len(), "read class metrics");
    Ok(rows)
}

/// Total order: wmc desc, lcom desc, cbo desc, class asc.
pub fn compare_rows(a: &ClassCoupling, b: &ClassCoupling) -> Ordering {
    b.wmc
        .cmp(&a.wmc)
        .then_with(|| b.lcom.total_cmp(&a.lcom))
        .then_with(|| b.cbo.cmp(&a.cbo))
        .then_with(|| a.class.cmp(&b.class))
}

/// Coupling factor over every row, with its operands. The CBO sum
/// saturates at `u64::MAX` instead of overflowing.
pub fn factor(rows: &[ClassCoupling]) -> CouplingFactor {
    let sum_cbo = rows.iter().map(|r| r.cbo).fold(0u64, u64::saturating_add);
    CouplingFactor {
        classes: rows.len(),
        sum_cbo,
        value: coupling_factor(sum_cbo, rows.len()),
    }
}

/// Rank rows and compute the coupling factor.
pub fn build_coupling_report(mut rows: Vec<ClassCoupling>) -> CouplingReport {
    let factor = factor(&rows);
    rows.sort_by(compare_rows);
    CouplingReport { rows, factor }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Vec<ClassCoupling> {
        parse_coupling_table(csv.as_bytes()).unwrap()
    }

    #[test]
    fn lower_and_upper_case_headers_are_equivalent() {
        let lower = parse("class,wmc,lcom,cbo,nom\na.A,3,1.5,2,4\n");
        let upper = parse("Class,WMC,LCOM,CBO,NOM\na.A,3,1.5,2,4\n");
        assert_eq!(lower, upper);
        assert_eq!(lower[0].wmc, 3);
        assert_eq!(lower[0].lcom, 1.5);
        assert_eq!(lower[0].cbo, 2);
        assert_eq!(lower[0].nom, 4);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let rows = parse(
            "file,class,type,cbo,wmc,dit,rfc,lcom,nom\n\
             A.java,a.A,class,7,12,1,30,0.5,6\n",
        );
        assert_eq!(
            rows[0],
            ClassCoupling {
                class: "a.A".to_string(),
                wmc: 12,
                lcom: 0.5,
                cbo: 7,
                nom: 6,
            }
        );
    }

    #[test]
    fn empty_cell_falls_through_to_alias() {
        let rows = parse("wmc,WMC,class\n,9,a.A\n");
        assert_eq!(rows[0].wmc, 9);
    }

    #[test]
    fn malformed_cells_become_zero() {
        let rows = parse("class,wmc,lcom,cbo,nom\na.A,abc,NaN,-4,inf\n");
        assert_eq!(rows[0].wmc, 0);
        assert_eq!(rows[0].lcom, 0.0);
        assert_eq!(rows[0].cbo, 0);
        assert_eq!(rows[0].nom, 0);
    }

    #[test]
    fn fractional_counts_truncate() {
        assert_eq!(coerce_count(Some("3.9")), 3);
        assert_eq!(coerce_count(Some(" 12 ")), 12);
        assert_eq!(coerce_count(Some("1e2")), 100);
        assert_eq!(coerce_count(None), 0);
        assert_eq!(coerce_ratio(Some("-0.0")), 0.0);
        assert!(coerce_ratio(Some("-0.0")).is_sign_positive());
    }

    #[test]
    fn missing_columns_and_short_rows_default() {
        let rows = parse("class,wmc,cbo\na.A,5\n");
        assert_eq!(rows[0].wmc, 5);
        assert_eq!(rows[0].cbo, 0);
        assert_eq!(rows[0].lcom, 0.0);
        let rows = parse("wmc\n3\n");
        assert_eq!(rows[0].class, "");
    }

    #[test]
    fn bom_on_first_header_is_ignored() {
        let rows = parse("\u{feff}class,wmc\na.A,2\n");
        assert_eq!(rows[0].class, "a.A");
        assert_eq!(rows[0].wmc, 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse("class,wmc\na.A,1\n\nb.B,2\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn header_only_table_is_empty() {
        assert!(parse("class,wmc,lcom,cbo,nom\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn ranking_is_a_total_order() {
        let row = |class: &str, wmc: u64, lcom: f64, cbo: u64| ClassCoupling {
            class: class.to_string(),
            wmc,
            lcom,
            cbo,
            nom: 0,
        };
        let report = build_coupling_report(vec![
            row("z", 5, 1.0, 1),
            row("b", 5, 1.0, 1),
            row("a", 5, 1.0, 3),
            row("c", 5, 2.0, 0),
            row("d", 9, 0.0, 0),
        ]);
        let names: Vec<&str> = report.rows.iter().map(|r| r.class.as_str()).collect();
        assert_eq!(names, ["d", "c", "a", "b", "z"]);
        assert_eq!(report.factor.classes, 5);
        assert_eq!(report.factor.sum_cbo, 5);
        assert_eq!(report.factor.value, 0.25);
    }
}
