//! Spreadsheet loading for Excel workbooks and CSV files.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{LoadError, LoadResult};
use crate::model::{CellValue, CompanyTable};

/// Options controlling how a spreadsheet is read.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read. The first worksheet is used when unset.
    pub sheet: Option<String>,
}

impl LoadOptions {
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }
}

/// Load a spreadsheet, picking the reader from the file extension.
///
/// `.csv` goes through the CSV reader; everything else is handed to the
/// workbook reader (xlsx, xlsm, xlsb, xls, ods).
pub fn load_table(path: &Path, options: &LoadOptions) -> LoadResult<CompanyTable> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let result = if is_csv {
        load_csv_file(path)
    } else {
        load_excel_file(path, options.sheet.as_deref())
    };

    match &result {
        Ok(table) => tracing::info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers().len(),
            "loaded spreadsheet"
        ),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to load spreadsheet"),
    }
    result
}

/// Load a table from a CSV file with a header row.
pub fn load_csv_file(path: &Path) -> LoadResult<CompanyTable> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| header_name(i, h))
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(CellValue::from_raw).collect());
    }

    Ok(CompanyTable::new(headers, rows, path))
}

/// Load a table from one worksheet of an Excel or OpenDocument workbook.
pub fn load_excel_file(path: &Path, sheet: Option<&str>) -> LoadResult<CompanyTable> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::Read(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(LoadError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(LoadError::EmptyWorkbook)?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| LoadError::Read(e.to_string()))?;

    let (headers, rows) = split_header_row(&range);
    Ok(CompanyTable::new(headers, rows, path))
}

fn split_header_row(range: &Range<Data>) -> (Vec<String>, Vec<Vec<CellValue>>) {
    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(first) => first
            .iter()
            .enumerate()
            .map(|(i, cell)| header_name(i, &cell.to_string()))
            .collect(),
        None => Vec::new(),
    };
    let body = rows.map(|row| row.iter().map(cell_value).collect()).collect();
    (headers, body)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(_) => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

fn header_name(index: usize, raw: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        format!("Column_{}", index + 1)
    } else {
        name.to_string()
    }
}

fn open_error(path: &Path, e: io::Error) -> LoadError {
    if e.kind() == io::ErrorKind::NotFound {
        LoadError::FileNotFound(path.display().to_string())
    } else {
        LoadError::Read(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn write_workbook() -> NamedTempFile {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet().set_name("Financials").unwrap();
        for (col, header) in [" Company ", "Revenue", "Profit", ""].iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        sheet.write_string(1, 0, "Acme Corp").unwrap();
        sheet.write_number(1, 1, 1200).unwrap();
        sheet.write_number(1, 2, 300.5).unwrap();
        sheet.write_boolean(1, 3, true).unwrap();
        sheet.write_string(2, 0, "Globex").unwrap();
        sheet.write_string(2, 1, "800").unwrap();
        sheet.write_number(2, 2, -20).unwrap();

        let notes = workbook.add_worksheet().set_name("Notes").unwrap();
        notes.write_string(0, 0, "Remark").unwrap();
        notes.write_string(1, 0, "unaudited").unwrap();

        workbook.save(file.path()).unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Company,Revenue,Profit,Sector").unwrap();
        writeln!(file, "Acme,1200,300,Industrial").unwrap();
        writeln!(file, "Globex,800.5,-20,Energy").unwrap();

        let table = load_table(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(table.headers(), ["Company", "Revenue", "Profit", "Sector"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 1), &CellValue::Number(800.5));
        assert_eq!(table.cell(0, 3), &CellValue::Text("Industrial".into()));
    }

    #[test]
    fn test_blank_headers_get_positional_names() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, " Company ,,Profit").unwrap();
        writeln!(file, "Acme,1,2").unwrap();

        let table = load_csv_file(file.path()).unwrap();
        assert_eq!(table.headers(), ["Company", "Column_2", "Profit"]);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_table(Path::new("/no/such/Data212.xlsx"), &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));

        let err = load_table(Path::new("/no/such/data.csv"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn test_corrupt_workbook_is_a_read_error() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        writeln!(file, "this is not a zip archive").unwrap();

        let err = load_table(file.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Read(_)));
        assert!(err.to_string().starts_with("An error occurred:"));
    }

    #[test]
    fn test_load_workbook_first_sheet() {
        let file = write_workbook();
        let table = load_table(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(table.headers(), ["Company", "Revenue", "Profit", "Column_4"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 0), &CellValue::Text("Acme Corp".into()));
        assert_eq!(table.cell(0, 1), &CellValue::Number(1200.0));
        assert_eq!(table.cell(0, 2), &CellValue::Number(300.5));
        assert_eq!(table.cell(0, 3), &CellValue::Bool(true));
        assert_eq!(table.cell(1, 1).as_f64(), Some(800.0));
        assert_eq!(table.cell(1, 2), &CellValue::Number(-20.0));
        assert_eq!(table.cell(1, 3), &CellValue::Empty);
    }

    #[test]
    fn test_load_workbook_named_sheet() {
        let file = write_workbook();
        let table = load_table(file.path(), &LoadOptions::default().with_sheet("Notes")).unwrap();
        assert_eq!(table.headers(), ["Remark"]);
        assert_eq!(table.cell(0, 0), &CellValue::Text("unaudited".into()));

        let err = load_table(file.path(), &LoadOptions::default().with_sheet("Nope")).unwrap_err();
        assert!(matches!(err, LoadError::SheetNotFound(ref name) if name == "Nope"));
    }
}
