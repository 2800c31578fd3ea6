//! CSV readers for net-supply tables and interconnector availability.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::supply::NetSupplySeries;
use crate::units::daily_energy_twh;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no column `{wanted}` (found: {})", available.join(", "))]
    MissingColumn {
        wanted: String,
        available: Vec<String>,
    },

    #[error("row {row}, column `{column}`: cannot parse `{value}` as a number")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}

/// Renewable capacity (GW) a net-supply column header stands for.
///
/// Accepts bare numbers (`250`) and labelled headers (`S-D(TWh),Ren=250GW`).
pub fn column_capacity_gw(header: &str) -> Option<f64> {
    let header = header.trim();
    if let Ok(value) = header.parse::<f64>() {
        return Some(value);
    }
    let (_, rest) = header.split_once("Ren=")?;
    let end = rest.find("GW")?;
    rest[..end].trim().parse().ok()
}

/// Reads the net-supply column for `renewable_capacity_gw` from a CSV file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read, no column matches the
/// capacity, or a cell in that column is not a number.
pub fn read_net_supply(
    path: &Path,
    renewable_capacity_gw: f64,
) -> Result<NetSupplySeries, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_net_supply_from(reader, renewable_capacity_gw)
}

/// Reads the net-supply column for `renewable_capacity_gw` from any CSV reader.
///
/// # Errors
///
/// See [`read_net_supply`].
pub fn read_net_supply_from<R: Read>(
    mut reader: csv::Reader<R>,
    renewable_capacity_gw: f64,
) -> Result<NetSupplySeries, LoadError> {
    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| {
            column_capacity_gw(h).is_some_and(|gw| (gw - renewable_capacity_gw).abs() < 1e-9)
        })
        .ok_or_else(|| LoadError::MissingColumn {
            wanted: format!("{renewable_capacity_gw} GW"),
            available: headers.iter().map(str::to_string).collect(),
        })?;
    let values = read_column_values(&mut reader, index, &headers[index])?;
    Ok(NetSupplySeries::new(values))
}

/// Reads a named column of available import power (GW) and converts it to TWh/day.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read, the column is absent, or
/// a cell in it is not a number.
pub fn read_interconnect_imports(path: &Path, column: &str) -> Result<Vec<f64>, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_interconnect_imports_from(reader, column)
}

/// Reader-based variant of [`read_interconnect_imports`].
///
/// # Errors
///
/// See [`read_interconnect_imports`].
pub fn read_interconnect_imports_from<R: Read>(
    mut reader: csv::Reader<R>,
    column: &str,
) -> Result<Vec<f64>, LoadError> {
    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn {
            wanted: column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })?;
    let power_gw = read_column_values(&mut reader, index, column)?;
    Ok(power_gw.into_iter().map(daily_energy_twh).collect())
}

fn read_column_values<R: Read>(
    reader: &mut csv::Reader<R>,
    index: usize,
    column: &str,
) -> Result<Vec<f64>, LoadError> {
    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let cell = record.get(index).unwrap_or("");
        let value = cell.parse::<f64>().map_err(|_| LoadError::InvalidValue {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn header_forms() {
        assert_eq!(column_capacity_gw("250"), Some(250.0));
        assert_eq!(column_capacity_gw(" 300.5 "), Some(300.5));
        assert_eq!(column_capacity_gw("S-D(TWh),Ren=250GW"), Some(250.0));
        assert_eq!(column_capacity_gw("date"), None);
        assert_eq!(column_capacity_gw("Ren=abcGW"), None);
    }

    #[test]
    fn picks_bare_numeric_column() {
        let data = "date,200,250\n2010-01-01,1.5,2.5\n2010-01-02,-0.5,-0.25\n";
        let series = read_net_supply_from(reader(data), 250.0).expect("column present");
        assert_eq!(series.as_slice(), &[2.5, -0.25]);
    }

    #[test]
    fn picks_labelled_column() {
        let data = "day,\"S-D(TWh),Ren=200GW\",\"S-D(TWh),Ren=250GW\"\n0,1.0,2.0\n1,3.0,4.0\n";
        let series = read_net_supply_from(reader(data), 200.0).expect("column present");
        assert_eq!(series.as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn missing_capacity_lists_columns() {
        let data = "date,200\n2010-01-01,1.5\n";
        let err = read_net_supply_from(reader(data), 250.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("250 GW"));
        assert!(message.contains("date, 200"));
    }

    #[test]
    fn bad_cell_reports_row() {
        let data = "250\n1.0\noops\n";
        let err = read_net_supply_from(reader(data), 250.0).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { row: 1, .. }));
    }

    #[test]
    fn imports_convert_gigawatts_to_daily_energy() {
        let data = "date,available_gw\n2010-01-01,50\n2010-01-02,0\n";
        let imports =
            read_interconnect_imports_from(reader(data), "available_gw").expect("column present");
        assert_eq!(imports, vec![1.2, 0.0]);
    }
}
