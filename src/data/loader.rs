use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{Listing, ListingTable};

/// The dataset the dashboard reads at startup.
pub const DEFAULT_DATA_PATH: &str = "data/listings.parquet";

/// Schema violations in a source file. There is no recovery path; callers
/// surface these immediately.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedType { column: &'static str, dtype: String },
    #[error("null value in column '{column}' at row {row}")]
    NullValue { column: &'static str, row: usize },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a listing table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – columnar file with the six listing columns (recommended)
/// * `.csv`     – header row naming the listing columns
/// * `.json`    – `[{ "brand": ..., "model": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<ListingTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load listings from a Parquet file.
///
/// Required columns: `brand`, `model` (Utf8), `year`, `horsepower` (integer),
/// `odometer`, `price` (numeric).  Any other columns are ignored.  Works with
/// files written by both Pandas (`df.to_parquet()`) and Polars
/// (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<ListingTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut listings = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut listings)?;
    }

    Ok(ListingTable::from_listings(listings))
}

fn read_batch(batch: &RecordBatch, out: &mut Vec<Listing>) -> Result<()> {
    let brand = required_column(batch, "brand")?;
    let model = required_column(batch, "model")?;
    let year = required_column(batch, "year")?;
    let horsepower = required_column(batch, "horsepower")?;
    let odometer = required_column(batch, "odometer")?;
    let price = required_column(batch, "price")?;

    out.reserve(batch.num_rows());
    for row in 0..batch.num_rows() {
        out.push(Listing {
            brand: string_at(brand, "brand", row)?,
            model: string_at(model, "model", row)?,
            year: int_at(year, "year", row)?,
            horsepower: int_at(horsepower, "horsepower", row)?,
            odometer: float_at(odometer, "odometer", row)?,
            price: float_at(price, "price", row)?,
        });
    }
    Ok(())
}

// -- Arrow column helpers --

fn required_column<'a>(
    batch: &'a RecordBatch,
    name: &'static str,
) -> Result<&'a ArrayRef, SchemaError> {
    batch
        .column_by_name(name)
        .ok_or(SchemaError::MissingColumn(name))
}

fn unsupported(column: &'static str, col: &ArrayRef) -> SchemaError {
    SchemaError::UnsupportedType {
        column,
        dtype: format!("{:?}", col.data_type()),
    }
}

fn string_at(col: &ArrayRef, column: &'static str, row: usize) -> Result<String, SchemaError> {
    if col.is_null(row) {
        return Err(SchemaError::NullValue { column, row });
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| unsupported(column, col))?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        _ => Err(unsupported(column, col)),
    }
}

fn int_at(col: &ArrayRef, column: &'static str, row: usize) -> Result<i64, SchemaError> {
    if col.is_null(row) {
        return Err(SchemaError::NullValue { column, row });
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row))
        }
        _ => Err(unsupported(column, col)),
    }
}

fn float_at(col: &ArrayRef, column: &'static str, row: usize) -> Result<f64, SchemaError> {
    if col.is_null(row) {
        return Err(SchemaError::NullValue { column, row });
    }
    match col.data_type() {
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        // Integer columns are accepted for the float fields (e.g. a whole-km
        // odometer column written as Int64).
        DataType::Int32 | DataType::Int64 => int_at(col, column, row).map(|v| v as f64),
        _ => Err(unsupported(column, col)),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the listing columns, one listing per row.
fn load_csv(path: &Path) -> Result<ListingTable> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

fn read_csv<R: Read>(reader: R) -> Result<ListingTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut listings = Vec::new();

    for (row_no, result) in rdr.deserialize::<Listing>().enumerate() {
        listings.push(result.with_context(|| format!("CSV row {row_no}"))?);
    }

    Ok(ListingTable::from_listings(listings))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "brand": "Toyota",
///     "model": "Corolla",
///     "year": 2015,
///     "horsepower": 130,
///     "odometer": 80000.0,
///     "price": 12000.0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<ListingTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<ListingTable> {
    let listings: Vec<Listing> = serde_json::from_str(text).context("parsing JSON listings")?;
    Ok(ListingTable::from_listings(listings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("listings.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn csv_rows_parse_in_order() {
        let csv = "\
brand,model,year,horsepower,odometer,price
Toyota,Corolla,2015,130,80000,12000
BMW,X5,2018,250,60000.5,35000.0
";
        let table = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.listings[0].brand, "Toyota");
        assert_eq!(table.listings[1].odometer, 60_000.5);
        assert_eq!(table.brands, vec!["BMW", "Toyota"]);
    }

    #[test]
    fn csv_with_bad_cell_fails_with_row_context() {
        let csv = "\
brand,model,year,horsepower,odometer,price
Toyota,Corolla,not-a-year,130,80000,12000
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn json_records_parse_and_extra_fields_are_ignored() {
        let json = r#"[
            {"brand": "Toyota", "model": "Corolla", "year": 2015,
             "horsepower": 130, "odometer": 80000.0, "price": 12000.0,
             "seller": "private"},
            {"brand": "BMW", "model": "X5", "year": 2018,
             "horsepower": 250, "odometer": 60000.0, "price": 35000.0}
        ]"#;
        let table = parse_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.listings[1].horsepower, 250);
    }

    #[test]
    fn json_with_missing_field_fails() {
        let json = r#"[{"brand": "Toyota", "model": "Corolla"}]"#;
        assert!(parse_json(json).is_err());
    }

    #[test]
    fn parquet_round_trip_with_mixed_numeric_types() {
        use std::sync::Arc;

        use arrow::datatypes::{Field, Schema};
        use parquet::arrow::ArrowWriter;

        // Int32 year/horsepower and Float32 odometer exercise the widening
        // paths in int_at/float_at.
        let schema = Arc::new(Schema::new(vec![
            Field::new("brand", DataType::Utf8, false),
            Field::new("model", DataType::Utf8, false),
            Field::new("year", DataType::Int32, false),
            Field::new("horsepower", DataType::Int32, false),
            Field::new("odometer", DataType::Float32, false),
            Field::new("price", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Toyota", "BMW"])),
                Arc::new(StringArray::from(vec!["Corolla", "X5"])),
                Arc::new(Int32Array::from(vec![2015, 2018])),
                Arc::new(Int32Array::from(vec![130, 250])),
                Arc::new(Float32Array::from(vec![80_000.0, 60_000.0])),
                Arc::new(Float64Array::from(vec![12_000.0, 35_000.0])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "car_scope_loader_test_{}.parquet",
            std::process::id()
        ));
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.len(), 2);
        assert_eq!(table.listings[0].year, 2015);
        assert_eq!(table.listings[0].odometer, 80_000.0);
        assert_eq!(table.listings[1].price, 35_000.0);
    }

    #[test]
    fn parquet_missing_column_is_reported() {
        use std::sync::Arc;

        use arrow::datatypes::{Field, Schema};
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![Field::new(
            "brand",
            DataType::Utf8,
            false,
        )]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(StringArray::from(vec!["Toyota"]))],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "car_scope_loader_missing_{}.parquet",
            std::process::id()
        ));
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("missing required column 'model'"));
    }
}
