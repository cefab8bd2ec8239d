use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Brand → models with new-car price (EUR) and factory horsepower.
const CATALOG: &[(&str, &[(&str, f64, f64)])] = &[
    ("Audi", &[("A3", 38_000.0, 150.0), ("A4", 48_000.0, 204.0), ("Q5", 58_000.0, 265.0)]),
    ("BMW", &[("3er", 50_000.0, 184.0), ("5er", 62_000.0, 245.0), ("X5", 82_000.0, 340.0)]),
    ("Ford", &[("Fiesta", 20_000.0, 100.0), ("Focus", 28_000.0, 125.0), ("Kuga", 36_000.0, 190.0)]),
    ("Toyota", &[("Yaris", 21_000.0, 116.0), ("Corolla", 30_000.0, 140.0), ("RAV4", 42_000.0, 222.0)]),
    ("Volkswagen", &[("Polo", 22_000.0, 95.0), ("Golf", 32_000.0, 130.0), ("Tiguan", 40_000.0, 190.0)]),
];

const CURRENT_YEAR: i64 = 2025;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }
}

/// One synthetic listing for a catalog model: pick a registration year, drive
/// the odometer with age, then depreciate the new price by age and mileage.
fn generate_listing(
    rng: &mut SimpleRng,
    new_price: f64,
    factory_hp: f64,
) -> (i64, i64, f64, f64) {
    let year = rng.range(1996, 2025) as i64;
    let age = (CURRENT_YEAR - year) as f64;

    let odometer = (age * rng.gauss(13_500.0, 4_500.0)).clamp(0.0, 290_000.0);
    let horsepower = rng.gauss(factory_hp, factory_hp * 0.08).round().max(45.0) as i64;
    let price = (new_price * 0.87f64.powf(age) * (1.0 - odometer / 1.0e6)
        * rng.gauss(1.0, 0.08))
    .max(800.0);

    (year, horsepower, odometer, price)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut brands: Vec<String> = Vec::new();
    let mut models: Vec<String> = Vec::new();
    let mut years: Vec<i64> = Vec::new();
    let mut horsepowers: Vec<i64> = Vec::new();
    let mut odometers: Vec<f64> = Vec::new();
    let mut prices: Vec<f64> = Vec::new();

    for &(brand, model_specs) in CATALOG {
        for &(model, new_price, factory_hp) in model_specs {
            // Uneven group sizes so the option counts differ visibly.
            let count = rng.range(30, 80);
            for _ in 0..count {
                let (year, horsepower, odometer, price) =
                    generate_listing(&mut rng, new_price, factory_hp);

                brands.push(brand.to_string());
                models.push(model.to_string());
                years.push(year);
                horsepowers.push(horsepower);
                odometers.push(odometer);
                prices.push(price);
            }
        }
    }
    let n_rows = brands.len();

    let schema = Arc::new(Schema::new(vec![
        Field::new("brand", DataType::Utf8, false),
        Field::new("model", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("horsepower", DataType::Int64, false),
        Field::new("odometer", DataType::Float64, false),
        Field::new("price", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                brands.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                models.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(years)),
            Arc::new(Int64Array::from(horsepowers)),
            Arc::new(Float64Array::from(odometers)),
            Arc::new(Float64Array::from(prices)),
        ],
    )
    .context("creating RecordBatch")?;

    let output_path = "data/listings.parquet";
    std::fs::create_dir_all("data").context("creating data directory")?;
    let file = std::fs::File::create(output_path).context("creating output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;

    println!("Wrote {n_rows} listings to {output_path}");
    Ok(())
}
