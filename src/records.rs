// Bill records served by the listing API
//
// The list is a fixed literal, rebuilt on every call. Nothing mutates it
// and nothing outlives the response that carries it.

use serde::{Serialize, Serializer};

/// A single bill as exposed by `GET /api/bills`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillRecord {
    pub id: u32,

    /// Decimal amount; whole values go on the wire without a fraction
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,

    pub payee: String,
    pub category: String,

    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

impl BillRecord {
    pub fn new(id: u32, amount: f64, payee: &str, category: &str, date: &str) -> Self {
        Self {
            id,
            amount,
            payee: payee.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        }
    }
}

/// The two bills every listing returns
pub fn sample_bills() -> Vec<BillRecord> {
    vec![
        BillRecord::new(1, 100.0, "John Doe", "Groceries", "2022-01-01"),
        BillRecord::new(2, 200.0, "Jane Smith", "Rent", "2022-02-01"),
    ]
}

// serde_json writes every f64 with a fraction (`100.0`); listing clients
// expect `100` for whole amounts.
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
