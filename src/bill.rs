// 🧾 Bill - named list of priced items with a plain-text breakdown
//
// Items are kept as an ordered list so the breakdown is identical on every
// run. The display name is the only field that changes after construction.

use serde::Serialize;

/// Items every new bill starts with, in display order
pub const CATALOG: [(&str, f64); 2] = [("pie", 5.99), ("cake", 7.99)];

/// Identifier given to every new bill
pub const BILL_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub id: u32,
    pub items: Vec<LineItem>,
    pub name: String,
}

impl Bill {
    /// Create a bill for `name` holding the fixed catalog
    pub fn new(name: impl Into<String>) -> Self {
        let items = CATALOG
            .iter()
            .map(|(item, price)| LineItem {
                name: item.to_string(),
                price: *price,
            })
            .collect();

        Self {
            id: BILL_ID,
            items,
            name: name.into(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Render the breakdown table.
    ///
    /// Item prices use their shortest form, the total always two decimals.
    /// The last line has no trailing newline.
    pub fn format(&self) -> String {
        let mut out = String::from("Bill breakdown: \n");

        out.push_str(&format!("{:<15}  {:>5}\n \n", "Name:", self.name));

        for item in &self.items {
            let label = format!("{}:", item.name);
            out.push_str(&format!("{:<15}  ...${:>5} \n", label, item.price));
        }

        out.push_str(&format!("{:<15}  ...${:>3.2}", "Total:", self.total()));

        out
    }
}
