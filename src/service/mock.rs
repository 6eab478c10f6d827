use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;

const CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "INR"];
const PURPOSES: [&str; 4] = ["car", "house", "boat", "business"];

/// Generate a mock CSV file with random requests. This is used to exercise
/// the ledger end to end.
pub fn generator(output: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["type", "amount", "currency", "purpose"])?;

    let mut rng = rand::rng();
    let mut loan_open = false;

    for _ in 0..count {
        // Mostly deposits and withdrawals, with the occasional loan cycle
        let roll = rng.random_range(0..10);

        if roll < 5 {
            let amount = format!("{:.2}", 10.0 + rng.random_range(0.0..500.0));
            let currency = *CURRENCIES.choose(&mut rng).unwrap_or(&"USD");
            wtr.write_record(["deposit", &amount, currency, ""])?;
        } else if roll < 8 {
            let amount = format!("{:.2}", 5.0 + rng.random_range(0.0..200.0));
            wtr.write_record(["withdraw", &amount, "", ""])?;
        } else if !loan_open {
            let amount = format!("{:.2}", 500.0 + rng.random_range(0.0..2000.0));
            let purpose = *PURPOSES.choose(&mut rng).unwrap_or(&"car");
            wtr.write_record(["loan", &amount, "", purpose])?;
            loan_open = true;
        } else {
            wtr.write_record(["payloan", "", "", ""])?;
            loan_open = false;
        }
    }

    wtr.flush()?;
    println!("✓ Generated {} requests to {}", count, output);
    Ok(())
}
