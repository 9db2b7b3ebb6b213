use asciifig::stocks::max_profit;

pub fn run(prices: &[f64]) -> Result<(), i32> {
    println!("{}", max_profit(prices));
    Ok(())
}
