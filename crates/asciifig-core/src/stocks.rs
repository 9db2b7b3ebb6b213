//! Greedy stock-profit scan.

/// Maximum total profit from a sequence of daily quotes.
///
/// Each day one unit may be bought, and any number of previously bought
/// units may be sold. The optimum is to buy every day that a higher price
/// follows and sell everything at that maximum, which reduces to a single
/// right-to-left scan: track the running maximum and add its distance to
/// each quote.
///
/// ```
/// use asciifig_core::stocks::max_profit;
///
/// assert_eq!(max_profit(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), 15.0);
/// assert_eq!(max_profit(&[1.0, 6.0, 5.0, 10.0, 8.0, 7.0]), 18.0);
/// ```
pub fn max_profit(quotes: &[f64]) -> f64 {
    let mut profit = 0.0;
    let mut max_price = 0.0_f64;

    for &price in quotes.iter().rev() {
        if price > max_price {
            max_price = price;
        }
        profit += max_price - price;
    }
    profit
}
