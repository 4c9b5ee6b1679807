use itertools::Itertools;

use super::board::Point;

pub const HEADER: &str = "🔹 Safe Spot Predictions:";

fn spot_line(spot: &Point) -> String {
    format!("👉 Row {}, Column {}", spot.row() + 1, spot.col() + 1)
}

pub fn display_safe_spots(spots: &[Point]) -> String {
    std::iter::once(HEADER.to_owned())
        .chain(spots.iter().map(spot_line))
        .map(|line| line + "\n")
        .join("")
}

pub fn format_bet(bet_amount: f64) -> String {
    format!("💰 Bet Amount: ${:.2}", bet_amount)
}

/// Full reply for a finished form.
pub fn display_prediction(spots: &[Point], bet_amount: f64) -> String {
    format!("{}\n{}", display_safe_spots(spots), format_bet(bet_amount))
}
