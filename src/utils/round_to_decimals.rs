/// Rounds `value` to `places` decimal places.
///
/// Rounds the exact binary value, with exact ties going to the even digit,
/// so `0.03125` becomes `0.0312`.
pub fn round_to_decimals(value: f64, places: i32) -> f64 {
    let places = places.max(0) as usize;

    format!("{:.*}", places, value).parse().unwrap_or(value)
}
