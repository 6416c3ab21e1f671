/// Formats a non-negative integer as an English ordinal ("1st", "22nd", "113th").
pub fn ordinal(value: u64) -> String {
    let suffix = if (value % 100) / 10 == 1 {
        "th"
    } else {
        match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", value, suffix)
}
