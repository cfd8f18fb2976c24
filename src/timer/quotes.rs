//! Motivational quotes shown when a work phase completes.

use rand::seq::IndexedRandom;

/// The fixed quote pool.
pub const QUOTES: [&str; 5] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "The future depends on what you do today. - Mahatma Gandhi",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
];

/// Pick a random quote from the pool.
#[must_use]
pub fn random_quote() -> &'static str {
    let mut rng = rand::rng();
    QUOTES.choose(&mut rng).copied().unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_quote_is_from_pool() {
        for _ in 0..20 {
            assert!(QUOTES.contains(&random_quote()));
        }
    }
}
