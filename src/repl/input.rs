//! REPL input tokenization
//!
//! Splits a raw input line into lowercase words.

// == Tokenize ==
/// Splits a line on whitespace and lowercases each word.
///
/// Leading, trailing, and repeated whitespace all collapse; an empty or
/// all-whitespace line yields no words.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_cases() {
        let cases: &[(&str, &[&str])] = &[
            ("  hello  world  ", &["hello", "world"]),
            ("Charmander Bulbasaur PIKACHU", &["charmander", "bulbasaur", "pikachu"]),
            (" Charmander Bulbasaur PIKACHU ", &["charmander", "bulbasaur", "pikachu"]),
            (
                " h e l l  o wo r ll d ",
                &["h", "e", "l", "l", "o", "wo", "r", "ll", "d"],
            ),
        ];

        for (input, expected) in cases {
            let result = tokenize(input);
            assert_eq!(result, *expected, "failed parsing input {input:?}");
        }
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }
}
