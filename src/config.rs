/// Configuration of truth table generation and display.
///
/// Use `Config::default()` for standard settings.
///
/// # Examples
///
/// ```
/// use logic_table::config::Config;
/// use logic_table::evaluate_expression_with_config;
///
/// let config = Config {
///     true_symbol: "V",
///     false_symbol: "F",
///     ..Config::default()
/// };
/// let table = evaluate_expression_with_config("p | ~p", &config).unwrap();
/// assert_eq!(table.rows[0].trace[0], "Variable p = F.");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    /// Maximum number of distinct variables (default: 16).
    ///
    /// Values above [`Config::HARD_LIMIT`] are treated as the hard limit.
    pub max_variables: usize,
    /// Maximum length of the normalized expression in characters (default: 4096).
    ///
    /// Node labels repeat their subexpressions, so their total size grows
    /// with the square of the expression length.
    pub max_length: usize,
    /// Display value of `true` (default: "T")
    pub true_symbol: &'static str,
    /// Display value of `false` (default: "F")
    pub false_symbol: &'static str,
    /// Display value of a cell in a row that failed to evaluate (default: "ERR")
    pub error_symbol: &'static str,
}

impl Config {
    /// Absolute ceiling on variables: `2^24` rows.
    pub const HARD_LIMIT: usize = 24;

    /// The effective variable ceiling.
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(Self::HARD_LIMIT)
    }

    pub fn bool_text(&self, value: bool) -> &'static str {
        if value {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_variables: 16,
            max_length: 4096,
            true_symbol: "T",
            false_symbol: "F",
            error_symbol: "ERR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_limit() {
        let config = Config::default();
        assert_eq!(config.variable_limit(), 16);
        let config = Config {
            max_variables: 100,
            ..Config::default()
        };
        assert_eq!(config.variable_limit(), Config::HARD_LIMIT);
    }

    #[test]
    fn test_default_length_limit() {
        assert_eq!(Config::default().max_length, 4096);
    }

    #[test]
    fn test_bool_text() {
        let config = Config::default();
        assert_eq!(config.bool_text(true), "T");
        assert_eq!(config.bool_text(false), "F");
    }
}
