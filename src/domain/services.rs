//! Evaluation services for the calculator.
//!
//! This module provides the evaluation engine facade that turns expression
//! text into numbers, and the formatting rule that turns numbers back into
//! display strings.

use super::errors::{EvalError, EvalResult};
use super::parser::{ExpressionEvaluator, FunctionRegistry, Parser};

/// The expression evaluation engine.
///
/// Wraps the lexer, parser, and function registry behind a single call. The
/// evaluator is a pure function of its input text: it holds no expression
/// state and can be invoked on every keystroke.
///
/// Evaluation returns `Result` rather than a display string on purpose: the
/// decision of what to show for a failure belongs to the calling session, not
/// to the engine.
///
/// # Examples
///
/// ```
/// use tcalc::domain::Evaluator;
///
/// let evaluator = Evaluator::new();
///
/// assert_eq!(evaluator.evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluator.evaluate("6×7").unwrap(), 42.0);
/// assert!(evaluator.evaluate("5/0").is_err());
/// ```
#[derive(Debug)]
pub struct Evaluator {
    functions: FunctionRegistry,
}

impl Evaluator {
    /// Creates a new evaluator with the built-in function set.
    pub fn new() -> Self {
        Self {
            functions: FunctionRegistry::new(),
        }
    }

    /// Parses and evaluates an expression to a finite `f64`.
    ///
    /// Any failure (unbalanced parentheses, an unknown token, a trailing
    /// operator, a malformed function call, division by zero, a non-finite
    /// result) is reported as an [`EvalError`].
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let mut parser = Parser::new(expression)?;
        let ast = parser.parse()?;

        let value = ExpressionEvaluator::new(&self.functions).evaluate(&ast)?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFiniteResult)
        }
    }

    /// Formats an evaluation result for display.
    ///
    /// Integral values render with no decimal point. Fractional values render
    /// with six digits after the point, then trailing zeros and a trailing
    /// lone point are stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tcalc::domain::Evaluator;
    ///
    /// assert_eq!(Evaluator::format_value(2.0), "2");
    /// assert_eq!(Evaluator::format_value(2.5000001), "2.5");
    /// assert_eq!(Evaluator::format_value(-0.125), "-0.125");
    /// ```
    pub fn format_value(value: f64) -> String {
        // i64 casts are exact well past this bound; larger integral values
        // take the fixed-point path below, which carries no fraction to trim.
        if value.fract() == 0.0 && value.abs() < 1e15 {
            return format!("{}", value as i64);
        }

        let fixed = format!("{:.6}", value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
