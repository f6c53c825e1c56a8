//! Application state management for the terminal calculator.
//!
//! This module contains the calculator session (the input state machine that
//! turns button presses into expression edits) and the shell state that the
//! terminal user interface renders from.

use crate::domain::{Evaluator, HistoryEntry};

/// The result string shown while the current expression does not evaluate.
///
/// Distinct from the `"0"` shown for an empty expression, so that a blank
/// calculator and a malformed expression are distinguishable and `=` can
/// refuse to commit garbage.
pub const ERROR_RESULT: &str = "Error";

/// Binary operator characters as stored in the expression buffer.
fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '^')
}

/// True if a split part is a single binary-operator character.
fn is_operator_part(part: &str) -> bool {
    let mut chars = part.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if is_operator(ch))
}

/// A calculator session: the expression buffer, its live result, the
/// committed history, and the two display-mode flags.
///
/// Every button event edits the expression text and immediately re-evaluates
/// it, so `result()` is always current. Admission rules (no doubled
/// operators, one decimal point per numeric run, numeric-only targets for
/// `±`/`%`/`x²`) are enforced as silent no-ops.
///
/// # Examples
///
/// ```
/// use tcalc::application::Calculator;
///
/// let mut calc = Calculator::default();
/// calc.on_button("2");
/// calc.on_button("+");
/// calc.on_button("2");
/// assert_eq!(calc.expression(), "2+2");
/// assert_eq!(calc.result(), "4");
///
/// calc.on_button("=");
/// assert_eq!(calc.expression(), "4");
/// assert_eq!(calc.history().len(), 1);
/// ```
#[derive(Debug)]
pub struct Calculator {
    expression: String,
    result: String,
    history: Vec<HistoryEntry>,
    dark_theme: bool,
    scientific_mode: bool,
    evaluator: Evaluator,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            expression: String::new(),
            result: "0".to_string(),
            history: Vec::new(),
            dark_theme: true,
            scientific_mode: false,
            evaluator: Evaluator::new(),
        }
    }
}

impl Calculator {
    /// The current expression text.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The formatted result of the current expression: `"0"` while the
    /// expression is empty, [`ERROR_RESULT`] while it does not evaluate.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// The committed calculations, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    pub fn is_scientific_mode(&self) -> bool {
        self.scientific_mode
    }

    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
    }

    pub fn toggle_scientific_mode(&mut self) {
        self.scientific_mode = !self.scientific_mode;
    }

    /// Handles a standard keypad button.
    ///
    /// Tokens: digits `0`–`9`, `+ - × ÷ ^`, `.`, `=`, `C`, `⌫`, `±`, `%`.
    /// The ASCII forms `*` and `/` are accepted as aliases for the glyphs.
    pub fn on_button(&mut self, button: &str) {
        match button {
            "C" => self.clear(),
            "⌫" => self.backspace(),
            "=" => self.commit(),
            "±" => self.toggle_sign(),
            "%" => self.percentage(),
            "×" | "*" => self.append_operator('*'),
            "÷" | "/" => self.append_operator('/'),
            "+" => self.append_operator('+'),
            "-" => self.append_operator('-'),
            "^" => self.append_operator('^'),
            "." => self.append_decimal(),
            _ => self.append_digit(button),
        }
    }

    /// Handles an extended keypad button (scientific mode).
    pub fn on_scientific_button(&mut self, button: &str) {
        match button {
            "sin" => self.append_function("sin("),
            "cos" => self.append_function("cos("),
            "tan" => self.append_function("tan("),
            "ln" => self.append_function("ln("),
            "log" => self.append_function("log10("),
            "√" => self.append_function("sqrt("),
            "x²" => self.square(),
            "x^y" => self.append_operator('^'),
            "π" => self.append_constant("π"),
            "e" => self.append_constant("e"),
            "(" => self.append_bracket('('),
            ")" => self.append_bracket(')'),
            _ => {}
        }
    }

    /// Replaces the expression wholesale (used when a history entry is
    /// selected) and re-evaluates.
    pub fn set_expression(&mut self, text: &str) {
        self.expression = text.to_string();
        self.recalculate();
    }

    /// Empties the history list.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn clear(&mut self) {
        self.expression.clear();
        self.result = "0".to_string();
    }

    fn backspace(&mut self) {
        if self.expression.pop().is_some() {
            self.recalculate();
        }
    }

    fn append_digit(&mut self, digit: &str) {
        self.expression.push_str(digit);
        self.recalculate();
    }

    /// Appends a binary operator, unless the expression is empty or already
    /// ends in one. The result is deliberately left untouched: it keeps
    /// showing the value of the operand-complete prefix.
    fn append_operator(&mut self, operator: char) {
        let last = self.expression.chars().last();
        if last.is_some_and(|ch| !is_operator(ch)) {
            self.expression.push(operator);
        }
    }

    /// Appends a decimal point to the trailing numeric run, if that run does
    /// not already contain one. A point starting a new operand becomes `0.`.
    fn append_decimal(&mut self) {
        let trailing_run = self.expression.split(is_operator).last().unwrap_or("");
        if trailing_run.contains('.') {
            return;
        }

        let needs_leading_zero = self
            .expression
            .chars()
            .last()
            .is_none_or(is_operator);
        if needs_leading_zero {
            self.expression.push_str("0.");
        } else {
            self.expression.push('.');
        }
        self.recalculate();
    }

    /// Appends a function-call prefix such as `sin(`. The unterminated call
    /// fails evaluation harmlessly until the argument is completed.
    fn append_function(&mut self, function: &str) {
        self.expression.push_str(function);
        self.recalculate();
    }

    fn append_constant(&mut self, constant: &str) {
        self.expression.push_str(constant);
        self.recalculate();
    }

    fn append_bracket(&mut self, bracket: char) {
        self.expression.push(bracket);
        self.recalculate();
    }

    /// Toggles the sign of the trailing operand.
    ///
    /// The expression splits into operand and operator parts; if the trailing
    /// part is a number, a unary `-` part in front of it is removed when
    /// present and inserted when not, so repeated presses round-trip:
    /// `12+8` ⇄ `12+-8`. A non-numeric trailing part makes this a no-op.
    fn toggle_sign(&mut self) {
        let parts = split_keeping_operators(&self.expression);

        let Some(&last) = parts.last() else {
            return;
        };
        if last.parse::<f64>().is_err() {
            return;
        }

        let n = parts.len();
        let has_sign_part = n >= 2
            && parts[n - 2] == "-"
            && (n == 2 || is_operator_part(parts[n - 3]));

        if has_sign_part {
            self.expression = format!("{}{}", parts[..n - 2].concat(), last);
        } else {
            self.expression = format!("{}-{}", parts[..n - 1].concat(), last);
        }
        self.recalculate();
    }

    /// Replaces a bare numeric expression with itself divided by 100,
    /// reformatted through the evaluator's display rule.
    fn percentage(&mut self) {
        if let Ok(value) = self.expression.parse::<f64>() {
            self.expression = Evaluator::format_value(value / 100.0);
            self.recalculate();
        }
    }

    /// Wraps a bare numeric expression as `(expr)^2`.
    fn square(&mut self) {
        if self.expression.parse::<f64>().is_ok() {
            self.expression = format!("({})^2", self.expression);
            self.recalculate();
        }
    }

    /// Commits the current calculation: appends `(expression, result)` to
    /// history and seeds the next expression with the result, so a following
    /// operator chains onto it. A no-op while the expression is empty or the
    /// result is [`ERROR_RESULT`].
    fn commit(&mut self) {
        if self.expression.is_empty() || self.result == ERROR_RESULT {
            return;
        }

        self.history
            .push(HistoryEntry::new(self.expression.clone(), self.result.clone()));
        self.expression = self.result.clone();
        self.recalculate();
    }

    /// Re-derives the result from the expression text.
    fn recalculate(&mut self) {
        if self.expression.is_empty() {
            self.result = "0".to_string();
            return;
        }

        self.result = match self.evaluator.evaluate(&self.expression) {
            Ok(value) => Evaluator::format_value(value),
            Err(_) => ERROR_RESULT.to_string(),
        };
    }
}

/// Splits an expression into operand and operator parts, keeping each
/// operator as its own part: `"12+-8"` → `["12", "+", "-", "8"]`.
fn split_keeping_operators(expression: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (index, ch) in expression.char_indices() {
        if is_operator(ch) {
            if index > start {
                parts.push(&expression[start..index]);
            }
            let end = index + ch.len_utf8();
            parts.push(&expression[index..end]);
            start = end;
        }
    }
    if start < expression.len() {
        parts.push(&expression[start..]);
    }

    parts
}

/// Represents the current mode of the terminal shell.
#[derive(Debug)]
pub enum AppMode {
    /// Keypad input goes to the calculator
    Normal,
    /// History overlay is open
    History,
    /// Help screen is displayed
    Help,
}

/// Shell state wrapping a [`Calculator`] session with the presentation-only
/// bits the terminal interface needs: the current mode, overlay positions,
/// and a transient status message.
#[derive(Debug)]
pub struct App {
    /// The calculator session
    pub calculator: Calculator,
    /// Current shell mode
    pub mode: AppMode,
    /// Selected row in the history overlay
    pub history_cursor: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            calculator: Calculator::default(),
            mode: AppMode::Normal,
            history_cursor: 0,
            help_scroll: 0,
            status_message: None,
        }
    }
}

impl App {
    /// Opens the history overlay with the newest entry selected.
    pub fn open_history(&mut self) {
        self.mode = AppMode::History;
        self.history_cursor = self.calculator.history().len().saturating_sub(1);
        self.status_message = None;
    }

    /// Opens the help overlay.
    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
        self.status_message = None;
    }

    /// Closes whichever overlay is open.
    pub fn close_overlay(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn history_cursor_up(&mut self) {
        if self.history_cursor > 0 {
            self.history_cursor -= 1;
        }
    }

    pub fn history_cursor_down(&mut self) {
        let len = self.calculator.history().len();
        if len > 0 && self.history_cursor < len - 1 {
            self.history_cursor += 1;
        }
    }

    /// Loads the selected history entry into the expression and returns to
    /// normal mode.
    pub fn select_history_entry(&mut self) {
        if let Some(entry) = self.calculator.history().get(self.history_cursor) {
            let expression = entry.expression.clone();
            self.calculator.set_expression(&expression);
        }
        self.mode = AppMode::Normal;
    }

    /// Empties the history list, keeping the overlay open.
    pub fn clear_history(&mut self) {
        self.calculator.clear_history();
        self.history_cursor = 0;
        self.status_message = Some("History cleared".to_string());
    }

    /// Processes the result of a clipboard copy.
    pub fn set_clipboard_result(&mut self, result: Result<(), String>) {
        self.status_message = Some(match result {
            Ok(()) => format!("Copied {} to clipboard", self.calculator.result()),
            Err(error) => format!("Copy failed: {}", error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, buttons: &str) {
        for ch in buttons.chars() {
            calc.on_button(&ch.to_string());
        }
    }

    #[test]
    fn test_calculator_default() {
        let calc = Calculator::default();
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.result(), "0");
        assert!(calc.history().is_empty());
        assert!(calc.is_dark_theme());
        assert!(!calc.is_scientific_mode());
    }

    #[test]
    fn test_digit_entry_evaluates_live() {
        let mut calc = Calculator::default();
        press(&mut calc, "12");
        assert_eq!(calc.expression(), "12");
        assert_eq!(calc.result(), "12");

        press(&mut calc, "+34");
        assert_eq!(calc.expression(), "12+34");
        assert_eq!(calc.result(), "46");
    }

    #[test]
    fn test_operator_requires_nonempty_expression() {
        let mut calc = Calculator::default();
        calc.on_button("+");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_operator_after_operator_is_dropped() {
        let mut calc = Calculator::default();
        press(&mut calc, "5+");
        calc.on_button("+");
        calc.on_button("×");
        assert_eq!(calc.expression(), "5+");

        // Result still shows the last complete value
        assert_eq!(calc.result(), "5");
    }

    #[test]
    fn test_glyph_operators_store_canonical_characters() {
        let mut calc = Calculator::default();
        calc.on_button("6");
        calc.on_button("×");
        calc.on_button("7");
        assert_eq!(calc.expression(), "6*7");
        assert_eq!(calc.result(), "42");

        calc.on_button("÷");
        calc.on_button("2");
        assert_eq!(calc.expression(), "6*7/2");
        assert_eq!(calc.result(), "21");
    }

    #[test]
    fn test_decimal_appends_to_trailing_run() {
        let mut calc = Calculator::default();
        press(&mut calc, "3.5+2");
        calc.on_button(".");
        assert_eq!(calc.expression(), "3.5+2.");

        // Second decimal point in the same run is a no-op
        calc.on_button(".");
        assert_eq!(calc.expression(), "3.5+2.");
    }

    #[test]
    fn test_decimal_gets_leading_zero() {
        let mut calc = Calculator::default();
        calc.on_button(".");
        assert_eq!(calc.expression(), "0.");

        let mut calc = Calculator::default();
        press(&mut calc, "5+");
        calc.on_button(".");
        assert_eq!(calc.expression(), "5+0.");
    }

    #[test]
    fn test_backspace_removes_one_character() {
        let mut calc = Calculator::default();
        press(&mut calc, "12+3");
        calc.on_button("⌫");
        assert_eq!(calc.expression(), "12+");
        calc.on_button("⌫");
        assert_eq!(calc.expression(), "12");
        assert_eq!(calc.result(), "12");
    }

    #[test]
    fn test_backspace_to_empty_resets_result() {
        let mut calc = Calculator::default();
        calc.on_button("7");
        calc.on_button("⌫");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.result(), "0");

        // Backspace on empty stays a no-op
        calc.on_button("⌫");
        assert_eq!(calc.result(), "0");
    }

    #[test]
    fn test_clear_resets_unconditionally() {
        let mut calc = Calculator::default();
        press(&mut calc, "5/0");
        assert_eq!(calc.result(), ERROR_RESULT);

        calc.on_button("C");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.result(), "0");
    }

    #[test]
    fn test_equals_commits_and_chains() {
        let mut calc = Calculator::default();
        press(&mut calc, "2+2");
        calc.on_button("=");

        assert_eq!(calc.result(), "4");
        assert_eq!(calc.expression(), "4");
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history()[0].expression, "2+2");
        assert_eq!(calc.history()[0].result, "4");

        // Chained arithmetic continues from the previous result
        press(&mut calc, "+3");
        calc.on_button("=");
        assert_eq!(calc.result(), "7");
        assert_eq!(calc.expression(), "7");
        assert_eq!(calc.history().len(), 2);
        assert_eq!(calc.history()[1].expression, "4+3");
        assert_eq!(calc.history()[1].result, "7");
    }

    #[test]
    fn test_equals_on_empty_expression_is_noop() {
        let mut calc = Calculator::default();
        calc.on_button("=");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.result(), "0");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_equals_on_error_is_noop() {
        let mut calc = Calculator::default();
        press(&mut calc, "5/0");
        assert_eq!(calc.result(), ERROR_RESULT);

        calc.on_button("=");
        assert_eq!(calc.expression(), "5/0");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_sign_toggle_on_trailing_operand() {
        let mut calc = Calculator::default();
        press(&mut calc, "12+8");
        calc.on_button("±");
        assert_eq!(calc.expression(), "12+-8");
        assert_eq!(calc.result(), "4");

        // Toggling again restores the original form
        calc.on_button("±");
        assert_eq!(calc.expression(), "12+8");
        assert_eq!(calc.result(), "20");
    }

    #[test]
    fn test_sign_toggle_on_bare_number() {
        let mut calc = Calculator::default();
        calc.on_button("8");
        calc.on_button("±");
        assert_eq!(calc.expression(), "-8");
        assert_eq!(calc.result(), "-8");

        calc.on_button("±");
        assert_eq!(calc.expression(), "8");
    }

    #[test]
    fn test_sign_toggle_after_binary_minus() {
        let mut calc = Calculator::default();
        press(&mut calc, "5-3");
        calc.on_button("±");
        assert_eq!(calc.expression(), "5--3");
        assert_eq!(calc.result(), "8");

        calc.on_button("±");
        assert_eq!(calc.expression(), "5-3");
        assert_eq!(calc.result(), "2");
    }

    #[test]
    fn test_sign_toggle_noop_on_non_numeric_target() {
        let mut calc = Calculator::default();

        // Empty expression
        calc.on_button("±");
        assert_eq!(calc.expression(), "");

        // Trailing operator
        press(&mut calc, "5+");
        calc.on_button("±");
        assert_eq!(calc.expression(), "5+");

        // Trailing run is not a plain number
        calc.on_scientific_button("sin");
        calc.on_button("±");
        assert_eq!(calc.expression(), "5+sin(");
    }

    #[test]
    fn test_percentage_on_bare_number() {
        let mut calc = Calculator::default();
        press(&mut calc, "50");
        calc.on_button("%");
        assert_eq!(calc.expression(), "0.5");
        assert_eq!(calc.result(), "0.5");

        let mut calc = Calculator::default();
        press(&mut calc, "200");
        calc.on_button("%");
        assert_eq!(calc.expression(), "2");
        assert_eq!(calc.result(), "2");
    }

    #[test]
    fn test_percentage_noop_on_compound_expression() {
        let mut calc = Calculator::default();
        press(&mut calc, "50+1");
        calc.on_button("%");
        assert_eq!(calc.expression(), "50+1");
    }

    #[test]
    fn test_square_wraps_bare_number() {
        let mut calc = Calculator::default();
        press(&mut calc, "5");
        calc.on_scientific_button("x²");
        assert_eq!(calc.expression(), "(5)^2");
        assert_eq!(calc.result(), "25");
    }

    #[test]
    fn test_square_noop_on_compound_expression() {
        let mut calc = Calculator::default();
        press(&mut calc, "5+1");
        calc.on_scientific_button("x²");
        assert_eq!(calc.expression(), "5+1");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut calc = Calculator::default();
        press(&mut calc, "5/0");
        assert_eq!(calc.result(), ERROR_RESULT);
    }

    #[test]
    fn test_unterminated_function_call_shows_error_until_closed() {
        let mut calc = Calculator::default();
        calc.on_scientific_button("sin");
        assert_eq!(calc.expression(), "sin(");
        assert_eq!(calc.result(), ERROR_RESULT);

        calc.on_button("0");
        assert_eq!(calc.result(), ERROR_RESULT);

        calc.on_scientific_button(")");
        assert_eq!(calc.expression(), "sin(0)");
        assert_eq!(calc.result(), "0");
    }

    #[test]
    fn test_scientific_log_maps_to_base_ten() {
        let mut calc = Calculator::default();
        calc.on_scientific_button("log");
        press(&mut calc, "100");
        calc.on_scientific_button(")");
        assert_eq!(calc.expression(), "log10(100)");
        assert_eq!(calc.result(), "2");
    }

    #[test]
    fn test_scientific_sqrt() {
        let mut calc = Calculator::default();
        calc.on_scientific_button("√");
        press(&mut calc, "16");
        calc.on_scientific_button(")");
        assert_eq!(calc.expression(), "sqrt(16)");
        assert_eq!(calc.result(), "4");
    }

    #[test]
    fn test_scientific_constants_append_as_tokens() {
        let mut calc = Calculator::default();
        calc.on_button("2");
        calc.on_button("×");
        calc.on_scientific_button("π");
        assert_eq!(calc.expression(), "2*π");
        assert_eq!(calc.result(), "6.283185");
    }

    #[test]
    fn test_power_via_scientific_keypad() {
        let mut calc = Calculator::default();
        calc.on_button("2");
        calc.on_scientific_button("x^y");
        press(&mut calc, "10");
        assert_eq!(calc.expression(), "2^10");
        assert_eq!(calc.result(), "1024");
    }

    #[test]
    fn test_set_expression_replaces_and_reevaluates() {
        let mut calc = Calculator::default();
        press(&mut calc, "999");
        calc.set_expression("6*7");
        assert_eq!(calc.expression(), "6*7");
        assert_eq!(calc.result(), "42");
    }

    #[test]
    fn test_clear_history() {
        let mut calc = Calculator::default();
        press(&mut calc, "2+2");
        calc.on_button("=");
        press(&mut calc, "+1");
        calc.on_button("=");
        assert_eq!(calc.history().len(), 2);

        calc.clear_history();
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_mode_toggles_are_independent() {
        let mut calc = Calculator::default();
        press(&mut calc, "1+1");

        calc.toggle_theme();
        calc.toggle_scientific_mode();
        assert!(!calc.is_dark_theme());
        assert!(calc.is_scientific_mode());

        // Toggles never touch the arithmetic state
        assert_eq!(calc.expression(), "1+1");
        assert_eq!(calc.result(), "2");

        calc.toggle_theme();
        assert!(calc.is_dark_theme());
    }

    #[test]
    fn test_fractional_result_formatting() {
        let mut calc = Calculator::default();
        press(&mut calc, "10/4");
        assert_eq!(calc.result(), "2.5");

        let mut calc = Calculator::default();
        press(&mut calc, "1/3");
        assert_eq!(calc.result(), "0.333333");
    }

    #[test]
    fn test_split_keeping_operators() {
        assert_eq!(split_keeping_operators("12+8"), vec!["12", "+", "8"]);
        assert_eq!(split_keeping_operators("12+-8"), vec!["12", "+", "-", "8"]);
        assert_eq!(split_keeping_operators("-8"), vec!["-", "8"]);
        assert_eq!(split_keeping_operators("8"), vec!["8"]);
        assert_eq!(split_keeping_operators(""), Vec::<&str>::new());
        assert_eq!(
            split_keeping_operators("sin(3"),
            vec!["sin(3"]
        );
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.history_cursor, 0);
        assert_eq!(app.help_scroll, 0);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_app_history_overlay_selection() {
        let mut app = App::default();
        press(&mut app.calculator, "2+2");
        app.calculator.on_button("=");
        press(&mut app.calculator, "+3");
        app.calculator.on_button("=");

        app.open_history();
        assert!(matches!(app.mode, AppMode::History));
        // Newest entry selected on open
        assert_eq!(app.history_cursor, 1);

        app.history_cursor_up();
        assert_eq!(app.history_cursor, 0);
        app.history_cursor_up();
        assert_eq!(app.history_cursor, 0);

        app.select_history_entry();
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.calculator.expression(), "2+2");
        assert_eq!(app.calculator.result(), "4");
    }

    #[test]
    fn test_app_history_cursor_bounds() {
        let mut app = App::default();
        app.open_history();
        app.history_cursor_down();
        app.history_cursor_up();
        assert_eq!(app.history_cursor, 0);

        // Selecting with no entries leaves the calculator untouched
        app.open_history();
        app.select_history_entry();
        assert_eq!(app.calculator.expression(), "");
    }

    #[test]
    fn test_app_clear_history_from_overlay() {
        let mut app = App::default();
        press(&mut app.calculator, "1+1");
        app.calculator.on_button("=");

        app.open_history();
        app.clear_history();
        assert!(app.calculator.history().is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_app_clipboard_status_messages() {
        let mut app = App::default();
        press(&mut app.calculator, "2+2");

        app.set_clipboard_result(Ok(()));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Copied 4 to clipboard")
        );

        app.set_clipboard_result(Err("no display".to_string()));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Copy failed: no display")
        );
    }
}
