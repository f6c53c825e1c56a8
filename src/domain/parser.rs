//! Expression parser for calculator input.
//!
//! This module implements a recursive descent parser for the expression
//! language behind the keypad: decimal numbers, the binary operators
//! `+ - * / ^`, parentheses, the constants `π` and `e`, and a fixed set of
//! unary functions, each taking one parenthesized argument.
//!
//! # BNF Grammar
//!
//! ```bnf
//! Expression     ::= Addition
//! Addition       ::= Signed ( ( "+" | "-" ) Signed )*
//! Signed         ::= ( "+" | "-" ) Signed | Multiplication
//! Multiplication ::= Power ( ( "*" | "/" ) Power )*
//! Power          ::= Primary ( "^" Power )?
//! Primary        ::= ( "+" | "-" ) Primary
//!                  | Number | Constant | FunctionCall | "(" Expression ")"
//! FunctionCall   ::= Identifier "(" Expression ")"
//! Number         ::= [0-9]+ ( "." [0-9]* )?
//! Constant       ::= "π" | "e"
//! Identifier     ::= [a-z] [a-z0-9]*
//! ```
//!
//! Precedence, from highest: `^` (right-associative), then `*` and `/`
//! (left-associative), then unary minus, then binary `+` and `-`
//! (left-associative). So `-2^2` is `-(2^2)`. A sign directly attached to a
//! primary is also accepted, which is what makes sign-toggled input such as
//! `2*-3` parse.
//!
//! The display glyphs `×` and `÷` are recognized by the lexer as multiply and
//! divide, and `π`/`e` are resolved as whole tokens; there is no textual
//! substitution pass that could corrupt surrounding input.

use std::collections::HashMap;
use super::errors::{EvalError, EvalResult};

/// Represents a token in the expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals (constants lex directly to their numeric value)
    Number(f64),
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,

    // Delimiters
    LeftParen,
    RightParen,

    // End of input
    Eof,
}

/// Represents an Abstract Syntax Tree node for expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),

    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        right: Box<Expr>,
    },

    Unary {
        operator: UnaryOp,
        operand: Box<Expr>,
    },

    FunctionCall {
        name: String,
        arg: Box<Expr>,
    },
}

/// Binary operators.
#[derive(Debug, Clone, PartialEq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Unary operators.
#[derive(Debug, Clone, PartialEq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Lexical analyzer for tokenizing expressions.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    /// Advances to the next character in the input.
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a number token. A trailing decimal point with no fractional
    /// digits ("2.") is accepted; the keypad produces it mid-entry.
    fn read_number(&mut self) -> EvalResult<f64> {
        let mut number_str = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.current_char == Some('.') {
            number_str.push('.');
            self.advance();

            while let Some(ch) = self.current_char {
                if ch.is_ascii_digit() {
                    number_str.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        number_str
            .parse::<f64>()
            .map_err(|_| EvalError::MalformedNumber(number_str))
    }

    /// Reads an identifier (function or constant name), lowercased.
    fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_ascii_alphanumeric() {
                identifier.push(ch.to_ascii_lowercase());
                self.advance();
            } else {
                break;
            }
        }

        identifier
    }

    /// Determines whether an identifier is a named constant or a function name.
    fn classify_identifier(&self, identifier: String) -> Token {
        match identifier.as_str() {
            "e" => Token::Number(std::f64::consts::E),
            "pi" => Token::Number(std::f64::consts::PI),
            _ => Token::Identifier(identifier),
        }
    }

    /// Gets the next token from the input.
    pub fn next_token(&mut self) -> EvalResult<Token> {
        self.skip_whitespace();

        match self.current_char {
            None => Ok(Token::Eof),

            Some(ch) => match ch {
                '0'..='9' => {
                    let number = self.read_number()?;
                    Ok(Token::Number(number))
                }

                'a'..='z' | 'A'..='Z' => {
                    let identifier = self.read_identifier();
                    Ok(self.classify_identifier(identifier))
                }

                'π' => {
                    self.advance();
                    Ok(Token::Number(std::f64::consts::PI))
                }

                '+' => {
                    self.advance();
                    Ok(Token::Plus)
                }

                '-' => {
                    self.advance();
                    Ok(Token::Minus)
                }

                '*' | '×' => {
                    self.advance();
                    Ok(Token::Multiply)
                }

                '/' | '÷' => {
                    self.advance();
                    Ok(Token::Divide)
                }

                '^' => {
                    self.advance();
                    Ok(Token::Power)
                }

                '(' => {
                    self.advance();
                    Ok(Token::LeftParen)
                }

                ')' => {
                    self.advance();
                    Ok(Token::RightParen)
                }

                _ => Err(EvalError::UnexpectedCharacter(ch)),
            },
        }
    }
}

/// Function signature for built-in and user-registered unary functions.
pub type FunctionImpl = fn(f64) -> EvalResult<f64>;

/// Registry for the calculator's unary functions.
#[derive(Debug)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionImpl>,
}

impl FunctionRegistry {
    /// Creates a new function registry with built-in functions.
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };

        registry.register_builtin_functions();
        registry
    }

    /// Registers a new function in the registry.
    pub fn register_function(&mut self, name: &str, func: FunctionImpl) {
        self.functions.insert(name.to_lowercase(), func);
    }

    /// Gets a function by name.
    pub fn get_function(&self, name: &str) -> Option<&FunctionImpl> {
        self.functions.get(&name.to_lowercase())
    }

    /// Registers the built-in functions. Trigonometry operates in radians;
    /// `log`/`log10` are base 10, `ln` natural.
    fn register_builtin_functions(&mut self) {
        self.register_function("sin", |x| Ok(x.sin()));

        self.register_function("cos", |x| Ok(x.cos()));

        self.register_function("tan", |x| Ok(x.tan()));

        self.register_function("ln", |x| {
            if x <= 0.0 {
                Err(EvalError::OutOfDomain {
                    function: "ln",
                    argument: x,
                })
            } else {
                Ok(x.ln())
            }
        });

        self.register_function("log10", |x| {
            if x <= 0.0 {
                Err(EvalError::OutOfDomain {
                    function: "log10",
                    argument: x,
                })
            } else {
                Ok(x.log10())
            }
        });

        // "log" on the keypad means base 10
        self.register_function("log", |x| {
            if x <= 0.0 {
                Err(EvalError::OutOfDomain {
                    function: "log",
                    argument: x,
                })
            } else {
                Ok(x.log10())
            }
        });

        self.register_function("sqrt", |x| {
            if x < 0.0 {
                Err(EvalError::OutOfDomain {
                    function: "sqrt",
                    argument: x,
                })
            } else {
                Ok(x.sqrt())
            }
        });
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursive descent parser for calculator expressions.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    /// Creates a new parser for the given expression.
    pub fn new(input: &str) -> EvalResult<Self> {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token()?;

        Ok(Self {
            lexer,
            current_token,
        })
    }

    /// Advances to the next token.
    fn advance(&mut self) -> EvalResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    /// Checks that the current token matches the expected token and advances.
    fn expect(&mut self, expected: Token) -> EvalResult<()> {
        if std::mem::discriminant(&self.current_token) == std::mem::discriminant(&expected) {
            self.advance()
        } else {
            Err(EvalError::UnexpectedToken(format!(
                "expected {:?}, found {:?}",
                expected, self.current_token
            )))
        }
    }

    /// Parses the top-level expression.
    pub fn parse(&mut self) -> EvalResult<Expr> {
        let expr = self.parse_addition()?;

        if self.current_token != Token::Eof {
            return Err(EvalError::UnexpectedToken(format!(
                "{:?}",
                self.current_token
            )));
        }

        Ok(expr)
    }

    /// Parses addition and subtraction expressions.
    fn parse_addition(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_signed()?;

        while matches!(self.current_token, Token::Plus | Token::Minus) {
            let op = match self.current_token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Subtract,
                _ => unreachable!(),
            };
            self.advance()?;
            let right = self.parse_signed()?;
            left = Expr::Binary {
                left: Box::new(left),
                operator: op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses a leading sign. Unary minus sits between the additive and the
    /// multiplicative level, so `-2^2` is `-(2^2)` and `-2*3` is `-(2*3)`.
    fn parse_signed(&mut self) -> EvalResult<Expr> {
        match self.current_token {
            Token::Plus => {
                self.advance()?;
                let operand = self.parse_signed()?;
                Ok(Expr::Unary {
                    operator: UnaryOp::Plus,
                    operand: Box::new(operand),
                })
            }
            Token::Minus => {
                self.advance()?;
                let operand = self.parse_signed()?;
                Ok(Expr::Unary {
                    operator: UnaryOp::Minus,
                    operand: Box::new(operand),
                })
            }
            _ => self.parse_multiplication(),
        }
    }

    /// Parses multiplication and division expressions.
    fn parse_multiplication(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_power()?;

        while matches!(self.current_token, Token::Multiply | Token::Divide) {
            let op = match self.current_token {
                Token::Multiply => BinaryOp::Multiply,
                Token::Divide => BinaryOp::Divide,
                _ => unreachable!(),
            };
            self.advance()?;
            let right = self.parse_power()?;
            left = Expr::Binary {
                left: Box::new(left),
                operator: op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses power expressions (right-associative).
    fn parse_power(&mut self) -> EvalResult<Expr> {
        let left = self.parse_primary()?;

        if self.current_token == Token::Power {
            self.advance()?;
            let right = self.parse_power()?; // Right-associative
            Ok(Expr::Binary {
                left: Box::new(left),
                operator: BinaryOp::Power,
                right: Box::new(right),
            })
        } else {
            Ok(left)
        }
    }

    /// Parses primary expressions (highest precedence). A sign directly in
    /// front of a primary is accepted here so that operands produced by the
    /// sign toggle (`2*-3`, `2^-3`) parse.
    fn parse_primary(&mut self) -> EvalResult<Expr> {
        match &self.current_token {
            Token::Plus => {
                self.advance()?;
                let operand = self.parse_primary()?;
                Ok(Expr::Unary {
                    operator: UnaryOp::Plus,
                    operand: Box::new(operand),
                })
            }

            Token::Minus => {
                self.advance()?;
                let operand = self.parse_primary()?;
                Ok(Expr::Unary {
                    operator: UnaryOp::Minus,
                    operand: Box::new(operand),
                })
            }

            Token::Number(value) => {
                let value = *value;
                self.advance()?;
                Ok(Expr::Number(value))
            }

            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;

                if self.current_token == Token::LeftParen {
                    self.advance()?;
                    let arg = self.parse_addition()?;
                    self.expect(Token::RightParen)?;
                    Ok(Expr::FunctionCall {
                        name,
                        arg: Box::new(arg),
                    })
                } else {
                    Err(EvalError::UnknownIdentifier(name))
                }
            }

            Token::LeftParen => {
                self.advance()?;
                let expr = self.parse_addition()?;
                self.expect(Token::RightParen)?;
                Ok(expr)
            }

            _ => Err(EvalError::UnexpectedToken(format!(
                "{:?}",
                self.current_token
            ))),
        }
    }
}

/// Expression evaluator that walks the AST and computes results.
pub struct ExpressionEvaluator<'a> {
    functions: &'a FunctionRegistry,
}

impl<'a> ExpressionEvaluator<'a> {
    /// Creates a new expression evaluator backed by the given registry.
    pub fn new(functions: &'a FunctionRegistry) -> Self {
        Self { functions }
    }

    /// Evaluates an expression AST to a numeric result.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(value) => Ok(*value),

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;

                match operator {
                    BinaryOp::Add => Ok(left_val + right_val),
                    BinaryOp::Subtract => Ok(left_val - right_val),
                    BinaryOp::Multiply => Ok(left_val * right_val),
                    BinaryOp::Divide => {
                        if right_val == 0.0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(left_val / right_val)
                        }
                    }
                    BinaryOp::Power => Ok(left_val.powf(right_val)),
                }
            }

            Expr::Unary { operator, operand } => {
                let operand_val = self.evaluate(operand)?;

                match operator {
                    UnaryOp::Plus => Ok(operand_val),
                    UnaryOp::Minus => Ok(-operand_val),
                }
            }

            Expr::FunctionCall { name, arg } => {
                let func = self
                    .functions
                    .get_function(name)
                    .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;

                let arg_value = self.evaluate(arg)?;
                func(arg_value)
            }
        }
    }
}
