#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    UnexpectedCharacter(char),
    MalformedNumber(String),
    UnexpectedToken(String),
    UnknownIdentifier(String),
    UnknownFunction(String),
    DivisionByZero,
    OutOfDomain { function: &'static str, argument: f64 },
    NonFiniteResult,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnexpectedCharacter(ch) => {
                write!(f, "Unexpected character: '{}'", ch)
            }
            EvalError::MalformedNumber(text) => {
                write!(f, "Malformed number: {}", text)
            }
            EvalError::UnexpectedToken(token) => {
                write!(f, "Unexpected token: {}", token)
            }
            EvalError::UnknownIdentifier(name) => {
                write!(f, "Unknown identifier: {}", name)
            }
            EvalError::UnknownFunction(name) => {
                write!(f, "Unknown function: {}", name)
            }
            EvalError::DivisionByZero => {
                write!(f, "Division by zero")
            }
            EvalError::OutOfDomain { function, argument } => {
                write!(f, "{} is undefined for {}", function, argument)
            }
            EvalError::NonFiniteResult => {
                write!(f, "Result is not a finite number")
            }
        }
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T> = Result<T, EvalError>;
