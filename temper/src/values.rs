use crate::styling::properties::{is_custom, is_unitless};
use regex::Regex;
use std::sync::LazyLock;

static PLAIN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("valid number pattern"));

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Text(String),
    Number(f64),
    Unset,
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::Text(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::Text(value)
    }
}

impl From<&String> for Token {
    fn from(value: &String) -> Self {
        Token::Text(value.clone())
    }
}

macro_rules! number_tokens {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Token {
                fn from(value: $ty) -> Self {
                    Token::Number(value as f64)
                }
            }

            impl IntoValues for $ty {
                fn into_values(self) -> Vec<Token> {
                    vec![self.into()]
                }
            }
        )*
    };
}

pub trait IntoValues {
    fn into_values(self) -> Vec<Token>;
}

number_tokens!(f64, f32, i64, i32, i16, i8, u64, u32, u16, u8, usize);

impl IntoValues for Token {
    fn into_values(self) -> Vec<Token> {
        vec![self]
    }
}

impl IntoValues for &str {
    fn into_values(self) -> Vec<Token> {
        vec![self.into()]
    }
}

impl IntoValues for String {
    fn into_values(self) -> Vec<Token> {
        vec![self.into()]
    }
}

impl IntoValues for &String {
    fn into_values(self) -> Vec<Token> {
        vec![self.into()]
    }
}

impl<T: IntoValues> IntoValues for Option<T> {
    fn into_values(self) -> Vec<Token> {
        match self {
            Some(value) => value.into_values(),
            None => vec![Token::Unset],
        }
    }
}

impl<T: Into<Token>> IntoValues for Vec<T> {
    fn into_values(self) -> Vec<Token> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Token>, const N: usize> IntoValues for [T; N] {
    fn into_values(self) -> Vec<Token> {
        self.into_iter().map(Into::into).collect()
    }
}

/// A single empty or unset value asks for removal. Zero does not.
pub fn is_removal(values: &[Token]) -> bool {
    match values {
        [Token::Unset] => true,
        [Token::Text(text)] => text.trim().is_empty(),
        _ => false,
    }
}

pub fn format_values(prop: &str, values: &[Token]) -> String {
    let mut words = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Token::Number(number) if number.is_finite() => {
                words.push(format_number(prop, *number, &number.to_string()))
            }
            Token::Number(number) => words.push(number.to_string()),
            Token::Text(text) => words.extend(text.split_whitespace().map(|word| {
                match word.parse::<f64>() {
                    Ok(number) if PLAIN_NUMBER.is_match(word) => format_number(prop, number, word),
                    _ => word.to_string(),
                }
            })),
            Token::Unset => {}
        }
    }
    words.join(" ")
}

fn format_number(prop: &str, number: f64, text: &str) -> String {
    if number == 0.0 || is_unitless(prop) || is_custom(prop.trim_start_matches('!')) {
        text.to_string()
    } else {
        format!("{text}px")
    }
}
