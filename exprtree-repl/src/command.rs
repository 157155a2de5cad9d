use super::error::Error;

/// A single line of input, split into the command it asks for and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `name = expr`: evaluate `expr` and bind the result to `name`.
    Assign { name: &'a str, expr: &'a str },

    /// `:d var expr`: print the simplified derivative of `expr` with respect to `var`.
    Derivative { var: &'a str, expr: &'a str },

    /// `:s expr`: print the simplified expression.
    Simplify(&'a str),

    /// `:latex expr`: print the expression as LaTeX.
    Latex(&'a str),

    /// Any other line: evaluate it with the current bindings.
    Evaluate(&'a str),
}

/// Returns true if the text can be used as a variable name.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Splits off the first whitespace-delimited word of the text.
fn split_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    let end = text.find(char::is_whitespace)?;
    Some((&text[..end], text[end..].trim()))
}

impl<'a> Command<'a> {
    /// Parses a line of input.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(':') {
            let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let args = args.trim();
            return match name {
                "d" => match split_word(args) {
                    Some((var, expr)) if is_identifier(var) && !expr.is_empty() => {
                        Ok(Command::Derivative { var, expr })
                    },
                    _ => Err(Error::Usage(":d <variable> <expression>")),
                },
                "s" if !args.is_empty() => Ok(Command::Simplify(args)),
                "s" => Err(Error::Usage(":s <expression>")),
                "latex" if !args.is_empty() => Ok(Command::Latex(args)),
                "latex" => Err(Error::Usage(":latex <expression>")),
                _ => Err(Error::Usage(":d <variable> <expression> | :s <expression> | :latex <expression>")),
            };
        }

        if let Some((name, expr)) = line.split_once('=') {
            let name = name.trim();
            if is_identifier(name) {
                return Ok(Command::Assign { name, expr: expr.trim() });
            }
        }

        Ok(Command::Evaluate(line))
    }
}
