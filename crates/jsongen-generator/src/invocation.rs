//! Invocation string parser.
//!
//! Grammar: `name "(" [arg ("," arg)*] ")"`. The argument list runs from the
//! first `(` to the first `)` after it. There is no nesting and no escaping:
//! arguments split on every comma and are kept verbatim, whitespace included.
//! Empty parentheses mean zero arguments.

/// A parsed invocation: which generator to call and its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub generator_name: String,
    pub raw_args: Vec<String>,
}

/// Invocation string does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationSyntaxError {
    #[error("missing '(' in invocation '{0}'")]
    MissingOpenParen(String),

    #[error("missing ')' in invocation '{0}'")]
    MissingCloseParen(String),

    #[error("missing generator name in invocation '{0}'")]
    EmptyName(String),

    #[error("unexpected '{trailing}' after ')' in invocation '{invocation}'")]
    TrailingInput { invocation: String, trailing: String },
}

/// Parse an invocation string such as `getInt(1,100)`.
pub fn parse_invocation(invocation: &str) -> Result<InvocationSpec, InvocationSyntaxError> {
    let text = invocation.trim();

    let open = text
        .find('(')
        .ok_or_else(|| InvocationSyntaxError::MissingOpenParen(invocation.to_string()))?;
    let close = text[open + 1..]
        .find(')')
        .map(|offset| open + 1 + offset)
        .ok_or_else(|| InvocationSyntaxError::MissingCloseParen(invocation.to_string()))?;

    let name = text[..open].trim();
    if name.is_empty() {
        return Err(InvocationSyntaxError::EmptyName(invocation.to_string()));
    }

    let trailing = text[close + 1..].trim();
    if !trailing.is_empty() {
        return Err(InvocationSyntaxError::TrailingInput {
            invocation: invocation.to_string(),
            trailing: trailing.to_string(),
        });
    }

    let arg_list = &text[open + 1..close];
    let raw_args = if arg_list.is_empty() {
        Vec::new()
    } else {
        arg_list.split(',').map(str::to_string).collect()
    };

    Ok(InvocationSpec {
        generator_name: name.to_string(),
        raw_args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(spec: &InvocationSpec) -> Vec<&str> {
        spec.raw_args.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_parse_with_arguments() {
        let spec = parse_invocation("getInt(1,100)").unwrap();
        assert_eq!(spec.generator_name, "getInt");
        assert_eq!(args(&spec), vec!["1", "100"]);
    }

    #[test]
    fn test_empty_parens_yield_no_arguments() {
        let spec = parse_invocation("getName()").unwrap();
        assert_eq!(spec.generator_name, "getName");
        assert!(spec.raw_args.is_empty());
    }

    #[test]
    fn test_arguments_are_verbatim() {
        let spec = parse_invocation("getFromList( a ,b b,,c)").unwrap();
        assert_eq!(args(&spec), vec![" a ", "b b", "", "c"]);
    }

    #[test]
    fn test_single_space_is_one_argument() {
        let spec = parse_invocation("getFromList( )").unwrap();
        assert_eq!(args(&spec), vec![" "]);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let spec = parse_invocation("  getEmail ()  ").unwrap();
        assert_eq!(spec.generator_name, "getEmail");
        assert!(spec.raw_args.is_empty());
    }

    #[test]
    fn test_first_close_paren_ends_arguments() {
        let result = parse_invocation("getFromList(a(b),c)");
        assert!(matches!(
            result,
            Err(InvocationSyntaxError::TrailingInput { ref trailing, .. }) if trailing == ",c)"
        ));
    }

    #[test]
    fn test_missing_close_paren() {
        let result = parse_invocation("getInt(1,10");
        assert_eq!(
            result,
            Err(InvocationSyntaxError::MissingCloseParen(
                "getInt(1,10".to_string()
            ))
        );
    }

    #[test]
    fn test_missing_open_paren() {
        let result = parse_invocation("getEmail");
        assert!(matches!(result, Err(InvocationSyntaxError::MissingOpenParen(_))));

        let result = parse_invocation("getEmail)");
        assert!(matches!(result, Err(InvocationSyntaxError::MissingOpenParen(_))));
    }

    #[test]
    fn test_missing_name() {
        let result = parse_invocation("(1,2)");
        assert!(matches!(result, Err(InvocationSyntaxError::EmptyName(_))));
    }

    #[test]
    fn test_error_message_names_invocation() {
        let err = parse_invocation("getInt(1,10").unwrap_err();
        assert_eq!(err.to_string(), "missing ')' in invocation 'getInt(1,10'");
    }
}
