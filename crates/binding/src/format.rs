use crate::error::BindingError;

/// Replaces `{n}` placeholders with `args[n]`. `{{` and `}}` produce literal braces.
pub fn substitute(template: &str, args: &[String]) -> Result<String, BindingError> {
    let malformed = || BindingError::MalformedFormat(template.to_string());
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(d) if d.is_ascii_digit() => digits.push(d),
                        _ => return Err(malformed()),
                    }
                }
                let index: usize = digits.parse().map_err(|_| malformed())?;
                let arg = args.get(index).ok_or(BindingError::PlaceholderOutOfRange {
                    index,
                    count: args.len(),
                })?;
                out.push_str(arg);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(malformed()),
            other => out.push(other),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substitutes_in_order_and_repeats() {
        assert_eq!(
            substitute("Page {0} of {1}", &args(&["2", "5"])).unwrap(),
            "Page 2 of 5"
        );
        assert_eq!(substitute("{1}-{0}-{1}", &args(&["a", "b"])).unwrap(), "b-a-b");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(substitute("{{{0}}}", &args(&["x"])).unwrap(), "{x}");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            substitute("{2}", &args(&["a"])),
            Err(BindingError::PlaceholderOutOfRange { index: 2, count: 1 })
        );
        assert!(matches!(substitute("{a}", &[]), Err(BindingError::MalformedFormat(_))));
        assert!(matches!(substitute("{0", &args(&["a"])), Err(BindingError::MalformedFormat(_))));
        assert!(matches!(substitute("}", &[]), Err(BindingError::MalformedFormat(_))));
        assert!(matches!(substitute("{}", &[]), Err(BindingError::MalformedFormat(_))));
    }
}
