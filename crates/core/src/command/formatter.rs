//! Rendering argv tokens back into display strings

use super::assembler::CommandAssembler;
use std::borrow::Cow;

const CONTINUATION: &str = " \\\n";

fn needs_quoting(arg: &str) -> bool {
    arg.chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '$' | '`'))
}

/// Wrap a token in double quotes when it contains whitespace, quotes,
/// backslashes, `$` or backticks. Only embedded double quotes are escaped.
/// Other tokens, including the empty one, are returned untouched.
pub fn escape_arg(arg: &str) -> Cow<'_, str> {
    if !needs_quoting(arg) {
        return Cow::Borrowed(arg);
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Escaped tokens, one per entry
pub fn to_string_list(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| escape_arg(token).into_owned())
        .collect()
}

/// All tokens on one line separated by single spaces
pub fn to_single_line(tokens: &[String]) -> String {
    to_string_list(tokens).join(" ")
}

fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Executor on the first line, then one line per flag (with its value when
/// the following token is not itself a flag) or positional token.
pub fn to_multi_line(tokens: &[String]) -> String {
    let Some((executor, rest)) = tokens.split_first() else {
        return String::new();
    };

    let mut lines = vec![escape_arg(executor).into_owned()];
    let mut i = 0;
    while i < rest.len() {
        let token = &rest[i];
        let value = rest.get(i + 1).filter(|next| !looks_like_flag(next));
        match value {
            Some(value) if looks_like_flag(token) => {
                lines.push(format!("{} {}", escape_arg(token), escape_arg(value)));
                i += 2;
            }
            _ => {
                lines.push(escape_arg(token).into_owned());
                i += 1;
            }
        }
    }

    lines.join(CONTINUATION)
}

/// String renderings for anything that can assemble a command
pub trait CommandFormatter: CommandAssembler {
    /// Single escaped line
    fn to_command_string(&self) -> String {
        to_single_line(&self.build_command())
    }

    /// Backslash-continued block grouping flags with their values
    fn to_multi_line_command(&self) -> String {
        to_multi_line(&self.build_command())
    }

    /// Escaped token list
    fn to_string_list(&self) -> Vec<String> {
        to_string_list(&self.build_command())
    }
}

impl<T: CommandAssembler + ?Sized> CommandFormatter for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_escape_plain_tokens_untouched() {
        assert_eq!(escape_arg("-var"), "-var");
        assert_eq!(escape_arg("region=us-east-1"), "region=us-east-1");
        assert!(matches!(escape_arg("module.vpc"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_tokens() {
        assert_eq!(escape_arg("name=hello world"), "\"name=hello world\"");
        assert_eq!(escape_arg(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(escape_arg("it's"), "\"it's\"");
    }

    #[test]
    fn test_escape_only_double_quotes_inside() {
        assert_eq!(escape_arg("cost=$5"), r#""cost=$5""#);
        assert_eq!(escape_arg(r"C:\tmp"), r#""C:\tmp""#);
        assert_eq!(escape_arg("a`b"), "\"a`b\"");
        assert_eq!(escape_arg(""), "");
    }

    #[test]
    fn test_single_line() {
        let line = to_single_line(&tokens(&["terraform", "plan", "-var", "tags=a b"]));
        insta::assert_snapshot!(line, @r#"terraform plan -var "tags=a b""#);
    }

    #[test]
    fn test_multi_line_empty() {
        assert_eq!(to_multi_line(&[]), "");
    }

    #[test]
    fn test_multi_line_two_tokens() {
        let rendered = to_multi_line(&tokens(&["terraform", "plan"]));
        assert_eq!(rendered, "terraform \\\nplan");
        assert!(!rendered.lines().last().unwrap().ends_with('\\'));
    }

    #[test]
    fn test_multi_line_groups_flag_values() {
        let rendered = to_multi_line(&tokens(&[
            "terraform",
            "apply",
            "-var",
            "a=b",
            "-auto-approve",
            "-no-color",
            "-parallelism",
            "5",
        ]));
        insta::assert_snapshot!(rendered, @r"
        terraform \
        apply \
        -var a=b \
        -auto-approve \
        -no-color \
        -parallelism 5
        ");
    }

    #[test]
    fn test_multi_line_positional_after_flag_value() {
        let rendered = to_multi_line(&tokens(&[
            "docker", "buildx", "imagetools", "create", "--tag", "app:1", "src:1", "src:2",
        ]));
        assert_eq!(
            rendered,
            "docker \\\nbuildx \\\nimagetools \\\ncreate \\\n--tag app:1 \\\nsrc:1 \\\nsrc:2"
        );
    }

    #[test]
    fn test_string_list_escapes_each_token() {
        let list = to_string_list(&tokens(&["terraform", "plan", "-var", "x=a b"]));
        assert_eq!(list, ["terraform", "plan", "-var", "\"x=a b\""]);
    }
}
