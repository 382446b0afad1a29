//! Builds the program that runs a submitted solution against its test.
//!
//! The site-wide template contains three placeholders:
//!
//! - `${solution}`: the submitted code, unchanged
//! - `${solutionEscaped}`: the submitted code with every `"` written as `\"`,
//!   for templates that embed it inside a double-quoted string literal
//! - `${test}`: the exercise's test fragment
//!
//! Substitution is one left-to-right pass over the template. Text inserted
//! for a placeholder is never rescanned, so a solution that happens to
//! contain `${test}` stays as written.

const SOLUTION_ESCAPED: &str = "${solutionEscaped}";
const SOLUTION: &str = "${solution}";
const TEST: &str = "${test}";

const PLACEHOLDERS: [&str; 3] = [SOLUTION_ESCAPED, SOLUTION, TEST];

pub fn escape_quotes(solution: &str) -> String {
    solution.replace('"', "\\\"")
}

pub fn assemble(template: &str, test_file: &str, solution: &str) -> String {
    let solution_escaped = escape_quotes(solution);
    let mut program = String::with_capacity(template.len() + solution_escaped.len() + test_file.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        program.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(placeholder) = PLACEHOLDERS.into_iter().find(|p| tail.starts_with(p)) else {
            program.push_str("${");
            rest = &tail[2..];
            continue;
        };
        program.push_str(match placeholder {
            SOLUTION_ESCAPED => solution_escaped.as_str(),
            SOLUTION => solution,
            _ => test_file,
        });
        rest = &tail[placeholder.len()..];
    }
    program.push_str(rest);
    program
}

/// A site-wide test template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTemplate(String);

impl TestTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn assemble(&self, test_file: &str, solution: &str) -> String {
        assemble(&self.0, test_file, solution)
    }

    /// A template needs `${test}` and at least one of the solution forms.
    /// Anything listed here will silently be left out of assembled programs.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.0.contains(SOLUTION) && !self.0.contains(SOLUTION_ESCAPED) {
            missing.push(SOLUTION);
        }
        if !self.0.contains(TEST) {
            missing.push(TEST);
        }
        missing
    }
}

impl From<&str> for TestTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_placeholders() {
        let template = r#"run("${solution}") and "${solutionEscaped}" with ${test}"#;
        let program = assemble(template, "assert true", r#"say "hi""#);
        assert_eq!(program, r#"run("say "hi"") and "say \"hi\"" with assert true"#);
    }

    #[test]
    fn replaces_every_occurrence() {
        let program = assemble("${test};${solution};${test};${solution}", "T", "S");
        assert_eq!(program, "T;S;T;S");
    }

    #[test]
    fn escaping_is_total() {
        let solution = r#"print("a", "b") # "quoted""#;
        let quotes = solution.matches('"').count();
        let escaped = escape_quotes(solution);
        assert_eq!(escaped.matches("\\\"").count(), quotes);
        assert_eq!(escaped.replace("\\\"", "").matches('"').count(), 0);
    }

    #[test]
    fn inserted_text_is_not_rescanned() {
        let program = assemble("${solution}|${test}", "T", "echo '${test}'");
        assert_eq!(program, "echo '${test}'|T");
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        let program = assemble("${other} ${solution} $ {test} ${", "T", "S");
        assert_eq!(program, "${other} S $ {test} ${");
    }

    #[test]
    fn template_without_placeholders() {
        let template = TestTemplate::new("print('static')");
        assert_eq!(template.assemble("T", "S"), "print('static')");
        assert_eq!(template.missing_placeholders(), ["${solution}", "${test}"]);
        assert!(TestTemplate::from("${solutionEscaped}\n${test}").missing_placeholders().is_empty());
    }
}
