//! Console messages. Every message is wrapped in a blank line on each side.

use std::path::Path;

use shot_gen::Artifacts;

fn wrapped(body: &str) -> String {
    format!("\n{body}\n")
}

pub fn success_message(fixture: &Path, test: &Path) -> String {
    wrapped(&format!(
        "Generated fixtures and snapshot tests:\n  {}\n  {}",
        fixture.display(),
        test.display()
    ))
}

pub fn failure_message(error: &anyhow::Error) -> String {
    wrapped(&format!("{error:#}"))
}

/// Both modules, each under a header naming the file it would be written to.
pub fn dry_run_listing(artifacts: &Artifacts) -> String {
    let paths = &artifacts.record.paths;
    format!(
        "// {}\n{}\n// {}\n{}",
        paths.fixture_file_path.display(),
        artifacts.fixture_text,
        paths.test_file_path.display(),
        artifacts.test_text
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn success_lists_both_paths() {
        let message = success_message(
            Path::new("components/__tests__/user_card.test_cases.js"),
            Path::new("components/__tests__/user_card.test.js"),
        );
        assert_eq!(
            message,
            "\nGenerated fixtures and snapshot tests:\n  \
             components/__tests__/user_card.test_cases.js\n  \
             components/__tests__/user_card.test.js\n"
        );
    }

    #[test]
    fn failure_includes_context_chain() {
        let error = anyhow::anyhow!("permission denied").context("failed to write x.js");
        assert_eq!(
            failure_message(&error),
            "\nfailed to write x.js: permission denied\n"
        );
    }
}
