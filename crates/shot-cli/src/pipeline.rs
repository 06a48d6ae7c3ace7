//! Read the component, run the generator, write both modules.
//!
//! Stages run strictly in order; nothing is written unless generation
//! succeeded for both modules.

use std::path::{Path, PathBuf};

use anyhow::Context;
use shot_config::ShotConfig;
use shot_gen::Artifacts;
use tracing::{debug, info};

/// What a run produced.
#[derive(Debug)]
pub enum Outcome {
    Written { fixture: PathBuf, test: PathBuf },
    DryRun(Box<Artifacts>),
}

/// Make an absolute path under `cwd` relative to it, so the helper import
/// depth is measured from the project root.
pub fn project_relative(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute()
        && let Ok(relative) = path.strip_prefix(cwd)
    {
        return relative.to_path_buf();
    }
    path.to_path_buf()
}

pub async fn run(path: &Path, config: &ShotConfig, dry_run: bool) -> anyhow::Result<Outcome> {
    let source = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read component source {}", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), "read component source");

    let artifacts = shot_gen::generate(path, &source, config)?;
    if dry_run {
        return Ok(Outcome::DryRun(Box::new(artifacts)));
    }

    write_artifacts(&artifacts).await?;
    let paths = &artifacts.record.paths;
    Ok(Outcome::Written {
        fixture: paths.fixture_file_path.clone(),
        test: paths.test_file_path.clone(),
    })
}

/// Create the test directory if needed and overwrite both modules.
pub async fn write_artifacts(artifacts: &Artifacts) -> anyhow::Result<()> {
    let paths = &artifacts.record.paths;
    tokio::fs::create_dir_all(&paths.test_directory)
        .await
        .with_context(|| format!("failed to create {}", paths.test_directory.display()))?;

    tokio::fs::write(&paths.fixture_file_path, &artifacts.fixture_text)
        .await
        .with_context(|| format!("failed to write {}", paths.fixture_file_path.display()))?;
    tokio::fs::write(&paths.test_file_path, &artifacts.test_text)
        .await
        .with_context(|| format!("failed to write {}", paths.test_file_path.display()))?;

    info!(
        fixture = %paths.fixture_file_path.display(),
        test = %paths.test_file_path.display(),
        "wrote generated modules"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CARD: &str = "const Card = ({ title }) => <h2>{title}</h2>;\n\
                        Card.propTypes = { title: PropTypes.string.isRequired, dense: PropTypes.bool };\n\
                        export default Card;\n";

    #[test]
    fn absolute_path_inside_cwd_becomes_relative() {
        let cwd = Path::new("/work/app");
        assert_eq!(
            project_relative(Path::new("/work/app/components/card.js"), cwd),
            PathBuf::from("components/card.js")
        );
        assert_eq!(
            project_relative(Path::new("/elsewhere/card.js"), cwd),
            PathBuf::from("/elsewhere/card.js")
        );
        assert_eq!(
            project_relative(Path::new("components/card.js"), cwd),
            PathBuf::from("components/card.js")
        );
    }

    #[tokio::test]
    async fn writes_both_modules_beside_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source_path = dir.path().join("card.js");
        tokio::fs::write(&source_path, CARD).await.expect("write source");

        let outcome = run(&source_path, &ShotConfig::default(), false)
            .await
            .expect("run should succeed");
        let Outcome::Written { fixture, test } = outcome else {
            panic!("expected written outcome");
        };

        assert_eq!(fixture, dir.path().join("__tests__/card.test_cases.js"));
        assert_eq!(test, dir.path().join("__tests__/card.test.js"));
        let fixture_text = tokio::fs::read_to_string(&fixture).await.expect("read fixture");
        assert!(fixture_text.contains("export const dense = {"));
        let test_text = tokio::fs::read_to_string(&test).await.expect("read test");
        assert!(test_text.contains("describe('<Card />', () => {"));
    }

    #[tokio::test]
    async fn existing_files_are_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source_path = dir.path().join("card.js");
        tokio::fs::write(&source_path, CARD).await.expect("write source");
        let tests_dir = dir.path().join("__tests__");
        tokio::fs::create_dir_all(&tests_dir).await.expect("mkdir");
        tokio::fs::write(tests_dir.join("card.test.js"), "stale")
            .await
            .expect("write stale");

        run(&source_path, &ShotConfig::default(), false)
            .await
            .expect("run should succeed");
        let test_text = tokio::fs::read_to_string(tests_dir.join("card.test.js"))
            .await
            .expect("read test");
        assert!(!test_text.contains("stale"));
    }

    #[tokio::test]
    async fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source_path = dir.path().join("card.js");
        tokio::fs::write(&source_path, CARD).await.expect("write source");

        let outcome = run(&source_path, &ShotConfig::default(), true)
            .await
            .expect("run should succeed");
        assert!(matches!(outcome, Outcome::DryRun(_)));
        assert!(!dir.path().join("__tests__").exists());
    }

    #[tokio::test]
    async fn failed_generation_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source_path = dir.path().join("pair.js");
        tokio::fs::write(
            &source_path,
            "class A extends Component { render() { return <a />; } }\n\
             class B extends Component { render() { return <b />; } }\n\
             export default both(A, B);\n",
        )
        .await
        .expect("write source");

        let err = run(&source_path, &ShotConfig::default(), false)
            .await
            .expect_err("should be ambiguous");
        assert!(err.to_string().contains("multiple component definitions found"));
        assert!(!dir.path().join("__tests__").exists());
    }

    #[tokio::test]
    async fn missing_source_reports_path() {
        let err = run(Path::new("does/not/exist.js"), &ShotConfig::default(), false)
            .await
            .expect_err("should fail");
        assert!(err.to_string().contains("does/not/exist.js"));
    }
}
