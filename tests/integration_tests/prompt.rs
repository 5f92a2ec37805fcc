use crate::common::{TestRepo, run_ok, segment_count};
use insta::assert_snapshot;
use rstest::rstest;

#[test]
fn test_clean_repo_bash() {
    let repo = TestRepo::new();
    let prompt = run_ok(repo.prompt_cmd().args(["--shell", "bash", "--mode", "compatible", "0"]));

    assert_snapshot!(
        prompt,
        @r"\[\e[38;5;250m\]\[\e[48;5;237m\] ~ \[\e[48;5;237m\]\[\e[38;5;244m\]❯\[\e[38;5;250m\]\[\e[48;5;237m\] projects \[\e[48;5;237m\]\[\e[38;5;244m\]❯\[\e[38;5;254m\]\[\e[48;5;237m\] powerline-js \[\e[48;5;148m\]\[\e[38;5;237m\]▶\[\e[38;5;0m\]\[\e[48;5;148m\] master\[\e[48;5;236m\]\[\e[38;5;148m\]▶\[\e[38;5;15m\]\[\e[48;5;236m\] \$ \[\e[0m\]\[\e[38;5;236m\]▶\[\e[0m\]"
    );
}

#[test]
fn test_zsh_is_the_default_dialect() {
    let repo = TestRepo::new();
    let prompt = run_ok(repo.prompt_cmd().args(["--mode", "compatible"]));

    assert!(prompt.starts_with("%{\x1b[38;5;250m%}"), "{prompt:?}");
    assert!(prompt.contains(" %# "), "{prompt:?}");
    assert!(prompt.ends_with("%{\x1b[0m%}"), "{prompt:?}");
    assert!(!prompt.contains('\n'));
}

#[rstest]
#[case(&[], 5)]
#[case(&["--repo-only"], 2)]
#[case(&["--no-repo"], 4)]
#[case(&["--cwd-only"], 2)]
#[case(&["--cwd-only", "--repo-only"], 2)]
#[case(&["--repo-only", "--no-repo"], 1)]
fn test_visibility_segment_counts(#[case] flags: &[&str], #[case] expected: usize) {
    let repo = TestRepo::new();
    let prompt = run_ok(
        repo.prompt_cmd()
            .args(["--shell", "bash", "--mode", "compatible"])
            .args(flags),
    );

    assert_eq!(segment_count(&prompt), expected, "{prompt}");
}

#[test]
fn test_repo_only_puts_repo_first() {
    let repo = TestRepo::new();
    let prompt = run_ok(repo.prompt_cmd().args(["--shell", "bash", "--repo-only"]));

    assert!(
        prompt.starts_with(r"\[\e[38;5;0m\]\[\e[48;5;148m\] master"),
        "{prompt}"
    );
}

#[test]
fn test_cwd_only_shows_innermost_directory() {
    let repo = TestRepo::new();
    let prompt = run_ok(repo.prompt_cmd().args(["--shell", "bash", "--cwd-only"]));

    assert!(prompt.contains(" powerline-js "), "{prompt}");
    assert!(!prompt.contains(" projects "), "{prompt}");
    assert!(!prompt.contains(" master"), "{prompt}");
}

#[rstest]
#[case("0", "236")]
#[case("1", "161")]
#[case("130", "161")]
fn test_exit_status_colors(#[case] status: &str, #[case] bg: &str) {
    let repo = TestRepo::new();
    let prompt = run_ok(repo.prompt_cmd().args(["--shell", "bash", status]));

    let marker = format!(r"\[\e[38;5;15m\]\[\e[48;5;{bg}m\] \$ ");
    assert!(prompt.contains(&marker), "{prompt}");
}

#[test]
fn test_failed_status_still_exits_zero() {
    let repo = TestRepo::new();
    let output = repo.prompt_cmd().arg("1").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_deep_directory_is_truncated() {
    let repo = TestRepo::new();
    let deep = repo.root_path().join("a").join("b").join("c").join("d");
    std::fs::create_dir_all(&deep).unwrap();

    let prompt = run_ok(
        repo.prompt_cmd_in(&deep)
            .args(["--shell", "bash", "--mode", "compatible", "--no-repo"]),
    );

    // ~/projects/…/c/d plus the exit marker
    assert_eq!(segment_count(&prompt), 6, "{prompt}");
    assert!(prompt.contains(" projects "), "{prompt}");
    assert!(prompt.contains(" \u{2026} "), "{prompt}");
    assert!(!prompt.contains(" powerline-js "), "{prompt}");
    assert!(prompt.contains(" c "), "{prompt}");
}

#[test]
fn test_depth_one() {
    let repo = TestRepo::new();
    let prompt = run_ok(repo.prompt_cmd().args([
        "--shell",
        "bash",
        "--mode",
        "compatible",
        "--depth",
        "1",
        "--no-repo",
    ]));

    assert_eq!(segment_count(&prompt), 2, "{prompt}");
    assert!(prompt.contains(" powerline-js "), "{prompt}");
}

#[test]
fn test_virtual_env_segment() {
    let repo = TestRepo::new();
    let prompt = run_ok(
        repo.prompt_cmd()
            .env("VIRTUAL_ENV", "/opt/venvs/tools")
            .args(["--shell", "bash", "--no-repo"]),
    );

    assert!(
        prompt.starts_with(r"\[\e[38;5;22m\]\[\e[48;5;35m\] tools "),
        "{prompt}"
    );
}

#[test]
fn test_outside_home_keeps_absolute_path() {
    let repo = TestRepo::new();
    let prompt = run_ok(
        repo.prompt_cmd()
            .env("HOME", "/nonexistent-home")
            .args(["--shell", "bash", "--mode", "compatible", "--no-repo", "--depth", "0"]),
    );

    assert!(!prompt.contains(" ~ "), "{prompt}");
    assert!(prompt.contains(" powerline-js "), "{prompt}");
}
