use crate::common::{TestRepo, run, run_ok, segment_count};

fn write_config(repo: &TestRepo, contents: &str) {
    std::fs::write(repo.home_path().join("powerprompt-config.toml"), contents).unwrap();
}

#[test]
fn test_config_file_sets_defaults() {
    let repo = TestRepo::new();
    write_config(&repo, "shell = \"bash\"\nmode = \"compatible\"\nshow-repo = false\n");

    let prompt = run_ok(&mut repo.prompt_cmd());
    assert!(prompt.starts_with(r"\[\e["), "{prompt}");
    assert_eq!(segment_count(&prompt), 4, "{prompt}");
}

#[test]
fn test_command_line_beats_config_file() {
    let repo = TestRepo::new();
    write_config(&repo, "shell = \"bash\"\nmode = \"compatible\"\nshow-repo = false\n");

    let prompt = run_ok(repo.prompt_cmd().args(["--shell", "zsh", "--repo-only"]));
    assert!(prompt.starts_with("%{"), "{prompt:?}");
    assert_eq!(segment_count(&prompt), 2, "{prompt:?}");
}

#[test]
fn test_environment_beats_config_file() {
    let repo = TestRepo::new();
    write_config(&repo, "shell = \"zsh\"\nmode = \"compatible\"\n");

    let prompt = run_ok(
        repo.prompt_cmd()
            .env("POWERPROMPT_SHELL", "bash")
            .env("POWERPROMPT_DEPTH", "1"),
    );
    assert!(prompt.starts_with(r"\[\e["), "{prompt}");
    // Innermost directory, repository, exit marker
    assert_eq!(segment_count(&prompt), 3, "{prompt}");
}

#[test]
fn test_unsupported_shell_in_config_is_fatal() {
    let repo = TestRepo::new();
    write_config(&repo, "shell = \"tcsh\"\n");

    let output = run(&mut repo.prompt_cmd());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let repo = TestRepo::new();
    write_config(&repo, "shell = [\n");

    let output = run(repo.prompt_cmd().args(["--shell", "bash"]));
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring user config"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" master"), "{stdout}");
}

#[test]
fn test_environment_beats_kebab_key_in_config_file() {
    let repo = TestRepo::new();
    write_config(&repo, "shell = \"bash\"\nmode = \"compatible\"\nshow-repo = false\n");

    let output = run(repo.prompt_cmd().env("POWERPROMPT_SHOW_REPO", "true"));
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));

    // The file's shell and mode still apply alongside the env override
    let prompt = String::from_utf8_lossy(&output.stdout);
    assert!(prompt.starts_with(r"\[\e["), "{prompt}");
    assert_eq!(segment_count(&prompt), 5, "{prompt}");
}
