//! Integration test suite for the `jsonsift` CLI
use assert_cmd::Command;

/// Helper function to run the `main` binary with the given arguments and return a
/// [`assert_cmd::assert::Assert`].
fn run_main(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd =
        Command::cargo_bin("jsonsift").expect("Failed to find main binary");
    cmd.args(args);
    cmd.assert()
}

/// Runs the binary expecting success and returns its STDOUT.
fn stdout_of(args: &[&str]) -> String {
    let output = run_main(args).success().code(0).get_output().stdout.clone();
    String::from_utf8(output).expect("Invalid UTF-8 output")
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone())
        .expect("Invalid UTF-8 output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_without_matches() {
        let output = stdout_of(&["--input", "tests/data/posts.json"]);
        assert_eq!(output, "No matches found.\n");
    }

    #[test]
    fn default_pattern_is_facilis() {
        let output = stdout_of(&["--input", "tests/data/nested.json"]);
        assert_eq!(
            output,
            "store.name: Facilis Books\n\
             store.shelves[0].items[0]: facilis est\n\
             tags[1]: FACILIS\n"
        );
    }

    #[test]
    fn matches_in_root_array() {
        let output =
            stdout_of(&["provident", "--input", "tests/data/posts.json"]);
        let paths: Vec<&str> = output
            .lines()
            .filter_map(|line| line.split_once(": ").map(|(path, _)| path))
            .filter(|path| path.starts_with('['))
            .collect();
        assert_eq!(paths, ["[0].title", "[3].body", "[8].title"]);
        assert!(output.starts_with(
            "[0].title: sunt aut facere repellat provident occaecati"
        ));
    }

    #[test]
    fn numbers_are_searchable() {
        let output = stdout_of(&["^1$", "--input", "tests/data/posts.json"]);
        assert_eq!(
            output,
            "[0].userId: 1\n[0].id: 1\n[1].userId: 1\n[2].userId: 1\n[3].userId: 1\n"
        );
    }

    #[test]
    fn scalars_use_json_literals() {
        let output = stdout_of(&[
            "^(true|null|42)$",
            "--input",
            "tests/data/nested.json",
        ]);
        assert_eq!(output, "store.open: true\nmeta.count: 42\nmeta.note: null\n");
    }

    #[test]
    fn case_sensitive_flag() {
        let output =
            stdout_of(&["-s", "FACILIS", "--input", "tests/data/nested.json"]);
        assert_eq!(output, "tags[1]: FACILIS\n");
    }

    #[test]
    fn fixed_strings_flag() {
        let output =
            stdout_of(&["-F", "facilis e.", "--input", "tests/data/nested.json"]);
        assert_eq!(output, "No matches found.\n");

        let output =
            stdout_of(&["-F", "s est", "--input", "tests/data/nested.json"]);
        assert_eq!(output, "store.shelves[0].items[0]: facilis est\n");
    }

    #[test]
    fn count_flag() {
        let output =
            stdout_of(&["--count", "facilis", "--input", "tests/data/nested.json"]);
        assert!(output.starts_with("Found matches: 3\n"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn never_color_has_no_escapes() {
        let output = stdout_of(&[
            "--color",
            "never",
            "facilis",
            "--input",
            "tests/data/nested.json",
        ]);
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn invalid_pattern_fails_before_fetching() {
        // The URL is unreachable; the pattern error must be reported instead.
        let assert = run_main(&["(unclosed", "--url", "http://127.0.0.1:1/"])
            .failure()
            .code(1);
        assert!(stderr_of(&assert).contains("Failed to compile pattern"));
    }

    #[test]
    fn unreachable_url_fails() {
        let assert = run_main(&[
            "facilis",
            "--url",
            "http://127.0.0.1:1/posts",
            "--timeout",
            "2",
        ])
        .failure()
        .code(1);
        assert!(stderr_of(&assert).contains("Failed to load JSON"));
    }

    #[test]
    fn nonexistent_file() {
        run_main(&["--input", "tests/data/missing.json"]).failure().code(1);
    }

    #[test]
    fn malformed_json() {
        let assert = run_main(&["--input", "tests/data/invalid.json"])
            .failure()
            .code(1);
        assert!(stderr_of(&assert).contains("Failed to parse JSON"));
    }

    #[test]
    fn input_conflicts_with_url() {
        run_main(&[
            "--input",
            "tests/data/posts.json",
            "--url",
            "http://127.0.0.1:1/",
        ])
        .failure();
    }

    #[test]
    fn pattern_named_like_a_command_is_searched() {
        let output =
            stdout_of(&["generate", "--input", "tests/data/nested.json"]);
        assert_eq!(output, "meta.action: regenerate index\n");

        let output = stdout_of(&["man", "--input", "tests/data/nested.json"]);
        assert_eq!(output, "No matches found.\n");
    }

    #[test]
    fn generate_shell_completions() {
        let output = stdout_of(&["--generate-shell", "bash"]);
        assert!(output.contains("jsonsift"));
    }

    #[test]
    fn generate_man_pages() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let dir_arg = dir.path().to_str().expect("UTF-8 temp dir");
        let output = stdout_of(&["--generate-man", dir_arg]);
        assert!(output.starts_with("Generated: "));
        assert!(dir.path().join("jsonsift.1").exists());
    }

    #[test]
    fn generate_flags_are_exclusive() {
        run_main(&["--generate-shell", "bash", "facilis"]).failure();
    }
}
