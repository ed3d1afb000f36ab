use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StyleGradeError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the starter configuration.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleGradeError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        StyleGradeError::FileAccess {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# style-grade configuration file
version = "1"

[codebases]
# Directory whose sub-directories are the submissions (default: this file's directory)
root = "submissions"

# Owner of the submission repositories; enables source links in the summary
# organization = "my-course"

# Sources inside each submission; the submission root is used when not found
source_dir = "src/main/java"
extensions = ["java"]
exclude = ["**/generated/**"]

[template]
# Starter code handed out with the assignment (default: <root>/<root name>)
path = "template"

# Ignore violations on lines copied verbatim from the template
ignore_violations = true

[report]
csv = "scores.csv"
# json = "report.json"

# External engines run once per submission and print a JSON report on stdout.
# {dir} is the submission source directory, {tokens} the clone threshold.
# [[engines]]
# name = "pmd"
# command = ["pmd-json", "--dir", "{dir}"]
#
# [[engines]]
# name = "cpd"
# command = ["cpd-json", "--dir", "{dir}", "--minimum-tokens", "{tokens}"]

# Every category takes:
#   scores   ascending violation-count thresholds; the score is the number of
#            thresholds the count does not exceed
#   mode     "count" (default), "files" or "binary"
#   examples how many violations to list in the summary
#   enabled  set to false to keep a section without scoring it

[categories.ordering]
scores = [0, 2, 5]
examples = 3
order = [
    "nested_types",
    "static_fields",
    "static_methods",
    "instance_fields",
    "constructors",
    "instance_methods",
]

[categories.commenting]
scores = [0, 3, 6]
examples = 3
# Methods with at most this many body lines are skipped
min_lines = 5
# Percentage of comment lines per method, inclusive bounds
min_frequency = 10
max_frequency = 80
# Comments closer than this edit distance to the next statement are flagged
levenshtein_distance = 5

[categories.doc_type]
scores = [0, 1, 3]
min_words = 5

[categories.doc_method]
scores = [0, 3, 6]
min_words = 3

[categories.doc_constructor]
scores = [0, 2]
min_words = 3

# [categories.doc_field]
# scores = [0, 5]
# min_words = 2

[categories.finalize_override]
scores = [0]
mode = "binary"

[categories.unqualified_static_access]
scores = [0, 2]

[categories.private_instances]
scores = [0, 2, 4]
mode = "files"

[categories.useless]
scores = [0, 5, 10]

# Categories reported by external engines only:
# [categories.string_concatenation]
# scores = [0, 2]
#
# [categories.empty_catch_block]
# scores = [0]
#
# [categories.missing_override]
# scores = [0, 3]
# include_dependencies = false
#
# [categories.clones]
# scores = [0, 1, 2]
# tokens = 100
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
