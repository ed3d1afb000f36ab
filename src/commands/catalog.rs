use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::violation::Category;

#[must_use]
pub fn run_catalog() -> i32 {
    print!("{}", format_catalog());
    EXIT_SUCCESS
}

/// Every category with its violation types, messages and engine rule identifiers.
#[must_use]
pub fn format_catalog() -> String {
    let mut output = String::new();
    for category in Category::ALL {
        let _ = writeln!(output, "{category}");
        for ty in category.types() {
            let _ = write!(output, "  {:<34} {}", ty.name(), ty.message());
            let rules = ty.rule_ids();
            if !rules.is_empty() {
                let _ = write!(output, " [rules: {}]", rules.join(", "));
            }
            output.push('\n');
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
