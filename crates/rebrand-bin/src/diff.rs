use anyhow::Result;
use inquire::Confirm;
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;

pub fn show_diff_and_confirm(
    file_path: &std::path::Path,
    old_content: &str,
    new_content: &str,
    change_description: &str,
) -> Result<bool> {
    println!("\n📝 {}: {}", change_description, file_path.display());

    let (output, has_changes) = render_diff(old_content, new_content)?;

    if !has_changes {
        println!("No changes detected.");
        return Ok(false);
    }

    println!("{}", output);

    let apply_change = Confirm::new("Apply this change?")
        .with_default(true)
        .prompt()?;

    Ok(apply_change)
}

fn render_diff(old_content: &str, new_content: &str) -> Result<(String, bool)> {
    let diff = TextDiff::from_lines(old_content, new_content);
    let mut output = String::new();
    let mut has_changes = false;

    for (i, group) in diff.grouped_ops(3).iter().enumerate() {
        if i > 0 {
            writeln!(output, "{:-^1$}", "", 40)?;
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("- ", "\x1b[31m"), // Red
                    ChangeTag::Insert => ("+ ", "\x1b[32m"), // Green
                    ChangeTag::Equal => ("  ", "\x1b[0m"),   // Default
                };
                write!(
                    output,
                    "{}{}{}\x1b[0m",
                    style,
                    sign,
                    change.value()
                )?;
                if change.tag() != ChangeTag::Equal {
                    has_changes = true;
                }
            }
        }
    }

    Ok((output, has_changes))
}
