//! The `quizform init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizform.toml").exists() {
        println!("quizform.toml already exists, skipping.");
    } else {
        std::fs::write("quizform.toml", SAMPLE_CONFIG)?;
        println!("Created quizform.toml");
    }

    std::fs::create_dir_all("documents")?;
    let example_path = std::path::Path::new("documents/example.txt");
    if example_path.exists() {
        println!("documents/example.txt already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_DOCUMENT)?;
        println!("Created documents/example.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizform.toml (default prompt, id style)");
    println!("  2. Run: quizform explain --input documents/example.txt");
    println!("  3. Run: quizform parse --input documents/example.txt --output example.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizform configuration

# Prompt for choice questions whose options appear with no question line.
default_prompt = "Select an option:"

# Every answer blank (two or more underscores) is normalized to this width.
blank_width = 10

# Question ids: "random" or "sequential".
ids = "random"
id_prefix = "q"
"#;

const EXAMPLE_DOCUMENT: &str = "Performance review

Full name:
Which team are you on?
a) Sales
b) Support
c) Engineering

Describe a recent challenge
and how you handled it.

Rate your onboarding:
- Good
- Average
- Poor

Comments ______________
";
