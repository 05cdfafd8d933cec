use colored::Colorize;

pub fn handle(path: &str, content: &str, check: bool) -> anyhow::Result<()> {
    let result = ycflow_file::write_text_file(path, content, check)?;

    let path = result.path.display().to_string();
    match (check, result.changed) {
        (true, true) => eprintln!("{} {} would be written", "~".yellow(), path.cyan()),
        (false, true) => eprintln!("{} {} written", "✓".green().bold(), path.cyan()),
        (_, false) => eprintln!("{} {} is up to date", "✓".green(), path.cyan()),
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
