/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &str) -> anyhow::Result<String> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                anyhow::anyhow!("home directory not found, cannot expand {}", path)
            })?;
            Ok(home.join(rest).display().to_string())
        }
        None => Ok(path.to_string()),
    }
}
