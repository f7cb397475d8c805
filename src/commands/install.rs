use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(db_path: &Path) -> Result<()> {
    let db_path = std::fs::canonicalize(db_path)
        .unwrap_or_else(|_| db_path.to_path_buf())
        .to_string_lossy()
        .to_string();

    let binary_path = std::env::current_exe()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| "notebook".to_string());

    println!("{}", "MCP Server Installation Guide".bold().cyan());
    println!();
    println!("Add the following to your MCP client configuration:");
    println!();
    println!("{}", "For Claude Desktop (~/.config/claude/claude_desktop_config.json):".dimmed());
    println!("{}", server_entry(&binary_path, &db_path)?);
    println!();
    println!("{}", "Available tools:".bold());
    println!("  • {} - Create a note with a name and description", "create-note".green());
    println!("  • {} - Remove an existing note", "remove-note".green());
    println!();
    println!("{}", "Resources:".bold());
    println!("  • {} - One plain-text resource per note", "notes://<name>".green());
    Ok(())
}

fn server_entry(binary_path: &str, db_path: &str) -> Result<String> {
    let entry = serde_json::json!({
        "mcpServers": {
            "notebook": {
                "command": binary_path,
                "args": ["--db", db_path, "serve"],
            }
        }
    });
    Ok(serde_json::to_string_pretty(&entry)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_entry() -> Result<()> {
        let entry: serde_json::Value =
            serde_json::from_str(&server_entry("/bin/notebook", "/data/notes.db")?)?;
        let server = &entry["mcpServers"]["notebook"];
        assert_eq!(server["command"], "/bin/notebook");
        assert_eq!(
            server["args"],
            serde_json::json!(["--db", "/data/notes.db", "serve"])
        );
        Ok(())
    }
}
