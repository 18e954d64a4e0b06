use super::*;

pub(super) fn handle_remote_command(
    config: &ClientConfig,
    store: &SessionStore,
    command: RemoteCommands,
) -> Result<()> {
    match command {
        RemoteCommands::Show { json } => {
            let file = store.read_config()?;
            if json {
                print_json(
                    &serde_json::json!({
                        "base_url": config.base_url,
                        "configured_base_url": file.base_url,
                        "state_dir": config.state_dir,
                    }),
                    "remote",
                )?;
            } else {
                println!("url: {}", config.base_url);
                if file.base_url.as_deref() != Some(config.base_url.as_str()) {
                    println!(
                        "configured: {}",
                        file.base_url.as_deref().unwrap_or("(default)")
                    );
                }
                println!("state: {}", config.state_dir.display());
            }
        }
        RemoteCommands::Set { url } => {
            let url = url.trim().trim_end_matches('/').to_string();
            reqwest::Url::parse(&url).with_context(|| format!("invalid url {:?}", url))?;
            let mut file = store.read_config()?;
            file.base_url = Some(url);
            store.write_config(&file)?;
            println!("Remote configured");
        }
    }
    Ok(())
}
