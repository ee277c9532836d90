use versegate_core::versions::VERSIONS;

pub fn versions(json: bool) -> anyhow::Result<()> {
    if json {
        let items: Vec<_> = VERSIONS
            .iter()
            .map(|(code, name)| serde_json::json!({"code": code, "name": name}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({"count": items.len(), "versions": items}))?
        );
    } else {
        for (code, name) in VERSIONS {
            println!("{:<10} {}", code, name);
        }
    }
    Ok(())
}
