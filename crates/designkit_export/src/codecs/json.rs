//! Plain JSON, the config as-is

use designkit_tokens::DesignConfig;

pub fn encode(config: &DesignConfig) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(config)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use designkit_tokens::{build_config, Catalog, DesignKitState};
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_back_to_the_same_config() {
        let catalog = Catalog::builtin();
        let state = DesignKitState::new()
            .with_selection("palette", "zinc")
            .with_selection("radius", "subtle")
            .with_selection("sidebars", "rail");
        let config = build_config(&catalog, &state);

        let text = encode(&config).unwrap();
        let parsed: DesignConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
