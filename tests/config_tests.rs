use powerprompt::config::{self, Alignment, Config, FINAL_SPACE_ENV};
use powerprompt::SegmentType;
use tempfile::TempDir;
use tokio::fs;

#[tokio::test]
async fn test_config_loading() {
    let temp_dir = TempDir::new().unwrap();

    let config_content = r##"{
        "final_space": false,
        "palette": { "accent": "#ff9e64" },
        "blocks": [
            {
                "segments": [
                    { "type": "path", "foreground": "p:accent", "properties": { "style": "folder" } },
                    { "type": "git", "background": "green" },
                    { "type": "text", "alias": "git-marker", "template": " ± ", "needs": ["git"] }
                ]
            },
            {
                "alignment": "right",
                "newline": true,
                "segments": [
                    { "type": "ui5tooling", "properties": { "display_mode": "files" } }
                ]
            }
        ]
    }"##;

    let config_path = temp_dir.path().join("custom-config.json");
    fs::write(&config_path, config_content).await.unwrap();

    let config = config::load_config(Some(config_path)).await.unwrap();

    assert!(!config.final_space);
    assert_eq!(config.palette.get("accent").map(String::as_str), Some("#ff9e64"));
    assert_eq!(config.blocks.len(), 2);

    let left = &config.blocks[0];
    assert_eq!(left.alignment, Alignment::Left);
    assert!(!left.newline);
    assert_eq!(left.segments[0].segment_type, SegmentType::Path);
    assert_eq!(left.segments[0].foreground.as_deref(), Some("p:accent"));
    assert_eq!(left.segments[0].properties.get_string("style", "full"), "folder");
    assert_eq!(left.segments[1].name(), "git");
    assert_eq!(left.segments[2].name(), "git-marker");
    assert_eq!(left.segments[2].needs, vec!["git".to_string()]);

    let right = &config.blocks[1];
    assert_eq!(right.alignment, Alignment::Right);
    assert!(right.newline);
    assert_eq!(right.segments[0].segment_type, SegmentType::Ui5Tooling);
}

#[tokio::test]
async fn test_missing_fields_use_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("minimal.json");
    fs::write(&config_path, r#"{ "blocks": [ { "segments": [ { "type": "time" } ] } ] }"#)
        .await
        .unwrap();

    let config = config::load_config_file(&config_path).await.unwrap();

    assert!(config.final_space);
    let segment = &config.blocks[0].segments[0];
    assert_eq!(segment.template, None);
    assert!(segment.needs.is_empty());
    assert!(segment.properties.is_empty());
}

#[tokio::test]
async fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let broken = temp_dir.path().join("broken.json");
    fs::write(&broken, "{ not json").await.unwrap();
    let err = config::load_config(Some(broken)).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));

    let unknown_type = temp_dir.path().join("unknown.json");
    fs::write(&unknown_type, r#"{ "blocks": [ { "segments": [ { "type": "battery" } ] } ] }"#)
        .await
        .unwrap();
    assert!(config::load_config(Some(unknown_type)).await.is_err());

    let missing = temp_dir.path().join("missing.json");
    let err = config::load_config(Some(missing)).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config file"));
}

#[tokio::test]
async fn test_final_space_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{ "final_space": true }"#).await.unwrap();

    std::env::set_var(FINAL_SPACE_ENV, "false");
    let config = config::load_config(Some(config_path.clone())).await.unwrap();
    std::env::remove_var(FINAL_SPACE_ENV);

    assert!(!config.final_space);
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.final_space);
    assert_eq!(config.blocks.len(), 2);
    assert_eq!(config.blocks[1].alignment, Alignment::Right);
    assert!(config.palette.contains_key("path"));

    let marker = config.blocks[0]
        .segments
        .iter()
        .find(|segment| segment.name() == "git-marker")
        .unwrap();
    assert_eq!(marker.needs, vec!["git".to_string()]);

    // Serialized defaults load back unchanged.
    let json = serde_json::to_string(&config).unwrap();
    let reloaded: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.blocks.len(), config.blocks.len());
}
