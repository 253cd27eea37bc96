use std::path::{Path, PathBuf};

use alien_invasion_game::{AlienInvasionApp, HighScoreStore, Settings};
use alien_invasion_sdl2::{App, SdlContext, SdlInitInfo};
use anyhow::{Context, Result};

pub struct LaunchOptions {
    pub high_score_file: PathBuf,
    pub config: Option<PathBuf>,
    pub scale: u32,
}

pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display())),
        None => Ok(Settings::default()),
    }
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let settings = load_settings(options.config.as_deref())?;
    let store = HighScoreStore::new(options.high_score_file);
    let app = AlienInvasionApp::new(settings, store).with_scale(options.scale);

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_config_means_default_settings() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.screen_width, 1200);
        assert_eq!(settings.bullets_allowed, 3);
    }

    #[test]
    fn missing_config_is_reported() {
        let err = load_settings(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
