use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FuelogError, Result};
use crate::model::Settings;
use crate::store::LogStore;
use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    Show,
    /// Turn mirroring on, sending to the given endpoint.
    Enable(String),
    /// Turn mirroring off. The endpoint is kept for a later enable.
    Disable,
}

pub fn run<S: LogStore>(store: &mut S, action: SettingsAction) -> Result<CmdResult> {
    let mut settings = store.settings();
    let mut result = CmdResult::default();

    match action {
        SettingsAction::Show => {}
        SettingsAction::Enable(url) => {
            let url = check_endpoint(&url)?;
            settings = Settings {
                remote_mirroring_enabled: true,
                remote_endpoint_url: url,
            };
            store.save_settings(&settings)?;
            result.add_message(CmdMessage::success(format!(
                "Mirroring new entries to {}",
                settings.remote_endpoint_url
            )));
        }
        SettingsAction::Disable => {
            settings.remote_mirroring_enabled = false;
            store.save_settings(&settings)?;
            result.add_message(CmdMessage::success("Mirroring disabled"));
        }
    }

    Ok(result.with_settings(settings))
}

fn check_endpoint(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FuelogError::Api("Endpoint URL cannot be empty".to_string()));
    }
    let url = Url::parse(raw)
        .map_err(|e| FuelogError::Api(format!("Invalid endpoint URL {}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(FuelogError::Api(format!(
            "Endpoint must be http or https, got {}",
            other
        ))),
    }
}
