use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Settings;
use crate::store::LogStore;

/// Empties the log. With `include_settings`, mirroring settings go back to defaults too.
pub fn run<S: LogStore>(store: &mut S, include_settings: bool) -> Result<CmdResult> {
    let removed = store.list().len();
    store.replace_all(Vec::new())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} entries",
        removed
    )));

    if include_settings {
        let defaults = Settings::default();
        store.save_settings(&defaults)?;
        result.add_message(CmdMessage::success("Mirroring settings reset"));
        result = result.with_settings(defaults);
    }

    Ok(result)
}
