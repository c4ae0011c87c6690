use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::LogStore;

use super::helpers::indexed_entries;

pub fn run<S: LogStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(indexed_entries(store)))
}
