use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    models::{error::MogiError, mogi::Mogi},
    utils::session_engine,
};

/// Everything the tracker owns: the live mogi and the archive, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub current_mogi: Mogi,
    pub history: Vec<Mogi>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self {
            current_mogi: Mogi::new(),
            history: Vec::new(),
        }
    }

    /// Finalizes the live mogi, archives it and starts a fresh one.
    pub fn save_current(&mut self, final_rank: f64, participants: u32) -> Result<&Mogi, MogiError> {
        session_engine::finalize(&mut self.current_mogi, final_rank, participants)?;
        let finished = std::mem::replace(&mut self.current_mogi, Mogi::new());
        info!("Archived mogi {} with final rank {:?}", finished.id, finished.final_rank);
        self.history.insert(0, finished);
        Ok(&self.history[0])
    }

    pub fn reset_current(&mut self) -> &Mogi {
        self.current_mogi = session_engine::reset();
        &self.current_mogi
    }

    pub fn set_participants(&mut self, participants: u32) -> Result<(), MogiError> {
        self.current_mogi.participants = session_engine::validate_participants(participants)?;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.current_mogi.date = date;
    }

    pub fn delete_history(&mut self, id: Uuid) -> Result<Mogi, MogiError> {
        let position = self
            .history
            .iter()
            .position(|mogi| mogi.id == id)
            .ok_or_else(|| MogiError::SessionNotFound(id.to_string()))?;
        Ok(self.history.remove(position))
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}
