use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde_json::{json, Value};

fn default_board() -> Value {
    json!({
        "todo": [
            { "id": "1", "title": "Example Task", "description": "Try dragging me!" }
        ],
        "inProgress": [],
        "done": []
    })
}

// tasks are opaque to the server, so the store works on raw Values and never
// inspects their shape. no locking, concurrent saves race last-writer-wins
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> anyhow::Result<Value> {
        if !self.path.exists() {
            let board = default_board();
            fs::write(&self.path, serde_json::to_string(&board)?)
                .with_context(|| format!("failed to create {}", self.path.display()))?;
            return Ok(board);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid JSON", self.path.display()))
    }

    pub fn save(&self, doc: &Value) -> anyhow::Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(doc)?)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
