//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use timecode_markers::{SourceRef, TextSource};

/// Builder for a directory holding a description file and a comment dump
pub struct FixtureDirBuilder {
    temp_dir: TempDir,
}

impl FixtureDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write description.txt with the given content
    pub fn with_description(self, content: &str) -> Self {
        fs::write(self.description_path(), content).expect("Failed to write description.txt");
        self
    }

    /// Write comments.jsonl with raw content
    pub fn with_comments_raw(self, content: &str) -> Self {
        fs::write(self.comments_path(), content).expect("Failed to write comments.jsonl");
        self
    }

    /// Write comments.jsonl from builders
    pub fn with_comments(self, comments: &[CommentBuilder]) -> Self {
        let content = comments.iter().map(|c| c.to_json()).collect::<Vec<_>>().join("\n");
        self.with_comments_raw(&content)
    }

    /// Write config.json with raw content
    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.config_path(), content).expect("Failed to write config.json");
        self
    }

    pub fn description_path(&self) -> PathBuf {
        self.temp_dir.path().join("description.txt")
    }

    pub fn comments_path(&self) -> PathBuf {
        self.temp_dir.path().join("comments.jsonl")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.json")
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for FixtureDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one comment dump line
pub struct CommentBuilder {
    text: Option<String>,
    id: Option<u64>,
}

impl CommentBuilder {
    pub fn new(text: &str) -> Self {
        Self { text: Some(text.to_string()), id: None }
    }

    /// A comment whose text could not be read
    pub fn missing() -> Self {
        Self { text: None, id: None }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "text": self.text, "id": self.id }).to_string()
    }
}

/// A description with chapter lines plus a handful of comments
pub fn realistic_sources() -> Vec<TextSource> {
    vec![
        TextSource::primary(
            "Full build walkthrough\n\nChapters:\n00:00:00 Intro\n00:01:30 Parts\n00:05:00 Wiring\n00:12:45 Testing\n",
            SourceRef(0),
        ),
        TextSource::comment("1:32 that capacitor though", SourceRef(1)),
        TextSource::comment("Great video!", SourceRef(2)),
        TextSource::comment("5:03 and 12:50 were the best bits", SourceRef(3)),
        TextSource::comment("8:20 wait what happened here", SourceRef(4)),
    ]
}
