use async_trait::async_trait;
use feed_service::llm::{CompletionError, CompletionProvider};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub enum Reply {
    Text(String),
    Status(u16),
    Empty,
}

/// Completion provider that replays queued replies and records every prompt.
pub struct ScriptedCompletion {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedCompletion {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn reply_text(&self, text: &str) {
        self.push(Reply::Text(text.to_string()));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Status(status)) => Err(CompletionError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            Some(Reply::Empty) | None => Err(CompletionError::Empty),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
