use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetTaskDoneRequest {
    pub done: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertCommentRequest {
    pub body: String,
}
