//! Dual-task dispatch
//!
//! Runs two chat-completion calls concurrently against the same article,
//! one per instruction, and assembles both outcomes into a stable pair.
//! Completion order is nondeterministic; output order is not: the left
//! instruction's outcome always lands in the left slot.

use tracing::{debug, info};

use crate::infrastructure::model::traits::ChatClient;
use crate::infrastructure::model::types::{ModelRequest, TaskOutcome};

/// One dual-rewrite invocation: shared model and article, two instructions
#[derive(Debug, Clone)]
pub struct RewritePlan {
    pub model: String,
    pub article: String,
    pub instruction_left: String,
    pub instruction_right: String,
}

impl RewritePlan {
    pub fn new(
        model: impl Into<String>,
        article: impl Into<String>,
        instruction_left: impl Into<String>,
        instruction_right: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            article: article.into(),
            instruction_left: instruction_left.into(),
            instruction_right: instruction_right.into(),
        }
    }
}

/// Both task outcomes, left slot first. Both slots are always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPair {
    pub left: TaskOutcome,
    pub right: TaskOutcome,
}

/// Run both rewrite tasks concurrently and wait for both to finish.
///
/// Parallelism is fixed at two, matching the task count. A failure in one
/// task surfaces only in its own slot; the other call keeps running to
/// completion untouched. No timeout is imposed here beyond the per-request
/// budget the client enforces.
pub async fn dispatch<C: ChatClient>(client: &C, plan: &RewritePlan) -> TaskPair {
    let left_request =
        ModelRequest::rewrite(&plan.model, &plan.instruction_left, &plan.article);
    let right_request =
        ModelRequest::rewrite(&plan.model, &plan.instruction_right, &plan.article);

    info!(
        model = plan.model.as_str(),
        article_chars = plan.article.chars().count(),
        "Dispatching dual rewrite"
    );

    let (left, right) = tokio::join!(
        client.complete(left_request),
        client.complete(right_request)
    );

    debug!(
        left_ok = left.success,
        right_ok = right.success,
        "Dual rewrite finished"
    );

    TaskPair { left, right }
}
