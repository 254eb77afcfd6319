//! Prompt templates for research analysis and debate.

use crate::types::TaskType;

/// A prompt template for reasoning requests.
pub trait PromptTemplate {
    /// Generate the prompt text.
    fn generate(&self) -> String;

    /// Task type the prompt should be tagged with.
    fn task_type(&self) -> TaskType;
}

/// Prompt asking a single senior researcher to synthesize the material.
#[derive(Debug, Clone)]
pub struct AnalysisPrompt {
    /// Research topic.
    pub topic: String,
    /// Merged document context.
    pub context: String,
}

impl AnalysisPrompt {
    /// Create a new analysis prompt.
    pub fn new(topic: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            context: context.into(),
        }
    }
}

impl PromptTemplate for AnalysisPrompt {
    fn task_type(&self) -> TaskType {
        TaskType::General
    }

    fn generate(&self) -> String {
        format!(
            r#"You are the lead biology researcher of the lab.
Topic: '{}'

[Research material]
{}

[Task]
1. Find the key cross-links between the existing studies.
2. Propose a new unified research hypothesis.
3. Propose a detailed design for follow-up experiments.
"#,
            self.topic, self.context
        )
    }
}

/// Prompt asking a council of agents to argue, keeping positions apart.
#[derive(Debug, Clone)]
pub struct DebatePrompt {
    /// Research topic.
    pub topic: String,
    /// Merged document context.
    pub context: String,
}

impl DebatePrompt {
    /// Create a new debate prompt.
    pub fn new(topic: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            context: context.into(),
        }
    }
}

impl PromptTemplate for DebatePrompt {
    fn task_type(&self) -> TaskType {
        TaskType::Debate
    }

    fn generate(&self) -> String {
        format!(
            r#"You are the lab's research council, a panel of competing agents.
Topic: '{}'

[Research material]
{}

[Task]
Find the conflicting claims and logical gaps in the material above and debate them rigorously between agents.
Do NOT merge the outcome into a single answer. Present 'Opposing Hypothesis A' and 'Opposing Hypothesis B' separately, each argued in detail, and finish with a recommendation the principal investigator can choose from.
"#,
            self.topic, self.context
        )
    }
}
