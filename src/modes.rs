//! Assistant Mode Catalog
//!
//! Fixed mapping from a mode name to the system prompt that frames the
//! assistant for that mode. Built once at startup and passed into the
//! dispatcher state; read-only afterwards, so no synchronization is needed.

use std::collections::HashMap;

/// Mode applied when the request does not name one.
pub const DEFAULT_MODE: &str = "debug";

const CODE_PROMPT: &str = "You are CodeWizard in Code mode, a highly skilled software engineer with extensive knowledge in many programming languages, frameworks, design patterns, and best practices. \
Given an error message, stack trace, or buggy code, explain the likely issue, possible causes, and suggest how to fix it. \
Provide clear, actionable solutions with code examples when appropriate.";

const ASK_PROMPT: &str = "You are CodeWizard in Ask mode, a knowledgeable technical assistant focused on answering questions and providing information about software development, technology, and related topics. \
Provide clear, accurate, and helpful responses to technical questions. Include code examples, explanations, and references when appropriate.";

const ARCHITECT_PROMPT: &str = "You are CodeWizard in Architect mode, an experienced technical leader who is inquisitive and an excellent planner. \
Help users design software architecture, plan projects, and make technical decisions. Consider scalability, maintainability, and best practices. \
Provide high-level guidance and ask clarifying questions to better understand requirements.";

const DEBUG_PROMPT: &str = "You are CodeWizard in Debug mode, an expert software debugger specializing in systematic problem diagnosis and resolution. \
Given an error message, stack trace, or buggy code, analyze the issue methodically. Explain the root cause, suggest debugging steps, \
and provide potential solutions. Be thorough in your analysis and clear in your explanations.";

/// Catalog of assistant modes and their system prompts.
///
/// Absent lookups are a validation failure for the caller to handle, never
/// a panic.
#[derive(Debug, Clone)]
pub struct ModeCatalog {
    prompts: HashMap<&'static str, &'static str>,
}

impl ModeCatalog {
    pub fn new() -> Self {
        let mut prompts = HashMap::new();
        prompts.insert("code", CODE_PROMPT);
        prompts.insert("ask", ASK_PROMPT);
        prompts.insert("architect", ARCHITECT_PROMPT);
        prompts.insert("debug", DEBUG_PROMPT);
        Self { prompts }
    }

    /// Get the system prompt for a mode, or `None` if the mode is unknown.
    pub fn lookup(&self, mode: &str) -> Option<&'static str> {
        self.prompts.get(mode).copied()
    }

    pub fn contains(&self, mode: &str) -> bool {
        self.prompts.contains_key(mode)
    }

    /// Registered mode names, sorted for stable output.
    pub fn mode_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.prompts.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for ModeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
