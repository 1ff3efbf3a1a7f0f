use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remote LLM backend used by the edge function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Bedrock,
    Nvidia,
}

impl AiProvider {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bedrock => "AWS Bedrock",
            Self::Nvidia => "NVIDIA NIM",
        }
    }

    pub fn model_badge(&self) -> &'static str {
        match self {
            Self::Bedrock => "Claude 3",
            Self::Nvidia => "Nemotron Nano",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Bedrock => "Using AWS Bedrock with Claude 3 Sonnet for intelligent conversations",
            Self::Nvidia => {
                "Using NVIDIA NIM with Nemotron Nano + Retrieval Embeddings for RAG-powered inference"
            }
        }
    }

    /// Whether the backend retrieves related ideas before answering.
    pub fn uses_retrieval(&self) -> bool {
        matches!(self, Self::Nvidia)
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Self::Nvidia => {
                "Hello! I'm your Product Mindset AI companion powered by NVIDIA Nemotron Nano with RAG capabilities. \
                 I can semantically search your ideas and provide context-aware suggestions. \
                 What would you like to work on today?"
            }
            Self::Bedrock => {
                "Hello! I'm your Product Mindset AI companion. I'm here to help you ideate, plan, and design. \
                 What would you like to work on today?"
            }
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bedrock => write!(f, "bedrock"),
            Self::Nvidia => write!(f, "nvidia"),
        }
    }
}

impl FromStr for AiProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bedrock" => Ok(Self::Bedrock),
            "nvidia" => Ok(Self::Nvidia),
            other => Err(format!("unknown AI provider '{}' (expected bedrock or nvidia)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub ai_provider: AiProvider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trips_through_display() {
        for provider in [AiProvider::Bedrock, AiProvider::Nvidia] {
            assert_eq!(provider.to_string().parse::<AiProvider>().unwrap(), provider);
        }
    }

    #[test]
    fn only_nvidia_uses_retrieval() {
        assert!(AiProvider::Nvidia.uses_retrieval());
        assert!(!AiProvider::Bedrock.uses_retrieval());
    }

    #[test]
    fn missing_provider_defaults_to_bedrock() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.ai_provider, AiProvider::Bedrock);
    }
}
