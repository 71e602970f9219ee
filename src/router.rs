//! Provider selection with keyword fallback.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::fallback;
use crate::prompt::SYSTEM_PROMPT;
use crate::provider::{GeminiProvider, GenerationOptions, OpenAiProvider, Provider, ProviderError};

/// Routes a message to the first provider that answers.
pub struct ResponseRouter {
    /// Tried in order; earlier entries take priority.
    providers: Vec<Box<dyn Provider>>,
    options: GenerationOptions,
    timeout: Duration,
}

impl ResponseRouter {
    pub fn new(providers: Vec<Box<dyn Provider>>, options: GenerationOptions, timeout: Duration) -> Self {
        Self {
            providers,
            options,
            timeout,
        }
    }

    /// OpenAI first, Gemini second.
    pub fn from_config(config: &Config) -> Self {
        let providers: Vec<Box<dyn Provider>> = vec![
            Box::new(OpenAiProvider::new(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
                config.openai_base_url.clone(),
            )),
            Box::new(GeminiProvider::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            )),
        ];
        Self::new(providers, GenerationOptions::default(), config.provider_timeout)
    }

    /// Name of the provider that would be tried first, if any.
    pub fn active_provider(&self) -> Option<&str> {
        self.providers
            .iter()
            .find(|p| p.is_configured())
            .map(|p| p.name())
    }

    /// "Provider model" label for the first configured provider.
    pub fn active_label(&self) -> Option<String> {
        self.providers
            .iter()
            .find(|p| p.is_configured())
            .map(|p| format!("{} {}", p.name(), p.model()))
    }

    /// Produce a reply. Never fails: provider errors are logged and the
    /// keyword responder answers when nothing else does.
    pub async fn resolve(&self, message: &str) -> String {
        for provider in self.providers.iter().filter(|p| p.is_configured()) {
            match self.attempt(&**provider, message).await {
                Ok(text) => {
                    info!("{} replied ({} chars)", provider.name(), text.len());
                    return text;
                }
                Err(e) => warn!("{} error: {e}", provider.name()),
            }
        }

        let category = fallback::categorize(message);
        info!("Using fallback response: {:?}", category);
        category.response().to_string()
    }

    async fn attempt(&self, provider: &dyn Provider, message: &str) -> Result<String, ProviderError> {
        let call = provider.invoke(SYSTEM_PROMPT, message, &self.options);
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| ProviderError::Timeout)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Reply(&'static str),
        Fail,
        Hang,
    }

    struct StubProvider {
        name: &'static str,
        configured: bool,
        behavior: Behavior,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn boxed(name: &'static str, configured: bool, behavior: Behavior) -> (Box<dyn Provider>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = Self {
                name,
                configured,
                behavior,
                calls: calls.clone(),
            };
            (Box::new(provider), calls)
        }
    }

    #[async_trait]
    impl Provider for StubProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn model(&self) -> &str {
            "stub-1"
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn invoke(
            &self,
            system_prompt: &str,
            _message: &str,
            options: &GenerationOptions,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(system_prompt, SYSTEM_PROMPT);
            assert_eq!(options.max_tokens, 400);
            match self.behavior {
                Behavior::Reply(text) => Ok(text.to_string()),
                Behavior::Fail => Err(ProviderError::Api {
                    status: 401,
                    body: "bad key".to_string(),
                }),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Ok("too late".to_string())
                }
            }
        }
    }

    fn router(providers: Vec<Box<dyn Provider>>) -> ResponseRouter {
        ResponseRouter::new(providers, GenerationOptions::default(), Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_primary_wins() {
        let (a, a_calls) = StubProvider::boxed("A", true, Behavior::Reply("from A"));
        let (b, b_calls) = StubProvider::boxed("B", true, Behavior::Reply("from B"));
        let router = router(vec![a, b]);

        assert_eq!(router.resolve("study tips").await, "from A");
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_wins_without_secondary() {
        let (a, _) = StubProvider::boxed("A", true, Behavior::Reply("from A"));
        let (b, _) = StubProvider::boxed("B", false, Behavior::Reply("from B"));
        assert_eq!(router(vec![a, b]).resolve("hi").await, "from A");
    }

    #[tokio::test]
    async fn test_failover_to_secondary() {
        let (a, a_calls) = StubProvider::boxed("A", true, Behavior::Fail);
        let (b, b_calls) = StubProvider::boxed("B", true, Behavior::Reply("from B"));
        let router = router(vec![a, b]);

        assert_eq!(router.resolve("hi").await, "from B");
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_skipped() {
        let (a, a_calls) = StubProvider::boxed("A", false, Behavior::Reply("from A"));
        let (b, _) = StubProvider::boxed("B", true, Behavior::Reply("from B"));
        let router = router(vec![a, b]);

        assert_eq!(router.resolve("hi").await, "from B");
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
        assert_eq!(router.active_provider(), Some("B"));
        assert_eq!(router.active_label().as_deref(), Some("B stub-1"));
    }

    #[tokio::test]
    async fn test_all_fail_uses_fallback() {
        let (a, _) = StubProvider::boxed("A", true, Behavior::Fail);
        let (b, _) = StubProvider::boxed("B", true, Behavior::Fail);
        let msg = "What business ideas for ₹5000?";
        assert_eq!(router(vec![a, b]).resolve(msg).await, fallback::classify(msg));
    }

    #[tokio::test]
    async fn test_no_providers_configured() {
        let (a, a_calls) = StubProvider::boxed("A", false, Behavior::Reply("from A"));
        let (b, b_calls) = StubProvider::boxed("B", false, Behavior::Reply("from B"));
        let router = router(vec![a, b]);

        for msg in ["help me make a study plan", "hello there", "", "STUDY TIPS"] {
            assert_eq!(router.resolve(msg).await, fallback::classify(msg));
        }
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
        assert_eq!(router.active_provider(), None);
        assert_eq!(router.active_label(), None);
    }

    #[tokio::test]
    async fn test_timeout_moves_on() {
        let (a, _) = StubProvider::boxed("A", true, Behavior::Hang);
        let (b, _) = StubProvider::boxed("B", true, Behavior::Reply("from B"));
        assert_eq!(router(vec![a, b]).resolve("hi").await, "from B");
    }

    #[tokio::test]
    async fn test_timeout_then_fallback() {
        let (a, _) = StubProvider::boxed("A", true, Behavior::Hang);
        assert_eq!(router(vec![a]).resolve("hello there").await, fallback::classify("hello there"));
    }

    #[tokio::test]
    async fn test_resolve_is_never_empty() {
        let router = router(Vec::new());
        for msg in ["", " ", "🤖", "plan"] {
            assert!(!router.resolve(msg).await.is_empty());
        }
    }

    #[test]
    fn test_from_config_order() {
        let config = Config::from_lookup(|name| match name {
            "BOT_TOKEN" => Some("1:abc".to_string()),
            "OPENAI_API_KEY" => Some("sk".to_string()),
            "GEMINI_API_KEY" => Some("g".to_string()),
            _ => None,
        })
        .unwrap();
        let router = ResponseRouter::from_config(&config);
        assert_eq!(router.active_provider(), Some("OpenAI"));
        assert_eq!(router.active_label().as_deref(), Some("OpenAI gpt-3.5-turbo"));
        assert_eq!(router.timeout, config.provider_timeout);

        let config = Config {
            openai_api_key: None,
            ..config
        };
        assert_eq!(ResponseRouter::from_config(&config).active_provider(), Some("Gemini"));
    }
}
