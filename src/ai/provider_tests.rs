//! Tests for the AI provider abstraction

use super::*;
use proptest::prelude::*;

#[test]
fn test_ai_error_display() {
    let err = AiError::NotConfigured {
        provider: "Ollama".to_string(),
        message: "test message".to_string(),
    };
    assert_eq!(format!("{}", err), "[Ollama] AI not configured: test message");

    let err = AiError::Network {
        provider: "Ollama".to_string(),
        message: "connection failed".to_string(),
    };
    assert_eq!(format!("{}", err), "[Ollama] Network error: connection failed");

    let err = AiError::Api {
        provider: "Ollama".to_string(),
        code: 404,
        message: "model 'llama9' not found".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "[Ollama] API error (404): model 'llama9' not found"
    );

    let err = AiError::Parse {
        provider: "Ollama".to_string(),
        message: "invalid json".to_string(),
    };
    assert_eq!(format!("{}", err), "[Ollama] Parse error: invalid json");
}

#[test]
fn test_from_config_default_is_ollama() {
    let provider = AiProvider::from_config(&AiConfig::default()).unwrap();

    assert!(matches!(provider, AiProvider::Ollama(_)));
    assert_eq!(provider.name(), "Ollama");
    assert_eq!(provider.model(), "llama3.2");
}

#[test]
fn test_from_config_empty_model_is_not_configured() {
    let config = AiConfig {
        model: "  ".to_string(),
        ..AiConfig::default()
    };

    match AiProvider::from_config(&config) {
        Err(AiError::NotConfigured { message, .. }) => assert!(message.contains("model")),
        other => panic!("expected NotConfigured, got {:?}", other),
    }
}

#[test]
fn test_from_config_empty_host_is_not_configured() {
    let config = AiConfig {
        host: String::new(),
        ..AiConfig::default()
    };

    match AiProvider::from_config(&config) {
        Err(AiError::NotConfigured { message, .. }) => assert!(message.contains("host")),
        other => panic!("expected NotConfigured, got {:?}", other),
    }
}

// *For any* AiError variant with any provider name and message, the Display
// output starts with the provider name in square brackets.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_error_display_includes_provider_in_brackets(
        provider in "[A-Za-z][A-Za-z0-9_-]{2,20}",
        message in "[a-zA-Z0-9 .,!?_-]{1,100}",
        code in 100u16..600u16,
    ) {
        let errors = vec![
            AiError::NotConfigured { provider: provider.clone(), message: message.clone() },
            AiError::Network { provider: provider.clone(), message: message.clone() },
            AiError::Api { provider: provider.clone(), code, message: message.clone() },
            AiError::Parse { provider: provider.clone(), message: message.clone() },
        ];

        for err in errors {
            let display = format!("{}", err);
            prop_assert!(
                display.starts_with(&format!("[{}]", provider)),
                "display should start with [{}], got: {}",
                provider,
                display
            );
            prop_assert!(display.contains(&message));
        }
    }

    #[test]
    fn prop_from_config_keeps_model(model in "[a-z0-9.:-]{3,30}") {
        let config = AiConfig { model: model.clone(), ..AiConfig::default() };
        let provider = AiProvider::from_config(&config).unwrap();
        prop_assert_eq!(provider.model(), model.as_str());
    }
}
