#[cfg(test)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::ai::{AiError, ModelClient};
    use crate::app::App;
    use crate::config::Config;
    use crate::event::EventFields;

    /// Model client that returns a canned reply and records every prompt
    pub struct FakeClient {
        reply: Result<String, String>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl FakeClient {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Arc::default(),
            }
        }

        /// Every call fails with a network error carrying `message`
        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Arc::default(),
            }
        }

        /// Shared handle to the prompts seen so far
        pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.prompts)
        }
    }

    impl ModelClient for FakeClient {
        fn name(&self) -> &str {
            "Fake"
        }

        fn model(&self) -> &str {
            "fake-model"
        }

        fn invoke(&self, prompt: &str) -> Result<String, AiError> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            self.reply.clone().map_err(|message| AiError::Network {
                provider: "Fake".to_string(),
                message,
            })
        }
    }

    pub fn sample_fields() -> EventFields {
        EventFields {
            title: "Game Night".to_string(),
            date_time: "Saturday 6pm".to_string(),
            street: "1 Main St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "78701".to_string(),
            country: "USA".to_string(),
            description: "Board games and snacks".to_string(),
        }
    }

    /// App with sample fields and no worker
    pub fn test_app() -> App {
        App::new(&Config::default(), &sample_fields(), Vec::new())
    }

    /// App whose worker answers with `client`
    pub fn app_with_client(client: FakeClient) -> App {
        App::with_client(
            &Config::default(),
            &sample_fields(),
            Vec::new(),
            Ok(Box::new(client)),
        )
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` into whatever has focus
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Poll the worker until the in-flight reply is handled
    ///
    /// Returns true if it finished before `timeout_ms`.
    pub fn wait_for_reply(app: &mut App, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.poll_ai();
            if app.awaiting.is_none() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        false
    }
}
