use crate::{Error, Result};
use std::collections::HashMap;

/// A static locale data pack: a language code plus the UI messages shipped
/// for it. Passed explicitly to the application at mount time rather than
/// published through global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    code: String,
    messages: HashMap<String, String>,
}

impl Locale {
    pub fn new(code: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            code: code.into(),
            messages,
        }
    }

    /// Resolves a configured locale code to a built-in pack.
    pub fn for_code(code: &str) -> Result<Self> {
        match code {
            "zh-CN" => Ok(zh_cn()),
            "en-US" => Ok(en_us()),
            other => Err(Error::bootstrap(format!("Unknown locale: {}", other))),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}

pub fn zh_cn() -> Locale {
    Locale::new(
        "zh-CN",
        HashMap::from([
            ("app.title".to_string(), "AI 代码生成".to_string()),
            ("generate.submit".to_string(), "生成代码".to_string()),
            ("generate.failed".to_string(), "生成失败".to_string()),
        ]),
    )
}

pub fn en_us() -> Locale {
    Locale::new(
        "en-US",
        HashMap::from([
            ("app.title".to_string(), "AI Code Generation".to_string()),
            ("generate.submit".to_string(), "Generate code".to_string()),
            ("generate.failed".to_string(), "Generation failed".to_string()),
        ]),
    )
}
