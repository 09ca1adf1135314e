use serde::Deserialize;

use crate::error::AppError;
use crate::pricing::PricingProfile;

/// Capacity and pricing profile of one model
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelSpec {
    /// Catalog key; filled in from the map key when the catalog is parsed
    #[serde(skip)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    pub(crate) context_window: i64,
    pub(crate) tokens_per_word: f64,
    pub(crate) bytes_per_token: f64,
    pub(crate) bytes_per_character: f64,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) pricing: PricingProfile,
}

impl ModelSpec {
    pub(crate) fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// A spec is usable only with a positive context window and sane ratios.
    pub(crate) fn validate(&self) -> Result<(), AppError> {
        if self.context_window <= 0 {
            return Err(AppError::InvalidContextWindow {
                id: self.id.clone(),
                value: self.context_window,
            });
        }
        let ratios = [
            ("tokensPerWord", self.tokens_per_word),
            ("bytesPerToken", self.bytes_per_token),
            ("bytesPerCharacter", self.bytes_per_character),
            ("pricing.input", self.pricing.input),
            ("pricing.output", self.pricing.output),
            ("pricing.cachedInput", self.pricing.cached_input),
        ];
        for (field, value) in ratios {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::InvalidModelRatio {
                    id: self.id.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(context_window: i64) -> ModelSpec {
        ModelSpec {
            id: "test".to_string(),
            name: String::new(),
            context_window,
            tokens_per_word: 1.3,
            bytes_per_token: 4.0,
            bytes_per_character: 1.0,
            description: String::new(),
            pricing: PricingProfile::default(),
        }
    }

    #[test]
    fn display_name_falls_back_to_id() {
        assert_eq!(spec(1000).display_name(), "test");
    }

    #[test]
    fn validate_rejects_zero_and_negative_context() {
        assert!(spec(1000).validate().is_ok());
        assert!(matches!(
            spec(0).validate(),
            Err(AppError::InvalidContextWindow { value: 0, .. })
        ));
        assert!(spec(-5).validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_ratio() {
        let mut s = spec(1000);
        s.tokens_per_word = -1.0;
        let err = s.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model test has an invalid tokensPerWord (-1); it must be a non-negative number"
        );
    }

    #[test]
    fn deserializes_catalog_entry_without_pricing() {
        let spec: ModelSpec = serde_json::from_str(
            r#"{"name":"Tiny","contextWindow":4096,"tokensPerWord":1.5,"bytesPerToken":4,"bytesPerCharacter":2,"description":"d"}"#,
        )
        .unwrap();
        assert_eq!(spec.context_window, 4096);
        assert_eq!(spec.bytes_per_character, 2.0);
        assert_eq!(spec.pricing, PricingProfile::default());
    }
}
