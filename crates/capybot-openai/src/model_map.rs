use std::borrow::Cow;

use capybot_core::model::Model;

/// Provider-side model id, or `None` if the model can't be addressed.
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Groq(groq_model) => Some(Cow::Borrowed(groq_model.id())),
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(custom.clone()),
    }
}

#[cfg(test)]
mod tests {
    use capybot_core::model::GroqModel;

    use super::*;

    #[test]
    fn maps_known_and_custom_models() {
        assert_eq!(
            map_model(&Model::Groq(GroqModel::Gemma2_9bIt)).as_deref(),
            Some("gemma2-9b-it")
        );
        assert_eq!(
            map_model(&Model::Custom("gpt-4o-mini".into())).as_deref(),
            Some("gpt-4o-mini")
        );
        assert_eq!(map_model(&Model::Custom(" ".into())), None);
    }
}
