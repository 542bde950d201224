use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TemplateFormProps {
    /// Template being edited. `None` creates a new one.
    #[prop_or_default]
    pub id: Option<String>,
}
